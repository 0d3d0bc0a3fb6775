//! 行程共用的亂數狀態，兩個入口（動態庫匯出與執行檔）都委派到這裡。
//!
//! 未播種時使用固定種子 [`DEFAULT_SEED`]，因此同一個宿主行程內的呼叫序列可重現。
//! 每次 [`compute_and_emit`] 呼叫都持有同一把鎖：多執行緒呼叫不會交錯抽取，
//! 也不會同時寫入結果檔案。

use crate::adapters::FileSink;
use crate::core::generator::{GeneratorSettings, SumGenerator};
use crate::domain::model::{Sum, DEFAULT_OUTPUT_FILE};
use crate::domain::ports::{RandomSource, SumSink};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

pub const DEFAULT_SEED: u64 = 1;

static GLOBAL_RNG: LazyLock<Mutex<StdRng>> =
    LazyLock::new(|| Mutex::new(StdRng::seed_from_u64(DEFAULT_SEED)));

static CALL_LOCK: Mutex<()> = Mutex::new(());

fn call_guard() -> MutexGuard<'static, ()> {
    CALL_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

fn rng() -> MutexGuard<'static, StdRng> {
    GLOBAL_RNG.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 重新播種
pub fn seed(seed: u64) {
    let _guard = call_guard();
    *rng() = StdRng::seed_from_u64(seed);
    tracing::debug!("🌱 Seeded generator with {}", seed);
}

/// 以目前的 Unix 時間（秒）播種，回傳使用的種子
pub fn seed_from_clock() -> u64 {
    let value = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or_default();
    seed(value);
    value
}

/// 從共用狀態抽取的 [`RandomSource`]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalRandom;

impl RandomSource for GlobalRandom {
    fn draw(&mut self, upper: u32) -> u32 {
        rng().random_range(0..=upper)
    }
}

/// 預設設定：標籤 `Result: `，結果寫入工作目錄下的 `gui.txt`
pub fn compute_and_emit() -> Sum {
    compute_and_emit_with(GeneratorSettings::default(), FileSink::new(DEFAULT_OUTPUT_FILE))
}

pub fn compute_and_emit_with<S: SumSink>(settings: GeneratorSettings, sink: S) -> Sum {
    let _guard = call_guard();
    SumGenerator::with_settings(GlobalRandom, sink, settings).compute_and_emit()
}

/// 同 [`compute_and_emit_with`]，結果行寫入 `out` 而不是 stdout
pub fn compute_and_emit_to<S: SumSink, W: Write>(
    settings: GeneratorSettings,
    sink: S,
    out: &mut W,
) -> Sum {
    let _guard = call_guard();
    SumGenerator::with_settings(GlobalRandom, sink, settings).compute_and_emit_to(out)
}
