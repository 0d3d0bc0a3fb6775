//! C ABI 匯出，供宿主行程以動態庫方式載入（例如 ctypes `CDLL(...).add()`）。

use crate::core::global;
use std::os::raw::c_int;
use std::panic;

/// 抽兩個亂數相加並輸出，回傳結果。不做時間播種：亂數狀態由宿主控制。
/// 內部 panic 不會越過 FFI 邊界，會回傳 -1。
#[no_mangle]
pub extern "C" fn add() -> c_int {
    panic::catch_unwind(|| global::compute_and_emit().as_c_int()).unwrap_or(-1)
}

/// 宿主重新播種用
#[no_mangle]
pub extern "C" fn add_seed(seed: u64) {
    let _ = panic::catch_unwind(|| global::seed(seed));
}
