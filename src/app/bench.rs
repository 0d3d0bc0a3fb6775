//! 比較三種呼叫方式的耗時：行程內呼叫、啟動執行檔、啟動執行檔後讀回結果檔。

use crate::adapters::FileSink;
use crate::core::{global, GeneratorSettings};
use crate::domain::model::{Sum, DEFAULT_OUTPUT_FILE, RESULT_LABEL};
use crate::utils::error::Result;
use crate::utils::monitor::ProcessClock;
use chrono::{DateTime, Utc};
use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchMethod {
    Library,
    Subprocess,
    SubprocessRead,
}

impl BenchMethod {
    pub fn name(&self) -> &'static str {
        match self {
            BenchMethod::Library => "Library",
            BenchMethod::Subprocess => "Subprocess",
            BenchMethod::SubprocessRead => "Subprocess + Read",
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchResult {
    pub method: BenchMethod,
    pub iterations: usize,
    /// 系統時鐘差
    pub wall_time: Duration,
    /// 單調時鐘差
    pub elapsed: Duration,
    /// 本行程的 CPU 時間，不含子行程；取不到時為 None
    pub process_time: Option<Duration>,
    /// 結果在範圍內且各輸出管道一致的次數
    pub valid: usize,
}

impl BenchResult {
    pub fn per_call(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        self.elapsed.div_f64(self.iterations as f64)
    }
}

struct Stopwatch {
    wall: DateTime<Utc>,
    perf: Instant,
    cpu: Option<Duration>,
    clock: ProcessClock,
}

impl Stopwatch {
    fn start() -> Self {
        let mut clock = ProcessClock::new();
        let cpu = clock.cpu_time();
        Self {
            wall: Utc::now(),
            perf: Instant::now(),
            cpu,
            clock,
        }
    }

    fn finish(mut self, method: BenchMethod, iterations: usize, valid: usize) -> BenchResult {
        let elapsed = self.perf.elapsed();
        let wall_time = (Utc::now() - self.wall).to_std().unwrap_or_default();
        let process_time = match (self.cpu, self.clock.cpu_time()) {
            (Some(start), Some(end)) => Some(end.saturating_sub(start)),
            _ => None,
        };

        BenchResult {
            method,
            iterations,
            wall_time,
            elapsed,
            process_time,
            valid,
        }
    }
}

/// 解析 `Result: N` 行
pub fn parse_result_line(stdout: &str) -> Option<u32> {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(RESULT_LABEL))
        .and_then(|value| value.trim().parse().ok())
}

pub struct Benchmark {
    exe: PathBuf,
    workdir: PathBuf,
    iterations: usize,
}

impl Benchmark {
    pub fn new(exe: impl Into<PathBuf>, workdir: impl Into<PathBuf>, iterations: usize) -> Self {
        Self {
            exe: exe.into(),
            workdir: workdir.into(),
            iterations,
        }
    }

    fn output_file(&self) -> PathBuf {
        self.workdir.join(DEFAULT_OUTPUT_FILE)
    }

    pub fn run(&self, method: BenchMethod) -> Result<BenchResult> {
        tracing::info!("⏱️ Running {} test ({} iterations)...", method.name(), self.iterations);
        match method {
            BenchMethod::Library => Ok(self.run_library()),
            BenchMethod::Subprocess => self.run_subprocess(false),
            BenchMethod::SubprocessRead => self.run_subprocess(true),
        }
    }

    fn run_library(&self) -> BenchResult {
        let output_file = self.output_file();
        let stopwatch = Stopwatch::start();
        let mut valid = 0;

        for _ in 0..self.iterations {
            let mut out = Vec::new();
            let sum = global::compute_and_emit_to(
                GeneratorSettings::default(),
                FileSink::new(&output_file),
                &mut out,
            );

            let printed = parse_result_line(&String::from_utf8_lossy(&out));
            if Sum::is_in_range(sum.value())
                && printed == Some(sum.value())
                && file_matches(&output_file, sum.value())
            {
                valid += 1;
            }
        }

        stopwatch.finish(BenchMethod::Library, self.iterations, valid)
    }

    fn run_subprocess(&self, read_back: bool) -> Result<BenchResult> {
        let output_file = self.output_file();
        let stopwatch = Stopwatch::start();
        let mut valid = 0;

        for _ in 0..self.iterations {
            if read_back {
                // 先刪除結果檔，避免讀到上一次的內容
                match fs::remove_file(&output_file) {
                    Ok(()) => {}
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => tracing::debug!("Could not remove {}: {}", output_file.display(), e),
                }
            }

            let output = Command::new(&self.exe)
                .current_dir(&self.workdir)
                .output()?;

            let printed = parse_result_line(&String::from_utf8_lossy(&output.stdout));
            let consistent = match printed {
                Some(value) if Sum::is_in_range(value) => {
                    exit_code_matches(output.status.code(), value)
                        && (!read_back || file_matches(&output_file, value))
                }
                _ => false,
            };
            if consistent {
                valid += 1;
            }
        }

        let method = if read_back {
            BenchMethod::SubprocessRead
        } else {
            BenchMethod::Subprocess
        };

        Ok(stopwatch.finish(method, self.iterations, valid))
    }
}

fn file_matches(path: &Path, value: u32) -> bool {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| content.parse::<u32>().ok())
        == Some(value)
}

#[cfg(unix)]
fn exit_code_matches(code: Option<i32>, value: u32) -> bool {
    code == Some((value % 256) as i32)
}

#[cfg(not(unix))]
fn exit_code_matches(code: Option<i32>, value: u32) -> bool {
    code == Some(value as i32)
}

pub fn format_summary(results: &[BenchResult]) -> String {
    let mut summary = String::from("--- Final Results ---\n");
    for result in results {
        let _ = writeln!(summary, "{}:", result.method.name());
        let _ = writeln!(summary, "  time:         {:.4}s", result.wall_time.as_secs_f64());
        let _ = writeln!(summary, "  perf_counter: {:.4}s", result.elapsed.as_secs_f64());
        match result.process_time {
            Some(cpu) => {
                let _ = writeln!(summary, "  process_time: {:.4}s", cpu.as_secs_f64());
            }
            None => {
                let _ = writeln!(summary, "  process_time: n/a");
            }
        }
        let _ = writeln!(
            summary,
            "  per call:     {:.4}ms",
            result.per_call().as_secs_f64() * 1000.0
        );
        let _ = writeln!(summary, "  valid:        {}/{}", result.valid, result.iterations);
    }
    summary
}
