use std::time::Duration;
use sysinfo::{Pid, System};

/// 讀取目前行程累計的 CPU 時間（對應 Python 的 `time.process_time()`）
pub struct ProcessClock {
    system: System,
    pid: Option<Pid>,
}

impl ProcessClock {
    pub fn new() -> Self {
        let pid = match sysinfo::get_current_pid() {
            Ok(pid) => Some(pid),
            Err(e) => {
                tracing::warn!("⚠️ Cannot resolve current PID, CPU time disabled: {}", e);
                None
            }
        };

        Self {
            system: System::new(),
            pid,
        }
    }

    /// 平台不支援或取不到行程時回傳 None
    pub fn cpu_time(&mut self) -> Option<Duration> {
        let pid = self.pid?;
        self.system.refresh_all();
        let process = self.system.process(pid)?;
        Some(Duration::from_millis(process.accumulated_cpu_time()))
    }
}

impl Default for ProcessClock {
    fn default() -> Self {
        Self::new()
    }
}
