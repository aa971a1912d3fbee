#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{Pid, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct ResourceSnapshot {
    pub cpu_percent: f32,
    pub memory_mb: u64,
    pub peak_memory_mb: u64,
    pub elapsed: Duration,
}

/// Tracks process resource usage across the run phases. Large bounds make the
/// prime and perfect scans genuinely expensive, so the timings are worth
/// logging when asked for.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Mutex<System>,
    pid: Pid,
    started: Instant,
    peak_memory: Mutex<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_all();
        let pid = sysinfo::get_current_pid().expect("Failed to get current PID");

        system.refresh_all();

        Self {
            system: Mutex::new(system),
            pid,
            started: Instant::now(),
            peak_memory: Mutex::new(0),
            enabled,
        }
    }

    pub fn snapshot(&self) -> Option<ResourceSnapshot> {
        if !self.enabled {
            return None;
        }

        let mut system = self.system.lock().ok()?;
        system.refresh_all();

        let process = system.process(self.pid)?;
        let memory_mb = process.memory() / 1024 / 1024;

        let mut peak = self.peak_memory.lock().ok()?;
        if memory_mb > *peak {
            *peak = memory_mb;
        }

        Some(ResourceSnapshot {
            cpu_percent: process.cpu_usage(),
            memory_mb,
            peak_memory_mb: *peak,
            elapsed: self.started.elapsed(),
        })
    }

    pub fn log_phase(&self, phase: &str) {
        if let Some(snapshot) = self.snapshot() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, Memory: {}MB, Peak: {}MB, Time: {:?}",
                phase,
                snapshot.cpu_percent,
                snapshot.memory_mb,
                snapshot.peak_memory_mb,
                snapshot.elapsed
            );
        }
    }

    pub fn log_summary(&self) {
        if let Some(snapshot) = self.snapshot() {
            tracing::info!(
                "📊 Run summary - Total Time: {:?}, Peak Memory: {}MB",
                snapshot.elapsed,
                snapshot.peak_memory_mb
            );
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

// No-op stand-in when the CLI feature (and sysinfo) is absent.
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_phase(&self, _phase: &str) {}

    pub fn log_summary(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
