#[cfg(feature = "cli")]
use std::cell::RefCell;
#[cfg(feature = "cli")]
use std::time::Instant;

#[cfg(feature = "cli")]
use sysinfo::{Pid, RefreshKind, System};

/// Per-stage resource snapshots for the load engine. The load path is
/// single-threaded, so interior mutability is enough.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: RefCell<System>,
    pid: Pid,
    start: Instant,
    peak_memory_mb: RefCell<u64>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        system.refresh_all();

        let pid = sysinfo::get_current_pid().expect("Failed to get current PID");

        Self {
            system: RefCell::new(system),
            pid,
            start: Instant::now(),
            peak_memory_mb: RefCell::new(0),
            enabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn log_stage(&self, stage: &str) {
        if let Some(sample) = self.sample() {
            tracing::info!(
                "{} - CPU: {:.1}%, Memory: {}MB (peak {}MB), Elapsed: {:?}",
                stage,
                sample.cpu_usage,
                sample.memory_mb,
                sample.peak_memory_mb,
                self.start.elapsed()
            );
        }
    }

    pub fn log_summary(&self) {
        if let Some(sample) = self.sample() {
            tracing::info!(
                "Load finished in {:?}, peak memory {}MB",
                self.start.elapsed(),
                sample.peak_memory_mb
            );
        }
    }

    fn sample(&self) -> Option<Sample> {
        if !self.enabled {
            return None;
        }

        let mut system = self.system.borrow_mut();
        system.refresh_all();

        let process = system.process(self.pid)?;
        let memory_mb = process.memory() / 1024 / 1024;

        let mut peak = self.peak_memory_mb.borrow_mut();
        if memory_mb > *peak {
            *peak = memory_mb;
        }

        Some(Sample {
            cpu_usage: process.cpu_usage(),
            memory_mb,
            peak_memory_mb: *peak,
        })
    }
}

#[cfg(feature = "cli")]
impl Default for SystemMonitor {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(feature = "cli")]
struct Sample {
    cpu_usage: f32,
    memory_mb: u64,
    peak_memory_mb: u64,
}

// No-op stand-in when sysinfo is not compiled in.
#[cfg(not(feature = "cli"))]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn is_enabled(&self) -> bool {
        false
    }

    pub fn log_stage(&self, _stage: &str) {}

    pub fn log_summary(&self) {}
}
