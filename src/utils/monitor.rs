#[cfg(feature = "cli")]
use std::sync::Mutex;
#[cfg(feature = "cli")]
use std::time::{Duration, Instant};
#[cfg(feature = "cli")]
use sysinfo::{RefreshKind, System};

#[cfg(feature = "cli")]
#[derive(Debug, Clone)]
pub struct SystemStats {
    pub cpu_count: usize,
    pub used_memory_mb: u64,
    pub memory_usage_percent: f32,
    pub stage_time: Duration,
    pub elapsed_time: Duration,
}

/// Host-wide figures, since the raster work happens in the GDAL children
/// rather than in this process.
#[cfg(feature = "cli")]
pub struct SystemMonitor {
    system: Mutex<System>,
    start_time: Instant,
    last_mark: Mutex<Instant>,
    enabled: bool,
}

#[cfg(feature = "cli")]
impl SystemMonitor {
    pub fn new(enabled: bool) -> Self {
        let system = if enabled {
            System::new_with_specifics(RefreshKind::everything())
        } else {
            System::new()
        };
        let now = Instant::now();

        Self {
            system: Mutex::new(system),
            start_time: now,
            last_mark: Mutex::new(now),
            enabled,
        }
    }

    pub fn get_stats(&self) -> Option<SystemStats> {
        if !self.enabled {
            return None;
        }

        let mut system = self.system.lock().ok()?;
        system.refresh_all();

        let used_mb = system.used_memory() / 1024 / 1024;
        let total_mb = system.total_memory() / 1024 / 1024;
        let memory_percent = if total_mb > 0 {
            (used_mb as f32 / total_mb as f32) * 100.0
        } else {
            0.0
        };

        let mut last_mark = self.last_mark.lock().ok()?;
        let stage_time = last_mark.elapsed();
        *last_mark = Instant::now();

        Some(SystemStats {
            cpu_count: system.cpus().len(),
            used_memory_mb: used_mb,
            memory_usage_percent: memory_percent,
            stage_time,
            elapsed_time: self.start_time.elapsed(),
        })
    }

    pub fn log_stats(&self, stage: &str) {
        if let Some(stats) = self.get_stats() {
            tracing::info!(
                "{} - CPUs: {}, Host memory: {}MB ({:.1}%), Stage: {:?}, Total: {:?}",
                stage,
                stats.cpu_count,
                stats.used_memory_mb,
                stats.memory_usage_percent,
                stats.stage_time,
                stats.elapsed_time
            );
        }
    }

    pub fn log_final_stats(&self) {
        if self.enabled {
            tracing::info!("Final Stats - Total Time: {:?}", self.start_time.elapsed());
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

#[cfg(not(feature = "cli"))]
#[derive(Default)]
pub struct SystemMonitor;

#[cfg(not(feature = "cli"))]
impl SystemMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log_stats(&self, _stage: &str) {}

    pub fn log_final_stats(&self) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_monitor_reports_nothing() {
        let monitor = SystemMonitor::new(false);
        assert!(!monitor.is_enabled());
        assert!(monitor.get_stats().is_none());
    }

    #[test]
    fn test_enabled_monitor_tracks_elapsed_time() {
        let monitor = SystemMonitor::new(true);
        let first = monitor.get_stats().unwrap();
        let second = monitor.get_stats().unwrap();
        assert!(second.elapsed_time >= first.elapsed_time);
    }
}
