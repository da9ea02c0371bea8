use crate::cpuinfo::{CpuFeatures, DEFAULT_CPUINFO_PATH};
use crate::model::CpuInfo;
use crate::status::ComponentStatus;
use std::path::PathBuf;
use sysinfo::{CpuRefreshKind, RefreshKind, System};

/// Collects processor information for the current host
pub struct CpuCollector {
    system: std::sync::Mutex<System>,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    cpuinfo_path: PathBuf,
}

impl CpuCollector {
    #[must_use]
    pub fn new() -> Self {
        Self::with_cpuinfo_path(DEFAULT_CPUINFO_PATH)
    }

    /// Create a collector reading processor features from the given listing
    /// instead of `/proc/cpuinfo`
    #[must_use]
    pub fn with_cpuinfo_path(path: impl Into<PathBuf>) -> Self {
        let system =
            System::new_with_specifics(RefreshKind::nothing().with_cpu(CpuRefreshKind::everything()));
        Self {
            system: std::sync::Mutex::new(system),
            cpuinfo_path: path.into(),
        }
    }

    /// Collect current CPU information
    #[must_use]
    pub fn collect(&self) -> CpuInfo {
        let mut sys = match self.system.lock() {
            Ok(sys) => sys,
            Err(e) => {
                tracing::error!(error = %e, "CPU collector state is poisoned");
                return CpuInfo::failed(e.to_string());
            }
        };

        sys.refresh_cpu_all();

        let cpus = sys.cpus();
        let Some(first) = cpus.first() else {
            tracing::error!("No processors reported by the platform");
            return CpuInfo::failed("No processors reported by the platform");
        };

        let mut status = ComponentStatus::success();

        let name = non_empty(first.brand());
        if name.is_none() {
            status.degrade("Processor brand string is unavailable");
        }
        let vendor = non_empty(first.vendor_id());

        // CPU count is always small, safe to truncate
        let threads = u32::try_from(cpus.len()).unwrap_or(u32::MAX);
        let cores = System::physical_core_count().map(|n| u32::try_from(n).unwrap_or(u32::MAX));
        if cores.is_none() {
            status.degrade("Physical core count is unavailable");
        }

        let frequency_mhz = cpus
            .iter()
            .map(sysinfo::Cpu::frequency)
            .sum::<u64>()
            .checked_div(u64::from(threads))
            .filter(|mhz| *mhz != 0);

        let features = self.features(&mut status);

        for message in &status.messages {
            tracing::warn!(message = %message, "CPU information degraded");
        }
        tracing::debug!(threads, ?cores, ?frequency_mhz, "Collected CPU information");

        CpuInfo {
            status,
            name,
            vendor,
            architecture: std::env::consts::ARCH.to_owned(),
            cores,
            threads: Some(threads),
            frequency_mhz,
            bitness: features.bitness,
            arch_version: features.arch_version,
            sse_flags: features.sse_flags,
        }
    }

    #[cfg(target_os = "linux")]
    fn features(&self, status: &mut ComponentStatus) -> CpuFeatures {
        let features = match CpuFeatures::read(&self.cpuinfo_path) {
            Ok(features) => features,
            Err(e) => {
                status.degrade(format!(
                    "Unable to read {}: {e}",
                    self.cpuinfo_path.display()
                ));
                return CpuFeatures::default();
            }
        };

        if features.has_x86_flags {
            if features.sse_flags.is_empty() {
                status.degrade("No SSE flags found in the processor flags");
            }
        } else if features.arch_version.is_none() {
            status.degrade("Processor architecture version is unavailable");
        }

        features
    }

    #[cfg(not(target_os = "linux"))]
    #[allow(clippy::unused_self)]
    fn features(&self, _status: &mut ComponentStatus) -> CpuFeatures {
        CpuFeatures::default()
    }
}

impl Default for CpuCollector {
    fn default() -> Self {
        Self::new()
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}
