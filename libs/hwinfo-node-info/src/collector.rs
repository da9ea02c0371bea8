use crate::cpu_collector::CpuCollector;
use crate::dmi_source::{DmiSource, SysfsDmiSource};
use crate::memory_collector::MemoryCollector;
use crate::model::{Component, CpuInfo, HardwareReport, MemoryInfo};
use std::sync::Arc;

/// Main collector for the hardware report
pub struct HardwareInfoCollector {
    cpu_collector: Arc<CpuCollector>,
    memory_collector: Arc<MemoryCollector>,
}

impl HardwareInfoCollector {
    /// Create a collector reading memory devices from the given DMI source
    #[must_use]
    pub fn new(source: Arc<dyn DmiSource>) -> Self {
        Self {
            cpu_collector: Arc::new(CpuCollector::new()),
            memory_collector: Arc::new(MemoryCollector::new(source)),
        }
    }

    /// Collect CPU information
    #[must_use]
    pub fn collect_cpu(&self) -> CpuInfo {
        self.cpu_collector.collect()
    }

    /// Collect installed memory modules
    #[must_use]
    pub fn collect_memory(&self) -> MemoryInfo {
        self.memory_collector.collect()
    }

    /// Collect the requested components. Components not listed stay empty.
    #[must_use]
    pub fn collect(&self, components: &[Component]) -> HardwareReport {
        let wants = |component| components.contains(&component);

        let cpu = wants(Component::Cpu).then(|| self.collect_cpu());
        let memory = wants(Component::Memory).then(|| self.collect_memory());

        tracing::info!(
            cpu = ?cpu.as_ref().map(|c| c.status.kind),
            memory = ?memory.as_ref().map(|m| m.status.kind),
            "Hardware report collected"
        );

        HardwareReport {
            cpu,
            memory,
            collected_at: chrono::Utc::now(),
        }
    }

    /// Collect every supported component
    #[must_use]
    pub fn collect_all(&self) -> HardwareReport {
        self.collect(&Component::ALL)
    }
}

impl Default for HardwareInfoCollector {
    fn default() -> Self {
        Self::new(Arc::new(SysfsDmiSource::default()))
    }
}
