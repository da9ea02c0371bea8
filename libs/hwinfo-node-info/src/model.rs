use crate::error::NodeInfoError;
use crate::status::ComponentStatus;
use serde::{Deserialize, Serialize};

pub use hwinfo_smbios::{Capacity, MemoryModuleDescriptor as MemoryModuleInfo, MemorySlot};

/// Hardware component that can be collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Cpu,
    Memory,
}

impl Component {
    pub const ALL: [Self; 2] = [Self::Cpu, Self::Memory];
}

/// Hardware report for the current host
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HardwareReport {
    /// `None` when the component was not requested
    pub cpu: Option<CpuInfo>,
    /// `None` when the component was not requested
    pub memory: Option<MemoryInfo>,
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl HardwareReport {
    /// Render the report as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`NodeInfoError::Serialization`] if the report cannot be serialized.
    pub fn to_json(&self, pretty: bool) -> Result<String, NodeInfoError> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// CPU information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuInfo {
    pub status: ComponentStatus,
    pub name: Option<String>,
    pub vendor: Option<String>,
    pub architecture: String,
    /// Physical cores
    pub cores: Option<u32>,
    /// Logical processors
    pub threads: Option<u32>,
    /// Average current frequency across logical processors
    pub frequency_mhz: Option<u64>,
    /// 64 or 32 on x86, from the long mode flag
    pub bitness: Option<u8>,
    /// ARM architecture version; `None` on x86
    pub arch_version: Option<String>,
    /// Supported SSE extensions, e.g. `SSE4.2`
    pub sse_flags: Vec<String>,
}

impl CpuInfo {
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ComponentStatus::failed(message),
            name: None,
            vendor: None,
            architecture: std::env::consts::ARCH.to_owned(),
            cores: None,
            threads: None,
            frequency_mhz: None,
            bitness: None,
            arch_version: None,
            sse_flags: Vec::new(),
        }
    }
}

/// Installed memory modules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MemoryInfo {
    pub status: ComponentStatus,
    /// Modules in the order the platform enumerates them
    pub modules: Vec<MemoryModuleInfo>,
}

impl MemoryInfo {
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: ComponentStatus::failed(message),
            modules: Vec::new(),
        }
    }
}
