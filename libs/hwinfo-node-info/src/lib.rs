#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Hardware Information Library
//!
//! This library collects a hardware report for the host where the code is
//! executed. It collects:
//! - CPU information (model, vendor, cores, threads, frequency, SSE flags)
//! - Memory modules, decoded from SMBIOS memory device structures
//!
//! Every component carries its own status (`success`, `partial` or `failed`)
//! together with the diagnostic messages that explain any degradation.

mod cpu_collector;
mod cpuinfo;
mod memory_collector;

pub mod dmi_source;
pub mod error;
pub mod model;
pub mod status;

mod collector;

pub use collector::HardwareInfoCollector;
pub use cpu_collector::CpuCollector;
pub use dmi_source::{DEFAULT_DMI_ENTRIES_DIR, DmiSource, SysfsDmiSource};
pub use error::{DmiSourceError, NodeInfoError};
pub use memory_collector::MemoryCollector;
pub use model::*;
pub use status::{ComponentStatus, StatusKind};
