#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! SMBIOS Structure Decoding
//!
//! This library decodes raw SMBIOS/DMI structures as exposed by platform
//! firmware tables. It currently understands:
//! - The common structure header and the trailing string set
//! - Memory Device structures (type 17), reduced to a [`MemoryModuleDescriptor`]
//!
//! Decoding is pure: no I/O happens here. Callers obtain raw structure bytes
//! (for example from `/sys/firmware/dmi/entries/17-*/raw`) and hand them to
//! [`decode_memory_device`].

pub mod diagnostic;
pub mod error;
pub mod memory_device;
pub mod memory_type;
pub mod structure;
pub mod strings;

pub use diagnostic::{Diagnostic, MemoryField};
pub use error::{DecodeError, FieldError};
pub use memory_device::{
    Capacity, DecodedMemoryDevice, MemoryModuleDescriptor, MemorySlot, UNKNOWN_LOCATOR,
    decode as decode_memory_device,
};
pub use memory_type::MemoryType;
pub use strings::StringTable;
pub use structure::RawStructure;
