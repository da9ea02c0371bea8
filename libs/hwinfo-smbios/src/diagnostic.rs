use crate::error::FieldError;
use std::fmt;

/// Field of a memory module description that can degrade independently
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryField {
    PartNumber,
    MemoryType,
    DeviceLocator,
    BankLocator,
    Manufacturer,
    Capacity,
    TotalWidth,
    DataWidth,
    Speed,
}

impl MemoryField {
    /// Name of the field as it appears in reports
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PartNumber => "part_number",
            Self::MemoryType => "type",
            Self::DeviceLocator => "slot.channel",
            Self::BankLocator => "slot.bank",
            Self::Manufacturer => "manufacturer",
            Self::Capacity => "capacity",
            Self::TotalWidth => "total_width",
            Self::DataWidth => "data_width",
            Self::Speed => "frequency_mhz",
        }
    }
}

impl fmt::Display for MemoryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field that could not be decoded and was left absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub field: MemoryField,
    pub error: FieldError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}
