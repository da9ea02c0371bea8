use serde::{Serialize, Serializer};
use std::fmt;

/// Memory type reported in a Memory Device structure (offset 0x12).
///
/// Codes follow the SMBIOS Memory Device Type table. Codes 0x15 to 0x17 are
/// reserved and, like anything past the end of the table, have no variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryType {
    Other,
    Unknown,
    Dram,
    Edram,
    Vram,
    Sram,
    Ram,
    Rom,
    Flash,
    Eeprom,
    Feprom,
    Eprom,
    Cdram,
    Ram3D,
    Sdram,
    Sgram,
    Rdram,
    Ddr,
    Ddr2,
    Ddr2FbDimm,
    Ddr3,
    Fbd2,
    Ddr4,
    LpDdr,
    LpDdr2,
    LpDdr3,
    LpDdr4,
    LogicalNonVolatile,
    Hbm,
    Hbm2,
    Ddr5,
    LpDdr5,
    Hbm3,
}

impl MemoryType {
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0x01 => Self::Other,
            0x02 => Self::Unknown,
            0x03 => Self::Dram,
            0x04 => Self::Edram,
            0x05 => Self::Vram,
            0x06 => Self::Sram,
            0x07 => Self::Ram,
            0x08 => Self::Rom,
            0x09 => Self::Flash,
            0x0A => Self::Eeprom,
            0x0B => Self::Feprom,
            0x0C => Self::Eprom,
            0x0D => Self::Cdram,
            0x0E => Self::Ram3D,
            0x0F => Self::Sdram,
            0x10 => Self::Sgram,
            0x11 => Self::Rdram,
            0x12 => Self::Ddr,
            0x13 => Self::Ddr2,
            0x14 => Self::Ddr2FbDimm,
            0x18 => Self::Ddr3,
            0x19 => Self::Fbd2,
            0x1A => Self::Ddr4,
            0x1B => Self::LpDdr,
            0x1C => Self::LpDdr2,
            0x1D => Self::LpDdr3,
            0x1E => Self::LpDdr4,
            0x1F => Self::LogicalNonVolatile,
            0x20 => Self::Hbm,
            0x21 => Self::Hbm2,
            0x22 => Self::Ddr5,
            0x23 => Self::LpDdr5,
            0x24 => Self::Hbm3,
            _ => return None,
        })
    }

    /// Label used in reports, e.g. `"DDR4"`
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Other => "Other",
            Self::Unknown => "Unknown",
            Self::Dram => "DRAM",
            Self::Edram => "EDRAM",
            Self::Vram => "VRAM",
            Self::Sram => "SRAM",
            Self::Ram => "RAM",
            Self::Rom => "ROM",
            Self::Flash => "Flash",
            Self::Eeprom => "EEPROM",
            Self::Feprom => "FEPROM",
            Self::Eprom => "EPROM",
            Self::Cdram => "CDRAM",
            Self::Ram3D => "3DRAM",
            Self::Sdram => "SDRAM",
            Self::Sgram => "SGRAM",
            Self::Rdram => "RDRAM",
            Self::Ddr => "DDR",
            Self::Ddr2 => "DDR2",
            Self::Ddr2FbDimm => "DDR2 FB-DIMM",
            Self::Ddr3 => "DDR3",
            Self::Fbd2 => "FBD2",
            Self::Ddr4 => "DDR4",
            Self::LpDdr => "LPDDR",
            Self::LpDdr2 => "LPDDR2",
            Self::LpDdr3 => "LPDDR3",
            Self::LpDdr4 => "LPDDR4",
            Self::LogicalNonVolatile => "Logical non-volatile device",
            Self::Hbm => "HBM",
            Self::Hbm2 => "HBM2",
            Self::Ddr5 => "DDR5",
            Self::LpDdr5 => "LPDDR5",
            Self::Hbm3 => "HBM3",
        }
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for MemoryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
