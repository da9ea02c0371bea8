//! Memory Device (type 17) decoding.
//!
//! Reference: DMTF DSP0134 (SMBIOS), section 7.18.
//!
//! Each field is decoded independently. A field that cannot be read is left
//! absent and reported as a [`Diagnostic`]; only a malformed structure header
//! aborts decoding.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::diagnostic::{Diagnostic, MemoryField};
use crate::error::{DecodeError, FieldError};
use crate::memory_type::MemoryType;
use crate::strings::StringTable;
use crate::structure::RawStructure;

/// Field offsets within the formatted area
pub mod offset {
    pub const TOTAL_WIDTH: usize = 0x08;
    pub const DATA_WIDTH: usize = 0x0A;
    pub const SIZE: usize = 0x0C;
    pub const DEVICE_LOCATOR: usize = 0x10;
    pub const BANK_LOCATOR: usize = 0x11;
    pub const MEMORY_TYPE: usize = 0x12;
    pub const SPEED: usize = 0x15;
    pub const MANUFACTURER: usize = 0x17;
    pub const PART_NUMBER: usize = 0x1A;
    pub const EXTENDED_SIZE: usize = 0x1C;
    pub const EXTENDED_SPEED: usize = 0x54;
}

const SIZE_UNKNOWN: u16 = 0xFFFF;
const SIZE_EXTENDED: u16 = 0x7FFF;
const SIZE_GRANULARITY_KB: u16 = 0x8000;
const SPEED_EXTENDED: u16 = 0xFFFF;
const WIDTH_UNKNOWN: u16 = 0xFFFF;

/// Label used for a slot locator that is not specified or cannot be resolved
pub const UNKNOWN_LOCATOR: &str = "Unknown";

/// Module capacity, tagged with the unit the firmware reported it in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capacity {
    Megabytes(u32),
    Kilobytes(u32),
}

impl Capacity {
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Self::Megabytes(value) | Self::Kilobytes(value) => value,
        }
    }

    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::Megabytes(_) => "MB",
            Self::Kilobytes(_) => "KB",
        }
    }
}

impl Serialize for Capacity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Capacity", 2)?;
        state.serialize_field("value", &self.value())?;
        state.serialize_field("unit", self.unit())?;
        state.end()
    }
}

/// Physical location of a module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemorySlot {
    /// Device locator, e.g. `"DIMM 0"` or `"ChannelA-DIMM0"`
    pub channel: String,
    /// Bank locator, e.g. `"BANK 0"` or `"P0 CHANNEL A"`
    pub bank: String,
}

/// Description of one installed memory module
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryModuleDescriptor {
    pub part_number: Option<String>,
    #[serde(rename = "type")]
    pub memory_type: Option<MemoryType>,
    pub capacity: Option<Capacity>,
    /// Speed in MT/s
    pub frequency_mhz: Option<u32>,
    pub slot: MemorySlot,
    pub supports_ecc: Option<bool>,
    pub manufacturer: Option<String>,
}

/// Result of decoding one memory device structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMemoryDevice {
    pub descriptor: MemoryModuleDescriptor,
    /// One entry per field that was left absent because it could not be decoded
    pub diagnostics: Vec<Diagnostic>,
}

/// Decode a raw memory device structure.
///
/// # Errors
///
/// Returns a [`DecodeError`] only when the structure header itself is
/// malformed. Field-level problems are reported in
/// [`DecodedMemoryDevice::diagnostics`].
pub fn decode(raw: &[u8]) -> Result<DecodedMemoryDevice, DecodeError> {
    let structure = RawStructure::parse(raw)?;
    let strings = structure.strings();
    let mut fields = Fields {
        structure,
        strings,
        diagnostics: Vec::new(),
    };

    let part_number = fields.part_number();
    let memory_type = fields.memory_type();
    let slot = MemorySlot {
        channel: fields.locator(MemoryField::DeviceLocator, offset::DEVICE_LOCATOR),
        bank: fields.locator(MemoryField::BankLocator, offset::BANK_LOCATOR),
    };
    let manufacturer = fields.string(MemoryField::Manufacturer, offset::MANUFACTURER);
    let capacity = fields.capacity();
    let supports_ecc = fields.supports_ecc();
    let frequency_mhz = fields.frequency_mhz();

    Ok(DecodedMemoryDevice {
        descriptor: MemoryModuleDescriptor {
            part_number,
            memory_type,
            capacity,
            frequency_mhz,
            slot,
            supports_ecc,
            manufacturer,
        },
        diagnostics: fields.diagnostics,
    })
}

struct Fields<'a> {
    structure: RawStructure<'a>,
    strings: StringTable<'a>,
    diagnostics: Vec<Diagnostic>,
}

impl Fields<'_> {
    fn keep<T>(&mut self, field: MemoryField, result: Result<T, FieldError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.diagnostics.push(Diagnostic { field, error });
                None
            }
        }
    }

    fn string(&mut self, field: MemoryField, offset: usize) -> Option<String> {
        let resolved = self
            .structure
            .read_u8(offset)
            .and_then(|index| self.strings.resolve(index));
        self.keep(field, resolved)
            .flatten()
            .filter(|value| !value.is_empty())
    }

    fn locator(&mut self, field: MemoryField, offset: usize) -> String {
        self.string(field, offset)
            .unwrap_or_else(|| UNKNOWN_LOCATOR.to_owned())
    }

    /// Part numbers are only reported for structures mentioning "DIMM"
    /// anywhere in their bytes.
    fn part_number(&mut self) -> Option<String> {
        let mentions_dimm = self
            .structure
            .bytes()
            .windows(4)
            .any(|window| window.eq_ignore_ascii_case(b"DIMM"));
        if !mentions_dimm {
            return None;
        }
        self.string(MemoryField::PartNumber, offset::PART_NUMBER)
    }

    fn memory_type(&mut self) -> Option<MemoryType> {
        let resolved = self.structure.read_u8(offset::MEMORY_TYPE).and_then(|code| {
            MemoryType::from_code(code).ok_or(FieldError::UnknownMemoryType(code))
        });
        self.keep(MemoryField::MemoryType, resolved)
    }

    fn capacity(&mut self) -> Option<Capacity> {
        let resolved = self.structure.read_u16(offset::SIZE).and_then(|size| match size {
            SIZE_UNKNOWN => Err(FieldError::UnknownSize),
            SIZE_EXTENDED => self
                .structure
                .read_u32(offset::EXTENDED_SIZE)
                .map(Capacity::Megabytes),
            _ if size & SIZE_GRANULARITY_KB == 0 => Ok(Capacity::Megabytes(u32::from(size))),
            // The granularity bit is kept in the reported kilobyte count.
            _ => Ok(Capacity::Kilobytes(u32::from(size))),
        });
        self.keep(MemoryField::Capacity, resolved)
    }

    fn supports_ecc(&mut self) -> Option<bool> {
        let total = self.structure.read_u16(offset::TOTAL_WIDTH);
        let total = self.keep(MemoryField::TotalWidth, total);
        let data = self.structure.read_u16(offset::DATA_WIDTH);
        let data = self.keep(MemoryField::DataWidth, data);

        let known = |width: u16| width != 0 && width != WIDTH_UNKNOWN;
        match (total, data) {
            (Some(total), Some(data)) if known(total) && known(data) => Some(total > data),
            _ => None,
        }
    }

    fn frequency_mhz(&mut self) -> Option<u32> {
        let resolved = self.structure.read_u16(offset::SPEED).and_then(|speed| {
            if speed == SPEED_EXTENDED {
                self.structure.read_u32(offset::EXTENDED_SPEED)
            } else {
                Ok(u32::from(speed))
            }
        });
        self.keep(MemoryField::Speed, resolved)
            .filter(|speed| *speed != 0)
    }
}
