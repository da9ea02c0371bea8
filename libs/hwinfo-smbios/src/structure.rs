//! Bounds-checked view over one raw SMBIOS structure.
//!
//! Every structure starts with a 4-byte header:
//!
//! | Offset | Width | Meaning |
//! |--------|-------|---------------------------------------|
//! | 0x00   | 1     | Structure type                        |
//! | 0x01   | 1     | Length of the formatted area          |
//! | 0x02   | 2     | Handle (little-endian)                |
//!
//! The formatted area is followed by the string set, which is referenced by
//! 1-based indices stored in the formatted area.

use crate::error::{DecodeError, FieldError};
use crate::strings::StringTable;

/// Size of the header shared by all structure types
pub const HEADER_LEN: usize = 4;

/// A raw structure whose header has been validated.
///
/// Field reads are confined to the formatted area; bytes belonging to the
/// string set are never interpreted as fixed fields.
#[derive(Debug, Clone, Copy)]
pub struct RawStructure<'a> {
    bytes: &'a [u8],
    formatted_len: usize,
}

impl<'a> RawStructure<'a> {
    /// Validate the header of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TooShort`] if the buffer cannot hold the header and
    /// [`DecodeError::InvalidLength`] if the declared formatted length is smaller
    /// than the header or larger than the buffer.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        let Some(&length) = bytes.get(1).filter(|_| bytes.len() >= HEADER_LEN) else {
            return Err(DecodeError::TooShort { len: bytes.len() });
        };

        let formatted_len = usize::from(length);
        if formatted_len < HEADER_LEN || formatted_len > bytes.len() {
            return Err(DecodeError::InvalidLength {
                length,
                len: bytes.len(),
            });
        }

        Ok(Self {
            bytes,
            formatted_len,
        })
    }

    /// Structure type byte (17 for memory devices)
    #[must_use]
    pub fn structure_type(&self) -> u8 {
        self.bytes[0]
    }

    #[must_use]
    pub fn handle(&self) -> u16 {
        u16::from_le_bytes([self.bytes[2], self.bytes[3]])
    }

    /// The complete structure, string set included
    #[must_use]
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[must_use]
    pub fn formatted_len(&self) -> usize {
        self.formatted_len
    }

    /// String set following the formatted area
    #[must_use]
    pub fn strings(&self) -> StringTable<'a> {
        StringTable::new(&self.bytes[self.formatted_len..])
    }

    /// # Errors
    ///
    /// Returns [`FieldError::Truncated`] if `offset` is outside the formatted area.
    pub fn read_u8(&self, offset: usize) -> Result<u8, FieldError> {
        let field = self.field(offset, 1)?;
        Ok(field[0])
    }

    /// Read a little-endian `u16`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Truncated`] if the field is not fully contained in
    /// the formatted area.
    pub fn read_u16(&self, offset: usize) -> Result<u16, FieldError> {
        let field = self.field(offset, 2)?;
        Ok(u16::from_le_bytes([field[0], field[1]]))
    }

    /// Read a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::Truncated`] if the field is not fully contained in
    /// the formatted area.
    pub fn read_u32(&self, offset: usize) -> Result<u32, FieldError> {
        let field = self.field(offset, 4)?;
        Ok(u32::from_le_bytes([field[0], field[1], field[2], field[3]]))
    }

    fn field(&self, offset: usize, width: usize) -> Result<&'a [u8], FieldError> {
        offset
            .checked_add(width)
            .filter(|end| *end <= self.formatted_len)
            .and_then(|end| self.bytes.get(offset..end))
            .ok_or(FieldError::Truncated {
                offset,
                width,
                formatted_len: self.formatted_len,
            })
    }
}
