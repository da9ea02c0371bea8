/// Errors that prevent a structure from being decoded at all
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("structure is {len} bytes, shorter than the 4-byte header")]
    TooShort { len: usize },

    #[error("formatted area length {length} is invalid for a {len}-byte structure")]
    InvalidLength { length: u8, len: usize },
}

/// Errors confined to a single field of a structure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error(
        "{width}-byte field at offset {offset:#04x} lies outside the {formatted_len}-byte formatted area"
    )]
    Truncated {
        offset: usize,
        width: usize,
        formatted_len: usize,
    },

    #[error("string index {index} out of range (string table has {count} entries)")]
    StringIndexOutOfRange { index: u8, count: usize },

    #[error("unrecognized memory type code {0:#04x}")]
    UnknownMemoryType(u8),

    #[error("size is reported as unknown (0xFFFF)")]
    UnknownSize,
}
