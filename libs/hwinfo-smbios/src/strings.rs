use crate::error::FieldError;

/// The string set trailing an SMBIOS structure.
///
/// Strings are stored back to back, each terminated by a null byte, and the
/// set ends with an empty string (a double null). The formatted area refers to
/// them by 1-based index; index 0 means "not specified".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable<'a> {
    entries: Vec<&'a [u8]>,
}

impl<'a> StringTable<'a> {
    /// Split the string-set area of a structure into its entries
    #[must_use]
    pub fn new(area: &'a [u8]) -> Self {
        let entries = area
            .split(|&b| b == 0)
            .take_while(|entry| !entry.is_empty())
            .collect();
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a 1-based string index.
    ///
    /// Index 0 yields `Ok(None)`. Strings are decoded as Latin-1, so every
    /// byte maps to a character, and trailing whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::StringIndexOutOfRange`] when the index points past
    /// the last entry of the table.
    pub fn resolve(&self, index: u8) -> Result<Option<String>, FieldError> {
        let Some(position) = usize::from(index).checked_sub(1) else {
            return Ok(None);
        };

        let entry = self
            .entries
            .get(position)
            .ok_or(FieldError::StringIndexOutOfRange {
                index,
                count: self.entries.len(),
            })?;

        Ok(Some(latin1(entry).trim_end().to_owned()))
    }
}

fn latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
