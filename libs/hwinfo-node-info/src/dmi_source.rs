//! Access to raw DMI (SMBIOS) structures exposed by the platform.
//!
//! On Linux the kernel publishes one directory per structure under
//! `/sys/firmware/dmi/entries`, named `<type>-<instance>`, each with a `raw`
//! file holding the structure bytes (formatted area followed by the string
//! set). Reading `raw` usually requires root.

use crate::error::DmiSourceError;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory where Linux exposes DMI entries
pub const DEFAULT_DMI_ENTRIES_DIR: &str = "/sys/firmware/dmi/entries";

const MEMORY_DEVICE_PREFIX: &str = "17-";
const RAW_FILE: &str = "raw";

/// Supplier of raw memory device (type 17) structures
pub trait DmiSource: Send + Sync {
    /// Identifiers of all memory device entries, in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the entries cannot be listed at all.
    fn memory_device_entries(&self) -> Result<Vec<String>, DmiSourceError>;

    /// Raw bytes of one entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be read.
    fn read_raw(&self, entry: &str) -> Result<Vec<u8>, DmiSourceError>;
}

/// Reads DMI entries from a sysfs-style directory tree
#[derive(Debug, Clone)]
pub struct SysfsDmiSource {
    root: PathBuf,
}

impl SysfsDmiSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for SysfsDmiSource {
    fn default() -> Self {
        Self::new(DEFAULT_DMI_ENTRIES_DIR)
    }
}

impl DmiSource for SysfsDmiSource {
    fn memory_device_entries(&self) -> Result<Vec<String>, DmiSourceError> {
        if !self.root.is_dir() {
            return Err(DmiSourceError::Unavailable(self.root.clone()));
        }

        let dir = fs::read_dir(&self.root)
            .map_err(|e| DmiSourceError::from_io(self.root.clone(), e))?;

        let mut entries = Vec::new();
        for dir_entry in dir {
            let dir_entry = dir_entry.map_err(|e| DmiSourceError::from_io(self.root.clone(), e))?;
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            if name.starts_with(MEMORY_DEVICE_PREFIX) {
                entries.push(name);
            }
        }

        entries.sort_by(|a, b| compare_entries(a, b));
        tracing::debug!(
            root = %self.root.display(),
            count = entries.len(),
            "Listed memory device DMI entries"
        );
        Ok(entries)
    }

    fn read_raw(&self, entry: &str) -> Result<Vec<u8>, DmiSourceError> {
        let path = self.root.join(entry).join(RAW_FILE);
        fs::read(&path).map_err(|e| DmiSourceError::from_io(path, e))
    }
}

/// Order entries by numeric instance so that `17-10` follows `17-9`
fn compare_entries(a: &str, b: &str) -> Ordering {
    instance(a).cmp(&instance(b)).then_with(|| a.cmp(b))
}

/// Entries with a non-numeric instance sort after all numbered ones
fn instance(entry: &str) -> u32 {
    entry
        .split_once('-')
        .and_then(|(_, instance)| instance.parse().ok())
        .unwrap_or(u32::MAX)
}
