use crate::dmi_source::DmiSource;
use crate::model::MemoryInfo;
use crate::status::ComponentStatus;
use std::sync::Arc;

/// Collects installed memory modules from SMBIOS memory device structures
pub struct MemoryCollector {
    source: Arc<dyn DmiSource>,
}

impl MemoryCollector {
    #[must_use]
    pub fn new(source: Arc<dyn DmiSource>) -> Self {
        Self { source }
    }

    /// Decode every memory device entry the source exposes.
    ///
    /// Entries that cannot be read or decoded are skipped and reported in the
    /// status. Listing failures and permission problems fail the whole
    /// component.
    #[must_use]
    pub fn collect(&self) -> MemoryInfo {
        let entries = match self.source.memory_device_entries() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list memory device entries");
                return MemoryInfo::failed(e.to_string());
            }
        };

        let mut info = MemoryInfo {
            status: ComponentStatus::success(),
            modules: Vec::with_capacity(entries.len()),
        };

        for entry in &entries {
            let raw = match self.source.read_raw(entry) {
                Ok(raw) => raw,
                Err(e) if e.is_structural() => {
                    tracing::error!(entry = %entry, error = %e, "Cannot read memory device entries");
                    return MemoryInfo::failed(e.to_string());
                }
                Err(e) => {
                    tracing::warn!(entry = %entry, error = %e, "Skipping unreadable memory device");
                    info.status.degrade(format!("{entry}: {e}"));
                    continue;
                }
            };

            let decoded = match hwinfo_smbios::decode_memory_device(&raw) {
                Ok(decoded) => decoded,
                Err(e) => {
                    tracing::warn!(entry = %entry, error = %e, "Skipping malformed memory device");
                    info.status.degrade(format!("{entry}: {e}"));
                    continue;
                }
            };

            for diagnostic in &decoded.diagnostics {
                tracing::warn!(entry = %entry, %diagnostic, "Memory device field not decoded");
                info.status.degrade(format!("{entry}: {diagnostic}"));
            }

            tracing::debug!(
                entry = %entry,
                channel = %decoded.descriptor.slot.channel,
                "Decoded memory device"
            );
            info.modules.push(decoded.descriptor);
        }

        info
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::DmiSourceError;
    use crate::status::StatusKind;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    enum Entry {
        Raw(Vec<u8>),
        PermissionDenied,
        Missing,
    }

    #[derive(Default)]
    struct FakeSource {
        unavailable: bool,
        entries: BTreeMap<&'static str, Entry>,
    }

    impl FakeSource {
        fn with(mut self, name: &'static str, entry: Entry) -> Self {
            self.entries.insert(name, entry);
            self
        }
    }

    impl DmiSource for FakeSource {
        fn memory_device_entries(&self) -> Result<Vec<String>, DmiSourceError> {
            if self.unavailable {
                return Err(DmiSourceError::Unavailable(PathBuf::from("/nowhere")));
            }
            Ok(self.entries.keys().map(|k| (*k).to_owned()).collect())
        }

        fn read_raw(&self, entry: &str) -> Result<Vec<u8>, DmiSourceError> {
            let path = PathBuf::from(entry).join("raw");
            match self.entries.get(entry) {
                Some(Entry::Raw(raw)) => Ok(raw.clone()),
                Some(Entry::PermissionDenied) => Err(DmiSourceError::PermissionDenied(path)),
                Some(Entry::Missing) | None => Err(DmiSourceError::Io {
                    path,
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                }),
            }
        }
    }

    /// Minimal SMBIOS 2.3 memory device: 16 GiB DDR4 with ECC
    fn ddr4_dimm(part_number: &str) -> Vec<u8> {
        let mut raw = vec![0u8; 0x1B];
        raw[0x00] = 17;
        raw[0x01] = 0x1B;
        raw[0x08..0x0A].copy_from_slice(&72u16.to_le_bytes());
        raw[0x0A..0x0C].copy_from_slice(&64u16.to_le_bytes());
        raw[0x0C..0x0E].copy_from_slice(&16384u16.to_le_bytes());
        raw[0x10] = 1;
        raw[0x11] = 2;
        raw[0x12] = 0x1A;
        raw[0x15..0x17].copy_from_slice(&2666u16.to_le_bytes());
        raw[0x17] = 3;
        raw[0x1A] = 4;
        for s in ["DIMM_A1", "BANK 0", "Acme", part_number] {
            raw.extend_from_slice(s.as_bytes());
            raw.push(0);
        }
        raw.push(0);
        raw
    }

    fn collect(source: FakeSource) -> MemoryInfo {
        MemoryCollector::new(Arc::new(source)).collect()
    }

    #[test]
    fn test_collect_all_modules() {
        let info = collect(
            FakeSource::default()
                .with("17-0", Entry::Raw(ddr4_dimm("PN-0")))
                .with("17-1", Entry::Raw(ddr4_dimm("PN-1"))),
        );

        assert_eq!(info.status.kind, StatusKind::Success);
        assert!(info.status.messages.is_empty());
        assert_eq!(info.modules.len(), 2);
        assert_eq!(info.modules[0].part_number.as_deref(), Some("PN-0"));
        assert_eq!(info.modules[1].part_number.as_deref(), Some("PN-1"));
        assert_eq!(info.modules[0].slot.channel, "DIMM_A1");
        assert!(info.modules[0].supports_ecc.unwrap());
    }

    #[test]
    fn test_unavailable_source_fails() {
        let info = collect(FakeSource {
            unavailable: true,
            ..FakeSource::default()
        });

        assert_eq!(info.status.kind, StatusKind::Failed);
        assert_eq!(info.status.messages.len(), 1);
        assert!(info.status.messages[0].contains("doesn't exist"));
        assert!(info.modules.is_empty());
    }

    #[test]
    fn test_permission_denied_fails_without_modules() {
        let info = collect(
            FakeSource::default()
                .with("17-0", Entry::Raw(ddr4_dimm("PN-0")))
                .with("17-1", Entry::PermissionDenied),
        );

        assert_eq!(info.status.kind, StatusKind::Failed);
        assert!(info.status.messages[0].contains("Are you root?"));
        assert!(info.modules.is_empty());
    }

    #[test]
    fn test_unreadable_entry_is_skipped() {
        let info = collect(
            FakeSource::default()
                .with("17-0", Entry::Missing)
                .with("17-1", Entry::Raw(ddr4_dimm("PN-1"))),
        );

        assert_eq!(info.status.kind, StatusKind::Partial);
        assert_eq!(info.status.messages.len(), 1);
        assert!(info.status.messages[0].starts_with("17-0: "));
        assert_eq!(info.modules.len(), 1);
        assert_eq!(info.modules[0].part_number.as_deref(), Some("PN-1"));
    }

    #[test]
    fn test_malformed_entry_is_skipped() {
        let info = collect(
            FakeSource::default()
                .with("17-0", Entry::Raw(vec![17, 2]))
                .with("17-1", Entry::Raw(ddr4_dimm("PN-1"))),
        );

        assert_eq!(info.status.kind, StatusKind::Partial);
        assert!(info.status.messages[0].starts_with("17-0: "));
        assert_eq!(info.modules.len(), 1);
    }

    #[test]
    fn test_field_diagnostics_degrade_status() {
        let mut raw = ddr4_dimm("PN-0");
        raw[0x12] = 0xFF;

        let info = collect(FakeSource::default().with("17-0", Entry::Raw(raw)));

        assert_eq!(info.status.kind, StatusKind::Partial);
        assert_eq!(info.status.messages.len(), 1);
        assert!(info.status.messages[0].starts_with("17-0: type"));
        assert_eq!(info.modules.len(), 1);
        assert!(info.modules[0].memory_type.is_none());
    }

    #[test]
    fn test_no_entries_is_success() {
        let info = collect(FakeSource::default());
        assert_eq!(info.status.kind, StatusKind::Success);
        assert!(info.modules.is_empty());
    }
}
