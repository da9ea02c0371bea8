//! Processor features from the Linux `/proc/cpuinfo` listing.
//!
//! The file repeats one block per logical processor; only the first block is
//! read. x86 kernels publish a `flags` line, ARM kernels a `Features` line and
//! a `CPU architecture` version.

use std::path::Path;

/// Location of the processor listing on Linux
pub const DEFAULT_CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Features not exposed by `sysinfo`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CpuFeatures {
    /// 64 when the x86 long mode flag (`lm`) is present, 32 otherwise
    pub bitness: Option<u8>,
    /// ARM architecture version, `None` on x86
    pub arch_version: Option<String>,
    /// SSE extensions in display form, e.g. `SSE4.2`
    pub sse_flags: Vec<String>,
    /// Whether the listing carried an x86 `flags` line
    pub has_x86_flags: bool,
}

impl CpuFeatures {
    /// Parse the text of a cpuinfo listing
    #[must_use]
    pub fn parse(cpuinfo: &str) -> Self {
        let mut features = Self::default();

        let first_block = cpuinfo
            .split("\n\n")
            .find(|block| !block.trim().is_empty())
            .unwrap_or_default();

        for line in first_block.lines() {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let value = value.trim();

            match key.trim() {
                "flags" => {
                    features.has_x86_flags = true;
                    let flags: Vec<String> =
                        value.split_whitespace().map(str::to_lowercase).collect();
                    features.bitness = Some(if flags.iter().any(|f| f == "lm") { 64 } else { 32 });
                    features.sse_flags = flags
                        .iter()
                        .filter(|flag| flag.contains("sse"))
                        .map(|flag| flag.replace('_', ".").to_uppercase())
                        .collect();
                }
                "CPU architecture" if !value.is_empty() => {
                    features.arch_version = Some(value.to_owned());
                }
                _ => {}
            }
        }

        features
    }

    /// Read and parse a cpuinfo listing.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be read.
    pub fn read(path: &Path) -> std::io::Result<Self> {
        std::fs::read_to_string(path).map(|text| Self::parse(&text))
    }
}
