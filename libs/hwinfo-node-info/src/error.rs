use std::path::PathBuf;

/// Errors for hardware report handling
#[derive(Debug, thiserror::Error)]
pub enum NodeInfoError {
    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while reading DMI structures from the platform
#[derive(Debug, thiserror::Error)]
pub enum DmiSourceError {
    #[error("The {} directory doesn't exist", .0.display())]
    Unavailable(PathBuf),

    #[error("Unable to read {}. Are you root?", .0.display())]
    PermissionDenied(PathBuf),

    #[error("Error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DmiSourceError {
    /// Build from an I/O error, singling out permission problems
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied(path)
        } else {
            Self::Io { path, source }
        }
    }

    /// Whether no data at all can be obtained from the source after this error
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::PermissionDenied(_))
    }
}
