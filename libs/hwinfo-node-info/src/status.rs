use serde::Serialize;

/// Outcome of collecting one hardware component
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Every field was resolved or is legitimately absent
    #[default]
    Success,
    /// Some fields or records were degraded, collection continued
    Partial,
    /// Nothing could be collected
    Failed,
}

/// Status of a component together with its diagnostic messages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComponentStatus {
    #[serde(rename = "type")]
    pub kind: StatusKind,
    pub messages: Vec<String>,
}

impl ComponentStatus {
    #[must_use]
    pub fn success() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Failed,
            messages: vec![message.into()],
        }
    }

    /// Record a degradation. A successful status becomes partial; a failed
    /// status stays failed.
    pub fn degrade(&mut self, message: impl Into<String>) {
        if self.kind == StatusKind::Success {
            self.kind = StatusKind::Partial;
        }
        self.messages.push(message.into());
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}
