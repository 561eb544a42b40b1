//! Request lifecycle status.

use serde::{Deserialize, Serialize};

/// Outcome of the most recent request observed by the state container.
///
/// Exactly one status holds at a time. `Added`, `Updated`, and `Deleted` are
/// the acknowledgement statuses for CRUD calls; `Failed` marks a well-formed
/// error response from the API, while `Error` marks a transport-level
/// failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Added,
    Updated,
    Deleted,
    Failed,
    Error,
}

impl RequestStatus {
    /// Whether this status represents a surfaced failure of either kind.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::Failed | Self::Error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(RequestStatus::default(), RequestStatus::Idle);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&RequestStatus::Added).unwrap(),
            "\"added\""
        );
    }

    #[test]
    fn test_is_failure() {
        assert!(RequestStatus::Failed.is_failure());
        assert!(RequestStatus::Error.is_failure());
        assert!(!RequestStatus::Success.is_failure());
    }
}
