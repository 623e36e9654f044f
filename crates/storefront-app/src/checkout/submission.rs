//! Order submission lifecycle

use storefront_client::SubmitError;

/// Identifies one submission attempt so late results can be told apart
pub type SubmissionId = u64;

/// Where the checkout is in the submit handshake
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    /// Accepting input; nothing in flight
    #[default]
    Editing,
    /// Payload sent, waiting for the backend
    Submitting { id: SubmissionId },
    /// Backend accepted the order
    Succeeded,
    /// Backend call failed; values are kept and the order can be resent
    Failed { error: SubmitError },
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting { .. })
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, SubmissionStatus::Failed { .. })
    }

    /// In-flight submission id, if any
    pub fn in_flight(&self) -> Option<SubmissionId> {
        match self {
            SubmissionStatus::Submitting { id } => Some(*id),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&SubmitError> {
        match self {
            SubmissionStatus::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// Failed with an error that resending the same payload might fix
    pub fn can_retry(&self) -> bool {
        self.error().is_some_and(SubmitError::is_retryable)
    }
}
