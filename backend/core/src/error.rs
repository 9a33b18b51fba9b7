use studyforge_decoder::DecodeError;
use thiserror::Error;

/// Top-level error type for StudyForge generation operations.
///
/// None of these are fatal: every error is converted to a user-visible
/// message at the call site that triggered the action, and the view stays
/// interactive so the user can retry.
#[derive(Debug, Error)]
pub enum StudyError {
    #[error("model provider error ({provider}): {message}")]
    Provider { provider: String, message: String },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StudyError {
    /// The message shown to the user, phrased around what was being
    /// generated. An empty decode result gets its own wording so the user
    /// knows to try a different input rather than blaming the service.
    pub fn user_message(&self, what: &str) -> String {
        match self {
            StudyError::Decode(DecodeError::EmptyResult) => {
                format!("No {what} were generated. Try a different topic or configuration.")
            }
            other => format!("Could not generate {what}: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_gets_distinct_wording() {
        let err = StudyError::from(DecodeError::EmptyResult);
        assert_eq!(
            err.user_message("flashcards"),
            "No flashcards were generated. Try a different topic or configuration."
        );
    }

    #[test]
    fn test_provider_errors_pass_the_message_through() {
        let err = StudyError::Provider {
            provider: "gemini".into(),
            message: "quota exceeded".into(),
        };
        let msg = err.user_message("learning content");
        assert!(msg.starts_with("Could not generate learning content:"));
        assert!(msg.contains("quota exceeded"));
    }
}
