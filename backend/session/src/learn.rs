//! State owned by the "learn a topic" view.

use studyforge_core::Technology;

use crate::slot::Slot;
use crate::validation::{validate_topic, ValidationError};

/// Parameters for one explanation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnRequest {
    pub technology: Technology,
    pub topic: String,
}

#[derive(Debug, Clone)]
pub struct LearnPanel {
    pub technology: Technology,
    pub topic: String,
    pub content: Slot<String>,
}

impl LearnPanel {
    pub fn new() -> Self {
        Self {
            technology: Technology::JavaScript,
            topic: String::new(),
            content: Slot::Idle,
        }
    }

    /// Validate the inputs and mark the request pending. A model call is
    /// only made with the returned parameters; on `Err` nothing was issued.
    pub fn begin_request(&mut self) -> Result<LearnRequest, ValidationError> {
        validate_topic(&self.topic)?;
        if !self.content.begin() {
            return Err(ValidationError::RequestInFlight);
        }
        Ok(LearnRequest {
            technology: self.technology,
            topic: self.topic.clone(),
        })
    }

    /// Store generated content. A blank result counts as a failure so the
    /// user is told to try a different topic.
    pub fn accept(&mut self, content: String) {
        if content.trim().is_empty() {
            self.content
                .fail("No content was generated. Try a different topic.");
        } else {
            self.content.resolve(content);
        }
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.content.fail(message);
    }

    /// Flat markdown export of the current content (the clipboard copy).
    pub fn markdown(&self) -> Option<String> {
        let content = self.content.value()?;
        Some(format!(
            "## Topic: {} - {}\n\n{}",
            self.topic,
            self.technology.label(),
            content
        ))
    }
}

impl Default for LearnPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_topic_issues_no_request() {
        let mut panel = LearnPanel::new();
        panel.topic = "  ".into();
        assert_eq!(panel.begin_request(), Err(ValidationError::EmptyTopic));
        assert!(panel.content.is_idle());
    }

    #[test]
    fn test_second_request_refused_while_pending() {
        let mut panel = LearnPanel::new();
        panel.topic = "closures".into();
        assert!(panel.begin_request().is_ok());
        assert_eq!(panel.begin_request(), Err(ValidationError::RequestInFlight));
    }

    #[test]
    fn test_blank_result_is_a_failure() {
        let mut panel = LearnPanel::new();
        panel.topic = "closures".into();
        panel.begin_request().unwrap();
        panel.accept("  \n".into());
        assert!(panel.content.error().is_some());
    }

    #[test]
    fn test_markdown_export_shape() {
        let mut panel = LearnPanel::new();
        panel.technology = Technology::React;
        panel.topic = "state management".into();
        panel.begin_request().unwrap();
        panel.accept("Use a store.".into());
        assert_eq!(
            panel.markdown().unwrap(),
            "## Topic: state management - React\n\nUse a store."
        );
    }
}
