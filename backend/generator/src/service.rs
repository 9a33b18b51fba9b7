//! The generation service: typed wrappers around the model operations.
//!
//! Each operation builds a prompt, runs it through the configured provider,
//! and decodes the raw response. Provider failures map to
//! [`StudyError::Provider`]; decode failures pass through typed, with the
//! raw and cleaned payloads logged here at warn level.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use studyforge_core::{
    Difficulty, ExerciseDraft, ExerciseSummary, FlashcardDraft, LlmProvider, LlmRequest,
    ProjectIdeaDraft, StudyError, Technology,
};
use studyforge_decoder as decoder;

use crate::prompts;

/// Typed client for the generation model's operations.
pub struct ContentGenerator {
    provider: Arc<dyn LlmProvider>,
    model: String,
}

impl ContentGenerator {
    pub fn new(provider: Arc<dyn LlmProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    async fn complete(&self, request: LlmRequest) -> Result<String, StudyError> {
        let response =
            self.provider
                .complete(&request)
                .await
                .map_err(|e| StudyError::Provider {
                    provider: self.provider.name().to_string(),
                    message: e.to_string(),
                })?;
        info!(
            provider = %response.provider,
            tokens = response.tokens_used,
            latency_ms = response.latency_ms,
            "Model responded"
        );
        Ok(response.content)
    }

    async fn complete_text(&self, prompt: String) -> Result<String, StudyError> {
        let raw = self.complete(LlmRequest::text(&self.model, prompt)).await?;
        Ok(decoder::decode_text(&raw))
    }

    async fn complete_items<T: DeserializeOwned>(
        &self,
        prompt: String,
        what: &'static str,
    ) -> Result<Vec<T>, StudyError> {
        let raw = self.complete(LlmRequest::json(&self.model, prompt)).await?;
        decoder::decode_array(&raw).map_err(|err| {
            warn!(
                what,
                error = %err,
                raw,
                cleaned = %decoder::clean_json_source(&raw),
                "Model payload failed to decode"
            );
            StudyError::from(err)
        })
    }

    /// Generate an explanatory article about `topic`.
    pub async fn explain(&self, technology: Technology, topic: &str) -> Result<String, StudyError> {
        info!(technology = %technology, topic, "Generating explanation");
        self.complete_text(prompts::explanation(technology, topic))
            .await
    }

    /// Generate flashcards about `concept`. At least 5 are requested; the
    /// only enforcement is the decoder's empty check.
    pub async fn flashcards(
        &self,
        technology: Technology,
        concept: &str,
    ) -> Result<Vec<FlashcardDraft>, StudyError> {
        info!(technology = %technology, concept, "Generating flashcards");
        self.complete_items(prompts::flashcards(technology, concept), "flashcards")
            .await
    }

    /// Generate `count` exercises. The count is validated and clamped to
    /// 1..=5 by the caller before any request is issued.
    pub async fn exercises(
        &self,
        technology: Technology,
        topic: &str,
        difficulty: Difficulty,
        count: u8,
    ) -> Result<Vec<ExerciseDraft>, StudyError> {
        info!(technology = %technology, topic, difficulty = %difficulty, count, "Generating exercises");
        self.complete_items(
            prompts::exercises(technology, topic, difficulty, count),
            "exercises",
        )
        .await
    }

    /// Generate a worked solution for one exercise.
    pub async fn solution(
        &self,
        exercise: ExerciseSummary<'_>,
        technology: Technology,
    ) -> Result<String, StudyError> {
        info!(technology = %technology, title = exercise.title, "Generating solution");
        self.complete_text(prompts::solution(exercise, technology))
            .await
    }

    /// Generate a short approach hint for one exercise.
    pub async fn hint(
        &self,
        exercise: ExerciseSummary<'_>,
        technology: Technology,
    ) -> Result<String, StudyError> {
        info!(technology = %technology, title = exercise.title, "Generating hint");
        self.complete_text(prompts::hint(exercise, technology)).await
    }

    /// Generate one project idea for the selected technologies.
    pub async fn project_idea(
        &self,
        technologies: &[Technology],
        topic: Option<&str>,
    ) -> Result<ProjectIdeaDraft, StudyError> {
        info!(count = technologies.len(), topic, "Generating project idea");
        let raw = self
            .complete(LlmRequest::json(
                &self.model,
                prompts::project_idea(technologies, topic),
            ))
            .await?;
        decoder::decode_object(&raw).map_err(|err| {
            warn!(
                error = %err,
                raw,
                cleaned = %decoder::clean_json_source(&raw),
                "Project idea payload failed to decode"
            );
            StudyError::from(err)
        })
    }

    /// Generate the step-by-step guide for a project idea.
    pub async fn project_details(
        &self,
        name: &str,
        description: &str,
        suggested_tech: &[String],
    ) -> Result<String, StudyError> {
        info!(name, "Generating project details");
        self.complete_text(prompts::project_details(name, description, suggested_tech))
            .await
    }

    /// Generate extension suggestions for a project idea.
    ///
    /// When the payload is not JSON at all, falls back to splitting the raw
    /// text on line breaks and stripping leading dashes. Best-effort only:
    /// it may accept noise as items.
    pub async fn project_suggestions(&self, name: &str) -> Result<Vec<String>, StudyError> {
        info!(name, "Generating project suggestions");
        let raw = self
            .complete(LlmRequest::json(&self.model, prompts::project_suggestions(name)))
            .await?;
        match decoder::decode_array::<String>(&raw) {
            Ok(items) => Ok(items),
            Err(err) => {
                let trimmed = raw.trim();
                if !trimmed.is_empty() && !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                    let lines = decoder::split_lines_fallback(&raw);
                    if !lines.is_empty() {
                        warn!(
                            count = lines.len(),
                            "Suggestions payload was not JSON; fell back to line splitting"
                        );
                        return Ok(lines);
                    }
                }
                warn!(
                    error = %err,
                    raw,
                    cleaned = %decoder::clean_json_source(&raw),
                    "Suggestions payload failed to decode"
                );
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockProvider;
    use studyforge_decoder::DecodeError;

    fn generator(provider: MockProvider) -> ContentGenerator {
        ContentGenerator::new(Arc::new(provider), "mock-model")
    }

    #[tokio::test]
    async fn test_explain_unwraps_fenced_text() {
        let provider = MockProvider::new("mock")
            .with_response("```markdown\n# Closures\n\nA closure captures its scope.\n```");
        let content = generator(provider)
            .explain(Technology::JavaScript, "closures")
            .await
            .unwrap();
        assert_eq!(content, "# Closures\n\nA closure captures its scope.");
    }

    #[tokio::test]
    async fn test_flashcards_decode_into_drafts() {
        let provider = MockProvider::new("mock").with_response(
            r#"[{"question": "What is a ref?", "answer": "A mutable container."},
                {"question": "What is a prop?", "answer": "Input passed to a component."}]"#,
        );
        let cards = generator(provider)
            .flashcards(Technology::React, "component basics")
            .await
            .unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].question, "What is a ref?");
    }

    #[tokio::test]
    async fn test_empty_flashcard_array_is_empty_result() {
        let provider = MockProvider::new("mock").with_response("[]");
        let err = generator(provider)
            .flashcards(Technology::React, "hooks")
            .await
            .unwrap_err();
        assert!(matches!(err, StudyError::Decode(DecodeError::EmptyResult)));
    }

    #[tokio::test]
    async fn test_provider_failure_maps_to_provider_error() {
        let provider = MockProvider::new("mock").failing("quota exceeded");
        let err = generator(provider)
            .explain(Technology::Vue, "reactivity")
            .await
            .unwrap_err();
        match err {
            StudyError::Provider { provider, message } => {
                assert_eq!(provider, "mock");
                assert!(message.contains("quota exceeded"));
            }
            other => panic!("expected provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_project_idea_requires_name() {
        let provider =
            MockProvider::new("mock").with_response(r#"{"description": "missing the name"}"#);
        let err = generator(provider)
            .project_idea(&[Technology::Angular], None)
            .await
            .unwrap_err();
        assert!(matches!(err, StudyError::Decode(DecodeError::EmptyResult)));
    }

    #[tokio::test]
    async fn test_suggestions_fall_back_to_dashed_lines() {
        let provider =
            MockProvider::new("mock").with_response("- Add OAuth sign-in\n- Ship a dark mode\n");
        let suggestions = generator(provider)
            .project_suggestions("Habit tracker")
            .await
            .unwrap();
        assert_eq!(suggestions, vec!["Add OAuth sign-in", "Ship a dark mode"]);
    }

    #[tokio::test]
    async fn test_suggestions_json_object_does_not_fall_back() {
        // A JSON-looking payload of the wrong shape must fail, not be
        // line-split into nonsense.
        let provider = MockProvider::new("mock").with_response(r#"{"suggestions": []}"#);
        let err = generator(provider)
            .project_suggestions("Habit tracker")
            .await
            .unwrap_err();
        assert!(matches!(err, StudyError::Decode(DecodeError::EmptyResult)));
    }
}
