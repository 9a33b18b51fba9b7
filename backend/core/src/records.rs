//! Domain records and the draft shapes the model is asked to return.
//!
//! Drafts are exactly what the Response Decoder deserializes out of a model
//! payload (camelCase JSON keys, matching the prompts). Records are what the
//! views own: a draft plus an identifier, a favorite flag, and a creation
//! timestamp, all assigned at creation time after decoding.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Model payload shape for one flashcard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardDraft {
    pub question: String,
    pub answer: String,
}

/// Model payload shape for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDraft {
    pub title: String,
    pub description: String,
    /// The full assignment; may embed fenced code examples.
    pub statement: String,
}

/// Model payload shape for one project idea.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdeaDraft {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub suggested_tech: Vec<String>,
}

/// A question/answer card owned by the flashcard view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Flashcard {
    /// Promote a decoded draft into a full record.
    pub fn from_draft(draft: FlashcardDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            question: draft.question,
            answer: draft.answer,
            is_favorite: false,
            created_at: Utc::now(),
        }
    }
}

/// A generated exercise owned by the exercise view. Hint and solution text
/// are generated on demand and tracked by the view's per-item slots, not
/// stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub statement: String,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Exercise {
    /// Promote a decoded draft into a full record.
    pub fn from_draft(draft: ExerciseDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            statement: draft.statement,
            is_favorite: false,
            created_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> ExerciseSummary<'_> {
        ExerciseSummary {
            title: &self.title,
            description: &self.description,
            statement: &self.statement,
        }
    }
}

/// Borrowed view of the exercise fields the solution and hint operations
/// need to quote back to the model.
#[derive(Debug, Clone, Copy)]
pub struct ExerciseSummary<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub statement: &'a str,
}

impl<'a> From<&'a ExerciseDraft> for ExerciseSummary<'a> {
    fn from(draft: &'a ExerciseDraft) -> Self {
        Self {
            title: &draft.title,
            description: &draft.description,
            statement: &draft.statement,
        }
    }
}

/// A generated project idea owned by the project view. The detailed guide
/// and extra suggestions are generated on demand and tracked by the view's
/// slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub features: Vec<String>,
    pub suggested_tech: Vec<String>,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl ProjectIdea {
    /// Promote a decoded draft into a full record.
    pub fn from_draft(draft: ProjectIdeaDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: draft.name,
            description: draft.description,
            features: draft.features,
            suggested_tech: draft.suggested_tech,
            is_favorite: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_start_unfavorited_with_unique_ids() {
        let a = Flashcard::from_draft(FlashcardDraft {
            question: "Q".into(),
            answer: "A".into(),
        });
        let b = Flashcard::from_draft(FlashcardDraft {
            question: "Q".into(),
            answer: "A".into(),
        });
        assert!(!a.is_favorite);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_draft_json_keys_are_camel_case() {
        let draft: ProjectIdeaDraft = serde_json::from_str(
            r#"{"name": "Habit tracker", "description": "Track daily habits",
                "features": ["streaks"], "suggestedTech": ["Vite"]}"#,
        )
        .unwrap();
        assert_eq!(draft.suggested_tech, vec!["Vite"]);
    }

    #[test]
    fn test_project_arrays_default_when_missing() {
        let draft: ProjectIdeaDraft =
            serde_json::from_str(r#"{"name": "Notes app", "description": "A notes app"}"#).unwrap();
        assert!(draft.features.is_empty());
        assert!(draft.suggested_tech.is_empty());
    }
}
