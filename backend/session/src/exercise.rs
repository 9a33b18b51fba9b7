//! State owned by the exercise view.
//!
//! Hint and solution generation are scoped to one exercise: a failure
//! there marks only that item's slot, and sibling items are unaffected.

use studyforge_core::{Difficulty, Exercise, ExerciseDraft, ExerciseSummary, Technology};
use uuid::Uuid;

use crate::slot::Slot;
use crate::validation::{validate_count, validate_topic, ValidationError};

/// Parameters for one exercise-batch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseRequest {
    pub technology: Technology,
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: u8,
}

/// Parameters for a per-exercise follow-up request (hint or solution),
/// snapshotted so the borrow on the panel ends before the async call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRequest {
    pub technology: Technology,
    pub title: String,
    pub description: String,
    pub statement: String,
}

impl ItemRequest {
    pub fn summary(&self) -> ExerciseSummary<'_> {
        ExerciseSummary {
            title: &self.title,
            description: &self.description,
            statement: &self.statement,
        }
    }
}

/// One generated exercise plus its on-demand hint and solution slots.
#[derive(Debug, Clone)]
pub struct ExerciseItem {
    pub exercise: Exercise,
    pub hint: Slot<String>,
    pub solution: Slot<String>,
}

#[derive(Debug, Clone)]
pub struct ExercisePanel {
    pub technology: Technology,
    pub topic: String,
    pub difficulty: Difficulty,
    pub count: u8,
    pub batch: Slot<Vec<ExerciseItem>>,
}

impl ExercisePanel {
    pub fn new() -> Self {
        Self {
            technology: Technology::JavaScript,
            topic: String::new(),
            difficulty: Difficulty::Beginner,
            count: 1,
            batch: Slot::Idle,
        }
    }

    pub fn begin_request(&mut self) -> Result<ExerciseRequest, ValidationError> {
        validate_topic(&self.topic)?;
        validate_count(self.count)?;
        if !self.batch.begin() {
            return Err(ValidationError::RequestInFlight);
        }
        Ok(ExerciseRequest {
            technology: self.technology,
            topic: self.topic.clone(),
            difficulty: self.difficulty,
            count: self.count,
        })
    }

    pub fn accept(&mut self, drafts: Vec<ExerciseDraft>) {
        let items = drafts
            .into_iter()
            .map(|draft| ExerciseItem {
                exercise: Exercise::from_draft(draft),
                hint: Slot::Idle,
                solution: Slot::Idle,
            })
            .collect();
        self.batch.resolve(items);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.batch.fail(message);
    }

    pub fn items(&self) -> &[ExerciseItem] {
        self.batch.value().map(Vec::as_slice).unwrap_or_default()
    }

    fn item_mut(&mut self, id: Uuid) -> Option<&mut ExerciseItem> {
        self.batch
            .value_mut()?
            .iter_mut()
            .find(|item| item.exercise.id == id)
    }

    pub fn begin_hint(&mut self, id: Uuid) -> Result<ItemRequest, ValidationError> {
        let technology = self.technology;
        let item = self.item_mut(id).ok_or(ValidationError::ItemNotFound)?;
        if !item.hint.begin() {
            return Err(ValidationError::RequestInFlight);
        }
        Ok(Self::item_request(technology, item))
    }

    pub fn accept_hint(&mut self, id: Uuid, hint: String) {
        if let Some(item) = self.item_mut(id) {
            item.hint.resolve(hint);
        }
    }

    pub fn fail_hint(&mut self, id: Uuid, message: impl Into<String>) {
        if let Some(item) = self.item_mut(id) {
            item.hint.fail(message);
        }
    }

    pub fn begin_solution(&mut self, id: Uuid) -> Result<ItemRequest, ValidationError> {
        let technology = self.technology;
        let item = self.item_mut(id).ok_or(ValidationError::ItemNotFound)?;
        if !item.solution.begin() {
            return Err(ValidationError::RequestInFlight);
        }
        Ok(Self::item_request(technology, item))
    }

    pub fn accept_solution(&mut self, id: Uuid, solution: String) {
        if let Some(item) = self.item_mut(id) {
            item.solution.resolve(solution);
        }
    }

    pub fn fail_solution(&mut self, id: Uuid, message: impl Into<String>) {
        if let Some(item) = self.item_mut(id) {
            item.solution.fail(message);
        }
    }

    fn item_request(technology: Technology, item: &ExerciseItem) -> ItemRequest {
        ItemRequest {
            technology,
            title: item.exercise.title.clone(),
            description: item.exercise.description.clone(),
            statement: item.exercise.statement.clone(),
        }
    }

    /// Toggle the favorite flag; returns the new state, or `None` if the
    /// exercise is gone.
    pub fn toggle_favorite(&mut self, id: Uuid) -> Option<bool> {
        let item = self.item_mut(id)?;
        item.exercise.is_favorite = !item.exercise.is_favorite;
        Some(item.exercise.is_favorite)
    }

    /// Flat markdown export of one exercise (the clipboard copy), with
    /// hint and solution sections when they have been generated.
    pub fn markdown(&self, id: Uuid) -> Option<String> {
        let item = self.items().iter().find(|item| item.exercise.id == id)?;
        let mut md = format!("## Exercise: {}\n\n", item.exercise.title);
        md.push_str(&format!("**Technology:** {}\n", self.technology.label()));
        md.push_str(&format!("**Difficulty:** {}\n\n", self.difficulty.label()));
        md.push_str(&format!("### Description\n{}\n\n", item.exercise.description));
        md.push_str(&format!("### Statement\n{}\n\n", item.exercise.statement));
        if let Some(hint) = item.hint.value() {
            md.push_str(&format!("### Hint\n{hint}\n\n"));
        }
        if let Some(solution) = item.solution.value() {
            md.push_str(&format!("### Solution\n{solution}\n\n"));
        }
        Some(md)
    }
}

impl Default for ExercisePanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_panel() -> ExercisePanel {
        let mut panel = ExercisePanel::new();
        panel.topic = "async".into();
        panel.count = 2;
        panel.begin_request().unwrap();
        panel.accept(vec![
            ExerciseDraft {
                title: "Await a promise".into(),
                description: "Call an async function".into(),
                statement: "Write `fetchUser` using `await`.".into(),
            },
            ExerciseDraft {
                title: "Race two promises".into(),
                description: "Use Promise.race".into(),
                statement: "Return whichever resolves first.".into(),
            },
        ]);
        panel
    }

    #[test]
    fn test_count_out_of_range_issues_no_request() {
        let mut panel = ExercisePanel::new();
        panel.topic = "async".into();
        panel.count = 7;
        assert_eq!(
            panel.begin_request(),
            Err(ValidationError::CountOutOfRange(7))
        );
        assert!(panel.batch.is_idle());
    }

    #[test]
    fn test_accept_builds_unfavorited_items() {
        let panel = loaded_panel();
        assert_eq!(panel.items().len(), 2);
        assert!(panel.items().iter().all(|i| !i.exercise.is_favorite));
        assert!(panel.items().iter().all(|i| i.hint.is_idle()));
    }

    #[test]
    fn test_solution_flow_is_scoped_to_one_item() {
        let mut panel = loaded_panel();
        let first = panel.items()[0].exercise.id;
        let second = panel.items()[1].exercise.id;

        let request = panel.begin_solution(first).unwrap();
        assert_eq!(request.title, "Await a promise");
        panel.fail_solution(first, "service unavailable");

        assert!(panel.items()[0].solution.error().is_some());
        assert!(panel.items()[1].solution.is_idle());

        panel.begin_solution(second).unwrap();
        panel.accept_solution(second, "Use await.".into());
        assert_eq!(
            panel.items()[1].solution.value().map(String::as_str),
            Some("Use await.")
        );
    }

    #[test]
    fn test_pending_solution_refuses_second_request() {
        let mut panel = loaded_panel();
        let id = panel.items()[0].exercise.id;
        panel.begin_solution(id).unwrap();
        assert_eq!(
            panel.begin_solution(id),
            Err(ValidationError::RequestInFlight)
        );
    }

    #[test]
    fn test_unknown_item_is_reported() {
        let mut panel = loaded_panel();
        assert_eq!(
            panel.begin_hint(Uuid::new_v4()),
            Err(ValidationError::ItemNotFound)
        );
    }

    #[test]
    fn test_markdown_includes_generated_sections() {
        let mut panel = loaded_panel();
        let id = panel.items()[0].exercise.id;
        let without = panel.markdown(id).unwrap();
        assert!(without.starts_with("## Exercise: Await a promise\n\n"));
        assert!(without.contains("**Technology:** JavaScript\n"));
        assert!(without.contains("**Difficulty:** Beginner\n\n"));
        assert!(!without.contains("### Hint"));

        panel.begin_hint(id).unwrap();
        panel.accept_hint(id, "Think about control flow.".into());
        let with = panel.markdown(id).unwrap();
        assert!(with.contains("### Hint\nThink about control flow.\n\n"));
    }
}
