//! State owned by the flashcard view.

use studyforge_core::{Flashcard, FlashcardDraft, Technology};
use uuid::Uuid;

use crate::slot::Slot;
use crate::validation::{validate_topic, ValidationError};

/// Parameters for one flashcard-set request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardRequest {
    pub technology: Technology,
    pub concept: String,
}

#[derive(Debug, Clone)]
pub struct FlashcardPanel {
    pub technology: Technology,
    pub concept: String,
    pub cards: Slot<Vec<Flashcard>>,
    current: usize,
}

impl FlashcardPanel {
    pub fn new() -> Self {
        Self {
            technology: Technology::JavaScript,
            concept: String::new(),
            cards: Slot::Idle,
            current: 0,
        }
    }

    pub fn begin_request(&mut self) -> Result<FlashcardRequest, ValidationError> {
        validate_topic(&self.concept)?;
        if !self.cards.begin() {
            return Err(ValidationError::RequestInFlight);
        }
        self.current = 0;
        Ok(FlashcardRequest {
            technology: self.technology,
            concept: self.concept.clone(),
        })
    }

    pub fn accept(&mut self, drafts: Vec<FlashcardDraft>) {
        let cards = drafts.into_iter().map(Flashcard::from_draft).collect();
        self.cards.resolve(cards);
        self.current = 0;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.cards.fail(message);
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.cards.value().and_then(|cards| cards.get(self.current))
    }

    /// Advance to the next card, wrapping around.
    pub fn next(&mut self) {
        if let Some(cards) = self.cards.value() {
            if !cards.is_empty() {
                self.current = (self.current + 1) % cards.len();
            }
        }
    }

    /// Go back to the previous card, wrapping around.
    pub fn previous(&mut self) {
        if let Some(cards) = self.cards.value() {
            if !cards.is_empty() {
                self.current = (self.current + cards.len() - 1) % cards.len();
            }
        }
    }

    /// Toggle the favorite flag; returns the new state, or `None` if the
    /// card is gone.
    pub fn toggle_favorite(&mut self, id: Uuid) -> Option<bool> {
        let card = self
            .cards
            .value_mut()?
            .iter_mut()
            .find(|card| card.id == id)?;
        card.is_favorite = !card.is_favorite;
        Some(card.is_favorite)
    }

    /// Flat markdown export of one card (the clipboard copy).
    pub fn markdown(&self, card: &Flashcard) -> String {
        format!(
            "## Flashcard: {} - {}\n\n### Question\n{}\n\n### Answer\n{}",
            self.concept,
            self.technology.label(),
            card.question,
            card.answer
        )
    }
}

impl Default for FlashcardPanel {
    fn default() -> Self {
        Self::new()
    }
}
