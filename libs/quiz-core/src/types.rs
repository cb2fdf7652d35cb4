//! Core types for flashcard decks.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::session::QuizSummary;

/// A single flashcard.
///
/// Deserializing goes through [`Card::new`], so a blank question or answer
/// is rejected there too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    pub question: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Card {
    /// Create a card, rejecting a blank question or answer.
    ///
    /// A blank hint is treated as no hint.
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        hint: Option<String>,
    ) -> Result<Self, CardError> {
        let question = question.into();
        let answer = answer.into();

        if question.trim().is_empty() {
            return Err(CardError::MissingQuestion);
        }
        if answer.trim().is_empty() {
            return Err(CardError::MissingAnswer);
        }

        Ok(Self {
            question,
            answer,
            hint: hint.filter(|h| !h.trim().is_empty()),
        })
    }
}

/// Card fields as received, before validation.
#[derive(Debug, Clone, Deserialize)]
struct RawCard {
    question: String,
    answer: String,
    #[serde(default)]
    hint: Option<String>,
}

impl TryFrom<RawCard> for Card {
    type Error = CardError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::new(raw.question, raw.answer, raw.hint)
    }
}

/// Cumulative quiz results for a deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub correct: u32,
    pub total: u32,
}

impl Progress {
    /// Percentage of correct answers, 0 when nothing has been answered.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.correct) / f64::from(self.total) * 100.0
    }

    /// Add a finished quiz's results.
    pub fn record(&mut self, summary: &QuizSummary) {
        self.correct = self.correct.saturating_add(summary.correct);
        self.total = self.total.saturating_add(summary.total);
    }
}

/// A named collection of cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub progress: Progress,
}

impl Deck {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cards: Vec::new(),
            progress: Progress::default(),
        }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// A shuffled copy of the cards; the deck itself keeps its order.
    pub fn shuffled_cards<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Card> {
        let mut cards = self.cards.clone();
        cards.shuffle(rng);
        cards
    }

    /// Fold a finished quiz into the deck's cumulative progress.
    pub fn record_session(&mut self, summary: &QuizSummary) {
        self.progress.record(summary);
    }
}
