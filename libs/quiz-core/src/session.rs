//! Quiz and study sessions.
//!
//! A [`QuizSession`] is a plain value: each interaction takes the session
//! and returns the next one, so the caller owns all quiz state.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::grading::{AnswerGrader, Grade};
use crate::settings::QuizSettings;
use crate::types::{Card, Deck};

/// Outcome of submitting an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AnswerFeedback {
    /// Accepted; the session moved to the next card.
    Correct { answer: String, grade: Grade },
    /// Rejected with attempts left on the same card.
    Incorrect { tries_left: u32, grade: Grade },
    /// Rejected on the last attempt; the answer is revealed and the session moved on.
    Failed { answer: String, grade: Grade },
    /// No card left to answer.
    Finished,
}

/// Result of asking for a hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HintFeedback {
    Hint { hint: String },
    NoHint,
    Finished,
}

/// Results of a quiz session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub deck_name: String,
    pub correct: u32,
    pub total: u32,
    pub percent: f64,
}

impl QuizSummary {
    pub fn new(deck_name: impl Into<String>, correct: u32, total: u32) -> Self {
        let percent = if total > 0 {
            f64::from(correct) / f64::from(total) * 100.0
        } else {
            0.0
        };
        Self {
            deck_name: deck_name.into(),
            correct,
            total,
            percent,
        }
    }
}

/// State of a quiz over one deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizSession {
    pub deck_name: String,
    pub cards: Vec<Card>,
    pub current: usize,
    pub tries_left: u32,
    pub correct: u32,
    pub settings: QuizSettings,
}

impl QuizSession {
    /// Start a quiz over a shuffled copy of the deck.
    pub fn start<R: Rng + ?Sized>(
        deck: &Deck,
        settings: QuizSettings,
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        Self::with_cards(&deck.name, deck.shuffled_cards(rng), settings)
    }

    /// Start a quiz over cards in the given order.
    pub fn with_cards(
        deck_name: &str,
        cards: Vec<Card>,
        settings: QuizSettings,
    ) -> Result<Self, SessionError> {
        if cards.is_empty() {
            return Err(SessionError::EmptyDeck {
                deck: deck_name.to_string(),
            });
        }

        tracing::debug!(deck = deck_name, cards = cards.len(), ?settings, "quiz started");

        Ok(Self {
            deck_name: deck_name.to_string(),
            cards,
            current: 0,
            tries_left: settings.tries,
            correct: 0,
            settings,
        })
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.current)
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.cards.len()
    }

    /// Grade an answer to the current card.
    pub fn submit(mut self, grader: &AnswerGrader, answer: &str) -> (Self, AnswerFeedback) {
        let Some(reference) = self.current_card().map(|c| c.answer.clone()) else {
            return (self, AnswerFeedback::Finished);
        };

        let grade = grader.evaluate(answer, &reference, self.settings.strictness);

        let feedback = if grade.accepted {
            self.correct += 1;
            self.advance();
            AnswerFeedback::Correct {
                answer: reference,
                grade,
            }
        } else {
            self.tries_left = self.tries_left.saturating_sub(1);
            if self.tries_left > 0 {
                AnswerFeedback::Incorrect {
                    tries_left: self.tries_left,
                    grade,
                }
            } else {
                self.advance();
                AnswerFeedback::Failed {
                    answer: reference,
                    grade,
                }
            }
        };

        tracing::debug!(
            deck = %self.deck_name,
            card = self.current,
            correct = self.correct,
            ?feedback,
            "answer submitted"
        );
        (self, feedback)
    }

    /// Hint for the current card.
    pub fn hint(&self) -> HintFeedback {
        match self.current_card() {
            None => HintFeedback::Finished,
            Some(Card { hint: Some(hint), .. }) => HintFeedback::Hint { hint: hint.clone() },
            Some(_) => HintFeedback::NoHint,
        }
    }

    /// Move past the current card without scoring it.
    pub fn skip(mut self) -> Self {
        if !self.is_finished() {
            self.advance();
        }
        self
    }

    pub fn summary(&self) -> QuizSummary {
        let total = u32::try_from(self.cards.len()).unwrap_or(u32::MAX);
        QuizSummary::new(&self.deck_name, self.correct, total)
    }

    /// Summary of a completed quiz. Every card must have been answered or skipped.
    pub fn finish(&self) -> Result<QuizSummary, SessionError> {
        if !self.is_finished() {
            return Err(SessionError::NotFinished {
                remaining: self.cards.len() - self.current,
            });
        }
        Ok(self.summary())
    }

    fn advance(&mut self) {
        self.current += 1;
        self.tries_left = self.settings.tries;
    }
}

/// Passive flip-through of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub cards: Vec<Card>,
    pub position: usize,
    pub showing_answer: bool,
}

impl StudySession {
    pub fn new(deck: &Deck) -> Self {
        Self {
            cards: deck.cards.clone(),
            position: 0,
            showing_answer: false,
        }
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.position)
    }

    /// Visible side of the current card.
    pub fn current_face(&self) -> Option<&str> {
        self.current_card().map(|card| {
            if self.showing_answer {
                card.answer.as_str()
            } else {
                card.question.as_str()
            }
        })
    }

    pub fn flip(&mut self) {
        if !self.cards.is_empty() {
            self.showing_answer = !self.showing_answer;
        }
    }

    /// Next card, wrapping to the first.
    pub fn next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let len = self.cards.len();
        self.position = (self.position % len + 1) % len;
        self.showing_answer = false;
    }

    /// Previous card, wrapping to the last.
    pub fn previous(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let len = self.cards.len();
        self.position = (self.position % len + len - 1) % len;
        self.showing_answer = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::GradeBasis;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn capitals() -> Vec<Card> {
        vec![
            Card::new("Capital of France?", "Paris", Some("Eiffel".to_string())).unwrap(),
            Card::new("Capital of Japan?", "Tokyo", None).unwrap(),
        ]
    }

    fn session(tries: u32) -> QuizSession {
        let settings = QuizSettings {
            tries,
            ..QuizSettings::default()
        };
        QuizSession::with_cards("Capitals", capitals(), settings).unwrap()
    }

    #[test]
    fn test_empty_deck_rejected() {
        let deck = Deck::new("Empty");
        let mut rng = StdRng::seed_from_u64(1);
        let result = QuizSession::start(&deck, QuizSettings::default(), &mut rng);
        assert_eq!(
            result,
            Err(SessionError::EmptyDeck {
                deck: "Empty".to_string()
            })
        );
    }

    #[test]
    fn test_start_shuffles_all_cards() {
        let mut deck = Deck::new("Capitals");
        for card in capitals() {
            deck.add_card(card);
        }
        let mut rng = StdRng::seed_from_u64(3);
        let session = QuizSession::start(&deck, QuizSettings::default(), &mut rng).unwrap();
        assert_eq!(session.cards.len(), 2);
        assert_eq!(session.tries_left, 1);
        assert_eq!(session.current, 0);
    }

    #[test]
    fn test_correct_answer_advances() {
        let grader = AnswerGrader::default();
        let (session, feedback) = session(1).submit(&grader, "  paris ");

        assert!(matches!(feedback, AnswerFeedback::Correct { ref answer, .. } if answer == "Paris"));
        assert_eq!(session.correct, 1);
        assert_eq!(session.current, 1);
    }

    #[test]
    fn test_wrong_answer_consumes_tries() {
        let grader = AnswerGrader::default();
        let (session, feedback) = session(2).submit(&grader, "Lyon");

        match feedback {
            AnswerFeedback::Incorrect { tries_left, grade } => {
                assert_eq!(tries_left, 1);
                assert_eq!(grade.basis, GradeBasis::Similarity);
            }
            other => panic!("unexpected feedback: {other:?}"),
        }
        assert_eq!(session.current, 0);

        let (session, feedback) = session.submit(&grader, "Marseille");
        assert!(matches!(feedback, AnswerFeedback::Failed { ref answer, .. } if answer == "Paris"));
        assert_eq!(session.current, 1);
        assert_eq!(session.tries_left, 2);
        assert_eq!(session.correct, 0);
    }

    #[test]
    fn test_retry_then_correct() {
        let grader = AnswerGrader::default();
        let (session, _) = session(3).submit(&grader, "Lyon");
        let (session, feedback) = session.submit(&grader, "Paris");
        assert!(matches!(feedback, AnswerFeedback::Correct { .. }));
        assert_eq!(session.tries_left, 3);
    }

    #[test]
    fn test_finished_session() {
        let grader = AnswerGrader::default();
        let session = session(1).skip().skip();
        assert!(session.is_finished());
        assert_eq!(session.hint(), HintFeedback::Finished);

        let (session, feedback) = session.submit(&grader, "Paris");
        assert_eq!(feedback, AnswerFeedback::Finished);
        assert_eq!(session.current, 2);

        let session = session.skip();
        assert_eq!(session.current, 2);
    }

    #[test]
    fn test_hint() {
        let session = session(1);
        assert_eq!(
            session.hint(),
            HintFeedback::Hint {
                hint: "Eiffel".to_string()
            }
        );
        assert_eq!(session.skip().hint(), HintFeedback::NoHint);
    }

    #[test]
    fn test_summary() {
        let grader = AnswerGrader::default();
        let (session, _) = session(1).submit(&grader, "Paris");
        let (session, _) = session.submit(&grader, "Kyoto");
        let summary = session.summary();
        assert_eq!(summary, QuizSummary::new("Capitals", 1, 2));
        assert_eq!(summary.percent, 50.0);
    }

    #[test]
    fn test_finish_requires_every_card() {
        let grader = AnswerGrader::default();
        let (session, _) = session(1).submit(&grader, "Paris");
        assert_eq!(session.finish(), Err(SessionError::NotFinished { remaining: 1 }));

        let session = session.skip();
        assert_eq!(session.finish(), Ok(QuizSummary::new("Capitals", 1, 2)));
    }

    #[test]
    fn test_session_serde_round_trip() {
        let session = session(2);
        let json = serde_json::to_string(&session).unwrap();
        let restored: QuizSession = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_feedback_tagging() {
        let json = serde_json::to_value(AnswerFeedback::Finished).unwrap();
        assert_eq!(json, serde_json::json!({ "outcome": "finished" }));
    }

    #[test]
    fn test_study_navigation() {
        let mut deck = Deck::new("Capitals");
        for card in capitals() {
            deck.add_card(card);
        }
        let mut study = StudySession::new(&deck);
        assert_eq!(study.current_face(), Some("Capital of France?"));

        study.flip();
        assert_eq!(study.current_face(), Some("Paris"));

        study.next();
        assert_eq!(study.current_face(), Some("Capital of Japan?"));

        study.next();
        assert_eq!(study.current_face(), Some("Capital of France?"));

        study.previous();
        assert_eq!(study.current_face(), Some("Capital of Japan?"));
    }

    #[test]
    fn test_study_position_out_of_range() {
        let mut deck = Deck::new("Capitals");
        for card in capitals() {
            deck.add_card(card);
        }
        let mut study = StudySession::new(&deck);
        study.position = usize::MAX;
        assert_eq!(study.current_face(), None);

        study.next();
        // usize::MAX % 2 == 1, so the next card wraps to 0
        assert_eq!(study.position, 0);

        study.position = usize::MAX;
        study.previous();
        assert_eq!(study.position, 0);
        assert_eq!(study.current_face(), Some("Capital of France?"));
    }

    #[test]
    fn test_study_empty_deck() {
        let mut study = StudySession::new(&Deck::new("Empty"));
        study.flip();
        study.next();
        study.previous();
        assert_eq!(study.current_face(), None);
        assert!(!study.showing_answer);
    }
}
