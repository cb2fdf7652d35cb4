//! Test fixtures and factory functions for creating test data.

use serde_json::{json, Value};

use quiz_core::{Card, Deck, QuizSession, QuizSettings};

/// Deck of capital cities; only France has a hint.
pub fn capitals_deck() -> Deck {
    let mut deck = Deck::new("Capitals");
    deck.add_card(Card::new("Capital of France?", "Paris", Some("Eiffel".to_string())).unwrap());
    deck.add_card(Card::new("Capital of Japan?", "Tokyo", None).unwrap());
    deck.add_card(Card::new("Capital of Peru?", "Lima", None).unwrap());
    deck
}

/// Deck with a single card.
pub fn single_card_deck(question: &str, answer: &str) -> Deck {
    let mut deck = Deck::new("Single");
    deck.add_card(Card::new(question, answer, None).unwrap());
    deck
}

/// Session over the capitals deck in authored order.
pub fn capitals_session(tries: u32, strictness: i64) -> QuizSession {
    let deck = capitals_deck();
    let settings = QuizSettings::new(i64::from(tries), strictness).unwrap();
    QuizSession::with_cards(&deck.name, deck.cards, settings).unwrap()
}

/// Body for POST /api/quiz/answer.
pub fn answer_request(session: &QuizSession, answer: &str) -> Value {
    json!({ "session": session, "answer": answer })
}
