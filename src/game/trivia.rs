//! Trivia rooms. A correct answer is worth one life.

use crate::game::world::RoomId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriviaQuestion {
    pub prompt: &'static str,
    /// Expected answer as shown to the player after a miss.
    pub answer: &'static str,
}

impl TriviaQuestion {
    /// Case-insensitive; surrounding whitespace is ignored.
    pub fn is_correct(&self, given: &str) -> bool {
        given.trim().to_lowercase() == self.answer.to_lowercase()
    }
}

pub const HTML_QUESTION: TriviaQuestion = TriviaQuestion {
    prompt: "What is Hyper Text Markup Language commonly known as?",
    answer: "HTML",
};

pub const SCRAPING_QUESTION: TriviaQuestion = TriviaQuestion {
    prompt: "Fill in the Blank: With web scraping, you rely on consistent formatting on a web page (or site) and write code to ___ the data you want.",
    answer: "extract",
};

pub fn question_for(room: RoomId) -> Option<TriviaQuestion> {
    match room {
        RoomId::Trivia1 => Some(HTML_QUESTION),
        RoomId::Trivia2 => Some(SCRAPING_QUESTION),
        _ => None,
    }
}
