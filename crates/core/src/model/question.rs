use serde::{Deserialize, Serialize};

/// Loose grouping used to pick an accent illustration for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionCategory {
    Lines,
    Shape,
    RealWorld,
    Concept,
}

/// A single multiple-choice quiz question. Immutable content; defined once
/// in the catalog and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explanation: String,
    pub category: QuestionCategory,
}

impl Question {
    #[must_use]
    pub fn is_correct(&self, option_index: usize) -> bool {
        option_index == self.correct_index
    }
}
