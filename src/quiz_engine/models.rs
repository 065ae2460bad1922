use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Vocabulary items
// ---------------------------------------------------------------------------

/// One quiz-ready vocabulary entry.
///
/// Identity is the `id` alone: two items with the same `answer_text` but
/// different ids are distinct choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabItem {
    pub id: String,
    /// Shown on the choice button (e.g. the written form "猫").
    pub answer_text: String,
    /// Secondary reading (e.g. "ねこ"); may be empty.
    pub hint_text: String,
    /// Definition shown as the question.
    pub prompt_text: String,
}

impl VocabItem {
    /// Build an item whose id is derived from answer + hint, the same way
    /// normalized flashcard notes are keyed.
    pub fn new(
        answer_text: impl Into<String>,
        hint_text: impl Into<String>,
        prompt_text: impl Into<String>,
    ) -> Self {
        let answer_text = answer_text.into();
        let hint_text = hint_text.into();
        VocabItem {
            id: format!("{}:{}", answer_text, hint_text),
            answer_text,
            hint_text,
            prompt_text: prompt_text.into(),
        }
    }
}

impl fmt::Display for VocabItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hint_text.is_empty() || self.hint_text == self.answer_text {
            write!(f, "{}", self.answer_text)
        } else {
            write!(f, "{} ({})", self.answer_text, self.hint_text)
        }
    }
}

// ---------------------------------------------------------------------------
// Session metadata
// ---------------------------------------------------------------------------

/// Ease band the host used to pre-filter the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    Normal,
    Hard,
    #[default]
    Random,
}

impl Difficulty {
    /// Search filter understood by the flashcard service, `None` for no filter.
    pub fn ease_filter(self) -> Option<&'static str> {
        match self {
            Difficulty::Easy   => Some("prop:ease>=3"),
            Difficulty::Normal => Some("prop:ease>=1.5 prop:ease<3"),
            Difficulty::Hard   => Some("prop:ease<1.5"),
            Difficulty::Random => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy   => write!(f, "Easy"),
            Difficulty::Normal => write!(f, "Normal"),
            Difficulty::Hard   => write!(f, "Hard"),
            Difficulty::Random => write!(f, "Random"),
        }
    }
}

/// Caller-supplied labels that travel with a session untouched by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMeta {
    pub deck_name: String,
    pub pool_size: usize,
    pub difficulty: Difficulty,
}

// ---------------------------------------------------------------------------
// Guess results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessOutcome {
    pub success: bool,
    /// Set on the correct guess that finishes the session.
    pub game_over: bool,
}

/// Snapshot of the engine counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub corrects: usize,
    pub mistakes: usize,
    pub remaining: usize,
    pub total: usize,
}
