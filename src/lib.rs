//! # vocab_quiz
//!
//! An arcade-style multiple-choice vocabulary quiz engine.
//!
//! Flashcard notes (written form, reading, gloss) are normalized into
//! [`VocabItem`]s and fed to a [`QuizEngine`], which turns them into an endless
//! stream of rounds: one definition, several answer buttons, exactly one of
//! them right. The engine is pure state; drawing, timing and storage belong
//! to the host.
//!
//! ## How it works
//!
//! 1. Normalize notes with [`normalize_notes`] (or build [`VocabItem`]s
//!    directly).
//! 2. Create a [`QuizEngine`] with an [`EngineConfig`]. The pool is
//!    deduplicated, shuffled, and the first round is dealt.
//! 3. Show [`QuizEngine::prompt`] and [`QuizEngine::choices`] (or use
//!    [`round_view`] for a ready-made JSON view), then feed the player's pick
//!    to [`QuizEngine::submit_guess`].
//! 4. When a guess comes back with `game_over`, build a [`SessionSummary`]
//!    and check it against [`BestTimes`].
//!
//! ## Key features
//!
//! - **No duplicate buttons**: the same item never shows up twice in a round.
//! - **Deterministic**: `EngineConfig::new().with_seed(42)` replays the exact
//!   same session, useful for tests.
//! - **Explicit end state**: guesses after the final correct answer are
//!   rejected with [`QuizError::SessionEnded`].
//!
//! ## Quick start
//!
//! ```rust
//! use vocab_quiz::{EngineConfig, QuizEngine, VocabItem};
//!
//! let items = vec![
//!     VocabItem::new("猫", "ねこ", "cat"),
//!     VocabItem::new("犬", "いぬ", "dog"),
//!     VocabItem::new("空", "そら", "sky"),
//!     VocabItem::new("海", "うみ", "sea"),
//! ];
//! let mut engine = QuizEngine::new(items, &EngineConfig::new().with_seed(7)).unwrap();
//!
//! println!("Q: {}", engine.prompt());
//! for (slot, item) in engine.choices().iter().enumerate() {
//!     println!("[{slot}] {item}");
//! }
//!
//! let outcome = engine.submit_guess(engine.correct_slot()).unwrap();
//! assert!(outcome.success);
//! assert_eq!(engine.remaining(), 3);
//! ```

pub mod quiz_engine;
pub mod round_view;

// Convenience re-exports so callers can use `vocab_quiz::QuizEngine`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    fit_pool_size, normalize_notes, BestTimes, Difficulty, EngineConfig, GuessOutcome,
    NoteBatch, QuizEngine, QuizError, RawNote, RecordOutcome, Result, SessionMeta,
    SessionStats, SessionSummary, VocabItem,
};
pub use round_view::{choice_label, round_view};
