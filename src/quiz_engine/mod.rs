//! Core quiz engine: item pool, round state machine, and the helpers around it.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: vocabulary items, guess outcomes, session metadata |
//! | `pool`      | Shuffled circular item pool with duplicate-free drawing |
//! | `engine`    | `QuizEngine` — round state, guess evaluation, session end |
//! | `normalize` | Flashcard note → `VocabItem` mapping (markup stripping, field fallbacks) |
//! | `config`    | Engine settings and pool-size fitting |
//! | `summary`   | End-of-session payload and best-time table |
//! | `error`     | `QuizError` and the crate `Result` alias |

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod normalize;
pub mod pool;
pub mod summary;

pub use config::{
    fit_pool_size, EngineConfig, DEFAULT_ROUND_SIZE, MIN_POOL_SIZE, POOL_SIZE_OPTIONS,
};
pub use engine::QuizEngine;
pub use error::{QuizError, Result};
pub use models::{Difficulty, GuessOutcome, SessionMeta, SessionStats, VocabItem};
pub use normalize::{dedup_by_id, normalize_note, normalize_notes, NoteBatch, RawNote};
pub use summary::{BestTimes, RecordOutcome, SessionSummary};
