use serde::{Deserialize, Serialize};
use crate::quiz_engine::error::Result;

/// Number of answer buttons shown per round unless configured otherwise.
pub const DEFAULT_ROUND_SIZE: usize = 3;

/// Pool sizes offered to the player, smallest first.
pub const POOL_SIZE_OPTIONS: [usize; 6] = [10, 20, 30, 50, 70, 100];

/// Smallest pool a default session can be started with: one more item than
/// there are buttons.
pub const MIN_POOL_SIZE: usize = DEFAULT_ROUND_SIZE + 1;

fn default_round_size() -> usize {
    DEFAULT_ROUND_SIZE
}

/// Engine settings.
///
/// `rng_seed: Some(u64)` makes a session fully reproducible: same items, same
/// seed, same shuffle and same correct slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_round_size")]
    pub round_size: usize,
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            round_size: DEFAULT_ROUND_SIZE,
            rng_seed: None,
        }
    }
}

impl EngineConfig {
    /// Three choices per round, entropy-seeded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_round_size(mut self, round_size: usize) -> Self {
        self.round_size = round_size;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Parse from JSON, filling in defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Pick the pool size to actually play with.
///
/// Keeps `requested` when the deck has enough notes, otherwise falls back to
/// the largest offered size the deck can fill. `None` means the deck is too
/// small for any offered size.
///
/// Every size returned is strictly larger than `round_size`, so the engine
/// accepts it.
pub fn fit_pool_size(available: usize, requested: usize, round_size: usize) -> Option<usize> {
    let min = MIN_POOL_SIZE.max(round_size + 1);
    if requested >= min && available >= requested {
        return Some(requested);
    }
    POOL_SIZE_OPTIONS
        .iter()
        .copied()
        .filter(|&size| size >= min && size <= available && size <= requested.max(min))
        .max()
}
