//! The round engine: pool, on-screen choices, correct slot, counters.
//!
//! ## Round lifecycle
//!
//! Construction fills every slot with a distinct pool item and picks the
//! correct slot. A correct guess retires that slot's item, draws a
//! replacement that is not already on screen, and re-rolls the correct slot.
//! A wrong guess only bumps the mistake counter, so the player retries the
//! same round.
//!
//! The session ends once `correct_count == total()`. Items recur as the
//! cursor wraps, so this counts rounds won, not distinct items learned.
//! After that guess the engine is `Ended` and rejects further guesses.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    config::EngineConfig,
    error::{QuizError, Result},
    models::{GuessOutcome, SessionStats, VocabItem},
    normalize::dedup_by_id,
    pool::Pool,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Playing,
    Ended,
}

pub struct QuizEngine<R: Rng = StdRng> {
    pool: Pool,
    /// Pool positions currently shown, in slot order. Pairwise distinct.
    round: Vec<usize>,
    correct_slot: usize,
    correct_count: usize,
    mistake_count: usize,
    phase: Phase,
    rng: R,
}

impl QuizEngine<StdRng> {
    /// Build an engine seeded from `config.rng_seed`, or from entropy when unset.
    pub fn new(items: Vec<VocabItem>, config: &EngineConfig) -> Result<Self> {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        log::debug!(
            "new quiz session: {} items, round size {}, seeded: {}",
            items.len(),
            config.round_size,
            config.rng_seed.is_some()
        );
        Self::with_rng(items, config.round_size, rng)
    }
}

impl<R: Rng> QuizEngine<R> {
    /// Build an engine driven by a caller-supplied random source.
    ///
    /// Items are deduplicated by id first. Fails with
    /// [`QuizError::InsufficientPool`] unless more distinct items remain than
    /// `round_size`.
    pub fn with_rng(items: Vec<VocabItem>, round_size: usize, mut rng: R) -> Result<Self> {
        if round_size == 0 {
            return Err(QuizError::InvalidRoundSize);
        }
        let items = dedup_by_id(items);
        if items.len() <= round_size {
            return Err(QuizError::InsufficientPool {
                available: items.len(),
                round_size,
            });
        }

        let pool = Pool::new_shuffled(items, &mut rng);
        let mut engine = QuizEngine {
            pool,
            round: Vec::with_capacity(round_size),
            correct_slot: 0,
            correct_count: 0,
            mistake_count: 0,
            phase: Phase::Playing,
            rng,
        };
        while engine.round.len() < round_size {
            let pos = engine.draw()?;
            engine.round.push(pos);
        }
        engine.reroll_correct_slot();
        Ok(engine)
    }

    /// Next pool position not already on screen.
    fn draw(&mut self) -> Result<usize> {
        // Unreachable while pool.len() > round size, which construction enforces.
        self.pool
            .draw_distinct(&self.round)
            .ok_or(QuizError::InsufficientPool {
                available: self.pool.len(),
                round_size: self.round.len(),
            })
    }

    fn reroll_correct_slot(&mut self) {
        self.correct_slot = self.rng.gen_range(0..self.round.len());
    }

    /// Score a guess for the slot at `index`.
    ///
    /// Out-of-range indices and guesses after the session ended are errors and
    /// leave every counter untouched.
    pub fn submit_guess(&mut self, index: usize) -> Result<GuessOutcome> {
        if self.phase == Phase::Ended {
            log::warn!("guess {index} rejected: session already ended");
            return Err(QuizError::SessionEnded);
        }
        if index >= self.round.len() {
            log::warn!("guess {index} rejected: only {} choices", self.round.len());
            return Err(QuizError::ChoiceOutOfRange {
                index,
                round_size: self.round.len(),
            });
        }

        if index != self.correct_slot {
            self.mistake_count += 1;
            return Ok(GuessOutcome { success: false, game_over: false });
        }

        // The answered item is still in `round` while drawing, so it cannot
        // come straight back.
        let next = self.draw()?;
        self.correct_count += 1;
        self.round[index] = next;
        self.reroll_correct_slot();

        let game_over = self.remaining() == 0;
        if game_over {
            self.phase = Phase::Ended;
            log::info!(
                "quiz session finished: {} correct, {} mistakes",
                self.correct_count,
                self.mistake_count
            );
        }
        Ok(GuessOutcome { success: true, game_over })
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// Items on the answer buttons, in slot order.
    pub fn choices(&self) -> Vec<&VocabItem> {
        self.round.iter().map(|&pos| self.pool.get(pos)).collect()
    }

    pub fn round_size(&self) -> usize {
        self.round.len()
    }

    pub fn correct_slot(&self) -> usize {
        self.correct_slot
    }

    pub fn correct_item(&self) -> &VocabItem {
        self.pool.get(self.round[self.correct_slot])
    }

    /// The definition the player has to match.
    pub fn prompt(&self) -> &str {
        &self.correct_item().prompt_text
    }

    /// Rounds still to win before the session ends.
    pub fn remaining(&self) -> usize {
        self.total().saturating_sub(self.correct_count)
    }

    pub fn total(&self) -> usize {
        self.pool.len()
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn mistake_count(&self) -> usize {
        self.mistake_count
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Ended
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            corrects: self.correct_count,
            mistakes: self.mistake_count,
            remaining: self.remaining(),
            total: self.total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn items(n: usize) -> Vec<VocabItem> {
        (0..n)
            .map(|i| VocabItem::new(format!("w{i}"), format!("r{i}"), format!("def {i}")))
            .collect()
    }

    fn seeded(n: usize, round_size: usize, seed: u64) -> QuizEngine {
        let config = EngineConfig::new().with_round_size(round_size).with_seed(seed);
        QuizEngine::new(items(n), &config).unwrap()
    }

    #[test]
    fn round_is_filled_on_construction() {
        let engine = seeded(5, 3, 42);
        assert_eq!(engine.choices().len(), 3);
        assert!(engine.correct_slot() < 3);
        assert_eq!(engine.prompt(), engine.choices()[engine.correct_slot()].prompt_text);
    }

    #[test]
    fn zero_round_size_is_rejected() {
        let err = QuizEngine::new(items(5), &EngineConfig::new().with_round_size(0)).err();
        assert!(matches!(err, Some(QuizError::InvalidRoundSize)));
    }

    #[test]
    fn duplicates_do_not_count_towards_the_pool() {
        let mut list = items(3);
        list.push(list[0].clone());
        let err = QuizEngine::new(list, &EngineConfig::new()).err();
        assert!(matches!(
            err,
            Some(QuizError::InsufficientPool { available: 3, round_size: 3 })
        ));
    }

    #[test]
    fn custom_rng_is_used() {
        let rng = StdRng::seed_from_u64(3);
        let engine = QuizEngine::with_rng(items(8), 4, rng).unwrap();
        assert_eq!(engine.round_size(), 4);
        assert_eq!(engine.total(), 8);
    }

    #[test]
    fn injected_rng_picks_the_correct_slot() {
        // A source stuck at zero always lands on the first slot.
        let rng = StepRng::new(0, 0);
        let mut engine = QuizEngine::with_rng(items(10), 3, rng).unwrap();
        for _ in 0..9 {
            assert_eq!(engine.correct_slot(), 0);
            assert!(engine.submit_guess(0).unwrap().success);
        }
        assert_eq!(engine.correct_slot(), 0);
        assert!(engine.submit_guess(0).unwrap().game_over);
    }

    #[test]
    fn round_size_one_always_hits() {
        let mut engine = seeded(4, 1, 9);
        for _ in 0..3 {
            assert_eq!(engine.correct_slot(), 0);
            let out = engine.submit_guess(0).unwrap();
            assert!(out.success);
            assert!(!out.game_over);
        }
        assert!(engine.submit_guess(0).unwrap().game_over);
    }

    #[test]
    fn stats_reflect_counters() {
        let mut engine = seeded(6, 3, 5);
        let wrong = (engine.correct_slot() + 1) % 3;
        engine.submit_guess(wrong).unwrap();
        let right = engine.correct_slot();
        engine.submit_guess(right).unwrap();
        assert_eq!(
            engine.stats(),
            SessionStats { corrects: 1, mistakes: 1, remaining: 5, total: 6 }
        );
    }
}
