use std::collections::HashMap;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::{
    error::Result,
    models::{SessionMeta, SessionStats},
};

/// End-of-session payload handed to the results screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub duration_secs: f64,
    pub corrects: usize,
    pub mistakes: usize,
    pub meta: SessionMeta,
}

impl SessionSummary {
    /// The engine only knows counts; the host measures the time.
    pub fn from_stats(meta: SessionMeta, stats: SessionStats, duration_secs: f64) -> Self {
        SessionSummary {
            duration_secs,
            corrects: stats.corrects,
            mistakes: stats.mistakes,
            meta,
        }
    }

    /// Only mistake-free runs can set a best time.
    pub fn is_perfect(&self) -> bool {
        self.mistakes == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RecordOutcome {
    /// This run is the new fastest perfect run.
    NewBest,
    /// An earlier record still stands.
    Standing(f64),
    /// No record yet and this run had mistakes.
    NoRecord,
}

/// Fastest perfect completion per (deck, pool size, difficulty).
///
/// Serializes as a flat `{key: seconds}` object so a host can drop it into
/// any key/value store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BestTimes {
    entries: HashMap<String, f64>,
}

fn best_time_key(meta: &SessionMeta) -> String {
    format!("{}-best-speed-{}-{}", meta.deck_name, meta.pool_size, meta.difficulty)
}

impl BestTimes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, meta: &SessionMeta) -> Option<f64> {
        self.entries.get(&best_time_key(meta)).copied()
    }

    /// Compare a finished run against the table, storing it if it wins.
    pub fn record(&mut self, summary: &SessionSummary) -> RecordOutcome {
        let previous = self.get(&summary.meta);
        let beats = match previous {
            Some(best) => summary.duration_secs < best,
            None       => true,
        };

        if summary.is_perfect() && beats {
            log::info!(
                "new best time for {}: {:.1}s",
                summary.meta.deck_name,
                summary.duration_secs
            );
            self.entries
                .insert(best_time_key(&summary.meta), summary.duration_secs);
            return RecordOutcome::NewBest;
        }

        match previous {
            Some(best) => RecordOutcome::Standing(best),
            None       => RecordOutcome::NoRecord,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::Difficulty;

    fn meta(difficulty: Difficulty) -> SessionMeta {
        SessionMeta {
            deck_name: "JLPT N5".to_string(),
            pool_size: 20,
            difficulty,
        }
    }

    fn run(duration: f64, mistakes: usize) -> SessionSummary {
        SessionSummary {
            duration_secs: duration,
            corrects: 20,
            mistakes,
            meta: meta(Difficulty::Normal),
        }
    }

    #[test]
    fn first_perfect_run_sets_record() {
        let mut best = BestTimes::new();
        assert_eq!(best.record(&run(42.0, 0)), RecordOutcome::NewBest);
        assert_eq!(best.get(&meta(Difficulty::Normal)), Some(42.0));
    }

    #[test]
    fn run_with_mistakes_never_records() {
        let mut best = BestTimes::new();
        assert_eq!(best.record(&run(10.0, 2)), RecordOutcome::NoRecord);
        assert!(best.is_empty());

        best.record(&run(42.0, 0));
        assert_eq!(best.record(&run(10.0, 1)), RecordOutcome::Standing(42.0));
        assert_eq!(best.get(&meta(Difficulty::Normal)), Some(42.0));
    }

    #[test]
    fn only_strictly_faster_runs_replace_record() {
        let mut best = BestTimes::new();
        best.record(&run(42.0, 0));
        assert_eq!(best.record(&run(42.0, 0)), RecordOutcome::Standing(42.0));
        assert_eq!(best.record(&run(30.5, 0)), RecordOutcome::NewBest);
        assert_eq!(best.get(&meta(Difficulty::Normal)), Some(30.5));
    }

    #[test]
    fn records_are_keyed_by_difficulty() {
        let mut best = BestTimes::new();
        best.record(&run(42.0, 0));
        assert_eq!(best.get(&meta(Difficulty::Hard)), None);
    }

    #[test]
    fn table_survives_json() {
        let mut best = BestTimes::new();
        best.record(&run(42.0, 0));
        let json = best.to_json().unwrap();
        assert!(json.contains("JLPT N5-best-speed-20-Normal"));
        assert_eq!(BestTimes::from_json(&json).unwrap(), best);
    }

    #[test]
    fn summary_takes_counts_from_stats() {
        let stats = SessionStats { corrects: 10, mistakes: 3, remaining: 0, total: 10 };
        let s = SessionSummary::from_stats(meta(Difficulty::Easy), stats, 61.5);
        assert_eq!(s.corrects, 10);
        assert_eq!(s.mistakes, 3);
        assert!(!s.is_perfect());
    }
}
