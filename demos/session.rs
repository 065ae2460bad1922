//! Scripted play-through of one quiz session.
//!
//! Run with: `RUST_LOG=debug cargo run --example session`
//!
//! This example shows how `vocab_quiz` works end to end:
//!
//! 1. **Normalization**: a flashcard-service JSON payload (with HTML in the
//!    fields) is mapped to `VocabItem`s.
//! 2. **Play**: a seeded engine is driven by a scripted player who misses
//!    every fourth round, printing the round view before each guess.
//! 3. **Results**: the counts become a `SessionSummary`, which is checked
//!    against a `BestTimes` table and printed as JSON.

use std::time::Instant;

use vocab_quiz::{
    fit_pool_size, normalize_notes, round_view, BestTimes, Difficulty, EngineConfig, NoteBatch,
    QuizEngine, RecordOutcome, SessionMeta, SessionSummary,
};

const NOTES: &str = r#"{"data": [
    {"note_id": 1, "fields": {"Expression": "<a href='/w/neko'>猫</a>", "Reading": "ねこ", "Glossary": "cat"}},
    {"note_id": 2, "fields": {"Expression": "犬", "Reading": "いぬ", "Glossary-Brief": "dog", "Glossary": "dog; hound"}},
    {"note_id": 3, "fields": {"Expression": "空", "Reading": "そら", "Glossary": "sky; the heavens"}},
    {"note_id": 4, "fields": {"Expression": "海", "Reading": "うみ", "Glossary": "sea; ocean"}},
    {"note_id": 5, "fields": {"Expression": "山", "Reading": "やま", "Glossary": "mountain"}},
    {"note_id": 6, "fields": {"Expression": "川", "Reading": "かわ", "Glossary": "river"}},
    {"note_id": 7, "fields": {"Expression": "車", "Reading": "くるま", "Glossary": "car"}},
    {"note_id": 8, "fields": {"Expression": "電話", "Reading": "でんわ", "Glossary": "telephone"}},
    {"note_id": 9, "fields": {"Expression": "時計", "Reading": "とけい", "Glossary": "clock; watch"}},
    {"note_id": 10, "fields": {"Reading": "ありがとう", "Glossary": "thank you"}},
    {"note_id": 11, "fields": {"Expression": "図書館", "Reading": "としょかん", "Glossary": "library"}}
]}"#;

fn main() -> vocab_quiz::Result<()> {
    env_logger::init();

    let batch: NoteBatch = serde_json::from_str(NOTES)?;
    let words = normalize_notes(&batch.data);

    let config = EngineConfig::new().with_seed(2024);
    let Some(pool_size) = fit_pool_size(words.len(), 20, config.round_size) else {
        println!("Deck too small: only {} notes", words.len());
        return Ok(());
    };
    let words: Vec<_> = words.into_iter().take(pool_size).collect();
    println!("Playing {pool_size} of {} notes", batch.data.len());

    let meta = SessionMeta {
        deck_name: "Demo Deck".to_string(),
        pool_size,
        difficulty: Difficulty::Random,
    };
    match meta.difficulty.ease_filter() {
        Some(filter) => println!("Difficulty {} (notes matching `{filter}`)", meta.difficulty),
        None         => println!("Difficulty {} (whole deck)", meta.difficulty),
    }

    let mut engine = QuizEngine::new(words, &config)?;
    let started = Instant::now();
    let mut round = 0usize;

    while !engine.is_finished() {
        let view = round_view(&engine, true);
        println!();
        println!("  HP {}  Q: {}", view["hp"], view["prompt"].as_str().unwrap_or_default());
        for choice in view["choices"].as_array().into_iter().flatten() {
            let label = choice["label"].as_str().unwrap_or_default().replace('\n', " / ");
            println!("    [{}] {label}", choice["slot"]);
        }

        let pick = if round % 4 == 3 {
            (engine.correct_slot() + 1) % engine.round_size()
        } else {
            engine.correct_slot()
        };
        let outcome = engine.submit_guess(pick)?;
        println!("  -> picked {pick}: {}", if outcome.success { "hit" } else { "blocked" });
        round += 1;
    }

    let summary = SessionSummary::from_stats(meta, engine.stats(), started.elapsed().as_secs_f64());
    println!();
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let mut best = BestTimes::new();
    match best.record(&summary) {
        RecordOutcome::NewBest       => println!("New best speed!"),
        RecordOutcome::Standing(sec) => println!("Best: {sec:.1} seconds"),
        RecordOutcome::NoRecord      => println!("Get zero misses to beat the level"),
    }
    Ok(())
}
