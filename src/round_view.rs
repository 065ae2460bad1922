use rand::Rng;
use serde_json::{json, Value};

use crate::quiz_engine::{models::VocabItem, QuizEngine};

/// Text for one answer button.
///
/// The reading goes on a second line when hints are on (or when there is no
/// written form to show), unless it would just repeat the first line.
pub fn choice_label(item: &VocabItem, show_hint: bool) -> String {
    let mut label = item.answer_text.clone();
    if (show_hint || label.is_empty()) && item.answer_text != item.hint_text {
        label.push('\n');
        label.push_str(&item.hint_text);
    }
    label.trim().to_string()
}

/// Build one choice entry.
fn choice(slot: usize, item: &VocabItem, show_hint: bool) -> Value {
    json!({
        "slot": slot,
        "id": item.id,
        "label": choice_label(item, show_hint),
    })
}

/// Map the current round to a render-ready JSON object.
///
/// The host draws the prompt box, one button per entry in `choices`, and a
/// health bar from `health_percent`/`hp`.
pub fn round_view<R: Rng>(engine: &QuizEngine<R>, show_hint: bool) -> Value {
    let choices: Vec<Value> = engine
        .choices()
        .into_iter()
        .enumerate()
        .map(|(slot, item)| choice(slot, item, show_hint))
        .collect();

    let remaining = engine.remaining();
    let total = engine.total();
    // total is never zero: construction rejects pools that small.
    let health_percent = remaining as f64 / total as f64;

    json!({
        "prompt": engine.prompt(),
        "choices": choices,
        "remaining": remaining,
        "total": total,
        "health_percent": health_percent,
        "hp": remaining * 10,
        "finished": engine.is_finished(),
    })
}
