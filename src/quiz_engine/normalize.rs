//! Flashcard note → [`VocabItem`] mapping.
//!
//! Notes arrive from the flashcard service as a bag of named fields, often with
//! HTML sprinkled in (dictionary links, `<b>`, `<br>`). This module strips the
//! markup and picks which field plays which role:
//!
//! | Item field    | Source |
//! |---------------|--------|
//! | `prompt_text` | `Glossary-Brief`, falling back to `Glossary` |
//! | `answer_text` | `Expression`, falling back to `Reading` |
//! | `hint_text`   | `Reading` |
//! | `id`          | `"{Expression}:{Reading}"` |

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::models::VocabItem;

pub const FIELD_EXPRESSION: &str = "Expression";
pub const FIELD_READING: &str = "Reading";
pub const FIELD_GLOSSARY: &str = "Glossary";
pub const FIELD_GLOSSARY_BRIEF: &str = "Glossary-Brief";

/// One note as returned by the flashcard service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNote {
    #[serde(default)]
    pub note_id: Option<i64>,
    #[serde(default)]
    pub fields: HashMap<String, String>,
}

impl RawNote {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// The `{"data": [...]}` envelope the notes endpoint wraps its results in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteBatch {
    #[serde(default)]
    pub data: Vec<RawNote>,
}

fn tag_pattern() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<.*?>").expect("static tag pattern"))
}

/// Remove every `<...>` tag and trim the result.
pub fn strip_markup(s: &str) -> String {
    tag_pattern().replace_all(s, "").trim().to_string()
}

fn clean_field(note: &RawNote, name: &str) -> String {
    note.field(name).map(strip_markup).unwrap_or_default()
}

/// Map one note. Returns `None` when the note has nothing to put on a button.
pub fn normalize_note(note: &RawNote) -> Option<VocabItem> {
    let expression = clean_field(note, FIELD_EXPRESSION);
    let reading = clean_field(note, FIELD_READING);

    let brief = clean_field(note, FIELD_GLOSSARY_BRIEF);
    let prompt_text = if brief.is_empty() {
        clean_field(note, FIELD_GLOSSARY)
    } else {
        brief
    };

    let answer_text = if expression.is_empty() {
        reading.clone()
    } else {
        expression.clone()
    };
    if answer_text.is_empty() {
        return None;
    }

    Some(VocabItem {
        id: format!("{}:{}", expression, reading),
        answer_text,
        hint_text: reading,
        prompt_text,
    })
}

/// Map a batch of notes, skipping (and logging) ones with no usable text.
pub fn normalize_notes(notes: &[RawNote]) -> Vec<VocabItem> {
    notes
        .iter()
        .filter_map(|note| {
            let item = normalize_note(note);
            if item.is_none() {
                log::warn!("skipping note {:?}: no expression or reading", note.note_id);
            }
            item
        })
        .collect()
}

/// Keep the first item for every id, preserving order.
pub fn dedup_by_id(items: Vec<VocabItem>) -> Vec<VocabItem> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.id.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(fields: &[(&str, &str)]) -> RawNote {
        RawNote {
            note_id: Some(1),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn strips_anchor_tags() {
        assert_eq!(
            strip_markup(r#"<a href="https://jisho.org/search/猫">猫</a>"#),
            "猫"
        );
        assert_eq!(strip_markup("cat<br>feline "), "catfeline");
        assert_eq!(strip_markup("no tags"), "no tags");
    }

    #[test]
    fn prefers_brief_glossary() {
        let item = normalize_note(&note(&[
            (FIELD_EXPRESSION, "猫"),
            (FIELD_READING, "ねこ"),
            (FIELD_GLOSSARY, "cat; feline (Felis catus)"),
            (FIELD_GLOSSARY_BRIEF, "<b>cat</b>"),
        ]))
        .unwrap();
        assert_eq!(item.prompt_text, "cat");
        assert_eq!(item.answer_text, "猫");
        assert_eq!(item.hint_text, "ねこ");
        assert_eq!(item.id, "猫:ねこ");
    }

    #[test]
    fn falls_back_to_full_glossary() {
        let item = normalize_note(&note(&[
            (FIELD_EXPRESSION, "犬"),
            (FIELD_READING, "いぬ"),
            (FIELD_GLOSSARY, "dog"),
            (FIELD_GLOSSARY_BRIEF, "<br>"),
        ]))
        .unwrap();
        assert_eq!(item.prompt_text, "dog");
    }

    #[test]
    fn reading_stands_in_for_missing_expression() {
        let item = normalize_note(&note(&[
            (FIELD_READING, "ありがとう"),
            (FIELD_GLOSSARY, "thank you"),
        ]))
        .unwrap();
        assert_eq!(item.answer_text, "ありがとう");
        assert_eq!(item.hint_text, "ありがとう");
        assert_eq!(item.id, ":ありがとう");
    }

    #[test]
    fn empty_notes_are_dropped() {
        let notes = vec![
            note(&[(FIELD_GLOSSARY, "orphan gloss")]),
            note(&[(FIELD_EXPRESSION, "空"), (FIELD_READING, "そら"), (FIELD_GLOSSARY, "sky")]),
        ];
        let items = normalize_notes(&notes);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].answer_text, "空");
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let items = vec![
            VocabItem::new("海", "うみ", "sea"),
            VocabItem::new("山", "やま", "mountain"),
            VocabItem::new("海", "うみ", "ocean"),
        ];
        let out = dedup_by_id(items);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].prompt_text, "sea");
    }

    #[test]
    fn parses_service_envelope() {
        let json = r#"{
            "data": [
                {"note_id": 11, "fields": {"Expression": "川", "Reading": "かわ", "Glossary": "river"}},
                {"fields": {"Reading": "やま", "Glossary": "mountain"}}
            ]
        }"#;
        let batch: NoteBatch = serde_json::from_str(json).unwrap();
        let items = normalize_notes(&batch.data);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "川:かわ");
        assert_eq!(items[1].answer_text, "やま");
    }
}
