use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raw answers keyed by question id. Values are kept as read; range
/// enforcement happens in the scoring stage under the selected policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    values: BTreeMap<String, i64>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, value: i64) {
        self.values.insert(id.into(), value);
    }

    pub fn get(&self, id: &str) -> Option<i64> {
        self.values.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerFormat {
    Json,
    Tsv,
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("answers parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid answer line {line}: {reason}")]
    InvalidLine { line: usize, reason: String },
}

pub fn load_answers(path: &Path, format: AnswerFormat) -> Result<AnswerSet, InputError> {
    let raw = fs::read_to_string(path)?;
    match format {
        AnswerFormat::Json => parse_answers_json(&raw),
        AnswerFormat::Tsv => parse_answers_tsv(&raw),
    }
}

/// Picks the format from the file extension; anything but `.tsv`/`.txt` is
/// treated as JSON.
pub fn detect_format(path: &Path) -> AnswerFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tsv") | Some("txt") => AnswerFormat::Tsv,
        _ => AnswerFormat::Json,
    }
}

pub fn parse_answers_json(raw: &str) -> Result<AnswerSet, InputError> {
    let answers: AnswerSet = serde_json::from_str(raw)?;
    Ok(answers)
}

/// Two-column `id<TAB>value` lines; blank lines and `#` comments are skipped.
pub fn parse_answers_tsv(raw: &str) -> Result<AnswerSet, InputError> {
    let mut answers = AnswerSet::new();
    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split('\t');
        let id = fields.next().unwrap_or("").trim();
        let value = fields.next().map(str::trim);
        if id.is_empty() {
            return Err(InputError::InvalidLine {
                line: line_no,
                reason: "empty question id".to_string(),
            });
        }
        let Some(value) = value else {
            return Err(InputError::InvalidLine {
                line: line_no,
                reason: "missing value column".to_string(),
            });
        };
        let parsed = value.parse::<i64>().map_err(|_| InputError::InvalidLine {
            line: line_no,
            reason: format!("value is not an integer: {value}"),
        })?;
        if answers.get(id).is_some() {
            tracing::warn!(line = line_no, id, "duplicate answer id; keeping first");
            continue;
        }
        answers.insert(id, parsed);
    }
    Ok(answers)
}
