use crate::error::{TdxResult, TrickdexError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

/// Move family a word belongs to. Optional metadata on a definition; the
/// scoring pipeline never reads it, but reports and consumers filter on it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WordKind {
    Balance,
    Rewind,
    Overhead,
    Grab,
    Whip,
    Rotation,
    BodyFlip,
}

/// One row of the dictionary source format. Historical files omit whatever a
/// word doesn't use, so every field except the token itself is defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordRecord {
    pub word: String,
    #[serde(default)]
    pub points: f64,
    #[serde(default)]
    pub percentage_before: f64,
    #[serde(default)]
    pub percentage_after: f64,
    #[serde(default)]
    pub connect: bool,
    #[serde(default)]
    pub apply_to_whole: bool,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl WordRecord {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            points: 0.0,
            percentage_before: 0.0,
            percentage_after: 0.0,
            connect: false,
            apply_to_whole: false,
            kind: None,
        }
    }

    pub fn points(mut self, points: f64) -> Self {
        self.points = points;
        self
    }

    pub fn before(mut self, pct: f64) -> Self {
        self.percentage_before = pct;
        self
    }

    pub fn after(mut self, pct: f64) -> Self {
        self.percentage_after = pct;
        self
    }

    pub fn connector(mut self) -> Self {
        self.connect = true;
        self
    }

    pub fn whole_trick(mut self) -> Self {
        self.apply_to_whole = true;
        self
    }

    pub fn kind(mut self, kind: WordKind) -> Self {
        self.kind = Some(kind.to_string());
        self
    }
}

/// A validated dictionary entry. Construction goes through
/// [`WordDictionary::from_records`]; no defaulting happens past that point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordDefinition {
    pub word: String,
    pub points: f64,
    pub percentage_before: f64,
    pub percentage_after: f64,
    pub connect: bool,
    pub apply_to_whole: bool,
    pub kind: Option<WordKind>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DictionaryFile {
    words: Vec<WordRecord>,
}

/// Read-only token lookup, built once at startup. Matching is
/// case-insensitive; the stored definition keeps the canonical spelling.
#[derive(Debug, Clone, Default)]
pub struct WordDictionary {
    entries: HashMap<String, WordDefinition>,
}

impl WordDictionary {
    /// Validates and indexes raw records. Rejects blank tokens, non-finite
    /// numbers, negative points, unknown kind strings and duplicate tokens;
    /// a bad entry fails the whole load rather than degrading lookups later.
    pub fn from_records(records: Vec<WordRecord>) -> TdxResult<Self> {
        let mut entries = HashMap::with_capacity(records.len());

        for rec in records {
            let token = rec.word.trim();
            if token.is_empty() {
                return Err(TrickdexError::Dictionary(
                    "entry with an empty word token".to_string(),
                ));
            }
            if !rec.points.is_finite()
                || !rec.percentage_before.is_finite()
                || !rec.percentage_after.is_finite()
            {
                return Err(TrickdexError::Dictionary(format!(
                    "word '{}' has a non-finite numeric field",
                    token
                )));
            }
            if rec.points < 0.0 {
                return Err(TrickdexError::Dictionary(format!(
                    "word '{}' has negative points ({})",
                    token, rec.points
                )));
            }

            let kind = match &rec.kind {
                Some(raw) => Some(WordKind::from_str(raw).map_err(|_| {
                    TrickdexError::Dictionary(format!(
                        "word '{}' has unknown type '{}'",
                        token, raw
                    ))
                })?),
                None => None,
            };

            let def = WordDefinition {
                word: token.to_string(),
                points: rec.points,
                percentage_before: rec.percentage_before,
                percentage_after: rec.percentage_after,
                connect: rec.connect,
                apply_to_whole: rec.apply_to_whole,
                kind,
            };

            if entries.insert(token.to_lowercase(), def).is_some() {
                return Err(TrickdexError::Dictionary(format!(
                    "duplicate word '{}'",
                    token
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> TdxResult<Self> {
        let content = fs::read_to_string(&path)?;
        let file: DictionaryFile = serde_json::from_str(&content)?;
        let dict = Self::from_records(file.words)?;
        debug!(
            "Loaded {} word definitions from {}",
            dict.len(),
            path.as_ref().display()
        );
        Ok(dict)
    }

    /// Embedded default vocabulary, so the binary works without a data
    /// directory. `data/words.json` ships the same entries as editable data.
    pub fn builtin() -> Self {
        use WordKind::*;

        let records = vec![
            // Scoring words
            WordRecord::new("whip").points(100.0).before(0.15).kind(Whip),
            WordRecord::new("bar").points(150.0).before(0.2).kind(Rotation),
            WordRecord::new("bri").points(250.0).before(0.25).kind(Overhead),
            WordRecord::new("360").points(120.0).before(0.3).kind(Rotation),
            WordRecord::new("twist").points(180.0).before(0.2).kind(Rotation),
            WordRecord::new("buttercup").points(300.0).before(0.3).kind(Whip),
            WordRecord::new("dono").points(260.0).before(0.25).kind(Overhead),
            WordRecord::new("finger").points(220.0).before(0.25).kind(Overhead),
            WordRecord::new("fingerblast").points(320.0).before(0.3).kind(Overhead),
            WordRecord::new("cup").points(200.0).before(0.2).kind(Whip),
            WordRecord::new("flip").points(400.0).before(0.4).kind(BodyFlip),
            WordRecord::new("rewind").points(280.0).before(0.3).kind(Rewind),
            WordRecord::new("rotor").points(240.0).before(0.25).kind(Whip),
            WordRecord::new("trivago").points(350.0).before(0.35).kind(Overhead),
            WordRecord::new("scooterfakie").points(160.0).before(0.2).kind(Balance),
            WordRecord::new("cab").points(140.0).before(0.2).kind(Rotation),
            // Connectors (zero points, trailing modifier)
            WordRecord::new("double").after(0.8).connector(),
            WordRecord::new("triple").after(1.8).connector(),
            WordRecord::new("quad").after(3.0).connector(),
            WordRecord::new("half").after(-0.4).connector(),
            WordRecord::new("full").after(0.35).connector(),
            WordRecord::new("kickless").after(0.6).connector(),
            WordRecord::new("mc").after(0.5).connector(),
            WordRecord::new("corona").after(0.7).connector(),
            WordRecord::new("heel").after(0.45).connector(),
            WordRecord::new("front scooter").after(0.4).connector(),
            WordRecord::new("back scooter").after(0.5).connector(),
            // Whole-trick modifiers
            WordRecord::new("fakie").before(0.25).after(0.25).whole_trick().kind(Balance),
            WordRecord::new("crossfoot").before(0.2).after(0.2).whole_trick().kind(Balance),
        ];

        // Fixed table; validation cannot fail on it.
        Self::from_records(records).unwrap()
    }

    pub fn lookup(&self, token: &str) -> Option<&WordDefinition> {
        self.entries.get(&token.to_lowercase())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(&token.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn definitions(&self) -> impl Iterator<Item = &WordDefinition> {
        self.entries.values()
    }
}
