pub mod block;
pub mod word;

pub use block::Block;
pub use word::Word;

use crate::dictionary::WordDictionary;
use crate::error::{TdxResult, TrickdexError};
use crate::spot::{GeneralSpot, Landing};
use crate::tier::Difficulty;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// What a trick is made of once partitioned: standalone words (whole-trick
/// modifiers, or trailing words that never reached a terminator) and
/// compounded blocks.
#[derive(Debug, Clone, PartialEq)]
pub enum TrickPart {
    Word(Word),
    Block(Block),
}

impl TrickPart {
    pub fn points(&self) -> f64 {
        match self {
            Self::Word(w) => w.points(),
            Self::Block(b) => b.points(),
        }
    }

    pub fn percentage_before(&self) -> f64 {
        match self {
            Self::Word(w) => w.percentage_before(),
            Self::Block(b) => b.percentage_before(),
        }
    }

    pub fn percentage_after(&self) -> f64 {
        match self {
            Self::Word(w) => w.percentage_after(),
            Self::Block(b) => b.percentage_after(),
        }
    }

    pub fn is_block(&self) -> bool {
        matches!(self, Self::Block(_))
    }

    pub fn tokens(&self) -> Vec<&str> {
        match self {
            Self::Word(w) => vec![w.token()],
            Self::Block(b) => b.tokens(),
        }
    }

    pub fn contains_token(&self, token: &str) -> bool {
        match self {
            Self::Word(w) => w.token() == token,
            Self::Block(b) => b.contains_token(token),
        }
    }
}

/// Raw input for one trick: the ordered move tokens plus the landings it was
/// ridden at. Upstream validation has already happened; this is trusted data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickDescription {
    pub tokens: Vec<String>,
    pub landings: Vec<Landing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl TrickDescription {
    pub fn new(tokens: Vec<String>, landings: Vec<Landing>) -> Self {
        Self {
            tokens,
            landings,
            date: None,
        }
    }

    pub fn dated(tokens: Vec<String>, landings: Vec<Landing>, date: DateTime<Utc>) -> Self {
        Self {
            tokens,
            landings,
            date: Some(date),
        }
    }
}

/// A fully scored trick. Construction either succeeds with every derived
/// field populated or fails with the specific offence; no partial trick
/// ever exists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trick {
    name: String,
    #[serde(skip)]
    parts: Vec<TrickPart>,
    landings: Vec<Landing>,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<DateTime<Utc>>,
    points: f64,
    default_points: f64,
    difficulty: Difficulty,
}

impl Trick {
    pub fn from_description(dict: &WordDictionary, desc: TrickDescription) -> TdxResult<Self> {
        let words = resolve_words(dict, &desc.tokens)?;
        let parts = partition(words)?;

        let idx_first_block = parts
            .iter()
            .position(TrickPart::is_block)
            .ok_or(TrickdexError::NoBlockFound)?;

        let default_points = compound(&parts, idx_first_block);
        let points = default_points + default_points * GeneralSpot::max_percentage(&desc.landings);
        let difficulty = Difficulty::classify(default_points);
        let name = desc.tokens.join(" ");

        debug!(
            "Scored '{}': {:.1} base -> {:.1} with spot bonus ({})",
            name, default_points, points, difficulty
        );

        Ok(Self {
            name,
            parts,
            landings: desc.landings,
            date: desc.date,
            points,
            default_points,
            difficulty,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Spot-adjusted score, the externally reported value.
    pub fn points(&self) -> f64 {
        self.points
    }

    /// Spot-independent score; difficulty classification runs on this one.
    pub fn default_points(&self) -> f64 {
        self.default_points
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn parts(&self) -> &[TrickPart] {
        &self.parts
    }

    pub fn landings(&self) -> &[Landing] {
        &self.landings
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    pub fn landed_at(&self, spot: GeneralSpot) -> bool {
        self.landings.iter().any(|l| l.spot == spot)
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.parts.iter().any(|p| p.contains_token(token))
    }
}

fn resolve_words(dict: &WordDictionary, tokens: &[String]) -> TdxResult<Vec<Word>> {
    let mut words = Vec::with_capacity(tokens.len());
    for token in tokens {
        let word = Word::resolve(dict, token);
        if !word.is_recognized() {
            return Err(TrickdexError::UnrecognizedWord {
                token: token.clone(),
            });
        }
        words.push(word);
    }
    Ok(words)
}

// Whole-trick modifiers stand alone. Everything else buffers until a word
// with points closes the run into a block; a trailing run that never reaches
// a terminator degrades to standalone zero-scoring words.
fn partition(words: Vec<Word>) -> TdxResult<Vec<TrickPart>> {
    let mut parts = Vec::new();
    let mut buffer: Vec<Word> = Vec::new();

    for word in words {
        if word.applies_to_whole() {
            parts.push(TrickPart::Word(word));
        } else {
            let closes_block = word.points() != 0.0;
            buffer.push(word);
            if closes_block {
                let block = Block::assemble(std::mem::take(&mut buffer))?;
                parts.push(TrickPart::Block(block));
            }
        }
    }

    for word in buffer {
        parts.push(TrickPart::Word(word));
    }

    Ok(parts)
}

// Forward from the first block, folding each next part's leading modifier
// into the running total, then backward over the leading standalone parts
// with their trailing modifiers.
fn compound(parts: &[TrickPart], idx_first_block: usize) -> f64 {
    let mut points = 0.0;

    for i in idx_first_block..parts.len() {
        points += parts[i].points();
        if i != parts.len() - 1 {
            points += parts[i + 1].percentage_before() * points;
        }
    }

    for i in (0..idx_first_block).rev() {
        points += parts[i].percentage_after() * points;
    }

    points
}
