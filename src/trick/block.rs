use super::word::Word;
use crate::error::{TdxResult, TrickdexError};

/// A compounded run of words. Every word before the last carries zero
/// points; the last word (the terminator) carries the block's base points.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    words: Vec<Word>,
    points: f64,
}

impl Block {
    /// Folds the run into a single score: seed with the terminator's points,
    /// then walk from the terminator index down to the first word applying
    /// each trailing modifier to the running total. The walk includes the
    /// terminator itself, so its own `percentage_after` compounds once onto
    /// its own points. Every historical score was produced by exactly this
    /// walk; do not change it without a migration plan for stored points.
    pub fn assemble(words: Vec<Word>) -> TdxResult<Self> {
        let last = words.last().ok_or(TrickdexError::EmptyBlock)?;
        if last.points() == 0.0 {
            return Err(TrickdexError::EmptyBlock);
        }

        let mut total = last.points();
        for word in words.iter().rev() {
            total += word.percentage_after() * total;
        }

        Ok(Self {
            words,
            points: total,
        })
    }

    pub fn points(&self) -> f64 {
        self.points
    }

    /// Leading modifier seen by the part before this block: the
    /// terminator's, since it is the word that closes the run.
    pub fn percentage_before(&self) -> f64 {
        match self.words.last() {
            Some(w) => w.percentage_before(),
            None => 0.0,
        }
    }

    /// A closed block never compounds onto following parts.
    pub fn percentage_after(&self) -> f64 {
        0.0
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn tokens(&self) -> Vec<&str> {
        self.words.iter().map(|w| w.token()).collect()
    }

    pub fn contains_token(&self, token: &str) -> bool {
        self.words.iter().any(|w| w.token() == token)
    }
}
