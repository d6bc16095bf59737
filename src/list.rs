use crate::dictionary::WordDictionary;
use crate::error::{TdxResult, TrickdexError};
use crate::spot::GeneralSpot;
use crate::tier::Rank;
use crate::trick::{Trick, TrickDescription};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Raw input for a rider's collection. At most 5 tricks can be pinned;
/// the cap is enforced here so no list ever exists with an oversized set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickListDescription {
    pub tricks: Vec<TrickDescription>,
    pub pinned: Vec<usize>,
}

impl TrickListDescription {
    pub fn new(tricks: Vec<TrickDescription>, pinned: Vec<usize>) -> TdxResult<Self> {
        if pinned.len() > 5 {
            return Err(TrickdexError::PinnedOverflow {
                count: pinned.len(),
            });
        }
        Ok(Self { tricks, pinned })
    }
}

/// A rider's tricks, unique by name. Pinned indices are plain positions into
/// the list; the engine never dereferences them, it only hands them back.
#[derive(Debug, Clone, Default)]
pub struct TrickList {
    tricks: Vec<Trick>,
    pinned: Vec<usize>,
}

impl TrickList {
    pub fn from_description(dict: &WordDictionary, desc: TrickListDescription) -> TdxResult<Self> {
        let mut list = Self {
            tricks: Vec::with_capacity(desc.tricks.len()),
            pinned: desc.pinned,
        };
        for trick_desc in desc.tricks {
            let trick = Trick::from_description(dict, trick_desc)?;
            list.push(trick)?;
        }
        Ok(list)
    }

    /// Appends a trick, rejecting a name already present. On rejection the
    /// list is unchanged.
    pub fn push(&mut self, trick: Trick) -> TdxResult<()> {
        if self.find_by_name(trick.name()).is_some() {
            return Err(TrickdexError::DuplicateTrickName {
                name: trick.name().to_string(),
            });
        }
        self.tricks.push(trick);
        Ok(())
    }

    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        self.tricks.iter().position(|t| t.name() == name)
    }

    pub fn find_by_name_at(&self, name: &str, spot: GeneralSpot) -> Option<usize> {
        self.find_by_name(name)
            .filter(|&idx| self.tricks[idx].landed_at(spot))
    }

    pub fn get(&self, idx: usize) -> Option<&Trick> {
        self.tricks.get(idx)
    }

    pub fn tricks(&self) -> &[Trick] {
        &self.tricks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trick> {
        self.tricks.iter()
    }

    pub fn len(&self) -> usize {
        self.tricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tricks.is_empty()
    }

    pub fn total_points(&self) -> f64 {
        self.tricks.iter().map(Trick::points).sum()
    }

    /// Stable sort; an undated trick sorts as oldest.
    pub fn sort_by_date(&mut self, direction: SortDirection) {
        match direction {
            SortDirection::Asc => self
                .tricks
                .sort_by_key(|t| t.date().unwrap_or(DateTime::<Utc>::MIN_UTC)),
            SortDirection::Desc => self.tricks.sort_by(|a, b| {
                let da = a.date().unwrap_or(DateTime::<Utc>::MIN_UTC);
                let db = b.date().unwrap_or(DateTime::<Utc>::MIN_UTC);
                db.cmp(&da)
            }),
        }
    }

    pub fn sort_by_points(&mut self, direction: SortDirection) {
        match direction {
            SortDirection::Asc => self
                .tricks
                .sort_by(|a, b| a.points().total_cmp(&b.points())),
            SortDirection::Desc => self
                .tricks
                .sort_by(|a, b| b.points().total_cmp(&a.points())),
        }
    }

    /// The up-to-5 highest scoring tricks as (original index, points) pairs,
    /// descending by points, ties kept in original order.
    pub fn top_five_by_points(&self) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self
            .tricks
            .iter()
            .map(Trick::points)
            .enumerate()
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(5);
        ranked
    }

    /// Rank comes from the sum of the five best tricks, not the pinned set.
    pub fn user_rank(&self) -> Rank {
        let total: f64 = self.top_five_by_points().iter().map(|(_, p)| p).sum();
        Rank::classify(total)
    }

    pub fn pinned(&self) -> &[usize] {
        &self.pinned
    }

    pub fn pinned_tricks(&self) -> impl Iterator<Item = &Trick> {
        self.pinned.iter().filter_map(|&idx| self.tricks.get(idx))
    }
}
