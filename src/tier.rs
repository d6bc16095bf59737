use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Difficulty band of a single trick. Classified from the spot-independent
/// point total, so the same trick lands in the same band everywhere.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "title_case")]
#[repr(u8)]
pub enum Difficulty {
    Beginner = 0,
    Normal = 1,
    Intermediate = 2,
    Advanced = 3,
    Hard = 4,
    VeryHard = 5,
    Expert = 6,
    Impossible = 7,
    Goated = 8,
    Legendary = 9,
}

impl Difficulty {
    pub fn classify(points: f64) -> Self {
        if points >= 1000.0 {
            Self::Legendary
        } else if points >= 800.0 {
            Self::Goated
        } else if points >= 650.0 {
            Self::Impossible
        } else if points >= 500.0 {
            Self::Expert
        } else if points >= 350.0 {
            Self::VeryHard
        } else if points >= 250.0 {
            Self::Hard
        } else if points >= 150.0 {
            Self::Advanced
        } else if points >= 90.0 {
            Self::Intermediate
        } else if points >= 40.0 {
            Self::Normal
        } else {
            Self::Beginner
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Beginner),
            1 => Some(Self::Normal),
            2 => Some(Self::Intermediate),
            3 => Some(Self::Advanced),
            4 => Some(Self::Hard),
            5 => Some(Self::VeryHard),
            6 => Some(Self::Expert),
            7 => Some(Self::Impossible),
            8 => Some(Self::Goated),
            9 => Some(Self::Legendary),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }
}

/// Rider rank, derived from the summed points of the five best tricks.
/// Thresholds are strict: a rider sitting exactly on a cut stays below it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "title_case")]
#[repr(u8)]
pub enum Rank {
    Iron = 0,
    Bronze = 1,
    Silver = 2,
    Gold = 3,
    Platinum = 4,
    Diamond = 5,
}

impl Rank {
    pub fn classify(points: f64) -> Self {
        if points > 10000.0 {
            Self::Diamond
        } else if points > 7000.0 {
            Self::Platinum
        } else if points > 5000.0 {
            Self::Gold
        } else if points > 3000.0 {
            Self::Silver
        } else if points > 2000.0 {
            Self::Bronze
        } else {
            Self::Iron
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Iron),
            1 => Some(Self::Bronze),
            2 => Some(Self::Silver),
            3 => Some(Self::Gold),
            4 => Some(Self::Platinum),
            5 => Some(Self::Diamond),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        *self as u8
    }
}
