use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Canonical landing taxonomy. Every spot maps to a fixed score bonus;
/// the engine only ever consumes the maximum bonus across a trick's landings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum GeneralSpot {
    Flat,
    Street,
    Park,
}

impl GeneralSpot {
    pub fn percentage(&self) -> f64 {
        match self {
            Self::Flat => 0.5,
            Self::Street => 0.3,
            Self::Park => 0.0,
        }
    }

    /// Highest bonus among the given landings. An empty slice yields 0.0,
    /// so scoring stays total even when upstream hands over no context.
    pub fn max_percentage(landings: &[Landing]) -> f64 {
        landings
            .iter()
            .map(|l| l.spot.percentage())
            .fold(0.0, f64::max)
    }
}

/// Fine-grained taxonomy from historical session data. Read-only: new data
/// uses [`GeneralSpot`], old data upgrades through [`Spot::to_general`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Spot {
    Flat,
    IntoBank,
    DropIn,
    Air,
    Flyout,
    OffLedge,
}

impl Spot {
    pub fn percentage(&self) -> f64 {
        match self {
            Self::Flat => 0.5,
            Self::IntoBank => 0.3,
            Self::DropIn => 0.2,
            Self::Air => 0.0,
            Self::Flyout => 0.0,
            Self::OffLedge => 0.3,
        }
    }

    // Lossy: the legacy tiers collapse onto the three canonical ones.
    pub fn to_general(&self) -> GeneralSpot {
        match self {
            Self::Flat => GeneralSpot::Flat,
            Self::IntoBank | Self::DropIn | Self::OffLedge => GeneralSpot::Street,
            Self::Air | Self::Flyout => GeneralSpot::Park,
        }
    }
}

/// One recorded landing of a trick: where, and (if known) when.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landing {
    pub spot: GeneralSpot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

impl Landing {
    pub fn new(spot: GeneralSpot) -> Self {
        Self { spot, date: None }
    }

    pub fn dated(spot: GeneralSpot, date: DateTime<Utc>) -> Self {
        Self {
            spot,
            date: Some(date),
        }
    }
}
