use crate::dictionary::{WordDefinition, WordDictionary, WordKind};

/// A token resolved against the dictionary. Resolution is total: a miss
/// yields an `Unrecognized` value with zero scoring effect. Rejecting it is
/// the trick constructor's job, so a missing word can never pass itself off
/// as a zero-point connector.
#[derive(Debug, Clone, PartialEq)]
pub enum Word {
    Known { token: String, def: WordDefinition },
    Unrecognized { token: String },
}

impl Word {
    pub fn resolve(dict: &WordDictionary, token: &str) -> Self {
        match dict.lookup(token) {
            Some(def) => Self::Known {
                token: token.to_string(),
                def: def.clone(),
            },
            None => Self::Unrecognized {
                token: token.to_string(),
            },
        }
    }

    /// The original spelling from the description, not the dictionary's.
    pub fn token(&self) -> &str {
        match self {
            Self::Known { token, .. } | Self::Unrecognized { token } => token,
        }
    }

    pub fn points(&self) -> f64 {
        match self {
            Self::Known { def, .. } => def.points,
            Self::Unrecognized { .. } => 0.0,
        }
    }

    pub fn percentage_before(&self) -> f64 {
        match self {
            Self::Known { def, .. } => def.percentage_before,
            Self::Unrecognized { .. } => 0.0,
        }
    }

    pub fn percentage_after(&self) -> f64 {
        match self {
            Self::Known { def, .. } => def.percentage_after,
            Self::Unrecognized { .. } => 0.0,
        }
    }

    pub fn applies_to_whole(&self) -> bool {
        match self {
            Self::Known { def, .. } => def.apply_to_whole,
            Self::Unrecognized { .. } => false,
        }
    }

    pub fn kind(&self) -> Option<WordKind> {
        match self {
            Self::Known { def, .. } => def.kind,
            Self::Unrecognized { .. } => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        matches!(self, Self::Known { .. })
    }
}
