use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Recorded gender of a goat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(format!("Invalid gender: {}", s)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// A single herd record.
///
/// Field names are the wire format: `/api/goats` serializes these records
/// as-is, so `id`, `weight`, and `gender` must stay stable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goat {
    /// Ear-tag identifier, unique within the herd
    pub id: String,
    /// Body weight in kilograms
    pub weight: u32,
    /// Recorded gender
    pub gender: Gender,
}

impl Goat {
    /// Create a new record.
    pub fn new(id: impl Into<String>, weight: u32, gender: Gender) -> Self {
        Self {
            id: id.into(),
            weight,
            gender,
        }
    }
}
