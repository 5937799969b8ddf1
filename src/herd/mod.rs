//! Herd records module.
//!
//! Owns the in-memory collection of goat records served by the dashboard
//! and the JSON API. The collection is built once at startup, validated at
//! construction, and read-only for the process lifetime.

mod error;
mod goat;

pub use error::*;
pub use goat::*;

use std::collections::HashSet;

/// The herd holds every goat record known to this instance.
///
/// Records keep their insertion order, which is the display order on the
/// dashboard and the serialization order on `/api/goats`. The herd never
/// changes after construction, so handlers can share it behind an `Arc`
/// without locking.
///
/// # Examples
///
/// ```
/// use herdboard::herd::{Gender, Goat, Herd};
///
/// let herd = Herd::new(vec![Goat::new("007", 41, Gender::Female)]).unwrap();
/// assert_eq!(herd.len(), 1);
/// assert_eq!(herd.get("007").unwrap().weight, 41);
/// ```
pub struct Herd {
    goats: Vec<Goat>,
}

impl Herd {
    /// Build a herd from a list of records.
    ///
    /// # Errors
    ///
    /// Returns `HerdError::EmptyId` if a record has an empty id, or
    /// `HerdError::DuplicateId` if two records share one.
    pub fn new(goats: Vec<Goat>) -> Result<Self, HerdError> {
        let mut seen = HashSet::new();
        for goat in &goats {
            if goat.id.is_empty() {
                return Err(HerdError::EmptyId);
            }
            if !seen.insert(goat.id.as_str()) {
                return Err(HerdError::DuplicateId(goat.id.clone()));
            }
        }
        Ok(Self { goats })
    }

    /// The built-in herd served until a live feed replaces it.
    pub fn starter() -> Self {
        let goats = vec![
            Goat::new("001", 45, Gender::Male),
            Goat::new("002", 38, Gender::Female),
            Goat::new("003", 52, Gender::Male),
        ];
        Self::new(goats).expect("starter herd records are valid")
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[Goat] {
        &self.goats
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&Goat> {
        self.goats.iter().find(|g| g.id == id)
    }

    /// Number of records in the herd.
    pub fn len(&self) -> usize {
        self.goats.len()
    }

    /// Whether the herd has no records.
    pub fn is_empty(&self) -> bool {
        self.goats.is_empty()
    }
}
