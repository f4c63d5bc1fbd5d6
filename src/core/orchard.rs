//! Location inventory: per-place fruit counts

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Fruit added to every place by a growing-season visit
pub const GROW_AMOUNT: u32 = 100;

/// Fruit removed from every place by winter decay
pub const SHRINK_AMOUNT: u32 = 10;

/// Per-location fruit counts
///
/// Keys are fixed at construction; only the counts change afterward.
/// Counts are unsigned and all decrements saturate at zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grove {
    counts: FxHashMap<String, u32>,
}

impl Grove {
    /// Create the starting grove with its two seeded locations
    pub fn with_starting_places() -> Self {
        let mut counts = FxHashMap::default();
        counts.insert("place1".to_string(), 10);
        counts.insert("place2".to_string(), 5);
        Grove { counts }
    }

    /// Fruit count at `place`, or None if no such location exists.
    /// Lookup is an exact, case-sensitive match.
    pub fn count(&self, place: &str) -> Option<u32> {
        self.counts.get(place).copied()
    }

    /// Number of locations
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Add `amount` fruit to every location
    pub fn replenish_all(&mut self, amount: u32) {
        for count in self.counts.values_mut() {
            *count += amount;
        }
    }

    /// Remove `amount` fruit from every location, clamping at zero.
    ///
    /// Returns the names of the places whose count would have gone
    /// negative, sorted so callers can report them in a stable order.
    pub fn wither_all(&mut self, amount: u32) -> Vec<String> {
        let mut clamped = Vec::new();
        for (place, count) in self.counts.iter_mut() {
            if *count < amount {
                *count = 0;
                clamped.push(place.clone());
            } else {
                *count -= amount;
            }
        }
        clamped.sort();
        clamped
    }
}
