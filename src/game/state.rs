//! Main game state structure

use crate::core::{Grove, Season};
use crate::game::GameLogger;
use crate::history::{ActionHistory, HistoryEntry};
use serde::{Deserialize, Serialize};

/// Complete simulator state
///
/// This is the central structure that holds all mutable data: the
/// per-location fruit counts, the player's experience score, the current
/// season, and the history of reversible actions. It is constructed once
/// and passed by reference to its caller; exclusive single-caller access
/// is assumed (wrap it in a lock if you must share it across threads).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Per-location fruit counts
    pub grove: Grove,

    /// Player experience score (unbounded, may go negative)
    pub(crate) experience_points: i64,

    /// Current season; `None` means unset and gates off both seasonal ops
    pub(crate) season: Option<Season>,

    /// History of reversible actions
    pub history: ActionHistory,

    /// Report channel for observable messages (not part of the state
    /// proper; skipped by snapshots)
    #[serde(skip)]
    pub logger: GameLogger,
}

impl GameState {
    /// Create a new game: two seeded locations, zero experience, season
    /// set to spring, empty history.
    pub fn new() -> Self {
        GameState {
            grove: Grove::with_starting_places(),
            experience_points: 0,
            season: Some(Season::Spring),
            history: ActionHistory::new(),
            logger: GameLogger::new(),
        }
    }

    /// Create a new game reporting through the given logger
    pub fn with_logger(logger: GameLogger) -> Self {
        GameState {
            logger,
            ..Self::new()
        }
    }

    pub fn season(&self) -> Option<Season> {
        self.season
    }

    /// Set the season. `None` is the explicit unset state: both seasonal
    /// operations treat it as not-their-season and no-op.
    pub fn set_season(&mut self, season: Option<Season>) {
        self.season = season;
    }

    pub fn experience_points(&self) -> i64 {
        self.experience_points
    }

    pub fn set_experience_points(&mut self, points: i64) {
        self.experience_points = points;
    }

    /// Fruit count at a location, or None if no such location exists
    pub fn fruit_count(&self, place: &str) -> Option<u32> {
        self.grove.count(place)
    }

    /// Undo the most recent recorded action
    ///
    /// Pops one history entry and reverses it through the non-recording
    /// steps, so a reversal never extends the history itself. An empty
    /// history is reported and left untouched.
    pub fn undo(&mut self) {
        self.logger.normal("Undoing last action");
        let Some(entry) = self.history.pop() else {
            self.logger.normal("No actions to undo");
            return;
        };

        match entry {
            HistoryEntry::Grab { fruit } => {
                self.drop_step(&fruit);
                self.logger
                    .normal(&format!("Last action (grab) undone: Dropped {fruit}"));
            }
            HistoryEntry::Drop { fruit } => {
                self.grab_step(&fruit);
                self.logger
                    .normal(&format!("Last action (drop) undone: Grabbed {fruit}"));
            }
            HistoryEntry::Rest { points } => {
                self.experience_points -= points;
                self.logger.normal(&format!(
                    "Last action (rest) undone: Subtracted {points} experience points"
                ));
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
