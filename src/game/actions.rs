//! Player operations on the game state
//!
//! Every operation reports its observable outcome through the state's
//! logger; return values (where they exist) are separate from reports.
//! The undoable operations (`grab`, `drop_fruit`, `rest`) are
//! perform-and-record wrappers around non-recording steps, which `undo`
//! also uses to reverse them.

use crate::core::{Direction, Season, GROW_AMOUNT, SHRINK_AMOUNT};
use crate::game::GameState;
use crate::history::HistoryEntry;

/// Experience awarded by a rest
pub const REST_POINTS: i64 = 2;

/// Experience cost of using a fruit
pub const USE_COST: i64 = 2;

/// Flat experience bonus for a growing-season orchard visit
pub const GROW_BONUS: i64 = 10;

impl GameState {
    /// Grab a fruit, gaining experience equal to the length of its name.
    /// Recorded in the history for undo.
    pub fn grab(&mut self, fruit: &str) {
        self.grab_step(fruit);
        self.history.record(HistoryEntry::Grab {
            fruit: fruit.to_string(),
        });
    }

    pub(crate) fn grab_step(&mut self, fruit: &str) {
        self.logger.normal(&format!("Grabbing {fruit}"));
        let gained = fruit.chars().count() as i64;
        self.experience_points += gained;
        self.logger
            .normal(&format!("You gained {gained} experience points."));
    }

    /// Drop a fruit, losing experience equal to the length of its name.
    /// Recorded in the history for undo. Returns a confirmation string.
    pub fn drop_fruit(&mut self, fruit: &str) -> String {
        let confirmation = self.drop_step(fruit);
        self.history.record(HistoryEntry::Drop {
            fruit: fruit.to_string(),
        });
        confirmation
    }

    pub(crate) fn drop_step(&mut self, fruit: &str) -> String {
        self.logger.normal(&format!("Dropping {fruit}"));
        let lost = fruit.chars().count() as i64;
        self.experience_points -= lost;
        self.logger
            .normal(&format!("You lost {lost} experience points."));
        format!("Dropped {fruit}")
    }

    /// Examine a fruit tree and report how much fruit it holds.
    ///
    /// The argument is matched exactly (case-sensitively) against the
    /// location keys; fruit and location names share one namespace here.
    /// The current experience total is reported either way.
    pub fn examine(&self, fruit: &str) {
        self.logger.normal(&format!("Examining {fruit}"));
        match self.grove.count(fruit) {
            Some(count) => {
                self.logger
                    .normal(&format!("There are {count} {fruit}s on the tree."));
            }
            None => {
                self.logger
                    .normal(&format!("You do not see any {fruit} tree here."));
            }
        }
        self.logger.normal(&format!(
            "Your current experience points: {}",
            self.experience_points
        ));
    }

    /// Use a fruit. Always costs exactly two experience points,
    /// regardless of the fruit.
    pub fn use_item(&mut self, fruit: &str) {
        self.experience_points -= USE_COST;
        self.logger.normal(&format!(
            "Used {fruit}. Experience points decremented by {USE_COST}. \
             Current experience points: {}",
            self.experience_points
        ));
    }

    /// Walk in a direction. Accepts forward/backward/left/right in any
    /// case; anything else is reported invalid. Mutates no state.
    pub fn walk(&self, direction: &str) -> bool {
        if direction.parse::<Direction>().is_ok() {
            self.logger.normal(&format!("Walking {direction}"));
            true
        } else {
            self.logger.normal("Invalid direction");
            false
        }
    }

    /// Fly to coordinates. Valid iff both are non-negative. Mutates no
    /// state.
    pub fn fly(&self, x: i32, y: i32) -> bool {
        if x >= 0 && y >= 0 {
            self.logger
                .normal(&format!("Flying to coordinates ({x}, {y})"));
            true
        } else {
            self.logger.normal("Invalid coordinates");
            false
        }
    }

    /// Winter decay: every location loses fruit, clamping at zero; a
    /// clamped location is reported closed. Outside winter (or with the
    /// season unset) the inventory is untouched. Always returns 0.
    pub fn shrink(&mut self) -> i64 {
        self.logger.normal("Shrinking number");
        if self.season == Some(Season::Winter) {
            for place in self.grove.wither_all(SHRINK_AMOUNT) {
                self.logger
                    .minimal(&format!("Warning: Fruit count in {place} is negative."));
                self.logger
                    .minimal(&format!("The place {place} is now closed."));
            }
        }
        0
    }

    /// Growing-season replenishment: every location gains fruit and the
    /// player earns a flat visit bonus, once per call. Outside spring and
    /// summer (or with the season unset) nothing changes. Always
    /// returns 0.
    pub fn grow(&mut self) -> i64 {
        self.logger.normal("Growing number");
        if let Some(season) = self.season.filter(Season::is_growing) {
            self.grove.replenish_all(GROW_AMOUNT);
            self.logger
                .normal("All fruit trees have been replenished with fruits.");
            self.experience_points += GROW_BONUS;
            self.logger.normal(&format!(
                "You gained {GROW_BONUS} experience points for visiting \
                 the fruit trees during {season}."
            ));
        }
        0
    }

    /// Rest, gaining two experience points. Recorded in the history for
    /// undo.
    pub fn rest(&mut self) {
        self.rest_step();
        self.history.record(HistoryEntry::Rest {
            points: REST_POINTS,
        });
    }

    pub(crate) fn rest_step(&mut self) {
        self.logger.normal("Resting");
        self.experience_points += REST_POINTS;
        self.logger
            .normal(&format!("You gained {REST_POINTS} experience points for resting."));
    }
}
