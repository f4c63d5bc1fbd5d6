//! Game state and player operations

pub mod actions;
pub mod logger;
pub mod state;

pub use actions::{GROW_BONUS, REST_POINTS, USE_COST};
pub use logger::{GameLogger, LogEntry, LogGuard, OutputMode, VerbosityLevel};
pub use state::GameState;
