//! Orchard Sim - text-driven game-state simulator
//!
//! A single in-memory model tracks fruit-tree inventories across named
//! locations, a player's experience score, the current season, and a
//! history of reversible actions. A CLI shell drives the model; the model
//! itself does no I/O beyond its report channel.

pub mod core;
pub mod error;
pub mod game;
pub mod history;

pub use error::{OrchardError, Result};
