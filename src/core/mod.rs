//! Core vocabulary types

pub mod direction;
pub mod orchard;
pub mod season;

pub use direction::Direction;
pub use orchard::{Grove, GROW_AMOUNT, SHRINK_AMOUNT};
pub use season::Season;
