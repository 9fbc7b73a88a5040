//! Game rules for caro
//!
//! Freestyle rules: five or more in a row wins, along any of the four
//! axes. There are no capture or forbidden-move rules in this variant.

pub mod win;

// Re-exports for convenient access
pub use win::{creates_five, DIRECTIONS};
