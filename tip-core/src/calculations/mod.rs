//! Tip calculation.
//!
//! The arithmetic lives in [`tip`]; rounding helpers shared by the
//! calculation and the currency formatter live in [`common`].

pub mod common;
pub mod tip;

pub use tip::{TipEngine, calculate_tip, compute_tip};
