//! Capture rules.
//!
//! The central algorithm of the game: given a played card and the table
//! pile, decide whether the play captures, and whether the capture is a
//! Bastra.

pub mod capture;

pub use capture::{resolve_play, Disposition};
