//! Stringed instruments: tunings and the fretboard grids built from them.

pub mod fretboard;
pub mod tuning;

pub use fretboard::{Fretboard, MAX_FRETS};
pub use tuning::Tuning;
