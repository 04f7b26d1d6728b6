//! Pitch arithmetic, note spelling and scale construction.

pub mod notes;
pub mod pitch;
pub mod scales;

pub use notes::{Hz, Note};
pub use pitch::Letter;
pub use scales::{Scale, ScaleType};
