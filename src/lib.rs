//! Note spelling, scale construction and fretboard layout for stringed instruments.
//!
//! The model is a handful of immutable values: a `Note` is an absolute pitch plus the letter it
//! is spelled with, a `Scale` is the ordered members of a `ScaleType` on a root, and a
//! `Fretboard` is the grid of notes a `Tuning` produces over a number of frets. Callers pick
//! roots, scale types and tunings by name, rebuild the values whenever a selection changes, and
//! ask `display::highlight` how each fretboard cell should be shown.
//!
//! ```rust
//! use fretboard::{build_fretboard, build_scale, display};
//! let scale = build_scale("F#", "Major").unwrap();
//! assert_eq!(scale.degree_names()[4], "C#");
//! let board = build_fretboard("E Standard", 12).unwrap();
//! let cell = display::highlight(&scale, board.cell(0, 2).unwrap(), 2, display::DisplayMode::Notes);
//! assert_eq!(cell.label, "F#");
//! ```

pub mod command;
pub mod config;
pub mod display;
mod error;
pub mod instrument;
pub mod music;
pub mod playback;
pub mod session;
pub mod vocabulary;

pub use error::{Error, Result};
pub use instrument::{Fretboard, Tuning};
pub use music::{Letter, Note, Scale, ScaleType};
pub use playback::Player;
pub use session::Session;
pub use vocabulary::{build_fretboard, build_scale, Vocabulary};
