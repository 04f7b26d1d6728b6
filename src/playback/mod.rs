//! The audio side: a `Player` turns a playable note name into sound, and the helpers here
//! perform notes, scales and fretboard positions on any `Player`.
//!
//! Playing never feeds back into the model, so a `Player` can be swapped for a silent one
//! without changing anything else.
use std::time::Duration;

use log::info;

use crate::error::{Error, Result};
use crate::instrument::Fretboard;
use crate::music::{Note, Scale};

#[cfg(feature = "live")]
mod live;
pub mod synth;
mod wav;

#[cfg(feature = "live")]
pub use live::CpalPlayer;
pub use wav::{WavRecorder, DEFAULT_SAMPLE_RATE};


/// Sound output for one note at a time.
pub trait Player {
    /// `note_name` is a sharp-biased name with octave, as produced by `Note::playable_name`.
    fn play(&self, note_name: &str, duration: Duration) -> Result<()>;
}


impl<P: Player + ?Sized> Player for Box<P> {
    fn play(&self, note_name: &str, duration: Duration) -> Result<()> {
        (**self).play(note_name, duration)
    }
}


/// `Player` that only logs what it would have played.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogPlayer;


impl Player for LogPlayer {
    fn play(&self, note_name: &str, duration: Duration) -> Result<()> {
        info!("play {} for {:?}", note_name, duration);
        Ok(())
    }
}


/// Fails with `Error::Playback` for notes below C0, whose playable names do not parse back.
pub fn play_note<P: Player + ?Sized>(player: &P, note: &Note, duration: Duration) -> Result<()> {
    if note.pitch() < 0 {
        return Err(Error::Playback(format!("{} is below C0", note.playable_name())));
    }
    player.play(&note.playable_name(), duration)
}


/// Every member in degree order, then the root an octave up.
pub fn play_scale<P: Player + ?Sized>(player: &P, scale: &Scale, duration: Duration) -> Result<()> {
    scale.with_octave().iter().try_for_each(|note| play_note(player, note, duration))
}


/// Open strings from the lowest declared string up.
pub fn strum<P: Player + ?Sized>(player: &P, fretboard: &Fretboard, duration: Duration) -> Result<()> {
    fretboard.strings().iter().try_for_each(|note| play_note(player, note, duration))
}


/// Play one position, addressed by string number (1 = highest-pitched) and fret.
pub fn pick<P: Player + ?Sized>(
    player: &P,
    fretboard: &Fretboard,
    string_number: usize,
    fret: usize,
    duration: Duration,
) -> Result<()> {
    play_note(player, fretboard.note_at(string_number, fret)?, duration)
}


/// Play a run of `(string number, fret)` positions. Every position is checked before anything
/// is played.
pub fn play_tab<P: Player + ?Sized>(
    player: &P,
    fretboard: &Fretboard,
    positions: &[(usize, usize)],
    duration: Duration,
) -> Result<()> {
    let notes = positions
        .iter()
        .map(|&(string_number, fret)| fretboard.note_at(string_number, fret))
        .collect::<Result<Vec<&Note>>>()?;
    notes.into_iter().try_for_each(|note| play_note(player, note, duration))
}
