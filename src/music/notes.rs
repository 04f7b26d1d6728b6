use std::fmt;
use std::ops::Add;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::music::pitch::{self, Letter, OCTAVE};


pub type Hz = f32;


/// A single absolute pitch plus the letter it is spelled with.
///
/// `pitch` counts semitones above C0. The letter hint only affects how the note is named, never
/// which sound it is; a note without a hint is named with the sharp-biased canonical spelling.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Note {
    pitch: i32,
    letter: Option<Letter>,
}


impl Note {
    const FIXED_HZ: Hz = 440.0;
    /// A4
    const FIXED_PITCH: i32 = 57;

    pub fn new(pitch: i32) -> Self {
        Self { pitch, letter: None }
    }

    pub fn spelled(pitch: i32, letter: Letter) -> Self {
        Self { pitch, letter: Some(letter) }
    }

    pub fn pitch(&self) -> i32 {
        self.pitch
    }

    pub fn pitch_class(&self) -> i32 {
        self.pitch.rem_euclid(OCTAVE)
    }

    pub fn octave(&self) -> i32 {
        self.pitch.div_euclid(OCTAVE)
    }

    /// Letter hint, if the note was given one.
    pub fn letter(&self) -> Option<Letter> {
        self.letter
    }

    /// Letter the note is actually named with: the hint, or the canonical letter.
    pub fn spelling_letter(&self) -> Letter {
        match self.letter {
            Some(l) => l,
            None => Letter::natural(self.pitch_class())
                .or_else(|| Letter::natural(self.pitch_class() - 1))
                .unwrap_or(Letter::C),
        }
    }

    /// Sharp-biased name with octave, e.g. `"A#3"`. This is the name handed to audio backends.
    ///
    /// Pitches below C0 come out with a negative octave (`"B-1"`), which no note name can
    /// express; `playback::play_note` refuses them.
    pub fn playable_name(&self) -> String {
        pitch::format_with_octave(self.pitch)
    }

    /// Letter plus accidentals, spelled with the letter hint when present.
    pub fn display_name(&self) -> String {
        pitch::format(self.pitch, self.letter)
    }

    /// Same pitch, spelled with `letter`.
    pub fn respell(&self, letter: Letter) -> Self {
        Self::spelled(self.pitch, letter)
    }

    /// Shift by `semitones`. The result carries no letter hint.
    pub fn transpose(&self, semitones: i32) -> Self {
        Self::new(self.pitch + semitones)
    }

    pub fn same_pitch_class(&self, other: &Note) -> bool {
        self.pitch_class() == other.pitch_class()
    }

    /// Equal-tempered frequency, tuned to A4 = 440Hz.
    pub fn frequency(&self) -> Hz {
        Hz::from(self)
    }
}


impl Add<i32> for Note {
    type Output = Note;

    fn add(self, semitones: i32) -> Note {
        self.transpose(semitones)
    }
}


impl FromStr for Note {
    type Err = Error;

    /// The written letter becomes the spelling hint, so `"Ab"` stays `Ab` rather than `G#`.
    fn from_str(name: &str) -> Result<Self> {
        let (pitch, letter) = pitch::parse_spelled(name)?;
        Ok(Self::spelled(pitch, letter))
    }
}


impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}


/// Formula from [this fantastic MTU resource](https://pages.mtu.edu/~suits/notefreqs.html).
impl From<&Note> for Hz {
    fn from(note: &Note) -> Self {
        let dist = note.pitch - Note::FIXED_PITCH;
        Note::FIXED_HZ * (2.0f32).powf(dist as f32 / OCTAVE as f32)
    }
}


impl From<Note> for Hz {
    fn from(note: Note) -> Self {
        Hz::from(&note)
    }
}


#[cfg(test)]
mod test {
    use super::*;

    static EPSILON: Hz = 0.05; // source numbers were not very precise

    macro_rules! assert_delta {
        ($left:expr, $right:expr, $delta:expr) => {
            if ($left - $right).abs() >= $delta {
                panic!("assertion failed:\nleft:  {}\nright: {}\ndelta: {}", $left, $right, $delta);
            }
        };
    }

    #[test]
    fn test_frequency_conversion() {
        assert_delta!(Hz::from("C#0".parse::<Note>().unwrap()), 17.32, EPSILON);
        assert_delta!("F6".parse::<Note>().unwrap().frequency(), 1396.91, EPSILON);
        assert_delta!("Gb8".parse::<Note>().unwrap().frequency(), 5919.91, EPSILON);
        assert_delta!(Note::new(57).frequency(), 440.0, EPSILON);
    }

    #[test]
    fn test_pitch_class_and_octave() {
        let note: Note = "C#4".parse().unwrap();
        assert_eq!(note.pitch_class(), 1);
        assert_eq!(note.octave(), 4);
        let below_zero = Note::new(-1);
        assert_eq!(below_zero.pitch_class(), 11);
        assert_eq!(below_zero.octave(), -1);
    }

    #[test]
    fn test_names() {
        let note: Note = "Ab3".parse().unwrap();
        assert_eq!(note.display_name(), "Ab");
        assert_eq!(note.playable_name(), "G#3");
        assert_eq!(Note::new(46).display_name(), "A#");
        assert_eq!(note.to_string(), "Ab");
    }

    #[test]
    fn test_respell_keeps_pitch() {
        let note = Note::new(53);
        let renamed = note.respell(Letter::E);
        assert_eq!(renamed.pitch(), 53);
        assert_eq!(renamed.display_name(), "E#");
        assert_eq!(note.display_name(), "F");
    }

    #[test]
    fn test_transpose_drops_spelling() {
        let note: Note = "Eb2".parse().unwrap();
        let up = note + 13;
        assert_eq!(up.pitch(), note.pitch() + 13);
        assert_eq!(up.letter(), None);
        assert_eq!(up.playable_name(), "E3");
    }

    #[test]
    fn test_spelling_letter() {
        assert_eq!(Note::new(49).spelling_letter(), Letter::C);
        assert_eq!("Db".parse::<Note>().unwrap().spelling_letter(), Letter::D);
    }
}
