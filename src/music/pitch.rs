//! Letter names and the note-name grammar `Letter ('#'|'b')* Digit?`.
use std::fmt;

use crate::error::{Error, Result};


/// Semitones in an octave.
pub const OCTAVE: i32 = 12;

/// Octave assumed when a note name carries no octave digit.
pub const DEFAULT_OCTAVE: i32 = 4;


/// The seven letters of the diatonic skeleton.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}


impl Letter {
    /// Cycle order, starting at C.
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Pitch class of the natural note carrying this letter.
    pub fn base(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Position within `Letter::ALL`.
    pub fn position(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        self.advance(1)
    }

    /// Step `steps` letters forward through the cycle, wrapping from B to C.
    pub fn advance(self, steps: usize) -> Self {
        Letter::ALL[(self.position() + steps) % Letter::ALL.len()]
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    /// Letter whose natural note has exactly this pitch class, if any.
    pub fn natural(pitch_class: i32) -> Option<Self> {
        Letter::ALL.iter().copied().find(|l| l.base() == pitch_class)
    }
}


impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}


/// Parse a note name into an absolute pitch (semitones above C0).
///
/// Accidentals combine additively, so `"C#b"` is plain C. The octave defaults to
/// `DEFAULT_OCTAVE` when the trailing digit is absent.
///
/// ```rust
/// assert_eq!(fretboard::music::pitch::parse("C#4").unwrap(), 49);
/// assert_eq!(fretboard::music::pitch::parse("Bb").unwrap(), 58);
/// ```
pub fn parse(name: &str) -> Result<i32> {
    parse_spelled(name).map(|(pitch, _)| pitch)
}


/// Like `parse`, also returning the letter the name was written with.
pub fn parse_spelled(name: &str) -> Result<(i32, Letter)> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    let first = chars.next().ok_or_else(|| Error::parse(name, "empty note name"))?;
    let letter = Letter::from_char(first)
        .ok_or_else(|| Error::parse(name, format!("unknown letter '{}'", first)))?;

    let mut accidental = 0;
    let mut octave = None;
    for c in chars {
        if octave.is_some() {
            return Err(Error::parse(name, "octave must be a single trailing digit"));
        }
        match c {
            '#' | '♯' => accidental += 1,
            'b' | '♭' => accidental -= 1,
            d if d.is_ascii_digit() => octave = d.to_digit(10).map(|o| o as i32),
            other => return Err(Error::parse(name, format!("unexpected character '{}'", other))),
        }
    }

    let octave = octave.unwrap_or(DEFAULT_OCTAVE);
    Ok((letter.base() + accidental + octave * OCTAVE, letter))
}


/// Accidental needed to spell `pitch_class` with `letter`, as a signed semitone count in
/// `(-6, 6]`. A tritone away from the letter is spelled with six sharps.
pub fn accidental_for(pitch_class: i32, letter: Letter) -> i32 {
    let diff = (pitch_class - letter.base()).rem_euclid(OCTAVE);
    if diff > OCTAVE / 2 {
        diff - OCTAVE
    } else {
        diff
    }
}


/// Letter and accidental (no octave) for `pitch`.
///
/// With no letter hint the spelling is sharp-biased: the natural letter if the pitch class has
/// one, otherwise the letter a semitone below plus `#`. With a hint, the pitch class is spelled
/// relative to that letter using as many `#` or `b` as needed.
pub fn format(pitch: i32, letter: Option<Letter>) -> String {
    let pitch_class = pitch.rem_euclid(OCTAVE);
    let (letter, accidental) = match letter {
        Some(l) => (l, accidental_for(pitch_class, l)),
        None => canonical(pitch_class),
    };
    let symbol = if accidental < 0 { "b" } else { "#" };
    format!("{}{}", letter, symbol.repeat(accidental.unsigned_abs() as usize))
}


/// Sharp-biased spelling followed by the octave, e.g. `"C#4"`.
pub fn format_with_octave(pitch: i32) -> String {
    format!("{}{}", format(pitch, None), pitch.div_euclid(OCTAVE))
}


fn canonical(pitch_class: i32) -> (Letter, i32) {
    match Letter::natural(pitch_class) {
        Some(l) => (l, 0),
        // every gap in the skeleton sits one semitone above a natural
        None => (Letter::natural(pitch_class - 1).unwrap_or(Letter::C), 1),
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_letter_cycle() {
        assert_eq!(Letter::B.next(), Letter::C);
        assert_eq!(Letter::F.advance(4), Letter::C);
        assert_eq!(Letter::C.advance(14), Letter::C);
    }

    #[test]
    fn test_parse_defaults_to_octave_four() {
        assert_eq!(parse("C").unwrap(), 48);
        assert_eq!(parse("c").unwrap(), 48);
        assert_eq!(parse("A4").unwrap(), 57);
        assert_eq!(parse("E2").unwrap(), 28);
    }

    #[test]
    fn test_parse_accidentals_combine() {
        assert_eq!(parse("C##").unwrap(), 50);
        assert_eq!(parse("Dbb3").unwrap(), 36);
        assert_eq!(parse("C#b").unwrap(), 48);
        assert_eq!(parse("Cb0").unwrap(), -1);
        assert_eq!(parse("bb").unwrap(), 58);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse(""), Err(Error::Parse { .. })));
        assert!(matches!(parse("H"), Err(Error::Parse { .. })));
        assert!(matches!(parse("C4#"), Err(Error::Parse { .. })));
        assert!(matches!(parse("C10"), Err(Error::Parse { .. })));
        assert!(matches!(parse("Cx"), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_format_canonical_is_sharp_biased() {
        let names: Vec<String> = (0..12).map(|p| format(p, None)).collect();
        assert_eq!(
            names,
            vec!["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"]);
    }

    #[test]
    fn test_format_contextual() {
        assert_eq!(format(1, Some(Letter::D)), "Db");
        assert_eq!(format(5, Some(Letter::E)), "E#");
        assert_eq!(format(7, Some(Letter::F)), "F##");
        assert_eq!(format(2, Some(Letter::E)), "Ebb");
        assert_eq!(format(11, Some(Letter::C)), "Cb");
    }

    #[test]
    fn test_tritone_spelled_with_sharps() {
        assert_eq!(accidental_for(6, Letter::C), 6);
        assert_eq!(format(6, Some(Letter::C)), "C######");
        assert_eq!(accidental_for(5, Letter::B), 6);
        assert_eq!(accidental_for(7, Letter::B), -4);
    }

    #[test]
    fn test_format_with_octave() {
        assert_eq!(format_with_octave(49), "C#4");
        assert_eq!(format_with_octave(28), "E2");
        assert_eq!(format_with_octave(-1), "B-1");
    }

    #[test]
    fn test_contextual_round_trip() {
        for pitch in 0..12 {
            for letter in Letter::ALL.iter().copied() {
                let name = format(pitch, Some(letter));
                assert_eq!(parse(&name).unwrap().rem_euclid(12), pitch, "{}", name);
            }
        }
    }
}
