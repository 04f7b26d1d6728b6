use std::fmt;

use log::trace;

use crate::error::{Error, Result};
use crate::music::notes::Note;
use crate::music::pitch::{Letter, OCTAVE};


/// Most intervals a scale type can have and still be spelled one letter per member. Larger
/// types keep canonical spelling.
pub const DIATONIC_LEN: usize = 7;


/// A named, ordered set of semitone offsets above a root.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ScaleType {
    name: String,
    intervals: Vec<i32>,
}


impl ScaleType {
    /// Intervals must be non-empty, strictly ascending, and lie within `1..=11`.
    pub fn new(name: impl Into<String>, intervals: &[i32]) -> Result<Self> {
        let name = name.into();
        let invalid = |reason: &str| Error::InvalidIntervals {
            name: name.clone(),
            reason: reason.to_string(),
        };
        if intervals.is_empty() {
            return Err(invalid("no intervals"));
        }
        if intervals.iter().any(|i| !(1..OCTAVE).contains(i)) {
            return Err(invalid("intervals must lie within 1..=11"));
        }
        if intervals.windows(2).any(|w| w[0] >= w[1]) {
            return Err(invalid("intervals must be strictly ascending"));
        }
        Ok(Self { name, intervals: intervals.to_vec() })
    }

    fn builtin(name: &str, intervals: &[i32]) -> Self {
        Self { name: name.to_string(), intervals: intervals.to_vec() }
    }

    pub fn major() -> Self {
        Self::builtin("Major", &[2, 4, 5, 7, 9, 11])
    }

    pub fn minor() -> Self {
        Self::builtin("Minor", &[2, 3, 5, 7, 8, 10])
    }

    pub fn harmonic_minor() -> Self {
        Self::builtin("Harmonic Minor", &[2, 3, 5, 7, 8, 11])
    }

    pub fn melodic_minor() -> Self {
        Self::builtin("Melodic Minor", &[2, 3, 5, 7, 9, 11])
    }

    pub fn chromatic() -> Self {
        Self::builtin("Chromatic", &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])
    }

    /// Built-in vocabulary, in picker order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::major(),
            Self::minor(),
            Self::harmonic_minor(),
            Self::melodic_minor(),
            Self::chromatic(),
        ]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Offsets above the root, excluding the root itself.
    pub fn intervals(&self) -> &[i32] {
        &self.intervals
    }
}


/// The notes of one scale type built on one root, in degree order.
///
/// Built in one go from `root` and `scale_type`; changing either means building a new `Scale`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Scale {
    root: Note,
    scale_type: ScaleType,
    members: Vec<Note>,
}


impl Scale {
    /// Build the scale. Types with up to `DIATONIC_LEN` intervals are respelled so that every
    /// member takes the next letter after its predecessor, starting from the root's own
    /// spelling; e.g. F# major gets `C#` at degree 4, never `Db`.
    pub fn new(root: Note, scale_type: &ScaleType) -> Self {
        let mut members = Vec::with_capacity(scale_type.intervals().len() + 1);
        members.push(root);
        members.extend(scale_type.intervals().iter().map(|&i| root.transpose(i)));

        if scale_type.intervals().len() <= DIATONIC_LEN {
            let first = root.spelling_letter();
            for (degree, note) in members.iter_mut().enumerate().skip(1) {
                *note = note.respell(first.advance(degree));
            }
        }
        trace!("built {} {}: {:?}", root, scale_type.name(), members);

        Self { root, scale_type: scale_type.clone(), members }
    }

    pub fn root(&self) -> &Note {
        &self.root
    }

    pub fn scale_type(&self) -> &ScaleType {
        &self.scale_type
    }

    pub fn members(&self) -> &[Note] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True when members were spelled by cycling letters from the root.
    pub fn is_diatonic(&self) -> bool {
        self.scale_type.intervals().len() <= DIATONIC_LEN
    }

    pub fn contains(&self, note: &Note) -> bool {
        self.index_of(note).is_some()
    }

    /// Degree of the first member sharing `note`'s pitch class. Octave is ignored.
    pub fn index_of(&self, note: &Note) -> Option<usize> {
        self.members.iter().position(|m| m.same_pitch_class(note))
    }

    /// Member spelled for degree `degree`.
    pub fn degree(&self, degree: usize) -> Option<&Note> {
        self.members.get(degree)
    }

    pub fn degree_names(&self) -> Vec<String> {
        self.members.iter().map(Note::display_name).collect()
    }

    /// Members followed by the root an octave up, the usual way a scale is played or recited.
    pub fn with_octave(&self) -> Vec<Note> {
        let mut notes = self.members.clone();
        if let Some(first) = self.members.first() {
            notes.push(Note::spelled(first.pitch() + OCTAVE, first.spelling_letter()));
        }
        notes
    }
}


impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}: [{}]", self.root, self.scale_type.name(), self.degree_names().join(", "))
    }
}


/// Letters assigned to each member, in degree order.
pub fn letters(scale: &Scale) -> Vec<Letter> {
    scale.members().iter().map(Note::spelling_letter).collect()
}


#[cfg(test)]
mod test {
    use super::*;

    fn scale(root: &str, scale_type: ScaleType) -> Scale {
        Scale::new(root.parse().unwrap(), &scale_type)
    }

    #[test]
    fn test_c_major() {
        let c = scale("C", ScaleType::major());
        assert_eq!(c.degree_names(), vec!["C", "D", "E", "F", "G", "A", "B"]);
        assert!(c.is_diatonic());
    }

    #[test]
    fn test_f_sharp_major_spells_with_sharps() {
        let fs = scale("F#", ScaleType::major());
        assert_eq!(fs.degree_names(), vec!["F#", "G#", "A#", "B", "C#", "D#", "E#"]);
    }

    #[test]
    fn test_flat_roots() {
        assert_eq!(
            scale("Ab", ScaleType::major()).degree_names(),
            vec!["Ab", "Bb", "C", "Db", "Eb", "F", "G"]);
        assert_eq!(
            scale("D", ScaleType::minor()).degree_names(),
            vec!["D", "E", "F", "G", "A", "Bb", "C"]);
    }

    #[test]
    fn test_awkward_root_needs_double_accidentals() {
        assert_eq!(
            scale("G#", ScaleType::harmonic_minor()).degree_names(),
            vec!["G#", "A#", "B", "C#", "D#", "E", "F##"]);
    }

    #[test]
    fn test_chromatic_keeps_canonical_spelling() {
        let c = scale("Db", ScaleType::chromatic());
        assert!(!c.is_diatonic());
        assert_eq!(c.len(), 12);
        assert_eq!(c.degree_names()[0], "Db");
        assert_eq!(c.degree_names()[1], "D");
        assert_eq!(c.degree_names()[2], "D#");
    }

    #[test]
    fn test_members_follow_intervals() {
        for scale_type in ScaleType::all() {
            let s = scale("E3", scale_type.clone());
            assert_eq!(s.len(), scale_type.intervals().len() + 1);
            assert_eq!(s.members()[0].pitch(), s.root().pitch());
            for (member, interval) in s.members()[1..].iter().zip(scale_type.intervals()) {
                assert_eq!(member.pitch(), s.root().pitch() + interval);
            }
        }
    }

    #[test]
    fn test_short_scale_still_cycles_letters() {
        let pentatonic = ScaleType::new("Pentatonic", &[2, 4, 7, 9]).unwrap();
        let s = scale("A", pentatonic);
        assert_eq!(letters(&s), vec![Letter::A, Letter::B, Letter::C, Letter::D, Letter::E]);
        assert_eq!(s.degree_names(), vec!["A", "B", "C#", "D##", "E##"]);
    }

    #[test]
    fn test_seven_interval_scale_cycles_past_the_root_letter() {
        let bebop = ScaleType::new("Bebop", &[2, 4, 5, 7, 9, 10, 11]).unwrap();
        let s = scale("Db", bebop);
        assert!(s.is_diatonic());
        assert_eq!(s.degree_names(), vec!["Db", "Eb", "F", "Gb", "Ab", "Bb", "Cb", "Dbb"]);
    }

    #[test]
    fn test_index_of_ignores_octave() {
        let c = scale("C", ScaleType::major());
        assert_eq!(c.index_of(&Note::new(28)), Some(2));
        assert_eq!(c.index_of(&"G7".parse().unwrap()), Some(4));
        assert_eq!(c.index_of(&"F#".parse().unwrap()), None);
        assert!(!c.contains(&Note::new(1)));
    }

    #[test]
    fn test_with_octave() {
        let c = scale("C", ScaleType::major());
        let names: Vec<String> = c.with_octave().iter().map(Note::display_name).collect();
        assert_eq!(names, vec!["C", "D", "E", "F", "G", "A", "B", "C"]);
        assert_eq!(c.with_octave()[7].pitch(), c.root().pitch() + 12);
    }

    #[test]
    fn test_invalid_intervals() {
        assert!(matches!(ScaleType::new("empty", &[]), Err(Error::InvalidIntervals { .. })));
        assert!(matches!(ScaleType::new("zero", &[0, 4]), Err(Error::InvalidIntervals { .. })));
        assert!(matches!(ScaleType::new("octave", &[4, 12]), Err(Error::InvalidIntervals { .. })));
        assert!(matches!(ScaleType::new("unsorted", &[4, 2]), Err(Error::InvalidIntervals { .. })));
    }

    #[test]
    fn test_display() {
        let c = scale("G", ScaleType::major());
        assert_eq!(c.to_string(), "G Major: [G, A, B, C, D, E, F#]");
    }
}
