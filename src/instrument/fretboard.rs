use std::convert::TryFrom;

use log::debug;

use crate::error::{Error, Result};
use crate::instrument::tuning::Tuning;
use crate::music::Note;


/// Largest fret count a `Fretboard` accepts. Far beyond any real neck, small enough that the
/// grid is always cheap to build and every fret fits the pitch arithmetic.
pub const MAX_FRETS: usize = 128;


/// Every note reachable on a fretted instrument, one row per string.
///
/// Rows follow the tuning's declaration order (lowest string first). Players number strings the
/// other way round, with string 1 the highest-pitched; `note_at` takes those numbers.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Fretboard {
    tuning: String,
    frets: usize,
    grid: Vec<Vec<Note>>,
}


impl Fretboard {
    pub fn new(tuning: &Tuning, frets: i64) -> Result<Self> {
        let frets = usize::try_from(frets)
            .ok()
            .filter(|&f| f <= MAX_FRETS)
            .ok_or(Error::InvalidFretCount(frets))?;
        let grid = tuning
            .strings()
            .iter()
            .map(|open| {
                let mut row = Vec::with_capacity(frets + 1);
                row.push(*open);
                row.extend((1..=frets as i32).map(|fret| open.transpose(fret)));
                row
            })
            .collect();
        debug!("built fretboard for {} with {} frets", tuning.name(), frets);
        Ok(Self { tuning: tuning.name().to_string(), frets, grid })
    }

    pub fn tuning_name(&self) -> &str {
        &self.tuning
    }

    /// Number of frets beyond the open string; each row has `frets() + 1` cells.
    pub fn frets(&self) -> usize {
        self.frets
    }

    pub fn string_count(&self) -> usize {
        self.grid.len()
    }

    /// Open strings, in declaration order.
    pub fn strings(&self) -> Vec<Note> {
        self.grid.iter().filter_map(|row| row.first().copied()).collect()
    }

    pub fn grid(&self) -> &[Vec<Note>] {
        &self.grid
    }

    pub fn row(&self, string_index: usize) -> Result<&[Note]> {
        self.grid
            .get(string_index)
            .map(Vec::as_slice)
            .ok_or(Error::IndexOutOfRange {
                what: "string",
                index: string_index as i64,
                len: self.grid.len(),
            })
    }

    pub fn cell(&self, string_index: usize, fret: usize) -> Result<&Note> {
        self.row(string_index)?.get(fret).ok_or(Error::IndexOutOfRange {
            what: "fret",
            index: fret as i64,
            len: self.frets + 1,
        })
    }

    /// Row index of the 1-based string number, where string 1 is the last declared string.
    pub fn string_number_to_index(&self, string_number: usize) -> Result<usize> {
        let count = self.grid.len();
        if string_number == 0 || string_number > count {
            return Err(Error::IndexOutOfRange {
                what: "string number",
                index: string_number as i64,
                len: count,
            });
        }
        Ok(count - string_number)
    }

    pub fn note_at(&self, string_number: usize, fret: usize) -> Result<&Note> {
        self.cell(self.string_number_to_index(string_number)?, fret)
    }

    /// Every `(string index, fret)` sounding `note`'s pitch class.
    pub fn positions_of(&self, note: &Note) -> Vec<(usize, usize)> {
        self.grid
            .iter()
            .enumerate()
            .flat_map(|(s, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |(_, cell)| cell.same_pitch_class(note))
                    .map(move |(f, _)| (s, f))
            })
            .collect()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_zero_frets_is_open_strings() {
        let board = Fretboard::new(&Tuning::e_standard(), 0).unwrap();
        assert_eq!(board.string_count(), 6);
        assert!(board.grid().iter().all(|row| row.len() == 1));
        let names: Vec<String> = board.strings().iter().map(Note::playable_name).collect();
        assert_eq!(names, vec!["E2", "A2", "D3", "G3", "B3", "E4"]);
        assert_eq!(board.strings(), Tuning::e_standard().strings().to_vec());
    }

    #[test]
    fn test_frets_add_semitones() {
        let board = Fretboard::new(&Tuning::drop_d(), 24).unwrap();
        for row in board.grid() {
            assert_eq!(row.len(), 25);
            for (fret, cell) in row.iter().enumerate() {
                assert_eq!(cell.pitch(), row[0].pitch() + fret as i32);
            }
        }
        assert_eq!(board.cell(0, 12).unwrap().playable_name(), "D3");
        assert_eq!(board.cell(0, 12).unwrap().octave(), 3);
    }

    #[test]
    fn test_negative_frets() {
        assert_eq!(
            Fretboard::new(&Tuning::e_standard(), -1),
            Err(Error::InvalidFretCount(-1)));
    }

    #[test]
    fn test_fret_count_is_capped() {
        let board = Fretboard::new(&Tuning::e_standard(), MAX_FRETS as i64).unwrap();
        assert_eq!(board.frets(), MAX_FRETS);
        assert!(board.grid().iter().all(|row| row.len() == MAX_FRETS + 1));
        assert_eq!(
            Fretboard::new(&Tuning::e_standard(), MAX_FRETS as i64 + 1),
            Err(Error::InvalidFretCount(MAX_FRETS as i64 + 1)));
        assert_eq!(
            Fretboard::new(&Tuning::e_standard(), 1 << 32),
            Err(Error::InvalidFretCount(1 << 32)));
    }

    #[test]
    fn test_string_numbers_count_from_highest() {
        let board = Fretboard::new(&Tuning::drop_c(), 12).unwrap();
        assert_eq!(board.string_number_to_index(1).unwrap(), 5);
        assert_eq!(board.string_number_to_index(6).unwrap(), 0);
        assert_eq!(board.note_at(1, 0).unwrap().playable_name(), "D4");
        assert_eq!(board.note_at(6, 2).unwrap().playable_name(), "D2");
        assert!(matches!(board.string_number_to_index(0), Err(Error::IndexOutOfRange { .. })));
        assert!(matches!(board.note_at(7, 0), Err(Error::IndexOutOfRange { .. })));
    }

    #[test]
    fn test_cell_out_of_range() {
        let board = Fretboard::new(&Tuning::e_standard(), 5).unwrap();
        assert!(board.cell(5, 5).is_ok());
        assert_eq!(
            board.cell(5, 6),
            Err(Error::IndexOutOfRange { what: "fret", index: 6, len: 6 }));
        assert_eq!(
            board.cell(6, 0),
            Err(Error::IndexOutOfRange { what: "string", index: 6, len: 6 }));
    }

    #[test]
    fn test_positions_of() {
        let board = Fretboard::new(&Tuning::e_standard(), 12).unwrap();
        let a: Note = "A".parse().unwrap();
        let positions = board.positions_of(&a);
        assert!(positions.contains(&(0, 5)));
        assert!(positions.contains(&(1, 0)));
        assert!(positions.contains(&(1, 12)));
        assert!(positions.contains(&(4, 10)));
        assert!(positions.iter().all(|&(s, f)| board.grid()[s][f].pitch_class() == 9));
    }
}
