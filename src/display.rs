//! Per-cell highlighting of a fretboard against a scale.
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::instrument::Fretboard;
use crate::music::{Note, Scale};


/// What a highlighted cell shows.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum DisplayMode {
    /// The scale member's spelling, e.g. `E#`.
    Notes,
    /// The fret number.
    Tabs,
}


impl Default for DisplayMode {
    fn default() -> Self {
        DisplayMode::Notes
    }
}


impl FromStr for DisplayMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "notes" | "note" => Ok(DisplayMode::Notes),
            "tabs" | "tab" => Ok(DisplayMode::Tabs),
            _ => Err(Error::UnknownDisplayMode(s.trim().to_string())),
        }
    }
}


impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}


#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Color {
    Blue,
    Green,
    Orange,
    Red,
    Purple,
    Magenta,
    Cyan,
    Black,
}


impl Color {
    /// One color per diatonic degree.
    pub const PALETTE: [Color; 7] = [
        Color::Blue,
        Color::Green,
        Color::Orange,
        Color::Red,
        Color::Purple,
        Color::Magenta,
        Color::Cyan,
    ];

    /// Used past the seventh degree and for notes outside the scale.
    pub const NEUTRAL: Color = Color::Black;

    pub fn for_degree(degree: usize) -> Self {
        Color::PALETTE.get(degree).copied().unwrap_or(Color::NEUTRAL)
    }
}


/// Label for one fretboard position.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Cell {
    pub label: String,
    pub color: Color,
    /// Matching scale degree, `None` outside the scale.
    pub degree: Option<usize>,
}


pub const EMPTY_LABEL: &str = "-";


pub fn highlight(scale: &Scale, note: &Note, fret: usize, mode: DisplayMode) -> Cell {
    match scale.index_of(note) {
        Some(degree) => Cell {
            label: match mode {
                DisplayMode::Notes => scale.members()[degree].display_name(),
                DisplayMode::Tabs => fret.to_string(),
            },
            color: Color::for_degree(degree),
            degree: Some(degree),
        },
        None => Cell {
            label: EMPTY_LABEL.to_string(),
            color: Color::NEUTRAL,
            degree: None,
        },
    }
}


/// Cells for the whole board, in the fretboard's own row order.
pub fn highlight_fretboard(fretboard: &Fretboard, scale: &Scale, mode: DisplayMode) -> Vec<Vec<Cell>> {
    fretboard
        .grid()
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(fret, note)| highlight(scale, note, fret, mode))
                .collect()
        })
        .collect()
}


/// Plain-text table with the highest string on top and fret numbers across.
///
/// ```text
///     0  1  2
/// E   E  - F#
/// B   B  C  -
/// ```
pub fn render_table(fretboard: &Fretboard, scale: &Scale, mode: DisplayMode) -> String {
    render_with(fretboard, scale, mode, |cell| cell.label.clone())
}


/// Like `render_table`, passing each cell through `paint` (e.g. to add terminal colors).
pub fn render_with<F>(fretboard: &Fretboard, scale: &Scale, mode: DisplayMode, paint: F) -> String
where
    F: Fn(&Cell) -> String,
{
    let cells = highlight_fretboard(fretboard, scale, mode);
    let width = cells
        .iter()
        .flatten()
        .map(|c| c.label.chars().count())
        .chain(std::iter::once(fretboard.frets().to_string().len()))
        .max()
        .unwrap_or(1);
    let strings = fretboard.strings();
    let header_width = strings.iter().map(|n| n.display_name().len()).max().unwrap_or(1);

    let mut out = String::new();
    out.push_str(&" ".repeat(header_width + 1));
    for fret in 0..=fretboard.frets() {
        out.push_str(&format!(" {:>w$}", fret, w = width));
    }
    out.push('\n');

    for (row, open) in cells.iter().zip(strings.iter()).rev() {
        out.push_str(&format!("{:<w$} ", open.display_name(), w = header_width));
        for cell in row {
            let pad = width.saturating_sub(cell.label.chars().count());
            out.push(' ');
            out.push_str(&" ".repeat(pad));
            out.push_str(&paint(cell));
        }
        out.push('\n');
    }
    out
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::vocabulary::{build_fretboard, build_scale};

    #[test]
    fn test_highlight_member() {
        let scale = build_scale("F#", "Major").unwrap();
        let c_sharp: Note = "Db2".parse().unwrap();
        let cell = highlight(&scale, &c_sharp, 9, DisplayMode::Notes);
        assert_eq!(cell, Cell { label: "C#".to_string(), color: Color::Purple, degree: Some(4) });
        let cell = highlight(&scale, &c_sharp, 9, DisplayMode::Tabs);
        assert_eq!(cell.label, "9");
    }

    #[test]
    fn test_highlight_non_member() {
        let scale = build_scale("C", "Major").unwrap();
        let cell = highlight(&scale, &"C#".parse().unwrap(), 1, DisplayMode::Notes);
        assert_eq!(cell, Cell { label: "-".to_string(), color: Color::Black, degree: None });
    }

    #[test]
    fn test_chromatic_degrees_past_seven_are_neutral() {
        let scale = build_scale("C", "Chromatic").unwrap();
        let cell = highlight(&scale, &Note::new(8), 8, DisplayMode::Notes);
        assert_eq!(cell.degree, Some(8));
        assert_eq!(cell.color, Color::Black);
        assert_eq!(cell.label, "G#");
    }

    #[test]
    fn test_highlight_fretboard_shape() {
        let board = build_fretboard("Drop D", 12).unwrap();
        let scale = build_scale("D", "Minor").unwrap();
        let cells = highlight_fretboard(&board, &scale, DisplayMode::Notes);
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|row| row.len() == 13));
        assert_eq!(cells[0][0].label, "D");
        assert_eq!(cells[0][0].color, Color::Blue);
        assert_eq!(cells[0][1].label, "-");
    }

    #[test]
    fn test_render_table() {
        let board = build_fretboard("E Standard", 2).unwrap();
        let scale = build_scale("E", "Minor").unwrap();
        let table = render_table(&board, &scale, DisplayMode::Notes);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "    0  1  2");
        assert_eq!(lines[1], "E   E  - F#");
        assert_eq!(lines[2], "B   B  C  -");
        assert_eq!(lines[5], "A   A  -  B");
        assert_eq!(lines[6], "E   E  - F#");
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Tabs".parse::<DisplayMode>().unwrap(), DisplayMode::Tabs);
        assert_eq!("notes".parse::<DisplayMode>().unwrap(), DisplayMode::Notes);
        assert_eq!(
            "chords".parse::<DisplayMode>(),
            Err(Error::UnknownDisplayMode("chords".to_string())));
    }
}
