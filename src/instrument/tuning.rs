use std::fmt;

use crate::error::{Error, Result};
use crate::music::pitch::{Letter, OCTAVE};
use crate::music::Note;


/// Named set of open-string notes, declared lowest string first.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Tuning {
    name: String,
    strings: Vec<Note>,
}


impl Tuning {
    /// Parse each open string from a note name such as `"E2"`.
    pub fn new<S: AsRef<str>>(name: impl Into<String>, strings: &[S]) -> Result<Self> {
        let name = name.into();
        if strings.is_empty() {
            return Err(Error::EmptyTuning(name));
        }
        let strings = strings
            .iter()
            .map(|s| s.as_ref().parse::<Note>())
            .collect::<Result<Vec<Note>>>()?;
        Ok(Self { name, strings })
    }

    fn builtin(name: &str, strings: &[(Letter, i32)]) -> Self {
        Self {
            name: name.to_string(),
            strings: strings
                .iter()
                .map(|&(letter, octave)| Note::spelled(letter.base() + octave * OCTAVE, letter))
                .collect(),
        }
    }

    pub fn e_standard() -> Self {
        use Letter::*;
        Self::builtin("E Standard", &[(E, 2), (A, 2), (D, 3), (G, 3), (B, 3), (E, 4)])
    }

    pub fn drop_d() -> Self {
        use Letter::*;
        Self::builtin("Drop D", &[(D, 2), (A, 2), (D, 3), (G, 3), (B, 3), (E, 4)])
    }

    pub fn drop_c() -> Self {
        use Letter::*;
        Self::builtin("Drop C", &[(C, 2), (G, 2), (C, 3), (F, 3), (A, 3), (D, 4)])
    }

    /// Built-in vocabulary, in picker order.
    pub fn all() -> Vec<Self> {
        vec![Self::e_standard(), Self::drop_d(), Self::drop_c()]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn strings(&self) -> &[Note] {
        &self.strings
    }
}


impl fmt::Display for Tuning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<String> = self.strings.iter().map(Note::playable_name).collect();
        write!(f, "{} [{}]", self.name, names.join(" "))
    }
}
