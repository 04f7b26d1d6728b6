//! Named scale types and tunings a caller can pick from.
use crate::error::{Error, Result};
use crate::instrument::{Fretboard, Tuning};
use crate::music::{Note, Scale, ScaleType};


/// Lookup key shared by every name: case-insensitive, ignoring spaces, `-` and `_`.
///
/// "E-Standard", "e standard" and "E_STANDARD" all name the same tuning.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}


/// Ordered registries of scale types and tunings.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    scale_types: Vec<ScaleType>,
    tunings: Vec<Tuning>,
}


impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}


impl Vocabulary {
    pub fn builtin() -> Self {
        Self {
            scale_types: ScaleType::all(),
            tunings: Tuning::all(),
        }
    }

    pub fn scale_types(&self) -> &[ScaleType] {
        &self.scale_types
    }

    pub fn tunings(&self) -> &[Tuning] {
        &self.tunings
    }

    pub fn scale_type_names(&self) -> Vec<&str> {
        self.scale_types.iter().map(ScaleType::name).collect()
    }

    pub fn tuning_names(&self) -> Vec<&str> {
        self.tunings.iter().map(Tuning::name).collect()
    }

    pub fn scale_type(&self, name: &str) -> Result<&ScaleType> {
        let key = normalize(name);
        self.scale_types
            .iter()
            .find(|s| normalize(s.name()) == key)
            .ok_or_else(|| Error::UnknownScaleType(name.to_string()))
    }

    pub fn tuning(&self, name: &str) -> Result<&Tuning> {
        let key = normalize(name);
        self.tunings
            .iter()
            .find(|t| normalize(t.name()) == key)
            .ok_or_else(|| Error::UnknownTuning(name.to_string()))
    }

    /// Register a scale type, replacing any existing one with the same name.
    pub fn add_scale_type(&mut self, scale_type: ScaleType) {
        let key = normalize(scale_type.name());
        match self.scale_types.iter_mut().find(|s| normalize(s.name()) == key) {
            Some(existing) => *existing = scale_type,
            None => self.scale_types.push(scale_type),
        }
    }

    /// Register a tuning, replacing any existing one with the same name.
    pub fn add_tuning(&mut self, tuning: Tuning) {
        let key = normalize(tuning.name());
        match self.tunings.iter_mut().find(|t| normalize(t.name()) == key) {
            Some(existing) => *existing = tuning,
            None => self.tunings.push(tuning),
        }
    }

    /// Build the named scale on a root written as a note name, e.g. `("F#", "Major")`.
    pub fn build_scale(&self, root: &str, scale_type: &str) -> Result<Scale> {
        let scale_type = self.scale_type(scale_type)?;
        let root: Note = root.parse()?;
        Ok(Scale::new(root, scale_type))
    }

    pub fn build_fretboard(&self, tuning: &str, frets: i64) -> Result<Fretboard> {
        Fretboard::new(self.tuning(tuning)?, frets)
    }
}


/// `Vocabulary::build_scale` over the built-in vocabulary.
pub fn build_scale(root: &str, scale_type: &str) -> Result<Scale> {
    Vocabulary::builtin().build_scale(root, scale_type)
}


/// `Vocabulary::build_fretboard` over the built-in vocabulary.
pub fn build_fretboard(tuning: &str, frets: i64) -> Result<Fretboard> {
    Vocabulary::builtin().build_fretboard(tuning, frets)
}
