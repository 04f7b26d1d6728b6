use log::debug;

use crate::config::Defaults;
use crate::display::{self, Cell, DisplayMode};
use crate::error::Result;
use crate::instrument::Fretboard;
use crate::music::{Note, Scale};
use crate::vocabulary::Vocabulary;


/// The current selection and the scale and fretboard built from it.
///
/// Every setter validates its input and rebuilds the affected value in full before touching the
/// session, so a failed change leaves everything as it was.
#[derive(Debug, Clone)]
pub struct Session {
    vocabulary: Vocabulary,
    root: Note,
    scale: Scale,
    fretboard: Fretboard,
    mode: DisplayMode,
}


impl Session {
    pub fn new(
        vocabulary: Vocabulary,
        root: &str,
        scale_type: &str,
        tuning: &str,
        frets: i64,
        mode: DisplayMode,
    ) -> Result<Self> {
        let root: Note = root.parse()?;
        let scale = Scale::new(root, vocabulary.scale_type(scale_type)?);
        let fretboard = vocabulary.build_fretboard(tuning, frets)?;
        Ok(Self { vocabulary, root, scale, fretboard, mode })
    }

    pub fn from_defaults(vocabulary: Vocabulary, defaults: &Defaults) -> Result<Self> {
        let mode = defaults.mode.parse()?;
        Self::new(vocabulary, &defaults.root, &defaults.scale, &defaults.tuning, defaults.frets, mode)
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn scale(&self) -> &Scale {
        &self.scale
    }

    pub fn fretboard(&self) -> &Fretboard {
        &self.fretboard
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_root(&mut self, root: &str) -> Result<()> {
        let root: Note = root.parse()?;
        self.scale = Scale::new(root, self.scale.scale_type());
        self.root = root;
        debug!("rebuilt scale: {}", self.scale);
        Ok(())
    }

    pub fn set_scale_type(&mut self, name: &str) -> Result<()> {
        self.scale = Scale::new(self.root, self.vocabulary.scale_type(name)?);
        debug!("rebuilt scale: {}", self.scale);
        Ok(())
    }

    pub fn set_tuning(&mut self, name: &str) -> Result<()> {
        self.fretboard = self.vocabulary.build_fretboard(name, self.fretboard.frets() as i64)?;
        Ok(())
    }

    pub fn set_frets(&mut self, frets: i64) -> Result<()> {
        let tuning = self.vocabulary.tuning(self.fretboard.tuning_name())?;
        self.fretboard = Fretboard::new(tuning, frets)?;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    /// Highlighting pass over the current fretboard.
    pub fn cells(&self) -> Vec<Vec<Cell>> {
        display::highlight_fretboard(&self.fretboard, &self.scale, self.mode)
    }

    pub fn table(&self) -> String {
        display::render_table(&self.fretboard, &self.scale, self.mode)
    }
}
