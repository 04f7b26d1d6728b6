//! User configuration: starting selection plus extra scale types and tunings.
//!
//! ```toml
//! [defaults]
//! root = "A"
//! scale = "Minor"
//! tuning = "Drop D"
//! frets = 12
//! mode = "tabs"
//! note_seconds = 0.5
//!
//! [[scales]]
//! name = "Pentatonic"
//! intervals = [2, 4, 7, 9]
//!
//! [[tunings]]
//! name = "Bass"
//! strings = ["E1", "A1", "D2", "G2"]
//! ```
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::instrument::Tuning;
use crate::music::ScaleType;
use crate::vocabulary::Vocabulary;


/// Overrides the config file location.
pub const CONFIG_ENV: &str = "FRETBOARD_CONFIG";


#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub root: String,
    pub scale: String,
    pub tuning: String,
    pub frets: i64,
    pub mode: String,
    pub note_seconds: f32,
}


impl Default for Defaults {
    fn default() -> Self {
        Self {
            root: "C".to_string(),
            scale: "Major".to_string(),
            tuning: "E Standard".to_string(),
            frets: 22,
            mode: "Notes".to_string(),
            note_seconds: 0.25,
        }
    }
}


impl Defaults {
    pub fn note_duration(&self) -> Duration {
        Duration::from_secs_f32(self.note_seconds.max(0.0))
    }
}


#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScaleDef {
    pub name: String,
    pub intervals: Vec<i32>,
}


#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TuningDef {
    pub name: String,
    pub strings: Vec<String>,
}


#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,
    pub scales: Vec<ScaleDef>,
    pub tunings: Vec<TuningDef>,
}


impl Config {
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Read `path`. A missing file is not an error and yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Load from `config_path()`; any failure is logged and replaced by the defaults.
    pub fn load_or_default() -> Self {
        let Some(path) = config_path() else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}", e);
                Self::default()
            }
        }
    }

    /// Built-in vocabulary extended with the configured scale types and tunings.
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        let mut vocab = Vocabulary::builtin();
        for def in &self.scales {
            vocab.add_scale_type(ScaleType::new(def.name.as_str(), &def.intervals)?);
        }
        for def in &self.tunings {
            vocab.add_tuning(Tuning::new(def.name.as_str(), def.strings.as_slice())?);
        }
        Ok(vocab)
    }
}


/// `$FRETBOARD_CONFIG` if set, otherwise `<config dir>/fretboard/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => Some(PathBuf::from(path)),
        None => dirs::config_dir().map(|d| d.join("fretboard").join("config.toml")),
    }
}
