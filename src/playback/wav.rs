use std::cell::RefCell;
use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;
use std::time::Duration;

use hound::{SampleFormat, WavSpec, WavWriter};
use log::info;

use crate::error::{Error, Result};
use crate::music::Note;
use crate::playback::synth::{self, Sample};
use crate::playback::Player;


pub const DEFAULT_SAMPLE_RATE: u32 = 44100;


/// `Player` that renders every played note, back to back, into one mono take that can be written
/// out as a WAV file.
pub struct WavRecorder {
    sample_rate: u32,
    take: RefCell<Vec<Sample>>,
}


impl Default for WavRecorder {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE)
    }
}


impl WavRecorder {
    pub fn new(sample_rate: u32) -> Self {
        Self { sample_rate, take: RefCell::new(Vec::new()) }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Length of everything recorded so far.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.take.borrow().len() as f64 / self.sample_rate as f64)
    }

    pub fn samples(&self) -> Vec<Sample> {
        self.take.borrow().clone()
    }

    fn spec(&self) -> WavSpec {
        WavSpec {
            channels: 1,
            sample_rate: self.sample_rate,
            bits_per_sample: 32,
            sample_format: SampleFormat::Float,
        }
    }

    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut wav = WavWriter::new(writer, self.spec()).map_err(playback_error)?;
        for sample in self.take.borrow().iter() {
            wav.write_sample(*sample).map_err(playback_error)?;
        }
        wav.finalize().map_err(playback_error)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path.as_ref())
            .map_err(|e| Error::Playback(format!("cannot create {}: {}", path.as_ref().display(), e)))?;
        self.write_to(BufWriter::new(file))?;
        info!("wrote {:?} of audio to {}", self.duration(), path.as_ref().display());
        Ok(())
    }
}


impl Player for WavRecorder {
    fn play(&self, note_name: &str, duration: Duration) -> Result<()> {
        let note: Note = note_name.parse()?;
        let tone = synth::tone(self.sample_rate, note.frequency(), duration);
        let rendered = synth::render(tone, synth::sample_count(self.sample_rate, duration));
        self.take.borrow_mut().extend(rendered);
        Ok(())
    }
}


fn playback_error(e: hound::Error) -> Error {
    Error::Playback(e.to_string())
}
