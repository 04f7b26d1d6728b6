use std::fmt;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, StreamConfig};
use log::{debug, error};

use crate::error::{Error, Result};
use crate::music::Note;
use crate::playback::synth;
use crate::playback::Player;


/// `Player` on the default output device. Each call blocks for the note's duration.
pub struct CpalPlayer {
    device: Device,
    config: StreamConfig,
}


impl CpalPlayer {
    pub fn new() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Playback("missing default output device".to_string()))?;
        let config: StreamConfig = device.default_output_config().map_err(playback_error)?.into();
        debug!("output config: {:?}", config);
        Ok(Self { device, config })
    }
}


impl Player for CpalPlayer {
    fn play(&self, note_name: &str, duration: Duration) -> Result<()> {
        let note: Note = note_name.parse()?;
        let channels = self.config.channels as usize;
        let mut generator = synth::tone(self.config.sample_rate.0, note.frequency(), duration);

        let stream = self
            .device
            .build_output_stream(
                &self.config,
                move |output: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    // every channel gets the same data
                    for frame in output.chunks_mut(channels) {
                        let value = generator();
                        for sample in frame.iter_mut() {
                            *sample = value;
                        }
                    }
                },
                |err| error!("audio stream error: {}", err),
                None,
            )
            .map_err(playback_error)?;
        stream.play().map_err(playback_error)?;
        std::thread::sleep(duration);
        Ok(())
    }
}


fn playback_error<E: fmt::Display>(e: E) -> Error {
    Error::Playback(e.to_string())
}
