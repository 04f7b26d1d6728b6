//! Just enough synthesis to voice a note: a sine source shaped by gain and ramp filters.
use std::f32::consts::PI;
use std::time::Duration;

use crate::music::Hz;


pub type Sample = f32;


/// Source of an audio stream.
///
/// Each call generates the output value at that given instance in time, e.g. for a sample rate of
/// 44100Hz, this function should be called 44100 times per second to generate that second's worth
/// of sound.
pub type Generator = Box<dyn FnMut() -> Sample + Send>;


/// Transformation applied to an audio stream.
///
/// A call of a `Filter` pulls one value from the provided generator, transforms it and returns it.
/// `Filter`s will usually have some internal state allowing them to track the passage of time.
pub type Filter = Box<dyn FnMut(&mut Generator) -> Sample + Send>;


/// Consume `self` and the provided `Filter` to create a new `Generator` with the filter applied.
///
/// Exists to provide a better interface to `compose`, enabling the builder pattern:
///
/// ```rust
/// use fretboard::playback::synth::{self, FilterComposable, Generator};
/// let mut gen: Generator = synth::sine(44100, 440.0)
///     .compose(synth::gain(0.5))
///     .compose(synth::ramp_up(44100, 0.01));
/// assert_eq!(gen(), 0.0);
/// ```
pub trait FilterComposable {
    fn compose(self, filter: Filter) -> Generator;
}


impl FilterComposable for Generator {
    fn compose(self, filter: Filter) -> Generator {
        compose(self, filter)
    }
}


/// Apply the given `Filter` to the given `Generator` and return a `Generator` interface.
pub fn compose(mut generator: Generator, mut filter: Filter) -> Generator {
    Box::new(move || filter(&mut generator))
}


/// Sinusoid of maximum amplitude at `frequency`.
pub fn sine(sample_rate: u32, frequency: Hz) -> Generator {
    let sample_rate = sample_rate as f32;
    let mut sample_clock = 0f32;
    Box::new(move || {
        let value = (sample_clock * frequency * 2.0 * PI / sample_rate).sin();
        sample_clock = (sample_clock + 1.0) % sample_rate;
        value
    })
}


/// Scale the signal by the provided scale factor with clipping at `[-1, 1]`.
pub fn gain(scale_factor: f32) -> Filter {
    Box::new(move |generator: &mut Generator| (generator() * scale_factor).max(-1.0).min(1.0))
}


/// Ramp gain from zero to one over the specified number of seconds.
pub fn ramp_up(sample_rate: u32, ramp_secs: f32) -> Filter {
    let ramp_steps: f32 = (sample_rate as f32 * ramp_secs).max(1.0);
    let mut ramp_i = 0f32;

    Box::new(move |generator: &mut Generator| {
        let val = generator() * (ramp_i / ramp_steps);
        if ramp_i < ramp_steps {
            ramp_i += 1.0;
        }
        val
    })
}


/// Ramp the signal to zero after the provided time has elapsed and over the specified number of
/// seconds.
pub fn ramp_down(sample_rate: u32, cliff_secs: f32, ramp_secs: f32) -> Filter {
    let sample_rate = sample_rate as f32;
    let cliff_steps = sample_rate * cliff_secs;
    let ramp_steps: f32 = (sample_rate * ramp_secs).max(1.0);
    let mut ramp_i = 0f32;

    Box::new(move |generator: &mut Generator| {
        let mut val = generator();
        if ramp_i >= cliff_steps {
            val *= (1.0 - ((ramp_i - cliff_steps) / ramp_steps)).max(0.0);
        }
        if ramp_i < cliff_steps + ramp_steps {
            ramp_i += 1.0;
        }
        val
    })
}


/// Seconds spent fading in and out of every note, to keep the edges click-free.
const EDGE_SECS: f32 = 0.01;


/// A sine at `frequency` lasting `duration`, faded in and out and kept well below full scale.
pub fn tone(sample_rate: u32, frequency: Hz, duration: Duration) -> Generator {
    let secs = duration.as_secs_f32();
    let edge = EDGE_SECS.min(secs / 2.0);
    sine(sample_rate, frequency)
        .compose(gain(0.5))
        .compose(ramp_up(sample_rate, edge))
        .compose(ramp_down(sample_rate, secs - edge, edge))
}


/// Number of samples covering `duration` at `sample_rate`.
pub fn sample_count(sample_rate: u32, duration: Duration) -> usize {
    (duration.as_secs_f64() * sample_rate as f64).round() as usize
}


/// Pull `length` samples out of `generator`.
pub fn render(mut generator: Generator, length: usize) -> Vec<Sample> {
    (0..length).map(|_| generator()).collect()
}


#[cfg(test)]
mod test {
    use super::*;

    const RATE: u32 = 8000;

    #[test]
    fn test_sine_period() {
        let samples = render(sine(RATE, 1000.0), 9);
        assert!(samples[0].abs() < 1e-6);
        assert!((samples[2] - 1.0).abs() < 1e-4);
        assert!(samples[8].abs() < 1e-3);
    }

    #[test]
    fn test_gain_clips() {
        let loud: Generator = Box::new(|| 0.8);
        let mut gen = loud.compose(gain(2.0));
        assert_eq!(gen(), 1.0);
    }

    #[test]
    fn test_tone_fades_at_both_ends() {
        let duration = Duration::from_millis(100);
        let samples = render(tone(RATE, 440.0, duration), sample_count(RATE, duration));
        assert_eq!(samples.len(), 800);
        assert_eq!(samples[0], 0.0);
        assert!(samples.last().unwrap().abs() < 0.01);
        assert!(samples.iter().all(|s| s.abs() <= 0.5));
        assert!(samples.iter().any(|s| s.abs() > 0.4));
    }
}
