//! Tone synthesis for the chime and click signals.
//!
//! Both signals are short chirps: an oscillator whose frequency and gain
//! glide exponentially from a start value to an end value. [`ToneSource`]
//! mixes any number of chirps into a mono `rodio::Source`.

use std::f32::consts::TAU;
use std::time::Duration;

use rodio::Source;

/// Output sample rate for synthesized tones.
pub const SAMPLE_RATE: u32 = 44_100;

/// Oscillator shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

impl Waveform {
    /// Samples the waveform at `phase` in `[0, 1)`.
    fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Sine => (TAU * phase).sin(),
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
        }
    }
}

/// One chirp within a tone.
#[derive(Debug, Clone, PartialEq)]
pub struct Chirp {
    pub waveform: Waveform,
    /// Start offset within the tone, in seconds
    pub start: f32,
    /// Length of the chirp, in seconds
    pub length: f32,
    pub freq_from: f32,
    pub freq_to: f32,
    /// Time for the frequency glide; the pitch holds afterwards
    pub freq_glide: f32,
    pub gain_from: f32,
    pub gain_to: f32,
    /// Time for the gain glide; the gain holds afterwards
    pub gain_glide: f32,
}

impl Chirp {
    fn frequency_at(&self, t: f32) -> f32 {
        exp_glide(self.freq_from, self.freq_to, t, self.freq_glide)
    }

    fn gain_at(&self, t: f32) -> f32 {
        exp_glide(self.gain_from, self.gain_to, t, self.gain_glide)
    }

    fn end(&self) -> f32 {
        self.start + self.length
    }
}

/// Exponential glide from `from` to `to` over `span` seconds.
fn exp_glide(from: f32, to: f32, t: f32, span: f32) -> f32 {
    if span <= 0.0 || from <= 0.0 || to <= 0.0 {
        return to;
    }
    let progress = (t / span).clamp(0.0, 1.0);
    from * (to / from).powf(progress)
}

/// Three descending 880 Hz sine beeps, 200 ms apart.
pub fn chime() -> Vec<Chirp> {
    [0.0, 0.2, 0.4]
        .into_iter()
        .map(|start| Chirp {
            waveform: Waveform::Sine,
            start,
            length: 0.3,
            freq_from: 880.0,
            freq_to: 440.0,
            freq_glide: 0.3,
            gain_from: 0.2,
            gain_to: 0.001,
            gain_glide: 0.3,
        })
        .collect()
}

/// A short, quiet keyboard-switch click.
pub fn click() -> Vec<Chirp> {
    vec![Chirp {
        waveform: Waveform::Triangle,
        start: 0.0,
        length: 0.04,
        freq_from: 1400.0,
        freq_to: 800.0,
        freq_glide: 0.015,
        gain_from: 0.04,
        gain_to: 0.001,
        gain_glide: 0.04,
    }]
}

/// A finite mono source mixing a set of chirps.
#[derive(Debug, Clone)]
pub struct ToneSource {
    chirps: Vec<Chirp>,
    phases: Vec<f32>,
    position: u64,
    total: u64,
}

impl ToneSource {
    pub fn new(chirps: Vec<Chirp>) -> Self {
        let end = chirps.iter().map(Chirp::end).fold(0.0_f32, f32::max);
        let total = (end * SAMPLE_RATE as f32).ceil() as u64;
        Self {
            phases: vec![0.0; chirps.len()],
            chirps,
            position: 0,
            total,
        }
    }

    /// Total number of samples the source yields.
    pub fn len_samples(&self) -> u64 {
        self.total
    }
}

impl Iterator for ToneSource {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.position >= self.total {
            return None;
        }
        let t = self.position as f32 / SAMPLE_RATE as f32;
        self.position += 1;

        let mut mixed = 0.0;
        for (chirp, phase) in self.chirps.iter().zip(self.phases.iter_mut()) {
            if t < chirp.start || t >= chirp.end() {
                continue;
            }
            let local = t - chirp.start;
            mixed += chirp.waveform.sample(*phase) * chirp.gain_at(local);
            *phase = (*phase + chirp.frequency_at(local) / SAMPLE_RATE as f32).fract();
        }
        Some(mixed.clamp(-1.0, 1.0))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total - self.position) as usize;
        (left, Some(left))
    }
}

impl Source for ToneSource {
    fn current_frame_len(&self) -> Option<usize> {
        Some((self.total - self.position) as usize)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(Duration::from_secs_f64(
            self.total as f64 / f64::from(SAMPLE_RATE),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chime_shape() {
        let chirps = chime();
        assert_eq!(chirps.len(), 3);
        assert_eq!(chirps[0].freq_from, 880.0);
        assert_eq!(chirps[2].start, 0.4);
    }

    #[test]
    fn test_chime_length() {
        let source = ToneSource::new(chime());
        let len = source.len_samples();
        // Last beep ends at 0.7 s.
        assert!(len.abs_diff(30_870) <= 1);
        assert_eq!(source.count() as u64, len);
    }

    #[test]
    fn test_click_is_short_and_quiet() {
        let source = ToneSource::new(click());
        assert!(source.total_duration().unwrap() <= Duration::from_millis(41));
        assert!(source.clone().all(|s| s.abs() <= 0.04 + f32::EPSILON));
        assert_eq!(source.channels(), 1);
        assert_eq!(source.sample_rate(), SAMPLE_RATE);
    }

    #[test]
    fn test_samples_bounded() {
        assert!(ToneSource::new(chime()).all(|s| (-1.0..=1.0).contains(&s)));
    }

    #[test]
    fn test_exp_glide() {
        assert_eq!(exp_glide(880.0, 440.0, 0.0, 0.3), 880.0);
        assert!((exp_glide(880.0, 440.0, 0.3, 0.3) - 440.0).abs() < 0.01);
        assert!((exp_glide(880.0, 440.0, 1.0, 0.3) - 440.0).abs() < 0.01);
        assert_eq!(exp_glide(1.0, 2.0, 0.5, 0.0), 2.0);
    }

    #[test]
    fn test_empty_tone() {
        let mut source = ToneSource::new(Vec::new());
        assert_eq!(source.len_samples(), 0);
        assert!(source.next().is_none());
    }
}
