use super::{Envelope, Instrument, Wave};
use crate::composition::TrackRole;
use crate::notation::Voice;

/// One monophonic chip channel. A new note replaces whatever was sounding.
#[derive(Debug, Clone)]
pub struct Channel {
    role: TrackRole,
    instrument: Instrument,
    envelope: Envelope,
    freq: f32,
    phase: f32,
    volume: f32,
    /// Samples left before the note is released
    gate: u64,
    /// Seconds since the note started, drives the kick sweep
    elapsed: f32,
    noise: u16,
}

impl Channel {
    pub fn new(role: TrackRole) -> Self {
        Self {
            role,
            instrument: Instrument::for_voice(role, Voice::Tone(0.0)),
            envelope: Envelope::default(),
            freq: 0.0,
            phase: 0.0,
            volume: 0.0,
            gate: 0,
            elapsed: 0.0,
            noise: 0xACE1,
        }
    }

    pub fn note_on(&mut self, voice: Voice, volume: f32, duration_samples: u64) {
        self.instrument = Instrument::for_voice(self.role, voice);
        self.freq = voice.frequency().unwrap_or(0.0) as f32;
        self.volume = volume;
        self.gate = duration_samples;
        self.elapsed = 0.0;
        self.envelope.trigger();
    }

    pub fn stop(&mut self) {
        self.envelope = Envelope::default();
        self.gate = 0;
    }

    pub fn is_active(&self) -> bool {
        !self.envelope.is_idle()
    }

    pub fn render_sample(&mut self, sample_rate: f32) -> f32 {
        if self.envelope.is_idle() {
            return 0.0;
        }

        let dt = 1.0 / sample_rate;
        if self.gate == 0 {
            self.envelope.release();
        } else {
            self.gate -= 1;
        }
        let level = self.envelope.next(&self.instrument.adsr, dt);

        let (sample, freq) = match self.instrument.wave {
            Wave::Pulse { duty } => (if self.phase < duty { 1.0 } else { -1.0 }, self.freq),
            Wave::Triangle => (1.0 - 4.0 * (self.phase - 0.5).abs(), self.freq),
            Wave::Sweep { from, to, rate } => {
                let freq = to + (from - to) * (-self.elapsed * rate).exp();
                ((self.phase * std::f32::consts::TAU).sin(), freq)
            }
            Wave::Noise => {
                // 16-bit Galois LFSR
                let bit = self.noise & 1;
                self.noise >>= 1;
                if bit == 1 {
                    self.noise ^= 0xB400;
                }
                (if bit == 1 { 1.0 } else { -1.0 }, 0.0)
            }
        };

        if freq.is_finite() {
            self.phase += freq / sample_rate;
            self.phase -= self.phase.floor();
        }
        self.elapsed += dt;

        sample * level * self.volume
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::Percussion;

    const RATE: f32 = 8000.0;

    #[test]
    fn silent_until_triggered() {
        let mut channel = Channel::new(TrackRole::Lead);
        assert!((0..100).all(|_| channel.render_sample(RATE) == 0.0));
    }

    #[test]
    fn note_sounds_then_fades() {
        let mut channel = Channel::new(TrackRole::Lead);
        channel.note_on(Voice::Tone(440.0), 1.0, 800);
        let peak = (0..800)
            .map(|_| channel.render_sample(RATE).abs())
            .fold(0.0, f32::max);
        assert!(peak > 0.5);

        for _ in 0..4000 {
            channel.render_sample(RATE);
        }
        assert!(!channel.is_active());
    }

    #[test]
    fn stop_cuts_immediately() {
        let mut channel = Channel::new(TrackRole::Bass);
        channel.note_on(Voice::Tone(110.0), 1.0, 8000);
        channel.render_sample(RATE);
        channel.stop();
        assert_eq!(channel.render_sample(RATE), 0.0);
    }

    #[test]
    fn drums_decay_on_their_own() {
        let mut channel = Channel::new(TrackRole::Percussion);
        channel.note_on(Voice::Percussion(Percussion::Snare), 1.0, u64::MAX);
        let early = (0..200).map(|_| channel.render_sample(RATE).abs()).fold(0.0, f32::max);
        for _ in 0..2000 {
            channel.render_sample(RATE);
        }
        assert!(early > 0.1);
        assert_eq!(channel.render_sample(RATE), 0.0);
    }
}
