use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ADSRConfig {
    /// Seconds
    pub attack: f32,
    /// Seconds
    pub decay: f32,
    /// 0.0 -> 1.0
    pub sustain: f32,
    /// Seconds
    pub release: f32,
}

impl ADSRConfig {
    pub const fn new(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        Self {
            attack,
            decay,
            sustain,
            release,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EnvelopeState {
    Idle,
    Attack { time: f32 },
    Decay { time: f32 },
    Sustain,
    Release { time: f32, from: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Envelope {
    pub state: EnvelopeState,
    pub level: f32,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            state: EnvelopeState::Idle,
            level: 0.0,
        }
    }
}

impl Envelope {
    pub fn trigger(&mut self) {
        self.state = EnvelopeState::Attack { time: 0.0 };
    }

    pub fn release(&mut self) {
        if !matches!(self.state, EnvelopeState::Idle | EnvelopeState::Release { .. }) {
            self.state = EnvelopeState::Release {
                time: 0.0,
                from: self.level,
            };
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == EnvelopeState::Idle
    }

    /// Level for the current sample, then moves on by `dt` seconds.
    pub fn next(&mut self, adsr: &ADSRConfig, dt: f32) -> f32 {
        self.level = level(&self.state, adsr);

        match &mut self.state {
            EnvelopeState::Idle | EnvelopeState::Sustain => {}
            EnvelopeState::Attack { time } => {
                *time += dt;
                if *time >= adsr.attack {
                    self.state = EnvelopeState::Decay { time: 0.0 };
                }
            }
            EnvelopeState::Decay { time } => {
                *time += dt;
                if *time >= adsr.decay {
                    self.state = EnvelopeState::Sustain;
                }
            }
            EnvelopeState::Release { time, .. } => {
                *time += dt;
                if *time >= adsr.release {
                    self.state = EnvelopeState::Idle;
                }
            }
        }

        self.level
    }
}

fn level(state: &EnvelopeState, adsr: &ADSRConfig) -> f32 {
    match state {
        EnvelopeState::Idle => 0.0,
        EnvelopeState::Attack { time } => {
            if adsr.attack == 0.0 {
                1.0
            } else {
                (time / adsr.attack).min(1.0)
            }
        }
        EnvelopeState::Decay { time } => {
            let decay_progress = if adsr.decay == 0.0 {
                1.0
            } else {
                (time / adsr.decay).min(1.0)
            };
            1.0 - (1.0 - adsr.sustain) * decay_progress
        }
        EnvelopeState::Sustain => adsr.sustain,
        EnvelopeState::Release { time, from } => {
            let release_progress = if adsr.release == 0.0 {
                1.0
            } else {
                (time / adsr.release).min(1.0)
            };
            from * (1.0 - release_progress)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADSR: ADSRConfig = ADSRConfig::new(0.01, 0.01, 0.5, 0.01);
    const DT: f32 = 0.001;

    fn run(envelope: &mut Envelope, steps: usize) -> f32 {
        let mut last = 0.0;
        for _ in 0..steps {
            last = envelope.next(&ADSR, DT);
        }
        last
    }

    #[test]
    fn idle_is_silent() {
        let mut envelope = Envelope::default();
        assert_eq!(run(&mut envelope, 10), 0.0);
    }

    #[test]
    fn rises_decays_and_holds() {
        let mut envelope = Envelope::default();
        envelope.trigger();
        let peak = run(&mut envelope, 11);
        assert!(peak > 0.9);
        let held = run(&mut envelope, 50);
        assert!((held - 0.5).abs() < 1e-6);
        assert_eq!(envelope.state, EnvelopeState::Sustain);
    }

    #[test]
    fn release_returns_to_idle() {
        let mut envelope = Envelope::default();
        envelope.trigger();
        run(&mut envelope, 50);
        envelope.release();
        run(&mut envelope, 20);
        assert!(envelope.is_idle());
        assert_eq!(envelope.next(&ADSR, DT), 0.0);
    }
}
