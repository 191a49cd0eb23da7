use serde::{Deserialize, Serialize};

use super::ADSRConfig;
use crate::composition::TrackRole;
use crate::notation::{Percussion, Voice};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Wave {
    /// Pulse with the given duty cycle, 0.0 -> 1.0
    Pulse { duty: f32 },
    Triangle,
    /// Sine whose pitch falls from `from` Hz towards `to` Hz
    Sweep { from: f32, to: f32, rate: f32 },
    Noise,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    pub wave: Wave,
    pub adsr: ADSRConfig,
}

impl Instrument {
    /// The fixed chiptune voicing of each part.
    pub fn for_voice(role: TrackRole, voice: Voice) -> Self {
        match (role, voice) {
            (_, Voice::Percussion(Percussion::Kick)) => Self {
                wave: Wave::Sweep {
                    from: 150.0,
                    to: 40.0,
                    rate: 30.0,
                },
                adsr: ADSRConfig::new(0.001, 0.15, 0.0, 0.01),
            },
            (_, Voice::Percussion(Percussion::Snare)) => Self {
                wave: Wave::Noise,
                adsr: ADSRConfig::new(0.001, 0.08, 0.0, 0.01),
            },
            (TrackRole::Lead, _) => Self {
                wave: Wave::Pulse { duty: 0.5 },
                adsr: ADSRConfig::new(0.005, 0.08, 0.6, 0.05),
            },
            (TrackRole::Harmony, _) => Self {
                wave: Wave::Pulse { duty: 0.25 },
                adsr: ADSRConfig::new(0.005, 0.1, 0.5, 0.05),
            },
            (TrackRole::Bass, _) | (TrackRole::Percussion, _) => Self {
                wave: Wave::Triangle,
                adsr: ADSRConfig::new(0.002, 0.05, 0.8, 0.03),
            },
        }
    }
}
