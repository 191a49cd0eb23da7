use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::composition::TrackRole;
use crate::timing::SchedulerConfig;
use crate::Result;

/// Per-role gains applied on top of each event's own volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mix {
    pub lead: f32,
    pub harmony: f32,
    pub bass: f32,
    pub percussion: f32,
}

impl Default for Mix {
    fn default() -> Self {
        Self {
            lead: 0.10,
            harmony: 0.06,
            bass: 0.12,
            percussion: 0.15,
        }
    }
}

impl Mix {
    pub fn gain(&self, role: TrackRole) -> f32 {
        match role {
            TrackRole::Lead => self.lead,
            TrackRole::Harmony => self.harmony,
            TrackRole::Bass => self.bass,
            TrackRole::Percussion => self.percussion,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    pub poll_interval_ms: u64,
    pub lookahead_ms: u64,
    pub master_volume: f32,
    /// Stage whose song plays first
    pub start_stage: u32,
    pub mix: Mix,
    /// Slots in the queue between the sequencer and the output callback
    pub ring_capacity: usize,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 25,
            lookahead_ms: 100,
            master_volume: 0.5,
            start_stage: 1,
            mix: Mix::default(),
            ring_capacity: 4096,
        }
    }
}

impl SequencerConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let ron_string = fs::read_to_string(path)?;
        let config: SequencerConfig = ron::from_str(&ron_string)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let ron_string = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, ron_string)?;
        Ok(())
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn scheduler(&self) -> SchedulerConfig {
        SchedulerConfig {
            lookahead: self.lookahead_ms as f64 / 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_timing() {
        let config = SequencerConfig::default();
        assert_eq!(config.poll_interval(), Duration::from_millis(25));
        assert_eq!(config.scheduler().lookahead, 0.1);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let config: SequencerConfig =
            ron::from_str("(lookahead_ms: 150, mix: (bass: 0.2))").unwrap();
        assert_eq!(config.lookahead_ms, 150);
        assert_eq!(config.poll_interval_ms, 25);
        assert_eq!(config.mix.bass, 0.2);
        assert_eq!(config.mix.lead, 0.10);
    }

    #[test]
    fn save_and_load() {
        let dir = std::env::temp_dir().join(format!("chipseq-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sequencer.ron");

        let mut config = SequencerConfig::default();
        config.start_stage = 4;
        config.mix.harmony = 0.5;
        config.save(&path).unwrap();

        assert_eq!(SequencerConfig::load(&path).unwrap(), config);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn broken_file_is_an_error() {
        let dir = std::env::temp_dir().join(format!("chipseq-broken-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("sequencer.ron");
        fs::write(&path, "(poll_interval_ms: \"fast\")").unwrap();

        assert!(matches!(
            SequencerConfig::load(&path),
            Err(crate::Error::Config(_))
        ));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_path_uses_defaults() {
        assert_eq!(
            SequencerConfig::load_or_default(None).unwrap(),
            SequencerConfig::default()
        );
    }
}
