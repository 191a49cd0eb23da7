use thiserror::Error;

/// Failures of the surrounding shell. Playback itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] ron::error::SpannedError),

    #[error("could not serialize config: {0}")]
    Serialize(#[from] ron::Error),

    #[error("no audio output device")]
    NoOutputDevice,

    #[error("unsupported sample format {0}")]
    UnsupportedSampleFormat(cpal::SampleFormat),

    #[error("no default output config: {0}")]
    DefaultStreamConfig(#[from] cpal::DefaultStreamConfigError),

    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),

    #[error("failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
}

pub type Result<T> = std::result::Result<T, Error>;
