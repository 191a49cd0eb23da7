//! Background-music core for a stage-based game: a compiler for a compact
//! chiptune notation, and a four-track looping sequencer that schedules notes
//! ahead of an audio clock with gapless pause and resume.

pub mod audio;
pub mod catalog;
pub mod composition;
pub mod config;
mod engine;
mod error;
pub mod events;
pub mod notation;
mod sequencer;
pub mod sink;
pub mod timing;

pub use catalog::Catalog;
pub use composition::{
    Composition, CompositionSource, CompositionStore, LoadOutcome, Track, TrackRole, TrackSet,
};
pub use config::{Mix, SequencerConfig};
pub use engine::{EngineCommand, EngineHandle, EngineUpdate, Soundtrack, spawn_engine};
pub use error::{Error, Result};
pub use events::Dispatch;
pub use notation::{NoteEvent, Percussion, Voice, compile};
pub use sequencer::Sequencer;
pub use sink::{LogSink, RecordingSink, SynthSink};
