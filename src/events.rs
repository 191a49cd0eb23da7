use crate::composition::TrackRole;
use crate::notation::Voice;

/// A note handed to a synthesis sink, stamped with its absolute clock time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dispatch {
    pub role: TrackRole,
    pub voice: Voice,
    /// Final gain: event volume, role mix and master volume combined
    pub volume: f32,
    /// Clock seconds
    pub start: f64,
    /// Seconds
    pub duration: f64,
}

/// What travels from the sequencer thread to the output callback.
#[derive(Debug, Clone)]
pub struct ScheduledEvent {
    pub sample_timestamp: u64,
    pub event: Event,
}

#[derive(Debug, Clone)]
pub enum Event {
    NoteOn {
        role: TrackRole,
        voice: Voice,
        volume: f32,
        duration_samples: u64,
    },
    /// Cut every voice and drop queued notes starting at or after the timestamp
    StopAll,
}
