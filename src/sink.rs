use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::events::Dispatch;

/// Turns dispatched notes into sound. Dispatch is fire-and-forget: the
/// sequencer never waits on or queries the sink.
pub trait SynthSink {
    fn dispatch(&mut self, dispatch: Dispatch);

    /// Cuts sounding notes and discards dispatches scheduled at or after `at`.
    fn silence(&mut self, at: f64);
}

impl<S: SynthSink + ?Sized> SynthSink for Box<S> {
    fn dispatch(&mut self, dispatch: Dispatch) {
        (**self).dispatch(dispatch)
    }

    fn silence(&mut self, at: f64) {
        (**self).silence(at)
    }
}

/// Keeps every dispatch in a shared list, e.g. for a visualiser.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    log: Arc<Mutex<Vec<Dispatch>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispatches(&self) -> Vec<Dispatch> {
        self.log.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.log.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.lock().is_empty()
    }

    pub fn clear(&self) {
        self.log.lock().clear();
    }
}

impl SynthSink for RecordingSink {
    fn dispatch(&mut self, dispatch: Dispatch) {
        self.log.lock().push(dispatch);
    }

    fn silence(&mut self, at: f64) {
        self.log.lock().retain(|d| d.start < at);
    }
}

/// Logs dispatches instead of playing them.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SynthSink for LogSink {
    fn dispatch(&mut self, dispatch: Dispatch) {
        debug!(
            "{:?} {:?} at {:.3}s for {:.3}s, gain {:.3}",
            dispatch.role, dispatch.voice, dispatch.start, dispatch.duration, dispatch.volume
        );
    }

    fn silence(&mut self, at: f64) {
        debug!("silence from {:.3}s", at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composition::TrackRole;
    use crate::notation::{Percussion, Voice};

    fn note(start: f64) -> Dispatch {
        Dispatch {
            role: TrackRole::Percussion,
            voice: Voice::Percussion(Percussion::Kick),
            volume: 0.5,
            start,
            duration: 0.1,
        }
    }

    #[test]
    fn recording_clones_share_the_log() {
        let sink = RecordingSink::new();
        let mut writer = sink.clone();
        writer.dispatch(note(0.0));
        writer.dispatch(note(0.5));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.dispatches()[1].start, 0.5);
    }

    #[test]
    fn silence_drops_future_dispatches() {
        let mut sink = RecordingSink::new();
        sink.dispatch(note(0.0));
        sink.dispatch(note(1.0));
        sink.dispatch(note(2.0));
        sink.silence(1.0);
        let starts: Vec<f64> = sink.dispatches().iter().map(|d| d.start).collect();
        assert_eq!(starts, vec![0.0]);
    }

    #[test]
    fn boxed_sinks_forward() {
        let recorder = RecordingSink::new();
        let mut boxed: Box<dyn SynthSink + Send> = Box::new(recorder.clone());
        boxed.dispatch(note(0.25));
        assert_eq!(recorder.len(), 1);
    }
}
