use tracing::{debug, info};

use super::Clock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportState {
    Stopped,
    Playing,
}

/// Maps clock time onto a position inside the loop and remembers where
/// playback paused.
pub struct Transport<C> {
    clock: C,
    state: TransportState,
    /// Clock time at which the current loop cycle started
    clock_anchor: f64,
    /// Position to resume from while stopped
    saved_position: f64,
    master_volume: f32,
}

impl<C: Clock> Transport<C> {
    pub fn new(clock: C, master_volume: f32) -> Self {
        Self {
            clock,
            state: TransportState::Stopped,
            clock_anchor: 0.0,
            saved_position: 0.0,
            master_volume: master_volume.clamp(0.0, 1.0),
        }
    }

    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == TransportState::Playing
    }

    pub fn anchor(&self) -> f64 {
        self.clock_anchor
    }

    pub fn saved_position(&self) -> f64 {
        self.saved_position
    }

    /// Position within the current cycle.
    pub fn position(&self) -> f64 {
        match self.state {
            TransportState::Playing => self.now() - self.clock_anchor,
            TransportState::Stopped => self.saved_position,
        }
    }

    /// Begins playback from the saved position. `loop_length` is `None` when
    /// nothing is loaded, in which case there is nothing to play.
    ///
    /// Returns true if the transport went from Stopped to Playing.
    pub fn start(&mut self, loop_length: Option<f64>) -> bool {
        if self.is_playing() {
            debug!("start ignored: already playing");
            return false;
        }
        let Some(loop_length) = loop_length else {
            debug!("start ignored: no composition loaded");
            return false;
        };

        self.saved_position = wrap_position(self.saved_position, loop_length);
        self.clock_anchor = self.now() - self.saved_position;
        self.state = TransportState::Playing;
        info!("Playing from {:.3}s", self.saved_position);
        true
    }

    /// Pauses, keeping the position so the next `start` resumes seamlessly.
    ///
    /// Returns true if the transport went from Playing to Stopped.
    pub fn stop(&mut self, loop_length: f64) -> bool {
        if !self.is_playing() {
            debug!("stop ignored: already stopped");
            return false;
        }

        self.saved_position = wrap_position(self.now() - self.clock_anchor, loop_length);
        self.state = TransportState::Stopped;
        info!("Paused at {:.3}s", self.saved_position);
        true
    }

    /// Stops and forgets the saved position.
    pub fn reset(&mut self) {
        self.state = TransportState::Stopped;
        self.saved_position = 0.0;
        self.clock_anchor = 0.0;
        info!("Transport reset");
    }

    /// Moves time-zero of the cycle, used when the scheduler wraps the loop.
    pub fn rebase(&mut self, anchor: f64) {
        self.clock_anchor = anchor;
    }

    pub fn master_volume(&self) -> f32 {
        self.master_volume
    }

    pub fn set_volume(&mut self, gain: f32) {
        if gain.is_finite() {
            self.master_volume = gain.clamp(0.0, 1.0);
        }
    }
}

/// Folds a raw position into `[0, loop_length)`. Degenerate loops have only
/// position 0.
fn wrap_position(position: f64, loop_length: f64) -> f64 {
    if position.is_nan() || position <= 0.0 || loop_length.is_nan() || loop_length <= 0.0 {
        return 0.0;
    }
    if loop_length.is_infinite() {
        return position;
    }
    position.rem_euclid(loop_length)
}
