use std::sync::Arc;

use tracing::{debug, info};

use crate::composition::{Composition, CompositionSource, CompositionStore, LoadOutcome};
use crate::config::{Mix, SequencerConfig};
use crate::events::Dispatch;
use crate::sink::SynthSink;
use crate::timing::{Clock, Scheduler, TickReport, Transport};

/// Background-music player: owns the loaded composition, the transport and
/// the scheduler, and feeds a synthesis sink. Drive it by calling `tick` on a
/// fixed interval while it is playing.
pub struct Sequencer<C, K, S> {
    store: CompositionStore<K>,
    transport: Transport<C>,
    scheduler: Scheduler,
    sink: S,
    mix: Mix,
}

impl<C: Clock, K: CompositionSource, S: SynthSink> Sequencer<C, K, S> {
    pub fn new(clock: C, source: K, sink: S, config: &SequencerConfig) -> Self {
        Self {
            store: CompositionStore::new(source),
            transport: Transport::new(clock, config.master_volume),
            scheduler: Scheduler::new(config.scheduler()),
            sink,
            mix: config.mix,
        }
    }

    /// Makes `id` the current composition. Loading the id that is already
    /// current changes nothing, so timing is not disturbed. Loading another id
    /// restarts every track from the top of its cycle; whether playback
    /// continues is left to the transport.
    ///
    /// Returns false if the source has no such composition.
    pub fn load(&mut self, id: u32) -> bool {
        match self.store.load(id) {
            LoadOutcome::Unchanged(_) => {
                debug!("Composition {} already loaded", id);
                true
            }
            LoadOutcome::Replaced(composition) => {
                if self.transport.is_playing() {
                    self.sink.silence(self.transport.now());
                }
                self.scheduler.rewind();
                info!(
                    "Loaded composition {} ({:.2}s loop)",
                    id,
                    composition.loop_length()
                );
                true
            }
            LoadOutcome::Missing => false,
        }
    }

    pub fn start(&mut self) {
        let loop_length = self.store.current().map(|c| c.loop_length());
        if self.transport.start(loop_length) {
            if let Some(composition) = self.store.current() {
                self.scheduler
                    .seek(composition, self.transport.saved_position());
            }
        }
    }

    pub fn stop(&mut self) {
        let loop_length = self.store.current().map_or(0.0, |c| c.loop_length());
        if self.transport.stop(loop_length) {
            self.sink.silence(self.transport.now());
        }
    }

    /// Stops, forgets the position and the loaded composition. The next
    /// `load` always recompiles and playback starts from the top.
    pub fn reset(&mut self) {
        if self.transport.is_playing() {
            self.sink.silence(self.transport.now());
        }
        self.transport.reset();
        self.store.clear();
        self.scheduler.rewind();
    }

    pub fn set_volume(&mut self, gain: f32) {
        self.transport.set_volume(gain);
    }

    /// One polling step. Does nothing unless playing.
    pub fn tick(&mut self) -> Option<TickReport> {
        if !self.transport.is_playing() {
            return None;
        }
        let composition = self.store.current()?;

        let now = self.transport.now();
        let master = self.transport.master_volume();
        let mix = self.mix;
        let sink = &mut self.sink;

        let report = self
            .scheduler
            .tick(now, self.transport.anchor(), composition, |role, event, at| {
                sink.dispatch(Dispatch {
                    role,
                    voice: event.voice,
                    volume: event.volume * mix.gain(role) * master,
                    start: at,
                    duration: event.duration,
                })
            });
        self.transport.rebase(report.anchor);
        Some(report)
    }

    pub fn is_playing(&self) -> bool {
        self.transport.is_playing()
    }

    pub fn position(&self) -> f64 {
        self.transport.position()
    }

    pub fn cursors(&self) -> [usize; 4] {
        self.scheduler.cursors()
    }

    pub fn composition(&self) -> Option<&Arc<Composition>> {
        self.store.current()
    }

    pub fn current_id(&self) -> Option<u32> {
        self.store.current_id()
    }

    pub fn transport(&self) -> &Transport<C> {
        &self.transport
    }

    pub fn source(&self) -> &K {
        self.store.source()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
