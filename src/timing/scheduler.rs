use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::composition::{Composition, TrackRole};
use crate::notation::NoteEvent;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Seconds ahead of the clock within which events are handed to the sink
    pub lookahead: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { lookahead: 0.1 }
    }
}

/// What one tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Clock time of the start of the cycle after this tick
    pub anchor: f64,
    pub wrapped: bool,
    pub dispatched: usize,
    /// Events that were already in the past when reached
    pub missed: usize,
}

/// Walks the four tracks of a composition in step with the clock.
///
/// Each track has a cursor into the current cycle. When the lookahead window
/// reaches past the end of the cycle, the head of the next cycle is dispatched
/// early and counted in `carried`; at the wrap every cursor restarts from its
/// carried count, so an event sitting exactly on the loop boundary is played
/// once, as part of the new cycle.
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: SchedulerConfig,
    cursors: [usize; 4],
    carried: [usize; 4],
}

impl Scheduler {
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            cursors: [0; 4],
            carried: [0; 4],
        }
    }

    pub fn lookahead(&self) -> f64 {
        self.config.lookahead
    }

    pub fn cursors(&self) -> [usize; 4] {
        self.cursors
    }

    /// Events of the next cycle already dispatched, per track.
    pub fn carried(&self) -> [usize; 4] {
        self.carried
    }

    pub fn rewind(&mut self) {
        self.cursors = [0; 4];
        self.carried = [0; 4];
    }

    /// Points every cursor at the first event starting at or after `position`.
    pub fn seek(&mut self, composition: &Composition, position: f64) {
        for (cursor, track) in self.cursors.iter_mut().zip(composition.tracks()) {
            *cursor = track.events().partition_point(|e| e.start < position);
        }
        self.carried = [0; 4];
    }

    pub fn tick<F>(
        &mut self,
        now: f64,
        anchor: f64,
        composition: &Composition,
        mut dispatch: F,
    ) -> TickReport
    where
        F: FnMut(TrackRole, &NoteEvent, f64),
    {
        let mut report = TickReport {
            anchor,
            wrapped: false,
            dispatched: 0,
            missed: 0,
        };
        if composition.is_degenerate() {
            return report;
        }

        let loop_length = composition.loop_length();
        let elapsed = now - anchor;
        if elapsed >= loop_length {
            let cycles = (elapsed / loop_length).floor().max(1.0);
            report.anchor = anchor + cycles * loop_length;
            report.wrapped = true;
            // Carried events only belong to the cycle directly after this one
            self.cursors = if cycles == 1.0 { self.carried } else { [0; 4] };
            self.carried = [0; 4];
            debug!(
                "Loop wrapped after {} cycle(s), anchor {:.3}",
                cycles, report.anchor
            );
        }

        let anchor = report.anchor;
        let horizon = now + self.config.lookahead;
        let next_cycle = anchor + loop_length;

        for (i, track) in composition.tracks().iter().enumerate() {
            let events = track.events();
            let cursor = &mut self.cursors[i];

            while let Some(event) = events.get(*cursor) {
                let at = anchor + event.start;
                if at > horizon {
                    break;
                }
                if at >= now {
                    dispatch(track.role, event, at);
                    report.dispatched += 1;
                } else {
                    report.missed += 1;
                }
                *cursor += 1;
            }

            if *cursor == events.len() && next_cycle <= horizon {
                let carried = &mut self.carried[i];
                while let Some(event) = events.get(*carried) {
                    let at = next_cycle + event.start;
                    if at > horizon {
                        break;
                    }
                    dispatch(track.role, event, at);
                    report.dispatched += 1;
                    *carried += 1;
                }
            }
        }

        if report.missed > 0 {
            warn!("{} event(s) reached after their start time", report.missed);
        }

        report
    }
}
