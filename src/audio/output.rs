use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use ringbuf::{
    HeapCons, HeapProd, HeapRb,
    traits::{Consumer, Producer, Split},
};
use tracing::{error, info, warn};

use super::Channel;
use crate::composition::TrackRole;
use crate::events::{Dispatch, Event, ScheduledEvent};
use crate::sink::SynthSink;
use crate::timing::SampleClock;
use crate::{Error, Result};

/// Most notes the callback holds between arriving and sounding.
const PENDING_CAPACITY: usize = 1024;

/// Keeps the output stream alive. Dropping it stops the sound.
pub struct AudioOutput {
    _stream: cpal::Stream,
    clock: SampleClock,
}

impl AudioOutput {
    /// Clock driven by the stream's sample counter.
    pub fn clock(&self) -> SampleClock {
        self.clock.clone()
    }
}

/// Sink half of the output: turns dispatches into sample-stamped events for
/// the callback.
pub struct AudioSink {
    producer: HeapProd<ScheduledEvent>,
    sample_rate: f64,
}

impl AudioSink {
    fn push(&mut self, event: ScheduledEvent) {
        if self.producer.try_push(event).is_err() {
            warn!("Audio event queue is full, dropping event");
        }
    }

    fn to_samples(&self, seconds: f64) -> u64 {
        // Saturating: negative times clamp to 0, infinite durations to u64::MAX
        (seconds * self.sample_rate).round() as u64
    }
}

impl SynthSink for AudioSink {
    fn dispatch(&mut self, dispatch: Dispatch) {
        let event = ScheduledEvent {
            sample_timestamp: self.to_samples(dispatch.start),
            event: Event::NoteOn {
                role: dispatch.role,
                voice: dispatch.voice,
                volume: dispatch.volume,
                duration_samples: self.to_samples(dispatch.duration),
            },
        };
        self.push(event);
    }

    fn silence(&mut self, at: f64) {
        let event = ScheduledEvent {
            sample_timestamp: self.to_samples(at),
            event: Event::StopAll,
        };
        self.push(event);
    }
}

struct AudioState {
    channels: [Channel; 4],
    pending: Vec<ScheduledEvent>,
    consumer: HeapCons<ScheduledEvent>,
    sample_rate: f32,
    num_channels: usize,
}

/// Opens the default output device and starts a stream that plays whatever
/// the returned sink is fed.
pub fn open_output(ring_capacity: usize) -> Result<(AudioOutput, AudioSink)> {
    let host = cpal::default_host();
    let device = host.default_output_device().ok_or(Error::NoOutputDevice)?;
    let config = device.default_output_config()?;
    if config.sample_format() != cpal::SampleFormat::F32 {
        return Err(Error::UnsupportedSampleFormat(config.sample_format()));
    }
    let stream_config: cpal::StreamConfig = config.into();

    let num_channels = stream_config.channels as usize;
    let sample_rate = stream_config.sample_rate;
    info!("Audio output: {} channels, {} Hz", num_channels, sample_rate);

    let ring_buffer = HeapRb::<ScheduledEvent>::new(ring_capacity.max(16));
    let (producer, consumer) = ring_buffer.split();

    let sample_counter = Arc::new(AtomicU64::new(0));
    let counter_audio = sample_counter.clone();

    let mut audio_state = AudioState {
        channels: TrackRole::ALL.map(Channel::new),
        pending: Vec::with_capacity(PENDING_CAPACITY),
        consumer,
        sample_rate: sample_rate as f32,
        num_channels,
    };

    let stream = device.build_output_stream(
        &stream_config,
        move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
            audio_callback(data, &mut audio_state, &counter_audio);
        },
        |err| error!("Audio stream error: {}", err),
        None,
    )?;

    stream.play()?;

    let output = AudioOutput {
        _stream: stream,
        clock: SampleClock::new(sample_counter, sample_rate),
    };
    let sink = AudioSink {
        producer,
        sample_rate: sample_rate as f64,
    };
    Ok((output, sink))
}

fn audio_callback(data: &mut [f32], state: &mut AudioState, sample_counter: &AtomicU64) {
    let num_frames = data.len() / state.num_channels.max(1);
    let current_sample = sample_counter.load(Ordering::Relaxed);

    drain_queue(state);

    data.fill(0.0);
    let mut due = 0;

    for frame in 0..num_frames {
        let now = current_sample + frame as u64;
        while let Some(ev) = state.pending.get(due) {
            if ev.sample_timestamp > now {
                break;
            }
            if let Event::NoteOn {
                role,
                voice,
                volume,
                duration_samples,
            } = ev.event
            {
                state.channels[role.index()].note_on(voice, volume, duration_samples);
            }
            due += 1;
        }

        let sample: f32 = state
            .channels
            .iter_mut()
            .map(|channel| channel.render_sample(state.sample_rate))
            .sum::<f32>()
            .clamp(-1.0, 1.0);

        for out in &mut data[frame * state.num_channels..(frame + 1) * state.num_channels] {
            *out = sample;
        }
    }

    state.pending.drain(..due);
    sample_counter.fetch_add(num_frames as u64, Ordering::Relaxed);
}

/// Moves newly queued events into the sorted pending list, applying any
/// `StopAll` in arrival order.
fn drain_queue(state: &mut AudioState) {
    let mut arrived = false;
    while let Some(ev) = state.consumer.try_pop() {
        match ev.event {
            Event::StopAll => {
                let at = ev.sample_timestamp;
                state.pending.retain(|pending| pending.sample_timestamp < at);
                for channel in &mut state.channels {
                    channel.stop();
                }
            }
            Event::NoteOn { .. } => {
                // Never grow inside the callback
                if state.pending.len() < state.pending.capacity() {
                    state.pending.push(ev);
                    arrived = true;
                }
            }
        }
    }
    if arrived {
        state.pending.sort_by_key(|ev| ev.sample_timestamp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::{Percussion, Voice};

    fn state(capacity: usize) -> (HeapProd<ScheduledEvent>, AudioState) {
        let (producer, consumer) = HeapRb::<ScheduledEvent>::new(capacity).split();
        let state = AudioState {
            channels: TrackRole::ALL.map(Channel::new),
            pending: Vec::with_capacity(PENDING_CAPACITY),
            consumer,
            sample_rate: 8000.0,
            num_channels: 2,
        };
        (producer, state)
    }

    fn note_at(sample: u64) -> ScheduledEvent {
        ScheduledEvent {
            sample_timestamp: sample,
            event: Event::NoteOn {
                role: TrackRole::Percussion,
                voice: Voice::Percussion(Percussion::Kick),
                volume: 0.8,
                duration_samples: 400,
            },
        }
    }

    #[test]
    fn notes_start_on_their_sample() {
        let (mut producer, mut state) = state(16);
        let counter = AtomicU64::new(1000);
        producer.try_push(note_at(1064)).unwrap();

        let mut data = vec![0.0; 128];
        audio_callback(&mut data, &mut state, &counter);
        assert_eq!(counter.load(Ordering::Relaxed), 1064);
        assert!(data.iter().all(|s| *s == 0.0));
        assert_eq!(state.pending.len(), 1);

        audio_callback(&mut data, &mut state, &counter);
        assert!(state.pending.is_empty());
        assert!(data[2..].iter().any(|s| *s != 0.0));
        // Stereo frames carry the same sample on both sides
        assert!(data.chunks(2).all(|f| f[0] == f[1]));
    }

    #[test]
    fn stop_all_drops_later_notes_only() {
        let (mut producer, mut state) = state(16);
        producer.try_push(note_at(500)).unwrap();
        producer.try_push(note_at(100)).unwrap();
        producer
            .try_push(ScheduledEvent {
                sample_timestamp: 300,
                event: Event::StopAll,
            })
            .unwrap();
        producer.try_push(note_at(900)).unwrap();

        drain_queue(&mut state);
        let stamps: Vec<u64> = state.pending.iter().map(|e| e.sample_timestamp).collect();
        assert_eq!(stamps, vec![100, 900]);
    }

    #[test]
    fn sink_converts_seconds_to_samples() {
        let (producer, _consumer) = HeapRb::<ScheduledEvent>::new(4).split();
        let sink = AudioSink {
            producer,
            sample_rate: 48_000.0,
        };
        assert_eq!(sink.to_samples(0.5), 24_000);
        assert_eq!(sink.to_samples(-1.0), 0);
        assert_eq!(sink.to_samples(f64::INFINITY), u64::MAX);
    }
}
