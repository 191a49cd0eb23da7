use crossbeam::channel::{Receiver, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::composition::CompositionSource;
use crate::sequencer::Sequencer;
use crate::sink::SynthSink;
use crate::timing::Clock;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Load(u32),
    /// Load the song the catalog assigns to a stage
    LoadStage(u32),
    Start,
    Stop,
    /// Start if stopped, stop if playing
    Toggle,
    Reset,
    SetVolume(f32),
    Shutdown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineUpdate {
    CompositionLoaded {
        id: u32,
        title: Option<String>,
        loop_length: f64,
    },
    PlaybackState {
        playing: bool,
    },
    Error {
        message: String,
    },
}

pub struct EngineHandle {
    pub command_tx: Sender<EngineCommand>,
    pub update_rx: Receiver<EngineUpdate>,
    thread: Option<JoinHandle<()>>,
}

impl EngineHandle {
    pub fn send(&self, command: EngineCommand) {
        // The thread only goes away after Shutdown
        let _ = self.command_tx.send(command);
    }

    /// Stops the engine thread and waits for it.
    pub fn shutdown(mut self) {
        self.send(EngineCommand::Shutdown);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Source that can also name its compositions and map stages to them.
pub trait Soundtrack: CompositionSource {
    fn for_stage(&self, stage: u32) -> u32;
    fn title(&self, id: u32) -> Option<&str>;
}

impl Soundtrack for Catalog {
    fn for_stage(&self, stage: u32) -> u32 {
        Catalog::for_stage(self, stage)
    }

    fn title(&self, id: u32) -> Option<&str> {
        Catalog::title(self, id)
    }
}

/// Runs `sequencer` on its own thread, polling every `poll_interval` while it
/// plays and sleeping on the command channel while it is stopped.
pub fn spawn_engine<C, K, S>(sequencer: Sequencer<C, K, S>, poll_interval: Duration) -> EngineHandle
where
    C: Clock + Send + 'static,
    K: Soundtrack + Send + 'static,
    S: SynthSink + Send + 'static,
{
    let (command_tx, command_rx) = crossbeam::channel::unbounded();
    let (update_tx, update_rx) = crossbeam::channel::unbounded();

    let thread = std::thread::spawn(move || {
        engine_thread(sequencer, poll_interval, command_rx, update_tx);
    });

    EngineHandle {
        command_tx,
        update_rx,
        thread: Some(thread),
    }
}

fn engine_thread<C, K, S>(
    mut sequencer: Sequencer<C, K, S>,
    poll_interval: Duration,
    command_rx: Receiver<EngineCommand>,
    update_tx: Sender<EngineUpdate>,
) where
    C: Clock,
    K: Soundtrack,
    S: SynthSink,
{
    info!("Engine thread started");

    loop {
        let command = if sequencer.is_playing() {
            match command_rx.recv_timeout(poll_interval) {
                Ok(command) => Some(command),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match command_rx.recv() {
                Ok(command) => Some(command),
                Err(_) => break,
            }
        };

        if let Some(command) = command {
            if command == EngineCommand::Shutdown {
                break;
            }
            handle_command(&mut sequencer, command, &update_tx);
        }

        sequencer.tick();
    }

    sequencer.reset();
    info!("Engine thread stopped");
}

fn handle_command<C, K, S>(
    sequencer: &mut Sequencer<C, K, S>,
    command: EngineCommand,
    update_tx: &Sender<EngineUpdate>,
) where
    C: Clock,
    K: Soundtrack,
    S: SynthSink,
{
    debug!("Engine command {:?}", command);
    let was_playing = sequencer.is_playing();

    match command {
        EngineCommand::Load(id) => load(sequencer, id, update_tx),
        EngineCommand::LoadStage(stage) => {
            let id = sequencer.source().for_stage(stage);
            info!("Stage {} plays composition {}", stage, id);
            load(sequencer, id, update_tx);
        }
        EngineCommand::Start => sequencer.start(),
        EngineCommand::Stop => sequencer.stop(),
        EngineCommand::Toggle => {
            if was_playing {
                sequencer.stop();
            } else {
                sequencer.start();
            }
        }
        EngineCommand::Reset => sequencer.reset(),
        EngineCommand::SetVolume(gain) => sequencer.set_volume(gain),
        EngineCommand::Shutdown => {}
    }

    let playing = sequencer.is_playing();
    if playing != was_playing {
        let _ = update_tx.send(EngineUpdate::PlaybackState { playing });
    }
}

fn load<C, K, S>(sequencer: &mut Sequencer<C, K, S>, id: u32, update_tx: &Sender<EngineUpdate>)
where
    C: Clock,
    K: Soundtrack,
    S: SynthSink,
{
    let already_current = sequencer.current_id() == Some(id);
    if !sequencer.load(id) {
        let _ = update_tx.send(EngineUpdate::Error {
            message: format!("No composition with id {}", id),
        });
        return;
    }
    if already_current {
        return;
    }

    if let Some(composition) = sequencer.composition() {
        let _ = update_tx.send(EngineUpdate::CompositionLoaded {
            id,
            title: sequencer.source().title(id).map(str::to_string),
            loop_length: composition.loop_length(),
        });
    }
}
