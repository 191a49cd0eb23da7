use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use chipseq::audio::open_output;
use chipseq::timing::SystemClock;
use chipseq::{
    Catalog, EngineCommand, EngineHandle, EngineUpdate, LogSink, Sequencer, SequencerConfig,
    spawn_engine,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chipseq=info")),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> chipseq::Result<()> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = SequencerConfig::load_or_default(config_path.as_deref())?;

    // The output must outlive the engine or the stream stops
    let (_output, engine) = match open_output(config.ring_capacity) {
        Ok((output, sink)) => {
            let sequencer = Sequencer::new(output.clock(), Catalog, sink, &config);
            (Some(output), spawn_engine(sequencer, config.poll_interval()))
        }
        Err(e) => {
            warn!("{}; running silent", e);
            let sequencer = Sequencer::new(SystemClock::new(), Catalog, LogSink, &config);
            (None, spawn_engine(sequencer, config.poll_interval()))
        }
    };

    let mut stage = config.start_stage.max(1);
    let mut volume = config.master_volume;
    engine.send(EngineCommand::LoadStage(stage));
    engine.send(EngineCommand::Start);

    let _raw = RawMode::enable()?;
    say("space: pause/resume  n: next stage  r: restart  +/-: volume  q: quit")?;

    loop {
        for update in engine.update_rx.try_iter() {
            report(&update)?;
        }

        if !event::poll(Duration::from_millis(50))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char(' ') => engine.send(EngineCommand::Toggle),
            KeyCode::Char('n') => {
                stage += 1;
                begin_stage(&engine, stage);
            }
            KeyCode::Char('r') => {
                stage = 1;
                begin_stage(&engine, stage);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                volume = (volume + 0.1).min(1.0);
                engine.send(EngineCommand::SetVolume(volume));
            }
            KeyCode::Char('-') => {
                volume = (volume - 0.1).max(0.0);
                engine.send(EngineCommand::SetVolume(volume));
            }
            KeyCode::Char('q') | KeyCode::Esc => break,
            _ => {}
        }
    }

    engine.shutdown();
    Ok(())
}

/// A new stage starts its song from the top.
fn begin_stage(engine: &EngineHandle, stage: u32) {
    engine.send(EngineCommand::Reset);
    engine.send(EngineCommand::LoadStage(stage));
    engine.send(EngineCommand::Start);
}

fn report(update: &EngineUpdate) -> io::Result<()> {
    match update {
        EngineUpdate::CompositionLoaded {
            id,
            title,
            loop_length,
        } => say(&format!(
            "♪ {} (#{}, {:.1}s loop)",
            title.as_deref().unwrap_or("untitled"),
            id,
            loop_length
        )),
        EngineUpdate::PlaybackState { playing } => {
            say(if *playing { "playing" } else { "paused" })
        }
        EngineUpdate::Error { message } => say(&format!("error: {}", message)),
    }
}

/// Raw mode needs explicit line starts.
fn say(line: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}\r\n", line)?;
    stdout.flush()
}

struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
