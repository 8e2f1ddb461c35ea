//! Renders a scene to a JSON draw list.
//!
//! ```text
//! wireframe-demo [SCENE] [--log-level <LEVEL>] > traces.json
//! ```
//!
//! Without a scene file the built-in demo scene is rendered. Progress goes
//! to stderr.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::{LevelFilter, Log, Metadata, Record};
use wireframe::{load_scene, Palette, Scene, WireframeResult};

/// Wireframe draw lists for sweep-mesh scenes
#[derive(Parser)]
#[command(name = "wireframe-demo")]
#[command(about = "Render a scene of boxes, cylinders and pipes to JSON traces", long_about = None)]
#[command(version)]
struct Cli {
    /// Scene description (JSON); the demo scene is used when omitted
    scene: Option<PathBuf>,

    /// Most verbose messages written to stderr
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
        }
    }
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logger(level: LevelFilter) {
    // Fails only if a logger is already installed; keep that one.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn run(cli: Cli) -> WireframeResult<()> {
    let scene = match cli.scene {
        Some(path) => {
            log::info!("loading scene from {}", path.display());
            load_scene(path)?
        }
        None => Scene::demo(),
    };

    let rendered = scene.render(&Palette::default());
    log::info!("rendered {} of {} shapes", rendered.traces.len(), scene.len());
    println!("{}", rendered.to_json()?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level.into());
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
