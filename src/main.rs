use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use hungry_snake::app::App;
use hungry_snake::config::{GridConfig, LOG_FILE, TICK_RATE};
use hungry_snake::feedback::{Bell, Feedback, Silent};
use hungry_snake::mode_select::Mode;
use log::{error, info};
use ratatui::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "hungry-snake")]
#[command(version, about = "Snake on a wrap-around grid, with optional bombs")]
struct Cli {
    /// Seed for food and bomb placement; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the mode selection screen
    #[arg(long)]
    mode: Option<ModeArg>,

    #[arg(long, default_value = LOG_FILE)]
    log_file: PathBuf,

    #[arg(long, default_value = "info")]
    log_level: LogLevel,

    /// Do not ring the terminal bell
    #[arg(long)]
    mute: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Normal,
    Advance,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Normal => Mode::Normal,
            ModeArg::Advance => Mode::Advance,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> Result<(), io::Error> {
    let cli = Cli::parse();

    // Set up logging before anything else
    WriteLogger::init(
        cli.log_level.into(),
        Config::default(),
        File::create(&cli.log_file)?,
    )
    .map_err(io::Error::other)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!("Starting Hungry Snake with seed {}", seed);

    let feedback: Box<dyn Feedback> = if cli.mute {
        Box::new(Silent)
    } else {
        Box::new(Bell::new(io::stdout()))
    };
    let mut app = App::new(
        GridConfig::default(),
        seed,
        cli.mode.map(Mode::from),
        feedback,
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match &result {
        Ok(()) => info!("Exiting"),
        Err(e) => error!("Game loop failed: {}", e),
    }
    result
}

/// Fixed-rate loop: input is queued between ticks and applied at the start of
/// the next one.
fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| app.render(f))?;

        let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            app.handle_event(&event::read()?);
        }

        if app.should_exit() {
            return Ok(());
        }

        if last_tick.elapsed() >= TICK_RATE {
            app.tick();
            last_tick = Instant::now();
        }
    }
}
