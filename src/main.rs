use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use mathsprint::{
    app::{App, Flow},
    app_dirs::AppDirs,
    config::{Config, ConfigStore, FileConfigStore, RuntimeSettings},
    logging,
    runtime::{CrosstermEventSource, FixedTicker, QuizEvent, Runner},
    ui, TICK_RATE_MS,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    path::PathBuf,
    time::{Duration, Instant},
};
use tracing::{info, warn};

/// timed arithmetic quiz for the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A timed arithmetic quiz: answer questions before the countdown runs out, clear five per level, and finish all three levels."
)]
pub struct Cli {
    /// seconds allowed per question
    #[clap(short = 's', long, value_parser = clap::value_parser!(u32).range(1..))]
    seconds: Option<u32>,

    /// correct answers needed to clear a level
    #[clap(short = 'a', long, value_parser = clap::value_parser!(u32).range(1..))]
    answers_per_level: Option<u32>,

    /// seed for a reproducible question sequence
    #[clap(long)]
    seed: Option<u64>,

    /// write logs here instead of the default state directory
    #[clap(long)]
    log_file: Option<PathBuf>,

    /// persist --seconds / --answers-per-level as the new defaults
    #[clap(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    if let Some(path) = cli.log_file.clone().or_else(AppDirs::log_path) {
        // Logging is best effort; the quiz runs without it.
        let _ = logging::init(&path);
    }

    let store = FileConfigStore::new();
    let settings = RuntimeSettings::merge(
        &store.load(),
        cli.seconds,
        cli.answers_per_level,
        cli.seed,
    );
    if cli.save_config {
        if let Err(e) = store.save(&Config::from(&settings)) {
            warn!(path = %store.path().display(), "could not save config: {e}");
        }
    }
    info!(?settings, "starting");

    // Put the terminal back even if we panic mid-frame
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&settings);
    let result = start_tui(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn start_tui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    let ticker = FixedTicker::new(Duration::from_millis(TICK_RATE_MS));
    let mut runner = Runner::new(CrosstermEventSource::new(), ticker);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(app, f))?;

        match runner.step() {
            QuizEvent::Tick => {
                let now = Instant::now();
                app.on_tick(now - last_tick);
                last_tick = now;
            }
            QuizEvent::Resize => {}
            QuizEvent::Key(key) => {
                if app.handle_key(key) == Flow::Quit {
                    break;
                }
            }
        }
    }

    Ok(())
}
