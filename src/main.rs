use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use connect_four::config::AppConfig;
use connect_four::session::Session;
use connect_four::share::MemoryShare;
use connect_four::ui::App;

/// Play Connect Four with undo/redo and shareable game codes.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four with shareable replays")]
struct Cli {
    /// Share code to replay (one digit per move, e.g. 3234)
    #[arg(long)]
    share: Option<String>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Replay the share code without the TUI and print the final position
    #[arg(long)]
    headless: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    let share = match &cli.share {
        Some(code) => MemoryShare::with_code(code.clone()),
        None => MemoryShare::new(),
    };
    let mut session = Session::new(Box::new(share));

    if cli.headless {
        return run_headless(session);
    }

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(session, &config);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running app")
}

/// Replay the loaded game immediately and print the resulting position.
fn run_headless(mut session: Session) -> Result<()> {
    if let Some(driver) = session.start_replay(Duration::ZERO) {
        driver.run(&mut session);
        session.finish_replay();
    }

    let state = session.state();
    print!("{}", state.board());
    if state.is_over() {
        println!("{} wins", state.current_player().other().name());
    } else if !state.history().is_empty() {
        println!("{} to move", state.current_player().name());
    }
    let code = session.share_code();
    if !code.is_empty() {
        println!("share code: {code}");
    }
    Ok(())
}
