use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::telemetry;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

/// Play Connect Four against a friend in the terminal.
#[derive(Parser)]
#[command(name = "connect_four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Player 1's name; with --player2, skips the menu and name prompts
    #[arg(long)]
    player1: Option<String>,

    /// Player 2's name
    #[arg(long)]
    player2: Option<String>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    telemetry::init_tracing(&config.logging).with_context(|| {
        format!("opening log file {}", config.logging.file.display())
    })?;
    info!(config = %cli.config.display(), "starting");

    let mut app = match (&cli.player1, &cli.player2) {
        (Some(name1), Some(name2)) => {
            App::with_players(&config, name1, name2).context("setting up players")?
        }
        _ => App::new(&config),
    };

    run(&mut app).context("running terminal UI")?;
    info!("exiting");
    Ok(())
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    if res.is_ok() {
        println!("Thank you for playing.");
    }
    res
}
