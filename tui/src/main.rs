//! movcli Entry Point
//!
//! Launches the search TUI. When a result is picked, the terminal is
//! restored first and the URL is opened in the browser afterwards.
//!
//! Usage:
//!   movcli [OPTIONS]
//!
//! Options:
//!   -c, --config <FILE>     Configuration file
//!   --base-url <URL>        Site to search
//!   --timeout-secs <SECS>   Request timeout

use std::io;
use std::panic;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use movcli_core::{Config, HttpFetcher};
use movcli_tui::cli::Cli;
use movcli_tui::{browser, logging, App};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Log to a file; the terminal belongs to the UI
    let _log_path = logging::init();

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: movcli requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means stdin or stdout is piped, or the");
        eprintln!("session has no terminal (CI, ssh without -t).");
        std::process::exit(1);
    }

    let config = Config::load(&cli.overrides()).context("failed to load configuration")?;
    let fetcher = HttpFetcher::from_config(&config.endpoint)
        .context("failed to set up the search client")?;
    tracing::info!(endpoint = %fetcher.endpoint(), "starting movcli");

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let mut app = App::new(&config, Arc::new(fetcher));
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Propagate any errors
    result?;

    if let Some(url) = app.exit_url() {
        if let Err(e) = browser::open_url(url) {
            tracing::warn!(error = %e, "falling back to printing the URL");
            println!("Open in browser: {}", url);
        }
    }

    Ok(())
}
