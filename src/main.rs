//! examplan - Main entry point
//!
//! Initializes logging, dispatches the CLI, and runs the wizard TUI with
//! proper terminal lifecycle handling.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::stdout;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use examplan::app::App;
use examplan::catalog::Catalog;
use examplan::cli::{Cli, Commands};
use examplan::error;

/// Initialize tracing with env-filter support (RUST_LOG overrides).
///
/// Logs go to stderr so they never corrupt the alternate screen.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    info!("examplan starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { catalog }) => {
            info!("Validating catalog file: {:?}", catalog);
            match Catalog::load_from_file(&catalog) {
                Ok(loaded) => match loaded.validate() {
                    Ok(_) => {
                        info!("Catalog validation successful");
                        println!("✓ Catalog file is valid: {:?}", catalog);
                    }
                    Err(e) => {
                        error!("Catalog validation failed: {}", e);
                        eprintln!("✗ Catalog validation failed: {}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load catalog file: {}", e);
                    eprintln!("✗ Failed to load catalog file: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Run { out }) => {
            let catalog = resolve_catalog(cli.catalog.as_deref())?;
            run_wizard(catalog, out)?;
        }
        None => {
            info!("No command specified, launching wizard");
            let catalog = resolve_catalog(cli.catalog.as_deref())?;
            run_wizard(catalog, None)?;
        }
    }

    Ok(())
}

/// Load the catalog from the given path, or fall back to the built-in one.
fn resolve_catalog(path: Option<&Path>) -> Result<Catalog, Box<dyn std::error::Error>> {
    let catalog = match path {
        Some(p) => {
            info!("Loading catalog from: {:?}", p);
            let catalog = Catalog::load_from_file(p)?;
            catalog.validate()?;
            catalog
        }
        None => Catalog::default(),
    };
    Ok(catalog)
}

/// Run the wizard TUI
fn run_wizard(
    catalog: Catalog,
    out: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    debug!("Initializing terminal for TUI mode");

    // Initialize terminal
    enable_raw_mode()
        .map_err(|e| error::general_error(format!("Failed to enable raw mode: {}", e)))?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .map_err(|e| error::general_error(format!("Failed to enter alternate screen: {}", e)))?;

    // Create terminal backend
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| error::general_error(format!("Failed to create terminal: {}", e)))?;

    // Create and run application
    let mut app = App::new(catalog);
    let result = app.run(&mut terminal);

    // Cleanup terminal (always attempt cleanup, even if the app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result?;

    // Export the finished configuration, if requested and completed.
    if let Some(config) = app.completed_config() {
        info!("Wizard completed");
        let json = serde_json::to_string_pretty(config)?;
        match out {
            Some(path) => {
                std::fs::write(&path, json)?;
                println!("✓ Configuration written to {}", path.display());
            }
            None => println!("{}", json),
        }
    } else {
        info!("Wizard exited without completing");
    }

    Ok(())
}
