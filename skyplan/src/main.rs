//! skyplan - weather and activity ideas for any city, in the terminal
//!
//! # Usage
//!
//! ```sh
//! # Start empty and type a city
//! skyplan
//!
//! # Look a city up straight away, against a non-default service
//! skyplan --city Paris --api-url http://weather.internal:8000
//!
//! # Only check that the service answers
//! skyplan --check
//! ```

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use skyplan::{logging, App};
use skyplan_core::{Action, BundleClient, Theme, ThemeFile, DEFAULT_API_URL};
use tracing::{info, warn};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
        }
    }
}

/// Weather and activity recommendations for any city
#[derive(Parser, Debug)]
#[command(name = "skyplan", version)]
#[command(about = "Weather and activity recommendations for any city")]
struct Args {
    /// Base URL of the weather-and-activities service
    #[arg(long, env = "SKYPLAN_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// City to look up on start
    #[arg(long, short)]
    city: Option<String>,

    /// Start with this theme instead of the saved one
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Log file (default: <cache dir>/skyplan/skyplan.log)
    #[arg(long, env = "SKYPLAN_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Ping the service and exit
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_file = args.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_file)?;

    let client = BundleClient::new(&args.api_url)
        .with_context(|| format!("invalid --api-url {:?}", args.api_url))?;

    if args.check {
        return check(&client).await;
    }

    let theme_file = match ThemeFile::default_location() {
        Ok(file) => Some(file),
        Err(err) => {
            warn!(error = %err, "Theme will not be saved");
            None
        }
    };

    let mut app = App::new(client, theme_file);
    app.start(args.theme.map(Theme::from));
    if let Some(city) = args.city {
        app.enqueue(Action::CityInputChange(city.clone()));
        app.enqueue(Action::CitySubmit(city));
    }

    // ===== Terminal setup =====
    let guard = TerminalGuard::enable()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    // ===== Cleanup =====
    drop(guard);
    terminal.show_cursor()?;

    info!("Exited");
    Ok(result?)
}

/// Raw mode is on while this lives; dropping it leaves the alternate screen
/// and turns raw mode off, on the error paths too.
struct TerminalGuard;

impl TerminalGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(error = %err, "Could not leave raw mode");
        }
        if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
            warn!(error = %err, "Could not leave alternate screen");
        }
    }
}

async fn check(client: &BundleClient) -> anyhow::Result<()> {
    let banner = client
        .ping()
        .await
        .with_context(|| format!("{} is not answering", client.base_url()))?;
    println!("{}: {banner}", client.base_url());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_on_early_return() {
        fn setup_fails() -> io::Result<()> {
            let _guard = TerminalGuard;
            Err(io::Error::other("no terminal"))?;
            Ok(())
        }

        // dropping the guard without a terminal logs and does not panic
        assert!(setup_fails().is_err());
    }
}
