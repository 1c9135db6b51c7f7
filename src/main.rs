use std::sync::Arc;

use color_eyre::eyre::Report;
use color_eyre::{Result, Section};
use nusell::adapters::{RestStore, StaticSession};
use nusell::app::{HomeScreen, ProfileScreen, ScreenEvent};
use nusell::cli::{handle_version_command, parse_args, CliCommand};
use nusell::cli_output::{print_home_screen, print_profile_screen, render_error};
use nusell::config::SyncConfig;
use nusell::models::ViewMode;
use nusell::traits::RemoteStore;
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout stays clean for the listing.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nusell=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run_profile(store: Arc<dyn RemoteStore>, mode: ViewMode) -> Result<()> {
    let session = Arc::new(StaticSession::from_env());
    let mut screen = ProfileScreen::new(store, session);

    screen.on_mounted()?;
    let mut events = screen.settle().await;
    if mode != ViewMode::Posts {
        screen.on_mode_changed(mode)?;
        events.extend(screen.settle().await);
    }
    report_errors(&events);

    print_profile_screen(&screen.view());
    Ok(())
}

async fn run_home(store: Arc<dyn RemoteStore>) -> Result<()> {
    let mut screen = HomeScreen::new(store);

    screen.on_mounted();
    let events = screen.settle().await;
    report_errors(&events);

    print_home_screen(&screen.view());
    Ok(())
}

fn report_errors(events: &[ScreenEvent]) {
    for event in events {
        if let ScreenEvent::Error(err) = event {
            tracing::warn!(code = err.error_code(), "{}", err);
            eprintln!("{}", render_error(err));
        }
    }
}

fn main() -> Result<()> {
    // Handle --version before any initialization
    let command = parse_args(std::env::args());
    if command == CliCommand::Version {
        handle_version_command();
    }

    color_eyre::install()?;
    init_tracing();

    let config = SyncConfig::from_env().map_err(|err| {
        let hint = err.category().recovery_hint();
        Report::new(err).suggestion(hint)
    })?;
    let store: Arc<dyn RemoteStore> = Arc::new(RestStore::new(&config)?);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        match command {
            CliCommand::Home => run_home(store).await,
            CliCommand::Profile(mode) => run_profile(store, mode).await,
            CliCommand::Version => Ok(()),
        }
    })
}
