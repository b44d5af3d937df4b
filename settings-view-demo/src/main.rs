mod app;
mod error;
mod host;
mod paths;
mod sample;
mod terminal;

use std::fs::{self, File};
use std::sync::Arc;

use log::{info, warn};
use settings_view::bundle::{MemoryBundle, StateBundle};
use settings_view::config::SettingsConfig;
use settings_view::{SettingsAdapter, SettingsView};
use simplelog::{Config, LevelFilter, WriteLogger};

use app::DemoApp;
use error::DemoError;
use host::TerminalHost;
use terminal::TerminalGuard;

#[tokio::main]
async fn main() {
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}

fn init_logging() {
    let Some(path) = paths::log_file() else { return };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }
}

async fn run() -> Result<(), DemoError> {
    // Character cells cannot draw a bar with a negative start.
    let config = SettingsConfig::new().adjustable_bar_min(false);
    let adapter = SettingsAdapter::with_config(sample::sample_items()?, config)?;

    let host = TerminalHost::new();
    adapter.register_host(Arc::new(host.clone()));

    let mut view = SettingsView::with_adapter(adapter);
    load_state(&mut view)?;

    let mut app = DemoApp::new(view, host);
    {
        let mut terminal = TerminalGuard::new()?;
        app::run(&mut app, &mut terminal).await?;
    }

    save_state(app.view())
}

fn load_state(view: &mut SettingsView) -> Result<(), DemoError> {
    let Some(path) = paths::state_file() else {
        return Ok(());
    };
    if !path.exists() {
        return Ok(());
    }

    let bytes = fs::read(&path)?;
    let backend = match MemoryBundle::from_bytes(&bytes) {
        Ok(backend) => backend,
        Err(e) => {
            warn!("Ignoring unreadable state file {}: {}", path.display(), e);
            return Ok(());
        }
    };
    view.restore_state(&mut StateBundle::new(backend))?;
    info!("Restored view state from {}", path.display());
    Ok(())
}

fn save_state(view: &SettingsView) -> Result<(), DemoError> {
    let Some(path) = paths::state_file() else {
        return Ok(());
    };

    let mut bundle: StateBundle = StateBundle::default();
    view.save_state(&mut bundle)?;
    let bytes = bundle.into_backend().to_bytes()?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, bytes)?;
    info!("Saved view state to {}", path.display());
    Ok(())
}
