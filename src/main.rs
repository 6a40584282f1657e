// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::error::Error;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app_config;
mod app_controller;
mod db_operations;

slint::include_modules!();

fn main() -> Result<(), Box<dyn Error>> {
    let config = app_config::Config::load()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log.filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = db_operations::ReservationStore::open(config.database_path())?;
    tracing::info!(path = %store.path().display(), "starting FlySky Reservations");

    let app = MainWindow::new()?;
    app_controller::install(&app, store);

    app.run()?;

    Ok(())
}
