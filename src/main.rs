//! Mapty - Map-based workout log
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Mapty v{}", env!("CARGO_PKG_VERSION"));

    let config = match mapty::storage::config::load_config() {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Failed to load config, using defaults: {}", e);
            mapty::AppConfig::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Mapty"),
        ..Default::default()
    };

    eframe::run_native(
        "Mapty",
        options,
        Box::new(|cc| Ok(Box::new(app::MaptyApp::new(cc, config)))),
    )
}
