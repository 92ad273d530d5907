mod app;
mod chart;
mod color;
mod config;
mod data;
mod state;
mod ui;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use app::TransitDashApp;
use config::DashboardConfig;
use eframe::egui;
use state::AppState;

fn main() -> ExitCode {
    env_logger::init();

    match run(DashboardConfig::from_args(std::env::args().skip(1))) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: DashboardConfig) -> Result<()> {
    // Load before opening a window: a bad file never serves a partial dataset.
    let dataset = data::loader::load_file(&config.data_path)
        .with_context(|| format!("loading {}", config.data_path.display()))?;
    let options = dataset.options();
    log::info!(
        "Loaded {} rows: {} categories, {} agencies, {} to {}",
        dataset.len(),
        options.categories.len(),
        options.agencies.len(),
        options.first_date,
        options.last_date
    );

    let state = AppState::new(Arc::new(dataset), &config);

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        native,
        Box::new(move |_cc| Ok(Box::new(TransitDashApp::new(config, state)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
