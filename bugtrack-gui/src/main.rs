mod app;

use anyhow::{Context, Result};
use eframe::egui;
use log::debug;

use bugtrack_core::{load_config, BugCollectionView};

use crate::app::BugTrackerApp;

fn main() -> Result<()> {
    let config = load_config(None).context("Failed to load configuration")?;

    let default_filter = config.log_level.clone().unwrap_or_else(|| "warn".to_string());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let mut view = BugCollectionView::with_sample_data();
    if let Some(key) = config.default_sort {
        debug!("Applying configured default sort: {}", key);
        view.apply_sort(key);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Code Everest"),
        ..Default::default()
    };

    eframe::run_native(
        "Code Everest Bug Tracker",
        options,
        Box::new(move |cc| Ok(Box::new(BugTrackerApp::new(cc, view, &config)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start GUI: {}", e))
}
