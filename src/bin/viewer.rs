//! kosis-viewer - native window over the same dataset and chart updates.

use anyhow::{anyhow, Context, Result};
use eframe::egui;
use kosis_dash::charts::ChartUpdater;
use kosis_dash::config::{DashboardConfig, CONFIG_FILE};
use kosis_dash::data::DataLoader;
use kosis_dash::gui::DashboardApp;
use kosis_dash::logging;
use std::path::Path;
use std::sync::Arc;

fn main() -> Result<()> {
    logging::init();

    let config = DashboardConfig::load(Path::new(CONFIG_FILE))?;
    let dataset = DataLoader::load_csv(&config.data_path)
        .with_context(|| format!("cannot load {}", config.data_path.display()))?;
    let initial = config.initial.resolve(dataset.options());
    let dataset = Arc::new(dataset);
    let updater = ChartUpdater::new(config.month_labels);
    let title = config.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([800.0, 500.0])
            .with_title(&title),
        ..Default::default()
    };

    eframe::run_native(
        "kosis-viewer",
        options,
        Box::new(move |cc| {
            Ok(Box::new(DashboardApp::new(
                cc, title, dataset, updater, initial,
            )))
        }),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
