//! kosis-dash - web dashboard for the KOSIS monthly labor statistics.
//!
//! Run and visit http://127.0.0.1:8050/ in a browser.

use anyhow::{Context, Result};
use kosis_dash::config::{DashboardConfig, CONFIG_FILE};
use kosis_dash::data::DataLoader;
use kosis_dash::logging;
use kosis_dash::server::{self, AppState};
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();
    info!("startup");

    let config = DashboardConfig::load(Path::new(CONFIG_FILE))?;
    let dataset = DataLoader::load_csv(&config.data_path)
        .with_context(|| format!("cannot load {}", config.data_path.display()))?;

    let state = AppState::new(dataset, &config);
    server::serve(state, config.bind_addr).await
}
