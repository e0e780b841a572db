mod csv_importer;
mod display;
mod error;
mod file_loader;
mod importer;
mod itinerary;
mod itinerary_manager;
mod loader;
mod manager;
mod maps;
mod state_manager;
mod url_loader;
mod webui;

use config_file::FromConfigFile;
use serde::Deserialize;
use tokio::sync::mpsc;

use std::sync::Arc;

use crate::itinerary_manager::{ItineraryConfig, ItineraryManager};
use crate::manager::Manager;
use crate::state_manager::ViewStateManager;

#[derive(Clone, Deserialize)]
struct Config {
    itinerary: ItineraryConfig,
}

#[tokio::main]
async fn main() -> Result<(), error::Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_config_file("./config.toml")?; // TODO make the path configurable

    let view_state = Arc::new(ViewStateManager::new());
    let (retry_tx, retry_rx) = mpsc::channel(1);

    let mut manager =
        ItineraryManager::new(config.itinerary.clone(), view_state.clone(), retry_rx).await?;

    tokio::try_join!(
        manager.run(),
        webui::rocket(view_state, retry_tx, config.itinerary),
    )?;

    Ok(())
}
