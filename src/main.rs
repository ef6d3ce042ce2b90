use std::path::PathBuf;

use log::{error, info};
use schneibstein_trail::{
    config::settings::Config,
    data::loader::{load_trail_data, TrailData},
    errors::error_types::ErrorTypes,
    ui::lib::TrailMapApp,
};

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), ErrorTypes> {
    env_logger::init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    let data = match load_trail_data(&config.data_dir) {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load trail data: {}", e);
            TrailData::default()
        }
    };

    info!("Starting trail map");
    eframe::run_native(
        "Schneibstein Trail",
        Default::default(),
        Box::new(|cc| {
            Ok(Box::new(TrailMapApp::new(
                cc.egui_ctx.clone(),
                &config,
                &data,
            )))
        }),
    )
    .map_err(|e| ErrorTypes::new(601, format!("Error running the map window: {}", e)))
}
