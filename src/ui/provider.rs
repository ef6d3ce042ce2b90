use std::collections::HashMap;

use egui::Context;
use log::info;
use walkers::{
    sources::{Attribution, TileSource},
    HttpOptions, HttpTiles, TileId, Tiles,
};

use crate::config::settings::Config;

const THUNDERFOREST_URL: &str =
    "https://{s}.tile.thunderforest.com/landscape/{z}/{x}/{y}.png?apikey={key}";
const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Enum representing the available base maps.
pub enum Provider {
    ThunderforestLandscape,
    OpenStreetMap,
}

/// Thunderforest's landscape style, a topographic base map.
#[derive(Debug, Clone)]
pub struct ThunderforestLandscape {
    pub api_key: String,
}

impl TileSource for ThunderforestLandscape {
    fn tile_url(&self, tile_id: TileId) -> String {
        let subdomain = SUBDOMAINS[(tile_id.x as usize + tile_id.y as usize) % SUBDOMAINS.len()];
        THUNDERFOREST_URL
            .replace("{s}", subdomain)
            .replace("{z}", &tile_id.zoom.to_string())
            .replace("{x}", &tile_id.x.to_string())
            .replace("{y}", &tile_id.y.to_string())
            .replace("{key}", &self.api_key)
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "Tiles from Thunderforest",
            url: "https://www.thunderforest.com",
            logo_light: None,
            logo_dark: None,
        }
    }
}

/// Returns the HTTP options for the tile downloads.
fn http_options(config: &Config) -> HttpOptions {
    HttpOptions {
        cache: config.http_cache.clone(),
        ..Default::default()
    }
}

/// Returns the available tile providers and the one to show first.
///
/// Thunderforest is only available with an API key; OpenStreetMap always is.
pub fn providers(
    egui_ctx: Context,
    config: &Config,
) -> (HashMap<Provider, Box<dyn Tiles + Send>>, Provider) {
    let mut providers: HashMap<Provider, Box<dyn Tiles + Send>> = HashMap::default();

    providers.insert(
        Provider::OpenStreetMap,
        Box::new(HttpTiles::with_options(
            walkers::sources::OpenStreetMap,
            http_options(config),
            egui_ctx.to_owned(),
        )),
    );

    let selected = match &config.api_key {
        Some(api_key) => {
            providers.insert(
                Provider::ThunderforestLandscape,
                Box::new(HttpTiles::with_options(
                    ThunderforestLandscape {
                        api_key: api_key.clone(),
                    },
                    http_options(config),
                    egui_ctx.to_owned(),
                )),
            );
            Provider::ThunderforestLandscape
        }
        None => Provider::OpenStreetMap,
    };
    info!("Using {:?} tiles", selected);

    (providers, selected)
}
