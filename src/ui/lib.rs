use std::collections::HashMap;

use egui::{Context, Id};
use log::error;
use walkers::{Map, MapMemory, Tiles};

use crate::config::settings::Config;
use crate::data::loader::TrailData;
use crate::ui::{controls, legend::Legend, map::HomeView, plugins::TrailLayers};

use super::provider::{providers, Provider};

/// Main application structure.
pub struct TrailMapApp {
    providers: HashMap<Provider, Box<dyn Tiles + Send>>,
    selected_provider: Provider,
    map_memory: MapMemory,
    home: HomeView,
    layers: TrailLayers,
    legend: Legend,
    attributions: Vec<String>,
}

impl TrailMapApp {
    /// Creates a new instance of `TrailMapApp`.
    ///
    /// # Arguments
    /// * `egui_ctx` - The Egui context.
    /// * `config` - The map settings.
    /// * `data` - Points of interest and routes to draw.
    pub fn new(egui_ctx: Context, config: &Config, data: &TrailData) -> Self {
        egui_extras::install_image_loaders(&egui_ctx);

        let (providers, selected_provider) = providers(egui_ctx.to_owned(), config);
        let home = HomeView::from_config(config);

        Self {
            providers,
            selected_provider,
            map_memory: home.map_memory(),
            home,
            layers: TrailLayers::new(data),
            legend: Legend::new(),
            attributions: config.attributions.clone(),
        }
    }
}

impl eframe::App for TrailMapApp {
    /// Draws the map, then the controls on top of it.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let tiles = match self.providers.get_mut(&self.selected_provider) {
                    Some(provider) => provider.as_mut(),
                    None => {
                        error!("Selected provider not found");
                        return;
                    }
                };
                let tiles_attribution = tiles.attribution().text;

                let map = Map::new(Some(tiles), &mut self.map_memory, self.home.center)
                    .with_plugin(&mut self.layers);

                ui.add(map);

                let popup = self.layers.popup().cloned();
                if let (Some(popup), Some(tip)) = (popup, self.layers.popup_tip) {
                    if popup.show(ui, Id::new("marker popup"), tip) {
                        self.layers.close_popup();
                    }
                }

                controls::zoom_home(ui, &mut self.map_memory, &self.home);
                let center = self.home.current_center(&self.map_memory);
                controls::ScaleBar::new(center.lat(), f64::from(self.map_memory.zoom())).show(ui);
                controls::attribution(ui, tiles_attribution, &self.attributions);
                self.layers.info.show(ui);
                self.legend.show(ui);
            });
    }
}
