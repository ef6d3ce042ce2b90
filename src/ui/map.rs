use log::warn;
use walkers::{MapMemory, Position};

use crate::config::settings::Config;

/// Initial view of the map, restored by the zoom home control.
#[derive(Debug, Clone, Copy)]
pub struct HomeView {
    pub center: Position,
    pub zoom: f64,
}

impl HomeView {
    pub fn from_config(config: &Config) -> Self {
        HomeView {
            center: Position::from_lon_lat(config.center_lon(), config.center_lat()),
            zoom: config.zoom,
        }
    }

    /// Map memory starting at this view.
    pub fn map_memory(&self) -> MapMemory {
        let mut map_memory = MapMemory::default();
        self.restore(&mut map_memory);
        map_memory
    }

    /// Recenters on the home position and resets the zoom level.
    pub fn restore(&self, map_memory: &mut MapMemory) {
        map_memory.follow_my_position();
        if map_memory.set_zoom(self.zoom as f32).is_err() {
            warn!("Invalid zoom level {}", self.zoom);
        }
    }

    /// Position the map is currently centered on.
    pub fn current_center(&self, map_memory: &MapMemory) -> Position {
        map_memory.detached().unwrap_or(self.center)
    }
}
