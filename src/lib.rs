pub mod errors {
    pub mod error_types;
}

pub mod config {
    pub mod settings;
}

pub mod data {
    pub mod category;
    pub mod feature;
    pub mod loader;
}

pub mod ui {
    pub mod controls;
    pub mod icons;
    pub mod info_panel;
    pub mod legend;
    pub mod lib;
    pub mod map;
    pub mod markers;
    pub mod plugins;
    pub mod popup;
    pub mod provider;
    pub mod routes;
}
