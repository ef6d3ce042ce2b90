use egui::{Align2, Image, RichText, Ui, Window};

use crate::data::feature::RouteProperties;

pub const PLACEHOLDER_TITLE: &str = "How to reach the Schneibstein House?";
pub const PLACEHOLDER_HINT: &str = "Hover over the route to get the details";

#[derive(Debug, Clone, PartialEq)]
pub enum InfoContent {
    Placeholder,
    Route(RouteProperties),
}

/// Panel describing the route under the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPanel {
    content: InfoContent,
}

impl Default for InfoPanel {
    fn default() -> Self {
        InfoPanel {
            content: InfoContent::Placeholder,
        }
    }
}

impl InfoPanel {
    /// Replaces the panel's content: route details, or the prompt when `None`.
    pub fn update(&mut self, route: Option<&RouteProperties>) {
        self.content = match route {
            Some(route) => InfoContent::Route(route.clone()),
            None => InfoContent::Placeholder,
        };
    }

    pub fn content(&self) -> &InfoContent {
        &self.content
    }

    pub fn text(&self) -> String {
        match &self.content {
            InfoContent::Placeholder => format!("{}\n\n{}", PLACEHOLDER_TITLE, PLACEHOLDER_HINT),
            InfoContent::Route(route) => format!("{}\n{}", route.name, details(route)),
        }
    }

    pub fn show(&self, ui: &Ui) {
        Window::new("Route Information")
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(Align2::RIGHT_TOP, [-10., 10.])
            .show(ui.ctx(), |ui| match &self.content {
                InfoContent::Placeholder => {
                    ui.label(RichText::new(PLACEHOLDER_TITLE).strong());
                    ui.add_space(8.);
                    ui.label(RichText::new(PLACEHOLDER_HINT).italics());
                }
                InfoContent::Route(route) => {
                    ui.label(RichText::new(&route.name).strong());
                    if !route.image_url.is_empty() {
                        ui.add(Image::new(route.image_url.as_str()).max_width(300.));
                    }
                    ui.horizontal(|ui| {
                        ui.label("Distance:");
                        ui.label(RichText::new(&route.distance).strong());
                        ui.label("| Duration:");
                        ui.label(RichText::new(&route.duration).strong());
                        ui.label("| Difficulty:");
                        ui.label(RichText::new(&route.difficulty).strong());
                    });
                }
            });
    }
}

fn details(route: &RouteProperties) -> String {
    format!(
        "Distance: {} | Duration: {} | Difficulty: {}",
        route.distance, route.duration, route.difficulty
    )
}
