use egui::{Area, Frame, Id, Image, Order, Pos2, RichText, Ui};

use crate::data::{category::Category, feature::PoiProperties};

pub const POPUP_MAX_WIDTH: f32 = 220.;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopupClass {
    Point,
    /// Viewpoint popups carry a picture and a wider frame.
    Custom,
}

/// Content bound to a marker, shown when it is clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub label: String,
    pub highlight: String,
    pub picture: Option<String>,
    pub max_width: f32,
    pub class: PopupClass,
}

impl Popup {
    fn point(label: &str, highlight: &str) -> Popup {
        Popup {
            label: label.to_string(),
            highlight: highlight.to_string(),
            picture: None,
            max_width: POPUP_MAX_WIDTH,
            class: PopupClass::Point,
        }
    }

    /// Fixed popup of a point that is not a viewpoint. Unknown categories get none.
    pub fn for_point(properties: &PoiProperties) -> Option<Popup> {
        match properties.category() {
            Category::Start => Some(Popup::point("Start", "Jennerbahn Station")),
            Category::House => Some(Popup::point("Finish", "Schneibstein House")),
            Category::Parking => Some(Popup::point("Parking", "Königssee")),
            Category::PanoramicView | Category::Other(_) => None,
        }
    }

    pub fn for_viewpoint(properties: &PoiProperties) -> Popup {
        Popup {
            label: "Viewpoint".to_string(),
            highlight: properties.note.clone(),
            picture: Some(properties.picture.clone()).filter(|picture| !picture.is_empty()),
            max_width: POPUP_MAX_WIDTH,
            class: PopupClass::Custom,
        }
    }

    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.highlight)
    }

    /// Draws the popup with its tip at `tip`. Returns `true` when the close
    /// button was clicked.
    pub fn show(&self, ui: &Ui, id: Id, tip: Pos2) -> bool {
        let mut closed = false;
        Area::new(id)
            .order(Order::Foreground)
            .fixed_pos(tip)
            .show(ui.ctx(), |ui| {
                Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(self.max_width);
                    ui.horizontal(|ui| {
                        ui.label(format!("{}:", self.label));
                        ui.label(RichText::new(&self.highlight).strong());
                        if ui.small_button("✖").clicked() {
                            closed = true;
                        }
                    });
                    if let Some(picture) = &self.picture {
                        ui.add(Image::new(picture.as_str()).max_width(self.max_width));
                    }
                });
            });
        closed
    }
}
