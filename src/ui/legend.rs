use egui::{Align2, Color32, RichText, Sense, Ui, Window};

use super::routes::{LONG_WAY_COLOR, QUICK_WAY_COLOR};

pub const LEGEND_TITLE: &str = "Routes:";
const CATEGORIES: [&str; 2] = ["Quick way", "Long way"];
const LINE_COLORS: [&str; 2] = [QUICK_WAY_COLOR, LONG_WAY_COLOR];

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Static list of the routes and their line colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub title: String,
    pub entries: Vec<LegendEntry>,
}

impl Default for Legend {
    fn default() -> Self {
        Legend::new()
    }
}

impl Legend {
    pub fn new() -> Self {
        let entries = CATEGORIES
            .iter()
            .zip(LINE_COLORS.iter())
            .map(|(label, color)| LegendEntry {
                label: label.to_string(),
                color: color.to_string(),
            })
            .collect();
        Legend {
            title: LEGEND_TITLE.to_string(),
            entries,
        }
    }

    /// Shows the legend in the bottom left corner.
    pub fn show(&self, ui: &Ui) {
        Window::new("Legend")
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(Align2::LEFT_BOTTOM, [10., -110.])
            .show(ui.ctx(), |ui| {
                ui.label(RichText::new(&self.title).strong());
                for entry in &self.entries {
                    ui.horizontal(|ui| {
                        let (rect, _) = ui.allocate_exact_size(egui::vec2(12., 12.), Sense::hover());
                        let color = parse_hex_color(&entry.color).unwrap_or(Color32::GRAY);
                        ui.painter().circle_filled(rect.center(), 6., color);
                        ui.label(&entry.label);
                    });
                }
            });
    }
}

/// Parses `#rrggbb`.
pub fn parse_hex_color(hex: &str) -> Option<Color32> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some(Color32::from_rgb(channel(0)?, channel(2)?, channel(4)?))
}
