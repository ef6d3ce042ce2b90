use egui::{Align2, RichText, Stroke, Ui, Window};
use log::debug;
use walkers::MapMemory;

use super::map::HomeView;

const EARTH_CIRCUMFERENCE: f64 = 40_075_016.686;
const TILE_SIZE: f64 = 256.;
const SCALE_MAX_WIDTH: f64 = 100.;
const FEET_PER_METER: f64 = 3.280_839_9;
const FEET_PER_MILE: f64 = 5280.;

/// Shows the zoom window with a home button that restores the initial view.
///
/// # Arguments
/// * `ui` - The Egui UI.
/// * `map_memory` - The map memory.
/// * `home` - The view to go back to.
pub fn zoom_home(ui: &Ui, map_memory: &mut MapMemory, home: &HomeView) {
    Window::new("Zoom")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_TOP, [10., 10.])
        .show(ui.ctx(), |ui| {
            ui.vertical(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                if ui
                    .button(RichText::new("🏠").heading())
                    .on_hover_text("Zoom home")
                    .clicked()
                {
                    debug!("Zoom home");
                    home.restore(map_memory);
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}

/// Metric and imperial lengths of the scale bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleBar {
    pub metric_label: String,
    pub metric_width: f32,
    pub imperial_label: String,
    pub imperial_width: f32,
}

/// Ground meters covered by one screen pixel.
pub fn meters_per_pixel(latitude: f64, zoom: f64) -> f64 {
    EARTH_CIRCUMFERENCE * latitude.to_radians().cos() / (TILE_SIZE * 2f64.powf(zoom))
}

/// Rounds down to 1, 2, 3, 5 or 10 times a power of ten.
pub fn round_number(value: f64) -> f64 {
    if value <= 0. {
        return 0.;
    }
    let pow10 = 10f64.powf(value.log10().floor());
    let d = value / pow10;
    let d = if d >= 10. {
        10.
    } else if d >= 5. {
        5.
    } else if d >= 3. {
        3.
    } else if d >= 2. {
        2.
    } else {
        1.
    };
    pow10 * d
}

impl ScaleBar {
    pub fn new(latitude: f64, zoom: f64) -> Self {
        let max_meters = meters_per_pixel(latitude, zoom) * SCALE_MAX_WIDTH;

        let meters = round_number(max_meters);
        let metric_label = if meters < 1000. {
            format!("{} m", meters)
        } else {
            format!("{} km", meters / 1000.)
        };

        let max_feet = max_meters * FEET_PER_METER;
        let (imperial_label, imperial_ratio) = if max_feet > FEET_PER_MILE {
            let max_miles = max_feet / FEET_PER_MILE;
            let miles = round_number(max_miles);
            (format!("{} mi", miles), miles / max_miles)
        } else {
            let feet = round_number(max_feet);
            (format!("{} ft", feet), feet / max_feet)
        };

        ScaleBar {
            metric_label,
            metric_width: (SCALE_MAX_WIDTH * meters / max_meters) as f32,
            imperial_label,
            imperial_width: (SCALE_MAX_WIDTH * imperial_ratio) as f32,
        }
    }

    pub fn show(&self, ui: &Ui) {
        Window::new("Scale")
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(Align2::LEFT_BOTTOM, [10., -10.])
            .show(ui.ctx(), |ui| {
                scale_line(ui, &self.metric_label, self.metric_width);
                scale_line(ui, &self.imperial_label, self.imperial_width);
            });
    }
}

fn scale_line(ui: &mut Ui, label: &str, width: f32) {
    ui.horizontal(|ui| {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(SCALE_MAX_WIDTH as f32, 14.), egui::Sense::hover());
        let stroke = Stroke::new(2., ui.visuals().text_color());
        let left = rect.left_bottom();
        let right = left + egui::vec2(width, 0.);
        ui.painter().line_segment([left, right], stroke);
        ui.painter()
            .line_segment([left, left - egui::vec2(0., 6.)], stroke);
        ui.painter()
            .line_segment([right, right - egui::vec2(0., 6.)], stroke);
        ui.label(label);
    });
}

/// Shows the tile provider attribution and the extra configured lines.
pub fn attribution(ui: &Ui, tiles_text: &str, extra: &[String]) {
    Window::new("Attribution")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_BOTTOM, [-10., -10.])
        .show(ui.ctx(), |ui| {
            let mut lines = vec![tiles_text.to_string()];
            lines.extend(extra.iter().cloned());
            ui.label(RichText::new(lines.join(" | ")).small());
        });
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_round_number() {
        assert_eq!(round_number(0.), 0.);
        assert_eq!(round_number(1.7), 1.);
        assert_eq!(round_number(27.), 20.);
        assert_eq!(round_number(340.), 300.);
        assert_eq!(round_number(780.), 500.);
    }

    #[test]
    fn test_meters_per_pixel_at_equator() {
        let mpp = meters_per_pixel(0., 0.);
        assert!((mpp - 156_543.03).abs() < 0.01);
        assert!((meters_per_pixel(0., 1.) - mpp / 2.).abs() < 1e-6);
    }

    #[test]
    fn test_scale_bar_at_trail_view() {
        // About 6.4 m per pixel at zoom 14 on this latitude.
        let scale = ScaleBar::new(47.580, 14.);
        assert_eq!(scale.metric_label, "500 m");
        assert!(scale.metric_width > 50. && scale.metric_width <= 100.);
        assert_eq!(scale.imperial_label, "2000 ft");
        assert!(scale.imperial_width > 50. && scale.imperial_width <= 100.);
    }

    #[test]
    fn test_scale_bar_switches_to_km_and_miles() {
        let scale = ScaleBar::new(47.580, 8.);
        assert!(scale.metric_label.ends_with(" km"));
        assert!(scale.imperial_label.ends_with(" mi"));
    }
}
