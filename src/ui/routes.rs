use egui::{Color32, Pos2, Stroke};
use walkers::Position;

use crate::data::feature::{FeatureCollection, RouteProperties};

use super::legend::parse_hex_color;

pub const LONG_WAY_COLOR: &str = "#ff7800";
pub const QUICK_WAY_COLOR: &str = "#8000ff";

/// Extra pixels around the stroke that still count as hovering a route.
const HOVER_TOLERANCE: f32 = 4.;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteStyle {
    pub color: Color32,
    pub weight: f32,
    pub opacity: f32,
}

impl RouteStyle {
    pub fn base(color: Color32) -> Self {
        RouteStyle {
            color,
            weight: 3.,
            opacity: 0.8,
        }
    }

    pub fn highlighted(&self) -> Self {
        RouteStyle {
            weight: 5.,
            opacity: 1.,
            ..*self
        }
    }

    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.weight, self.color.gamma_multiply(self.opacity))
    }
}

/// One route feature: its polylines and metadata.
#[derive(Debug, Clone)]
pub struct RouteLine {
    pub lines: Vec<Vec<Position>>,
    pub properties: RouteProperties,
    pub style: RouteStyle,
}

impl RouteLine {
    pub fn highlight(&mut self, base: RouteStyle) {
        self.style = base.highlighted();
    }

    pub fn reset_style(&mut self, base: RouteStyle) {
        self.style = base;
    }

    /// Whether `pointer` is on any of the projected polylines.
    pub fn is_hit(&self, projected: &[Vec<Pos2>], pointer: Pos2) -> bool {
        let tolerance = self.style.weight / 2. + HOVER_TOLERANCE;
        projected.iter().any(|line| {
            line.windows(2)
                .any(|segment| distance_to_segment(pointer, segment[0], segment[1]) <= tolerance)
        })
    }
}

/// A route dataset drawn with one base style.
#[derive(Debug, Clone)]
pub struct RouteLayer {
    pub name: String,
    pub base_style: RouteStyle,
    pub routes: Vec<RouteLine>,
}

impl Default for RouteLayer {
    fn default() -> Self {
        RouteLayer {
            name: String::new(),
            base_style: RouteStyle::base(Color32::GRAY),
            routes: Vec::new(),
        }
    }
}

impl RouteLayer {
    pub fn from_collection(
        name: &str,
        color: &str,
        collection: &FeatureCollection<RouteProperties>,
    ) -> Self {
        let base_style = RouteStyle::base(parse_hex_color(color).unwrap_or(Color32::GRAY));
        let routes = collection
            .features
            .iter()
            .map(|feature| RouteLine {
                lines: feature.geometry.lines(),
                properties: feature.properties.clone(),
                style: base_style,
            })
            .filter(|route| !route.lines.is_empty())
            .collect();
        RouteLayer {
            name: name.to_string(),
            base_style,
            routes,
        }
    }

    pub fn highlight(&mut self, index: usize) {
        let base = self.base_style;
        if let Some(route) = self.routes.get_mut(index) {
            route.highlight(base);
        }
    }

    pub fn reset_style(&mut self, index: usize) {
        let base = self.base_style;
        if let Some(route) = self.routes.get_mut(index) {
            route.reset_style(base);
        }
    }
}

pub fn distance_to_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq == 0. {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / length_sq).clamp(0., 1.);
    point.distance(a + ab * t)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::feature::{Feature, Geometry};
    use egui::pos2;

    fn collection() -> FeatureCollection<RouteProperties> {
        FeatureCollection {
            features: vec![
                Feature {
                    geometry: Geometry::LineString {
                        coordinates: vec![vec![13.0, 47.5], vec![13.1, 47.6]],
                    },
                    properties: RouteProperties {
                        name: "Long way".to_string(),
                        ..Default::default()
                    },
                },
                Feature {
                    geometry: Geometry::Unsupported,
                    properties: RouteProperties::default(),
                },
            ],
        }
    }

    #[test]
    fn test_layer_uses_base_style() {
        let layer = RouteLayer::from_collection("Long way", LONG_WAY_COLOR, &collection());
        assert_eq!(layer.routes.len(), 1);
        assert_eq!(layer.base_style.color, Color32::from_rgb(0xff, 0x78, 0x00));
        assert_eq!(layer.base_style.weight, 3.);
        assert_eq!(layer.base_style.opacity, 0.8);
        assert_eq!(layer.routes[0].style, layer.base_style);
    }

    #[test]
    fn test_highlight_and_reset() {
        let mut layer = RouteLayer::from_collection("Quick way", QUICK_WAY_COLOR, &collection());
        layer.highlight(0);
        assert_eq!(layer.routes[0].style.weight, 5.);
        assert_eq!(layer.routes[0].style.opacity, 1.);
        assert_eq!(layer.routes[0].style.color, layer.base_style.color);
        layer.reset_style(0);
        assert_eq!(layer.routes[0].style, layer.base_style);
        layer.highlight(7);
    }

    #[test]
    fn test_distance_to_segment() {
        let a = pos2(0., 0.);
        let b = pos2(10., 0.);
        assert_eq!(distance_to_segment(pos2(5., 3.), a, b), 3.);
        assert_eq!(distance_to_segment(pos2(-4., 3.), a, b), 5.);
        assert_eq!(distance_to_segment(pos2(3., 4.), a, a), 5.);
    }

    #[test]
    fn test_hit_tolerance_grows_with_weight() {
        let mut layer = RouteLayer::from_collection("Long way", LONG_WAY_COLOR, &collection());
        let projected = vec![vec![pos2(0., 0.), pos2(100., 0.)]];
        assert!(layer.routes[0].is_hit(&projected, pos2(50., 5.)));
        assert!(!layer.routes[0].is_hit(&projected, pos2(50., 6.)));
        layer.highlight(0);
        assert!(layer.routes[0].is_hit(&projected, pos2(50., 6.)));
    }
}
