use egui::{pos2, Color32, Painter, Pos2, Rect, Response, Shape, Stroke, TextureOptions};
use log::debug;
use walkers::{Plugin, Projector};

use crate::data::loader::TrailData;

use super::{
    info_panel::InfoPanel,
    markers::{Marker, MarkerLayers},
    popup::Popup,
    routes::{RouteLayer, LONG_WAY_COLOR, QUICK_WAY_COLOR},
};

/// Identifies one route feature in one of the two route layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRef {
    pub layer: RouteLayerId,
    pub index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteLayerId {
    LongWay,
    QuickWay,
}

/// What the pointer is over. Markers sit above routes, so at most one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hover {
    pub marker: Option<usize>,
    pub route: Option<RouteRef>,
}

/// Every overlay of the trail map: routes, markers, the info panel they feed
/// and the popup opened by a click.
#[derive(Debug, Clone, Default)]
pub struct TrailLayers {
    pub markers: MarkerLayers,
    pub long_way: RouteLayer,
    pub quick_way: RouteLayer,
    pub info: InfoPanel,
    pub hover: Hover,
    pub open_popup: Option<usize>,
    /// Screen position of the open popup's tip, refreshed every frame.
    pub popup_tip: Option<Pos2>,
}

impl TrailLayers {
    pub fn new(data: &TrailData) -> Self {
        TrailLayers {
            markers: MarkerLayers::from_collection(&data.interest),
            long_way: RouteLayer::from_collection("Long way", LONG_WAY_COLOR, &data.long_way),
            quick_way: RouteLayer::from_collection("Quick way", QUICK_WAY_COLOR, &data.quick_way),
            ..Default::default()
        }
    }

    fn layer_mut(&mut self, id: RouteLayerId) -> &mut RouteLayer {
        match id {
            RouteLayerId::LongWay => &mut self.long_way,
            RouteLayerId::QuickWay => &mut self.quick_way,
        }
    }

    fn layer(&self, id: RouteLayerId) -> &RouteLayer {
        match id {
            RouteLayerId::LongWay => &self.long_way,
            RouteLayerId::QuickWay => &self.quick_way,
        }
    }

    /// Fires leave callbacks for what the pointer left and enter callbacks for
    /// what it entered.
    pub fn apply_hover(&mut self, hover: Hover) {
        if hover == self.hover {
            return;
        }

        if self.hover.marker != hover.marker {
            if let Some(marker) = self.hover.marker.and_then(|i| self.markers.get_mut(i)) {
                marker.on_pointer_leave();
            }
            if let Some(marker) = hover.marker.and_then(|i| self.markers.get_mut(i)) {
                debug!("Pointer over marker {:?}", marker.properties.kind);
                marker.on_pointer_enter();
            }
        }

        if self.hover.route != hover.route {
            if let Some(route) = self.hover.route {
                self.layer_mut(route.layer).reset_style(route.index);
                self.info.update(None);
            }
            if let Some(route) = hover.route {
                self.layer_mut(route.layer).highlight(route.index);
                let properties = self
                    .layer(route.layer)
                    .routes
                    .get(route.index)
                    .map(|line| line.properties.clone());
                debug!("Pointer over route {:?}", route);
                self.info.update(properties.as_ref());
            }
        }

        self.hover = hover;
    }

    /// Opens the marker's popup, or closes it when it is already open. Any
    /// click outside a marker with a popup closes the open one.
    pub fn click(&mut self, marker: Option<usize>) {
        let has_popup = marker
            .and_then(|i| self.markers.get(i))
            .is_some_and(|marker| marker.popup.is_some());
        self.open_popup = match marker {
            Some(i) if has_popup && self.open_popup != Some(i) => Some(i),
            _ => None,
        };
    }

    pub fn close_popup(&mut self) {
        self.open_popup = None;
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.open_popup
            .and_then(|i| self.markers.get(i))
            .and_then(|marker| marker.popup.as_ref())
    }

    /// Index of the topmost marker whose icon contains `pointer`.
    ///
    /// # Arguments
    /// * `anchors` - Screen position of every marker, in drawing order.
    /// * `pointer` - Pointer position on the screen.
    pub fn marker_at(&self, anchors: &[Pos2], pointer: Pos2) -> Option<usize> {
        self.markers
            .iter()
            .zip(anchors)
            .enumerate()
            .filter(|(_, (marker, anchor))| {
                marker.icon.options.rect_at(**anchor).contains(pointer)
            })
            .map(|(i, _)| i)
            .last()
    }

    /// Route under `pointer`. The highlighted route is drawn on top and wins,
    /// otherwise the last drawn one does.
    ///
    /// # Arguments
    /// * `projected` - Screen polylines of every route, in drawing order.
    /// * `pointer` - Pointer position on the screen.
    pub fn route_at(
        &self,
        projected: &[(RouteRef, Vec<Vec<Pos2>>)],
        pointer: Pos2,
    ) -> Option<RouteRef> {
        let hits: Vec<RouteRef> = projected
            .iter()
            .filter(|(route, lines)| {
                self.layer(route.layer)
                    .routes
                    .get(route.index)
                    .is_some_and(|line| line.is_hit(lines, pointer))
            })
            .map(|(route, _)| *route)
            .collect();

        match self.hover.route {
            Some(highlighted) if hits.contains(&highlighted) => Some(highlighted),
            _ => hits.last().copied(),
        }
    }

    /// What the pointer is over. Markers sit above routes.
    pub fn hover_at(
        &self,
        anchors: &[Pos2],
        projected: &[(RouteRef, Vec<Vec<Pos2>>)],
        pointer: Option<Pos2>,
    ) -> Hover {
        let Some(pointer) = pointer else {
            return Hover::default();
        };
        match self.marker_at(anchors, pointer) {
            Some(marker) => Hover {
                marker: Some(marker),
                route: None,
            },
            None => Hover {
                marker: None,
                route: self.route_at(projected, pointer),
            },
        }
    }

    fn project_markers(&self, projector: &Projector) -> Vec<Pos2> {
        self.markers
            .iter()
            .map(|marker| projector.project(marker.position).to_pos2())
            .collect()
    }

    fn project_routes(&self, projector: &Projector) -> Vec<(RouteRef, Vec<Vec<Pos2>>)> {
        let mut projected = Vec::new();
        for layer in [RouteLayerId::LongWay, RouteLayerId::QuickWay] {
            for (index, route) in self.layer(layer).routes.iter().enumerate() {
                projected.push((
                    RouteRef { layer, index },
                    project_lines(projector, &route.lines),
                ));
            }
        }
        projected
    }

    fn draw_routes(&self, painter: &Painter, projector: &Projector) {
        let highlighted = self.hover.route;
        for id in [RouteLayerId::LongWay, RouteLayerId::QuickWay] {
            for (index, route) in self.layer(id).routes.iter().enumerate() {
                if highlighted == Some(RouteRef { layer: id, index }) {
                    continue;
                }
                draw_route(painter, projector, &route.lines, route.style.stroke());
            }
        }
        if let Some(route) = highlighted {
            if let Some(line) = self.layer(route.layer).routes.get(route.index) {
                draw_route(painter, projector, &line.lines, line.style.stroke());
            }
        }
    }

    fn draw_markers(&self, painter: &Painter, projector: &Projector) {
        for marker in self.markers.iter() {
            let position = projector.project(marker.position).to_pos2();
            draw_marker(painter, marker, position);
        }
    }
}

fn project_lines(projector: &Projector, lines: &[Vec<walkers::Position>]) -> Vec<Vec<Pos2>> {
    lines
        .iter()
        .map(|line| {
            line.iter()
                .map(|position| projector.project(*position).to_pos2())
                .collect()
        })
        .collect()
}

fn draw_route(
    painter: &Painter,
    projector: &Projector,
    lines: &[Vec<walkers::Position>],
    stroke: Stroke,
) {
    for line in project_lines(projector, lines) {
        painter.add(Shape::line(line, stroke));
    }
}

/// Draws the marker's icon image, or a plain dot while it is not loaded.
fn draw_marker(painter: &Painter, marker: &Marker, position: Pos2) {
    let rect = marker.icon.options.rect_at(position);
    let texture = if marker.icon.url.is_empty() {
        None
    } else {
        painter
            .ctx()
            .try_load_texture(
                &marker.icon.url,
                TextureOptions::default(),
                Default::default(),
            )
            .ok()
            .and_then(|poll| poll.texture_id())
    };

    match texture {
        Some(texture_id) => {
            painter.image(
                texture_id,
                rect,
                Rect::from_min_max(pos2(0., 0.), pos2(1., 1.)),
                Color32::WHITE,
            );
        }
        None => {
            let radius = rect.width() / 4.;
            painter.circle_filled(position, radius, Color32::from_rgb(0x2b, 0x6c, 0xb0));
            painter.circle_stroke(position, radius, Stroke::new(1.5, Color32::WHITE));
        }
    }
}

/// Draws routes and markers, tracks the hovered feature and handles clicks.
impl Plugin for &mut TrailLayers {
    fn run(&mut self, response: &Response, painter: Painter, projector: &Projector) {
        let anchors = self.project_markers(projector);
        let projected = self.project_routes(projector);

        let hover = self.hover_at(&anchors, &projected, response.hover_pos());
        self.apply_hover(hover);

        if !response.changed() && response.clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer) = response.interact_pointer_pos() {
                let marker = self.marker_at(&anchors, pointer);
                self.click(marker);
            }
        }

        self.draw_routes(&painter, projector);
        self.draw_markers(&painter, projector);

        self.popup_tip = self
            .open_popup
            .and_then(|i| self.markers.get(i))
            .map(|marker| {
                let position = projector.project(marker.position).to_pos2();
                marker.icon.options.popup_position(position)
            });
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::feature::{
        Feature, FeatureCollection, Geometry, PoiProperties, RouteProperties,
    };
    use crate::ui::{
        icons::{NORMAL_ICON, SMALL_ICON},
        info_panel::InfoContent,
        markers::MarkerKind,
    };

    fn poi(kind: &str) -> Feature<PoiProperties> {
        Feature {
            geometry: Geometry::Point {
                coordinates: vec![13.0, 47.58],
            },
            properties: PoiProperties {
                kind: kind.to_string(),
                ..Default::default()
            },
        }
    }

    fn route(name: &str) -> FeatureCollection<RouteProperties> {
        FeatureCollection {
            features: vec![Feature {
                geometry: Geometry::LineString {
                    coordinates: vec![vec![13.0, 47.58], vec![13.02, 47.59]],
                },
                properties: RouteProperties {
                    name: name.to_string(),
                    distance: "8 km".to_string(),
                    ..Default::default()
                },
            }],
        }
    }

    fn layers() -> TrailLayers {
        TrailLayers::new(&TrailData {
            interest: FeatureCollection {
                features: vec![poi("start"), poi("summit"), poi("panoramic view")],
            },
            long_way: route("Long way"),
            quick_way: route("Quick way"),
        })
    }

    #[test]
    fn test_marker_hover_enter_and_leave() {
        let mut layers = layers();
        layers.apply_hover(Hover {
            marker: Some(0),
            route: None,
        });
        assert_eq!(layers.markers.points[0].icon.options, NORMAL_ICON);

        layers.apply_hover(Hover {
            marker: Some(1),
            route: None,
        });
        assert_eq!(layers.markers.points[0].icon.options, SMALL_ICON);
        assert_eq!(layers.markers.points[1].icon.options, NORMAL_ICON);

        layers.apply_hover(Hover::default());
        assert!(layers
            .markers
            .iter()
            .all(|marker| marker.icon.options == SMALL_ICON));
    }

    #[test]
    fn test_route_hover_updates_info_panel() {
        let mut layers = layers();
        let quick = RouteRef {
            layer: RouteLayerId::QuickWay,
            index: 0,
        };
        layers.apply_hover(Hover {
            marker: None,
            route: Some(quick),
        });
        assert_eq!(layers.quick_way.routes[0].style.weight, 5.);
        assert_eq!(layers.long_way.routes[0].style.weight, 3.);
        match layers.info.content() {
            InfoContent::Route(route) => assert_eq!(route.name, "Quick way"),
            InfoContent::Placeholder => panic!("expected route details"),
        }

        layers.apply_hover(Hover {
            marker: None,
            route: Some(RouteRef {
                layer: RouteLayerId::LongWay,
                index: 0,
            }),
        });
        assert_eq!(layers.quick_way.routes[0].style, layers.quick_way.base_style);
        assert!(layers.info.text().contains("Long way"));

        layers.apply_hover(Hover::default());
        assert_eq!(layers.long_way.routes[0].style, layers.long_way.base_style);
        assert_eq!(layers.info.content(), &InfoContent::Placeholder);
    }

    const LONG: RouteRef = RouteRef {
        layer: RouteLayerId::LongWay,
        index: 0,
    };
    const QUICK: RouteRef = RouteRef {
        layer: RouteLayerId::QuickWay,
        index: 0,
    };

    fn horizontal_routes(y: f32) -> Vec<(RouteRef, Vec<Vec<Pos2>>)> {
        let line = vec![vec![pos2(0., y), pos2(400., y)]];
        vec![(LONG, line.clone()), (QUICK, line)]
    }

    #[test]
    fn test_topmost_marker_wins() {
        let layers = layers();
        let anchors = vec![pos2(100., 100.); 3];
        let hit = layers.marker_at(&anchors, pos2(105., 95.)).unwrap();
        assert_eq!(hit, 2);
        assert_eq!(layers.markers.get(hit).unwrap().kind, MarkerKind::Viewpoint);

        assert_eq!(layers.marker_at(&anchors, pos2(130., 100.)), None);
    }

    #[test]
    fn test_marker_above_route() {
        let layers = layers();
        let anchors = vec![pos2(100., 100.), pos2(300., 300.), pos2(300., 300.)];
        let routes = vec![(LONG, vec![vec![pos2(0., 100.), pos2(400., 100.)]])];

        assert_eq!(
            layers.hover_at(&anchors, &routes, Some(pos2(100., 100.))),
            Hover {
                marker: Some(0),
                route: None,
            }
        );
        assert_eq!(
            layers.hover_at(&anchors, &routes, Some(pos2(200., 101.))),
            Hover {
                marker: None,
                route: Some(LONG),
            }
        );
        assert_eq!(layers.hover_at(&anchors, &routes, None), Hover::default());
    }

    #[test]
    fn test_highlighted_route_wins() {
        let mut layers = layers();
        let anchors = vec![pos2(-100., -100.); 3];
        let routes = horizontal_routes(50.);

        // Quick way is drawn last.
        assert_eq!(layers.route_at(&routes, pos2(200., 50.)), Some(QUICK));

        layers.apply_hover(Hover {
            marker: None,
            route: Some(LONG),
        });
        assert_eq!(layers.route_at(&routes, pos2(200., 50.)), Some(LONG));
        assert_eq!(
            layers.hover_at(&anchors, &routes, Some(pos2(200., 52.))).route,
            Some(LONG)
        );
        assert_eq!(layers.route_at(&routes, pos2(200., 80.)), None);
    }

    #[test]
    fn test_click_toggles_popup() {
        let mut layers = layers();
        layers.click(Some(0));
        assert_eq!(layers.popup().unwrap().text(), "Start: Jennerbahn Station");
        layers.click(Some(0));
        assert!(layers.popup().is_none());

        layers.click(Some(2));
        assert_eq!(layers.popup().unwrap().label, "Viewpoint");
        layers.click(None);
        assert!(layers.popup().is_none());
    }

    #[test]
    fn test_click_on_marker_without_popup_closes() {
        let mut layers = layers();
        layers.click(Some(0));
        layers.click(Some(1));
        assert!(layers.open_popup.is_none());
    }
}
