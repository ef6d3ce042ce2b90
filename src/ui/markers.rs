use walkers::Position;

use crate::data::feature::{Feature, FeatureCollection, PoiProperties};

use super::{
    icons::{IconOptions, MarkerIcon, BIG_ICON, NORMAL_ICON, SMALL_ICON},
    popup::Popup,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Point,
    Viewpoint,
}

impl MarkerKind {
    /// Icon options used while the pointer is over the marker.
    pub fn hover_icon(&self) -> IconOptions {
        match self {
            MarkerKind::Point => NORMAL_ICON,
            MarkerKind::Viewpoint => BIG_ICON,
        }
    }
}

/// A point of interest drawn with an image icon.
#[derive(Debug, Clone)]
pub struct Marker {
    pub kind: MarkerKind,
    pub position: Position,
    pub icon: MarkerIcon,
    pub popup: Option<Popup>,
    pub properties: PoiProperties,
}

impl Marker {
    fn new(kind: MarkerKind, position: Position, properties: PoiProperties) -> Self {
        let popup = match kind {
            MarkerKind::Point => Popup::for_point(&properties),
            MarkerKind::Viewpoint => Some(Popup::for_viewpoint(&properties)),
        };
        Marker {
            kind,
            position,
            icon: MarkerIcon::new(&properties.icon_url, SMALL_ICON),
            popup,
            properties,
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.icon = MarkerIcon::new(&self.properties.icon_url, self.kind.hover_icon());
    }

    pub fn on_pointer_leave(&mut self) {
        self.icon = MarkerIcon::new(&self.properties.icon_url, SMALL_ICON);
    }
}

/// Splits points of interest into ordinary points and viewpoints, keeping order.
pub fn partition(
    features: &[Feature<PoiProperties>],
) -> (Vec<&Feature<PoiProperties>>, Vec<&Feature<PoiProperties>>) {
    features
        .iter()
        .partition(|feature| !feature.properties.category().is_viewpoint())
}

fn to_markers(kind: MarkerKind, features: Vec<&Feature<PoiProperties>>) -> Vec<Marker> {
    features
        .into_iter()
        .filter_map(|feature| {
            let position = feature.geometry.point()?;
            Some(Marker::new(kind, position, feature.properties.clone()))
        })
        .collect()
}

/// The two marker layers built from the points of interest.
#[derive(Debug, Clone, Default)]
pub struct MarkerLayers {
    pub points: Vec<Marker>,
    pub viewpoints: Vec<Marker>,
}

impl MarkerLayers {
    /// Features without a point geometry are left out.
    pub fn from_collection(collection: &FeatureCollection<PoiProperties>) -> Self {
        let (points, viewpoints) = partition(&collection.features);
        MarkerLayers {
            points: to_markers(MarkerKind::Point, points),
            viewpoints: to_markers(MarkerKind::Viewpoint, viewpoints),
        }
    }

    /// Markers in drawing order, viewpoints on top.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.points.iter().chain(self.viewpoints.iter())
    }

    pub fn len(&self) -> usize {
        self.points.len() + self.viewpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Marker at the drawing index returned by `iter`.
    pub fn get(&self, index: usize) -> Option<&Marker> {
        self.iter().nth(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Marker> {
        self.points.iter_mut().chain(self.viewpoints.iter_mut()).nth(index)
    }
}
