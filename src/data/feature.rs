use serde::Deserialize;
use walkers::Position;

use super::category::Category;

/// A GeoJSON feature collection whose features all carry properties of type `P`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FeatureCollection<P> {
    #[serde(default = "Vec::new")]
    pub features: Vec<Feature<P>>,
}

impl<P> Default for FeatureCollection<P> {
    fn default() -> Self {
        FeatureCollection {
            features: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Feature<P> {
    pub geometry: Geometry,
    pub properties: P,
}

/// `[lon, lat]` with an optional elevation.
pub type Coordinate = Vec<f64>;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Coordinate },
    LineString { coordinates: Vec<Coordinate> },
    MultiLineString { coordinates: Vec<Vec<Coordinate>> },
    #[serde(other)]
    Unsupported,
}

fn to_position(coordinate: &Coordinate) -> Option<Position> {
    match coordinate.as_slice() {
        [lon, lat, ..] => Some(Position::from_lon_lat(*lon, *lat)),
        _ => None,
    }
}

impl Geometry {
    /// Position of a point geometry.
    pub fn point(&self) -> Option<Position> {
        match self {
            Geometry::Point { coordinates } => to_position(coordinates),
            _ => None,
        }
    }

    /// Polylines of a line geometry. Coordinates with less than two values are skipped.
    pub fn lines(&self) -> Vec<Vec<Position>> {
        match self {
            Geometry::LineString { coordinates } => {
                vec![coordinates.iter().filter_map(to_position).collect()]
            }
            Geometry::MultiLineString { coordinates } => coordinates
                .iter()
                .map(|line| line.iter().filter_map(to_position).collect())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Properties of a point of interest. Missing ones are empty strings.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct PoiProperties {
    #[serde(rename = "Type")]
    pub kind: String,
    /// Icon image.
    #[serde(rename = "URL")]
    pub icon_url: String,
    #[serde(rename = "Note")]
    pub note: String,
    /// Picture shown in a viewpoint popup.
    #[serde(rename = "Pic")]
    pub picture: String,
}

impl PoiProperties {
    pub fn category(&self) -> Category {
        Category::from_tag(&self.kind)
    }
}

/// Metadata of a route, shown in the info panel.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RouteProperties {
    #[serde(rename = "Name")]
    pub name: String,
    /// Elevation profile image.
    #[serde(rename = "URL")]
    pub image_url: String,
    #[serde(rename = "Dis")]
    pub distance: String,
    #[serde(rename = "Dur")]
    pub duration: String,
    #[serde(rename = "Dif")]
    pub difficulty: String,
}
