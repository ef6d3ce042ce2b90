use std::{fs, path::Path};

use log::{debug, info};
use serde::de::DeserializeOwned;

use crate::errors::error_types::ErrorTypes;

use super::feature::{FeatureCollection, PoiProperties, RouteProperties};

pub const INTEREST: &str = "interest";
pub const LONG_WAY: &str = "longway";
pub const QUICK_WAY: &str = "quickway";

const EXTENSIONS: [&str; 3] = ["geojson", "json", "js"];

/// The three datasets of the trail page.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TrailData {
    pub interest: FeatureCollection<PoiProperties>,
    pub long_way: FeatureCollection<RouteProperties>,
    pub quick_way: FeatureCollection<RouteProperties>,
}

impl TrailData {
    /// Turns relative icon, picture and profile paths into `file://` URIs under `base`.
    pub fn resolve_uris(&mut self, base: &Path) {
        for feature in &mut self.interest.features {
            let properties = &mut feature.properties;
            properties.icon_url = resolve_uri(base, &properties.icon_url);
            properties.picture = resolve_uri(base, &properties.picture);
        }
        for feature in self
            .long_way
            .features
            .iter_mut()
            .chain(self.quick_way.features.iter_mut())
        {
            feature.properties.image_url = resolve_uri(base, &feature.properties.image_url);
        }
    }
}

/// Leaves empty values and URIs with a scheme untouched.
pub fn resolve_uri(base: &Path, uri: &str) -> String {
    if uri.is_empty() || uri.contains("://") {
        return uri.to_string();
    }
    format!("file://{}", base.join(uri).display())
}

/// Loads the points of interest and both routes from `dir`.
///
/// Each dataset is looked up as `<name>.geojson`, `<name>.json` or `<name>.js`.
/// Relative image paths are resolved against `dir`.
pub fn load_trail_data(dir: &Path) -> Result<TrailData, ErrorTypes> {
    let mut data = TrailData {
        interest: load_collection(dir, INTEREST)?,
        long_way: load_collection(dir, LONG_WAY)?,
        quick_way: load_collection(dir, QUICK_WAY)?,
    };
    let base = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
    data.resolve_uris(&base);
    info!(
        "Loaded {} points of interest, {} long way and {} quick way features",
        data.interest.features.len(),
        data.long_way.features.len(),
        data.quick_way.features.len()
    );
    Ok(data)
}

fn load_collection<P: DeserializeOwned>(
    dir: &Path,
    name: &str,
) -> Result<FeatureCollection<P>, ErrorTypes> {
    let path = EXTENSIONS
        .iter()
        .map(|extension| dir.join(format!("{}.{}", name, extension)))
        .find(|path| path.exists())
        .ok_or_else(|| {
            ErrorTypes::new(
                201,
                format!("Dataset {} not found in {}", name, dir.display()),
            )
        })?;
    debug!("Reading {}", path.display());

    let data = fs::read_to_string(&path).map_err(|e| {
        ErrorTypes::new(202, format!("Error reading {}: {}", path.display(), e))
    })?;
    parse_collection(&data).map_err(|e| {
        let (code, message) = e.get();
        ErrorTypes::new(code, format!("{}: {}", path.display(), message))
    })
}

/// Parses a feature collection, given either as plain GeoJSON or wrapped in a
/// script assignment such as `var interest = {...};`.
pub fn parse_collection<P: DeserializeOwned>(
    data: &str,
) -> Result<FeatureCollection<P>, ErrorTypes> {
    let json = strip_assignment(data);
    serde_json::from_str(json)
        .map_err(|e| ErrorTypes::new(203, format!("Error parsing GeoJSON: {}", e)))
}

fn strip_assignment(data: &str) -> &str {
    let trimmed = skip_line_comments(data);
    let body = match trimmed.find(['{', '[']) {
        Some(start) if trimmed[..start].trim_end().ends_with('=') => &trimmed[start..],
        _ => trimmed,
    };
    body.trim_end().trim_end_matches(';').trim_end()
}

/// Drops leading blank and `//` comment lines.
fn skip_line_comments(data: &str) -> &str {
    let mut rest = data.trim();
    while rest.starts_with("//") {
        rest = match rest.find('\n') {
            Some(end) => rest[end + 1..].trim_start(),
            None => "",
        };
    }
    rest.trim_end()
}

#[cfg(test)]
mod test {
    use super::*;

    const POINTS: &str = r#"{ "type": "FeatureCollection", "features": [
        { "type": "Feature", "geometry": { "type": "Point", "coordinates": [13.0, 47.5] },
          "properties": { "Type": "start", "URL": "start.png" } } ] }"#;

    #[test]
    fn test_strip_assignment() {
        assert_eq!(strip_assignment("var a = {\"x\": 1};\n"), "{\"x\": 1}");
        assert_eq!(strip_assignment("  {\"x\": 1}  "), "{\"x\": 1}");
        assert_eq!(strip_assignment("{\"x\": \"a = b\"}"), "{\"x\": \"a = b\"}");
        assert_eq!(
            strip_assignment("// routes {from} [alpenverein]\n//\nvar a = {\"x\": 1};"),
            "{\"x\": 1}"
        );
        assert_eq!(strip_assignment("// only a comment"), "");
    }

    #[test]
    fn test_parse_plain_and_wrapped() {
        let plain: FeatureCollection<PoiProperties> = parse_collection(POINTS).unwrap();
        let wrapped: FeatureCollection<PoiProperties> =
            parse_collection(&format!("var interest = {};", POINTS)).unwrap();
        assert_eq!(plain, wrapped);
        assert_eq!(plain.features[0].properties.icon_url, "start.png");
    }

    #[test]
    fn test_parse_commented_script() {
        let script = format!("// Points of interest {{ Jenner }}\nvar interest = {};\n", POINTS);
        let parsed: FeatureCollection<PoiProperties> = parse_collection(&script).unwrap();
        assert_eq!(parsed.features.len(), 1);
    }

    #[test]
    fn test_parse_error_code() {
        let result: Result<FeatureCollection<RouteProperties>, _> = parse_collection("var x = ;");
        assert_eq!(result.unwrap_err().code(), 203);
    }

    #[test]
    fn test_resolve_uri() {
        let base = Path::new("/srv/trail");
        assert_eq!(
            resolve_uri(base, "icons/hut.png"),
            "file:///srv/trail/icons/hut.png"
        );
        assert_eq!(
            resolve_uri(base, "https://example.org/hut.png"),
            "https://example.org/hut.png"
        );
        assert_eq!(resolve_uri(base, ""), "");
    }

    #[test]
    fn test_missing_dataset() {
        let error = load_trail_data(Path::new("no/such/dir")).unwrap_err();
        assert_eq!(error.code(), 201);
    }
}
