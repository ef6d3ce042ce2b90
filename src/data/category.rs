pub const START_TAG: &str = "start";
pub const HOUSE_TAG: &str = "house";
pub const PARKING_TAG: &str = "parking";
pub const VIEWPOINT_TAG: &str = "panoramic view";

/// Category of a point of interest, read from its `Type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Start,
    House,
    Parking,
    PanoramicView,
    Other(String),
}

impl Category {
    pub fn from_tag(tag: &str) -> Category {
        match tag {
            START_TAG => Category::Start,
            HOUSE_TAG => Category::House,
            PARKING_TAG => Category::Parking,
            VIEWPOINT_TAG => Category::PanoramicView,
            other => Category::Other(other.to_string()),
        }
    }

    pub fn is_viewpoint(&self) -> bool {
        matches!(self, Category::PanoramicView)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(Category::from_tag("start"), Category::Start);
        assert_eq!(Category::from_tag("house"), Category::House);
        assert_eq!(Category::from_tag("parking"), Category::Parking);
        assert_eq!(Category::from_tag("panoramic view"), Category::PanoramicView);
        assert_eq!(
            Category::from_tag("Panoramic View"),
            Category::Other("Panoramic View".to_string())
        );
    }

    #[test]
    fn test_only_exact_tag_is_viewpoint() {
        assert!(Category::PanoramicView.is_viewpoint());
        assert!(!Category::from_tag("panoramic").is_viewpoint());
        assert!(!Category::Start.is_viewpoint());
    }
}
