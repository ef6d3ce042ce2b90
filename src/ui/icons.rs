use egui::{pos2, vec2, Pos2, Rect, Vec2};

/// Size and anchors of a marker icon, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconOptions {
    pub size: [f32; 2],
    /// Point of the icon placed on the marker's position, from its top-left corner.
    pub anchor: [f32; 2],
    /// Where the popup tip opens, relative to the anchor.
    pub popup_anchor: [f32; 2],
}

/// Default marker icon.
pub const SMALL_ICON: IconOptions = IconOptions {
    size: [36., 36.],
    anchor: [18., 18.],
    popup_anchor: [100., 0.],
};

/// Hovered point of interest.
pub const NORMAL_ICON: IconOptions = IconOptions {
    size: [64., 64.],
    anchor: [32., 32.],
    popup_anchor: [0., -32.],
};

/// Hovered viewpoint.
pub const BIG_ICON: IconOptions = IconOptions {
    size: [64., 64.],
    anchor: [32., 32.],
    popup_anchor: [164., 248.],
};

impl IconOptions {
    pub fn size(&self) -> Vec2 {
        vec2(self.size[0], self.size[1])
    }

    /// Screen rectangle covered by the icon when its anchor sits on `position`.
    pub fn rect_at(&self, position: Pos2) -> Rect {
        let min = pos2(position.x - self.anchor[0], position.y - self.anchor[1]);
        Rect::from_min_size(min, self.size())
    }

    pub fn popup_position(&self, position: Pos2) -> Pos2 {
        pos2(
            position.x + self.popup_anchor[0],
            position.y + self.popup_anchor[1],
        )
    }
}

/// An icon image together with the options it is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerIcon {
    pub url: String,
    pub options: IconOptions,
}

impl MarkerIcon {
    pub fn new(url: &str, options: IconOptions) -> Self {
        MarkerIcon {
            url: url.to_string(),
            options,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rect_is_centered_on_anchor() {
        let rect = SMALL_ICON.rect_at(pos2(100., 100.));
        assert_eq!(rect.min, pos2(82., 82.));
        assert_eq!(rect.max, pos2(118., 118.));
        assert!(rect.contains(pos2(100., 100.)));
    }

    #[test]
    fn test_popup_position() {
        assert_eq!(NORMAL_ICON.popup_position(pos2(50., 50.)), pos2(50., 18.));
        assert_eq!(BIG_ICON.popup_position(pos2(0., 0.)), pos2(164., 248.));
    }
}
