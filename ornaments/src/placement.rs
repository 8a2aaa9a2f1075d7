//! Corner placement of the ornaments, expressed as [`egui::Align2`] anchors.

use egui::{Align2, Rect, Vec2, vec2};

/// Screen corner an ornament is pinned to. Clockwise from top left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum OrnamentPosition {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

impl OrnamentPosition {
    /// Anchor pinning a widget to this corner, `margin` away from the container's edges.
    /// Margins grow inwards, so the offset signs flip depending on the corner.
    pub fn anchor(self, margin: Vec2) -> Anchor {
        let (align, offset) = match self {
            Self::TopLeft => (Align2::LEFT_TOP, vec2(margin.x, margin.y)),
            Self::TopRight => (Align2::RIGHT_TOP, vec2(-margin.x, margin.y)),
            Self::BottomRight => (Align2::RIGHT_BOTTOM, vec2(-margin.x, -margin.y)),
            Self::BottomLeft => (Align2::LEFT_BOTTOM, vec2(margin.x, -margin.y)),
        };

        Anchor { align, offset }
    }
}

/// One horizontal and one vertical constraint pinning a widget to a container's corner:
/// the edges to align to, and a signed offset from them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub align: Align2,
    pub offset: Vec2,
}

impl Anchor {
    /// Place a widget of `size` within `container`. Callers which reserve parts of the screen
    /// for other UI should pass the remaining safe area as the container.
    pub fn resolve(&self, container: Rect, size: Vec2) -> Rect {
        self.align
            .align_size_within_rect(size, container)
            .translate(self.offset)
    }
}
