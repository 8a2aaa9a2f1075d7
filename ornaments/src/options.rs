//! Declarative placement of the four ornaments.

use egui::{Vec2, vec2};

use crate::placement::OrnamentPosition;

/// The four fixed ornament roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrnamentKind {
    Logo,
    Attribution,
    Compass,
    ScaleBar,
}

/// Whether an ornament is shown. `Adaptive` defers to content, e.g. the compass is only
/// shown when the map is rotated away from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub enum OrnamentVisibility {
    #[default]
    Adaptive,
    Hidden,
    Visible,
}

/// Position, margin and visibility of a single ornament.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct OrnamentConfig {
    pub position: OrnamentPosition,

    /// Distance from the container's edges, in screen points.
    pub margin: Vec2,

    pub visibility: OrnamentVisibility,
}

const DEFAULT_MARGIN: f32 = 8.;

impl OrnamentConfig {
    fn new(position: OrnamentPosition) -> Self {
        Self {
            position,
            margin: vec2(DEFAULT_MARGIN, DEFAULT_MARGIN),
            visibility: OrnamentVisibility::Adaptive,
        }
    }

    fn visible(position: OrnamentPosition) -> Self {
        Self {
            visibility: OrnamentVisibility::Visible,
            ..Self::new(position)
        }
    }
}

/// Placement of all four ornaments. Two ornaments which are not hidden must not share
/// a corner.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct OrnamentOptions {
    pub logo: OrnamentConfig,
    pub attribution: OrnamentConfig,
    pub compass: OrnamentConfig,
    pub scale_bar: OrnamentConfig,
}

impl Default for OrnamentOptions {
    fn default() -> Self {
        Self {
            logo: OrnamentConfig::new(OrnamentPosition::BottomLeft),
            attribution: OrnamentConfig::visible(OrnamentPosition::BottomRight),
            compass: OrnamentConfig::new(OrnamentPosition::TopRight),
            scale_bar: OrnamentConfig::visible(OrnamentPosition::TopLeft),
        }
    }
}

impl OrnamentOptions {
    /// All four ornaments with their configs, in a fixed order.
    pub(crate) fn entries(&self) -> [(OrnamentKind, &OrnamentConfig); 4] {
        [
            (OrnamentKind::Logo, &self.logo),
            (OrnamentKind::Attribution, &self.attribution),
            (OrnamentKind::Compass, &self.compass),
            (OrnamentKind::ScaleBar, &self.scale_bar),
        ]
    }

    /// Check that no two ornaments which are not hidden occupy the same corner. Adaptive
    /// ornaments take part in the check, since they can become visible at any time.
    pub(crate) fn validate(&self) -> Result<(), InvalidPlacement> {
        let entries = self.entries();

        for (n, (kind, config)) in entries.iter().enumerate() {
            if config.visibility == OrnamentVisibility::Hidden {
                continue;
            }

            for (other_kind, other_config) in &entries[n + 1..] {
                if other_config.visibility != OrnamentVisibility::Hidden
                    && other_config.position == config.position
                {
                    return Err(InvalidPlacement {
                        first: *kind,
                        second: *other_kind,
                        position: config.position,
                    });
                }
            }
        }

        Ok(())
    }
}

/// Two ornaments were placed on the same corner.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{first:?} and {second:?} are both placed at {position:?}")]
pub struct InvalidPlacement {
    pub first: OrnamentKind,
    pub second: OrnamentKind,
    pub position: OrnamentPosition,
}
