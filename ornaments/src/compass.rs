//! Compass ornament state. Drawing is left to the consumer; this only tracks the bearing
//! and whether the compass should currently be shown.

use crate::options::OrnamentVisibility;

#[derive(Debug, Clone, PartialEq)]
pub struct Compass {
    bearing: f64,
    visibility: OrnamentVisibility,
    hidden: bool,
}

impl Default for Compass {
    fn default() -> Self {
        Self {
            bearing: 0.,
            visibility: OrnamentVisibility::Adaptive,
            hidden: true,
        }
    }
}

impl Compass {
    /// Rotation of the map in degrees, normalized to the `[0, 360)` range.
    pub fn bearing(&self) -> f64 {
        self.bearing
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn set_bearing(&mut self, bearing: f64) {
        if !bearing.is_finite() {
            log::debug!("Ignoring non-finite bearing: {bearing}.");
            return;
        }

        self.bearing = bearing.rem_euclid(360.);
        self.apply_visibility(self.visibility);
    }

    /// The compass in adaptive mode is only shown when the map is rotated away from north.
    pub(crate) fn apply_visibility(&mut self, visibility: OrnamentVisibility) {
        self.visibility = visibility;
        self.hidden = match visibility {
            OrnamentVisibility::Hidden => true,
            OrnamentVisibility::Visible => false,
            OrnamentVisibility::Adaptive => self.bearing == 0.,
        };
    }
}
