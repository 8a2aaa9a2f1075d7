//! Owns the four ornament widgets, their corner anchors and the camera fan-out.

use crate::{
    camera::{CameraUpdate, MetersPerPixel, meters_per_pixel},
    compass::Compass,
    options::{InvalidPlacement, OrnamentKind, OrnamentOptions, OrnamentVisibility},
    placement::Anchor,
    scale_bar::ScaleBar,
};

/// Logo of the map data provider. Drawing is left to the consumer; this only resolves
/// whether the logo should be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Logo {
    image_available: bool,
    visibility: OrnamentVisibility,
    hidden: bool,
}

impl Default for Logo {
    fn default() -> Self {
        Self {
            image_available: false,
            visibility: OrnamentVisibility::Adaptive,
            hidden: true,
        }
    }
}

impl Logo {
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn image_available(&self) -> bool {
        self.image_available
    }

    pub(crate) fn set_image_available(&mut self, available: bool) {
        self.image_available = available;
        self.apply_visibility(self.visibility);
    }

    /// The logo in adaptive mode is only shown when an image could be loaded.
    pub(crate) fn apply_visibility(&mut self, visibility: OrnamentVisibility) {
        self.visibility = visibility;
        self.hidden = match visibility {
            OrnamentVisibility::Hidden => true,
            OrnamentVisibility::Visible => false,
            OrnamentVisibility::Adaptive => !self.image_available,
        };
    }
}

/// Button which opens the attribution of the map data provider. The button always has
/// content, so adaptive mode resolves to visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributionButton {
    hidden: bool,
}

impl AttributionButton {
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub(crate) fn apply_visibility(&mut self, visibility: OrnamentVisibility) {
        self.hidden = visibility == OrnamentVisibility::Hidden;
    }
}

/// The four fixed ornaments of a map view and their placement. Owns the widget states and
/// the active set of corner anchors; camera changes are fanned out to the scale bar and the
/// compass, while placement only changes through [`Ornaments::configure`].
#[derive(Debug, Clone)]
pub struct Ornaments {
    options: OrnamentOptions,
    logo: Logo,
    attribution: AttributionButton,
    compass: Compass,
    scale_bar: ScaleBar,
    anchors: Vec<(OrnamentKind, Anchor)>,
    meters_per_pixel: MetersPerPixel,
}

impl Default for Ornaments {
    fn default() -> Self {
        Self {
            options: OrnamentOptions::default(),
            logo: Logo::default(),
            attribution: AttributionButton::default(),
            compass: Compass::default(),
            scale_bar: ScaleBar::default(),
            anchors: Vec::new(),
            meters_per_pixel,
        }
        .rebuilt()
    }
}

impl Ornaments {
    /// Create the ornament set with the given placement.
    ///
    /// # Errors
    ///
    /// Fails when two ornaments which are not hidden share a corner.
    pub fn new(options: OrnamentOptions) -> Result<Self, InvalidPlacement> {
        options.validate()?;

        Ok(Self {
            options,
            ..Self::default()
        }
        .rebuilt())
    }

    /// Use a different ground-resolution conversion than the built-in Web Mercator one, for
    /// map engines with another projection.
    pub fn with_meters_per_pixel(mut self, meters_per_pixel: MetersPerPixel) -> Self {
        self.meters_per_pixel = meters_per_pixel;
        self
    }

    /// Replace the active placement with a new one. The previous anchors are dropped and a
    /// fresh set is issued in a single step, so a consumer never observes a partial update.
    ///
    /// # Errors
    ///
    /// Fails when two ornaments which are not hidden share a corner; the previously active
    /// configuration then stays in effect.
    pub fn configure(&mut self, options: OrnamentOptions) -> Result<(), InvalidPlacement> {
        options.validate()?;

        self.options = options;
        self.rebuild();
        Ok(())
    }

    /// Called by the map engine whenever the camera moves. Updates the scale bar's ground
    /// resolution and the compass bearing; placement is unaffected.
    pub fn on_camera_changed(&mut self, camera: &CameraUpdate) {
        if let (Some(center), Some(zoom)) = (camera.center, camera.zoom) {
            self.scale_bar
                .set_meters_per_point((self.meters_per_pixel)(center.y(), zoom));
        }

        if let Some(bearing) = camera.bearing {
            self.compass.set_bearing(bearing);
        }
    }

    /// Tell the ornaments whether a logo image could be loaded. The logo in adaptive mode is
    /// only shown when one is available.
    pub fn set_logo_image_available(&mut self, available: bool) {
        self.logo.set_image_available(available);
    }

    pub fn options(&self) -> &OrnamentOptions {
        &self.options
    }

    pub fn logo(&self) -> &Logo {
        &self.logo
    }

    pub fn attribution(&self) -> &AttributionButton {
        &self.attribution
    }

    pub fn compass(&self) -> &Compass {
        &self.compass
    }

    pub fn scale_bar(&self) -> &ScaleBar {
        &self.scale_bar
    }

    /// Mutable access to the scale bar, e.g. to switch the unit system when the locale
    /// changes.
    pub fn scale_bar_mut(&mut self) -> &mut ScaleBar {
        &mut self.scale_bar
    }

    /// The active anchor set, one entry per ornament.
    pub fn anchors(&self) -> &[(OrnamentKind, Anchor)] {
        &self.anchors
    }

    /// Corner anchor of the given ornament.
    pub fn anchor(&self, kind: OrnamentKind) -> Option<Anchor> {
        self.anchors
            .iter()
            .find(|(anchored, _)| *anchored == kind)
            .map(|(_, anchor)| *anchor)
    }

    /// Whether the given ornament is currently hidden.
    pub fn hidden(&self, kind: OrnamentKind) -> bool {
        match kind {
            OrnamentKind::Logo => self.logo.hidden(),
            OrnamentKind::Attribution => self.attribution.hidden(),
            OrnamentKind::Compass => self.compass.hidden(),
            OrnamentKind::ScaleBar => self.scale_bar.hidden(),
        }
    }

    fn rebuilt(mut self) -> Self {
        self.rebuild();
        self
    }

    fn rebuild(&mut self) {
        // Drop the previous anchor set and issue a fresh one.
        self.anchors.clear();
        for (kind, config) in self.options.entries() {
            self.anchors.push((kind, config.position.anchor(config.margin)));
        }

        self.logo.apply_visibility(self.options.logo.visibility);
        self.attribution
            .apply_visibility(self.options.attribution.visibility);
        self.compass.apply_visibility(self.options.compass.visibility);
        self.scale_bar
            .apply_visibility(self.options.scale_bar.visibility);

        log::trace!("Activated {} ornament anchors.", self.anchors.len());
    }
}
