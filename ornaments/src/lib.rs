#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

mod camera;
mod compass;
mod manager;
mod options;
mod placement;
mod position;
mod scale_bar;

pub use camera::{CameraUpdate, MetersPerPixel, meters_per_pixel};
pub use compass::Compass;
pub use manager::{AttributionButton, Logo, Ornaments};
pub use options::{
    InvalidPlacement, OrnamentConfig, OrnamentKind, OrnamentOptions, OrnamentVisibility,
};
pub use placement::{Anchor, OrnamentPosition};
pub use position::{Position, lat_lon, lon_lat};
pub use scale_bar::{Bar, Label, ScaleBar, ScaleBarRow};
