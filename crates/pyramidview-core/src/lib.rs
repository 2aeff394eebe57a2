//! # PyramidView Core
//!
//! Turns a list of labelled magnitudes into a side-by-side arrangement of
//! square-based pyramids: layout on a shared baseline, pyramid solids with
//! cycling palette colors, label annotations, and the bounding frame used to
//! size the viewport.
//!
//! Everything here is a pure function of its inputs; drawing lives in
//! `pyramidview-renderer`.

pub mod annotation;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod item;
pub mod layout;
pub mod palette;
pub mod solid;
pub mod spatial;

pub use annotation::{annotate, format_scientific, Annotation};
pub use config::ComparisonConfig;
pub use error::{ColorError, LayoutError};
pub use frame::{AxisLimits, AxisRange, DepthLimit, Frame};
pub use geometry::{BBox, Point, Point3};
pub use item::Item;
pub use layout::{compute_placements, side_for_magnitude, Placement};
pub use palette::{NamedColor, Palette};
pub use solid::{build_solid, Face, Solid};
pub use spatial::{verify_non_overlap, FootprintIndex};
