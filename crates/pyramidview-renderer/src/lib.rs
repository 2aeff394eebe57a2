//! # PyramidView Renderer
//!
//! Draws a laid-out comparison onto a [`DisplaySurface`]. The recording
//! [`Scene`] surface captures polygon collections, anchored text, axis limits
//! and the title; it serializes to JSON for headless use and renders to SVG
//! through an orthographic camera.

pub mod comparison;
pub mod render_data;
pub mod surface;
pub mod svg;
pub mod viewport;

pub use comparison::{compare, plan_comparison, render_comparison, ComparisonPlan, DrawStyle};
pub use render_data::{AxesConfig, RenderCollection, RenderText, Scene};
pub use surface::DisplaySurface;
pub use svg::{render_svg, render_svg_with};
pub use viewport::{Camera, Viewport};
