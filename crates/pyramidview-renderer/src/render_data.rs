use serde::{Deserialize, Serialize};

use pyramidview_core::AxisLimits;

use crate::surface::DisplaySurface;

/// A polygon collection for one pyramid: each face as a list of 3D corners.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderCollection {
    pub faces: Vec<Vec<[f64; 3]>>,
    pub face_color: [f32; 4], // RGBA
    pub edge_color: [f32; 4], // RGBA
    /// Palette name of the face color, e.g. "skyblue" or "#6CA0A3".
    pub color_name: String,
}

/// Text anchored at a point in scene coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderText {
    pub position: [f64; 3],
    pub text: String,
    pub color: [f32; 4],
    pub font_size: f64,
}

/// Axis configuration for the 3D view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxesConfig {
    pub limits: AxisLimits,
    pub box_aspect: [f64; 3],
    pub tick_labels_visible: bool,
    /// Titles of the x, y and z axes; empty strings hide them.
    pub axis_titles: [String; 3],
}

impl AxesConfig {
    /// Limits and aspect with tick labels and axis titles suppressed.
    pub fn bare(limits: AxisLimits, box_aspect: [f64; 3]) -> Self {
        Self {
            limits,
            box_aspect,
            tick_labels_visible: false,
            axis_titles: Default::default(),
        }
    }
}

/// Complete scene recorded from a comparison, ready for a backend to show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub title: Option<String>,
    /// Figure width and height in pixels.
    pub canvas_size: [f64; 2],
    pub collections: Vec<RenderCollection>,
    pub texts: Vec<RenderText>,
    pub axes: Option<AxesConfig>,
}

impl Scene {
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            title: None,
            canvas_size: [canvas_width, canvas_height],
            collections: Vec::new(),
            texts: Vec::new(),
            axes: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.texts.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl DisplaySurface for Scene {
    fn add_collection(&mut self, collection: RenderCollection) {
        self.collections.push(collection);
    }

    fn add_text(&mut self, text: RenderText) {
        self.texts.push(text);
    }

    fn set_axes(&mut self, axes: AxesConfig) {
        self.axes = Some(axes);
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }
}
