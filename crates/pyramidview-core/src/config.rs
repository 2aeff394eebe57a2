use serde::{Deserialize, Serialize};

use crate::annotation::DEFAULT_LABEL_LIFT;
use crate::error::LayoutError;
use crate::frame::{DepthLimit, DEFAULT_HEADROOM};
use crate::layout::DEFAULT_SPACING;
use crate::palette::{NamedColor, Palette};

/// Settings for one comparison. Every field has a default, so a partial JSON
/// object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonConfig {
    /// Gap between neighbouring pyramids along the layout axis.
    pub spacing: f64,
    /// Face colors, assigned by input position and cycled.
    pub palette: Palette,
    pub depth_limit: DepthLimit,
    /// Height axis limit as a multiple of the tallest pyramid.
    pub headroom: f64,
    pub title: String,
    pub face_opacity: f32,
    pub edge_color: NamedColor,
    pub label_color: NamedColor,
    pub label_font_size: f64,
    /// Label offset above the apex, as a fraction of pyramid height.
    pub label_lift: f64,
    /// Figure width and height in inches.
    pub figure_size: [f64; 2],
    pub dpi: f64,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            spacing: DEFAULT_SPACING,
            palette: Palette::default(),
            depth_limit: DepthLimit::LastSide,
            headroom: DEFAULT_HEADROOM,
            title: "Model Size Comparison".to_string(),
            face_opacity: 0.8,
            edge_color: NamedColor::black(),
            label_color: NamedColor::black(),
            label_font_size: 8.0,
            label_lift: DEFAULT_LABEL_LIFT,
            figure_size: [10.0, 6.0],
            dpi: 100.0,
        }
    }
}

impl ComparisonConfig {
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_depth_limit(mut self, depth_limit: DepthLimit) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Figure size in pixels.
    pub fn canvas_size(&self) -> (f64, f64) {
        (self.figure_size[0] * self.dpi, self.figure_size[1] * self.dpi)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(LayoutError::InvalidSpacing(self.spacing));
        }
        if !self.headroom.is_finite() || self.headroom < 1.0 {
            return Err(LayoutError::InvalidHeadroom(self.headroom));
        }
        if !(0.0..=1.0).contains(&self.face_opacity) {
            return Err(invalid("face_opacity", "must be between 0 and 1"));
        }
        if !self.label_font_size.is_finite() || self.label_font_size <= 0.0 {
            return Err(invalid("label_font_size", "must be positive"));
        }
        if !self.label_lift.is_finite() || self.label_lift < 0.0 {
            return Err(invalid("label_lift", "must be non-negative"));
        }
        if self.figure_size.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(invalid("figure_size", "width and height must be positive"));
        }
        if !self.dpi.is_finite() || self.dpi <= 0.0 {
            return Err(invalid("dpi", "must be positive"));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, message: &str) -> LayoutError {
    LayoutError::InvalidConfig {
        field,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ComparisonConfig::default();
        assert_eq!(config.spacing, 10.0);
        assert_eq!(config.headroom, 1.4);
        assert_eq!(config.depth_limit, DepthLimit::LastSide);
        assert_eq!(config.palette.len(), 5);
        assert_eq!(config.canvas_size(), (1000.0, 600.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json() {
        let config: ComparisonConfig = serde_json::from_str(
            r##"{ "spacing": 2.5, "depth_limit": "max_side", "palette": ["gold", "#112233"] }"##,
        )
        .unwrap();
        assert_eq!(config.spacing, 2.5);
        assert_eq!(config.depth_limit, DepthLimit::MaxSide);
        assert_eq!(config.palette.color_for(1).to_hex(), "#112233");
        assert_eq!(config.title, "Model Size Comparison");
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = ComparisonConfig::default().with_spacing(-1.0);
        assert_eq!(config.validate(), Err(LayoutError::InvalidSpacing(-1.0)));

        let mut config = ComparisonConfig::default();
        config.face_opacity = 1.5;
        assert!(matches!(
            config.validate(),
            Err(LayoutError::InvalidConfig { field: "face_opacity", .. })
        ));

        let mut config = ComparisonConfig::default();
        config.headroom = 0.9;
        assert_eq!(config.validate(), Err(LayoutError::InvalidHeadroom(0.9)));
    }
}
