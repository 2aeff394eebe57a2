use serde::{Deserialize, Serialize};

/// One entity to compare: a label and the scalar magnitude it is sized by.
///
/// Items are read-only input. Their position in the input sequence decides
/// both the left-to-right placement and the palette color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub label: String,
    pub magnitude: f64,
}

impl Item {
    pub fn new(label: &str, magnitude: f64) -> Self {
        Self {
            label: label.to_string(),
            magnitude,
        }
    }

    /// Finite and strictly positive.
    pub fn has_valid_magnitude(&self) -> bool {
        self.magnitude.is_finite() && self.magnitude > 0.0
    }
}

impl<S: Into<String>> From<(S, f64)> for Item {
    fn from((label, magnitude): (S, f64)) -> Self {
        Self {
            label: label.into(),
            magnitude,
        }
    }
}
