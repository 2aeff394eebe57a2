use thiserror::Error;

/// Errors raised while validating input or configuration for a comparison.
///
/// Every variant is raised before anything is drawn, so a failed call never
/// leaves a partially drawn surface behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("nothing to compare: the item list is empty")]
    EmptyInput,

    #[error("item {index} ('{label}') has magnitude {magnitude}; magnitudes must be positive and finite")]
    InvalidMagnitude {
        index: usize,
        label: String,
        magnitude: f64,
    },

    #[error("spacing must be finite and non-negative, got {0}")]
    InvalidSpacing(f64),

    #[error("headroom factor must be finite and at least 1.0, got {0}")]
    InvalidHeadroom(f64),

    #[error("the laid-out comparison is wider than an f64 can represent")]
    ExtentOverflow,

    #[error("invalid setting '{field}': {message}")]
    InvalidConfig { field: &'static str, message: String },
}

/// Errors raised while parsing palette colors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("unknown color name '{0}'")]
    UnknownName(String),

    #[error("invalid hex color '{0}', expected #RRGGBB")]
    InvalidHex(String),

    #[error("a palette needs at least one color")]
    EmptyPalette,
}
