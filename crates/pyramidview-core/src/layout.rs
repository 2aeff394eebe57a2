//! Layout engine: turns an ordered item list into non-overlapping placements.
//!
//! Each item becomes a square-based pyramid whose height equals its base
//! side. With `volume = side^2 * height / 3` and `height = side`, the side
//! length is `cbrt(3 * volume)`. Pyramids sit on a shared baseline and are
//! laid out left to right along x, separated by a fixed spacing.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::geometry::{BBox, Point};
use crate::item::Item;

/// Gap between neighbouring pyramids when nothing else is configured.
pub const DEFAULT_SPACING: f64 = 10.0;

/// Resolved position and scale of one item in the shared layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub item: Item,
    /// Base side length.
    pub side: f64,
    /// Apex height; always equal to `side`.
    pub height: f64,
    /// Left edge of the base along the layout axis.
    pub x_offset: f64,
}

impl Placement {
    /// The base square on the floor plane: `[x_offset, x_offset + side] x [0, side]`.
    pub fn footprint(&self) -> BBox {
        BBox::new(
            Point::new(self.x_offset, 0.0),
            Point::new(self.x_offset + self.side, self.side),
        )
    }

    /// Right edge of the base along the layout axis.
    pub fn right_edge(&self) -> f64 {
        self.x_offset + self.side
    }

    /// Pyramid volume recovered from the geometry.
    pub fn volume(&self) -> f64 {
        self.side * self.side / 3.0 * self.height
    }
}

/// Side length of a pyramid with equal side and height holding `magnitude`.
///
/// Finite for every finite magnitude: the factor of three is applied after the
/// cube root, so `3 * magnitude` never overflows.
pub fn side_for_magnitude(magnitude: f64) -> f64 {
    3f64.cbrt() * magnitude.cbrt()
}

/// Check the spacing and every magnitude without computing any geometry.
pub fn validate_items(items: &[Item], spacing: f64) -> Result<(), LayoutError> {
    if !spacing.is_finite() || spacing < 0.0 {
        return Err(LayoutError::InvalidSpacing(spacing));
    }
    if items.is_empty() {
        return Err(LayoutError::EmptyInput);
    }
    if let Some((index, item)) = items
        .iter()
        .enumerate()
        .find(|(_, item)| !item.has_valid_magnitude())
    {
        return Err(LayoutError::InvalidMagnitude {
            index,
            label: item.label.clone(),
            magnitude: item.magnitude,
        });
    }
    Ok(())
}

/// Lay out `items` left to right, in input order.
///
/// Item `i` starts where the cursor stands; the cursor then advances by
/// `side_i + spacing`. Footprints never overlap for any `spacing >= 0`.
pub fn compute_placements(items: &[Item], spacing: f64) -> Result<Vec<Placement>, LayoutError> {
    validate_items(items, spacing)?;

    let mut cursor: f64 = 0.0;
    let placements: Vec<Placement> = items
        .iter()
        .map(|item| {
            let side = side_for_magnitude(item.magnitude);
            let placement = Placement {
                item: item.clone(),
                side,
                height: side,
                x_offset: cursor,
            };
            log::debug!(
                "placed '{}' at x={:.4} (side {:.4})",
                item.label,
                cursor,
                side
            );
            cursor += side + spacing;
            placement
        })
        .collect();

    if let Some(last) = placements.last() {
        if !last.right_edge().is_finite() {
            return Err(LayoutError::ExtentOverflow);
        }
    }
    Ok(placements)
}
