//! Frame sizing: the bounding viewport around a laid-out comparison.

use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::layout::Placement;

/// Vertical room above the tallest apex, as a multiple of its height.
pub const DEFAULT_HEADROOM: f64 = 1.4;

/// How far the depth (y) axis extends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepthLimit {
    /// The last item's side. Earlier, wider footprints can poke past the
    /// axis limit; this matches the historical output.
    #[default]
    LastSide,
    /// The widest side across all items.
    MaxSide,
}

/// Lower and upper bound of one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Axis limits for the x (layout), y (depth) and z (height) axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub x: AxisRange,
    pub y: AxisRange,
    pub z: AxisRange,
}

/// Running totals and maxima across all placements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Right edge of the last pyramid; trailing spacing is not included.
    pub total_width: f64,
    pub max_base_side: f64,
    pub max_height: f64,
    /// Upper bound of the depth axis, chosen by the [`DepthLimit`].
    pub depth_extent: f64,
    pub headroom: f64,
}

impl Frame {
    pub fn from_placements(
        placements: &[Placement],
        depth_limit: DepthLimit,
        headroom: f64,
    ) -> Result<Self, LayoutError> {
        let last = placements.last().ok_or(LayoutError::EmptyInput)?;
        if !headroom.is_finite() || headroom < 1.0 {
            return Err(LayoutError::InvalidHeadroom(headroom));
        }

        let max_base_side = placements.iter().map(|p| p.side).fold(0.0, f64::max);
        let max_height = placements.iter().map(|p| p.height).fold(0.0, f64::max);
        let depth_extent = match depth_limit {
            DepthLimit::LastSide => last.side,
            DepthLimit::MaxSide => max_base_side,
        };

        let frame = Self {
            total_width: last.right_edge(),
            max_base_side,
            max_height,
            depth_extent,
            headroom,
        };
        if frame.clips_depth() {
            log::warn!(
                "depth axis ends at {:.4} but the widest footprint is {:.4}; \
                 use the max_side depth limit to fit every pyramid",
                frame.depth_extent,
                frame.max_base_side
            );
        }
        Ok(frame)
    }

    /// True when some footprint extends past the depth axis limit.
    pub fn clips_depth(&self) -> bool {
        self.depth_extent < self.max_base_side
    }

    pub fn axis_limits(&self) -> AxisLimits {
        AxisLimits {
            x: AxisRange::new(0.0, self.total_width),
            y: AxisRange::new(0.0, self.depth_extent),
            z: AxisRange::new(0.0, self.max_height * self.headroom),
        }
    }

    /// Box aspect proportional to the axis spans, so one unit is the same
    /// length along every axis.
    pub fn box_aspect(&self) -> [f64; 3] {
        let limits = self.axis_limits();
        [limits.x.span(), limits.y.span(), limits.z.span()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::layout::compute_placements;

    fn frame_for(pairs: &[(&str, f64)], depth_limit: DepthLimit) -> Frame {
        let items: Vec<Item> = pairs.iter().map(|&(l, m)| Item::new(l, m)).collect();
        let placements = compute_placements(&items, 10.0).unwrap();
        Frame::from_placements(&placements, depth_limit, DEFAULT_HEADROOM).unwrap()
    }

    #[test]
    fn test_two_item_frame() {
        let frame = frame_for(&[("A", 1.0), ("B", 8.0)], DepthLimit::LastSide);
        assert!((frame.total_width - 14.32675).abs() < 1e-4);
        assert!((frame.max_height - 24f64.cbrt()).abs() < 1e-10);
        assert_eq!(frame.max_height, frame.max_base_side);

        let limits = frame.axis_limits();
        assert_eq!(limits.x.min, 0.0);
        assert!((limits.x.max - frame.total_width).abs() < 1e-12);
        assert!((limits.z.max - frame.max_height * 1.4).abs() < 1e-12);
        assert!(!frame.clips_depth());
    }

    #[test]
    fn test_depth_uses_last_side_by_default() {
        let frame = frame_for(&[("big", 1000.0), ("small", 1.0)], DepthLimit::LastSide);
        assert!((frame.depth_extent - 3f64.cbrt()).abs() < 1e-10);
        assert!(frame.clips_depth());
    }

    #[test]
    fn test_depth_max_side_fits_everything() {
        let frame = frame_for(&[("big", 1000.0), ("small", 1.0)], DepthLimit::MaxSide);
        assert!((frame.depth_extent - 3000f64.cbrt()).abs() < 1e-10);
        assert!(!frame.clips_depth());
    }

    #[test]
    fn test_box_aspect_matches_spans() {
        let frame = frame_for(&[("A", 1.0), ("B", 8.0)], DepthLimit::LastSide);
        let aspect = frame.box_aspect();
        assert!((aspect[0] - frame.total_width).abs() < 1e-12);
        assert!((aspect[1] - frame.depth_extent).abs() < 1e-12);
        assert!((aspect[2] - frame.max_height * 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_empty_and_bad_headroom() {
        assert_eq!(
            Frame::from_placements(&[], DepthLimit::LastSide, 1.4),
            Err(LayoutError::EmptyInput)
        );
        let placements = compute_placements(&[Item::new("A", 1.0)], 10.0).unwrap();
        assert_eq!(
            Frame::from_placements(&placements, DepthLimit::LastSide, 0.5),
            Err(LayoutError::InvalidHeadroom(0.5))
        );
    }
}
