//! Property tests for the layout engine.
//!
//! Random item lists are laid out and the geometric invariants are checked
//! on every result: side/height law, input order, non-overlap, frame maxima
//! and color cycling.

use proptest::prelude::*;
use pyramidview_core::{
    build_solid, compute_placements, DepthLimit, FootprintIndex, Frame, Item, LayoutError, Palette,
};

/// Magnitudes spanning many orders of magnitude, always positive.
fn magnitude() -> impl Strategy<Value = f64> {
    (-6i32..12i32, 1u32..1000u32).prop_map(|(exp, mantissa)| mantissa as f64 * 10f64.powi(exp))
}

fn item_list() -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(magnitude(), 1..24).prop_map(|mags| {
        mags.into_iter()
            .enumerate()
            .map(|(i, m)| Item::new(&format!("item-{i}"), m))
            .collect()
    })
}

fn spacing() -> impl Strategy<Value = f64> {
    (0u32..200u32).prop_map(|s| s as f64 * 0.25)
}

proptest! {
    #[test]
    fn side_is_cube_root_of_three_m(items in item_list(), gap in spacing()) {
        let placements = compute_placements(&items, gap).unwrap();
        for p in &placements {
            let expected = (3.0 * p.item.magnitude).cbrt();
            prop_assert!((p.side - expected).abs() <= 1e-12 * expected.max(1.0));
            prop_assert_eq!(p.height, p.side);
        }
    }

    #[test]
    fn order_matches_input(items in item_list(), gap in spacing()) {
        let placements = compute_placements(&items, gap).unwrap();
        prop_assert_eq!(placements.len(), items.len());
        for (p, item) in placements.iter().zip(&items) {
            prop_assert_eq!(&p.item, item);
        }
    }

    #[test]
    fn successive_offsets_respect_spacing(items in item_list(), gap in spacing()) {
        let placements = compute_placements(&items, gap).unwrap();
        prop_assert_eq!(placements[0].x_offset, 0.0);
        for pair in placements.windows(2) {
            let required = pair[0].x_offset + pair[0].side + gap;
            prop_assert!(pair[1].x_offset >= required - 1e-9 * required.max(1.0));
        }
    }

    #[test]
    fn footprints_never_overlap(items in item_list(), gap in spacing()) {
        let placements = compute_placements(&items, gap).unwrap();
        prop_assert!(FootprintIndex::build(&placements).overlapping_pairs().is_empty());
    }

    #[test]
    fn frame_maxima(items in item_list(), gap in spacing()) {
        let placements = compute_placements(&items, gap).unwrap();
        let frame = Frame::from_placements(&placements, DepthLimit::MaxSide, 1.4).unwrap();
        let max_side = placements.iter().map(|p| p.side).fold(0.0, f64::max);
        prop_assert_eq!(frame.max_height, max_side);
        prop_assert_eq!(frame.max_base_side, max_side);
        let last = placements.last().unwrap();
        prop_assert_eq!(frame.total_width, last.x_offset + last.side);
    }

    #[test]
    fn colors_cycle_with_palette_length(index in 0usize..500) {
        let palette = Palette::default();
        let placements = compute_placements(&[Item::new("x", 1.0)], 10.0).unwrap();
        let a = build_solid(&placements[0], index, &palette);
        let b = build_solid(&placements[0], index + palette.len(), &palette);
        prop_assert_eq!(a.color, b.color);
    }

    #[test]
    fn apex_sits_over_base_centroid(items in item_list(), gap in spacing()) {
        let placements = compute_placements(&items, gap).unwrap();
        let palette = Palette::default();
        for (i, p) in placements.iter().enumerate() {
            let solid = build_solid(p, i, &palette);
            let c = solid.base_centroid();
            prop_assert!((solid.apex().x - c.x).abs() <= 1e-9 * c.x.abs().max(1.0));
            prop_assert!((solid.apex().y - c.y).abs() <= 1e-9 * c.y.abs().max(1.0));
            prop_assert_eq!(solid.apex().z, p.height);
        }
    }

    #[test]
    fn non_positive_magnitude_is_rejected(
        items in item_list(),
        bad in prop_oneof![Just(0.0), Just(-1.0), (1u32..1000u32).prop_map(|v| -(v as f64))],
        slot in 0usize..24,
    ) {
        let mut items = items;
        let index = slot % items.len();
        items[index].magnitude = bad;
        let err = compute_placements(&items, 10.0).unwrap_err();
        let is_invalid_magnitude = matches!(err, LayoutError::InvalidMagnitude { .. });
        prop_assert!(is_invalid_magnitude);
    }
}
