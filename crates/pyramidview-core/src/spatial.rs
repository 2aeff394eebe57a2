use rstar::{RTree, RTreeObject, AABB};

use crate::geometry::{BBox, Point};
use crate::layout::Placement;

/// An entry in the R-tree, referencing a placement by its input position.
#[derive(Debug, Clone)]
pub struct FootprintEntry {
    pub placement_index: usize,
    pub footprint: BBox,
}

impl RTreeObject for FootprintEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.footprint.min.x, self.footprint.min.y],
            [self.footprint.max.x, self.footprint.max.y],
        )
    }
}

/// Spatial index over pyramid footprints on the floor plane.
pub struct FootprintIndex {
    tree: RTree<FootprintEntry>,
}

impl FootprintIndex {
    pub fn build(placements: &[Placement]) -> Self {
        let entries = placements
            .iter()
            .enumerate()
            .map(|(placement_index, p)| FootprintEntry {
                placement_index,
                footprint: p.footprint(),
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Footprints containing the floor point (edges included).
    pub fn query_point(&self, point: &Point) -> Vec<&FootprintEntry> {
        self.tree
            .locate_in_envelope_intersecting(&AABB::from_point([point.x, point.y]))
            .collect()
    }

    /// Footprints touching or overlapping `region`.
    pub fn query_region(&self, region: &BBox) -> Vec<&FootprintEntry> {
        let envelope = AABB::from_corners(
            [region.min.x, region.min.y],
            [region.max.x, region.max.y],
        );
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .collect()
    }

    /// Pairs `(i, j)` with `i < j` whose footprints share positive area.
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs: Vec<(usize, usize)> = self
            .tree
            .iter()
            .flat_map(|entry| {
                self.query_region(&entry.footprint)
                    .into_iter()
                    .filter(move |other| {
                        other.placement_index > entry.placement_index
                            && entry.footprint.overlaps(&other.footprint)
                    })
                    .map(move |other| (entry.placement_index, other.placement_index))
            })
            .collect();
        pairs.sort_unstable();
        pairs
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

/// True when no two footprints share positive area.
pub fn verify_non_overlap(placements: &[Placement]) -> bool {
    let pairs = FootprintIndex::build(placements).overlapping_pairs();
    for (i, j) in &pairs {
        log::error!(
            "footprints of '{}' and '{}' overlap",
            placements[*i].item.label,
            placements[*j].item.label
        );
    }
    pairs.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::layout::compute_placements;

    fn placement(label: &str, x_offset: f64, side: f64) -> Placement {
        Placement {
            item: Item::new(label, side.powi(3) / 3.0),
            side,
            height: side,
            x_offset,
        }
    }

    #[test]
    fn test_footprint_query() {
        let placements = compute_placements(
            &[Item::new("A", 9.0), Item::new("B", 9.0)],
            10.0,
        )
        .unwrap();
        let index = FootprintIndex::build(&placements);
        assert_eq!(index.len(), 2);

        let hits = index.query_point(&Point::new(1.5, 1.5));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].placement_index, 0);

        let hits = index.query_point(&Point::new(14.0, 1.0));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].placement_index, 1);

        assert!(index.query_point(&Point::new(8.0, 1.0)).is_empty());
    }

    #[test]
    fn test_query_point_includes_edges() {
        let placements = vec![placement("a", 0.0, 2.0), placement("b", 2.0, 1.0)];
        let index = FootprintIndex::build(&placements);
        let mut hits: Vec<usize> = index
            .query_point(&Point::new(2.0, 0.5))
            .iter()
            .map(|e| e.placement_index)
            .collect();
        hits.sort_unstable();
        assert_eq!(hits, vec![0, 1]);
        assert_eq!(index.query_point(&Point::new(2.5, 1.5)).len(), 0);
    }

    #[test]
    fn test_layout_output_never_overlaps() {
        let items: Vec<Item> = [1.0, 1e6, 3.0, 42.0, 1e-3]
            .iter()
            .enumerate()
            .map(|(i, &m)| Item::new(&format!("item{i}"), m))
            .collect();
        let placements = compute_placements(&items, 0.0).unwrap();
        assert!(FootprintIndex::build(&placements).overlapping_pairs().is_empty());
        assert!(verify_non_overlap(&placements));
    }

    #[test]
    fn test_detects_overlap() {
        let placements = vec![
            placement("a", 0.0, 4.0),
            placement("b", 2.0, 1.0),
            placement("c", 10.0, 1.0),
            placement("d", 10.5, 1.0),
        ];
        let pairs = FootprintIndex::build(&placements).overlapping_pairs();
        assert_eq!(pairs, vec![(0, 1), (2, 3)]);
        assert!(!verify_non_overlap(&placements));
    }
}
