use serde::{Deserialize, Serialize};

use crate::geometry::Point3;
use crate::layout::Placement;
use crate::palette::{NamedColor, Palette};

/// Index of the apex in [`Solid::vertices`].
pub const APEX: usize = 4;

/// A face of a pyramid, as indices into [`Solid::vertices`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Face {
    Triangle([usize; 3]),
    Quad([usize; 4]),
}

impl Face {
    pub fn indices(&self) -> &[usize] {
        match self {
            Face::Triangle(idx) => idx,
            Face::Quad(idx) => idx,
        }
    }

    pub fn is_triangle(&self) -> bool {
        matches!(self, Face::Triangle(_))
    }
}

/// Lateral faces in winding order (base edges 0-1, 1-2, 2-3, 3-0), then the floor.
const FACES: [Face; 5] = [
    Face::Triangle([0, 1, APEX]),
    Face::Triangle([1, 2, APEX]),
    Face::Triangle([2, 3, APEX]),
    Face::Triangle([3, 0, APEX]),
    Face::Quad([0, 1, 2, 3]),
];

/// A square-based pyramid ready to be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solid {
    /// Four base corners counter-clockwise from `(x_offset, 0, 0)`, then the apex.
    pub vertices: [Point3; 5],
    pub faces: [Face; 5],
    pub color: NamedColor,
}

impl Solid {
    pub fn apex(&self) -> Point3 {
        self.vertices[APEX]
    }

    pub fn base(&self) -> &[Point3] {
        &self.vertices[..APEX]
    }

    pub fn base_centroid(&self) -> Point3 {
        let b = self.base();
        Point3::new(
            (b[0].x + b[1].x + b[2].x + b[3].x) / 4.0,
            (b[0].y + b[1].y + b[2].y + b[3].y) / 4.0,
            0.0,
        )
    }

    /// Faces resolved to their corner coordinates.
    pub fn face_points(&self) -> Vec<Vec<Point3>> {
        self.faces
            .iter()
            .map(|face| face.indices().iter().map(|&i| self.vertices[i]).collect())
            .collect()
    }
}

/// Build the pyramid for `placement`, colored by its position in the input.
pub fn build_solid(placement: &Placement, color_index: usize, palette: &Palette) -> Solid {
    let x = placement.x_offset;
    let s = placement.side;
    Solid {
        vertices: [
            Point3::new(x, 0.0, 0.0),
            Point3::new(x + s, 0.0, 0.0),
            Point3::new(x + s, s, 0.0),
            Point3::new(x, s, 0.0),
            Point3::new(x + s / 2.0, s / 2.0, placement.height),
        ],
        faces: FACES,
        color: palette.color_for(color_index).clone(),
    }
}
