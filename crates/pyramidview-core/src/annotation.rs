use serde::{Deserialize, Serialize};

use crate::geometry::Point3;
use crate::layout::Placement;

/// Fraction of a pyramid's height the label floats above its apex.
pub const DEFAULT_LABEL_LIFT: f64 = 0.1;

/// Text placed above a pyramid: its label and magnitude, centered
/// horizontally on `anchor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub text: String,
    pub anchor: Point3,
}

impl Annotation {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Label for `placement`, anchored over the apex at `lift * height`.
pub fn annotate(placement: &Placement, lift: f64) -> Annotation {
    let apex = Point3::new(
        placement.x_offset + placement.side / 2.0,
        placement.side / 2.0,
        placement.height,
    );
    Annotation {
        text: format!(
            "{}\n({})",
            placement.item.label,
            format_scientific(placement.item.magnitude, 1)
        ),
        anchor: apex.translate(0.0, 0.0, placement.height * lift),
    }
}

/// Scientific notation with a signed, at-least-two-digit exponent: `1.5e+09`.
pub fn format_scientific(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    match raw.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
            }
            Err(_) => raw,
        },
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;
    use crate::layout::compute_placements;

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(1.0, 1), "1.0e+00");
        assert_eq!(format_scientific(8.0, 1), "8.0e+00");
        assert_eq!(format_scientific(1.5e9, 1), "1.5e+09");
        assert_eq!(format_scientific(1.76e11, 1), "1.8e+11");
        assert_eq!(format_scientific(0.05, 1), "5.0e-02");
        assert_eq!(format_scientific(2.5e123, 2), "2.50e+123");
    }

    #[test]
    fn test_annotation_text_and_anchor() {
        let placements = compute_placements(&[Item::new("GPT-2", 1.5e9)], 10.0).unwrap();
        let p = &placements[0];
        let ann = annotate(p, DEFAULT_LABEL_LIFT);
        assert_eq!(ann.text, "GPT-2\n(1.5e+09)");
        assert_eq!(ann.lines().collect::<Vec<_>>(), vec!["GPT-2", "(1.5e+09)"]);
        assert!((ann.anchor.x - p.side / 2.0).abs() < 1e-6);
        assert!((ann.anchor.y - p.side / 2.0).abs() < 1e-6);
        assert!((ann.anchor.z - p.height * 1.1).abs() < 1e-6);
    }
}
