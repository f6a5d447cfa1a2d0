//! Pixel-space bounding boxes and the overlap test shared by every stage.
use serde::{Deserialize, Serialize};

/// Axis-aligned box with inclusive corners in image pixel coordinates.
///
/// Valid boxes satisfy `min_x <= max_x` and `min_y <= max_y`. The absence of a
/// box is always expressed as `Option::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl BoundingBox {
    pub fn new(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// True when both axes span more than a single coordinate.
    pub fn has_area(&self) -> bool {
        self.min_x < self.max_x && self.min_y < self.max_y
    }

    /// Corner-wise intersection. `None` unless the result has area.
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let clipped = BoundingBox {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        };
        clipped.has_area().then_some(clipped)
    }

    /// Truncates an OCR rectangle's top-left and bottom-right corners to pixels.
    pub fn from_ocr(bounds: &bannerscan_ocr::BoundingBox) -> Self {
        let ((x1, y1), (x2, y2)) = bounds.corners();
        Self::new(x1 as i32, y1 as i32, x2 as i32, y2 as i32)
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}), ({}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

/// Strict overlap: boxes that only share an edge do not overlap.
pub fn overlaps(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.max_x > b.min_x && a.min_x < b.max_x && a.max_y > b.min_y && a.min_y < b.max_y
}

/// Running union of points and boxes.
#[derive(Debug, Clone, Default)]
pub struct BoxAccumulator {
    bounds: Option<BoundingBox>,
}

impl BoxAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, x: i32, y: i32) {
        self.add_box(&BoundingBox::new(x, y, x, y));
    }

    pub fn add_box(&mut self, other: &BoundingBox) {
        self.bounds = Some(match self.bounds {
            None => *other,
            Some(current) => BoundingBox {
                min_x: current.min_x.min(other.min_x),
                min_y: current.min_y.min(other.min_y),
                max_x: current.max_x.max(other.max_x),
                max_y: current.max_y.max(other.max_y),
            },
        });
    }

    pub fn finish(self) -> Option<BoundingBox> {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn b(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> BoundingBox {
        BoundingBox::new(min_x, min_y, max_x, max_y)
    }

    #[test]
    fn test_partial_interior_overlap() {
        assert!(overlaps(&b(0, 0, 10, 10), &b(5, 5, 15, 15)));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        assert!(!overlaps(&b(0, 0, 10, 10), &b(10, 0, 20, 10)));
        assert!(!overlaps(&b(0, 0, 10, 10), &b(0, 10, 10, 20)));
    }

    #[test]
    fn test_containment_overlaps() {
        assert!(overlaps(&b(0, 0, 100, 100), &b(40, 40, 60, 60)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let boxes = [
            b(0, 0, 10, 10),
            b(5, 5, 15, 15),
            b(10, 0, 20, 10),
            b(-5, -5, 0, 0),
            b(3, 3, 4, 4),
            b(0, 20, 30, 25),
        ];
        for a in &boxes {
            for other in &boxes {
                assert_eq!(overlaps(a, other), overlaps(other, a), "{a} vs {other}");
            }
        }
    }

    #[test]
    fn test_intersection() {
        assert_eq!(
            b(0, 0, 10, 10).intersection(&b(5, 5, 15, 15)),
            Some(b(5, 5, 10, 10))
        );
        assert_eq!(b(0, 0, 10, 10).intersection(&b(10, 0, 20, 10)), None);
        assert_eq!(b(0, 0, 10, 10).intersection(&b(30, 30, 40, 40)), None);
    }

    #[test]
    fn test_accumulator() {
        let mut acc = BoxAccumulator::new();
        acc.add_point(7, 3);
        acc.add_point(2, 9);
        acc.add_box(&b(4, 1, 5, 2));
        assert_eq!(acc.finish(), Some(b(2, 1, 7, 9)));
        assert_eq!(BoxAccumulator::new().finish(), None);
    }

    #[test]
    fn test_from_ocr_truncates_corners() {
        let ocr = bannerscan_ocr::BoundingBox {
            x: 10.7,
            y: 4.2,
            width: 20.5,
            height: 8.9,
        };
        assert_eq!(BoundingBox::from_ocr(&ocr), b(10, 4, 31, 13));
    }
}
