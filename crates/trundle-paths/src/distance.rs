use trundle_core::Point;

/// Manhattan (L1) distance between two points.
///
/// This is the length of any monotone axis-aligned route, and a lower bound
/// on the number of cells a constrained route must enter.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
