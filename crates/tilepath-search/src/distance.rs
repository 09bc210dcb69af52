use tilepath_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Admissible and consistent for four-directional movement with unit costs.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.z - b.z).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric() {
        let a = Point::new(2, -3);
        let b = Point::new(-1, 4);
        assert_eq!(manhattan(a, b), 10);
        assert_eq!(manhattan(b, a), 10);
        assert_eq!(manhattan(a, a), 0);
    }
}
