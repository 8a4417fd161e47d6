//! Pin snapping.

use super::types::Point;

/// Resolves arbitrary points to the nearest known pin or wire endpoint.
#[derive(Debug, Clone, Copy)]
pub struct PinSnapper {
    /// Manhattan distance a candidate must be strictly under
    tolerance: i32,
}

impl PinSnapper {
    pub fn new(tolerance: i32) -> Self {
        Self { tolerance }
    }

    /// Find the candidate nearest to `point` by Manhattan distance.
    ///
    /// Only candidates strictly under the tolerance qualify. On a tie the
    /// earliest candidate wins, so the result depends only on the order the
    /// candidates are given in.
    pub fn snap<I>(&self, point: Point, candidates: I) -> Option<Point>
    where
        I: IntoIterator<Item = Point>,
    {
        let tolerance = i64::from(self.tolerance);
        let mut nearest: Option<(Point, i64)> = None;

        for candidate in candidates {
            let dist = candidate.manhattan_distance(point);
            if dist >= tolerance {
                continue;
            }
            match nearest {
                Some((_, best)) if dist >= best => {}
                _ => nearest = Some((candidate, dist)),
            }
        }

        nearest.map(|(p, _)| p)
    }
}
