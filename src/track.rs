//! Track storage
//!
//! A [`Track`] holds the ordered point sequence of exactly one GPX track
//! segment. Segments are never merged: two segments of the same logical
//! track become two separate `Track` values.

use geo::{Coord, Rect};

/// An ordered sequence of (longitude, latitude) points in decimal degrees
///
/// Stored as [`geo::Coord`] with `x` = longitude and `y` = latitude. Point
/// order is meaningful (path traversal order) and immutable after
/// construction. Coordinates are taken as-is; no range validation is
/// performed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Track {
    points: Vec<Coord<f64>>,
}

impl Track {
    /// Create a track from a point sequence
    pub fn new(points: Vec<Coord<f64>>) -> Self {
        Self { points }
    }

    /// The points of this track, in traversal order
    #[inline]
    pub fn points(&self) -> &[Coord<f64>] {
        &self.points
    }

    /// Number of points in this track
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether this track has no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of this track in coordinate space
    ///
    /// Returns `None` when the track has no points.
    pub fn bounding_box(&self) -> Option<Rect<f64>> {
        if self.points.is_empty() {
            return None;
        }

        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        Some(Rect::new(
            Coord { x: min_x, y: min_y },
            Coord { x: max_x, y: max_y },
        ))
    }
}

impl From<&gpx::TrackSegment> for Track {
    fn from(segment: &gpx::TrackSegment) -> Self {
        Self {
            points: segment
                .points
                .iter()
                .map(|waypoint| Coord {
                    x: waypoint.point().x(),
                    y: waypoint.point().y(),
                })
                .collect(),
        }
    }
}
