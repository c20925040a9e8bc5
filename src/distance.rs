//! Great-circle distance accumulation
//!
//! Path lengths are computed with the haversine formula on a sphere of
//! radius 6371 km. The sphere approximation is accurate to roughly 0.3%
//! against an ellipsoid model.

use crate::Track;
use geo::Coord;

/// Earth's mean radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two (longitude, latitude) pairs, in kilometers
///
/// Coordinates are decimal degrees with `x` = longitude and `y` = latitude.
/// Identical points yield exactly 0. Out-of-range coordinates are not
/// rejected; they produce a numeric result like any other input.
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat1 = a.y.to_radians();
    let lat2 = b.y.to_radians();
    let delta_lat = (b.y - a.y).to_radians();
    let delta_lon = (b.x - a.x).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Total path length across all tracks, in kilometers
///
/// Sums the distance between each consecutive pair of points within every
/// track. The gap between the last point of one track and the first point
/// of the next is not counted. A track with fewer than two points
/// contributes 0.
pub fn total_distance_km(tracks: &[Track]) -> f64 {
    tracks
        .iter()
        .map(|track| {
            track
                .points()
                .windows(2)
                .map(|pair| haversine_km(pair[0], pair[1]))
                .sum::<f64>()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_identical_points_is_zero() {
        let p = Coord { x: -0.1278, y: 51.5074 };
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_haversine_symmetry() {
        let p1 = Coord { x: -0.1278, y: 51.5074 };
        let p2 = Coord { x: 2.3522, y: 48.8566 };
        let d12 = haversine_km(p1, p2);
        let d21 = haversine_km(p2, p1);
        assert!((d12 - d21).abs() < f64::EPSILON);
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        // One degree of latitude along a meridian is R * pi / 180.
        let p1 = Coord { x: 0.0, y: 0.0 };
        let p2 = Coord { x: 0.0, y: 1.0 };

        let distance = haversine_km(p1, p2);
        let expected = EARTH_RADIUS_KM * std::f64::consts::PI / 180.0;
        assert!((distance - expected).abs() / expected < 0.005);
        assert!((distance - 111.19).abs() < 0.5);
    }

    #[test]
    fn test_short_track_contributes_zero() {
        let empty = Track::default();
        let single = Track::new(vec![Coord { x: -0.1278, y: 51.5074 }]);

        assert_eq!(total_distance_km(&[empty]), 0.0);
        assert_eq!(total_distance_km(&[single]), 0.0);
    }

    #[test]
    fn test_empty_collection_is_zero() {
        assert_eq!(total_distance_km(&[]), 0.0);
    }

    #[test]
    fn test_total_is_invariant_under_reversal() {
        let points = vec![
            Coord { x: -0.1278, y: 51.5074 },
            Coord { x: -0.1200, y: 51.5100 },
            Coord { x: -0.1100, y: 51.5150 },
            Coord { x: -0.1000, y: 51.5300 },
        ];
        let mut reversed = points.clone();
        reversed.reverse();

        let forward = total_distance_km(&[Track::new(points)]);
        let backward = total_distance_km(&[Track::new(reversed)]);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_tracks_are_summed_independently() {
        // The jump between two tracks must not be counted, so splitting a
        // track in two drops exactly the distance of the removed pairing.
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 0.0, y: 1.0 };
        let c = Coord { x: 1.0, y: 1.0 };

        let joined = total_distance_km(&[Track::new(vec![a, b, c])]);
        let split = total_distance_km(&[Track::new(vec![a, b]), Track::new(vec![c])]);

        assert!((joined - split - haversine_km(b, c)).abs() < 1e-9);
    }
}
