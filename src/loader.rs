//! GPX file discovery and flattening
//!
//! The loader enumerates `.gpx` files directly inside a directory
//! (non-recursive), parses each one, and flattens the GPX structure of
//! tracks and segments into a flat list of [`Track`]s, one per segment.

use crate::{Result, Track};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Load every GPX file directly inside `dir` into a flat track list
///
/// Files are processed in lexicographic path order so the result is
/// deterministic. Each track segment becomes one [`Track`] with its point
/// order preserved; segments from different files or different tracks are
/// never merged.
///
/// A malformed file aborts the whole load with a parse error. A directory
/// without any `.gpx` files yields an empty list.
pub fn load_directory(dir: &Path) -> Result<Vec<Track>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "gpx"))
        .collect();
    paths.sort();

    let mut tracks = Vec::new();
    for path in &paths {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let gpx = gpx::read(reader)?;

        let segments_before = tracks.len();
        let mut file_points = 0;
        for track in &gpx.tracks {
            for segment in &track.segments {
                file_points += segment.points.len();
                tracks.push(Track::from(segment));
            }
        }

        tracing::info!(
            "loaded {}: {} segment(s), {} point(s)",
            path.display(),
            tracks.len() - segments_before,
            file_points
        );
    }

    tracing::info!(
        "loaded {} track segment(s) from {}",
        tracks.len(),
        dir.display()
    );

    Ok(tracks)
}
