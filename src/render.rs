//! Track rendering to a raster canvas
//!
//! Renders every track as a black polyline on a white canvas, with the
//! viewport set to exactly the combined bounding box of all points (no
//! padding, no axes or other decorations). Rendering is headless: the
//! output is a PNG file, there is no window and no ambient graphics state.

use crate::{Error, Result, Track};
use geo::{Coord, Rect};
use plotters::prelude::*;
use std::path::Path;

/// Rendering configuration
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Stroke width of track lines in pixels
    pub line_width: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 1024,
            line_width: 2,
        }
    }
}

/// Combined bounding box of all points across all tracks
///
/// Returns `None` when no track has any point.
fn combined_bounding_box(tracks: &[Track]) -> Option<Rect<f64>> {
    tracks
        .iter()
        .filter_map(Track::bounding_box)
        .reduce(|merged, bbox| {
            Rect::new(
                Coord {
                    x: merged.min().x.min(bbox.min().x),
                    y: merged.min().y.min(bbox.min().y),
                },
                Coord {
                    x: merged.max().x.max(bbox.max().x),
                    y: merged.max().y.max(bbox.max().y),
                },
            )
        })
}

/// Render all tracks as black line segments into a PNG file
///
/// The chart area covers exactly the bounding box of all points, so tracks
/// touching the box edge are drawn flush to the canvas border. A track with
/// fewer than two points draws nothing. Fails with [`Error::NoPoints`] when
/// the flattened point set is empty.
pub fn render_png(tracks: &[Track], options: &RenderOptions, path: &Path) -> Result<()> {
    let bbox = combined_bounding_box(tracks).ok_or(Error::NoPoints)?;

    let root =
        BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| Error::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .build_cartesian_2d(bbox.min().x..bbox.max().x, bbox.min().y..bbox.max().y)
        .map_err(|e| Error::Render(e.to_string()))?;

    let style = BLACK.stroke_width(options.line_width);
    for track in tracks {
        chart
            .draw_series(LineSeries::new(
                track.points().iter().map(|point| (point.x, point.y)),
                style,
            ))
            .map_err(|e| Error::Render(e.to_string()))?;
    }

    root.present().map_err(|e| Error::Render(e.to_string()))?;

    tracing::debug!(
        "rendered {} track(s) at {}x{} px",
        tracks.len(),
        options.width,
        options.height
    );

    Ok(())
}
