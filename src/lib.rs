//! Trackmap - GPX track aggregation and map rendering
//!
//! This library ingests a folder of GPX files, flattens every track segment
//! into an ordered point sequence, sums the great-circle path length across
//! all of them, and renders the result as black polylines on a single raster
//! canvas scaled to the combined bounding box.
//!
//! # Architecture
//!
//! - **[`Track`]**: Immutable storage for one GPX track segment
//! - **[`load_directory`]**: File discovery and GPX parsing
//! - **[`total_distance_km`]**: Haversine path-length accumulation
//! - **[`render_png`]**: Headless rendering to a PNG file

mod distance;
mod loader;
mod render;
mod track;

// Public API exports
pub use distance::{haversine_km, total_distance_km};
pub use loader::load_directory;
pub use render::{RenderOptions, render_png};
pub use track::Track;

/// Error types for the crate
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("GPX parsing error: {0}")]
    GpxParse(#[from] gpx::errors::GpxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no track points to render")]
    NoPoints,

    #[error("rendering error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, Error>;
