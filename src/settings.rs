use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
/// Trackmap - renders a folder of GPX tracks as a single map image and reports the total distance
pub struct Settings {
    /// Directory containing the GPX files to load
    #[clap(value_name = "DIR", default_value = "files")]
    pub tracks_dir: PathBuf,

    /// Output image width in pixels
    #[clap(long, default_value = "3500")]
    pub width: u32,

    /// Output image height in pixels
    #[clap(long, default_value = "3500")]
    pub height: u32,

    /// Track line width in pixels
    #[clap(long, default_value = "2")]
    pub line_width: u32,

    /// Output PNG path
    #[clap(short, long, value_name = "FILE", default_value = "tracks.png")]
    pub output: PathBuf,
}
