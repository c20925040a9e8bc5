mod settings;

use clap::Parser;
use settings::Settings;
use trackmap::{RenderOptions, load_directory, render_png, total_distance_km};

fn main() -> trackmap::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let settings = Settings::parse();

    let tracks = load_directory(&settings.tracks_dir)?;

    let total = total_distance_km(&tracks);
    println!("Total distance: {total:.2} km");

    let options = RenderOptions {
        width: settings.width,
        height: settings.height,
        line_width: settings.line_width,
    };
    render_png(&tracks, &options, &settings.output)?;
    tracing::info!("wrote map to {}", settings.output.display());

    Ok(())
}
