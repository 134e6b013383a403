//! Raster map image viewer.
//!
//! Usage: `image-viewer [PATH]`. Without a path, press `o` to type one.

use anyhow::Result;

use wargame_viewer::app::{self, ImageApp};
use wargame_viewer::core::ViewerConfig;
use wargame_viewer::logging;

fn main() -> Result<()> {
    let config = ViewerConfig::from_env();
    let _guard = logging::init(&config, "image-viewer")?;

    let initial = std::env::args().nth(1);
    app::run(ImageApp::new(initial), config.px_per_dot)
}
