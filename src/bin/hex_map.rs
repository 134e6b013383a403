//! Decorative 10x10 hexagon grid with pan and zoom.

use anyhow::Result;

use wargame_viewer::app::{self, HexApp};
use wargame_viewer::core::ViewerConfig;
use wargame_viewer::logging;

fn main() -> Result<()> {
    let config = ViewerConfig::from_env();
    let _guard = logging::init(&config, "hex-map")?;

    app::run(HexApp::default(), config.px_per_dot)
}
