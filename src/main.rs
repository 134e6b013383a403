//! Terminal tile-map viewer (default binary).
//!
//! Lists the maps directory (seeding the default maps when it is empty) once
//! the terminal is up, shows the first map and lets the user switch maps,
//! pan and zoom.

use anyhow::Result;

use wargame_viewer::app::{self, TileMapApp};
use wargame_viewer::core::{MapLibrary, MapSession, ViewerConfig};
use wargame_viewer::logging;

fn main() -> Result<()> {
    let config = ViewerConfig::from_env();
    let _guard = logging::init(&config, "wargame-viewer")?;

    let library = MapLibrary::new(config.maps_dir.clone());
    // Listed by `TileMapApp::start`; failures end up in the error box.
    let session = MapSession::new(library, config.tile_size);

    app::run(TileMapApp::new(session), config.px_per_dot)
}
