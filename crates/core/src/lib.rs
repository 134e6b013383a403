//! Viewer core - pure, deterministic, and testable
//!
//! This crate contains the toolkit-independent part of the map viewers: the
//! pan/zoom transform, the terrain grid and its shape generation, the map
//! library and image loading. It has **no dependencies** on terminals or any
//! other display toolkit, making it:
//!
//! - **Testable**: every transform and rendering rule is a plain function
//! - **Portable**: front-ends only rasterize [`Shape`]s and forward gestures
//!
//! # Module Structure
//!
//! - [`viewport`]: pan offset + zoom factor, world↔screen conversion, zoom-to-cursor
//! - [`terrain`]: terrain labels and their fixed fill colors
//! - [`grid`]: validated terrain matrix and its JSON document form
//! - [`shapes`]: square-tile shape generation
//! - [`hex`]: pointy-top hexagon layout for the decorative hex grid
//! - [`maps`]: map directory listing, loading and default fixtures
//! - [`raster`]: raster image decoding and sampling
//! - [`session`]: single-owner viewer state driven by the event loop
//! - [`config`]: environment configuration
//!
//! # Example
//!
//! ```
//! use wargame_core::{square_tiles, TerrainGrid, ViewportState};
//!
//! let grid = TerrainGrid::from_labels("demo", &[&["grass", "forest"], &["water", "grass"]]).unwrap();
//! let shapes = square_tiles(&grid, &ViewportState::default(), 50.0);
//!
//! assert_eq!(shapes.len(), 4);
//! assert_eq!(shapes[1].fill.to_string(), "#006400");
//! ```

pub mod config;
pub mod error;
pub mod grid;
pub mod hex;
pub mod maps;
pub mod raster;
pub mod session;
pub mod shapes;
pub mod terrain;
pub mod viewport;

pub use wargame_types as types;

// Re-export commonly used types for convenience
pub use config::ViewerConfig;
pub use error::{MapParseError, Result, ViewerError};
pub use grid::{MapDocument, TerrainGrid};
pub use hex::{hex_vertices, HexLayout, HEX_BACKGROUND};
pub use maps::{default_maps, MapLibrary};
pub use raster::{is_supported_image, RasterImage};
pub use session::{HexSession, ImageSession, MapSession, Scene, ScreenSize};
pub use shapes::{square_tiles, square_tiles_into, Shape};
pub use terrain::Terrain;
pub use viewport::{ViewportState, ViewportTransform, ZoomLimits};
