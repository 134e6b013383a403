//! Raster map images (JPEG/PNG/BMP/GIF) decoded into RGB pixels.

use std::path::{Path, PathBuf};

use image::RgbImage;
use tracing::info;

use crate::error::{Result, ViewerError};
use crate::types::{Point, Rgb};

/// File extensions offered by the open prompt.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "gif"];

/// A decoded image. World coordinates are image pixels.
#[derive(Debug, Clone)]
pub struct RasterImage {
    path: PathBuf,
    pixels: RgbImage,
}

impl RasterImage {
    /// Decode the file at `path`. Any failure (missing file included) is an
    /// [`ViewerError::ImageDecode`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| ViewerError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;
        let pixels = decoded.to_rgb8();
        info!(path = %path.display(), width = pixels.width(), height = pixels.height(), "image loaded");
        Ok(Self {
            path: path.to_path_buf(),
            pixels,
        })
    }

    pub fn from_pixels(path: impl Into<PathBuf>, pixels: RgbImage) -> Self {
        Self {
            path: path.into(),
            pixels,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Pixel at integer coordinates, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let [r, g, b] = self.pixels.get_pixel(x, y).0;
        Some(Rgb::new(r, g, b))
    }

    /// Nearest-neighbour sample at a world point.
    pub fn sample(&self, world: Point) -> Option<Rgb> {
        if world.x < 0.0 || world.y < 0.0 {
            return None;
        }
        self.pixel(world.x.floor() as u32, world.y.floor() as u32)
    }
}

/// Whether `path` has one of the [`SUPPORTED_EXTENSIONS`] (case-insensitive).
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}
