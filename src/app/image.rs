//! Raster-image viewer with a path prompt in place of a file dialog.

use std::path::Path;

use tracing::{info, warn};

use super::ViewerApp;
use crate::core::{is_supported_image, ImageSession, Scene, ScreenSize, ViewerError};
use crate::term::Backdrop;
use crate::types::Rgb;

pub const IMAGE_BACKGROUND: Rgb = Rgb::new(0x2C, 0x2C, 0x2C);

const HELP: &[&str] = &[
    "Wargame image viewer",
    "",
    "o           open an image (Enter confirm, Esc cancel)",
    "drag        pan",
    "wheel       zoom at cursor",
    "+ / -       zoom at center",
    "arrows/hjkl pan",
    "0           reset view",
    "?           toggle help",
    "q / Esc     quit",
];

#[derive(Default)]
pub struct ImageApp {
    session: ImageSession,
    initial: Option<String>,
    file_name: String,
}

impl ImageApp {
    /// Viewer that opens `initial` once started.
    pub fn new(initial: Option<String>) -> Self {
        Self {
            initial,
            ..Self::default()
        }
    }

    pub fn session(&self) -> &ImageSession {
        &self.session
    }
}

impl ViewerApp for ImageApp {
    fn title(&self) -> &str {
        if self.file_name.is_empty() {
            "Wargame Map Viewer"
        } else {
            &self.file_name
        }
    }

    fn scene(&self) -> &dyn Scene {
        &self.session
    }

    fn scene_mut(&mut self) -> &mut dyn Scene {
        &mut self.session
    }

    fn help(&self) -> &'static [&'static str] {
        HELP
    }

    fn status(&self) -> String {
        match self.session.image() {
            Some(image) => {
                let (pan_x, pan_y) = self.session.transform().pan();
                format!(
                    "{}x{}px | Position: ({:.0}, {:.0}) | o open | ? help",
                    image.width(),
                    image.height(),
                    pan_x,
                    pan_y
                )
            }
            None => "Ready | press o to open an image".to_string(),
        }
    }

    fn hint(&self) -> Option<&str> {
        if self.session.image().is_some() {
            None
        } else {
            Some("Press o to open a map image")
        }
    }

    fn accepts_path(&self) -> bool {
        true
    }

    fn start(&mut self, screen: ScreenSize) -> Result<(), ViewerError> {
        match self.initial.take() {
            Some(path) => self.open_path(&path, screen),
            None => Ok(()),
        }
    }

    fn open_path(&mut self, path: &str, _screen: ScreenSize) -> Result<(), ViewerError> {
        if !is_supported_image(Path::new(path)) {
            warn!(path, "unrecognized image extension, trying to decode anyway");
        }
        self.session.open(path)?;
        self.file_name = Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string());
        info!(path, "image loaded");
        Ok(())
    }

    fn backdrop(&self) -> Backdrop<'_> {
        match self.session.image() {
            Some(image) => Backdrop::Image {
                image,
                viewport: self.session.viewport(),
                background: IMAGE_BACKGROUND,
            },
            None => Backdrop::Empty {
                background: IMAGE_BACKGROUND,
            },
        }
    }
}
