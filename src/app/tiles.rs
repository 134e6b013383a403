//! Tile-map viewer: terrain maps from the map directory.

use tracing::info;

use super::ViewerApp;
use crate::core::{MapSession, Scene, ScreenSize, Shape, ViewerError};
use crate::term::Backdrop;
use crate::types::{Rgb, ViewerAction};

/// Area around the map.
pub const MAP_BACKGROUND: Rgb = Rgb::new(50, 50, 50);

const HELP: &[&str] = &[
    "Wargame map viewer",
    "",
    "drag        pan",
    "wheel       zoom at cursor",
    "+ / -       zoom at center",
    "arrows/hjkl pan",
    "0           reset view",
    "Tab / n     next map",
    "S-Tab / p   previous map",
    "1-9         select map",
    "?           toggle help",
    "q / Esc     quit",
];

pub struct TileMapApp {
    session: MapSession,
    shapes: Vec<Shape>,
}

impl TileMapApp {
    pub fn new(session: MapSession) -> Self {
        Self {
            session,
            shapes: Vec::new(),
        }
    }

    pub fn session(&self) -> &MapSession {
        &self.session
    }
}

impl ViewerApp for TileMapApp {
    fn title(&self) -> &str {
        self.session
            .grid()
            .map(|g| g.name())
            .unwrap_or("Wargame")
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
        let (pan_x, pan_y) = self.session.transform().pan();
        match self.session.grid() {
            Some(grid) => format!(
                "{}x{} | Position: ({:.0}, {:.0}) | ? help",
                grid.width(),
                grid.height(),
                pan_x,
                pan_y
            ),
            None => "No map loaded | ? help".to_string(),
        }
    }

    fn tabs(&self) -> (&[String], Option<usize>) {
        (self.session.available(), self.session.selected())
    }

    fn hint(&self) -> Option<&str> {
        if self.session.grid().is_some() {
            None
        } else if self.session.available().is_empty() {
            Some("No maps found")
        } else {
            Some("Select a map (Tab / 1-9)")
        }
    }

    /// Lists the library if nothing is listed yet, then loads the first map.
    fn start(&mut self, screen: ScreenSize) -> Result<(), ViewerError> {
        if self.session.available().is_empty() {
            self.session.refresh()?;
        }
        info!(maps = ?self.session.available(), "tile viewer started");
        self.session.select(0, screen)
    }

    fn handle_action(
        &mut self,
        action: ViewerAction,
        screen: ScreenSize,
    ) -> Result<bool, ViewerError> {
        match action {
            ViewerAction::NextMap => self.session.select_next(screen)?,
            ViewerAction::PrevMap => self.session.select_prev(screen)?,
            ViewerAction::SelectMap(i) => self.session.select(i as usize, screen)?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn prepare(&mut self) {
        self.session.shapes_into(&mut self.shapes);
    }

    fn backdrop(&self) -> Backdrop<'_> {
        Backdrop::Shapes {
            shapes: &self.shapes,
            background: MAP_BACKGROUND,
        }
    }
}
