//! Decorative hex-grid viewer.

use super::ViewerApp;
use crate::core::{HexSession, Scene, Shape, HEX_BACKGROUND};
use crate::term::Backdrop;

const HELP: &[&str] = &[
    "Hexagon map",
    "",
    "drag        pan",
    "wheel       zoom at cursor",
    "+ / -       zoom at center",
    "arrows/hjkl pan",
    "0           reset view",
    "?           toggle help",
    "q / Esc     quit",
];

#[derive(Default)]
pub struct HexApp {
    session: HexSession,
    shapes: Vec<Shape>,
}

impl HexApp {
    pub fn new(session: HexSession) -> Self {
        Self {
            session,
            shapes: Vec::new(),
        }
    }
}

impl ViewerApp for HexApp {
    fn title(&self) -> &str {
        "Hexagon Map"
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
        let layout = self.session.layout();
        format!("{}x{} hexes | ? help", layout.cols, layout.rows)
    }

    fn prepare(&mut self) {
        self.shapes = self.session.shapes();
    }

    fn backdrop(&self) -> Backdrop<'_> {
        Backdrop::Shapes {
            shapes: &self.shapes,
            background: HEX_BACKGROUND,
        }
    }
}
