//! Mouse events to screen-space gestures.
//!
//! The map area starts at terminal row `top_row` and is `rows` rows tall. Each
//! character cell covers `px_per_dot` screen pixels horizontally and two dots
//! (`2 * px_per_dot` pixels) vertically. A cell maps to the screen point at its
//! center.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::{Gesture, Point, ZoomDirection};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerMapper {
    px_per_dot: f64,
    top_row: u16,
    rows: u16,
}

impl PointerMapper {
    pub fn new(px_per_dot: f64, top_row: u16, rows: u16) -> Self {
        Self {
            px_per_dot,
            top_row,
            rows,
        }
    }

    /// Screen point at the center of terminal cell (`column`, `row`).
    ///
    /// Rows above the map area give negative y, which keeps drags continuous
    /// when the pointer leaves the area.
    pub fn screen_point(&self, column: u16, row: u16) -> Point {
        let k = self.px_per_dot;
        let rel_row = row as f64 - self.top_row as f64;
        Point::new((column as f64 + 0.5) * k, rel_row * 2.0 * k + k)
    }

    fn in_area(&self, row: u16) -> bool {
        row >= self.top_row && row < self.top_row.saturating_add(self.rows)
    }

    /// Translate a mouse event.
    ///
    /// Presses and wheel notches outside the map area are ignored; drags and
    /// releases are always forwarded so a pan never gets stuck.
    pub fn map_mouse_event(&self, event: MouseEvent) -> Option<Gesture> {
        let at = self.screen_point(event.column, event.row);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) if self.in_area(event.row) => {
                Some(Gesture::BeginPan(at))
            }
            MouseEventKind::Drag(MouseButton::Left) => Some(Gesture::Drag(at)),
            MouseEventKind::Up(MouseButton::Left) => Some(Gesture::EndPan),
            MouseEventKind::ScrollUp if self.in_area(event.row) => {
                Some(Gesture::Zoom(at, ZoomDirection::In))
            }
            MouseEventKind::ScrollDown if self.in_area(event.row) => {
                Some(Gesture::Zoom(at, ZoomDirection::Out))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn cell_maps_to_its_center() {
        let m = PointerMapper::new(10.0, 1, 20);
        assert_eq!(m.screen_point(0, 1), Point::new(5.0, 10.0));
        assert_eq!(m.screen_point(3, 4), Point::new(35.0, 70.0));
    }

    #[test]
    fn left_drag_sequence() {
        let m = PointerMapper::new(10.0, 1, 20);
        assert_eq!(
            m.map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 2, 2)),
            Some(Gesture::BeginPan(Point::new(25.0, 30.0)))
        );
        assert_eq!(
            m.map_mouse_event(mouse(MouseEventKind::Drag(MouseButton::Left), 4, 2)),
            Some(Gesture::Drag(Point::new(45.0, 30.0)))
        );
        assert_eq!(
            m.map_mouse_event(mouse(MouseEventKind::Up(MouseButton::Left), 4, 0)),
            Some(Gesture::EndPan)
        );
    }

    #[test]
    fn wheel_zooms_at_pointer() {
        let m = PointerMapper::new(10.0, 1, 20);
        assert_eq!(
            m.map_mouse_event(mouse(MouseEventKind::ScrollUp, 0, 1)),
            Some(Gesture::Zoom(Point::new(5.0, 10.0), ZoomDirection::In))
        );
        assert_eq!(
            m.map_mouse_event(mouse(MouseEventKind::ScrollDown, 0, 1)),
            Some(Gesture::Zoom(Point::new(5.0, 10.0), ZoomDirection::Out))
        );
    }

    #[test]
    fn presses_outside_area_are_ignored() {
        let m = PointerMapper::new(10.0, 1, 20);
        assert_eq!(
            m.map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Left), 2, 0)),
            None
        );
        assert_eq!(m.map_mouse_event(mouse(MouseEventKind::ScrollUp, 2, 21)), None);
        assert_eq!(
            m.map_mouse_event(mouse(MouseEventKind::Down(MouseButton::Right), 2, 5)),
            None
        );
        assert_eq!(m.map_mouse_event(mouse(MouseEventKind::Moved, 2, 5)), None);
    }
}
