//! The animated surface behind the control row.
//!
//! The fill color and corner radius both come from the animation cells, so a
//! selection flip fades and rounds the surface over the configured duration
//! rather than snapping. Corner rounding is quantized to whole cells: a
//! radius of `r` cuts the cells within the diagonal `dx + dy < r` of each
//! corner.

use crate::ui::theme::Theme;
use ratatui::layout::{Position, Rect};
use ratatui::Frame;

pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, blend: f32, radius: f32) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let fill = theme.surface_fill(blend);
    let cut = radius.round().max(0.0) as u16;
    let buf = frame.buffer_mut();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let dx = (x - area.x).min(area.right() - 1 - x);
            let dy = (y - area.y).min(area.bottom() - 1 - y);
            if corner_cut(dx, dy, cut) {
                continue;
            }
            if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                cell.set_bg(fill);
            }
        }
    }
}

/// Whether a cell at distance (`dx`, `dy`) from the nearest corner falls
/// outside the rounded outline.
fn corner_cut(dx: u16, dy: u16, radius: u16) -> bool {
    dx + dy < radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_radius_cuts_nothing() {
        assert!(!corner_cut(0, 0, 0));
        assert!(!corner_cut(5, 5, 0));
    }

    #[test]
    fn test_radius_cuts_the_corner_diagonal() {
        // Radius 2 removes the corner cell and its two neighbours.
        assert!(corner_cut(0, 0, 2));
        assert!(corner_cut(1, 0, 2));
        assert!(corner_cut(0, 1, 2));
        assert!(!corner_cut(1, 1, 2));
        assert!(!corner_cut(2, 0, 2));
        assert!(!corner_cut(0, 2, 2));
    }
}
