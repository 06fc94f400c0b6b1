use ratatui::layout::{Constraint, Layout, Margin, Rect};

pub const BUTTON_WIDTH: u16 = 7;
pub const LABEL_WIDTH: u16 = 6;
pub const SWITCHER_WIDTH: u16 = 5;
pub const ROW_HEIGHT: u16 = 3;

/// Inset of the surface from the terminal edges.
const SURFACE_MARGIN_H: u16 = 2;
const SURFACE_MARGIN_V: u16 = 1;
/// Margin between neighbours in the control chain, and between the chain and
/// the surface edges.
const CHAIN_SPACING: u16 = 2;
const CHAIN_EDGE_INSET: u16 = 1;

/// Resolved rectangles for one frame. The four controls form a strict
/// left-to-right chain inside the surface; the switcher slot is the only one
/// anchored on both sides, so it absorbs whatever width is left over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneLayout {
    pub surface: Rect,
    pub decrease_button: Rect,
    pub count_label: Rect,
    pub increase_button: Rect,
    pub color_switcher: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> SceneLayout {
    // Main vertical split: surface | status bar
    let [content, status_bar] =
        Layout::vertical([Constraint::Min(ROW_HEIGHT + 2), Constraint::Length(1)]).areas(area);

    let surface = content.inner(Margin::new(SURFACE_MARGIN_H, SURFACE_MARGIN_V));

    // Control strip, vertically centered in the surface.
    let row = Rect {
        x: surface.x,
        y: surface.y + surface.height.saturating_sub(ROW_HEIGHT) / 2,
        width: surface.width,
        height: ROW_HEIGHT.min(surface.height),
    };

    let [decrease_button, count_label, increase_button, switcher_slot] = Layout::horizontal([
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Length(LABEL_WIDTH),
        Constraint::Length(BUTTON_WIDTH),
        Constraint::Min(SWITCHER_WIDTH),
    ])
    .spacing(CHAIN_SPACING)
    .horizontal_margin(CHAIN_EDGE_INSET)
    .areas(row);

    // The switcher keeps its preferred size and sits centered between its two
    // anchors (the increase button and the surface's right edge).
    let color_switcher = Rect {
        x: switcher_slot.x + switcher_slot.width.saturating_sub(SWITCHER_WIDTH) / 2,
        y: switcher_slot.y,
        width: SWITCHER_WIDTH.min(switcher_slot.width),
        height: switcher_slot.height,
    };

    SceneLayout {
        surface,
        decrease_button,
        count_label,
        increase_button,
        color_switcher,
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> SceneLayout {
        compute_layout(Rect::new(0, 0, 80, 24))
    }

    #[test]
    fn test_controls_chain_left_to_right() {
        let s = scene();
        assert!(s.decrease_button.right() < s.count_label.left());
        assert!(s.count_label.right() < s.increase_button.left());
        assert!(s.increase_button.right() < s.color_switcher.left());
        assert!(s.color_switcher.right() <= s.surface.right());
    }

    #[test]
    fn test_controls_share_the_centered_row() {
        let s = scene();
        for rect in [
            s.decrease_button,
            s.count_label,
            s.increase_button,
            s.color_switcher,
        ] {
            assert_eq!(rect.y, s.decrease_button.y);
            assert_eq!(rect.height, ROW_HEIGHT);
        }
        // Vertically centered within the surface.
        let above = s.decrease_button.y - s.surface.y;
        let below = s.surface.bottom() - s.decrease_button.bottom();
        assert!(above.abs_diff(below) <= 1);
    }

    #[test]
    fn test_switcher_slot_absorbs_extra_width() {
        let narrow = compute_layout(Rect::new(0, 0, 50, 24));
        let wide = compute_layout(Rect::new(0, 0, 120, 24));
        // Fixed-size elements keep their widths.
        assert_eq!(narrow.decrease_button.width, wide.decrease_button.width);
        assert_eq!(narrow.count_label.width, wide.count_label.width);
        assert_eq!(narrow.increase_button.width, wide.increase_button.width);
        assert_eq!(narrow.color_switcher.width, SWITCHER_WIDTH);
        assert_eq!(wide.color_switcher.width, SWITCHER_WIDTH);
        // The extra width lands between the increase button and the switcher.
        let narrow_gap = narrow.color_switcher.x - narrow.increase_button.right();
        let wide_gap = wide.color_switcher.x - wide.increase_button.right();
        assert!(wide_gap > narrow_gap);
    }

    #[test]
    fn test_surface_is_inset_from_the_frame() {
        let s = scene();
        assert!(s.surface.x > 0);
        assert!(s.surface.y > 0);
        assert!(s.surface.right() < 80);
        assert!(s.surface.bottom() < s.status_bar.y);
    }

    #[test]
    fn test_status_bar_spans_the_bottom_line() {
        let s = scene();
        assert_eq!(s.status_bar, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_degenerate_area_does_not_panic() {
        compute_layout(Rect::new(0, 0, 0, 0));
        compute_layout(Rect::new(0, 0, 3, 2));
        compute_layout(Rect::new(0, 0, 10, 1));
    }
}
