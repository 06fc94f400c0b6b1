use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType};

/// The small rounded control that flips the button color scheme. Its fill
/// and border are always the complement of the buttons.
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, is_default_color: bool) {
    let switcher = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.switcher_border(is_default_color)))
        .style(Style::default().bg(theme.switcher_fill(is_default_color)));
    frame.render_widget(switcher, area);
}
