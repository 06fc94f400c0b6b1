use crate::ui::theme::Theme;
use ratatui::layout::Alignment;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph};

/// A filled, clickable button with a single centered glyph. Both counter
/// buttons share the same fill rule; only the label and callback differ.
pub fn render(frame: &mut Frame, area: Rect, label: &str, fill: Color) {
    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..area.height.saturating_sub(1) / 2 {
        lines.push(Line::default());
    }
    lines.push(Line::from(label));

    let button = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Theme::button_text())
        .block(Block::default().style(Style::default().bg(fill)));
    frame.render_widget(button, area);
}
