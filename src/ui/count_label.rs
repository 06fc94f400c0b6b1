use crate::ui::theme::Theme;
use ratatui::layout::Alignment;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// The numeric display between the two buttons, re-read from the counter on
/// every render.
pub fn render(frame: &mut Frame, area: Rect, count: u64) {
    let mut lines: Vec<Line> = Vec::new();
    for _ in 0..area.height.saturating_sub(1) / 2 {
        lines.push(Line::default());
    }
    lines.push(Line::from(count.to_string()));

    let label = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .style(Theme::count_text());
    frame.render_widget(label, area);
}
