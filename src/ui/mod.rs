mod color_switcher;
mod count_label;
mod counter_button;
pub mod layout;
mod status_bar;
mod surface;
pub mod theme;

use crate::app::state::AppState;
use ratatui::Frame;
use std::time::Instant;

/// Render the whole scene from the current state. Pure with respect to the
/// state; the only time dependence is sampling the two animation cells.
pub fn render(frame: &mut Frame, state: &AppState, now: Instant) {
    let scene = layout::compute_layout(frame.area());

    surface::render(
        frame,
        scene.surface,
        &state.theme,
        state.surface_color.sample(now),
        state.surface_radius.sample(now),
    );

    let is_default = state.colors.is_default_color();
    counter_button::render(
        frame,
        scene.decrease_button,
        "-",
        state.theme.button_fill(is_default),
    );
    count_label::render(frame, scene.count_label, state.counter.value());
    counter_button::render(
        frame,
        scene.increase_button,
        "+",
        state.theme.button_fill(is_default),
    );
    color_switcher::render(frame, scene.color_switcher, &state.theme, is_default);

    status_bar::render(frame, scene.status_bar, state);
}
