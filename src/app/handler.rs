use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

/// Dispatch one event against the state. Exactly one state cell mutates per
/// user activation; everything else is bookkeeping.
pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            // Only redraw while an interpolation is in flight.
            if state.animating(Instant::now()) {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.area = Rect::new(0, 0, width, height);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = key.code {
            return vec![Action::Quit];
        }
    }

    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            state.counter.increment();
            state.dirty = true;
            tracing::debug!(count = state.counter.value(), "counter incremented");
        }
        KeyCode::Char('-') | KeyCode::Left => {
            state.counter.decrement();
            state.dirty = true;
            tracing::debug!(count = state.counter.value(), "counter decremented");
        }
        KeyCode::Char('c') => {
            state.colors.toggle_default_color();
            state.dirty = true;
            tracing::debug!(
                default_color = state.colors.is_default_color(),
                "color scheme toggled"
            );
        }
        KeyCode::Char('s') | KeyCode::Char(' ') | KeyCode::Enter => {
            state.toggle_selected(Instant::now());
            state.dirty = true;
        }
        KeyCode::Char('q') | KeyCode::Esc => return vec![Action::Quit],
        _ => {}
    }
    vec![]
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }

    let scene = layout::compute_layout(state.area);
    let pos = Position::new(mouse.column, mouse.row);

    // Inner controls win the hit test; anywhere else on the surface is the
    // selection gesture.
    if scene.decrease_button.contains(pos) {
        state.counter.decrement();
        state.dirty = true;
        tracing::debug!(count = state.counter.value(), "counter decremented");
    } else if scene.increase_button.contains(pos) {
        state.counter.increment();
        state.dirty = true;
        tracing::debug!(count = state.counter.value(), "counter incremented");
    } else if scene.color_switcher.contains(pos) {
        state.colors.toggle_default_color();
        state.dirty = true;
        tracing::debug!(
            default_color = state.colors.is_default_color(),
            "color scheme toggled"
        );
    } else if scene.surface.contains(pos) {
        state.toggle_selected(Instant::now());
        state.dirty = true;
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::ui::theme::Theme;

    fn test_state() -> AppState {
        let config = AppConfig::default();
        let theme = Theme::from_config(&config.theme).unwrap();
        let mut state = AppState::new(config, theme);
        state.area = Rect::new(0, 0, 60, 12);
        state.dirty = false;
        state
    }

    fn press(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn click(column: u16, row: u16) -> AppEvent {
        AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn test_plus_and_minus_keys_drive_the_counter() {
        let mut state = test_state();
        handle_event(&mut state, press(KeyCode::Char('+')));
        handle_event(&mut state, press(KeyCode::Char('+')));
        handle_event(&mut state, press(KeyCode::Char('-')));
        assert_eq!(state.counter.value(), 1);
        assert!(state.dirty);
    }

    #[test]
    fn test_minus_key_at_zero_is_a_no_op() {
        let mut state = test_state();
        handle_event(&mut state, press(KeyCode::Char('-')));
        assert_eq!(state.counter.value(), 0);
    }

    #[test]
    fn test_color_key_toggles_the_scheme() {
        let mut state = test_state();
        handle_event(&mut state, press(KeyCode::Char('c')));
        assert!(!state.colors.is_default_color());
        handle_event(&mut state, press(KeyCode::Char('c')));
        assert!(state.colors.is_default_color());
    }

    #[test]
    fn test_space_toggles_surface_selection() {
        let mut state = test_state();
        handle_event(&mut state, press(KeyCode::Char(' ')));
        assert!(state.colors.is_selected());
        assert_eq!(state.surface_color.target(), 1.0);
        handle_event(&mut state, press(KeyCode::Char(' ')));
        assert!(!state.colors.is_selected());
        assert_eq!(state.surface_color.target(), 0.0);
    }

    #[test]
    fn test_quit_keys_emit_quit() {
        let mut state = test_state();
        assert_eq!(
            handle_event(&mut state, press(KeyCode::Char('q'))),
            vec![Action::Quit]
        );
        assert_eq!(
            handle_event(&mut state, press(KeyCode::Esc)),
            vec![Action::Quit]
        );
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
        // Ctrl-C must not have toggled the color scheme on its way out.
        assert!(state.colors.is_default_color());
    }

    #[test]
    fn test_clicking_the_buttons_drives_the_counter() {
        let mut state = test_state();
        let scene = layout::compute_layout(state.area);

        let inc = scene.increase_button;
        handle_event(&mut state, click(inc.x, inc.y));
        handle_event(&mut state, click(inc.x + inc.width - 1, inc.y + inc.height - 1));
        assert_eq!(state.counter.value(), 2);

        let dec = scene.decrease_button;
        handle_event(&mut state, click(dec.x, dec.y));
        assert_eq!(state.counter.value(), 1);
    }

    #[test]
    fn test_clicking_the_switcher_flips_the_scheme_only() {
        let mut state = test_state();
        let scene = layout::compute_layout(state.area);
        handle_event(&mut state, click(scene.color_switcher.x, scene.color_switcher.y));
        assert!(!state.colors.is_default_color());
        assert!(!state.colors.is_selected());
    }

    #[test]
    fn test_clicking_bare_surface_toggles_selection() {
        let mut state = test_state();
        let scene = layout::compute_layout(state.area);
        // Top-left corner of the surface is outside every inner control.
        handle_event(&mut state, click(scene.surface.x, scene.surface.y));
        assert!(state.colors.is_selected());
        assert_eq!(state.counter.value(), 0);
        assert!(state.colors.is_default_color());
    }

    #[test]
    fn test_clicking_outside_the_surface_does_nothing() {
        let mut state = test_state();
        handle_event(&mut state, click(0, 0));
        assert!(!state.colors.is_selected());
        assert!(!state.dirty);
    }

    #[test]
    fn test_tick_is_clean_while_settled() {
        let mut state = test_state();
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);
    }

    #[test]
    fn test_tick_redraws_while_animating() {
        let mut state = test_state();
        state.set_selected(true, Instant::now());
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.dirty);
    }

    #[test]
    fn test_resize_records_the_new_area() {
        let mut state = test_state();
        handle_event(&mut state, AppEvent::Terminal(CEvent::Resize(100, 30)));
        assert_eq!(state.area, Rect::new(0, 0, 100, 30));
        assert!(state.dirty);
    }
}
