use crate::anim::Animated;
use crate::config::AppConfig;
use crate::ui::theme::Theme;
use ratatui::layout::Rect;
use std::time::Instant;

/// The counter cell. Owns the count and its update rule; nothing else.
#[derive(Debug, Default)]
pub struct CounterState {
    count: u64,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.count += 1;
    }

    /// Decrementing at zero is a no-op, not an error.
    pub fn decrement(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    pub fn value(&self) -> u64 {
        self.count
    }
}

/// Two independent flags: which color scheme the counter buttons use, and
/// whether the surrounding surface is selected. Either may be set or cleared
/// in any combination.
#[derive(Debug)]
pub struct ColorToggleState {
    is_default_color: bool,
    is_selected: bool,
}

impl Default for ColorToggleState {
    fn default() -> Self {
        Self {
            is_default_color: true,
            is_selected: false,
        }
    }
}

impl ColorToggleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_default_color(&mut self, value: bool) {
        self.is_default_color = value;
    }

    /// The switcher control always inverts; it carries no external intent.
    pub fn toggle_default_color(&mut self) {
        self.is_default_color = !self.is_default_color;
    }

    pub fn set_selected(&mut self, value: bool) {
        self.is_selected = value;
    }

    pub fn is_default_color(&self) -> bool {
        self.is_default_color
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }
}

/// Composition root. Exclusively owns both state cells plus the two animated
/// presentation values the surface renders from; child widgets only ever see
/// current values.
pub struct AppState {
    pub config: AppConfig,
    pub theme: Theme,
    pub counter: CounterState,
    pub colors: ColorToggleState,
    /// Blend factor between the secondary surface color (0.0) and the
    /// selected tint (1.0).
    pub surface_color: Animated,
    /// Corner cut radius of the surface, in cells.
    pub surface_radius: Animated,
    /// Last known terminal area, for hit-testing mouse input.
    pub area: Rect,
    pub dirty: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig, theme: Theme) -> Self {
        let duration = config.animation.duration();
        let easing = config.animation.easing;
        Self {
            config,
            theme,
            counter: CounterState::new(),
            colors: ColorToggleState::new(),
            surface_color: Animated::idle(0.0, duration, easing),
            surface_radius: Animated::idle(0.0, duration, easing),
            area: Rect::ZERO,
            dirty: true,
            should_quit: false,
        }
    }

    /// Overwrite the selection flag and retarget both animated surface
    /// values. Setting the flag to its current value leaves the in-flight
    /// animations untouched.
    pub fn set_selected(&mut self, value: bool, now: Instant) {
        self.colors.set_selected(value);
        let max_radius = f32::from(self.config.animation.max_corner_radius);
        if value {
            self.surface_color.retarget(1.0, now);
            self.surface_radius.retarget(max_radius, now);
        } else {
            self.surface_color.retarget(0.0, now);
            self.surface_radius.retarget(0.0, now);
        }
    }

    /// The surface-level selection gesture: inverts the current flag.
    pub fn toggle_selected(&mut self, now: Instant) {
        let next = !self.colors.is_selected();
        self.set_selected(next, now);
        tracing::debug!(selected = next, "surface selection toggled");
    }

    /// Whether either surface value is still interpolating.
    pub fn animating(&self, now: Instant) -> bool {
        !self.surface_color.is_settled(now) || !self.surface_radius.is_settled(now)
    }
}
