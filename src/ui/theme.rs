//! Color rules for the scene.
//!
//! The counter buttons paint blue while the default scheme is active and red
//! otherwise; the switcher is the exact complement (red fill with a blue
//! border, then blue fill with a red border). The surface blends between the
//! secondary color and a 65%-alpha tint of the primary color composited over
//! the background.

use crate::config::ThemeConfig;
use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

/// Alpha applied to the primary color when the surface is selected.
pub const SELECTED_ALPHA: f32 = 0.65;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected a hex color like \"#rrggbb\", got {0:?}")]
    Format(String),
}

/// A true-color value the theme can interpolate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn parse(text: &str) -> Result<Self, ColorParseError> {
        let hex = text.trim().strip_prefix('#').unwrap_or(text.trim());
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorParseError::Format(text.to_string()));
        }
        let channel = |range| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorParseError::Format(text.to_string()))
        };
        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Linear interpolation toward `other`, `t` clamped to 0..=1.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    /// Composite this color at `alpha` over an opaque base.
    pub fn over(self, base: Rgb, alpha: f32) -> Rgb {
        base.lerp(self, alpha)
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

/// Resolved palette plus the presentation rules derived from it.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Rgb,
    pub secondary: Rgb,
    pub background: Rgb,
    pub default_button: Rgb,
    pub alternate_button: Rgb,
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Result<Self, ColorParseError> {
        Ok(Self {
            primary: Rgb::parse(&config.primary)?,
            secondary: Rgb::parse(&config.secondary)?,
            background: Rgb::parse(&config.background)?,
            default_button: Rgb::parse(&config.default_button)?,
            alternate_button: Rgb::parse(&config.alternate_button)?,
        })
    }

    /// Fill color shared by both counter buttons.
    pub fn button_fill(&self, is_default_color: bool) -> Color {
        if is_default_color {
            self.default_button.to_color()
        } else {
            self.alternate_button.to_color()
        }
    }

    /// The switcher fill is the complement of the button fill.
    pub fn switcher_fill(&self, is_default_color: bool) -> Color {
        self.button_fill(!is_default_color)
    }

    pub fn switcher_border(&self, is_default_color: bool) -> Color {
        self.button_fill(is_default_color)
    }

    /// Surface fill for a blend factor between rest (0.0) and selected (1.0).
    pub fn surface_fill(&self, blend: f32) -> Color {
        let selected = self.primary.over(self.background, SELECTED_ALPHA);
        self.secondary.lerp(selected, blend).to_color()
    }

    pub fn button_text() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn count_text() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
