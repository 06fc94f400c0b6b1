//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use crate::anim::Easing;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Animation frame interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    33
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// How long a selection flip takes to settle, in milliseconds.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,
    /// Corner rounding of the selected surface, in cells.
    #[serde(default = "default_max_corner_radius")]
    pub max_corner_radius: u16,
}

impl AnimationConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            easing: Easing::default(),
            max_corner_radius: default_max_corner_radius(),
        }
    }
}

fn default_duration_ms() -> u64 {
    250
}

fn default_max_corner_radius() -> u16 {
    3
}

/// Palette colors as `#rrggbb` hex strings. The primary/secondary defaults
/// are the Material baseline purple and teal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default = "default_primary")]
    pub primary: String,
    #[serde(default = "default_secondary")]
    pub secondary: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default = "default_button")]
    pub default_button: String,
    #[serde(default = "default_alternate_button")]
    pub alternate_button: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: default_primary(),
            secondary: default_secondary(),
            background: default_background(),
            default_button: default_button(),
            alternate_button: default_alternate_button(),
        }
    }
}

fn default_primary() -> String {
    "#6200ee".into()
}

fn default_secondary() -> String {
    "#03dac6".into()
}

fn default_background() -> String {
    "#121212".into()
}

fn default_button() -> String {
    "#0000ff".into()
}

fn default_alternate_button() -> String {
    "#ff0000".into()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Diagnostic log file. Logging is disabled when unset (the terminal
    /// itself belongs to the UI).
    #[serde(default)]
    pub file: Option<PathBuf>,
}
