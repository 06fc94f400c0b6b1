//! Time-based value interpolation for the UI.
//!
//! State only ever publishes a target value; an [`Animated`] cell produces the
//! current interpolated value on each frame until the target is reached.
//! Retargeting mid-flight restarts from the currently sampled value, so a
//! rapid back-and-forth never jumps.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Interpolation strategy for an [`Animated`] value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    /// Jump straight to the target.
    Instant,
    /// Constant-rate interpolation over the configured duration.
    #[default]
    Linear,
}

/// A scalar value that moves toward its target over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Animated {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Animated {
    /// A cell at rest at `value`. No interpolation happens until the first
    /// call to [`retarget`](Self::retarget).
    pub fn idle(value: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from: value,
            to: value,
            started: Instant::now(),
            duration,
            easing,
        }
    }

    /// Point the cell at a new target. The interpolation restarts from the
    /// value currently visible at `now`. Retargeting to the current target is
    /// a no-op, so repeated identical requests do not restart the clock.
    pub fn retarget(&mut self, target: f32, now: Instant) {
        if target == self.to {
            return;
        }
        self.from = self.sample(now);
        self.to = target;
        self.started = now;
    }

    /// The value visible at `now`.
    pub fn sample(&self, now: Instant) -> f32 {
        match self.easing {
            Easing::Instant => self.to,
            Easing::Linear => {
                if self.duration.is_zero() {
                    return self.to;
                }
                let elapsed = now.saturating_duration_since(self.started);
                let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
                if t >= 1.0 {
                    return self.to;
                }
                self.from + (self.to - self.from) * t
            }
        }
    }

    /// The value the cell is moving toward.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// True once the interpolation has reached its target.
    pub fn is_settled(&self, now: Instant) -> bool {
        self.sample(now) == self.to
    }
}
