//! Closed-form damped spring easing.
//!
//! A spring is the unit-step response of a damped harmonic oscillator: it starts at rest at 0 and
//! converges to 1. Evaluation is a pure function of `(frame, fps, config)`, so any frame can be
//! sampled directly without simulating the frames before it.

use crate::foundation::core::Fps;
use crate::foundation::error::{LogoError, LogoResult};

/// Damping ratios within this distance below 1 are evaluated with the critical solution.
const CRITICAL_EPS: f64 = 1e-6;

/// Consecutive in-threshold frames required by [`measure_spring`].
const SETTLE_WINDOW_FRAMES: u64 = 20;

/// Upper bound on frames scanned by [`measure_spring`].
const SETTLE_MAX_FRAMES: u64 = 1_000_000;

/// Physical parameters of one spring curve.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpringConfig {
    /// Oscillator mass (> 0). Heavier springs are slower.
    pub mass: f64,
    /// Damping coefficient (>= 0).
    pub damping: f64,
    /// Stiffness (> 0).
    pub stiffness: f64,
    /// Never report progress past the target.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            damping: 10.0,
            stiffness: 100.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    /// Override the mass.
    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    /// Override the damping coefficient.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Override the stiffness.
    pub fn with_stiffness(mut self, stiffness: f64) -> Self {
        self.stiffness = stiffness;
        self
    }

    /// Enable or disable overshoot clamping.
    pub fn with_overshoot_clamping(mut self, clamp: bool) -> Self {
        self.overshoot_clamping = clamp;
        self
    }

    /// Reject parameters that do not describe a converging oscillator.
    pub fn validate(&self) -> LogoResult<()> {
        let finite =
            self.mass.is_finite() && self.damping.is_finite() && self.stiffness.is_finite();
        if !finite {
            return Err(LogoError::animation(format!(
                "spring parameters must be finite: {self:?}"
            )));
        }
        if self.mass <= 0.0 {
            return Err(LogoError::animation("spring mass must be > 0"));
        }
        if self.stiffness <= 0.0 {
            return Err(LogoError::animation("spring stiffness must be > 0"));
        }
        if self.damping < 0.0 {
            return Err(LogoError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)` in rad/s.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness.max(0.0) / self.mass.max(1e-9)).sqrt()
    }

    /// Damping ratio `c / (2 sqrt(k m))`. Values below 1 overshoot.
    pub fn damping_ratio(&self) -> f64 {
        let km = self.stiffness.max(0.0) * self.mass.max(1e-9);
        if km == 0.0 {
            return f64::INFINITY;
        }
        self.damping.max(0.0) / (2.0 * km.sqrt())
    }
}

/// Evaluate a 0 → 1 spring at `frame`.
///
/// Frames at or before 0 return exactly 0. Underdamped configurations may return values above 1
/// unless `overshoot_clamping` is set.
pub fn spring(frame: i64, fps: Fps, config: &SpringConfig) -> f64 {
    if frame <= 0 {
        return 0.0;
    }
    let t = fps.frames_to_secs(frame);
    let x = step_response(t, config);
    if config.overshoot_clamping {
        x.min(1.0)
    } else {
        x
    }
}

fn step_response(t: f64, config: &SpringConfig) -> f64 {
    let w0 = config.natural_frequency();
    if w0 == 0.0 {
        // No restoring force, the spring never leaves its rest position.
        return 0.0;
    }
    let zeta = config.damping_ratio();

    if zeta < 1.0 - CRITICAL_EPS {
        let root = (1.0 - zeta * zeta).sqrt();
        let wd = w0 * root;
        let envelope = (-zeta * w0 * t).exp();
        1.0 - envelope * ((wd * t).cos() + (zeta / root) * (wd * t).sin())
    } else {
        // Critical. Overdamped springs follow the same curve, matching the host animation runtime.
        let envelope = (-w0 * t).exp();
        1.0 - envelope * (1.0 + w0 * t)
    }
}

/// A spring mapped onto an output range and optionally delayed.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Spring {
    /// Curve parameters.
    pub config: SpringConfig,
    /// Value at rest (progress 0).
    pub from: f64,
    /// Value once settled (progress 1).
    pub to: f64,
    /// Frames to wait before the spring starts moving.
    pub delay_frames: u64,
}

impl Spring {
    /// A 0 → 1 spring starting at frame 0.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            from: 0.0,
            to: 1.0,
            delay_frames: 0,
        }
    }

    /// Map progress onto `[from, to]`.
    pub fn with_range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Start the spring `frames` frames later.
    pub fn with_delay(mut self, frames: u64) -> Self {
        self.delay_frames = frames;
        self
    }

    /// Validate config and output range.
    pub fn validate(&self) -> LogoResult<()> {
        self.config.validate()?;
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(LogoError::animation("spring range must be finite"));
        }
        Ok(())
    }

    /// Raw 0 → 1 progress at `frame`, after applying the delay.
    pub fn progress(&self, frame: i64, fps: Fps) -> f64 {
        let delay = i64::try_from(self.delay_frames).unwrap_or(i64::MAX);
        spring(frame.saturating_sub(delay), fps, &self.config)
    }

    /// Progress mapped onto `[from, to]`.
    pub fn sample(&self, frame: i64, fps: Fps) -> f64 {
        let p = self.progress(frame, fps);
        self.from + (self.to - self.from) * p
    }
}

/// Number of frames until a 0 → 1 spring stays within `threshold` of 1.
///
/// The spring must remain inside the threshold for a window of consecutive frames, so an
/// underdamped spring that merely crosses the target is not reported as settled.
pub fn measure_spring(fps: Fps, config: &SpringConfig, threshold: f64) -> LogoResult<u64> {
    config.validate()?;
    fps.validate()?;
    if !threshold.is_finite() || threshold <= 0.0 {
        return Err(LogoError::animation("settle threshold must be finite and > 0"));
    }

    let diff = |f: u64| (spring(f as i64, fps, config) - 1.0).abs();

    let mut frame = 0u64;
    while diff(frame) >= threshold {
        frame += 1;
        if frame > SETTLE_MAX_FRAMES {
            return Err(LogoError::animation(format!(
                "spring did not settle within {SETTLE_MAX_FRAMES} frames"
            )));
        }
    }

    let mut finished = frame;
    let mut quiet = 0u64;
    while quiet < SETTLE_WINDOW_FRAMES {
        frame += 1;
        if frame > SETTLE_MAX_FRAMES {
            return Err(LogoError::animation(format!(
                "spring did not settle within {SETTLE_MAX_FRAMES} frames"
            )));
        }
        if diff(frame) >= threshold {
            quiet = 0;
            finished = frame + 1;
        } else {
            quiet += 1;
        }
    }
    Ok(finished)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
