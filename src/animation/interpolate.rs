use crate::animation::ease::Ease;
use crate::foundation::error::{LogoError, LogoResult};

/// Behavior for inputs outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Saturate at the nearest output bound.
    #[default]
    Clamp,
    /// Continue the mapping past the range.
    Extend,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate_with`] and [`LinearMap`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InterpolateOptions {
    /// Handling of `x` below the input range.
    pub extrapolate_left: Extrapolate,
    /// Handling of `x` above the input range.
    pub extrapolate_right: Extrapolate,
    /// Curve applied to the normalized position inside the range.
    pub ease: Ease,
}

/// A validated mapping from an input range onto an output range.
///
/// Construction fails for empty or inverted input ranges, so [`LinearMap::map`] itself cannot
/// fail and never produces NaN for finite input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    input: [f64; 2],
    output: [f64; 2],
    options: InterpolateOptions,
}

impl LinearMap {
    /// Validate the ranges and build the mapping.
    pub fn new(input: [f64; 2], output: [f64; 2], options: InterpolateOptions) -> LogoResult<Self> {
        if input.iter().chain(output.iter()).any(|v| !v.is_finite()) {
            return Err(LogoError::animation(format!(
                "interpolation ranges must be finite: input={input:?} output={output:?}"
            )));
        }
        if input[0] >= input[1] {
            return Err(LogoError::animation(format!(
                "interpolation input range must be strictly increasing, got [{}, {}]",
                input[0], input[1]
            )));
        }
        Ok(Self {
            input,
            output,
            options,
        })
    }

    /// Clamped (by default) linear mapping with no easing.
    pub fn clamped(input: [f64; 2], output: [f64; 2]) -> LogoResult<Self> {
        Self::new(input, output, InterpolateOptions::default())
    }

    /// Map `x` from the input range onto the output range.
    pub fn map(&self, x: f64) -> f64 {
        let [a, b] = self.input;
        let [c, d] = self.output;

        if x < a {
            match self.options.extrapolate_left {
                Extrapolate::Clamp => return c,
                Extrapolate::Identity => return x,
                Extrapolate::Extend => {}
            }
        }
        if x > b {
            match self.options.extrapolate_right {
                Extrapolate::Clamp => return d,
                Extrapolate::Identity => return x,
                Extrapolate::Extend => {}
            }
        }

        let t = (x - a) / (b - a);
        c + (d - c) * self.options.ease.apply_unclamped(t)
    }

    /// Input range.
    pub fn input(&self) -> [f64; 2] {
        self.input
    }

    /// Output range.
    pub fn output(&self) -> [f64; 2] {
        self.output
    }
}

/// Map `x` from `input` onto `output`, clamping at both ends.
pub fn interpolate(x: f64, input: [f64; 2], output: [f64; 2]) -> LogoResult<f64> {
    interpolate_with(x, input, output, InterpolateOptions::default())
}

/// Map `x` from `input` onto `output` with explicit extrapolation and easing.
pub fn interpolate_with(
    x: f64,
    input: [f64; 2],
    output: [f64; 2],
    options: InterpolateOptions,
) -> LogoResult<f64> {
    Ok(LinearMap::new(input, output, options)?.map(x))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
