use crate::{
    animation::ease::Ease,
    foundation::error::{PromoError, PromoResult},
};

/// Behavior of [`interpolate`] outside the declared input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the edge segment past the range.
    #[default]
    Extend,
    /// Hold the edge output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Easing applied to each segment's normalized progress.
    pub easing: Ease,
    /// Behavior below the first breakpoint.
    pub extrapolate_left: Extrapolate,
    /// Behavior above the last breakpoint.
    pub extrapolate_right: Extrapolate,
}

impl Default for InterpolateOpts {
    fn default() -> Self {
        Self {
            easing: Ease::Linear,
            extrapolate_left: Extrapolate::Extend,
            extrapolate_right: Extrapolate::Extend,
        }
    }
}

impl InterpolateOpts {
    /// Clamp on both sides with linear easing.
    pub const fn clamped() -> Self {
        Self {
            easing: Ease::Linear,
            extrapolate_left: Extrapolate::Clamp,
            extrapolate_right: Extrapolate::Clamp,
        }
    }

    /// Replace the easing.
    pub const fn ease(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }

    /// Clamp only past the last breakpoint.
    pub const fn clamp_right(mut self) -> Self {
        self.extrapolate_right = Extrapolate::Clamp;
        self
    }
}

/// Map `input` through the piecewise curve `input_range -> output_range`.
///
/// `input_range` must be strictly increasing, both ranges must have the same length (at least
/// 2) and every breakpoint must be finite.
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> PromoResult<f64> {
    validate_ranges(input_range, output_range)?;
    if input.is_nan() {
        return Err(PromoError::animation("interpolate input must not be NaN"));
    }

    let seg = find_segment(input, input_range);
    Ok(interpolate_segment(
        input,
        [input_range[seg], input_range[seg + 1]],
        [output_range[seg], output_range[seg + 1]],
        opts,
    ))
}

/// Validate breakpoint arrays used by [`interpolate`].
pub fn validate_ranges(input_range: &[f64], output_range: &[f64]) -> PromoResult<()> {
    if input_range.len() != output_range.len() {
        return Err(PromoError::animation(format!(
            "input range ({}) and output range ({}) must have the same length",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.len() < 2 {
        return Err(PromoError::animation(
            "interpolate needs at least 2 breakpoints",
        ));
    }
    if !input_range
        .iter()
        .chain(output_range.iter())
        .all(|v| v.is_finite())
    {
        return Err(PromoError::animation("breakpoints must be finite"));
    }
    if !input_range.windows(2).all(|w| w[0] < w[1]) {
        return Err(PromoError::animation(
            "input range must be strictly increasing",
        ));
    }
    Ok(())
}

fn find_segment(input: f64, input_range: &[f64]) -> usize {
    let last = input_range.len() - 1;
    let mut i = 1;
    while i < last {
        if input_range[i] >= input {
            break;
        }
        i += 1;
    }
    i - 1
}

/// Interpolate over one `[in_min, in_max] -> [out_min, out_max]` segment.
///
/// Degenerate segments (`in_min >= in_max`) behave as a step at `in_max`.
pub(crate) fn interpolate_segment(
    input: f64,
    [in_min, in_max]: [f64; 2],
    [out_min, out_max]: [f64; 2],
    opts: InterpolateOpts,
) -> f64 {
    if in_max <= in_min {
        return if input >= in_max { out_max } else { out_min };
    }

    let mut x = input;

    if x < in_min {
        match opts.extrapolate_left {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_min,
            Extrapolate::Extend => {}
        }
    }
    if x > in_max {
        match opts.extrapolate_right {
            Extrapolate::Identity => return x,
            Extrapolate::Clamp => x = in_max,
            Extrapolate::Extend => {}
        }
    }

    if out_min == out_max {
        return out_min;
    }

    let t = (x - in_min) / (in_max - in_min);
    let te = if (0.0..=1.0).contains(&t) {
        opts.easing.apply(t)
    } else {
        opts.easing.apply_unclamped(t)
    };
    out_min + te * (out_max - out_min)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
