//! Distribution statistics over a player's per-game points.
//!
//! All functions are pure and take plain slices so they can be reused
//! outside the report pipeline.

/// Means with an absolute value at or below this are treated as zero when
/// normalising by the mean.
pub const MEAN_EPSILON: f64 = 1e-9;

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Linearly interpolated percentile over an ascending slice.
///
/// `p` is a fraction in `[0, 1]`; values outside are clamped. The rank
/// `(n - 1) * p` is split into its floor and ceiling and the result
/// interpolates between those two elements, matching NumPy's default
/// `linear` method.
///
/// Returns `None` for an empty slice.
pub fn percentile(sorted: &[f64], p: f64) -> Option<f64> {
    match sorted.len() {
        0 => None,
        1 => Some(sorted[0]),
        n => {
            let idx = (n - 1) as f64 * p.clamp(0.0, 1.0);
            let lo = idx.floor() as usize;
            let hi = idx.ceil() as usize;
            if lo == hi {
                return Some(sorted[lo]);
            }
            let frac = idx - lo as f64;
            Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
        }
    }
}

/// Downside semideviation.
///
/// Root-mean-square distance from the mean, taken only over observations
/// strictly below the mean. The divisor is the number of those observations.
/// Fewer than two below-mean observations yield `0.0`.
pub fn lower_semideviation(points: &[f64]) -> f64 {
    let Some(mu) = mean(points) else {
        return 0.0;
    };

    let below: Vec<f64> = points.iter().copied().filter(|&p| p < mu).collect();
    if below.len() <= 1 {
        return 0.0;
    }

    let semivariance = below.iter().map(|b| (mu - b).powi(2)).sum::<f64>() / below.len() as f64;
    semivariance.sqrt()
}

/// Downside deviation normalised by the mean.
///
/// Returns `0.0` when the mean is within [`MEAN_EPSILON`] of zero.
pub fn coefficient_of_variation(deviation: f64, mean: f64) -> f64 {
    if mean.abs() > MEAN_EPSILON {
        deviation / mean
    } else {
        0.0
    }
}

/// Round to one decimal place exactly as `{:.1}` displays the value.
///
/// Keeps the exported numbers identical to the console table.
pub fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
