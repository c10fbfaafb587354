//! Small numeric helpers shared by the aggregations.

/// Arithmetic mean, `None` for an empty slice.
pub(crate) fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Linear-interpolated quantile of an ascending, non-empty slice.
pub(crate) fn quantile(sorted: &[f64], q: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return sorted[lower];
    }
    let fraction = position - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

/// Why a Pearson coefficient could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PearsonUndefined {
    TooFewPairs,
    ConstantX,
    ConstantY,
    ConstantBoth,
    NonFinite,
}

/// Pearson coefficient of paired observations.
///
/// Constant inputs are detected by comparing values directly rather than by
/// testing the computed variance against zero, which rounding can miss.
/// Deviations are scaled by their largest magnitude before the sums of
/// squares so extreme but finite inputs neither overflow nor underflow.
pub(crate) fn pearson(pairs: &[(f64, f64)]) -> Result<f64, PearsonUndefined> {
    if pairs.len() < 2 {
        return Err(PearsonUndefined::TooFewPairs);
    }
    let (x0, y0) = pairs[0];
    let constant_x = pairs.iter().all(|(x, _)| *x == x0);
    let constant_y = pairs.iter().all(|(_, y)| *y == y0);
    match (constant_x, constant_y) {
        (true, true) => return Err(PearsonUndefined::ConstantBoth),
        (true, false) => return Err(PearsonUndefined::ConstantX),
        (false, true) => return Err(PearsonUndefined::ConstantY),
        (false, false) => {}
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x / n).sum::<f64>();
    let mean_y = pairs.iter().map(|(_, y)| y / n).sum::<f64>();
    let scale_x = max_deviation(pairs.iter().map(|(x, _)| x - mean_x));
    let scale_y = max_deviation(pairs.iter().map(|(_, y)| y - mean_y));
    let mut sxy = 0.0;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    for (x, y) in pairs {
        let dx = (x - mean_x) / scale_x;
        let dy = (y - mean_y) / scale_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    let r = sxy / (sxx.sqrt() * syy.sqrt());
    if r.is_finite() {
        Ok(r.clamp(-1.0, 1.0))
    } else {
        Err(PearsonUndefined::NonFinite)
    }
}

fn max_deviation(deviations: impl Iterator<Item = f64>) -> f64 {
    deviations.map(f64::abs).fold(0.0, f64::max)
}

/// Rounds half away from zero to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
