//! Aggregations over numeric columns.

use survey_model::{
    AnalysisError, CategoricalColumn, Correlation, Histogram, HistogramBin, NumericColumn,
    Result, Scatter, ScatterPoint, SurveyTable,
};
use tracing::debug;

use crate::stats::{PearsonUndefined, mean, pearson, round2};

/// Bucketed counts over the range of a numeric column.
///
/// Buckets have equal width over `[min, max]`; the last bucket is closed on
/// the right. A column holding a single distinct value is bucketed over
/// `[value - 0.5, value + 0.5]`. A bin count of zero is treated as one.
///
/// # Errors
///
/// `MissingColumn` when the column is absent, `EmptyData` when every value
/// is null.
pub fn numeric_histogram(
    table: &SurveyTable,
    column: NumericColumn,
    bins: usize,
) -> Result<Histogram> {
    let raw = table.numeric(column)?;
    let values: Vec<f64> = raw.iter().flatten().copied().collect();
    if values.is_empty() {
        return Err(AnalysisError::empty(column.name()));
    }
    let bins = bins.max(1);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (low, high) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (high - low) / bins as f64;

    let mut counts = vec![0usize; bins];
    for value in &values {
        let idx = (((value - low) / width).floor() as usize).min(bins - 1);
        counts[idx] += 1;
    }
    let buckets = counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: low + width * idx as f64,
            upper: if idx + 1 == bins {
                high
            } else {
                low + width * (idx + 1) as f64
            },
            count,
        })
        .collect();

    let observations = values.len();
    debug!(column = column.name(), observations, bins, "histogram computed");
    Ok(Histogram {
        column: column.name(),
        bins: buckets,
        observations,
        excluded: raw.len() - observations,
        mean: mean(&values).unwrap_or_default(),
        min,
        max,
    })
}

/// Pearson correlation over rows where both columns are non-null, rounded
/// to two decimal places.
///
/// # Errors
///
/// `MissingColumn` when either column is absent. `UndefinedStatistic` when
/// fewer than two complete pairs exist or either column is constant over
/// those pairs.
pub fn pearson_correlation(
    table: &SurveyTable,
    x: NumericColumn,
    y: NumericColumn,
) -> Result<Correlation> {
    let xs = table.numeric(x)?;
    let ys = table.numeric(y)?;
    let pairs = complete_pairs(xs, ys);

    let coefficient = pearson(&pairs).map_err(|reason| undefined_correlation(x, y, reason))?;
    Ok(Correlation {
        x_column: x.name(),
        y_column: y.name(),
        coefficient: round2(coefficient),
        observations: pairs.len(),
        excluded: xs.len() - pairs.len(),
    })
}

/// Paired points of two numeric columns with optional hue and size encodings.
///
/// Rows missing either coordinate are excluded; a null hue or size only
/// drops that encoding for the point.
///
/// # Errors
///
/// `MissingColumn` when any requested column is absent, `EmptyData` when no
/// row has both coordinates.
pub fn scatter_series(
    table: &SurveyTable,
    x: NumericColumn,
    y: NumericColumn,
    hue: Option<CategoricalColumn>,
    size: Option<NumericColumn>,
) -> Result<Scatter> {
    let xs = table.numeric(x)?;
    let ys = table.numeric(y)?;
    let hues = hue.map(|column| table.categorical(column)).transpose()?;
    let sizes = size.map(|column| table.numeric(column)).transpose()?;

    let mut points = Vec::new();
    for (row, (x_value, y_value)) in xs.iter().zip(ys).enumerate() {
        let (Some(x_value), Some(y_value)) = (x_value, y_value) else {
            continue;
        };
        points.push(ScatterPoint {
            x: *x_value,
            y: *y_value,
            hue: hues.and_then(|values| values[row].clone()),
            size: sizes.and_then(|values| values[row]),
        });
    }
    if points.is_empty() {
        let column = if xs.iter().all(Option::is_none) { x } else { y };
        return Err(AnalysisError::empty(column.name()));
    }

    let pairs: Vec<(f64, f64)> = points.iter().map(|p| (p.x, p.y)).collect();
    let correlation = pearson(&pairs).ok().map(round2);
    Ok(Scatter {
        x_column: x.name(),
        y_column: y.name(),
        hue_column: hue.map(|column| column.name()),
        size_column: size.map(|column| column.name()),
        excluded: xs.len() - points.len(),
        points,
        correlation,
    })
}

fn complete_pairs(xs: &[Option<f64>], ys: &[Option<f64>]) -> Vec<(f64, f64)> {
    xs.iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect()
}

fn undefined_correlation(
    x: NumericColumn,
    y: NumericColumn,
    reason: PearsonUndefined,
) -> AnalysisError {
    let detail = match reason {
        PearsonUndefined::TooFewPairs => "fewer than 2 paired observations".to_string(),
        PearsonUndefined::ConstantX => format!("zero variance in {}", x.name()),
        PearsonUndefined::ConstantY => format!("zero variance in {}", y.name()),
        PearsonUndefined::ConstantBoth => {
            let mut names = [x.name(), y.name()];
            names.sort_unstable();
            format!("zero variance in {} and {}", names[0], names[1])
        }
        PearsonUndefined::NonFinite => "coefficient is not finite".to_string(),
    };
    AnalysisError::undefined("correlation", detail)
}
