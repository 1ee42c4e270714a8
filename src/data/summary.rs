use super::model::{Feature, IrisDataset};

// ---------------------------------------------------------------------------
// Descriptive statistics over the filtered view
// ---------------------------------------------------------------------------

/// Descriptive statistics for one numeric feature.
///
/// Conventions: sample standard deviation (Bessel's correction) and
/// percentiles by linear interpolation between order statistics, i.e.
/// the values a pandas `describe()` would report. With no rows every
/// field except `count` is NaN; with one row `std` is NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureSummary {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FeatureSummary {
    fn empty() -> Self {
        FeatureSummary {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q1: f64::NAN,
            median: f64::NAN,
            q3: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Summarise one feature over the given record indices.
pub fn summarize_feature(
    dataset: &IrisDataset,
    indices: &[usize],
    feature: Feature,
) -> FeatureSummary {
    let mut values: Vec<f64> = indices
        .iter()
        .map(|&i| feature.value(&dataset.records[i]))
        .collect();
    if values.is_empty() {
        return FeatureSummary::empty();
    }
    values.sort_by(f64::total_cmp);

    FeatureSummary {
        count: values.len(),
        mean: mean(&values),
        std: sample_std(&values),
        min: values[0],
        q1: percentile_sorted(&values, 0.25),
        median: percentile_sorted(&values, 0.5),
        q3: percentile_sorted(&values, 0.75),
        max: values[values.len() - 1],
    }
}

/// Summarise all four features over the given record indices, in
/// canonical feature order.
pub fn summarize(dataset: &IrisDataset, indices: &[usize]) -> Vec<(Feature, FeatureSummary)> {
    Feature::ALL
        .iter()
        .map(|&f| (f, summarize_feature(dataset, indices, f)))
        .collect()
}

// ---------------------------------------------------------------------------
// Numeric primitives
// ---------------------------------------------------------------------------

/// Arithmetic mean. NaN on an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1 denominator). NaN with fewer than
/// two values.
pub fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Percentile of an ascending-sorted slice by linear interpolation at
/// rank `q * (n - 1)`, for `q` in `[0, 1]`. NaN on an empty slice.
pub fn percentile_sorted(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let rank = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lo = rank.floor() as usize;
            let hi = rank.ceil() as usize;
            let frac = rank - lo as f64;
            sorted[lo] + (sorted[hi] - sorted[lo]) * frac
        }
    }
}

// ---------------------------------------------------------------------------
// Pearson correlation (heatmap input)
// ---------------------------------------------------------------------------

/// Pearson correlation coefficient of two equal-length series. NaN
/// with fewer than two points or when either series has zero variance.
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());
    if xs.len() < 2 {
        return f64::NAN;
    }
    let mx = mean(xs);
    let my = mean(ys);
    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        cov += (x - mx) * (y - my);
        var_x += (x - mx) * (x - mx);
        var_y += (y - my) * (y - my);
    }
    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return f64::NAN;
    }
    cov / denom
}

/// 4×4 Pearson correlation matrix over the filtered view, indexed in
/// canonical feature order.
pub fn correlation_matrix(dataset: &IrisDataset, indices: &[usize]) -> [[f64; 4]; 4] {
    let columns: Vec<Vec<f64>> = Feature::ALL
        .iter()
        .map(|f| indices.iter().map(|&i| f.value(&dataset.records[i])).collect())
        .collect();

    let mut matrix = [[f64::NAN; 4]; 4];
    for (r, row) in matrix.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = pearson(&columns[r], &columns[c]);
        }
    }
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{Selection, filtered_indices, full_selection};
    use crate::data::loader::load_embedded;
    use crate::data::model::Feature;

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn percentile_interpolates_linearly() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert!(close(percentile_sorted(&v, 0.25), 1.75, 1e-12));
        assert!(close(percentile_sorted(&v, 0.5), 2.5, 1e-12));
        assert!(close(percentile_sorted(&v, 0.75), 3.25, 1e-12));
        assert_eq!(percentile_sorted(&v, 0.0), 1.0);
        assert_eq!(percentile_sorted(&v, 1.0), 4.0);
        assert_eq!(percentile_sorted(&[7.0], 0.5), 7.0);
        assert!(percentile_sorted(&[], 0.5).is_nan());
    }

    #[test]
    fn std_uses_bessel_correction() {
        // variance of [2, 4, 4, 4, 5, 5, 7, 9] about mean 5 is 32/7 sample-wise
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(close(sample_std(&v), (32.0_f64 / 7.0).sqrt(), 1e-12));
        assert!(sample_std(&[3.0]).is_nan());
    }

    #[test]
    fn known_iris_aggregates() {
        let ds = load_embedded().unwrap();
        let all = filtered_indices(&ds, &full_selection(&ds));
        let s = summarize_feature(&ds, &all, Feature::SepalLength);
        assert_eq!(s.count, 150);
        assert!(close(s.mean, 5.8433, 1e-3));
        assert!(close(s.std, 0.8281, 1e-3));
        assert_eq!(s.min, 4.3);
        assert_eq!(s.max, 7.9);
        assert!(close(s.median, 5.8, 1e-12));

        let setosa: Selection = ["setosa".to_string()].into();
        let idx = filtered_indices(&ds, &setosa);
        let s = summarize_feature(&ds, &idx, Feature::SepalLength);
        assert_eq!(s.count, 50);
        assert!(close(s.mean, 5.006, 1e-3));
    }

    #[test]
    fn every_feature_counts_the_filtered_rows() {
        let ds = load_embedded().unwrap();
        let setosa: Selection = ["setosa".to_string()].into();
        let idx = filtered_indices(&ds, &setosa);
        for (_, s) in summarize(&ds, &idx) {
            assert_eq!(s.count, 50);
        }
    }

    #[test]
    fn empty_view_is_all_nan_without_panicking() {
        let ds = load_embedded().unwrap();
        for (_, s) in summarize(&ds, &[]) {
            assert_eq!(s.count, 0);
            assert!(s.mean.is_nan());
            assert!(s.std.is_nan());
            assert!(s.min.is_nan());
            assert!(s.q1.is_nan());
            assert!(s.median.is_nan());
            assert!(s.q3.is_nan());
            assert!(s.max.is_nan());
        }
        let m = correlation_matrix(&ds, &[]);
        assert!(m.iter().flatten().all(|v| v.is_nan()));
    }

    #[test]
    fn summary_is_deterministic() {
        let ds = load_embedded().unwrap();
        let all = filtered_indices(&ds, &full_selection(&ds));
        assert_eq!(summarize(&ds, &all), summarize(&ds, &all));
    }

    #[test]
    fn correlation_matrix_is_symmetric_with_unit_diagonal() {
        let ds = load_embedded().unwrap();
        let all = filtered_indices(&ds, &full_selection(&ds));
        let m = correlation_matrix(&ds, &all);
        for i in 0..4 {
            assert!(close(m[i][i], 1.0, 1e-12));
            for j in 0..4 {
                assert!(close(m[i][j], m[j][i], 1e-12));
            }
        }
        // petal length and width are famously near-collinear
        assert!(m[2][3] > 0.95);
    }

    #[test]
    fn pearson_degenerate_inputs_are_nan() {
        assert!(pearson(&[1.0], &[2.0]).is_nan());
        assert!(pearson(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).is_nan());
    }
}
