use crate::data::model::{Feature, IrisDataset};
use crate::data::summary::{correlation_matrix, percentile_sorted};

/// Fixed histogram bin count, matching the dashboard's distribution view.
pub const HISTOGRAM_BINS: usize = 20;

// ---------------------------------------------------------------------------
// Chart specifications
// ---------------------------------------------------------------------------
//
// Each builder is a pure function of the dataset, the filtered indices
// and the user's feature choices. Rendering lives in `ui::plot`; an
// empty filtered view produces an empty spec, never an error.

/// Binned counts of one feature for a single species.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub species: String,
    /// One count per bin, `HISTOGRAM_BINS` long.
    pub counts: Vec<usize>,
}

/// Histogram of one feature, split per species over shared bin edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub feature: Feature,
    /// Ascending bin edges, `HISTOGRAM_BINS + 1` long; empty when the
    /// filtered view is empty.
    pub edges: Vec<f64>,
    pub series: Vec<HistogramSeries>,
}

/// Five-number summary of one species' values with Tukey whiskers.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxGroup {
    pub species: String,
    /// Smallest value within 1.5·IQR below q1.
    pub lower_whisker: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    /// Largest value within 1.5·IQR above q3.
    pub upper_whisker: f64,
    /// Values beyond the whiskers.
    pub outliers: Vec<f64>,
}

/// Box plot of one feature, one box per species.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxPlot {
    pub feature: Feature,
    pub groups: Vec<BoxGroup>,
}

/// Scatter points of one species for a feature pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGroup {
    pub species: String,
    pub points: Vec<[f64; 2]>,
}

/// 2D scatter of two features, grouped per species.
#[derive(Debug, Clone, PartialEq)]
pub struct Scatter {
    pub x: Feature,
    pub y: Feature,
    pub groups: Vec<ScatterGroup>,
}

/// One cell of the pairwise matrix: a distribution on the diagonal, a
/// feature-pair scatter elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub enum PairPanel {
    Distribution(Histogram),
    Relation(Scatter),
}

/// The full 4×4 pairwise matrix, row-major in canonical feature order.
#[derive(Debug, Clone, PartialEq)]
pub struct Pairwise {
    pub panels: Vec<PairPanel>,
}

/// Pearson correlation heatmap over the four features.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationHeatmap {
    pub features: [Feature; 4],
    pub matrix: [[f64; 4]; 4],
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Species present in the filtered view, in dataset order.
fn species_in_view<'a>(dataset: &'a IrisDataset, indices: &[usize]) -> Vec<&'a str> {
    dataset
        .species
        .iter()
        .map(String::as_str)
        .filter(|sp| indices.iter().any(|&i| dataset.records[i].species == *sp))
        .collect()
}

fn species_values(
    dataset: &IrisDataset,
    indices: &[usize],
    species: &str,
    feature: Feature,
) -> Vec<f64> {
    indices
        .iter()
        .map(|&i| &dataset.records[i])
        .filter(|rec| rec.species == species)
        .map(|rec| feature.value(rec))
        .collect()
}

/// Histogram of `feature` over the filtered view, 20 equal-width bins
/// spanning the observed range, counts split per species.
pub fn histogram(dataset: &IrisDataset, indices: &[usize], feature: Feature) -> Histogram {
    let values: Vec<f64> = indices
        .iter()
        .map(|&i| feature.value(&dataset.records[i]))
        .collect();
    if values.is_empty() {
        return Histogram {
            feature,
            edges: Vec::new(),
            series: Vec::new(),
        };
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    // All-equal values still get a visible bin.
    let (min, max) = if max > min { (min, max) } else { (min - 0.5, max + 0.5) };
    let width = (max - min) / HISTOGRAM_BINS as f64;

    let edges: Vec<f64> = (0..=HISTOGRAM_BINS)
        .map(|i| min + width * i as f64)
        .collect();

    let bin_of = |v: f64| -> usize {
        (((v - min) / width) as usize).min(HISTOGRAM_BINS - 1)
    };

    let series = species_in_view(dataset, indices)
        .into_iter()
        .map(|sp| {
            let mut counts = vec![0usize; HISTOGRAM_BINS];
            for v in species_values(dataset, indices, sp, feature) {
                counts[bin_of(v)] += 1;
            }
            HistogramSeries {
                species: sp.to_string(),
                counts,
            }
        })
        .collect();

    Histogram {
        feature,
        edges,
        series,
    }
}

/// Box plot of `feature`, one box per species in the filtered view.
/// Whiskers reach the most extreme values within 1.5·IQR of the box;
/// values beyond them are reported as outliers.
pub fn box_plot(dataset: &IrisDataset, indices: &[usize], feature: Feature) -> BoxPlot {
    let groups = species_in_view(dataset, indices)
        .into_iter()
        .map(|sp| {
            let mut values = species_values(dataset, indices, sp, feature);
            values.sort_by(f64::total_cmp);

            let q1 = percentile_sorted(&values, 0.25);
            let median = percentile_sorted(&values, 0.5);
            let q3 = percentile_sorted(&values, 0.75);
            let iqr = q3 - q1;
            let lo_fence = q1 - 1.5 * iqr;
            let hi_fence = q3 + 1.5 * iqr;

            let inside: Vec<f64> = values
                .iter()
                .copied()
                .filter(|v| *v >= lo_fence && *v <= hi_fence)
                .collect();
            let outliers: Vec<f64> = values
                .iter()
                .copied()
                .filter(|v| *v < lo_fence || *v > hi_fence)
                .collect();

            // inside is never empty: q1..q3 values always pass the fences
            BoxGroup {
                species: sp.to_string(),
                lower_whisker: inside[0],
                q1,
                median,
                q3,
                upper_whisker: inside[inside.len() - 1],
                outliers,
            }
        })
        .collect();

    BoxPlot { feature, groups }
}

/// 2D scatter of `x` against `y`, points grouped per species.
pub fn scatter(dataset: &IrisDataset, indices: &[usize], x: Feature, y: Feature) -> Scatter {
    let groups = species_in_view(dataset, indices)
        .into_iter()
        .map(|sp| {
            let points = indices
                .iter()
                .map(|&i| &dataset.records[i])
                .filter(|rec| rec.species == sp)
                .map(|rec| [x.value(rec), y.value(rec)])
                .collect();
            ScatterGroup {
                species: sp.to_string(),
                points,
            }
        })
        .collect();

    Scatter { x, y, groups }
}

/// 4×4 pairwise matrix: distributions on the diagonal, scatters of
/// (column feature, row feature) elsewhere.
pub fn pairwise(dataset: &IrisDataset, indices: &[usize]) -> Pairwise {
    let mut panels = Vec::with_capacity(Feature::ALL.len() * Feature::ALL.len());
    for row in Feature::ALL {
        for col in Feature::ALL {
            if row == col {
                panels.push(PairPanel::Distribution(histogram(dataset, indices, row)));
            } else {
                panels.push(PairPanel::Relation(scatter(dataset, indices, col, row)));
            }
        }
    }
    Pairwise { panels }
}

/// Pearson correlation heatmap over the filtered view.
pub fn correlation_heatmap(dataset: &IrisDataset, indices: &[usize]) -> CorrelationHeatmap {
    CorrelationHeatmap {
        features: Feature::ALL,
        matrix: correlation_matrix(dataset, indices),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{Selection, filtered_indices, full_selection};
    use crate::data::loader::load_embedded;

    #[test]
    fn histogram_counts_sum_to_view_size() {
        let ds = load_embedded().unwrap();
        let all = filtered_indices(&ds, &full_selection(&ds));
        let h = histogram(&ds, &all, Feature::PetalLength);
        assert_eq!(h.edges.len(), HISTOGRAM_BINS + 1);
        assert_eq!(h.series.len(), 3);
        let total: usize = h
            .series
            .iter()
            .map(|s| s.counts.iter().sum::<usize>())
            .sum();
        assert_eq!(total, 150);
        assert!(h.edges.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn histogram_of_empty_view_is_empty() {
        let ds = load_embedded().unwrap();
        let h = histogram(&ds, &[], Feature::SepalWidth);
        assert!(h.edges.is_empty());
        assert!(h.series.is_empty());
    }

    #[test]
    fn box_groups_are_ordered_and_cover_one_species_each() {
        let ds = load_embedded().unwrap();
        let all = filtered_indices(&ds, &full_selection(&ds));
        let b = box_plot(&ds, &all, Feature::SepalLength);
        assert_eq!(b.groups.len(), 3);
        for g in &b.groups {
            assert!(g.lower_whisker <= g.q1);
            assert!(g.q1 <= g.median);
            assert!(g.median <= g.q3);
            assert!(g.q3 <= g.upper_whisker);
            for v in &g.outliers {
                assert!(*v < g.lower_whisker || *v > g.upper_whisker);
            }
        }
    }

    #[test]
    fn tukey_fences_separate_outliers_from_whiskers() {
        use crate::data::model::{IrisDataset, IrisRecord};

        let records: Vec<IrisRecord> = [1.0, 10.0, 10.1, 10.2, 10.3, 10.4, 25.0]
            .into_iter()
            .map(|v| IrisRecord {
                sepal_length: v,
                sepal_width: 3.0,
                petal_length: 1.5,
                petal_width: 0.2,
                species: "setosa".to_string(),
            })
            .collect();
        let ds = IrisDataset::from_records(records);
        let idx: Vec<usize> = (0..ds.len()).collect();

        // q1 = 10.05, q3 = 10.35, fences at 9.6 and 10.8
        let b = box_plot(&ds, &idx, Feature::SepalLength);
        assert_eq!(b.groups.len(), 1);
        let g = &b.groups[0];
        assert_eq!(g.lower_whisker, 10.0);
        assert_eq!(g.upper_whisker, 10.4);
        assert_eq!(g.outliers, vec![1.0, 25.0]);
    }

    #[test]
    fn scatter_groups_partition_the_view() {
        let ds = load_embedded().unwrap();
        let sel: Selection = ["setosa".to_string(), "virginica".to_string()].into();
        let idx = filtered_indices(&ds, &sel);
        let s = scatter(&ds, &idx, Feature::SepalLength, Feature::PetalWidth);
        assert_eq!(s.groups.len(), 2);
        let total: usize = s.groups.iter().map(|g| g.points.len()).sum();
        assert_eq!(total, 100);
        assert_eq!(s.groups[0].species, "setosa");
        assert_eq!(s.groups[0].points[0], [5.1, 0.2]);
    }

    #[test]
    fn pairwise_has_sixteen_panels_with_distribution_diagonal() {
        let ds = load_embedded().unwrap();
        let all = filtered_indices(&ds, &full_selection(&ds));
        let p = pairwise(&ds, &all);
        assert_eq!(p.panels.len(), 16);
        for (i, panel) in p.panels.iter().enumerate() {
            let (row, col) = (i / 4, i % 4);
            match panel {
                PairPanel::Distribution(h) => {
                    assert_eq!(row, col);
                    assert_eq!(h.feature, Feature::ALL[row]);
                }
                PairPanel::Relation(s) => {
                    assert_ne!(row, col);
                    assert_eq!(s.x, Feature::ALL[col]);
                    assert_eq!(s.y, Feature::ALL[row]);
                }
            }
        }
    }

    #[test]
    fn empty_view_yields_empty_specs_everywhere() {
        let ds = load_embedded().unwrap();
        assert!(box_plot(&ds, &[], Feature::PetalWidth).groups.is_empty());
        assert!(scatter(&ds, &[], Feature::SepalLength, Feature::SepalWidth)
            .groups
            .is_empty());
        let hm = correlation_heatmap(&ds, &[]);
        assert!(hm.matrix.iter().flatten().all(|v| v.is_nan()));
    }
}
