use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Feature – one of the four numeric measurement columns
// ---------------------------------------------------------------------------

/// The four numeric measurement columns of the Iris table, in canonical
/// column order. Doubles as the axis choice for every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Feature {
    SepalLength,
    SepalWidth,
    PetalLength,
    PetalWidth,
}

impl Feature {
    /// Canonical column order, matching the source table.
    pub const ALL: [Feature; 4] = [
        Feature::SepalLength,
        Feature::SepalWidth,
        Feature::PetalLength,
        Feature::PetalWidth,
    ];

    /// Column name as it appears in the dataset header.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::SepalLength => "sepal_length",
            Feature::SepalWidth => "sepal_width",
            Feature::PetalLength => "petal_length",
            Feature::PetalWidth => "petal_width",
        }
    }

    /// Human-readable axis label, units included.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::SepalLength => "Sepal length (cm)",
            Feature::SepalWidth => "Sepal width (cm)",
            Feature::PetalLength => "Petal length (cm)",
            Feature::PetalWidth => "Petal width (cm)",
        }
    }

    /// Read this feature's value out of a record.
    pub fn value(&self, record: &IrisRecord) -> f64 {
        match self {
            Feature::SepalLength => record.sepal_length,
            Feature::SepalWidth => record.sepal_width,
            Feature::PetalLength => record.petal_length,
            Feature::PetalWidth => record.petal_width,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// IrisRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single flower sample (one row of the source table). Immutable once
/// loaded.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct IrisRecord {
    pub sepal_length: f64,
    pub sepal_width: f64,
    pub petal_length: f64,
    pub petal_width: f64,
    pub species: String,
}

// ---------------------------------------------------------------------------
// IrisDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with the distinct species pre-computed.
/// Built once at startup and treated as read-only afterwards.
#[derive(Debug, Clone)]
pub struct IrisDataset {
    /// All samples (rows), in file order.
    pub records: Vec<IrisRecord>,
    /// Distinct species labels in first-appearance order.
    pub species: Vec<String>,
}

impl IrisDataset {
    /// Build the species index from the loaded records.
    pub fn from_records(records: Vec<IrisRecord>) -> Self {
        let mut species: Vec<String> = Vec::new();
        for rec in &records {
            if !species.iter().any(|s| s == &rec.species) {
                species.push(rec.species.clone());
            }
        }
        IrisDataset { records, species }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(species: &str) -> IrisRecord {
        IrisRecord {
            sepal_length: 5.0,
            sepal_width: 3.0,
            petal_length: 1.5,
            petal_width: 0.2,
            species: species.to_string(),
        }
    }

    #[test]
    fn species_index_keeps_first_appearance_order() {
        let ds = IrisDataset::from_records(vec![
            record("virginica"),
            record("setosa"),
            record("virginica"),
            record("versicolor"),
        ]);
        assert_eq!(ds.species, vec!["virginica", "setosa", "versicolor"]);
        assert_eq!(ds.len(), 4);
    }

    #[test]
    fn feature_accessors_match_fields() {
        let rec = IrisRecord {
            sepal_length: 5.1,
            sepal_width: 3.5,
            petal_length: 1.4,
            petal_width: 0.2,
            species: "setosa".to_string(),
        };
        assert_eq!(Feature::SepalLength.value(&rec), 5.1);
        assert_eq!(Feature::SepalWidth.value(&rec), 3.5);
        assert_eq!(Feature::PetalLength.value(&rec), 1.4);
        assert_eq!(Feature::PetalWidth.value(&rec), 0.2);
        assert_eq!(Feature::ALL.len(), 4);
    }
}
