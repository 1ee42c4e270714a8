use anyhow::{Context, Result, bail};

use super::model::{IrisDataset, IrisRecord};

/// The bundled Iris table (150 samples, 3 species, 4 measurements).
const IRIS_CSV: &str = include_str!("../../assets/iris.csv");

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Parse the embedded Iris CSV into an [`IrisDataset`].
///
/// Called once at startup; the result is owned by the app state and
/// never mutated. A parse failure here means the bundled asset is
/// corrupt, which is fatal.
pub fn load_embedded() -> Result<IrisDataset> {
    let dataset = parse_csv(IRIS_CSV).context("parsing bundled iris.csv")?;
    if dataset.is_empty() {
        bail!("bundled iris.csv contains no records");
    }
    log::info!(
        "Loaded {} iris samples across {} species",
        dataset.len(),
        dataset.species.len()
    );
    Ok(dataset)
}

/// Parse CSV text with the standard header
/// `sepal_length,sepal_width,petal_length,petal_width,species`.
fn parse_csv(text: &str) -> Result<IrisDataset> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();

    for (row_no, result) in reader.deserialize::<IrisRecord>().enumerate() {
        let record: IrisRecord = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(record);
    }

    Ok(IrisDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dataset_has_expected_shape() {
        let ds = load_embedded().unwrap();
        assert_eq!(ds.len(), 150);
        assert_eq!(ds.species, vec!["setosa", "versicolor", "virginica"]);
        for species in &ds.species {
            let n = ds.records.iter().filter(|r| &r.species == species).count();
            assert_eq!(n, 50, "expected 50 samples of {species}");
        }
    }

    #[test]
    fn first_and_last_rows_match_source_table() {
        let ds = load_embedded().unwrap();
        let first = &ds.records[0];
        assert_eq!(first.sepal_length, 5.1);
        assert_eq!(first.sepal_width, 3.5);
        assert_eq!(first.species, "setosa");
        let last = &ds.records[149];
        assert_eq!(last.petal_length, 5.1);
        assert_eq!(last.petal_width, 1.8);
        assert_eq!(last.species, "virginica");
    }

    #[test]
    fn malformed_csv_is_an_error() {
        let bad = "sepal_length,sepal_width,petal_length,petal_width,species\n\
                   5.1,oops,1.4,0.2,setosa\n";
        assert!(parse_csv(bad).is_err());
    }
}
