use std::collections::BTreeSet;

use super::model::IrisDataset;

// ---------------------------------------------------------------------------
// Filter predicate: which species are selected
// ---------------------------------------------------------------------------

/// The set of species names currently selected in the sidebar.
/// An empty set means "show nothing"; species names that do not occur
/// in the dataset are simply never matched.
pub type Selection = BTreeSet<String>;

/// A [`Selection`] with every species in the dataset selected (the
/// default on startup).
pub fn full_selection(dataset: &IrisDataset) -> Selection {
    dataset.species.iter().cloned().collect()
}

/// Return indices of records whose species is in the selection,
/// preserving original record order.
pub fn filtered_indices(dataset: &IrisDataset, selection: &Selection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.contains(&rec.species))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_embedded;

    fn selection(names: &[&str]) -> Selection {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn full_selection_matches_every_record() {
        let ds = load_embedded().unwrap();
        let indices = filtered_indices(&ds, &full_selection(&ds));
        assert_eq!(indices, (0..150).collect::<Vec<_>>());
    }

    #[test]
    fn empty_selection_matches_nothing() {
        let ds = load_embedded().unwrap();
        assert!(filtered_indices(&ds, &Selection::new()).is_empty());
    }

    #[test]
    fn single_species_yields_fifty_records() {
        let ds = load_embedded().unwrap();
        let indices = filtered_indices(&ds, &selection(&["setosa"]));
        assert_eq!(indices.len(), 50);
        for &i in &indices {
            assert_eq!(ds.records[i].species, "setosa");
        }
    }

    #[test]
    fn two_species_yield_hundred_records_in_order() {
        let ds = load_embedded().unwrap();
        let indices = filtered_indices(&ds, &selection(&["setosa", "versicolor"]));
        assert_eq!(indices.len(), 100);
        assert!(indices.windows(2).all(|w| w[0] < w[1]));
        for &i in &indices {
            let sp = ds.records[i].species.as_str();
            assert!(sp == "setosa" || sp == "versicolor");
        }
    }

    #[test]
    fn unknown_species_are_ignored() {
        let ds = load_embedded().unwrap();
        let indices = filtered_indices(&ds, &selection(&["virginica", "tulip"]));
        assert_eq!(indices.len(), 50);
    }
}
