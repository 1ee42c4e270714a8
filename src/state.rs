use crate::anim::AnimationMeta;
use crate::color::SpeciesColors;
use crate::data::filter::{Selection, filtered_indices, full_selection};
use crate::data::model::{Feature, IrisDataset};

// ---------------------------------------------------------------------------
// Chart tabs
// ---------------------------------------------------------------------------

/// The five visualization tabs of the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartTab {
    Histogram,
    BoxPlot,
    Scatter,
    Pairwise,
    Heatmap,
}

impl ChartTab {
    pub const ALL: [ChartTab; 5] = [
        ChartTab::Histogram,
        ChartTab::BoxPlot,
        ChartTab::Scatter,
        ChartTab::Pairwise,
        ChartTab::Heatmap,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ChartTab::Histogram => "Histogram",
            ChartTab::BoxPlot => "Box Plot",
            ChartTab::Scatter => "Scatter (2D)",
            ChartTab::Pairwise => "Pairwise",
            ChartTab::Heatmap => "Correlation Heatmap",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The dataset, loaded once at startup and read-only afterwards.
    pub dataset: IrisDataset,

    /// Species currently selected in the sidebar.
    pub selection: Selection,

    /// Indices of records passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Stable species → colour assignment.
    pub colors: SpeciesColors,

    /// Decorative header animation metadata, when the fetch succeeded.
    pub animation: Option<AnimationMeta>,

    /// Active visualization tab.
    pub active_tab: ChartTab,

    /// Per-chart feature choices.
    pub hist_feature: Feature,
    pub box_feature: Feature,
    pub scatter_x: Feature,
    pub scatter_y: Feature,
}

impl AppState {
    /// Build the initial state: all species selected, everything
    /// visible, default feature choices.
    pub fn new(dataset: IrisDataset, animation: Option<AnimationMeta>) -> Self {
        let selection = full_selection(&dataset);
        let visible_indices = (0..dataset.len()).collect();
        let colors = SpeciesColors::new(&dataset.species);

        AppState {
            dataset,
            selection,
            visible_indices,
            colors,
            animation,
            active_tab: ChartTab::Histogram,
            hist_feature: Feature::SepalLength,
            box_feature: Feature::SepalLength,
            scatter_x: Feature::SepalLength,
            scatter_y: Feature::SepalWidth,
        }
    }

    /// Recompute `visible_indices` after a selection change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.selection);
    }

    /// Toggle a single species in the selection.
    pub fn toggle_species(&mut self, species: &str) {
        if !self.selection.remove(species) {
            self.selection.insert(species.to_string());
        }
        self.refilter();
    }

    /// Select every species.
    pub fn select_all(&mut self) {
        self.selection = full_selection(&self.dataset);
        self.refilter();
    }

    /// Clear the selection (empty filtered view).
    pub fn select_none(&mut self) {
        self.selection.clear();
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_embedded;

    #[test]
    fn starts_with_everything_visible() {
        let state = AppState::new(load_embedded().unwrap(), None);
        assert_eq!(state.selection.len(), 3);
        assert_eq!(state.visible_indices.len(), 150);
        assert_eq!(state.active_tab, ChartTab::Histogram);
    }

    #[test]
    fn toggling_a_species_narrows_then_restores_the_view() {
        let mut state = AppState::new(load_embedded().unwrap(), None);
        state.toggle_species("setosa");
        assert_eq!(state.visible_indices.len(), 100);
        assert!(!state.selection.contains("setosa"));
        state.toggle_species("setosa");
        assert_eq!(state.visible_indices.len(), 150);
    }

    #[test]
    fn select_none_then_all_round_trips() {
        let mut state = AppState::new(load_embedded().unwrap(), None);
        state.select_none();
        assert!(state.visible_indices.is_empty());
        state.select_all();
        assert_eq!(state.visible_indices.len(), 150);
    }
}
