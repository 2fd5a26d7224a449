use crate::color::ColorMap;
use crate::data::filter::{filtered_indices, init_filter_state, FilterState};
use crate::data::metrics::Metrics;
use crate::data::model::LaptopDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// `dataset` is the long-lived, read-only handle to the loaded table; every
/// widget interaction recomputes the derived view (`visible_indices` and
/// `metrics`) from it in full. Charts and the table only ever read the cache.
pub struct AppState {
    /// Loaded dataset, immutable until File → Open… replaces it wholesale.
    pub dataset: LaptopDataset,

    /// Current sidebar selections.
    pub filters: FilterState,

    /// Indices of laptops passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Headline figures over the filtered view (cached).
    pub metrics: Metrics,

    /// Colours for Company series (histogram box plot, RAM scatter, swatches).
    pub company_colors: ColorMap,

    /// Colours for TypeName series (weight scatter, swatches).
    pub type_colors: ColorMap,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state around a freshly loaded dataset: all filters
    /// inclusive, every row visible.
    pub fn new(dataset: LaptopDataset) -> Self {
        let filters = init_filter_state(&dataset);
        let visible_indices: Vec<usize> = (0..dataset.len()).collect();
        let metrics = Metrics::compute(&dataset, &visible_indices);
        let company_colors = ColorMap::new(&dataset.companies);
        let type_colors = ColorMap::new(&dataset.type_names);

        Self {
            dataset,
            filters,
            visible_indices,
            metrics,
            company_colors,
            type_colors,
            status_message: None,
        }
    }

    /// Replace the dataset (File → Open…) and reset filters and colours.
    pub fn set_dataset(&mut self, dataset: LaptopDataset) {
        *self = AppState::new(dataset);
    }

    /// Recompute the derived view after a filter change.
    pub fn refilter(&mut self) {
        self.visible_indices = filtered_indices(&self.dataset, &self.filters);
        self.metrics = Metrics::compute(&self.dataset, &self.visible_indices);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::laptop;

    fn scenario_state() -> AppState {
        AppState::new(LaptopDataset::from_laptops(vec![
            laptop(1, "Acer", "Notebook", 8, 500.0),
            laptop(2, "Dell", "Ultrabook", 16, 1200.0),
            laptop(3, "Acer", "Ultrabook", 8, 800.0),
        ]))
    }

    #[test]
    fn new_state_shows_everything() {
        let state = scenario_state();
        assert_eq!(state.visible_indices, [0, 1, 2]);
        assert_eq!(state.metrics.count, 3);
        assert_eq!(state.filters.max_price, 1200.0);
    }

    #[test]
    fn refilter_updates_indices_and_metrics_together() {
        let mut state = scenario_state();
        state.filters.companies.remove("Dell");
        state.filters.max_price = 800.0;
        state.refilter();

        assert_eq!(state.visible_indices, [0, 2]);
        assert_eq!(state.metrics.count, 2);
        assert_eq!(state.metrics.mean_price, Some(650.0));
    }

    #[test]
    fn set_dataset_resets_the_filters() {
        let mut state = scenario_state();
        state.filters.companies.clear();
        state.refilter();
        assert_eq!(state.metrics.count, 0);

        state.set_dataset(LaptopDataset::from_laptops(vec![laptop(
            1, "HP", "Gaming", 32, 2000.0,
        )]));
        assert_eq!(state.visible_indices, [0]);
        assert!(state.filters.companies.contains("HP"));
        assert_eq!(state.filters.max_price, 2000.0);
    }
}
