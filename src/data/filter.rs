use std::collections::BTreeSet;

use super::model::LaptopDataset;

// ---------------------------------------------------------------------------
// Filter predicates: sidebar selections applied conjunctively
// ---------------------------------------------------------------------------

/// The four sidebar predicates. A laptop is visible only when it passes all
/// of them. An empty selection set matches nothing: deselecting every company
/// hides every row rather than disabling the filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// Selected Company values.
    pub companies: BTreeSet<String>,
    /// Selected TypeName values.
    pub type_names: BTreeSet<String>,
    /// Upper bound on Price, inclusive. No lower bound.
    pub max_price: f64,
    /// Selected RAM sizes (GB).
    pub ram_values: BTreeSet<u32>,
}

/// Initialise a [`FilterState`] that shows the whole dataset: every company,
/// type and RAM size selected, price capped at the table maximum.
pub fn init_filter_state(dataset: &LaptopDataset) -> FilterState {
    FilterState {
        companies: dataset.companies.clone(),
        type_names: dataset.type_names.clone(),
        max_price: dataset.price_max,
        ram_values: dataset.ram_values.clone(),
    }
}

/// Return indices of laptops that pass all four predicates.
///
/// Pure and order-preserving: the output is a subset of `0..dataset.len()`
/// in ascending order, and the dataset is never touched.
pub fn filtered_indices(dataset: &LaptopDataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .laptops
        .iter()
        .enumerate()
        .filter(|(_, laptop)| {
            filters.companies.contains(&laptop.company)
                && filters.type_names.contains(&laptop.type_name)
                && laptop.price <= filters.max_price
                && filters.ram_values.contains(&laptop.ram_gb)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::laptop;

    /// The worked example: three rows, two of which survive the filters.
    fn scenario() -> LaptopDataset {
        LaptopDataset::from_laptops(vec![
            laptop(1, "Acer", "Notebook", 8, 500.0),
            laptop(2, "Dell", "Ultrabook", 16, 1200.0),
            laptop(3, "Acer", "Ultrabook", 8, 800.0),
        ])
    }

    fn scenario_filters() -> FilterState {
        FilterState {
            companies: ["Acer".to_string()].into(),
            type_names: ["Notebook".to_string(), "Ultrabook".to_string()].into(),
            max_price: 800.0,
            ram_values: [8].into(),
        }
    }

    #[test]
    fn conjunctive_filtering_matches_the_worked_example() {
        let ds = scenario();
        assert_eq!(filtered_indices(&ds, &scenario_filters()), [0, 2]);
    }

    #[test]
    fn all_inclusive_filters_keep_every_row_in_order() {
        let ds = scenario();
        let filters = init_filter_state(&ds);
        assert_eq!(filtered_indices(&ds, &filters), [0, 1, 2]);
    }

    #[test]
    fn empty_company_selection_hides_everything() {
        let ds = scenario();
        let mut filters = init_filter_state(&ds);
        filters.companies.clear();
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn empty_ram_selection_hides_everything() {
        let ds = scenario();
        let mut filters = init_filter_state(&ds);
        filters.ram_values.clear();
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn max_price_below_table_minimum_yields_no_rows() {
        let ds = scenario();
        let mut filters = init_filter_state(&ds);
        filters.max_price = 499.99;
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn max_price_is_inclusive() {
        let ds = scenario();
        let mut filters = init_filter_state(&ds);
        filters.max_price = 500.0;
        assert_eq!(filtered_indices(&ds, &filters), [0]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = scenario();
        let filters = scenario_filters();

        let once = filtered_indices(&ds, &filters);
        // Re-filter the already-filtered view and map back to source indices.
        let view = LaptopDataset::from_laptops(
            once.iter().map(|&i| ds.laptops[i].clone()).collect(),
        );
        let twice: Vec<usize> = filtered_indices(&view, &filters)
            .into_iter()
            .map(|i| once[i])
            .collect();

        assert_eq!(once, twice);
    }
}
