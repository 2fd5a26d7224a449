use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Laptop – one row of the source table
// ---------------------------------------------------------------------------

/// A single laptop model (one row of the source CSV), with the decorated
/// columns already coerced: `ram_gb` has the `"GB"` suffix stripped,
/// `weight_kg` the `"kg"` suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct Laptop {
    /// Row index from the source file, unique per row.
    pub index: u32,
    pub company: String,
    pub product: String,
    pub type_name: String,
    /// Screen diagonal in inches.
    pub inches: f64,
    /// Raw resolution string, uninterpreted (e.g. "IPS Panel 1920x1080").
    pub screen_resolution: String,
    pub cpu: String,
    /// Installed RAM in GB.
    pub ram_gb: u32,
    /// Raw storage string, uninterpreted (e.g. "256GB SSD").
    pub memory: String,
    pub gpu: String,
    pub op_sys: String,
    /// Weight in kg.
    pub weight_kg: f64,
    pub price: f64,
}

// ---------------------------------------------------------------------------
// LaptopDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed lookup structures for the filter
/// widgets. Immutable after construction: filtering and aggregation only ever
/// produce index vectors into `laptops`, never a modified copy.
#[derive(Debug, Clone)]
pub struct LaptopDataset {
    /// All laptops (rows), in file order.
    pub laptops: Vec<Laptop>,
    /// Sorted unique Company values.
    pub companies: BTreeSet<String>,
    /// Sorted unique TypeName values.
    pub type_names: BTreeSet<String>,
    /// Sorted unique RAM values (GB).
    pub ram_values: BTreeSet<u32>,
    /// Lowest price in the table (slider lower bound).
    pub price_min: f64,
    /// Highest price in the table (slider upper bound, default filter).
    pub price_max: f64,
}

impl LaptopDataset {
    /// Build the unique-value indices from the loaded rows.
    pub fn from_laptops(laptops: Vec<Laptop>) -> Self {
        let mut companies = BTreeSet::new();
        let mut type_names = BTreeSet::new();
        let mut ram_values = BTreeSet::new();
        let mut price_min = f64::INFINITY;
        let mut price_max = f64::NEG_INFINITY;

        for laptop in &laptops {
            companies.insert(laptop.company.clone());
            type_names.insert(laptop.type_name.clone());
            ram_values.insert(laptop.ram_gb);
            price_min = price_min.min(laptop.price);
            price_max = price_max.max(laptop.price);
        }

        // Empty table: keep the slider bounds finite.
        if laptops.is_empty() {
            price_min = 0.0;
            price_max = 0.0;
        }

        LaptopDataset {
            laptops,
            companies,
            type_names,
            ram_values,
            price_min,
            price_max,
        }
    }

    /// Number of laptops.
    pub fn len(&self) -> usize {
        self.laptops.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.laptops.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Shorthand row constructor shared by the data-layer tests.
    pub(crate) fn laptop(
        index: u32,
        company: &str,
        type_name: &str,
        ram_gb: u32,
        price: f64,
    ) -> Laptop {
        Laptop {
            index,
            company: company.to_string(),
            product: format!("Model {index}"),
            type_name: type_name.to_string(),
            inches: 14.0,
            screen_resolution: "1920x1080".to_string(),
            cpu: "Intel Core i5".to_string(),
            ram_gb,
            memory: "256GB SSD".to_string(),
            gpu: "Intel HD Graphics".to_string(),
            op_sys: "Windows 10".to_string(),
            weight_kg: 1.5,
            price,
        }
    }

    #[test]
    fn from_laptops_collects_unique_values_and_price_bounds() {
        let ds = LaptopDataset::from_laptops(vec![
            laptop(1, "Acer", "Notebook", 8, 500.0),
            laptop(2, "Dell", "Ultrabook", 16, 1200.0),
            laptop(3, "Acer", "Ultrabook", 8, 800.0),
        ]);

        assert_eq!(ds.len(), 3);
        let companies: Vec<&str> = ds.companies.iter().map(String::as_str).collect();
        assert_eq!(companies, ["Acer", "Dell"]);
        let type_names: Vec<&str> = ds.type_names.iter().map(String::as_str).collect();
        assert_eq!(type_names, ["Notebook", "Ultrabook"]);
        assert_eq!(ds.ram_values.iter().copied().collect::<Vec<_>>(), [8, 16]);
        assert_eq!(ds.price_min, 500.0);
        assert_eq!(ds.price_max, 1200.0);
    }

    #[test]
    fn empty_dataset_has_finite_price_bounds() {
        let ds = LaptopDataset::from_laptops(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.price_min, 0.0);
        assert_eq!(ds.price_max, 0.0);
    }
}
