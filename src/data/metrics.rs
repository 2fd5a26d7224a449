use super::model::LaptopDataset;

// ---------------------------------------------------------------------------
// Summary metrics over the filtered view
// ---------------------------------------------------------------------------

/// The three headline figures shown above the charts. Means are `None` when
/// the filtered view is empty; zero would be a lie, not a mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Number of laptops in the view.
    pub count: usize,
    /// Arithmetic mean of Price, if the view is non-empty.
    pub mean_price: Option<f64>,
    /// Arithmetic mean of RAM (GB), if the view is non-empty.
    pub mean_ram: Option<f64>,
}

impl Metrics {
    /// Reduce the rows selected by `indices`. Pure; `indices` is the output
    /// of the filter pipeline.
    pub fn compute(dataset: &LaptopDataset, indices: &[usize]) -> Self {
        if indices.is_empty() {
            return Metrics {
                count: 0,
                mean_price: None,
                mean_ram: None,
            };
        }

        let n = indices.len() as f64;
        let mut price_sum = 0.0;
        let mut ram_sum = 0.0;
        for &i in indices {
            price_sum += dataset.laptops[i].price;
            ram_sum += f64::from(dataset.laptops[i].ram_gb);
        }

        Metrics {
            count: indices.len(),
            mean_price: Some(price_sum / n),
            mean_ram: Some(ram_sum / n),
        }
    }

    /// Mean price for display: `"$650.00"`, or `"n/a"` for an empty view.
    pub fn price_label(&self) -> String {
        match self.mean_price {
            Some(mean) => format!("${mean:.2}"),
            None => "n/a".to_string(),
        }
    }

    /// Mean RAM for display: `"8.0 GB"`, or `"n/a"` for an empty view.
    pub fn ram_label(&self) -> String {
        match self.mean_ram {
            Some(mean) => format!("{mean:.1} GB"),
            None => "n/a".to_string(),
        }
    }
}
