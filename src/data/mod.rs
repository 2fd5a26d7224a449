/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  laptop_price.csv (Latin-1)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode + parse file → LaptopDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ LaptopDataset │  Vec<Laptop>, unique-value indices
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply sidebar predicates → filtered indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  metrics  │  count / mean price / mean RAM over the view
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod metrics;
pub mod model;
