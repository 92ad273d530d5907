/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  monthly_bus_data_for_visual.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate rows → Dataset (sorted by date)
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │   Dataset     │  Vec<Record>, FilterOptions
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterCriteria → matching records, in order
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
