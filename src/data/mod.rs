/// Data layer: core types, loading, and aggregation.
///
/// Architecture:
/// ```text
///   covid_data.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → CaseDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ CaseDataset  │  Vec<Record>, selector option lists
///   └─────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  filter by country + group-sums → DerivedView
///   └───────────┘
/// ```

pub mod aggregate;
pub mod loader;
pub mod model;
