/// Data layer: core types, loading, and chart-table derivation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → MissionDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ MissionDataset│  Vec<Mission>, site/booster indices, payload bounds
///   └──────────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ transform  │  (dataset, control values) → chart-ready rows
///   └───────────┘
/// ```
pub mod error;
pub mod loader;
pub mod model;
pub mod transform;
