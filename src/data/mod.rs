/// Data layer: core types, loading, filtering, and statistics.
///
/// Architecture:
/// ```text
///  assets/iris.csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV once → IrisDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ IrisDataset  │  Vec<IrisRecord>, species index
///   └─────────────┘
///        │
///        ▼
///   ┌──────────┐      ┌──────────┐
///   │  filter   │ ───▶ │ summary   │  species selection → indices → stats
///   └──────────┘      └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod summary;
