/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///   data.csv  (continent, year, population)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows → Record, group by continent
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Series per continent, first-seen order
///   └──────────┘
/// ```
///
/// Nothing in here depends on the UI.

pub mod loader;
pub mod model;
