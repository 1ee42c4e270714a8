/// UI layer: sidebar filter panel, tables, and chart rendering.
///
/// Everything here is a thin view over [`crate::state::AppState`];
/// chart data comes pre-derived from [`crate::chart`] builders.

pub mod panels;
pub mod plot;
pub mod tables;
