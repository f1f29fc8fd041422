//! Table components for the employees list.
//!
//! - `columns`: Column definitions and widths
//! - `header`: Header row with the sortable ID/Name columns
//! - `row`: One row per employee
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;
