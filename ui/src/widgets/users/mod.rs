//! Employees screen.
//!
//! - `panel`: screen layout, status line and action handling
//! - `filters`: country/gender dropdowns
//! - `pager`: page-number buttons
//! - `table`: table rendering components (columns, header, row, cells)

mod filters;
mod pager;
mod panel;
pub mod table;

pub use panel::{UserTableAction, employees_screen, users_panel};
