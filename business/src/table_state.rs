//! Interaction state for the employees table.
//!
//! UI code translates clicks into these methods and never talks to the network
//! itself; the users effect notices the changed [`TableQuery`] and dispatches a
//! fetch.

use employees_states::State;
use ustr::Ustr;

use crate::users::Gender;
use crate::view::{FilterState, SortKey, SortState};

/// Countries offered by the country dropdown (besides "any").
pub const COUNTRY_OPTIONS: [&str; 2] = ["USA", "Canada"];

/// Filter, sort and page together: everything the rendered page depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableQuery {
    pub filters: FilterState,
    pub sort: SortState,
    pub page: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            filters: FilterState::default(),
            sort: SortState::default(),
            page: 1,
        }
    }
}

/// Current page, always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self { current_page: 1 }
    }
}

impl PageState {
    pub fn current(&self) -> usize {
        self.current_page
    }

    pub fn select(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserTableState {
    filters: FilterState,
    sort: SortState,
    page: PageState,
}

impl UserTableState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn current_page(&self) -> usize {
        self.page.current()
    }

    /// Click on a sortable column header.
    pub fn click_header(&mut self, key: SortKey) {
        self.sort.toggle(key);
    }

    /// Gender dropdown change; `None` is the empty option. Resets to page 1.
    pub fn set_gender(&mut self, gender: Option<Gender>) {
        self.filters.gender = gender;
        self.page.reset();
    }

    /// Country dropdown change; an empty string counts as "any". Resets to page 1.
    pub fn set_country(&mut self, country: Option<&str>) {
        self.filters.country = country.filter(|c| !c.is_empty()).map(Ustr::from);
        self.page.reset();
    }

    /// Page button click.
    pub fn select_page(&mut self, page: usize) {
        self.page.select(page);
    }

    pub fn query(&self) -> TableQuery {
        TableQuery {
            filters: self.filters,
            sort: self.sort,
            page: self.page.current(),
        }
    }
}

impl State for UserTableState {}
