//! Client-side view transform: filter → sort → paginate.
//!
//! Everything here is pure and synchronous; the fetch command runs it over the
//! freshly loaded list and stores the resulting [`UsersPage`].

use std::fmt::{Display, Formatter};

use ustr::Ustr;

use crate::users::{Gender, SortValue, UserRecord};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Active gender/country constraints. `None` passes every record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FilterState {
    pub gender: Option<Gender>,
    pub country: Option<Ustr>,
}

impl FilterState {
    /// Case-sensitive exact match on every set field.
    pub fn matches(&self, user: &UserRecord) -> bool {
        let gender_ok = self.gender.is_none_or(|gender| user.gender == gender);
        let country_ok = self
            .country
            .is_none_or(|country| user.country.as_deref() == Some(country.as_str()));
        gender_ok && country_ok
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Id,
    Name,
}

impl SortKey {
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Column ordering. `direction` only means something while `key` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Header click: flips direction on the active ascending key, otherwise makes
    /// `key` active in ascending order.
    pub fn toggle(&mut self, key: SortKey) {
        self.direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        self.key = Some(key);
    }

    /// Direction of `key` if it is the active sort column.
    pub fn direction_of(&self, key: SortKey) -> Option<SortDirection> {
        (self.key == Some(key)).then_some(self.direction)
    }
}

/// One page of the transformed list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsersPage {
    pub users: Vec<UserRecord>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl UsersPage {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Page numbers for the pager row, `1..=total_pages`.
    pub fn page_numbers(&self) -> impl Iterator<Item = usize> + use<> {
        1..=self.total_pages
    }
}

pub fn filter_users<'a>(
    users: &'a [UserRecord],
    filters: &FilterState,
) -> Vec<&'a UserRecord> {
    users.iter().filter(|user| filters.matches(user)).collect()
}

/// Stable sort on the active key; a no-op without one.
pub fn sort_users(users: &mut [&UserRecord], sort: &SortState) {
    let Some(key) = sort.key else {
        return;
    };

    users.sort_by(|a, b| {
        let ordering = SortValue::compare(a.sort_value(key), b.sort_value(key));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// `ceil(count / page_size)`; zero for an empty list.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Slice `[(page - 1) * size, (page - 1) * size + size)`. Pages past the end come
/// back empty rather than clamped.
pub fn paginate<'a>(
    users: &[&'a UserRecord],
    page: usize,
    page_size: usize,
) -> Vec<&'a UserRecord> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    users.iter().skip(start).take(page_size).copied().collect()
}

/// The whole pipeline over the loaded list.
pub fn render(
    all_users: &[UserRecord],
    filters: &FilterState,
    sort: &SortState,
    page: usize,
    page_size: usize,
) -> UsersPage {
    let mut filtered = filter_users(all_users, filters);
    sort_users(&mut filtered, sort);

    UsersPage {
        users: paginate(&filtered, page, page_size)
            .into_iter()
            .cloned()
            .collect(),
        current_page: page.max(1),
        total_pages: total_pages(filtered.len(), page_size),
        filtered_count: filtered.len(),
    }
}
