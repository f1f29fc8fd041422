//! Business layer of the employees directory: the users wire model, the loader,
//! the filter/sort/paginate transform and the table interaction state.

pub mod api;
mod config;
mod fetch_users_compute;
mod table_state;
mod users;
mod users_effect;
pub mod view;

pub use api::{FetchUsersError, UsersClient, fetch_users};
pub use config::{BusinessConfig, DEFAULT_API_BASE_URL, DEFAULT_FETCH_LIMIT};
pub use fetch_users_compute::{FetchStatus, FetchUsersCommand, UsersPageCompute};
pub use table_state::{COUNTRY_OPTIONS, PageState, TableQuery, UserTableState};
pub use users::{Address, Company, Gender, ListUsersResponse, SortValue, UnknownGender, UserRecord};
pub use users_effect::{UsersEffectState, retry_users_fetch, run_users_effect};
pub use view::{
    DEFAULT_PAGE_SIZE, FilterState, SortDirection, SortKey, SortState, UsersPage, render,
};

use employees_states::StateCtx;

/// Registers every state the employees screen needs.
pub fn register_states(ctx: &mut StateCtx, config: BusinessConfig) {
    ctx.add_state(config);
    ctx.add_state(UsersClient::default());
    ctx.add_state(UserTableState::default());
    ctx.add_state(UsersEffectState::default());
    ctx.add_state(UsersPageCompute::default());
}
