//! Fetch users command + page cache.
//!
//! Fetching is a side effect, so it lives in a command that is only ever run when
//! dispatched:
//! - `UsersPageCompute`: cache holding the fetch status and the last rendered page
//! - `FetchUsersCommand`: loads the list, runs the view transform for its query and
//!   writes the page into `UsersPageCompute` through a latest-only updater
//!
//! Dispatching it again while a fetch is in flight cancels the older request, and
//! a superseded response never reaches the cache.

use chrono::{DateTime, Utc};
use employees_states::{Command, CommandFuture, CommandSnapshot, LatestOnlyUpdater, State};
use log::{debug, error, info};
use tokio_util::sync::CancellationToken;

use crate::BusinessConfig;
use crate::api::{self, FetchUsersError, UsersClient};
use crate::table_state::TableQuery;
use crate::view::{UsersPage, render};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch attempted yet.
    #[default]
    Idle,
    Loading,
    Loaded,
    Error(String),
}

/// Status of the latest fetch plus the page it produced.
///
/// `page` keeps the last successful page while a newer fetch is loading or after
/// it failed, so the table does not blank out.
#[derive(Debug, Clone, Default)]
pub struct UsersPageCompute {
    pub status: FetchStatus,
    pub page: UsersPage,
    /// Query the current `page` was rendered for.
    pub query: Option<TableQuery>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl UsersPageCompute {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, FetchStatus::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Error(msg) => Some(msg.as_str()),
            _ => None,
        }
    }

    pub fn page(&self) -> &UsersPage {
        &self.page
    }
}

impl State for UsersPageCompute {}

/// Loads the users list and renders `query` over it.
#[derive(Debug, Clone)]
pub struct FetchUsersCommand {
    pub query: TableQuery,
}

impl FetchUsersCommand {
    pub fn new(query: TableQuery) -> Self {
        Self { query }
    }
}

impl Command for FetchUsersCommand {
    fn run(
        &self,
        snap: CommandSnapshot,
        updater: LatestOnlyUpdater,
        cancel: CancellationToken,
    ) -> CommandFuture {
        let query = self.query;
        let config = snap.cloned::<BusinessConfig>();
        let client = snap.cloned::<UsersClient>().unwrap_or_default();

        Box::pin(async move {
            let config = match config {
                Ok(config) => config,
                Err(err) => {
                    error!("FetchUsersCommand: {err}");
                    let message = err.to_string();
                    updater.update::<UsersPageCompute>(move |c| {
                        c.status = FetchStatus::Error(message);
                    });
                    return;
                }
            };

            updater.update::<UsersPageCompute>(|c| c.status = FetchStatus::Loading);

            let result = tokio::select! {
                () = cancel.cancelled() => Err(FetchUsersError::Cancelled),
                result = api::fetch_users(&client, &config) => result,
            };

            match result {
                Ok(users) => {
                    let page = render(
                        &users,
                        &query.filters,
                        &query.sort,
                        query.page,
                        config.page_size,
                    );
                    info!(
                        "FetchUsersCommand: page {}/{} with {} of {} matching users",
                        page.current_page,
                        page.total_pages,
                        page.users.len(),
                        page.filtered_count
                    );
                    let now = Utc::now();
                    updater.update::<UsersPageCompute>(move |c| {
                        c.status = FetchStatus::Loaded;
                        c.page = page;
                        c.query = Some(query);
                        c.fetched_at = Some(now);
                    });
                }
                Err(FetchUsersError::Cancelled) => {
                    debug!("FetchUsersCommand: superseded, dropping request");
                }
                Err(err) => {
                    error!("FetchUsersCommand: {err}");
                    let message = err.to_string();
                    updater.update::<UsersPageCompute>(move |c| {
                        c.status = FetchStatus::Error(message);
                    });
                }
            }
        })
    }
}
