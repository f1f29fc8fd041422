//! Reactive fetch effect keyed on the table query.
//!
//! Called once per frame. Dispatches `FetchUsersCommand` only when the query
//! differs from the one last dispatched, so any number of state changes in a
//! frame cost a single request and event handlers never fetch directly.

use employees_states::{Error, State, StateCtx, TaskId};
use log::{debug, warn};

use crate::fetch_users_compute::{FetchStatus, FetchUsersCommand, UsersPageCompute};
use crate::table_state::{TableQuery, UserTableState};

#[derive(Debug, Clone, Default)]
pub struct UsersEffectState {
    last_dispatched: Option<TableQuery>,
}

impl UsersEffectState {
    pub fn last_dispatched(&self) -> Option<&TableQuery> {
        self.last_dispatched.as_ref()
    }
}

impl State for UsersEffectState {}

/// Dispatches a fetch if the table query changed since the last one.
///
/// Returns the new task id when something was dispatched.
pub fn run_users_effect(ctx: &mut StateCtx) -> Result<Option<TaskId>, Error> {
    let query = ctx
        .state::<UserTableState>()
        .ok_or_else(|| Error::state_not_found::<UserTableState>("run_users_effect"))?
        .query();

    let unchanged = ctx
        .state::<UsersEffectState>()
        .and_then(UsersEffectState::last_dispatched)
        == Some(&query);
    if unchanged {
        return Ok(None);
    }

    debug!("Table query changed to {query:?}, fetching users");
    dispatch_fetch(ctx, query).map(Some)
}

/// Fetches again for the current query, e.g. from a retry button.
pub fn retry_users_fetch(ctx: &mut StateCtx) -> Result<TaskId, Error> {
    let query = ctx
        .state::<UserTableState>()
        .ok_or_else(|| Error::state_not_found::<UserTableState>("retry_users_fetch"))?
        .query();
    dispatch_fetch(ctx, query)
}

/// Records `query` before spawning. A failed dispatch then waits for the next
/// query change or a retry.
fn dispatch_fetch(ctx: &mut StateCtx, query: TableQuery) -> Result<TaskId, Error> {
    ctx.update::<UsersEffectState>(|effect| effect.last_dispatched = Some(query))?;

    match ctx.dispatch(FetchUsersCommand::new(query)) {
        Ok(id) => Ok(id),
        Err(err) => {
            let message = err.to_string();
            // Surfaced like a failed request so the screen offers Retry.
            if let Err(missing) = ctx.update::<UsersPageCompute>(|compute| {
                compute.status = FetchStatus::Error(message);
            }) {
                warn!("Could not report dispatch failure: {missing}");
            }
            Err(err)
        }
    }
}
