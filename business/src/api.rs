//! Users API client.
//!
//! Performs the one network call the employees screen needs. Callers (the fetch
//! command) map the typed error into state; nothing here touches `StateCtx`.

use log::{debug, info};
use thiserror::Error;

use crate::BusinessConfig;
use crate::users::{ListUsersResponse, UserRecord};

#[derive(Debug, Error)]
pub enum FetchUsersError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API returned status: {0}")]
    Status(u16),
    #[error("Failed to parse ListUsersResponse: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Request was superseded")]
    Cancelled,
}

pub type ApiResult<T> = Result<T, FetchUsersError>;

/// Shared HTTP client, kept in `StateCtx` so every fetch reuses one connection pool.
#[derive(Debug, Clone, Default)]
pub struct UsersClient {
    inner: reqwest::Client,
}

impl employees_states::State for UsersClient {}

/// `GET {api_base_url}/users?limit={fetch_limit}`.
pub async fn fetch_users(client: &UsersClient, config: &BusinessConfig) -> ApiResult<Vec<UserRecord>> {
    let url = config.users_url();
    debug!("Fetching users from {url}");

    let response = client.inner.get(url.as_str()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchUsersError::Status(status.as_u16()));
    }

    let body = response.bytes().await?;
    let list: ListUsersResponse = serde_json::from_slice(&body)?;

    let mut users = list.users;
    users.truncate(config.fetch_limit);
    info!(
        "Fetched {} users (total reported: {:?})",
        users.len(),
        list.total
    );
    Ok(users)
}
