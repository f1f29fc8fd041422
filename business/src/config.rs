use employees_states::State;
use ustr::Ustr;

use crate::view::DEFAULT_PAGE_SIZE;

/// Production users API host.
pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";

/// The remote list is requested in one go, capped at this many records.
pub const DEFAULT_FETCH_LIMIT: usize = 100;

#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub fetch_limit: usize,
    pub page_size: usize,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            ..Self::default()
        }
    }

    /// `GET {api_base_url}/users?limit={fetch_limit}`; no filter, sort or page
    /// parameters are ever sent.
    pub fn users_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        Ustr::from(format!("{base}/users?limit={}", self.fetch_limit).as_str())
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl State for BusinessConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production_users_endpoint() {
        let config = BusinessConfig::default();

        assert_eq!(
            config.users_url(),
            Ustr::from("https://dummyjson.com/users?limit=100")
        );
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn trailing_slash_on_base_url_is_ignored() {
        let config = BusinessConfig::new("http://127.0.0.1:4000/".to_owned());

        assert_eq!(
            config.users_url(),
            Ustr::from("http://127.0.0.1:4000/users?limit=100")
        );
    }
}
