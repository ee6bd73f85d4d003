use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::UserRecord;
use tracing::{debug, info};
use url::Url;

pub mod error;
pub mod state;
pub mod view;

pub use error::FetchError;
pub use state::{ErrorBanner, UiState};
pub use view::{DetailRow, DetailValue, DirectoryView, UserCard};

/// Reference deployment of the user directory.
pub const DEFAULT_DIRECTORY_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// The injected fetch capability. The desktop shell talks to the directory
/// exclusively through this trait so tests can substitute a stub.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError>;
}

/// HTTP-backed directory client. Holds the caller-supplied `reqwest` client
/// and the endpoint it was configured with; issues one GET per fetch.
pub struct DirectoryClient {
    http: Client,
    endpoint: Url,
}

impl DirectoryClient {
    pub fn new(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl UserDirectory for DirectoryClient {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>, FetchError> {
        debug!(endpoint = %self.endpoint, "requesting user directory");
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(FetchError::classify)?
            .error_for_status()
            .map_err(FetchError::classify)?;
        let users: Vec<UserRecord> = response.json().await.map_err(FetchError::classify)?;
        info!(count = users.len(), "user directory fetched");
        Ok(users)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
