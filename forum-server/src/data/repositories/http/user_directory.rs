use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::data::user_directory::UserDirectory;
use crate::domain::error::DomainError;
use crate::domain::user::DirectoryUser;

/// jsonplaceholder-style user directory reached over plain HTTP. No
/// caching, no retry; any transport failure or non-success status maps to
/// an upstream error.
#[derive(Debug, Clone)]
pub(crate) struct HttpUserDirectory {
    base_url: String,
    client: Client,
}

impl HttpUserDirectory {
    pub(crate) fn new(base_url: impl Into<String>) -> Result<Self, DomainError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .map_err(|err| DomainError::Unexpected(err.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn fetch<T>(&self, path: &str) -> Result<T, DomainError>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = self.endpoint(path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| DomainError::Upstream(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Upstream(format!(
                "directory returned http status {status} for {url}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| DomainError::Upstream(err.to_string()))
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn list_users(&self) -> Result<Vec<DirectoryUser>, DomainError> {
        self.fetch("/users").await
    }

    async fn get_user(&self, id: i64) -> Result<DirectoryUser, DomainError> {
        self.fetch(&format!("/users/{id}")).await
    }
}
