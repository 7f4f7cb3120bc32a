use crate::{
    api::error,
    constants::USERS_ENDPOINT,
    modules::directory::{
        model::DirectoryQuery, repository::UserRepository, schema::DirectoryResult,
    },
};

#[derive(Clone)]
pub struct UserRepositoryHttp {
    client: reqwest::Client,
    base_url: String,
}

impl UserRepositoryHttp {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }
}

#[async_trait::async_trait]
impl UserRepository for UserRepositoryHttp {
    async fn list_users(
        &self,
        query: &DirectoryQuery,
    ) -> Result<DirectoryResult, error::SystemError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, USERS_ENDPOINT))
            .query(&query.query_pairs())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(error::SystemError::Status(status));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
