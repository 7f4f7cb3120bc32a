use crate::{
    api::error,
    modules::directory::{model::DirectoryQuery, schema::DirectoryResult},
};

#[async_trait::async_trait]
pub trait UserRepository {
    /// Fetch one page of users matching the query's search term.
    async fn list_users(&self, query: &DirectoryQuery)
        -> Result<DirectoryResult, error::SystemError>;
}
