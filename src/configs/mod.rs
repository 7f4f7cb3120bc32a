use std::time::Duration;

use crate::{
    api::error,
    constants::Env,
    modules::{directory::model::DirectoryConfig, upload::model::UploadConfig},
};

pub fn build_http_client(env: &Env) -> Result<reqwest::Client, error::SystemError> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(env.request_timeout_secs))
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

impl From<&Env> for UploadConfig {
    fn from(env: &Env) -> Self {
        UploadConfig { max_file_size: env.max_upload_bytes, ..UploadConfig::default() }
    }
}

impl From<&Env> for DirectoryConfig {
    fn from(env: &Env) -> Self {
        DirectoryConfig {
            page_size: env.page_size,
            debounce: Duration::from_millis(env.search_debounce_ms),
        }
    }
}
