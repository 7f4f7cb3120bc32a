use reqwest::multipart::{Form, Part};

use crate::{
    api::error,
    constants::{UPLOAD_ENDPOINT, UPLOAD_FIELD_NAME},
    modules::upload::{model::SelectedFile, repository::UploadRepository, schema::UploadResponse},
};

#[derive(Clone)]
pub struct UploadRepositoryHttp {
    client: reqwest::Client,
    base_url: String,
}

impl UploadRepositoryHttp {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self { client, base_url: base_url.into() }
    }
}

#[async_trait::async_trait]
impl UploadRepository for UploadRepositoryHttp {
    async fn upload_visiting_card(
        &self,
        file: &SelectedFile,
    ) -> Result<UploadResponse, error::SystemError> {
        let part = Part::bytes(file.bytes.to_vec())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part(UPLOAD_FIELD_NAME, part);

        let response = self
            .client
            .post(format!("{}{}", self.base_url, UPLOAD_ENDPOINT))
            .multipart(form)
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
