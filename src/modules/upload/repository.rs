use crate::{
    api::error,
    modules::upload::{model::SelectedFile, schema::UploadResponse},
};

#[async_trait::async_trait]
pub trait UploadRepository {
    /// Send one visiting card image to the backend.
    async fn upload_visiting_card(
        &self,
        file: &SelectedFile,
    ) -> Result<UploadResponse, error::SystemError>;
}
