use std::path::Path;
use std::sync::Arc;

use crate::api::error;

/// A file the user picked or dropped, held in memory until it is uploaded or cleared.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        SelectedFile {
            name: name.into(),
            size: bytes.len() as u64,
            mime_type: mime_type.into(),
            bytes: bytes.into(),
        }
    }

    /// Read a file from disk the way a file picker would hand it over.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self, error::SystemError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| error::SystemError::bad_request("Path has no file name"))?;

        // Detect MIME type
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();

        Ok(Self::new(name, mime_type, bytes))
    }
}

/// File upload configuration
#[derive(Debug, Clone)]
pub struct UploadConfig {
    pub max_file_size: u64,
    pub accepted_mime_prefix: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_file_size: 5 * 1024 * 1024, // 5MB
            accepted_mime_prefix: "image/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_takes_size_from_payload() {
        let file = SelectedFile::new("card.png", "image/png", vec![0u8; 1234]);
        assert_eq!(file.size, 1234);
        assert_eq!(file.bytes.len(), 1234);
    }

    #[tokio::test]
    async fn test_from_path_guesses_mime_type() {
        let path = std::env::temp_dir().join(format!("{}.png", uuid::Uuid::now_v7()));
        tokio::fs::write(&path, b"\x89PNG").await.unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(file.mime_type, "image/png");
        assert_eq!(file.size, 4);
        assert!(file.name.ends_with(".png"));
    }

    #[tokio::test]
    async fn test_from_path_falls_back_to_octet_stream() {
        let path = std::env::temp_dir().join(format!("{}", uuid::Uuid::now_v7()));
        tokio::fs::write(&path, b"data").await.unwrap();

        let file = SelectedFile::from_path(&path).await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(file.mime_type, "application/octet-stream");
    }

    #[tokio::test]
    async fn test_from_path_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("card-desk-missing").join("nothing.png");
        let result = SelectedFile::from_path(&path).await;
        assert!(matches!(result, Err(error::SystemError::Io(_))));
    }
}
