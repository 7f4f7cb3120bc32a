pub mod model;
pub mod preview;
pub mod repository;
pub mod repository_http;
pub mod schema;
pub mod service;
pub mod view;

pub use model::{SelectedFile, UploadConfig};
pub use preview::{PreviewRef, PreviewRegistry};
pub use repository::UploadRepository;
pub use repository_http::UploadRepositoryHttp;
pub use schema::UploadResponse;
pub use service::{UploadState, UploadWidget};
pub use view::UploadView;
