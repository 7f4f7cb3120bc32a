pub mod model;
pub mod repository;
pub mod repository_http;
pub mod schema;
pub mod service;
pub mod view;

pub use model::{DirectoryConfig, DirectoryQuery};
pub use repository::UserRepository;
pub use repository_http::UserRepositoryHttp;
pub use schema::{DirectoryResult, Pagination, UserRecord};
pub use service::{DirectoryWidget, LoadStatus};
pub use view::{DirectoryBody, DirectoryView, PageButton, PageControl};
