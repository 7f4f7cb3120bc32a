pub mod directory;
pub mod notification;
pub mod page;
pub mod upload;
