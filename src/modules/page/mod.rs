pub mod command;
pub mod service;

pub use command::Command;
pub use service::{Flow, Page};
