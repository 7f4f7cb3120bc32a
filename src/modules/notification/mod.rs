pub mod console;
pub mod model;

pub use console::ConsoleNotifier;
pub use model::{Notice, Notifier, Severity};
