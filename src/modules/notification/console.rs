use log::{info, warn};

use crate::modules::notification::model::{Notice, Notifier, Severity};

/// Prints notices to stdout and mirrors them into the log.
#[derive(Clone, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        ConsoleNotifier
    }

    pub fn format(notice: &Notice) -> String {
        let marker = match notice.severity {
            Severity::Info => "ok",
            Severity::Destructive => "!!",
        };
        format!(
            "[{}] {} {}: {}",
            notice.issued_at.format("%H:%M:%S"),
            marker,
            notice.title,
            notice.description
        )
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.severity {
            Severity::Info => info!("{}: {}", notice.title, notice.description),
            Severity::Destructive => warn!("{}: {}", notice.title, notice.description),
        }
        println!("{}", Self::format(&notice));
    }
}
