use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Destructive,
}

/// A transient user-facing message. Fire and forget.
#[derive(Debug, Clone)]
pub struct Notice {
    pub title: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub severity: Severity,
    pub issued_at: chrono::DateTime<chrono::Utc>,
}

impl Notice {
    pub fn new(
        title: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
        severity: Severity,
    ) -> Self {
        Notice {
            title: title.into(),
            description: description.into(),
            severity,
            issued_at: chrono::Utc::now(),
        }
    }

    pub fn info(
        title: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(title, description, Severity::Info)
    }

    pub fn destructive(
        title: impl Into<Cow<'static, str>>,
        description: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(title, description, Severity::Destructive)
    }
}

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}
