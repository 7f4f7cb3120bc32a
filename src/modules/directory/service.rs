/// Directory widget
///
/// Paginated, searchable user table backed by `UserRepository`:
/// - search edits are debounced with a cancellable tokio task
/// - every load takes a request token; only the newest load may update state
/// - the state mutex is never held across an `.await`
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::info;
use tokio::task::JoinHandle;
use validator::Validate;

use crate::api::error;
use crate::modules::directory::{
    model::{DirectoryConfig, DirectoryQuery},
    repository::UserRepository,
    schema::{Pagination, UserRecord},
    view::DirectoryView,
};
use crate::modules::notification::{Notice, Notifier};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Errored(String),
}

#[derive(Debug, Clone)]
pub(crate) struct DirectoryState {
    pub(crate) status: LoadStatus,
    pub(crate) records: Vec<UserRecord>,
    pub(crate) pagination: Pagination,
    /// Query of the most recent load request.
    pub(crate) requested: DirectoryQuery,
    /// Text currently in the search box, possibly not applied yet.
    pub(crate) search_input: String,
    /// Page navigation starts from. Reset to 1 by every search edit.
    current_page: u32,
    mounted: bool,
}

struct Inner {
    repo: Arc<dyn UserRepository + Send + Sync>,
    notifier: Arc<dyn Notifier>,
    config: DirectoryConfig,
    state: Mutex<DirectoryState>,
    latest_request: AtomicU64,
    pending_search: Mutex<Option<JoinHandle<()>>>,
}

impl Inner {
    fn state(&self) -> MutexGuard<'_, DirectoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[derive(Clone)]
pub struct DirectoryWidget {
    inner: Arc<Inner>,
}

impl DirectoryWidget {
    pub fn with_dependencies(
        repo: Arc<dyn UserRepository + Send + Sync>,
        notifier: Arc<dyn Notifier>,
        config: DirectoryConfig,
    ) -> Self {
        info!("DirectoryWidget initialized with page size {}", config.page_size);
        let state = DirectoryState {
            status: LoadStatus::Idle,
            records: Vec::new(),
            pagination: Pagination::default(),
            requested: DirectoryQuery::new(1, config.page_size, ""),
            search_input: String::new(),
            current_page: 1,
            mounted: false,
        };
        DirectoryWidget {
            inner: Arc::new(Inner {
                repo,
                notifier,
                config,
                state: Mutex::new(state),
                latest_request: AtomicU64::new(0),
                pending_search: Mutex::new(None),
            }),
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.inner.state().status.clone()
    }

    pub fn records(&self) -> Vec<UserRecord> {
        self.inner.state().records.clone()
    }

    pub fn pagination(&self) -> Pagination {
        self.inner.state().pagination
    }

    pub fn search_input(&self) -> String {
        self.inner.state().search_input.clone()
    }

    pub fn requested(&self) -> DirectoryQuery {
        self.inner.state().requested.clone()
    }

    /// Initial load. Only the first call fetches.
    pub async fn mount(&self) -> Result<(), error::SystemError> {
        {
            let mut state = self.inner.state();
            if state.mounted {
                return Ok(());
            }
            state.mounted = true;
        }
        self.load(1, "").await
    }

    /// Fetch one page and make it the displayed result.
    ///
    /// Returns an error only for an invalid query; fetch failures end up in
    /// the widget state and the notifier. A response that arrives after a newer
    /// load has started is dropped.
    pub async fn load(
        &self,
        page: u32,
        search_term: impl Into<String>,
    ) -> Result<(), error::SystemError> {
        let query = DirectoryQuery::new(page, self.inner.config.page_size, search_term);
        query.validate()?;

        let token = self.inner.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut state = self.inner.state();
            state.status = LoadStatus::Loading;
            state.current_page = query.page;
            state.requested = query.clone();
        }
        tracing::debug!("Load #{} page {} search {:?}", token, query.page, query.search_term);

        let result = self.inner.repo.list_users(&query).await;

        let mut state = self.inner.state();
        if self.inner.latest_request.load(Ordering::SeqCst) != token {
            tracing::debug!("Load #{} superseded, response dropped", token);
            return Ok(());
        }

        match result {
            Ok(result) => {
                tracing::debug!("Load #{} returned {} users", token, result.data.len());
                state.records = result.data;
                state.pagination = result.pagination;
                state.status = LoadStatus::Loaded;
            }
            Err(e) => {
                let message = e.to_string();
                log::error!("Failed to load users: {}", message);
                state.status = LoadStatus::Errored(message.clone());
                drop(state);
                self.inner.notifier.notify(Notice::destructive("Error loading users", message));
            }
        }
        Ok(())
    }

    /// Record a search edit and schedule `load(1, term)` after the quiet period.
    ///
    /// A pending load from an earlier edit is cancelled. Must be called from
    /// within a tokio runtime.
    pub fn set_search_term(&self, term: impl Into<String>) {
        let term = term.into();
        {
            let mut state = self.inner.state();
            if state.search_input == term {
                return;
            }
            state.search_input = term.clone();
            state.current_page = 1;
        }

        let widget = self.clone();
        let delay = self.inner.config.debounce;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Once the timer fired the load runs on its own task so that a later
            // edit can no longer cancel the request in flight.
            tokio::spawn(async move {
                if let Err(e) = widget.load(1, term).await {
                    log::warn!("Debounced search rejected: {}", e);
                }
            });
        });

        let previous = self
            .inner
            .pending_search
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Load `target` keeping the current search text.
    pub async fn go_to_page(&self, target: u32) -> Result<(), error::SystemError> {
        let term = self.search_input();
        self.load(target, term).await
    }

    pub async fn next_page(&self) -> Result<(), error::SystemError> {
        let (page, total_pages) = {
            let state = self.inner.state();
            (state.current_page, state.pagination.total_pages)
        };
        if page >= total_pages {
            return Ok(());
        }
        self.go_to_page(page + 1).await
    }

    pub async fn previous_page(&self) -> Result<(), error::SystemError> {
        let page = self.inner.state().current_page;
        if page <= 1 {
            return Ok(());
        }
        self.go_to_page(page - 1).await
    }

    /// Reload the displayed page and search term.
    pub async fn refresh(&self) -> Result<(), error::SystemError> {
        let DirectoryQuery { page, search_term, .. } = self.requested();
        self.load(page, search_term).await
    }

    pub fn view(&self) -> DirectoryView {
        DirectoryView::from_state(&self.inner.state())
    }
}
