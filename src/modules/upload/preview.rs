//! Local preview handles for selected files.
//!
//! The registry plays the role of a browser's object-URL table: every selected
//! file gets a `blob:` URI that resolves to its bytes until the handle is
//! dropped. A `PreviewRef` cannot be cloned, so each preview is released once.
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use uuid::Uuid;

use crate::modules::upload::model::SelectedFile;

const PREVIEW_SCHEME: &str = "blob:card-desk/";

struct PreviewEntry {
    mime_type: String,
    bytes: Arc<[u8]>,
}

#[derive(Default)]
pub struct PreviewRegistry {
    entries: Mutex<HashMap<Uuid, PreviewEntry>>,
}

impl PreviewRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<Uuid, PreviewEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn create(self: &Arc<Self>, file: &SelectedFile) -> PreviewRef {
        let id = Uuid::now_v7();
        self.entries().insert(
            id,
            PreviewEntry { mime_type: file.mime_type.clone(), bytes: file.bytes.clone() },
        );
        tracing::debug!("Preview {} created for {}", id, file.name);
        PreviewRef { id, uri: format!("{PREVIEW_SCHEME}{id}"), registry: Arc::clone(self) }
    }

    /// Resolve a live preview URI to its MIME type and bytes.
    pub fn resolve(&self, uri: &str) -> Option<(String, Arc<[u8]>)> {
        let id = uri.strip_prefix(PREVIEW_SCHEME).and_then(|id| Uuid::parse_str(id).ok())?;
        self.entries().get(&id).map(|entry| (entry.mime_type.clone(), entry.bytes.clone()))
    }

    /// Number of previews that have not been released yet.
    pub fn live(&self) -> usize {
        self.entries().len()
    }

    fn revoke(&self, id: &Uuid) {
        if self.entries().remove(id).is_some() {
            tracing::debug!("Preview {} released", id);
        }
    }
}

pub struct PreviewRef {
    id: Uuid,
    uri: String,
    registry: Arc<PreviewRegistry>,
}

impl PreviewRef {
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl std::fmt::Debug for PreviewRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewRef").field("uri", &self.uri).finish()
    }
}

impl Drop for PreviewRef {
    fn drop(&mut self) {
        self.registry.revoke(&self.id);
    }
}
