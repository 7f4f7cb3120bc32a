use std::sync::Arc;

use log::info;

use crate::api::error::{self, Rejection};
use crate::modules::notification::{Notice, Notifier};
use crate::modules::upload::{
    model::{SelectedFile, UploadConfig},
    preview::{PreviewRef, PreviewRegistry},
    repository::UploadRepository,
    view::{PreviewCard, SubmitButton, UploadView},
};
use crate::utils::format_megabytes;

pub type UploadCallback = Box<dyn Fn(&str) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadState {
    Idle,
    FileSelected,
    Uploading,
    Success,
    Failed,
}

struct Selection {
    file: SelectedFile,
    preview: PreviewRef,
}

/// Visiting card upload widget.
///
/// Holds at most one selected image together with its preview. `submit` takes
/// `&mut self`, so a second upload cannot start while one is in flight.
pub struct UploadWidget {
    repo: Arc<dyn UploadRepository + Send + Sync>,
    notifier: Arc<dyn Notifier>,
    previews: Arc<PreviewRegistry>,
    config: UploadConfig,
    on_upload_complete: Option<UploadCallback>,
    selection: Option<Selection>,
    state: UploadState,
    uploaded_url: Option<String>,
}

impl UploadWidget {
    pub fn with_dependencies(
        repo: Arc<dyn UploadRepository + Send + Sync>,
        notifier: Arc<dyn Notifier>,
        previews: Arc<PreviewRegistry>,
        config: UploadConfig,
    ) -> Self {
        info!("UploadWidget initialized with dependencies");
        UploadWidget {
            repo,
            notifier,
            previews,
            config,
            on_upload_complete: None,
            selection: None,
            state: UploadState::Idle,
            uploaded_url: None,
        }
    }

    pub fn on_upload_complete<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_upload_complete = Some(Box::new(callback));
        self
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selection.as_ref().map(|selection| &selection.file)
    }

    pub fn preview_uri(&self) -> Option<&str> {
        self.selection.as_ref().map(|selection| selection.preview.uri())
    }

    pub fn uploaded_url(&self) -> Option<&str> {
        self.uploaded_url.as_deref()
    }

    /// Validate file type and size
    fn validate_file(&self, candidate: &SelectedFile) -> Result<(), Rejection> {
        if !candidate.mime_type.starts_with(&self.config.accepted_mime_prefix) {
            return Err(Rejection::InvalidType { mime: candidate.mime_type.clone() });
        }

        if candidate.size > self.config.max_file_size {
            return Err(Rejection::TooLarge {
                size: candidate.size,
                limit: self.config.max_file_size,
            });
        }

        Ok(())
    }

    /// Replace the current selection with `candidate` if it passes validation.
    ///
    /// A rejected candidate leaves the widget untouched apart from the notice.
    pub fn select_file(&mut self, candidate: SelectedFile) -> Result<(), Rejection> {
        if let Err(rejection) = self.validate_file(&candidate) {
            tracing::debug!("Rejected {}: {}", candidate.name, rejection);
            self.notifier.notify(rejection.notice());
            return Err(rejection);
        }

        let preview = self.previews.create(&candidate);
        tracing::debug!("Selected {} ({} bytes)", candidate.name, candidate.size);
        // Assigning drops the previous selection and releases its preview.
        self.selection = Some(Selection { file: candidate, preview });
        self.state = UploadState::FileSelected;
        self.uploaded_url = None;
        Ok(())
    }

    /// Drag-and-drop entry point: only the first dropped file is considered.
    pub fn select_first<I>(&mut self, candidates: I) -> Result<(), Rejection>
    where
        I: IntoIterator<Item = SelectedFile>,
    {
        match candidates.into_iter().next() {
            Some(candidate) => self.select_file(candidate),
            None => Ok(()),
        }
    }

    /// Upload the selected file.
    ///
    /// Does nothing without a selection or once the upload has succeeded.
    /// Failures are reported through the notifier and returned to the caller;
    /// the widget stays retryable.
    pub async fn submit(&mut self) -> Result<(), error::SystemError> {
        let Some(selection) = &self.selection else {
            return Ok(());
        };
        if matches!(self.state, UploadState::Uploading | UploadState::Success) {
            return Ok(());
        }

        self.state = UploadState::Uploading;
        tracing::debug!("Uploading {}", selection.file.name);

        let result = self
            .repo
            .upload_visiting_card(&selection.file)
            .await
            .and_then(|body| {
                body.image_url
                    .ok_or_else(|| error::SystemError::malformed("Missing imageUrl in upload response"))
            });

        match result {
            Ok(image_url) => {
                self.state = UploadState::Success;
                info!("Visiting card uploaded to {}", image_url);
                if let Some(callback) = &self.on_upload_complete {
                    callback(&image_url);
                }
                self.uploaded_url = Some(image_url);
                self.notifier.notify(Notice::info(
                    "Upload successful!",
                    "Your visiting card has been uploaded and processed.",
                ));
                Ok(())
            }
            Err(e) => {
                self.state = UploadState::Failed;
                log::error!("Upload failed: {}", e);
                self.notifier.notify(Notice::destructive("Upload failed", "Please try again later."));
                Err(e)
            }
        }
    }

    /// Discard the selection and its preview. Safe to call in any state.
    pub fn clear(&mut self) {
        self.selection = None;
        self.state = UploadState::Idle;
        self.uploaded_url = None;
        tracing::debug!("Selection cleared, {} preview(s) still live", self.previews.live());
    }

    pub fn view(&self) -> UploadView {
        let Some(selection) = &self.selection else {
            return UploadView::DropZone;
        };

        let submit = match self.state {
            UploadState::Uploading => SubmitButton { label: "Uploading...", enabled: false },
            UploadState::Success => SubmitButton { label: "Uploaded Successfully", enabled: false },
            _ => SubmitButton { label: "Upload & Process", enabled: true },
        };

        UploadView::Preview(PreviewCard {
            file_name: selection.file.name.clone(),
            size_label: format_megabytes(selection.file.size),
            preview_uri: selection.preview.uri().to_string(),
            submit,
        })
    }
}
