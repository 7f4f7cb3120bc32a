use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, info};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::error;
use crate::modules::directory::{
    model::DirectoryConfig, repository::UserRepository, service::DirectoryWidget,
};
use crate::modules::notification::Notifier;
use crate::modules::page::command::{Command, USAGE};
use crate::modules::upload::{
    model::{SelectedFile, UploadConfig},
    preview::PreviewRegistry,
    repository::UploadRepository,
    service::UploadWidget,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The "Visiting Card Manager" page: an upload card above the user directory.
///
/// The widgets never see each other; the page only forwards commands and
/// keeps the URL handed to the upload-complete callback.
pub struct Page {
    upload: UploadWidget,
    directory: DirectoryWidget,
    previews: Arc<PreviewRegistry>,
    last_upload: Arc<Mutex<Option<String>>>,
}

impl Page {
    pub fn with_dependencies(
        upload_repo: Arc<dyn UploadRepository + Send + Sync>,
        user_repo: Arc<dyn UserRepository + Send + Sync>,
        notifier: Arc<dyn Notifier>,
        upload_config: UploadConfig,
        directory_config: DirectoryConfig,
    ) -> Self {
        let previews = PreviewRegistry::new();
        let last_upload = Arc::new(Mutex::new(None));
        let sink = last_upload.clone();
        let upload = UploadWidget::with_dependencies(
            upload_repo,
            notifier.clone(),
            previews.clone(),
            upload_config,
        )
        .on_upload_complete(move |url| {
            info!("Image uploaded successfully: {}", url);
            *sink.lock().unwrap_or_else(PoisonError::into_inner) = Some(url.to_string());
        });
        let directory = DirectoryWidget::with_dependencies(user_repo, notifier, directory_config);

        Page { upload, directory, previews, last_upload }
    }

    pub fn upload(&self) -> &UploadWidget {
        &self.upload
    }

    pub fn directory(&self) -> &DirectoryWidget {
        &self.directory
    }

    pub fn last_upload(&self) -> Option<String> {
        self.last_upload.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub async fn start(&self) -> Result<(), error::SystemError> {
        self.directory.mount().await
    }

    pub async fn execute(&mut self, command: Command) -> Result<Flow, error::SystemError> {
        match command {
            Command::Open(path) => {
                let file = SelectedFile::from_path(&path).await?;
                if let Err(rejection) = self.upload.select_file(file) {
                    debug!("{} not selected: {}", path.display(), rejection);
                }
            }
            Command::Drop(paths) => {
                let Some(first) = paths.first() else {
                    return Ok(Flow::Continue);
                };
                let file = SelectedFile::from_path(first).await?;
                if let Err(rejection) = self.upload.select_first(Some(file)) {
                    debug!("{} not selected: {}", first.display(), rejection);
                }
            }
            Command::Upload => {
                // Failures were already reported through the notifier.
                if let Err(e) = self.upload.submit().await {
                    debug!("Upload attempt failed: {}", e);
                }
            }
            Command::Clear => self.upload.clear(),
            Command::Search(term) => self.directory.set_search_term(term),
            Command::Page(page) => self.directory.go_to_page(page).await?,
            Command::Next => self.directory.next_page().await?,
            Command::Prev => self.directory.previous_page().await?,
            Command::Refresh => self.directory.refresh().await?,
            Command::Show | Command::Help => {}
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    pub fn render(&self) -> String {
        let mut out = self.upload.view().render();
        if let Some((mime_type, bytes)) =
            self.upload.preview_uri().and_then(|uri| self.previews.resolve(uri))
        {
            out.push_str(&format!("Preview content: {}, {} bytes\n", mime_type, bytes.len()));
        }
        if let Some(url) = self.last_upload() {
            out.push_str(&format!("Last upload: {}\n", url));
        }
        out.push('\n');
        out.push_str(&self.directory.view().render());
        out
    }

    /// Read commands line by line until `quit` or end of input.
    pub async fn run<R>(&mut self, input: R) -> Result<(), error::SystemError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = input.lines();
        println!("{}", self.render());

        while let Some(line) = lines.next_line().await? {
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(e) => {
                    println!("{}\n{}", e, USAGE);
                    continue;
                }
            };
            if command == Command::Help {
                println!("{}", USAGE);
                continue;
            }
            // Search results arrive after the debounce; `show` prints them.
            let quiet = matches!(command, Command::Search(_));

            match self.execute(command).await {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) if quiet => {}
                Ok(Flow::Continue) => println!("{}", self.render()),
                Err(e) => println!("{}", e),
            }
        }
        Ok(())
    }
}
