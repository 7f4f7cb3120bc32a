use std::sync::{Arc, LazyLock};

use tokio::io::BufReader;

use crate::modules::{
    directory::{model::DirectoryConfig, repository_http::UserRepositoryHttp},
    notification::ConsoleNotifier,
    page::Page,
    upload::{model::UploadConfig, repository_http::UploadRepositoryHttp},
};

mod api;
mod configs;
mod constants;
mod modules;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::io::Result<()> {
    let client = configs::build_http_client(&ENV)
        .map_err(|_| std::io::Error::other("HTTP client initialization error"))?;

    let upload_repo = UploadRepositoryHttp::new(client.clone(), ENV.api_base_url.as_str());
    let user_repo = UserRepositoryHttp::new(client, ENV.api_base_url.as_str());

    let mut page = Page::with_dependencies(
        Arc::new(upload_repo),
        Arc::new(user_repo),
        Arc::new(ConsoleNotifier::new()),
        UploadConfig::from(&*ENV),
        DirectoryConfig::from(&*ENV),
    );

    println!("Visiting Card Manager using backend at {}", ENV.api_base_url);
    if let Err(e) = page.start().await {
        log::error!("Initial directory load rejected: {}", e);
    }

    page.run(BufReader::new(tokio::io::stdin()))
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))
}
