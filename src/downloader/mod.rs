mod fetcher;

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::config::Settings;

pub use fetcher::UReqFetcher;

#[cfg(test)]
pub use fetcher::MockFetcher;

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Ok {
        body: Vec<u8>,
        content_type: Option<String>,
    },
    Status(u16),
    InvalidBody,
    NetworkError(String),
}

impl Response {
    pub fn ok(body: Vec<u8>, content_type: Option<String>) -> Self {
        Self::Ok { body, content_type }
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn not_found() -> Self {
        Self::Status(404)
    }

    pub fn invalid_body() -> Self {
        Self::InvalidBody
    }

    pub fn network_error(reason: impl Into<String>) -> Self {
        Self::NetworkError(reason.into())
    }
}

/// A single blocking GET. Implementations never retry.
pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Response;
}

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("invalid url")]
    InvalidUrl,
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("could not read response body")]
    InvalidBody,
    #[error("could not write file: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, PartialEq)]
pub struct Download {
    pub source: String,
    pub file: PathBuf,
    pub content: Vec<u8>,
}

impl Download {
    pub fn new(source: String, file: PathBuf, content: Vec<u8>) -> Self {
        Self {
            source,
            file,
            content,
        }
    }
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    pub fn with_fetcher(fetcher: T) -> Self {
        Downloader { fetcher }
    }

    pub fn fetcher(&self) -> &T {
        &self.fetcher
    }

    /// Fetches `url` once and writes the body to `destination`.
    ///
    /// The destination is opened with create-new semantics, so an existing
    /// file is left untouched and reported as an `Io` error.
    pub fn download(&self, url: &str, destination: &Path) -> Result<Download, DownloadError> {
        let url = Url::parse(url).map_err(|_| DownloadError::InvalidUrl)?;

        let url = url.as_str();

        let response = self.fetcher.fetch(url);

        match response {
            Response::NetworkError(reason) => Err(DownloadError::Network(reason)),
            Response::Status(code) => Err(DownloadError::Status(code)),
            Response::InvalidBody => Err(DownloadError::InvalidBody),

            Response::Ok { body, content_type } => {
                let mut file = OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(destination)?;

                file.write_all(&body)?;
                file.flush()?;

                inspect_image(destination, &body, content_type.as_deref());

                Ok(Download::new(
                    String::from(url),
                    destination.to_path_buf(),
                    body,
                ))
            }
        }
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(settings: &Settings) -> Self {
        let fetcher = UReqFetcher::new(settings.request_timeout, &settings.user_agent);
        Downloader::with_fetcher(fetcher)
    }
}

/// Logs what the body looks like. A product page served as HTML instead of
/// image bytes is the usual sign of a URL that is not direct.
fn inspect_image(destination: &Path, body: &[u8], content_type: Option<&str>) {
    match image::guess_format(body) {
        Ok(format) => {
            tracing::debug!(
                file = %destination.display(),
                format = ?format,
                content_type,
                "image format detected"
            );
        }
        Err(_) => {
            tracing::warn!(
                file = %destination.display(),
                content_type,
                "downloaded body is not a recognised image"
            );
        }
    }
}
