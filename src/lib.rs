pub mod catalog;
pub mod config;
pub mod downloader;
pub mod logging;
pub mod runner;

pub use catalog::{Catalog, CatalogError, Flavor};
pub use config::Settings;
pub use downloader::{Download, DownloadError, Downloader, FileDownloader, Response, UReqFetcher};
pub use runner::{BatchRunner, RunError, RunSummary};
