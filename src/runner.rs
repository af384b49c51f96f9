use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::thread;

use itertools::Itertools;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::downloader::{Downloader, FileDownloader};

const RULE_WIDTH: usize = 50;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("could not prepare target directory {path}: {source}")]
    Prepare { path: PathBuf, source: io::Error },
    #[error("could not write to console: {0}")]
    Console(#[from] io::Error),
}

/// Counts per outcome. Only returned to the caller, never printed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Entries left for the user to fetch by hand.
    pub manual: usize,
}

/// Walks the catalog once, downloading what is missing or printing manual
/// instructions when no direct URLs are configured.
pub struct BatchRunner<T: FileDownloader, W: Write> {
    downloader: Downloader<T>,
    catalog: Catalog,
    settings: Settings,
    out: W,
}

impl<T, W> BatchRunner<T, W>
where
    T: FileDownloader,
    W: Write,
{
    pub fn new(downloader: Downloader<T>, catalog: Catalog, settings: Settings, out: W) -> Self {
        Self {
            downloader,
            catalog,
            settings,
            out,
        }
    }

    pub fn downloader(&self) -> &Downloader<T> {
        &self.downloader
    }

    /// Creates the target directory and its parents, returning the absolute path.
    pub fn prepare(&self) -> Result<PathBuf, RunError> {
        let path = &self.settings.target_dir;

        absolute_dir(path).map_err(|source| RunError::Prepare {
            path: path.clone(),
            source,
        })
    }

    pub fn run(&mut self) -> Result<RunSummary, RunError> {
        let target_dir = self.prepare()?;

        writeln!(self.out, "Red Bull Image Downloader")?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.out, "Target directory: {}", target_dir.display())?;
        writeln!(self.out)?;

        let summary = if self.catalog.has_direct_urls() {
            self.download_direct(&target_dir)?
        } else {
            self.print_manual_steps()?
        };

        writeln!(self.out, "\n{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.out, "Download complete!")?;

        tracing::debug!(?summary, "run finished");

        Ok(summary)
    }

    fn download_direct(&mut self, target_dir: &Path) -> Result<RunSummary, RunError> {
        let mut summary = RunSummary::default();

        writeln!(self.out, "Downloading images from direct URLs...")?;

        for flavor in self.catalog.flavors() {
            let Some(url) = flavor.download_url() else {
                continue;
            };

            let destination = target_dir.join(&flavor.file_name);

            if destination.exists() {
                writeln!(self.out, "⊘ Already exists: {}", flavor.file_name)?;
                summary.skipped += 1;
                continue;
            }

            match self.downloader.download(url, &destination) {
                Ok(_) => {
                    writeln!(self.out, "✓ Downloaded: {}", flavor.file_name)?;
                    tracing::info!(file = %flavor.file_name, url, "downloaded");
                    summary.downloaded += 1;
                }
                Err(error) => {
                    writeln!(self.out, "✗ Failed to download {}: {}", flavor.file_name, error)?;
                    tracing::warn!(file = %flavor.file_name, url, %error, "download failed");
                    summary.failed += 1;
                }
            }

            thread::sleep(self.settings.request_delay);
        }

        Ok(summary)
    }

    fn print_manual_steps(&mut self) -> Result<RunSummary, RunError> {
        let target = self.settings.target_dir.display();

        let file_list = self
            .catalog
            .file_names()
            .map(|name| format!("   - {}", name))
            .join("\n");

        writeln!(self.out, "⚠️  No direct image URLs configured.")?;
        writeln!(self.out, "\nTo download images:")?;
        writeln!(self.out, "1. Visit https://www.redbull.com")?;
        writeln!(self.out, "2. Navigate to their products page")?;
        writeln!(self.out, "3. Right-click on each Red Bull can image")?;
        writeln!(self.out, "4. Save images to {}/ with these names:", target)?;
        writeln!(self.out)?;
        if !file_list.is_empty() {
            writeln!(self.out, "{}", file_list)?;
        }
        writeln!(self.out)?;
        writeln!(self.out, "Or fill in the direct image URLs in the flavor catalog.")?;

        tracing::info!(entries = self.catalog.len(), "no direct urls, printed manual steps");

        Ok(RunSummary {
            manual: self.catalog.len(),
            ..RunSummary::default()
        })
    }
}

fn absolute_dir(path: &Path) -> io::Result<PathBuf> {
    let absolute_path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    if !absolute_path.exists() {
        fs::create_dir_all(&absolute_path)?;
    }

    Ok(absolute_path)
}
