use std::io;

use flavor_images::{logging, BatchRunner, Catalog, Downloader, Settings};

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let settings = Settings::default();

    let downloader = Downloader::new(&settings);

    let catalog = Catalog::red_bull()?;

    let mut runner = BatchRunner::new(downloader, catalog, settings, io::stdout());

    // Per-file failures are reported on the console and never change the exit code.
    let summary = runner.run()?;

    tracing::debug!(
        downloaded = summary.downloaded,
        failed = summary.failed,
        "finished"
    );

    Ok(())
}
