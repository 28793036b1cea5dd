//! Static build mode.

use std::io::{self, Write};

use storyfeed::{FeedError, SiteBuilder, StoryfeedConfig, load_stories};

/// Loads the dataset, writes the site, and prints a one-line summary.
///
/// # Errors
///
/// Returns an error if the stories path is missing, the dataset is invalid,
/// the page size is zero, or the output cannot be written.
pub fn run(config: &StoryfeedConfig) -> Result<(), FeedError> {
    let stories = load_stories(config.require_stories_path()?)?;
    let builder = SiteBuilder::from_config(config, stories)?;
    let manifest = builder.write(config.out_dir())?;

    let mut stdout = io::stdout().lock();
    writeln!(
        stdout,
        "Wrote {} page(s) for {} stories to {}",
        manifest.page_count,
        manifest.story_count,
        config.out_dir()
    )
    .map_err(|error| FeedError::Io {
        message: error.to_string(),
    })
}
