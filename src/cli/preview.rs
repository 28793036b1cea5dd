//! Terminal preview mode.

use storyfeed::tui::run_preview;
use storyfeed::{FeedError, StoryfeedConfig, load_stories};

/// Loads the dataset and runs the interactive preview.
///
/// # Errors
///
/// Returns an error if the stories path is missing, the dataset is invalid,
/// the page size is zero, or the terminal program fails.
pub async fn run(config: &StoryfeedConfig) -> Result<(), FeedError> {
    let stories = load_stories(config.require_stories_path()?)?;
    run_preview(stories, config.feed_settings()?).await
}
