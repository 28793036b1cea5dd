//! Terminal preview of the paginated story feed.
//!
//! The preview runs the same [`crate::feed::FeedController`] the static
//! build uses, drawing into a [`TerminalSurface`] and waiting out each
//! render and fade delay on the tokio clock. It follows the Model-View-Update
//! pattern of bubbletea-rs:
//!
//! - **Model**: [`PreviewApp`]
//! - **View**: [`TerminalSurface::render`] plus a footer
//! - **Update**: key presses become [`crate::feed::FeedMsg`]s; elapsed timers
//!   feed their messages back in
//!
//! # Initial Data Loading
//!
//! Because bubbletea-rs's `Model` trait requires `init()` to be a static
//! function, the dataset is handed over through module-level storage. Call
//! [`set_initial_feed`] before starting the program.

use std::io::{self, Write};
use std::sync::OnceLock;

use bubbletea_rs::Program;

use crate::error::FeedError;
use crate::feed::FeedSettings;
use crate::stories::Story;

pub mod app;
pub mod input;
pub mod surface;

pub use app::PreviewApp;
pub use input::{PreviewAction, map_key_to_action};
pub use surface::TerminalSurface;

/// Global storage for the dataset and settings read by `PreviewApp::init()`.
static INITIAL_FEED: OnceLock<(Vec<Story>, FeedSettings)> = OnceLock::new();

/// Sets the dataset and settings for the preview.
///
/// Returns `true` if they were set, `false` if they were already set.
pub fn set_initial_feed(stories: Vec<Story>, settings: FeedSettings) -> bool {
    INITIAL_FEED.set((stories, settings)).is_ok()
}

/// Returns a clone of the stored dataset and settings, or an empty feed
/// with default settings if nothing was stored.
pub(crate) fn get_initial_feed() -> (Vec<Story>, FeedSettings) {
    INITIAL_FEED.get().cloned().unwrap_or_default()
}

/// Runs the preview until the user quits.
///
/// # Errors
///
/// Returns [`FeedError::Preview`] when the terminal program fails to start
/// or exits with an error.
pub async fn run_preview(stories: Vec<Story>, settings: FeedSettings) -> Result<(), FeedError> {
    if !set_initial_feed(stories, settings) {
        tracing::debug!("preview data already set; keeping the existing feed");
    }

    run_program().await.map_err(|error| FeedError::Preview {
        message: error.to_string(),
    })?;

    io::stdout().flush().map_err(|error| FeedError::Io {
        message: error.to_string(),
    })
}

async fn run_program() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<PreviewApp>::builder().alt_screen(true).build()?;
    program.run().await?;
    Ok(())
}
