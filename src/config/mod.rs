//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.storyfeed.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `STORYFEED_STORIES`, `STORYFEED_PAGE_SIZE`,
//!    and so on
//! 4. **Command-line arguments** – `--stories`/`-s`, `--out-dir`/`-o`, ...
//!
//! # Configuration File
//!
//! ```toml
//! stories = "data/stories.json"
//! out_dir = "public/feedback"
//! page_size = 5
//! render_delay_ms = 1500
//! page_stem = "feedback"
//! ```

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use camino::Utf8Path;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::carousel::CarouselSettings;
use crate::error::FeedError;
use crate::feed::{FeedSettings, FeedTimings};
use crate::render::PageHref;
use crate::stories::StoryFilter;
use crate::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Render every page and the carousel into the output directory.
    Build,
    /// Browse the feed interactively in the terminal.
    Preview,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use storyfeed::StoryfeedConfig;
///
/// let config = StoryfeedConfig::load().expect("failed to load configuration");
/// let settings = config.feed_settings().expect("valid page size");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "STORYFEED",
    discovery(
        dotfile_name = ".storyfeed.toml",
        config_file_name = "storyfeed.toml",
        app_name = "storyfeed"
    )
)]
pub struct StoryfeedConfig {
    /// Path to the JSON stories dataset.
    ///
    /// Can be provided via:
    /// - CLI: `--stories <PATH>` or `-s <PATH>`
    /// - Environment: `STORYFEED_STORIES`
    /// - Config file: `stories = "..."`
    #[ortho_config(cli_short = 's')]
    pub stories: Option<String>,

    /// Directory the static build writes into.
    ///
    /// Can be provided via:
    /// - CLI: `--out-dir <DIR>` or `-o <DIR>`
    /// - Environment: `STORYFEED_OUT_DIR`
    /// - Config file: `out_dir = "..."`
    #[ortho_config(cli_short = 'o')]
    pub out_dir: String,

    /// Stories shown per page. Must be positive.
    ///
    /// Can be provided via:
    /// - CLI: `--page-size <N>` or `-n <N>`
    /// - Environment: `STORYFEED_PAGE_SIZE`
    /// - Config file: `page_size = 5`
    #[ortho_config(cli_short = 'n')]
    pub page_size: usize,

    /// How long the loading skeleton shows before a page commits.
    #[ortho_config(cli_short = 'd')]
    pub render_delay_ms: u64,

    /// Fade-out length before content is swapped.
    #[ortho_config(cli_short = 'f')]
    pub fade_out_ms: u64,

    /// Fade-in length before the container returns to neutral.
    #[ortho_config(cli_short = 'i')]
    pub fade_in_ms: u64,

    /// Delay between carousel slides.
    #[ortho_config(cli_short = 'a')]
    pub autoplay_delay_ms: u64,

    /// File name prefix of generated pages (`{stem}-{n}.html`).
    ///
    /// Can be provided via:
    /// - CLI: `--page-stem <STEM>` or `-m <STEM>`
    /// - Environment: `STORYFEED_PAGE_STEM`
    /// - Config file: `page_stem = "..."`
    #[ortho_config(cli_short = 'm')]
    pub page_stem: String,

    /// Launches the terminal preview instead of writing files.
    ///
    /// Can be provided via:
    /// - CLI: `--preview` / `-p`
    /// - Config file: `preview = true`
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so there is no `STORYFEED_PREVIEW`.
    #[ortho_config(cli_short = 'p')]
    pub preview: bool,

    /// Writes render and build telemetry to stderr as JSON lines.
    #[ortho_config(cli_short = 'T')]
    pub telemetry: bool,
}

const DEFAULT_OUT_DIR: &str = "site";
const DEFAULT_PAGE_STEM: &str = "feedback";

impl Default for StoryfeedConfig {
    fn default() -> Self {
        let timings = FeedTimings::DEFAULT;
        Self {
            stories: None,
            out_dir: DEFAULT_OUT_DIR.to_owned(),
            page_size: crate::feed::DEFAULT_PAGE_SIZE.get(),
            render_delay_ms: duration_ms(timings.render_delay),
            fade_out_ms: duration_ms(timings.fade_out),
            fade_in_ms: duration_ms(timings.fade_in),
            autoplay_delay_ms: duration_ms(crate::carousel::DEFAULT_AUTOPLAY_DELAY),
            page_stem: DEFAULT_PAGE_STEM.to_owned(),
            preview: false,
            telemetry: false,
        }
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

impl StoryfeedConfig {
    /// Determines the operation mode based on provided configuration.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.preview {
            OperationMode::Preview
        } else {
            OperationMode::Build
        }
    }

    /// Returns the stories path or an error if missing.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::MissingStoriesPath`] when no path is configured.
    pub fn require_stories_path(&self) -> Result<&Utf8Path, FeedError> {
        self.stories
            .as_deref()
            .filter(|path| !path.trim().is_empty())
            .map(Utf8Path::new)
            .ok_or(FeedError::MissingStoriesPath)
    }

    /// Returns the output directory of the static build.
    #[must_use]
    pub fn out_dir(&self) -> &Utf8Path {
        Utf8Path::new(&self.out_dir)
    }

    /// Builds feed settings from the configured page size and delays.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidPageSize`] when the page size is zero.
    pub fn feed_settings(&self) -> Result<FeedSettings, FeedError> {
        let page_size = NonZeroUsize::new(self.page_size).ok_or(FeedError::InvalidPageSize)?;

        Ok(FeedSettings {
            page_size,
            timings: FeedTimings {
                render_delay: Duration::from_millis(self.render_delay_ms),
                fade_out: Duration::from_millis(self.fade_out_ms),
                fade_in: Duration::from_millis(self.fade_in_ms),
            },
            filter: StoryFilter::All,
        })
    }

    /// Returns the link scheme of generated pages.
    #[must_use]
    pub fn page_href(&self) -> PageHref {
        PageHref::file(self.page_stem.clone())
    }

    /// Builds carousel settings linking every slide to the first page.
    #[must_use]
    pub fn carousel_settings(&self) -> CarouselSettings {
        let first_page = self
            .page_href()
            .file_name(0)
            .unwrap_or_else(|| CarouselSettings::default().feedback_href);

        CarouselSettings {
            autoplay_delay: Duration::from_millis(self.autoplay_delay_ms),
            feedback_href: first_page,
        }
    }

    /// Returns the telemetry sink selected by the `telemetry` flag.
    #[must_use]
    pub fn telemetry_sink(&self) -> Arc<dyn TelemetrySink> {
        if self.telemetry {
            Arc::new(StderrJsonlTelemetrySink)
        } else {
            Arc::new(NoopTelemetrySink)
        }
    }
}
