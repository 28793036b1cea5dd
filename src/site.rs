//! Static site builder.
//!
//! Drives a [`FeedController`] over an [`HtmlDocument`] with immediate
//! timings, captures every page after it settles, mounts the carousel, and
//! writes the result under an output directory:
//!
//! - `{stem}-{n}.html` per page, 1-based
//! - `carousel.html` and `carousel.json`
//! - `manifest.json`

use std::sync::Arc;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::carousel::{CarouselConfig, CarouselSettings, TooltipConfig, mount_carousel};
use crate::config::StoryfeedConfig;
use crate::error::FeedError;
use crate::feed::{FeedController, FeedSettings, FeedTimings};
use crate::render::{HtmlDocument, HtmlRenderer, PageHref, page_file_name};
use crate::stories::Story;
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

/// Name of the carousel markup file.
pub const CAROUSEL_HTML: &str = "carousel.html";
/// Name of the carousel configuration file.
pub const CAROUSEL_JSON: &str = "carousel.json";
/// Name of the build manifest.
pub const MANIFEST_JSON: &str = "manifest.json";

/// One generated feedback page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// File name relative to the output directory.
    pub file_name: String,
    /// Complete page markup.
    pub html: String,
}

/// Everything a build produces, before it touches the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOutput {
    /// Feedback pages in page order.
    pub pages: Vec<RenderedPage>,
    /// Carousel markup.
    pub carousel_html: String,
    /// Carousel and tooltip initialisation options as JSON.
    pub carousel_json: String,
}

/// Summary written to `manifest.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteManifest {
    /// Number of page files written.
    pub page_count: usize,
    /// Number of stories in the dataset.
    pub story_count: usize,
    /// Stories per page.
    pub page_size: usize,
    /// When the build finished.
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct CarouselInit<'a> {
    carousel: Option<&'a CarouselConfig>,
    tooltips: Option<&'a TooltipConfig>,
}

/// Builds the static feedback pages and carousel.
pub struct SiteBuilder {
    stories: Vec<Story>,
    settings: FeedSettings,
    page_stem: String,
    carousel: CarouselSettings,
    telemetry: Arc<dyn TelemetrySink>,
}

impl SiteBuilder {
    /// Creates a builder with default page naming and carousel settings.
    #[must_use]
    pub fn new(stories: Vec<Story>, settings: FeedSettings) -> Self {
        Self {
            stories,
            settings,
            page_stem: "feedback".to_owned(),
            carousel: CarouselSettings::default(),
            telemetry: Arc::new(NoopTelemetrySink),
        }
    }

    /// Creates a builder from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidPageSize`] when the page size is zero.
    pub fn from_config(config: &StoryfeedConfig, stories: Vec<Story>) -> Result<Self, FeedError> {
        Ok(Self::new(stories, config.feed_settings()?)
            .with_page_stem(config.page_stem.clone())
            .with_carousel(config.carousel_settings())
            .with_telemetry(config.telemetry_sink()))
    }

    /// Names generated pages `{stem}-{n}.html`.
    #[must_use]
    pub fn with_page_stem(mut self, stem: impl Into<String>) -> Self {
        self.page_stem = stem.into();
        self
    }

    /// Replaces the carousel settings.
    #[must_use]
    pub fn with_carousel(mut self, carousel: CarouselSettings) -> Self {
        self.carousel = carousel;
        self
    }

    /// Records render and build events to `telemetry`.
    #[must_use]
    pub fn with_telemetry(mut self, telemetry: Arc<dyn TelemetrySink>) -> Self {
        self.telemetry = telemetry;
        self
    }

    /// Renders every page and the carousel in memory.
    ///
    /// An empty dataset still produces one page holding no stories.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Template`] when a template fails to compile, a
    /// page fails to render, or the carousel cannot be mounted.
    pub fn render(&self) -> Result<SiteOutput, FeedError> {
        let document = HtmlDocument::new(HtmlRenderer::new()?)
            .with_page_href(PageHref::file(self.page_stem.clone()));
        self.render_into(document)
    }

    fn render_into(&self, document: HtmlDocument) -> Result<SiteOutput, FeedError> {
        let settings = FeedSettings {
            timings: FeedTimings::IMMEDIATE,
            ..self.settings
        };

        let (mut feed, timer) = FeedController::mount_with_telemetry(
            document,
            self.stories.clone(),
            settings,
            Arc::clone(&self.telemetry),
        )
        .ok_or_else(|| FeedError::Template {
            message: "page document has no feedback container".to_owned(),
        })?;
        feed.run_until_idle(Some(timer));

        let page_count = feed.total_pages().max(1);
        let mut pages = Vec::with_capacity(page_count);
        for index in 0..page_count {
            if index > 0 {
                let navigation = i64::try_from(index)
                    .ok()
                    .and_then(|target| feed.go_to_page(target));
                feed.run_until_idle(navigation);
            }
            pages.push(RenderedPage {
                file_name: page_file_name(&self.page_stem, index),
                html: feed.port().render_page()?,
            });
        }

        let mut document = feed.into_port();
        if !mount_carousel(&mut document, &self.stories, &self.carousel) {
            return Err(FeedError::Template {
                message: "carousel slide template or wrapper is missing".to_owned(),
            });
        }
        let carousel_json = serde_json::to_string_pretty(&CarouselInit {
            carousel: document.carousel_config(),
            tooltips: document.tooltip_config(),
        })
        .map_err(|error| FeedError::Template {
            message: format!("failed to serialise carousel configuration: {error}"),
        })?;

        Ok(SiteOutput {
            pages,
            carousel_html: document.render_carousel()?,
            carousel_json,
        })
    }

    /// Renders the site and writes it under `out_dir`, creating directories
    /// as needed.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Io`] when the output cannot be written, or any
    /// error from [`Self::render`].
    pub fn write(&self, out_dir: &Utf8Path) -> Result<SiteManifest, FeedError> {
        let output = self.render()?;
        let dir = open_output_dir(out_dir)?;

        for page in &output.pages {
            write_file(&dir, out_dir, &page.file_name, &page.html)?;
        }
        write_file(&dir, out_dir, CAROUSEL_HTML, &output.carousel_html)?;
        write_file(&dir, out_dir, CAROUSEL_JSON, &output.carousel_json)?;

        let manifest = SiteManifest {
            page_count: output.pages.len(),
            story_count: self.stories.len(),
            page_size: self.settings.page_size.get(),
            generated_at: Utc::now(),
        };
        let manifest_json =
            serde_json::to_string_pretty(&manifest).map_err(|error| FeedError::Io {
                message: format!("failed to serialise build manifest: {error}"),
            })?;
        write_file(&dir, out_dir, MANIFEST_JSON, &manifest_json)?;

        self.telemetry.record(TelemetryEvent::SiteBuilt {
            page_count: manifest.page_count,
            story_count: manifest.story_count,
        });
        Ok(manifest)
    }
}

fn write_file(dir: &Dir, out_dir: &Utf8Path, name: &str, contents: &str) -> Result<(), FeedError> {
    dir.write(name, contents).map_err(|error| FeedError::Io {
        message: format!("failed to write '{out_dir}/{name}': {error}"),
    })
}

/// Opens `out_dir`, creating it and its parents first.
///
/// Relative paths, including ones climbing out with `..`, are resolved
/// against the working directory before any directory is opened.
fn open_output_dir(out_dir: &Utf8Path) -> Result<Dir, FeedError> {
    let resolved = resolve_output_dir(out_dir)?;
    let root = resolved
        .ancestors()
        .last()
        .unwrap_or_else(|| Utf8Path::new("/"));
    let relative = resolved.strip_prefix(root).map_err(|_| FeedError::Io {
        message: format!("failed to normalise output directory '{out_dir}'"),
    })?;
    let base = open_ambient(root.as_str())?;

    if relative.as_str().is_empty() {
        return Ok(base);
    }

    base.create_dir_all(relative).map_err(|error| FeedError::Io {
        message: format!("failed to create output directory '{out_dir}': {error}"),
    })?;
    base.open_dir(relative).map_err(|error| FeedError::Io {
        message: format!("failed to open output directory '{out_dir}': {error}"),
    })
}

/// Makes `out_dir` absolute and folds away `.` and `..` components.
fn resolve_output_dir(out_dir: &Utf8Path) -> Result<Utf8PathBuf, FeedError> {
    let joined = if out_dir.is_absolute() {
        out_dir.to_path_buf()
    } else {
        current_dir()?.join(out_dir)
    };

    let mut resolved = Utf8PathBuf::new();
    for component in joined.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => {
                resolved.pop();
            }
            Utf8Component::Prefix(_) | Utf8Component::RootDir | Utf8Component::Normal(_) => {
                resolved.push(component);
            }
        }
    }
    Ok(resolved)
}

fn current_dir() -> Result<Utf8PathBuf, FeedError> {
    let cwd = std::env::current_dir().map_err(|error| FeedError::Io {
        message: format!("failed to read the working directory: {error}"),
    })?;
    Utf8PathBuf::from_path_buf(cwd).map_err(|path| FeedError::Io {
        message: format!("working directory is not valid UTF-8: {}", path.display()),
    })
}

fn open_ambient(path: &str) -> Result<Dir, FeedError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|error| FeedError::Io {
        message: format!("failed to open directory '{path}': {error}"),
    })
}

#[cfg(test)]
#[path = "site_tests.rs"]
mod tests;
