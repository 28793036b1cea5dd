//! Testimonial records and dataset loading.
//!
//! Stories come from a static JSON array shipped with the site. The dataset
//! is read once, passed through [`assign_image_positions`] to derive the
//! layout flag, and is immutable from then on.
//!
//! # File format
//!
//! ```json
//! [
//!   { "name": "Ada", "text": "Great docs", "role": "Engineer",
//!     "img": "/img/ada.png", "linkedin": "https://www.linkedin.com/in/ada" },
//!   { "name": "Grace", "text": "Helped a lot" }
//! ]
//! ```
//!
//! `image` and `link` are accepted as aliases of `img` and `linkedin`.

mod filter;
mod layout;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FeedError;

pub use filter::StoryFilter;
pub use layout::assign_image_positions;

/// A single testimonial record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Author display name.
    pub name: String,
    /// Testimonial body.
    pub text: String,
    /// Author role or title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Photo URL.
    #[serde(
        default,
        rename = "img",
        alias = "image",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    /// Author profile URL.
    #[serde(
        default,
        rename = "linkedin",
        alias = "link",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_link: Option<String>,
    /// Whether the text column precedes the image column.
    ///
    /// Derived once by [`assign_image_positions`]; never read from the file.
    #[serde(skip)]
    pub image_first: bool,
}

impl Story {
    /// Creates a story with only the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sets the author role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the photo URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Sets the profile URL.
    #[must_use]
    pub fn with_profile_link(mut self, link: impl Into<String>) -> Self {
        self.profile_link = Some(link.into());
        self
    }

    /// Returns the photo URL when one is present and non-blank.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        non_blank(self.image.as_deref())
    }

    /// Returns true when the story carries a non-blank photo URL.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image_url().is_some()
    }

    /// Returns the role when one is present and non-blank.
    #[must_use]
    pub fn role_label(&self) -> Option<&str> {
        non_blank(self.role.as_deref())
    }

    /// Returns the profile link when it parses as an `http(s)` URL.
    ///
    /// Anything else is dropped so the author renders as plain text.
    #[must_use]
    pub fn profile_url(&self) -> Option<Url> {
        let raw = non_blank(self.profile_link.as_deref())?;
        match Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
            Ok(url) => {
                tracing::debug!(
                    "ignoring profile link with scheme '{}' for {}",
                    url.scheme(),
                    self.name
                );
                None
            }
            Err(error) => {
                tracing::debug!("ignoring invalid profile link for {}: {error}", self.name);
                None
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

/// Parses a JSON story array and derives the layout flags.
///
/// # Errors
///
/// Returns [`FeedError::InvalidStories`] when the input is not a JSON array
/// of story records.
pub fn parse_stories(source: &str) -> Result<Vec<Story>, FeedError> {
    let stories: Vec<Story> =
        serde_json::from_str(source).map_err(|error| FeedError::InvalidStories {
            message: error.to_string(),
        })?;
    Ok(assign_image_positions(stories))
}

/// Reads and parses the dataset file at `path`.
///
/// # Errors
///
/// Returns [`FeedError::Io`] when the file cannot be read and
/// [`FeedError::InvalidStories`] when its contents do not parse.
pub fn load_stories(path: &Utf8Path) -> Result<Vec<Story>, FeedError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| FeedError::Io {
        message: format!("invalid stories path '{path}': no file name"),
    })?;

    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| FeedError::Io {
        message: format!("failed to open stories directory '{parent}': {error}"),
    })?;
    let source = dir
        .read_to_string(file_name)
        .map_err(|error| FeedError::Io {
            message: format!("failed to read stories file '{path}': {error}"),
        })?;

    parse_stories(&source)
}

#[cfg(test)]
#[path = "stories_tests.rs"]
mod tests;
