//! Subset selection applied before pagination.

use super::Story;

/// Which stories the paginated feed shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoryFilter {
    /// Every story in dataset order.
    #[default]
    All,
    /// Only stories with a photo.
    WithImage,
    /// Only stories whose author links to a valid profile.
    WithProfileLink,
}

impl StoryFilter {
    /// Returns a short label for status lines.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::WithImage => "With photo",
            Self::WithProfileLink => "With profile",
        }
    }

    /// Returns the next filter in display order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::WithImage,
            Self::WithImage => Self::WithProfileLink,
            Self::WithProfileLink => Self::All,
        }
    }

    /// Returns true when `story` belongs to this subset.
    #[must_use]
    pub fn matches(self, story: &Story) -> bool {
        match self {
            Self::All => true,
            Self::WithImage => story.has_image(),
            Self::WithProfileLink => story.profile_url().is_some(),
        }
    }

    /// Clones the matching stories, preserving order and layout flags.
    #[must_use]
    pub fn apply(self, stories: &[Story]) -> Vec<Story> {
        stories
            .iter()
            .filter(|story| self.matches(story))
            .cloned()
            .collect()
    }
}
