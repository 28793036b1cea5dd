//! The surface the feed controller draws on.
//!
//! In a browser this is the DOM; here it is whatever adapter the driver
//! supplies: [`super::HtmlDocument`] for generated pages, the terminal
//! surface for the preview, or a recording double in tests.

use crate::feed::PaginationControls;
use crate::stories::Story;

/// Mount points the feed writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mount {
    /// Container receiving story blocks and the loading skeleton.
    FeedbackBlocks,
    /// Container receiving the pagination controls.
    Pagination,
}

/// Visual state of the feedback container during a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPhase {
    /// No transition class applied.
    #[default]
    Neutral,
    /// Outgoing content is fading out.
    Exiting,
    /// Incoming content is fading in.
    Entering,
}

impl TransitionPhase {
    /// Returns the stylesheet class for this phase.
    #[must_use]
    pub const fn css_class(self) -> Option<&'static str> {
        match self {
            Self::Neutral => None,
            Self::Exiting => Some("fade-out"),
            Self::Entering => Some("fade-in"),
        }
    }
}

/// A committed page handed to the port for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView<'a> {
    /// Zero-based page index.
    pub index: usize,
    /// Number of pages in the filtered set.
    pub total_pages: usize,
    /// Stories on this page, already carrying their layout flag.
    pub stories: &'a [Story],
}

/// Rendering port for the paginated feed.
pub trait RenderPort {
    /// Returns true when the given mount point exists.
    fn has_mount(&self, mount: Mount) -> bool;

    /// Marks the feedback container as transition-capable.
    fn mark_container(&mut self);

    /// Replaces the feedback content with the loading skeleton.
    fn show_skeleton(&mut self);

    /// Replaces the feedback content with the stories of `page`.
    fn show_page(&mut self, page: PageView<'_>);

    /// Replaces the pagination controls.
    fn show_controls(&mut self, controls: &PaginationControls);

    /// Applies the visual state for a transition phase.
    fn set_transition(&mut self, phase: TransitionPhase);

    /// Brings the top of the feed into view.
    fn scroll_to_top(&mut self) {}
}
