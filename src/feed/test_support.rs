//! Recording render port for exercising the feed without a real surface.

use std::collections::BTreeSet;

use crate::render::{Mount, PageView, RenderPort, TransitionPhase};

use super::PaginationControls;

/// One call received by a [`RecordingPort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortCall {
    /// `mark_container` was called.
    MarkContainer,
    /// The skeleton replaced the feedback content.
    Skeleton,
    /// A page replaced the feedback content.
    Page {
        /// Zero-based page index.
        index: usize,
        /// Names of the stories shown, in order.
        names: Vec<String>,
    },
    /// Pagination controls were replaced.
    Controls(PaginationControls),
    /// The transition phase changed.
    Transition(TransitionPhase),
    /// The feed scrolled to the top.
    ScrollToTop,
}

/// Render port that records every call and keeps the latest content.
#[derive(Debug, Clone)]
pub struct RecordingPort {
    mounts: BTreeSet<Mount>,
    calls: Vec<PortCall>,
}

impl Default for RecordingPort {
    fn default() -> Self {
        Self {
            mounts: BTreeSet::from([Mount::FeedbackBlocks, Mount::Pagination]),
            calls: Vec::new(),
        }
    }
}

impl RecordingPort {
    /// Creates a port with both mount points present.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a mount point, simulating a page without that element.
    #[must_use]
    pub fn without(mut self, mount: Mount) -> Self {
        self.mounts.remove(&mount);
        self
    }

    /// Returns every call received so far.
    #[must_use]
    pub fn calls(&self) -> &[PortCall] {
        &self.calls
    }

    /// Returns how many calls have been received.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Forgets the calls received so far.
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Returns the story names of the most recently shown page.
    #[must_use]
    pub fn displayed_names(&self) -> Option<&[String]> {
        self.calls.iter().rev().find_map(|call| match call {
            PortCall::Page { names, .. } => Some(names.as_slice()),
            _ => None,
        })
    }

    /// Returns the most recently shown page index.
    #[must_use]
    pub fn displayed_page(&self) -> Option<usize> {
        self.calls.iter().rev().find_map(|call| match call {
            PortCall::Page { index, .. } => Some(*index),
            _ => None,
        })
    }

    /// Returns the most recently rendered controls.
    #[must_use]
    pub fn latest_controls(&self) -> Option<&PaginationControls> {
        self.calls.iter().rev().find_map(|call| match call {
            PortCall::Controls(controls) => Some(controls),
            _ => None,
        })
    }

    /// Returns every page index shown, in order.
    #[must_use]
    pub fn shown_pages(&self) -> Vec<usize> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                PortCall::Page { index, .. } => Some(*index),
                _ => None,
            })
            .collect()
    }
}

impl RenderPort for RecordingPort {
    fn has_mount(&self, mount: Mount) -> bool {
        self.mounts.contains(&mount)
    }

    fn mark_container(&mut self) {
        self.calls.push(PortCall::MarkContainer);
    }

    fn show_skeleton(&mut self) {
        self.calls.push(PortCall::Skeleton);
    }

    fn show_page(&mut self, page: PageView<'_>) {
        self.calls.push(PortCall::Page {
            index: page.index,
            names: page.stories.iter().map(|story| story.name.clone()).collect(),
        });
    }

    fn show_controls(&mut self, controls: &PaginationControls) {
        self.calls.push(PortCall::Controls(controls.clone()));
    }

    fn set_transition(&mut self, phase: TransitionPhase) {
        self.calls.push(PortCall::Transition(phase));
    }

    fn scroll_to_top(&mut self) {
        self.calls.push(PortCall::ScrollToTop);
    }
}

/// Builds `count` stories named `story 0`, `story 1`, ...
#[must_use]
pub fn numbered_stories(count: usize) -> Vec<crate::stories::Story> {
    (0..count)
        .map(|index| crate::stories::Story::new(format!("story {index}"), format!("text {index}")))
        .collect()
}
