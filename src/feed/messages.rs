//! Messages consumed by the feed update loop and the timers that carry them.

use std::time::Duration;

use crate::stories::StoryFilter;

use super::token::RenderToken;

/// Messages for the paginated feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedMsg {
    // Navigation
    /// Request a page by zero-based index; out-of-range targets are ignored.
    GoToPage(i64),
    /// Request the page before the committed one.
    PreviousPage,
    /// Request the page after the committed one.
    NextPage,
    /// Replace the active filter and start again from the first page.
    SetFilter(StoryFilter),

    // Delayed steps
    /// The loading delay for a scheduled render has elapsed.
    RenderDue {
        /// Token issued when the render was scheduled.
        token: RenderToken,
        /// Page the render was scheduled for.
        page: usize,
    },
    /// The exit transition has finished; swap in the page content.
    SwapContent {
        /// Token of the commit that started the transition.
        token: RenderToken,
        /// Page being displayed.
        page: usize,
    },
    /// The enter transition has finished; return to the neutral state.
    TransitionSettled {
        /// Token of the commit that started the transition.
        token: RenderToken,
    },
}

/// A message to deliver back to the controller after a delay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    /// How long to wait before delivering [`Self::msg`].
    pub delay: Duration,
    /// Message to deliver.
    pub msg: FeedMsg,
}

impl Timer {
    /// Creates a timer delivering `msg` after `delay`.
    #[must_use]
    pub const fn after(delay: Duration, msg: FeedMsg) -> Self {
        Self { delay, msg }
    }

    /// Waits on the tokio clock and yields the carried message.
    pub async fn elapsed(self) -> FeedMsg {
        tokio::time::sleep(self.delay).await;
        self.msg
    }
}
