//! The paginated feed state machine.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use crate::render::{Mount, PageView, RenderPort, TransitionPhase};
use crate::stories::{Story, StoryFilter, assign_image_positions};
use crate::telemetry::{NoopTelemetrySink, TelemetryEvent, TelemetrySink};

use super::controls::PaginationControls;
use super::messages::{FeedMsg, Timer};
use super::pagination::{DEFAULT_PAGE_SIZE, Paginator};
use super::token::{RenderRequests, RenderToken};

/// Delays used when sequencing a page change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedTimings {
    /// How long the loading skeleton stays up before a render commits.
    pub render_delay: Duration,
    /// Length of the fade-out before content is swapped.
    pub fade_out: Duration,
    /// Length of the fade-in before the container returns to neutral.
    pub fade_in: Duration,
}

impl FeedTimings {
    /// Timings matching the site stylesheet transitions.
    pub const DEFAULT: Self = Self {
        render_delay: Duration::from_millis(1500),
        fade_out: Duration::from_millis(300),
        fade_in: Duration::from_millis(300),
    };

    /// Zero delays, for drivers that replay timers immediately.
    pub const IMMEDIATE: Self = Self {
        render_delay: Duration::ZERO,
        fade_out: Duration::ZERO,
        fade_in: Duration::ZERO,
    };
}

impl Default for FeedTimings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Construction-time settings for a [`FeedController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSettings {
    /// Stories per page.
    pub page_size: NonZeroUsize,
    /// Transition and loading delays.
    pub timings: FeedTimings,
    /// Subset of the dataset to paginate.
    pub filter: StoryFilter,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            timings: FeedTimings::DEFAULT,
            filter: StoryFilter::All,
        }
    }
}

/// Where the controller is in the render lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    /// No render scheduled or running.
    #[default]
    Idle,
    /// A render is waiting for its loading delay to elapse.
    Pending {
        /// Token of the newest request.
        token: RenderToken,
        /// Page that request targets.
        page: usize,
    },
    /// A render has committed and its transition is running.
    Committed {
        /// Token of the committed request.
        token: RenderToken,
        /// Page now current.
        page: usize,
    },
}

/// Paginated feedback view bound to a rendering port.
///
/// All state lives here: the committed page, the filtered dataset, the
/// request counter and the transition phase. Independent instances share
/// nothing.
pub struct FeedController<P> {
    port: P,
    stories: Vec<Story>,
    paginator: Paginator,
    filter: StoryFilter,
    timings: FeedTimings,
    current_page: usize,
    requests: RenderRequests,
    render_state: RenderState,
    transition: TransitionPhase,
    telemetry: Arc<dyn TelemetrySink>,
}

impl<P: RenderPort> FeedController<P> {
    /// Mounts the feed onto `port` and schedules the first page.
    ///
    /// Returns `None`, after logging a warning, when the port has no
    /// feedback container. Otherwise the image placement flags are derived,
    /// the skeleton is already showing and the returned timer commits page
    /// zero.
    pub fn mount(port: P, stories: Vec<Story>, settings: FeedSettings) -> Option<(Self, Timer)> {
        Self::mount_with_telemetry(port, stories, settings, Arc::new(NoopTelemetrySink))
    }

    /// Like [`Self::mount`], recording render outcomes to `telemetry`.
    pub fn mount_with_telemetry(
        port: P,
        dataset: Vec<Story>,
        settings: FeedSettings,
        telemetry: Arc<dyn TelemetrySink>,
    ) -> Option<(Self, Timer)> {
        if !port.has_mount(Mount::FeedbackBlocks) {
            tracing::warn!("feedback blocks container not found");
            return None;
        }

        let stories = assign_image_positions(dataset);
        let paginator = Paginator::new(settings.filter.apply(&stories), settings.page_size);
        let mut controller = Self {
            port,
            stories,
            paginator,
            filter: settings.filter,
            timings: settings.timings,
            current_page: 0,
            requests: RenderRequests::new(),
            render_state: RenderState::Idle,
            transition: TransitionPhase::Neutral,
            telemetry,
        };

        controller.port.mark_container();
        let timer = controller.schedule_render(0);
        Some((controller, timer))
    }

    /// Applies a message and returns the next timer to arm, if any.
    pub fn update(&mut self, msg: &FeedMsg) -> Option<Timer> {
        match *msg {
            FeedMsg::GoToPage(target) => self.go_to_page(target),
            FeedMsg::PreviousPage => self
                .current_page
                .checked_sub(1)
                .and_then(|page| self.go_to_index(page)),
            FeedMsg::NextPage => self
                .current_page
                .checked_add(1)
                .and_then(|page| self.go_to_index(page)),
            FeedMsg::SetFilter(filter) => Some(self.set_filter(filter)),
            FeedMsg::RenderDue { token, page } => self.handle_render_due(token, page),
            FeedMsg::SwapContent { token, page } => self.handle_swap_content(token, page),
            FeedMsg::TransitionSettled { token } => self.handle_transition_settled(token),
        }
    }

    /// Requests page `target`.
    ///
    /// Negative targets and targets at or past the last page are ignored and
    /// leave every piece of state untouched.
    pub fn go_to_page(&mut self, target: i64) -> Option<Timer> {
        let page = self.paginator.resolve(target)?;
        Some(self.schedule_render(page))
    }

    /// Requests page `index`, ignoring indices past the last page.
    pub fn go_to_index(&mut self, index: usize) -> Option<Timer> {
        if index >= self.paginator.total_pages() {
            return None;
        }
        Some(self.schedule_render(index))
    }

    /// Replaces the filter and schedules the first page of the new subset.
    pub fn set_filter(&mut self, filter: StoryFilter) -> Timer {
        self.filter = filter;
        self.paginator = Paginator::new(filter.apply(&self.stories), self.paginator.page_size());
        self.current_page = 0;
        self.schedule_render(0)
    }

    /// Delivers timers immediately until the controller is idle.
    ///
    /// Used by drivers that do not need real delays, such as the static site
    /// builder.
    pub fn run_until_idle(&mut self, timer: Option<Timer>) {
        let mut next = timer;
        while let Some(pending) = next {
            next = self.update(&pending.msg);
        }
    }

    fn schedule_render(&mut self, page: usize) -> Timer {
        let token = self.requests.issue();
        self.render_state = RenderState::Pending { token, page };

        if self.transition != TransitionPhase::Neutral {
            self.set_transition(TransitionPhase::Neutral);
        }
        self.port.show_skeleton();

        Timer::after(
            self.timings.render_delay,
            FeedMsg::RenderDue { token, page },
        )
    }

    fn handle_render_due(&mut self, token: RenderToken, page: usize) -> Option<Timer> {
        if !self.requests.is_current(token) {
            tracing::debug!(
                "discarding render of page {page} (token {}); a newer request is pending",
                token.value()
            );
            self.telemetry.record(TelemetryEvent::RenderDiscarded {
                page,
                token: token.value(),
            });
            return None;
        }

        self.current_page = page;
        self.render_state = RenderState::Committed { token, page };
        self.telemetry.record(TelemetryEvent::RenderCommitted {
            page,
            token: token.value(),
        });

        self.set_transition(TransitionPhase::Exiting);
        self.render_controls();

        Some(Timer::after(
            self.timings.fade_out,
            FeedMsg::SwapContent { token, page },
        ))
    }

    fn handle_swap_content(&mut self, token: RenderToken, page: usize) -> Option<Timer> {
        if !self.requests.is_current(token) {
            tracing::debug!("skipping content swap for superseded page {page}");
            return None;
        }

        self.port.show_page(PageView {
            index: page,
            total_pages: self.paginator.total_pages(),
            stories: self.paginator.page(page),
        });
        self.set_transition(TransitionPhase::Entering);
        self.port.scroll_to_top();

        Some(Timer::after(
            self.timings.fade_in,
            FeedMsg::TransitionSettled { token },
        ))
    }

    fn handle_transition_settled(&mut self, token: RenderToken) -> Option<Timer> {
        if !self.requests.is_current(token) {
            tracing::debug!("skipping transition reset for superseded request");
            return None;
        }

        self.set_transition(TransitionPhase::Neutral);
        self.render_state = RenderState::Idle;
        None
    }

    fn set_transition(&mut self, phase: TransitionPhase) {
        self.transition = phase;
        self.port.set_transition(phase);
    }

    fn render_controls(&mut self) {
        if !self.port.has_mount(Mount::Pagination) {
            return;
        }
        let controls = PaginationControls::new(self.current_page, self.paginator.total_pages());
        self.port.show_controls(&controls);
    }
}

impl<P> FeedController<P> {
    /// Returns the committed page index.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns the number of pages in the filtered set.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.paginator.total_pages()
    }

    /// Returns the stories on the committed page.
    #[must_use]
    pub fn visible_stories(&self) -> &[Story] {
        self.paginator.page(self.current_page)
    }

    /// Returns the active filter.
    #[must_use]
    pub const fn filter(&self) -> StoryFilter {
        self.filter
    }

    /// Returns the render lifecycle state.
    #[must_use]
    pub const fn render_state(&self) -> RenderState {
        self.render_state
    }

    /// Returns the current transition phase.
    #[must_use]
    pub const fn transition(&self) -> TransitionPhase {
        self.transition
    }

    /// Returns the most recently issued request token.
    #[must_use]
    pub const fn latest_token(&self) -> Option<RenderToken> {
        self.requests.latest()
    }

    /// Returns the full, unfiltered dataset.
    #[must_use]
    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Returns the rendering port.
    #[must_use]
    pub const fn port(&self) -> &P {
        &self.port
    }

    /// Returns the rendering port mutably.
    pub const fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Consumes the controller and returns its port.
    #[must_use]
    pub fn into_port(self) -> P {
        self.port
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
