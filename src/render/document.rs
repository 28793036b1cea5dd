//! In-memory HTML document the feed and carousel render into.

use std::collections::BTreeSet;

use crate::carousel::{CarouselConfig, CarouselPort, CarouselSlide, TooltipConfig};
use crate::error::FeedError;
use crate::feed::PaginationControls;

use super::html::{HtmlRenderer, PageHref, PageMarkup};
use super::port::{Mount, PageView, RenderPort, TransitionPhase};

/// Class marking the feedback container as transition-capable.
pub const CONTAINER_CLASS: &str = "feedback-container";

/// Document holding the rendered mount points as HTML strings.
///
/// A mount that is absent stays `None` and every write to it is skipped.
/// Template failures are logged and leave the previous content in place.
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    renderer: HtmlRenderer,
    page_href: PageHref,
    feedback: Option<String>,
    pagination: Option<String>,
    container_classes: BTreeSet<&'static str>,
    shown_page: Option<(usize, usize)>,
    scroll_requests: usize,
    slide_template: bool,
    slides: Option<Vec<String>>,
    carousel_config: Option<CarouselConfig>,
    tooltip_config: Option<TooltipConfig>,
}

impl HtmlDocument {
    /// Creates a document with every mount point present.
    #[must_use]
    pub fn new(renderer: HtmlRenderer) -> Self {
        Self {
            renderer,
            page_href: PageHref::Fragment,
            feedback: Some(String::new()),
            pagination: Some(String::new()),
            container_classes: BTreeSet::new(),
            shown_page: None,
            scroll_requests: 0,
            slide_template: true,
            slides: Some(Vec::new()),
            carousel_config: None,
            tooltip_config: None,
        }
    }

    /// Uses `page_href` for pagination links.
    #[must_use]
    pub fn with_page_href(mut self, page_href: PageHref) -> Self {
        self.page_href = page_href;
        self
    }

    /// Removes a feed mount point.
    #[must_use]
    pub fn without(mut self, mount: Mount) -> Self {
        match mount {
            Mount::FeedbackBlocks => self.feedback = None,
            Mount::Pagination => self.pagination = None,
        }
        self
    }

    /// Removes the carousel slide template.
    #[must_use]
    pub const fn without_slide_template(mut self) -> Self {
        self.slide_template = false;
        self
    }

    /// Removes the carousel slide wrapper.
    #[must_use]
    pub fn without_slide_wrapper(mut self) -> Self {
        self.slides = None;
        self
    }

    /// Returns the feedback container content.
    #[must_use]
    pub fn feedback_html(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    /// Returns the pagination container content.
    #[must_use]
    pub fn pagination_html(&self) -> Option<&str> {
        self.pagination.as_deref()
    }

    /// Returns the container classes, space-separated and sorted.
    #[must_use]
    pub fn container_classes(&self) -> String {
        self.container_classes
            .iter()
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Returns true when the feedback container carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.container_classes.contains(class)
    }

    /// Returns the page last shown as `(index, total_pages)`.
    #[must_use]
    pub const fn shown_page(&self) -> Option<(usize, usize)> {
        self.shown_page
    }

    /// Returns how many times the feed asked to scroll to the top.
    #[must_use]
    pub const fn scroll_requests(&self) -> usize {
        self.scroll_requests
    }

    /// Returns the rendered carousel slides, if the wrapper exists.
    #[must_use]
    pub fn slides(&self) -> Option<&[String]> {
        self.slides.as_deref()
    }

    /// Returns the configuration the carousel was initialised with.
    #[must_use]
    pub const fn carousel_config(&self) -> Option<&CarouselConfig> {
        self.carousel_config.as_ref()
    }

    /// Returns the configuration the tooltips were initialised with.
    #[must_use]
    pub const fn tooltip_config(&self) -> Option<&TooltipConfig> {
        self.tooltip_config.as_ref()
    }

    /// Assembles the current state into a standalone feedback page.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Template`] when rendering fails.
    pub fn render_page(&self) -> Result<String, FeedError> {
        let (index, total_pages) = self.shown_page.unwrap_or_default();
        self.renderer.page(&PageMarkup {
            index,
            total_pages,
            classes: &self.container_classes(),
            blocks: self.feedback.as_deref().unwrap_or_default(),
            controls: self.pagination.as_deref().unwrap_or_default(),
        })
    }

    /// Wraps the appended slides in the carousel container.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Template`] when rendering fails.
    pub fn render_carousel(&self) -> Result<String, FeedError> {
        self.renderer
            .carousel(self.slides.as_deref().unwrap_or_default())
    }

    fn replace_feedback(&mut self, rendered: Result<String, FeedError>, what: &str) {
        let Some(slot) = self.feedback.as_mut() else {
            return;
        };
        match rendered {
            Ok(html) => *slot = html,
            Err(error) => tracing::warn!("failed to render {what}: {error}"),
        }
    }
}

impl RenderPort for HtmlDocument {
    fn has_mount(&self, mount: Mount) -> bool {
        match mount {
            Mount::FeedbackBlocks => self.feedback.is_some(),
            Mount::Pagination => self.pagination.is_some(),
        }
    }

    fn mark_container(&mut self) {
        self.container_classes.insert(CONTAINER_CLASS);
    }

    fn show_skeleton(&mut self) {
        let rendered = self.renderer.skeleton();
        self.replace_feedback(rendered, "loading skeleton");
    }

    fn show_page(&mut self, page: PageView<'_>) {
        let rendered = self.renderer.feedback_blocks(page.stories);
        if rendered.is_ok() && self.feedback.is_some() {
            self.shown_page = Some((page.index, page.total_pages));
        }
        self.replace_feedback(rendered, "feedback blocks");
    }

    fn show_controls(&mut self, controls: &PaginationControls) {
        if self.pagination.is_none() {
            return;
        }
        match self.renderer.pagination(controls, &self.page_href) {
            Ok(html) => self.pagination = Some(html),
            Err(error) => tracing::warn!("failed to render pagination controls: {error}"),
        }
    }

    fn set_transition(&mut self, phase: TransitionPhase) {
        for class in [TransitionPhase::Exiting, TransitionPhase::Entering]
            .into_iter()
            .filter_map(TransitionPhase::css_class)
        {
            self.container_classes.remove(class);
        }
        if let Some(class) = phase.css_class() {
            self.container_classes.insert(class);
        }
    }

    fn scroll_to_top(&mut self) {
        self.scroll_requests = self.scroll_requests.saturating_add(1);
    }
}

impl CarouselPort for HtmlDocument {
    fn has_slide_template(&self) -> bool {
        self.slide_template
    }

    fn has_slide_wrapper(&self) -> bool {
        self.slides.is_some()
    }

    fn append_slide(&mut self, slide: &CarouselSlide) {
        let Some(slides) = self.slides.as_mut() else {
            return;
        };
        match self.renderer.carousel_slide(slide) {
            Ok(html) => slides.push(html),
            Err(error) => tracing::warn!("failed to render carousel slide: {error}"),
        }
    }

    fn init_carousel(&mut self, config: &CarouselConfig) {
        self.carousel_config = Some(config.clone());
    }

    fn init_tooltips(&mut self, config: &TooltipConfig) {
        self.tooltip_config = Some(config.clone());
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::carousel::{CarouselSettings, mount_carousel};
    use crate::feed::test_support::numbered_stories;
    use crate::feed::{FeedController, FeedSettings, FeedTimings};

    #[fixture]
    fn document() -> HtmlDocument {
        HtmlDocument::new(HtmlRenderer::new().expect("templates should compile"))
    }

    fn immediate() -> FeedSettings {
        FeedSettings {
            timings: FeedTimings::IMMEDIATE,
            ..FeedSettings::default()
        }
    }

    #[rstest]
    fn mounted_feed_shows_skeleton_until_render(document: HtmlDocument) {
        let (feed, _timer) = FeedController::mount(document, numbered_stories(7), immediate())
            .expect("feed should mount");

        let html = feed.port().feedback_html().expect("feedback mount");
        assert!(html.contains("feedback-loader"));
        assert!(feed.port().has_class(CONTAINER_CLASS));
    }

    #[rstest]
    fn settled_feed_holds_page_and_neutral_container(document: HtmlDocument) {
        let (mut feed, timer) = FeedController::mount(document, numbered_stories(7), immediate())
            .expect("feed should mount");
        feed.run_until_idle(Some(timer));

        let port = feed.port();
        let html = port.feedback_html().expect("feedback mount");
        assert!(html.contains("story 4"));
        assert!(!html.contains("story 5"));
        assert_eq!(port.container_classes(), CONTAINER_CLASS);
        assert_eq!(port.shown_page(), Some((0, 2)));
        assert_eq!(port.scroll_requests(), 1);
        assert!(
            port.pagination_html()
                .is_some_and(|controls| controls.contains("page-item active"))
        );
    }

    #[rstest]
    fn transition_classes_replace_each_other(mut document: HtmlDocument) {
        document.set_transition(TransitionPhase::Exiting);
        document.set_transition(TransitionPhase::Entering);

        assert!(document.has_class("fade-in"));
        assert!(!document.has_class("fade-out"));

        document.set_transition(TransitionPhase::Neutral);
        assert_eq!(document.container_classes(), "");
    }

    #[rstest]
    fn missing_pagination_mount_stays_absent(document: HtmlDocument) {
        let without_controls = document.without(Mount::Pagination);
        let (mut feed, timer) =
            FeedController::mount(without_controls, numbered_stories(7), immediate())
                .expect("feed should mount");
        feed.run_until_idle(Some(timer));

        assert!(feed.port().pagination_html().is_none());
        assert!(!feed.port().has_mount(Mount::Pagination));
    }

    #[rstest]
    fn render_page_wraps_blocks_and_controls(document: HtmlDocument) {
        let (mut feed, timer) = FeedController::mount(document, numbered_stories(3), immediate())
            .expect("feed should mount");
        feed.run_until_idle(Some(timer));

        let page = feed.port().render_page().expect("page should render");

        assert!(page.contains("data-page=\"1\""));
        assert!(page.contains("story 2"));
        assert!(page.contains("class=\"pagination justify-content-center\""));
    }

    #[rstest]
    fn carousel_mounts_into_document(mut document: HtmlDocument) {
        assert!(mount_carousel(
            &mut document,
            &numbered_stories(2),
            &CarouselSettings::default()
        ));

        assert_eq!(document.slides().map(<[String]>::len), Some(4));
        assert!(document.carousel_config().is_some());
        assert!(document.tooltip_config().is_some());
        let carousel = document.render_carousel().expect("carousel should render");
        assert!(carousel.contains("swiper-wrapper"));
        assert!(carousel.contains("story 1"));
    }

    #[rstest]
    fn carousel_without_wrapper_is_skipped(document: HtmlDocument) {
        let mut bare = document.without_slide_wrapper();

        assert!(!mount_carousel(
            &mut bare,
            &numbered_stories(2),
            &CarouselSettings::default()
        ));
        assert!(bare.carousel_config().is_none());
    }
}
