//! Looping story carousel shown outside the feedback page.
//!
//! The carousel reuses the same dataset as the paginated feed. Slides are
//! built here; the sliding itself and tooltips belong to external browser
//! libraries that receive the [`CarouselConfig`] and [`TooltipConfig`]
//! through a [`CarouselPort`].

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::stories::Story;

/// Minimum number of slides the looping carousel needs.
pub const MIN_LOOP_SLIDES: usize = 4;

/// Background classes cycled across slides.
pub const SLIDE_BACKGROUNDS: [&str; 2] = ["bg-primary", "bg-default"];

/// Text class applied to every slide.
pub const SLIDE_TEXT_CLASS: &str = "text-white";

/// Default autoplay delay of the carousel.
pub const DEFAULT_AUTOPLAY_DELAY: Duration = Duration::from_millis(3000);

/// Carousel construction settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselSettings {
    /// Delay between automatic slide changes.
    pub autoplay_delay: Duration,
    /// Link target of every slide (the paginated feedback page).
    pub feedback_href: String,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            autoplay_delay: DEFAULT_AUTOPLAY_DELAY,
            feedback_href: "/feedback".to_owned(),
        }
    }
}

/// One populated carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselSlide {
    /// Author display name.
    pub name: String,
    /// Testimonial body, unquoted.
    pub text: String,
    /// Photo URL; the photo element is hidden when absent.
    pub image: Option<String>,
    /// Validated profile URL; the author is plain text when absent.
    pub profile: Option<String>,
    /// Link target of the card.
    pub href: String,
    /// Background class.
    pub background: &'static str,
    /// Text colour class.
    pub text_class: &'static str,
}

impl CarouselSlide {
    fn from_story(story: &Story, href: &str, background: &'static str) -> Self {
        Self {
            name: story.name.clone(),
            text: story.text.clone(),
            image: story.image_url().map(str::to_owned),
            profile: story.profile_url().map(String::from),
            href: href.to_owned(),
            background,
            text_class: SLIDE_TEXT_CLASS,
        }
    }
}

/// Builds slides in dataset order.
///
/// Datasets shorter than [`MIN_LOOP_SLIDES`] are repeated once so the loop
/// has enough slides to cycle smoothly. Background classes restart with each
/// pass over the dataset.
#[must_use]
pub fn build_slides(stories: &[Story], settings: &CarouselSettings) -> Vec<CarouselSlide> {
    let repeats = if stories.len() < MIN_LOOP_SLIDES { 2 } else { 1 };

    std::iter::repeat_n(stories, repeats)
        .flat_map(|pass| pass.iter().zip(SLIDE_BACKGROUNDS.iter().copied().cycle()))
        .map(|(story, background)| {
            CarouselSlide::from_story(story, &settings.feedback_href, background)
        })
        .collect()
}

/// Autoplay options of the carousel library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Autoplay {
    /// Milliseconds between slides.
    pub delay: u64,
    /// Whether user interaction stops autoplay.
    pub disable_on_interaction: bool,
}

/// Pagination bullet options of the carousel library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bullets {
    /// Selector of the bullet container.
    pub el: String,
    /// Whether bullets navigate on click.
    pub clickable: bool,
}

/// Responsive override applied from a minimum viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Breakpoint {
    /// Slides visible at once.
    pub slides_per_view: u32,
}

/// Initialisation options handed to the carousel library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Whether the carousel wraps around.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Slides visible at once on wide viewports.
    pub slides_per_view: u32,
    /// Gap between slides in pixels.
    pub space_between: u32,
    /// Autoplay behaviour.
    pub autoplay: Autoplay,
    /// Bullet navigation.
    pub pagination: Bullets,
    /// Overrides keyed by minimum viewport width in pixels.
    pub breakpoints: BTreeMap<u32, Breakpoint>,
}

impl CarouselConfig {
    /// Builds the fixed carousel configuration with the given autoplay delay.
    #[must_use]
    pub fn new(settings: &CarouselSettings) -> Self {
        let delay = u64::try_from(settings.autoplay_delay.as_millis()).unwrap_or(u64::MAX);

        Self {
            looping: true,
            slides_per_view: 3,
            space_between: 20,
            autoplay: Autoplay {
                delay,
                disable_on_interaction: false,
            },
            pagination: Bullets {
                el: ".swiper-pagination".to_owned(),
                clickable: true,
            },
            breakpoints: BTreeMap::from([
                (0, Breakpoint { slides_per_view: 1 }),
                (768, Breakpoint { slides_per_view: 2 }),
                (992, Breakpoint { slides_per_view: 3 }),
            ]),
        }
    }
}

/// Initialisation options handed to the tooltip library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TooltipConfig {
    /// Selector of elements receiving a tooltip.
    pub selector: String,
    /// Events that show the tooltip.
    pub trigger: String,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            selector: "[data-bs-toggle=\"tooltip\"]".to_owned(),
            trigger: "hover focus".to_owned(),
        }
    }
}

/// Surface the carousel is mounted on.
pub trait CarouselPort {
    /// Returns true when a slide template is available to clone.
    fn has_slide_template(&self) -> bool;

    /// Returns true when the slide wrapper element exists.
    fn has_slide_wrapper(&self) -> bool;

    /// Appends one populated slide to the wrapper.
    fn append_slide(&mut self, slide: &CarouselSlide);

    /// Initialises the carousel library.
    fn init_carousel(&mut self, config: &CarouselConfig);

    /// Initialises the tooltip library.
    fn init_tooltips(&mut self, config: &TooltipConfig);
}

/// Populates and initialises the carousel.
///
/// Returns `false`, after logging a warning, when the template or wrapper is
/// missing; nothing is mutated in that case.
pub fn mount_carousel<P: CarouselPort>(
    port: &mut P,
    stories: &[Story],
    settings: &CarouselSettings,
) -> bool {
    if !port.has_slide_template() {
        tracing::warn!("story card template not found; carousel not mounted");
        return false;
    }
    if !port.has_slide_wrapper() {
        tracing::warn!("carousel slide wrapper not found; carousel not mounted");
        return false;
    }

    for slide in build_slides(stories, settings) {
        port.append_slide(&slide);
    }
    port.init_carousel(&CarouselConfig::new(settings));
    port.init_tooltips(&TooltipConfig::default());
    true
}
