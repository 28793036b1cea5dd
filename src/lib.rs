//! Storyfeed: a paginated testimonial feed with a story carousel.
//!
//! The library loads a static JSON dataset of stories, assigns alternating
//! image placement, and drives a paginated view through a message-driven
//! state machine ([`feed::FeedController`]). Delayed renders carry a request
//! token so that only the most recently requested page is ever committed.
//!
//! The view draws through rendering ports. Two adapters ship with the
//! crate: [`render::HtmlDocument`], used by the static [`site::SiteBuilder`],
//! and [`tui::TerminalSurface`], used by the interactive preview.

pub mod carousel;
pub mod config;
pub mod error;
pub mod feed;
pub mod render;
pub mod site;
pub mod stories;
pub mod telemetry;
pub mod tui;

pub use carousel::{CarouselConfig, CarouselSettings, CarouselSlide, mount_carousel};
pub use config::{OperationMode, StoryfeedConfig};
pub use error::FeedError;
pub use feed::{FeedController, FeedMsg, FeedSettings, FeedTimings, Timer};
pub use render::{HtmlDocument, HtmlRenderer, PageHref, RenderPort};
pub use site::{SiteBuilder, SiteManifest};
pub use stories::{Story, StoryFilter, assign_image_positions, load_stories, parse_stories};
pub use telemetry::{TelemetryEvent, TelemetrySink};
