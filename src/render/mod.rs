//! Rendering ports and the HTML adapter behind them.
//!
//! The feed controller only talks to [`RenderPort`]. [`HtmlDocument`]
//! implements it, plus [`crate::carousel::CarouselPort`], by rendering
//! `minijinja` templates into in-memory mount points.

mod document;
mod html;
mod port;

pub use document::{CONTAINER_CLASS, HtmlDocument};
pub use html::{HtmlRenderer, PageHref, PageMarkup, page_file_name};
pub use port::{Mount, PageView, RenderPort, TransitionPhase};
