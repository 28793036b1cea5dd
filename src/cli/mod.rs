//! CLI operation mode handlers.
//!
//! - [`build`]: Render the static feedback pages and carousel
//! - [`preview`]: Browse the feed in the terminal

pub mod build;
pub mod preview;
