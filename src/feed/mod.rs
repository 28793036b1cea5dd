//! Paginated feedback view: pagination, render scheduling, and transitions.
//!
//! The feed follows a message-driven update loop. [`FeedController::update`]
//! consumes a [`FeedMsg`] and returns at most one [`Timer`]; the driver waits
//! for the timer however it likes and feeds the carried message back in.
//!
//! # Render lifecycle
//!
//! ```text
//! Idle ──navigation──▶ Pending(token) ──timer──▶ Committed ──▶ Idle
//!                            │
//!                            └─ superseded token ─▶ discarded (no mutation)
//! ```
//!
//! Every navigation issues a fresh [`RenderToken`]. When a delayed render
//! fires with a token older than the latest one it is dropped, so only the
//! most recently requested page is ever committed, whatever order the
//! timers fire in.

mod controller;
mod controls;
mod messages;
mod pagination;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
mod token;

pub use controller::{FeedController, FeedSettings, FeedTimings, RenderState};
pub use controls::{NavControl, PageItem, PaginationControls};
pub use messages::{FeedMsg, Timer};
pub use pagination::{DEFAULT_PAGE_SIZE, Paginator};
pub use token::{RenderRequests, RenderToken};
