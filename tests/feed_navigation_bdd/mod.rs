//! Support modules for the feed navigation BDD tests.

pub(crate) mod state;

pub(crate) use state::{FeedState, fire_pending, mount_feed};
