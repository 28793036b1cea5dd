//! Scenario state for the feed navigation BDD tests.

use std::collections::VecDeque;
use std::num::NonZeroUsize;

use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use storyfeed::feed::test_support::{RecordingPort, numbered_stories};
use storyfeed::{FeedController, FeedSettings, FeedTimings, Timer};

/// Feed driven by a recording port.
pub(crate) type RecordedFeed = FeedController<RecordingPort>;

/// Scenario state for feed navigation tests.
#[derive(ScenarioState, Default)]
pub(crate) struct FeedState {
    pub(crate) feed: Slot<RecordedFeed>,
    pub(crate) pending: Slot<VecDeque<Timer>>,
}

/// Mounts a feed of `count` numbered stories and queues its first timer.
pub(crate) fn mount_feed(
    feed_state: &FeedState,
    count: usize,
    page_size: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings = FeedSettings {
        page_size: NonZeroUsize::new(page_size).ok_or("page size must be positive")?,
        timings: FeedTimings::IMMEDIATE,
        ..FeedSettings::default()
    };
    let (feed, timer) = FeedController::mount(RecordingPort::new(), numbered_stories(count), settings)
        .ok_or("feed should mount")?;

    feed_state.feed.set(feed);
    feed_state.pending.set(VecDeque::from([timer]));
    Ok(())
}

/// Delivers queued timers in arrival order until none remain.
pub(crate) fn fire_pending(feed_state: &FeedState) -> Result<(), Box<dyn std::error::Error>> {
    let mut queue = feed_state.pending.take().unwrap_or_default();
    feed_state
        .feed
        .with_mut(|feed| {
            while let Some(timer) = queue.pop_front() {
                if let Some(next) = feed.update(&timer.msg) {
                    queue.push_back(next);
                }
            }
        })
        .ok_or("feed must be mounted")?;
    feed_state.pending.set(queue);
    Ok(())
}
