//! Preview application model implementing the MVU pattern.
//!
//! The model owns a [`FeedController`] drawing into a [`TerminalSurface`].
//! Every [`Timer`] the controller hands back becomes a bubbletea-rs command
//! that sleeps on the tokio clock and then delivers the carried [`FeedMsg`]
//! to `update`, which passes it straight back to the controller.

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::feed::{FeedController, FeedMsg, FeedSettings, Timer};
use crate::stories::{Story, StoryFilter};

use super::input::{PreviewAction, map_key_to_action};
use super::surface::TerminalSurface;

const HELP_LINE: &str = "←/h prev  →/l next  1-9 page  f filter  q quit";

/// Main application model for the story feed preview.
pub struct PreviewApp {
    feed: Option<FeedController<TerminalSurface>>,
    width: u16,
    height: u16,
}

impl PreviewApp {
    /// Mounts the feed and returns the app with the command that commits
    /// the first page.
    #[must_use]
    pub fn new(stories: Vec<Story>, settings: FeedSettings) -> (Self, Option<Cmd>) {
        let mounted = FeedController::mount(TerminalSurface::new(), stories, settings);
        let (feed, cmd) = match mounted {
            Some((feed, timer)) => (Some(feed), Some(timer_cmd(timer))),
            None => (None, None),
        };

        (
            Self {
                feed,
                width: 80,
                height: 24,
            },
            cmd,
        )
    }

    /// Returns the feed controller, if it mounted.
    #[must_use]
    pub const fn feed(&self) -> Option<&FeedController<TerminalSurface>> {
        self.feed.as_ref()
    }

    /// Applies a preview action.
    pub fn handle_action(&mut self, action: &PreviewAction) -> Option<Cmd> {
        match action {
            PreviewAction::Quit => Some(bubbletea_rs::quit()),
            PreviewAction::Feed(msg) => self.handle_feed_msg(msg),
            PreviewAction::CycleFilter => {
                let next = self.feed.as_ref()?.filter().next();
                self.handle_feed_msg(&FeedMsg::SetFilter(next))
            }
        }
    }

    fn handle_feed_msg(&mut self, msg: &FeedMsg) -> Option<Cmd> {
        self.feed.as_mut()?.update(msg).map(timer_cmd)
    }

    fn render_footer(&self) -> String {
        let filter = self
            .feed
            .as_ref()
            .map_or(StoryFilter::All.label(), |feed| feed.filter().label());
        format!("filter: {filter}\n{HELP_LINE}\n")
    }
}

impl Model for PreviewApp {
    fn init() -> (Self, Option<Cmd>) {
        let (stories, settings) = crate::tui::get_initial_feed();
        Self::new(stories, settings)
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(feed_msg) = msg.downcast_ref::<FeedMsg>() {
            return self.handle_feed_msg(feed_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let action = map_key_to_action(key_msg)?;
            return self.handle_action(&action);
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            self.width = size_msg.width;
            self.height = size_msg.height;
        }

        None
    }

    fn view(&self) -> String {
        let Some(feed) = self.feed.as_ref() else {
            return format!("feedback container not found\n{HELP_LINE}\n");
        };

        let body = feed.port().render(usize::from(self.width));
        let footer = self.render_footer();
        let body_height = usize::from(self.height).saturating_sub(footer.lines().count());

        let mut output: String = body
            .lines()
            .take(body_height.max(1))
            .flat_map(|line| [line, "\n"])
            .collect();
        output.push_str(&footer);
        output
    }
}

/// Creates a command that delivers the timer's message once it elapses.
pub(crate) fn timer_cmd(timer: Timer) -> Cmd {
    Box::pin(async move { Some(Box::new(timer.elapsed().await) as Box<dyn Any + Send>) })
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
