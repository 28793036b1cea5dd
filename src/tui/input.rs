//! Input handling for the terminal preview.
//!
//! Maps key events to preview actions.

use crossterm::event::KeyCode;

use crate::feed::FeedMsg;

/// What a key press asks the preview to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewAction {
    /// Forward a navigation message to the feed.
    Feed(FeedMsg),
    /// Switch to the next story filter.
    CycleFilter,
    /// Leave the preview.
    Quit,
}

/// Maps a key event to a preview action.
///
/// Digits `1`–`9` jump straight to that page. Returns `None` for
/// unrecognised keys, allowing them to be ignored.
#[must_use]
pub fn map_key_to_action(key: &bubbletea_rs::event::KeyMsg) -> Option<PreviewAction> {
    match key.key {
        KeyCode::Char('q') | KeyCode::Esc => Some(PreviewAction::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(PreviewAction::Feed(FeedMsg::PreviousPage)),
        KeyCode::Right | KeyCode::Char('l') => Some(PreviewAction::Feed(FeedMsg::NextPage)),
        KeyCode::Char('f') => Some(PreviewAction::CycleFilter),
        KeyCode::Char(digit @ '1'..='9') => digit
            .to_digit(10)
            .map(|page| PreviewAction::Feed(FeedMsg::GoToPage(i64::from(page) - 1))),
        _ => None,
    }
}
