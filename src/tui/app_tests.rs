//! Tests for the preview update loop.

use std::time::Duration;

use bubbletea_rs::Model;
use crossterm::event::{KeyCode, KeyModifiers};
use rstest::rstest;

use super::*;
use crate::feed::test_support::numbered_stories;
use crate::feed::{FeedTimings, RenderState};

fn key_msg(key: KeyCode) -> Box<dyn Any + Send> {
    Box::new(bubbletea_rs::event::KeyMsg {
        key,
        modifiers: KeyModifiers::empty(),
    })
}

fn app(count: usize) -> (PreviewApp, Option<Cmd>) {
    PreviewApp::new(numbered_stories(count), FeedSettings::default())
}

/// Awaits each command and feeds its message back until the chain ends.
async fn settle(app: &mut PreviewApp, cmd: Option<Cmd>) {
    let mut next = cmd;
    while let Some(pending) = next {
        next = match pending.await {
            Some(msg) => app.update(msg),
            None => None,
        };
    }
}

fn current_page(app: &PreviewApp) -> usize {
    app.feed().map_or(usize::MAX, FeedController::current_page)
}

#[tokio::test(start_paused = true)]
async fn first_page_commits_after_render_delay() {
    let (mut preview, cmd) = app(12);
    let start = tokio::time::Instant::now();

    assert!(preview.view().contains("loading stories"));
    settle(&mut preview, cmd).await;

    let elapsed = start.elapsed();
    let timings = FeedTimings::DEFAULT;
    assert!(elapsed >= timings.render_delay + timings.fade_out + timings.fade_in);
    let view = preview.view();
    assert!(view.contains("Stories · page 1 of 3"));
    assert!(view.contains("story 0"));
    assert!(!view.contains("loading stories"));
}

#[tokio::test(start_paused = true)]
async fn arrow_keys_move_between_pages() {
    let (mut preview, cmd) = app(12);
    settle(&mut preview, cmd).await;

    let next = preview.update(key_msg(KeyCode::Right));
    settle(&mut preview, next).await;
    assert_eq!(current_page(&preview), 1);

    let previous = preview.update(key_msg(KeyCode::Char('h')));
    settle(&mut preview, previous).await;
    assert_eq!(current_page(&preview), 0);
}

#[tokio::test(start_paused = true)]
async fn rapid_key_presses_commit_only_the_last_page() {
    let (mut preview, cmd) = app(12);
    settle(&mut preview, cmd).await;

    let first = preview.update(key_msg(KeyCode::Char('2')));
    let second = preview.update(key_msg(KeyCode::Char('3')));
    settle(&mut preview, first).await;

    assert_eq!(current_page(&preview), 0, "stale render must not commit");
    assert!(matches!(
        preview.feed().map(FeedController::render_state),
        Some(RenderState::Pending { page: 2, .. })
    ));

    settle(&mut preview, second).await;
    assert_eq!(current_page(&preview), 2);
}

#[tokio::test(start_paused = true)]
async fn out_of_range_digit_is_ignored() {
    let (mut preview, cmd) = app(12);
    settle(&mut preview, cmd).await;

    let ignored = preview.update(key_msg(KeyCode::Char('9')));

    assert!(ignored.is_none());
    assert_eq!(current_page(&preview), 0);
}

#[tokio::test(start_paused = true)]
async fn filter_key_cycles_and_resets_page() {
    let (mut preview, cmd) = app(12);
    settle(&mut preview, cmd).await;
    let last = preview.update(key_msg(KeyCode::Char('3')));
    settle(&mut preview, last).await;

    let filtered = preview.update(key_msg(KeyCode::Char('f')));
    settle(&mut preview, filtered).await;

    assert_eq!(
        preview.feed().map(FeedController::filter),
        Some(StoryFilter::WithImage)
    );
    assert_eq!(current_page(&preview), 0);
    assert!(preview.view().contains("No stories to show."));
}

#[rstest]
#[case::quit(KeyCode::Char('q'))]
#[case::escape(KeyCode::Esc)]
fn quit_keys_return_a_command(#[case] key: KeyCode) {
    let (mut preview, _cmd) = app(3);

    assert!(preview.update(key_msg(key)).is_some());
}

#[rstest]
fn unmapped_keys_do_nothing() {
    let (mut preview, _cmd) = app(3);

    assert!(preview.update(key_msg(KeyCode::Char('x'))).is_none());
}

#[rstest]
fn view_fits_window_height() {
    let (mut preview, _cmd) = app(3);
    let resize: Box<dyn Any + Send> = Box::new(bubbletea_rs::event::WindowSizeMsg {
        width: 40,
        height: 6,
    });

    assert!(preview.update(resize).is_none());

    assert!(preview.view().lines().count() <= 6);
}

#[tokio::test(start_paused = true)]
async fn timer_command_waits_for_its_delay() {
    let start = tokio::time::Instant::now();
    let cmd = timer_cmd(Timer::after(Duration::from_millis(250), FeedMsg::NextPage));

    let delivered = cmd.await.expect("timer should deliver a message");

    assert!(start.elapsed() >= Duration::from_millis(250));
    assert_eq!(delivered.downcast_ref::<FeedMsg>(), Some(&FeedMsg::NextPage));
}
