//! Terminal rendering port for the feed preview.
//!
//! Keeps the last state the feed pushed through [`RenderPort`] and draws it
//! as plain text: a header, the skeleton or the story blocks, and a controls
//! line mirroring the HTML pagination.

use unicode_width::UnicodeWidthStr;

use crate::feed::PaginationControls;
use crate::render::{Mount, PageView, RenderPort, TransitionPhase};
use crate::stories::Story;

/// Marker drawn where a story photo sits.
pub const IMAGE_MARKER: &str = "[image]";

const SKELETON_ROW: &str = "░░░░░░░░░░░░░░░░░░░░░░░░";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Content {
    #[default]
    Empty,
    Loading,
    Page {
        index: usize,
        total_pages: usize,
        stories: Vec<Story>,
    },
}

/// Feed state as last drawn into the terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalSurface {
    content: Content,
    controls: Option<PaginationControls>,
    transition: TransitionPhase,
}

impl TerminalSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true while the loading skeleton is showing.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.content == Content::Loading
    }

    /// Returns the transition phase last applied.
    #[must_use]
    pub const fn transition(&self) -> TransitionPhase {
        self.transition
    }

    /// Returns the displayed page as `(index, total_pages)`.
    #[must_use]
    pub const fn page_position(&self) -> Option<(usize, usize)> {
        match self.content {
            Content::Page {
                index, total_pages, ..
            } => Some((index, total_pages)),
            Content::Empty | Content::Loading => None,
        }
    }

    /// Draws the surface at the given terminal width.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        let columns = width.max(20);
        let mut lines = vec![self.header(), String::new()];

        match &self.content {
            Content::Empty => {}
            Content::Loading => lines.extend(skeleton_lines()),
            Content::Page { stories, .. } if stories.is_empty() => {
                lines.push("No stories to show.".to_owned());
            }
            Content::Page { stories, .. } => {
                for story in stories {
                    lines.extend(story_lines(story, columns));
                    lines.push(String::new());
                }
            }
        }

        if let Some(controls) = &self.controls {
            lines.push(controls_line(controls));
        }

        let mut output = lines.join("\n");
        output.push('\n');
        output
    }

    fn header(&self) -> String {
        let position = self.page_position().map_or_else(
            || "Stories".to_owned(),
            |(index, total)| format!("Stories · page {} of {}", index.saturating_add(1), total),
        );
        match self.transition {
            TransitionPhase::Neutral => position,
            TransitionPhase::Exiting => format!("{position} (fading out)"),
            TransitionPhase::Entering => format!("{position} (fading in)"),
        }
    }
}

impl RenderPort for TerminalSurface {
    fn has_mount(&self, _mount: Mount) -> bool {
        true
    }

    fn mark_container(&mut self) {}

    fn show_skeleton(&mut self) {
        self.content = Content::Loading;
    }

    fn show_page(&mut self, page: PageView<'_>) {
        self.content = Content::Page {
            index: page.index,
            total_pages: page.total_pages,
            stories: page.stories.to_vec(),
        };
    }

    fn show_controls(&mut self, controls: &PaginationControls) {
        self.controls = Some(controls.clone());
    }

    fn set_transition(&mut self, phase: TransitionPhase) {
        self.transition = phase;
    }
}

fn skeleton_lines() -> Vec<String> {
    vec![
        SKELETON_ROW.to_owned(),
        SKELETON_ROW.chars().take(16).collect(),
        SKELETON_ROW.chars().take(20).collect(),
        "loading stories…".to_owned(),
    ]
}

/// Title line plus wrapped, quoted text for one story.
fn story_lines(story: &Story, width: usize) -> Vec<String> {
    let author = story.role_label().map_or_else(
        || story.name.clone(),
        |role| format!("{} · {role}", story.name),
    );
    let title = match (story.has_image(), story.image_first) {
        (false, _) => author,
        (true, true) => format!("{author}  {IMAGE_MARKER}"),
        (true, false) => format!("{IMAGE_MARKER}  {author}"),
    };

    let mut lines = vec![title];
    lines.extend(
        wrap_words(&format!("\"{}\"", story.text), width.saturating_sub(2))
            .into_iter()
            .map(|line| format!("  {line}")),
    );
    lines
}

fn controls_line(controls: &PaginationControls) -> String {
    let previous = if controls.previous.is_disabled() {
        "× prev"
    } else {
        "← prev"
    };
    let next = if controls.next.is_disabled() {
        "next ×"
    } else {
        "next →"
    };
    let pages: Vec<String> = controls
        .pages
        .iter()
        .map(|item| {
            if item.active {
                format!("[{}]", item.label())
            } else {
                item.label().to_string()
            }
        })
        .collect();

    if pages.is_empty() {
        format!("{previous}  {next}")
    } else {
        format!("{previous}  {}  {next}", pages.join(" "))
    }
}

/// Wraps `text` at word boundaries to `width` display columns.
///
/// Words wider than the line are kept whole on a line of their own.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
