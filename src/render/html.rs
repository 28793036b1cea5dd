//! HTML fragments for the feed, rendered with `minijinja`.
//!
//! Templates are compiled into the binary and rendered with HTML
//! auto-escaping, so story fields are always treated as text.

use minijinja::{Environment, Value, context};
use serde::Serialize;

use crate::carousel::CarouselSlide;
use crate::error::FeedError;
use crate::feed::{NavControl, PageItem, PaginationControls};
use crate::stories::Story;

const TEMPLATES: [(&str, &str); 6] = [
    (
        "feedback_block.html",
        include_str!("../../templates/feedback_block.html"),
    ),
    ("skeleton.html", include_str!("../../templates/skeleton.html")),
    (
        "pagination.html",
        include_str!("../../templates/pagination.html"),
    ),
    (
        "carousel_slide.html",
        include_str!("../../templates/carousel_slide.html"),
    ),
    ("carousel.html", include_str!("../../templates/carousel.html")),
    ("page.html", include_str!("../../templates/page.html")),
];

/// Returns the file name of generated page `index` (`{stem}-{n}.html`, 1-based).
#[must_use]
pub fn page_file_name(stem: &str, index: usize) -> String {
    format!("{stem}-{}.html", index.saturating_add(1))
}

/// How pagination links address other pages.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageHref {
    /// In-page links (`#`) carrying a `data-page` attribute for script wiring.
    #[default]
    Fragment,
    /// Links to generated page files named `{stem}-{n}.html`, 1-based.
    File {
        /// File name prefix.
        stem: String,
    },
}

impl PageHref {
    /// Links to generated page files with the given stem.
    #[must_use]
    pub fn file(stem: impl Into<String>) -> Self {
        Self::File { stem: stem.into() }
    }

    /// Returns the file name of page `index`, or `None` for fragment links.
    #[must_use]
    pub fn file_name(&self, index: usize) -> Option<String> {
        match self {
            Self::Fragment => None,
            Self::File { stem } => Some(page_file_name(stem, index)),
        }
    }

    fn href(&self, target: Option<usize>) -> String {
        target
            .and_then(|index| self.file_name(index))
            .unwrap_or_else(|| "#".to_owned())
    }

    const fn data_page(&self, target: Option<usize>) -> Option<usize> {
        match self {
            Self::Fragment => target,
            Self::File { .. } => None,
        }
    }
}

/// Template context for one feedback block.
#[derive(Debug, Serialize)]
struct BlockContext<'a> {
    name: &'a str,
    role: Option<&'a str>,
    text: &'a str,
    image: Option<&'a str>,
    image_first: bool,
}

impl<'a> From<&'a Story> for BlockContext<'a> {
    fn from(story: &'a Story) -> Self {
        Self {
            name: &story.name,
            role: story.role_label(),
            text: &story.text,
            image: story.image_url(),
            image_first: story.image_first,
        }
    }
}

/// Template context for one pagination link.
#[derive(Debug, Serialize)]
struct LinkContext {
    label: String,
    href: String,
    data_page: Option<usize>,
    disabled: bool,
    active: bool,
}

impl LinkContext {
    fn nav(control: NavControl, href: &PageHref) -> Self {
        Self {
            label: String::new(),
            href: href.href(control.target),
            data_page: href.data_page(control.target),
            disabled: control.is_disabled(),
            active: false,
        }
    }

    fn page(item: PageItem, href: &PageHref) -> Self {
        let target = item.target();
        Self {
            label: item.label().to_string(),
            href: href.href(target),
            data_page: href.data_page(target),
            disabled: false,
            active: item.active,
        }
    }
}

/// Pre-rendered pieces of one generated page.
#[derive(Debug, Clone, Copy)]
pub struct PageMarkup<'a> {
    /// Zero-based page index.
    pub index: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Space-separated container classes.
    pub classes: &'a str,
    /// Rendered feedback blocks.
    pub blocks: &'a str,
    /// Rendered pagination list items.
    pub controls: &'a str,
}

/// Compiled feed templates.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Compiles the built-in templates.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Template`] when a template fails to compile.
    pub fn new() -> Result<Self, FeedError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders one block per story, in order.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Template`] when rendering fails.
    pub fn feedback_blocks(&self, stories: &[Story]) -> Result<String, FeedError> {
        let blocks: Vec<BlockContext<'_>> = stories.iter().map(BlockContext::from).collect();
        self.render("feedback_block.html", context! { blocks => blocks })
    }

    /// Renders the loading placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Template`] when rendering fails.
    pub fn skeleton(&self) -> Result<String, FeedError> {
        self.render("skeleton.html", context! {})
    }

    /// Renders the pagination list items.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Template`] when rendering fails.
    pub fn pagination(
        &self,
        controls: &PaginationControls,
        href: &PageHref,
    ) -> Result<String, FeedError> {
        let pages: Vec<LinkContext> = controls
            .pages
            .iter()
            .map(|item| LinkContext::page(*item, href))
            .collect();

        self.render(
            "pagination.html",
            context! {
                previous => LinkContext::nav(controls.previous, href),
                pages => pages,
                next => LinkContext::nav(controls.next, href),
            },
        )
    }

    /// Renders one carousel slide.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Template`] when rendering fails.
    pub fn carousel_slide(&self, slide: &CarouselSlide) -> Result<String, FeedError> {
        self.render("carousel_slide.html", context! { slide => slide })
    }

    /// Wraps already rendered slides in the carousel container.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Template`] when rendering fails.
    pub fn carousel(&self, slides: &[String]) -> Result<String, FeedError> {
        let safe_slides: Vec<Value> = slides
            .iter()
            .map(|slide| Value::from_safe_string(slide.clone()))
            .collect();
        self.render("carousel.html", context! { slides => safe_slides })
    }

    /// Assembles a full feedback page from rendered fragments.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::Template`] when rendering fails.
    pub fn page(&self, markup: &PageMarkup<'_>) -> Result<String, FeedError> {
        self.render(
            "page.html",
            context! {
                number => markup.index.saturating_add(1),
                total_pages => markup.total_pages,
                classes => markup.classes,
                blocks => Value::from_safe_string(markup.blocks.to_owned()),
                controls => Value::from_safe_string(markup.controls.to_owned()),
            },
        )
    }

    fn render(&self, name: &str, ctx: Value) -> Result<String, FeedError> {
        let template = self.env.get_template(name)?;
        Ok(template.render(ctx)?)
    }
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod tests;
