//! Fixed-size slicing of the filtered story list.

use std::num::NonZeroUsize;

use crate::stories::Story;

/// Number of stories shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(4);

/// Splits an ordered story list into contiguous pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    stories: Vec<Story>,
    page_size: NonZeroUsize,
}

impl Paginator {
    /// Creates a paginator over `stories`.
    #[must_use]
    pub fn new(stories: Vec<Story>, page_size: NonZeroUsize) -> Self {
        Self { stories, page_size }
    }

    /// Returns the number of stories per page.
    #[must_use]
    pub const fn page_size(&self) -> NonZeroUsize {
        self.page_size
    }

    /// Returns the number of stories across all pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stories.len()
    }

    /// Returns true when there is nothing to paginate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Returns `ceil(len / page_size)`.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        self.stories.len().div_ceil(self.page_size.get())
    }

    /// Returns the stories on page `index`.
    ///
    /// The last page may be short. Indices past the end yield an empty slice.
    #[must_use]
    pub fn page(&self, index: usize) -> &[Story] {
        let size = self.page_size.get();
        let start = index.saturating_mul(size);
        let end = start.saturating_add(size).min(self.stories.len());
        self.stories.get(start..end).unwrap_or_default()
    }

    /// Converts a requested page number into a valid index.
    ///
    /// Returns `None` for negative targets and targets at or beyond
    /// [`Self::total_pages`].
    #[must_use]
    pub fn resolve(&self, target: i64) -> Option<usize> {
        usize::try_from(target)
            .ok()
            .filter(|&index| index < self.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    fn stories(count: usize) -> Vec<Story> {
        (0..count)
            .map(|index| Story::new(format!("author {index}"), format!("story {index}")))
            .collect()
    }

    fn page_size(size: usize) -> NonZeroUsize {
        NonZeroUsize::new(size).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    #[fixture]
    fn twelve() -> Paginator {
        Paginator::new(stories(12), DEFAULT_PAGE_SIZE)
    }

    #[rstest]
    #[case::empty(0, 5, 0)]
    #[case::single(1, 5, 1)]
    #[case::exact(10, 5, 2)]
    #[case::remainder(12, 5, 3)]
    #[case::one_per_page(7, 1, 7)]
    #[case::larger_page(3, 10, 1)]
    fn total_pages_is_ceiling_of_length_over_size(
        #[case] count: usize,
        #[case] size: usize,
        #[case] expected: usize,
    ) {
        let paginator = Paginator::new(stories(count), page_size(size));

        assert_eq!(paginator.total_pages(), expected);
    }

    #[rstest]
    fn last_page_holds_remainder(twelve: Paginator) {
        assert_eq!(twelve.page(0).len(), 5);
        assert_eq!(twelve.page(1).len(), 5);
        assert_eq!(twelve.page(2).len(), 2);
    }

    #[rstest]
    fn pages_are_contiguous_slices(twelve: Paginator) {
        let names: Vec<&str> = twelve
            .page(1)
            .iter()
            .map(|story| story.name.as_str())
            .collect();

        assert_eq!(
            names,
            vec!["author 5", "author 6", "author 7", "author 8", "author 9"]
        );
    }

    #[rstest]
    fn page_past_end_is_empty(twelve: Paginator) {
        assert!(twelve.page(3).is_empty());
        assert!(twelve.page(usize::MAX).is_empty());
    }

    #[rstest]
    #[case::negative(-1, None)]
    #[case::first(0, Some(0))]
    #[case::last(2, Some(2))]
    #[case::one_past_end(3, None)]
    fn resolve_rejects_out_of_range(
        twelve: Paginator,
        #[case] target: i64,
        #[case] expected: Option<usize>,
    ) {
        assert_eq!(twelve.resolve(target), expected);
    }

    #[rstest]
    fn empty_paginator_resolves_nothing() {
        let paginator = Paginator::new(Vec::new(), DEFAULT_PAGE_SIZE);

        assert!(paginator.is_empty());
        assert_eq!(paginator.resolve(0), None);
    }
}
