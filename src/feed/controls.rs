//! Previous / numbered / next pagination controls.

/// A previous or next control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    /// Page the control navigates to; `None` when the control is disabled.
    pub target: Option<usize>,
}

impl NavControl {
    /// Returns true when the control is inert.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.target.is_none()
    }
}

/// A numbered page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageItem {
    /// Zero-based page index.
    pub index: usize,
    /// True for the page currently displayed; active items are inert.
    pub active: bool,
}

impl PageItem {
    /// Returns the one-based label shown to readers.
    #[must_use]
    pub const fn label(&self) -> usize {
        self.index.saturating_add(1)
    }

    /// Returns the page this item navigates to, if it is clickable.
    #[must_use]
    pub const fn target(&self) -> Option<usize> {
        if self.active { None } else { Some(self.index) }
    }
}

/// Complete control strip for one committed page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationControls {
    /// Control moving one page back.
    pub previous: NavControl,
    /// One item per page, in order.
    pub pages: Vec<PageItem>,
    /// Control moving one page forward.
    pub next: NavControl,
}

impl PaginationControls {
    /// Builds the controls for `current` out of `total_pages`.
    ///
    /// Previous is disabled on the first page, next on the last; both are
    /// disabled when there are no pages at all.
    #[must_use]
    pub fn new(current: usize, total_pages: usize) -> Self {
        let previous = current.checked_sub(1).filter(|_| total_pages > 0);
        let next = current
            .checked_add(1)
            .filter(|&candidate| candidate < total_pages);

        Self {
            previous: NavControl { target: previous },
            pages: (0..total_pages)
                .map(|index| PageItem {
                    index,
                    active: index == current,
                })
                .collect(),
            next: NavControl { target: next },
        }
    }

    /// Returns the active page item, if any.
    #[must_use]
    pub fn active(&self) -> Option<&PageItem> {
        self.pages.iter().find(|item| item.active)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::first_of_three(0, 3, true, false)]
    #[case::middle_of_three(1, 3, false, false)]
    #[case::last_of_three(2, 3, false, true)]
    #[case::only_page(0, 1, true, true)]
    #[case::no_pages(0, 0, true, true)]
    fn boundary_controls_disable_at_edges(
        #[case] current: usize,
        #[case] total: usize,
        #[case] previous_disabled: bool,
        #[case] next_disabled: bool,
    ) {
        let controls = PaginationControls::new(current, total);

        assert_eq!(controls.previous.is_disabled(), previous_disabled);
        assert_eq!(controls.next.is_disabled(), next_disabled);
    }

    #[rstest]
    fn neighbours_target_adjacent_pages() {
        let controls = PaginationControls::new(1, 3);

        assert_eq!(controls.previous.target, Some(0));
        assert_eq!(controls.next.target, Some(2));
    }

    #[rstest]
    fn only_current_page_is_active_and_inert() {
        let controls = PaginationControls::new(1, 3);

        let labels: Vec<usize> = controls.pages.iter().map(PageItem::label).collect();
        let targets: Vec<Option<usize>> = controls.pages.iter().map(PageItem::target).collect();

        assert_eq!(labels, vec![1, 2, 3]);
        assert_eq!(targets, vec![Some(0), None, Some(2)]);
        assert_eq!(controls.active().map(|item| item.index), Some(1));
    }
}
