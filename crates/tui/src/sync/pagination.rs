//! Pagination window computation.
//!
//! `page_window(current, total)` yields the page numbers a pager shows:
//! the first page, the last page, the current page and its immediate
//! neighbours. Always ascending with no duplicates.

use std::collections::BTreeSet;

/// Page buttons plus the enabled state of Prev/Next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    pub pages: Vec<u32>,
    /// The page treated as current after clamping.
    pub current: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl PageWindow {
    /// Builds the window for `(current, total)`.
    pub fn new(current: u32, total: u32) -> Self {
        let pages = page_window(current, total);
        let current = clamp_page(current, total);
        Self {
            pages,
            current,
            prev_enabled: current > 1,
            next_enabled: current < total,
        }
    }

    /// Positions where a gap marker belongs: after `pages[i]` when the next
    /// page number is not consecutive.
    pub fn gaps(&self) -> Vec<usize> {
        self.pages
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair[1] - pair[0] > 1)
            .map(|(i, _)| i)
            .collect()
    }
}

/// Clamps a requested page into `[1, max(total, 1)]`.
pub fn clamp_page(current: u32, total: u32) -> u32 {
    current.clamp(1, total.max(1))
}

/// Page numbers to render for `(current, total)`.
///
/// `current` outside `[1, total]` is clamped first. With no pages at all the
/// window is just `[1]`, matching a pager showing a single disabled page.
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    if total == 0 {
        return vec![1];
    }

    let current = clamp_page(current, total);
    let mut pages = BTreeSet::from([1, total, current]);
    if current > 1 {
        pages.insert(current - 1);
    }
    if current < total {
        pages.insert(current + 1);
    }
    pages.into_iter().collect()
}
