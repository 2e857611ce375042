//! Pagination control (pure).
//!
//! `Pagination` is a read-only view over `{total, page_size, current_page}`.
//! It computes ranges and decides whether a navigation request is valid; the
//! table's view state owns the numbers and applies the result.

use std::fmt;
use std::str::FromStr;

/// Allowed page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PageSize {
    /// 10 rows.
    #[default]
    Ten,
    /// 25 rows.
    TwentyFive,
    /// 50 rows.
    Fifty,
    /// 100 rows.
    Hundred,
}

impl PageSize {
    /// All options, smallest first.
    pub const ALL: [PageSize; 4] = [
        PageSize::Ten,
        PageSize::TwentyFive,
        PageSize::Fifty,
        PageSize::Hundred,
    ];

    /// Rows per page.
    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
            PageSize::Hundred => 100,
        }
    }

    /// Exact match against the option list.
    pub fn from_count(count: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.get() == count)
    }

    /// Next larger option, saturating at the largest.
    pub fn larger(self) -> Self {
        let idx = self.position();
        Self::ALL[(idx + 1).min(Self::ALL.len() - 1)]
    }

    /// Next smaller option, saturating at the smallest.
    pub fn smaller(self) -> Self {
        Self::ALL[self.position().saturating_sub(1)]
    }

    fn position(self) -> usize {
        Self::ALL
            .iter()
            .position(|size| *size == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// Rejected page size input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("page size must be one of 10, 25, 50, 100 (got {0})")]
pub struct InvalidPageSize(pub String);

impl FromStr for PageSize {
    type Err = InvalidPageSize;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(Self::from_count)
            .ok_or_else(|| InvalidPageSize(s.to_string()))
    }
}

impl<'de> serde::Deserialize<'de> for PageSize {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let count = usize::deserialize(deserializer)?;
        Self::from_count(count)
            .ok_or_else(|| serde::de::Error::custom(InvalidPageSize(count.to_string())))
    }
}

/// A navigation request from the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    /// Page 1.
    First,
    /// One page back.
    Prev,
    /// One page forward.
    Next,
    /// The last page.
    Last,
    /// A 1-based page number.
    To(usize),
}

/// Read-only pagination numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Items after filtering.
    pub total: usize,
    /// Rows per page.
    pub page_size: PageSize,
    /// 1-based current page.
    pub current_page: usize,
}

impl Pagination {
    /// Snapshot of the given numbers.
    pub fn new(total: usize, page_size: PageSize, current_page: usize) -> Self {
        Self {
            total,
            page_size,
            current_page,
        }
    }

    /// `ceil(total / page_size)`; zero when there are no items.
    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.page_size.get())
    }

    /// 1-based index of the first item on the current page.
    pub fn start_item(&self) -> usize {
        self.current_page.saturating_sub(1) * self.page_size.get() + 1
    }

    /// 1-based index of the last item on the current page.
    pub fn end_item(&self) -> usize {
        (self.current_page * self.page_size.get()).min(self.total)
    }

    /// Whether "previous" leads anywhere.
    pub fn has_prev(&self) -> bool {
        self.target(PageNav::Prev).is_some()
    }

    /// Whether "next" leads anywhere.
    pub fn has_next(&self) -> bool {
        self.target(PageNav::Next).is_some()
    }

    /// Page a navigation request leads to, or `None` when it is a no-op
    /// (same page or outside `1..=total_pages`).
    pub fn target(&self, nav: PageNav) -> Option<usize> {
        let total_pages = self.total_pages();
        let target = match nav {
            PageNav::First => 1,
            PageNav::Prev => self.current_page.checked_sub(1)?,
            PageNav::Next => self.current_page.checked_add(1)?,
            PageNav::Last => total_pages,
            PageNav::To(page) => page,
        };
        if target == self.current_page || target < 1 || target > total_pages {
            None
        } else {
            Some(target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(total: usize, current: usize) -> Pagination {
        Pagination::new(total, PageSize::Ten, current)
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(pager(25, 1).total_pages(), 3);
        assert_eq!(pager(30, 1).total_pages(), 3);
        assert_eq!(pager(0, 1).total_pages(), 0);
        assert_eq!(pager(1, 1).total_pages(), 1);
    }

    #[test]
    fn item_range_on_last_page() {
        let p = pager(25, 3);
        assert_eq!(p.start_item(), 21);
        assert_eq!(p.end_item(), 25);
    }

    #[test]
    fn item_range_on_full_page() {
        let p = pager(25, 2);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);
    }

    #[test]
    fn navigation_past_the_end_is_noop() {
        let p = pager(25, 3);
        assert_eq!(p.target(PageNav::To(4)), None);
        assert_eq!(p.target(PageNav::Next), None);
        assert_eq!(p.target(PageNav::Last), None);
        assert!(!p.has_next());
    }

    #[test]
    fn navigation_before_the_start_is_noop() {
        let p = pager(25, 1);
        assert_eq!(p.target(PageNav::Prev), None);
        assert_eq!(p.target(PageNav::First), None);
        assert_eq!(p.target(PageNav::To(0)), None);
        assert!(!p.has_prev());
    }

    #[test]
    fn valid_navigation_returns_target() {
        let p = pager(25, 2);
        assert_eq!(p.target(PageNav::First), Some(1));
        assert_eq!(p.target(PageNav::Prev), Some(1));
        assert_eq!(p.target(PageNav::Next), Some(3));
        assert_eq!(p.target(PageNav::Last), Some(3));
        assert_eq!(p.target(PageNav::To(3)), Some(3));
    }

    #[test]
    fn no_items_means_no_navigation() {
        let p = pager(0, 1);
        for nav in [PageNav::First, PageNav::Prev, PageNav::Next, PageNav::Last] {
            assert_eq!(p.target(nav), None);
        }
    }

    #[test]
    fn page_size_parses_only_enumerated_values() {
        assert_eq!("25".parse::<PageSize>(), Ok(PageSize::TwentyFive));
        assert_eq!(" 100 ".parse::<PageSize>(), Ok(PageSize::Hundred));
        assert!("20".parse::<PageSize>().is_err());
        assert!("ten".parse::<PageSize>().is_err());
    }

    #[test]
    fn page_size_cycles_saturate() {
        assert_eq!(PageSize::Ten.smaller(), PageSize::Ten);
        assert_eq!(PageSize::Ten.larger(), PageSize::TwentyFive);
        assert_eq!(PageSize::Hundred.larger(), PageSize::Hundred);
        assert_eq!(PageSize::Fifty.smaller(), PageSize::TwentyFive);
    }

    #[test]
    fn page_size_deserializes_from_number() {
        #[derive(serde::Deserialize)]
        struct Doc {
            size: PageSize,
        }
        let doc: Doc = toml::from_str("size = 50").unwrap();
        assert_eq!(doc.size, PageSize::Fifty);
        assert!(toml::from_str::<Doc>("size = 12").is_err());
    }
}
