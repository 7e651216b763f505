use crate::utils::pad;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// A calendar page address.
///
/// A page is the unit a calendar surface displays: a month of a year,
/// optionally narrowed to a single week or day within that month. `week` and
/// `day` are one-based when present; an absent component means the page is
/// addressed at the coarser granularity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Page {
    pub year: i32,
    pub month: u8,
    pub week: Option<u8>,
    pub day: Option<u8>,
}

impl Page {
    pub fn month_of(year: i32, month: u8) -> Page {
        Page {
            year,
            month,
            week: None,
            day: None,
        }
    }

    pub fn week_of(year: i32, month: u8, week: u8) -> Page {
        Page {
            year,
            month,
            week: Some(week),
            day: None,
        }
    }

    pub fn day_of(year: i32, month: u8, day: u8) -> Page {
        Page {
            year,
            month,
            week: None,
            day: Some(day),
        }
    }

    /// A page is addressable iff both `year` and `month` are set.
    ///
    /// Fields are not range-checked; comparisons are only meaningful for
    /// well-formed input.
    pub fn is_valid(&self) -> bool {
        self.year != 0 && self.month != 0
    }

    /// Total order over page addresses.
    ///
    /// Fields compare in priority order `year`, `month`, `week`, `day`; an
    /// absent `week` or `day` compares as 0, so a month page sorts before any
    /// of its own week or day pages.
    pub fn ordinal_cmp(&self, other: &Page) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }

    fn sort_key(&self) -> (i32, u8, u8, u8) {
        (
            self.year,
            self.month,
            self.week.unwrap_or(0),
            self.day.unwrap_or(0),
        )
    }

    /// Whether this page is strictly before `other`.
    ///
    /// `false` when either page is invalid; an unaddressable page is
    /// incomparable, not an error.
    pub fn is_before(&self, other: &Page) -> bool {
        self.is_valid() && other.is_valid() && self.ordinal_cmp(other).is_lt()
    }

    /// Mirror of [`Page::is_before`].
    pub fn is_after(&self, other: &Page) -> bool {
        self.is_valid() && other.is_valid() && self.ordinal_cmp(other).is_gt()
    }

    /// Inclusive range test built from [`Page::is_before`] and
    /// [`Page::is_after`].
    ///
    /// An invalid bound never excludes anything: its arm is vacuously true.
    /// Callers that need strict bounds check [`Page::is_valid`] on both
    /// bounds first.
    pub fn is_between(&self, from: &Page, to: &Page) -> bool {
        !self.is_before(from) && !self.is_after(to)
    }

    /// Whether `self` and `other` address the same page.
    ///
    /// Page identity is `year`/`month`/`week`. `day` is a cursor inside the
    /// page, not part of its identity, even though it participates in
    /// [`Page::ordinal_cmp`].
    pub fn same_page(&self, other: &Page) -> bool {
        self.year == other.year && self.month == other.month && self.week == other.week
    }

    /// The cache key for this page, `"{year}-{month}"` with the month padded
    /// to two digits.
    pub fn key(&self) -> String {
        format!("{}-{}", self.year, pad(self.month, 2, '0'))
    }

    /// Parses a page from its [`Page::key`] form.
    pub fn parse(s: &str) -> Option<Page> {
        let (year, month) = s.rsplit_once('-')?;
        let year = year.parse().ok()?;
        let month = month.parse().ok()?;
        Some(Page::month_of(year, month))
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.key())
    }
}

/// [`Page::is_valid`] over an optional page.
pub fn page_is_valid(page: Option<&Page>) -> bool {
    page.is_some_and(Page::is_valid)
}

/// Page identity over optional pages.
///
/// Two absent pages are the same page; an absent and a present page are not.
pub fn pages_equal(a: Option<&Page>, b: Option<&Page>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.same_page(b),
        _ => false,
    }
}

/// [`Page::is_between`] over an optional page; an absent page is in no range.
pub fn page_in_range(page: Option<&Page>, from: &Page, to: &Page) -> bool {
    page.is_some_and(|page| page.is_between(from, to))
}

#[test]
fn test_validity() {
    assert!(!page_is_valid(None));
    assert!(!Page::month_of(2024, 0).is_valid());
    assert!(!Page::month_of(0, 3).is_valid());
    assert!(Page::month_of(2024, 3).is_valid());
    // granularity and range are irrelevant to validity
    assert!(Page::day_of(2024, 13, 40).is_valid());
}

#[test]
fn test_strict_order_is_irreflexive() {
    let pages = [
        Page::month_of(2024, 3),
        Page::week_of(2024, 3, 2),
        Page::day_of(2024, 3, 15),
    ];
    for page in &pages {
        assert!(!page.is_before(page));
        assert!(!page.is_after(page));
    }
}

#[test]
fn test_before_and_after_mirror() {
    let pages = [
        Page::month_of(2023, 12),
        Page::month_of(2024, 1),
        Page::month_of(2024, 3),
        Page::week_of(2024, 3, 1),
        Page::week_of(2024, 3, 2),
        Page::day_of(2024, 3, 15),
        Page::day_of(2024, 4, 1),
    ];
    for a in &pages {
        for b in &pages {
            assert_eq!(a.is_before(b), b.is_after(a), "{a} vs {b}");
        }
    }
}

#[test]
fn test_field_priority() {
    assert!(Page::month_of(2023, 12).is_before(&Page::month_of(2024, 1)));
    assert!(Page::month_of(2024, 2).is_before(&Page::month_of(2024, 3)));
    assert!(Page::week_of(2024, 3, 1).is_before(&Page::week_of(2024, 3, 2)));
    assert!(Page::day_of(2024, 3, 1).is_before(&Page::day_of(2024, 3, 2)));
    // year beats every finer field
    assert!(Page::day_of(2023, 12, 31).is_before(&Page::month_of(2024, 1)));
}

#[test]
fn test_absent_week_compares_as_zero() {
    let month = Page::month_of(2024, 3);
    let week2 = Page::week_of(2024, 3, 2);
    assert!(month.is_before(&week2));
    assert!(week2.is_after(&month));
}

#[test]
fn test_invalid_pages_are_incomparable() {
    let invalid = Page::month_of(2024, 0);
    let valid = Page::month_of(2024, 3);
    assert!(!invalid.is_before(&valid));
    assert!(!invalid.is_after(&valid));
    assert!(!valid.is_before(&invalid));
    assert!(!valid.is_after(&invalid));
}

#[test]
fn test_identity_ignores_day() {
    let a = Page {
        year: 2024,
        month: 3,
        week: Some(1),
        day: Some(5),
    };
    let b = Page { day: Some(9), ..a };
    assert!(a.same_page(&b));
    // while ordering still sees the day
    assert!(a.is_before(&b));

    assert!(!a.same_page(&Page::week_of(2024, 3, 2)));
    assert!(!Page::month_of(2024, 3).same_page(&Page::week_of(2024, 3, 1)));
}

#[test]
fn test_optional_identity() {
    let page = Page::month_of(2024, 3);
    assert!(pages_equal(None, None));
    assert!(!pages_equal(None, Some(&page)));
    assert!(!pages_equal(Some(&page), None));
    assert!(pages_equal(Some(&page), Some(&Page::day_of(2024, 3, 9))));
}

#[test]
fn test_between_is_inclusive() {
    let from = Page::month_of(2024, 1);
    let to = Page::month_of(2024, 6);
    assert!(Page::month_of(2024, 1).is_between(&from, &to));
    assert!(Page::month_of(2024, 3).is_between(&from, &to));
    assert!(Page::month_of(2024, 6).is_between(&from, &to));
    assert!(!Page::month_of(2023, 12).is_between(&from, &to));
    assert!(!Page::month_of(2024, 7).is_between(&from, &to));
}

#[test]
fn test_between_is_vacuous_for_invalid_bounds() {
    let invalid = Page::month_of(0, 0);
    let page = Page::month_of(2024, 3);
    assert!(page.is_between(&invalid, &invalid));
    assert!(page.is_between(&invalid, &Page::month_of(2024, 1)));
    assert!(!page_in_range(None, &invalid, &invalid));
}

#[test]
fn test_key_round_trip() {
    let page = Page::month_of(2024, 3);
    assert_eq!(page.key(), "2024-03");
    assert_eq!(page.to_string(), "2024-03");
    assert_eq!(Page::parse("2024-03"), Some(page));
    assert_eq!(Page::parse("-44-12"), Some(Page::month_of(-44, 12)));
    assert_eq!(Page::parse("2024"), None);
    assert_eq!(Page::parse("2024-xx"), None);
}
