//! Domain Value Objects
//!
//! Immutable value types for the coupon domain.

use chrono::{Datelike, NaiveDate};

/// Calendar month, written as its upper-case English abbreviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan = 1,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// 1-based month number
    pub fn from_number(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn number(self) -> u32 {
        self as u32
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Feb => "FEB",
            Month::Mar => "MAR",
            Month::Apr => "APR",
            Month::May => "MAY",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Aug => "AUG",
            Month::Sep => "SEP",
            Month::Oct => "OCT",
            Month::Nov => "NOV",
            Month::Dec => "DEC",
        }
    }

    /// Exact, case-sensitive match against the abbreviations
    pub fn from_abbreviation(abbreviation: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|month| month.abbreviation() == abbreviation)
    }
}

/// Month and two-digit year a coupon was issued for
///
/// The coupon stays valid through the end of that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Validity {
    month: Month,
    year: u8,
}

impl Validity {
    pub const MAX_YEAR: u8 = 99;

    pub fn new(month: Month, year: u8) -> Option<Self> {
        (year <= Self::MAX_YEAR).then_some(Self { month, year })
    }

    /// Month of `date` and its year modulo 100; day and time are ignored
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        let year = date.year().rem_euclid(100);
        Self {
            month: Month::from_number(date.month()).unwrap_or(Month::Jan),
            // rem_euclid(100) keeps it in 0..=99
            year: u8::try_from(year).unwrap_or(0),
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    /// Two-digit year (0-99)
    pub fn year(&self) -> u8 {
        self.year
    }

    /// Full year, placed in the century of `today`
    pub fn full_year_at(&self, today: NaiveDate) -> i32 {
        let century = today.year() - today.year().rem_euclid(100);
        century + i32::from(self.year)
    }

    /// Whether the validity month lies strictly before the month of `today`
    pub fn is_expired_at(&self, today: NaiveDate) -> bool {
        let issued = months_since_epoch(self.full_year_at(today), self.month.number());
        let current = months_since_epoch(today.year(), today.month());
        issued < current
    }
}

fn months_since_epoch(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month)
}

/// Discount percentage, 1 to 99
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Discount(u8);

impl Discount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 99;

    pub fn new(percent: u8) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&percent) {
            Some(Self(percent))
        } else {
            None
        }
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for Discount {
    type Error = u32;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        u8::try_from(percent)
            .ok()
            .and_then(Discount::new)
            .ok_or(percent)
    }
}

impl From<Discount> for u8 {
    fn from(discount: Discount) -> Self {
        discount.0
    }
}
