use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Whether a window edge admits the boundary date itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    Inclusive,
    Exclusive,
}

/// A date range around an anchor, expressed in calendar months.
///
/// Month arithmetic preserves the day-of-month where valid and clamps
/// to the last day of the target month otherwise (chrono `Months`
/// semantics, e.g. Jan 31 + 1 month = Feb 28/29).
///
/// The three observed window shapes carry different edge bounds on
/// purpose — the pre/post-release windows exclude the anchor itself so
/// it is never counted on both sides. Do not unify them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWindow {
    /// The event date the window is computed around.
    pub anchor: NaiveDate,

    /// Whole calendar months before the anchor.
    pub months_before: u32,

    /// Whole calendar months after the anchor.
    pub months_after: u32,

    /// Bound at `anchor - months_before`.
    pub start_bound: Bound,

    /// Bound at `anchor + months_after`.
    pub end_bound: Bound,
}

impl EventWindow {
    /// `[anchor, anchor + months]`, both edges closed.
    /// Used for the post-9/11 window.
    pub fn following(anchor: NaiveDate, months: u32) -> Self {
        Self {
            anchor,
            months_before: 0,
            months_after: months,
            start_bound: Bound::Inclusive,
            end_bound: Bound::Inclusive,
        }
    }

    /// `[anchor - months, anchor)` — the anchor itself is excluded.
    /// Used for the month before a product release.
    pub fn leading(anchor: NaiveDate, months: u32) -> Self {
        Self {
            anchor,
            months_before: months,
            months_after: 0,
            start_bound: Bound::Inclusive,
            end_bound: Bound::Exclusive,
        }
    }

    /// `(anchor, anchor + months]` — the anchor itself is excluded.
    /// Used for the month after a product release.
    pub fn trailing(anchor: NaiveDate, months: u32) -> Self {
        Self {
            anchor,
            months_before: 0,
            months_after: months,
            start_bound: Bound::Exclusive,
            end_bound: Bound::Inclusive,
        }
    }

    /// Start date of the window (`anchor - months_before`).
    /// Saturates at the calendar limit rather than wrapping.
    #[must_use]
    pub fn start(&self) -> NaiveDate {
        self.anchor
            .checked_sub_months(Months::new(self.months_before))
            .unwrap_or(NaiveDate::MIN)
    }

    /// End date of the window (`anchor + months_after`).
    #[must_use]
    pub fn end(&self) -> NaiveDate {
        self.anchor
            .checked_add_months(Months::new(self.months_after))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Whether a date falls inside the window, honoring each edge's bound.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        let after_start = match self.start_bound {
            Bound::Inclusive => date >= self.start(),
            Bound::Exclusive => date > self.start(),
        };
        let before_end = match self.end_bound {
            Bound::Inclusive => date <= self.end(),
            Bound::Exclusive => date < self.end(),
        };
        after_start && before_end
    }
}
