//! Transaction filter state and partial updates.

use chrono::{DateTime, Datelike as _, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::{CategoryFilter, DateRange, Transaction};

/// Active filter criteria applied to the transaction list.
///
/// All criteria combine with AND semantics. Price bounds are explicit
/// [`Option`]s — an unset bound matches everything on that side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    /// Case-insensitive substring matched against the description.
    pub search: String,
    /// Category restriction.
    pub category: CategoryFilter,
    /// Relative date window.
    pub date_range: DateRange,
    /// Minimum amount (inclusive), if set.
    pub min_price: Option<f64>,
    /// Maximum amount (inclusive), if set.
    pub max_price: Option<f64>,
}

/// Partial update to a [`FilterState`].
///
/// Unset fields leave the corresponding filter criterion untouched, so
/// applying an update is a shallow merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterUpdate {
    /// New search text, if changing.
    pub search: Option<String>,
    /// New category restriction, if changing.
    pub category: Option<CategoryFilter>,
    /// New date window, if changing.
    pub date_range: Option<DateRange>,
    /// New minimum bound, if changing. `Some(None)` clears the bound.
    #[allow(clippy::option_option, reason = "tri-state: keep, clear, or set")]
    pub min_price: Option<Option<f64>>,
    /// New maximum bound, if changing. `Some(None)` clears the bound.
    #[allow(clippy::option_option, reason = "tri-state: keep, clear, or set")]
    pub max_price: Option<Option<f64>>,
}

impl FilterState {
    /// Returns a copy of this filter with the update shallow-merged in.
    #[inline]
    #[must_use]
    pub fn merged(&self, update: FilterUpdate) -> Self {
        Self {
            search: update.search.unwrap_or_else(|| self.search.clone()),
            category: update.category.unwrap_or(self.category),
            date_range: update.date_range.unwrap_or(self.date_range),
            min_price: update.min_price.unwrap_or(self.min_price),
            max_price: update.max_price.unwrap_or(self.max_price),
        }
    }

    /// Returns `true` if the transaction passes every active criterion.
    ///
    /// `now` anchors the relative date windows; injecting it keeps the
    /// predicate deterministic.
    #[inline]
    #[must_use]
    pub fn matches(&self, transaction: &Transaction, now: DateTime<Utc>) -> bool {
        self.matches_search(transaction)
            && self.category.matches(transaction.category)
            && self.matches_date(transaction, now)
            && self.min_price.is_none_or(|min| transaction.amount >= min)
            && self.max_price.is_none_or(|max| transaction.amount <= max)
    }

    /// Case-insensitive substring match on the description.
    fn matches_search(&self, transaction: &Transaction) -> bool {
        self.search.is_empty()
            || transaction
                .description
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    /// Date-window predicate for the configured [`DateRange`].
    fn matches_date(&self, transaction: &Transaction, now: DateTime<Utc>) -> bool {
        let date = transaction.date;
        match self.date_range {
            DateRange::All => true,
            DateRange::Today => date.date_naive() == now.date_naive(),
            DateRange::Week => date >= now - TimeDelta::days(7),
            DateRange::Month => date.month() == now.month() && date.year() == now.year(),
            DateRange::Year => date.year() == now.year(),
        }
    }
}
