//! Derived read-only views over the transaction list.
//!
//! Everything here is a pure function of its inputs: no caching, no
//! store access. Views never appear in [`crate::models::AppState`].

use std::collections::HashMap;

use chrono::{DateTime, Datelike as _, Utc};

use crate::chart::Slice;
use crate::models::{Category, FilterState, Transaction, TransactionKind};

/// Income, expense, and their difference over a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// Sum of income amounts.
    pub income: f64,
    /// Sum of expense amounts.
    pub expense: f64,
    /// `income - expense`; negative when spending exceeds income.
    pub balance: f64,
}

/// Aggregates for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySummary {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Human-readable label, e.g. `"Mar 2024"`.
    pub label: String,
    /// Sum of income amounts in the month.
    pub income: f64,
    /// Sum of expense amounts in the month.
    pub expense: f64,
}

/// Total expenses for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    /// The category.
    pub category: Category,
    /// Sum of expense amounts in the category.
    pub total: f64,
}

/// Sums income and expense in a single pass.
#[inline]
#[must_use]
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut result = Totals::default();
    for tx in transactions {
        match tx.kind {
            TransactionKind::Income => result.income += tx.amount,
            TransactionKind::Expense => result.expense += tx.amount,
        }
    }
    result.balance = result.income - result.expense;
    result
}

/// Groups transactions by calendar month, most recent month first.
///
/// Months with no transactions never appear.
#[inline]
#[must_use]
pub fn monthly_summary(transactions: &[Transaction]) -> Vec<MonthlySummary> {
    let mut buckets: HashMap<(i32, u32), (f64, f64)> = HashMap::new();
    for tx in transactions {
        let key = (tx.date.year(), tx.date.month());
        let bucket = buckets.entry(key).or_default();
        match tx.kind {
            TransactionKind::Income => bucket.0 += tx.amount,
            TransactionKind::Expense => bucket.1 += tx.amount,
        }
    }

    let mut summaries: Vec<MonthlySummary> = buckets
        .into_iter()
        .map(|((year, month), (income, expense))| MonthlySummary {
            year,
            month,
            label: format!("{} {year}", month_abbrev(month)),
            income,
            expense,
        })
        .collect();
    summaries.sort_by(|a, b| (b.year, b.month).cmp(&(a.year, a.month)));
    summaries
}

/// Sums expense-type transactions per category.
///
/// Categories appear in [`Category::ALL`] order; categories with no
/// expenses are omitted.
#[inline]
#[must_use]
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let total: f64 = transactions
                .iter()
                .filter(|tx| tx.kind == TransactionKind::Expense && tx.category == category)
                .map(|tx| tx.amount)
                .sum();
            (total > 0.0_f64).then_some(CategoryTotal { category, total })
        })
        .collect()
}

/// Maps category totals to chart slices with the fixed category colors.
#[inline]
#[must_use]
pub fn chart_slices(category_totals: &[CategoryTotal]) -> Vec<Slice> {
    category_totals
        .iter()
        .map(|entry| Slice {
            label: entry.category.to_string(),
            value: entry.total,
            color: entry.category.color().to_owned(),
        })
        .collect()
}

/// Applies the filter predicate, preserving input order.
///
/// `now` anchors the relative date windows.
#[inline]
#[must_use]
pub fn filtered<'state>(
    transactions: &'state [Transaction],
    filter: &FilterState,
    now: DateTime<Utc>,
) -> Vec<&'state Transaction> {
    transactions
        .iter()
        .filter(|tx| filter.matches(tx, now))
        .collect()
}

/// Three-letter English month abbreviation.
const fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "???",
    }
}
