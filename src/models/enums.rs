//! Enumeration types for constrained values.

use serde::{Deserialize, Serialize};

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

/// Spending category of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Groceries and eating out.
    Food,
    /// Rent and housing.
    Rent,
    /// Transport and fuel.
    Transport,
    /// Shopping and retail.
    Shopping,
    /// Entertainment and leisure.
    Entertainment,
    /// Salary and wages.
    Salary,
    /// Anything that does not fit the above.
    Other,
}

impl Category {
    /// All categories in their fixed display order.
    pub const ALL: [Self; 7] = [
        Self::Food,
        Self::Rent,
        Self::Transport,
        Self::Shopping,
        Self::Entertainment,
        Self::Salary,
        Self::Other,
    ];

    /// Returns the fixed display color for this category.
    ///
    /// [`Category::Other`] doubles as the fallback color for anything
    /// without a dedicated hue.
    #[inline]
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Food => "#ff6384",
            Self::Rent => "#36a2eb",
            Self::Transport => "#ffce56",
            Self::Shopping => "#4bc0c0",
            Self::Entertainment => "#9966ff",
            Self::Salary => "#2ecc71",
            Self::Other => "#95a5a6",
        }
    }

    /// Returns the human-readable category name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Entertainment => "Entertainment",
            Self::Salary => "Salary",
            Self::Other => "Other",
        }
    }
}

impl core::fmt::Display for Category {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// UI color theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark theme (the default).
    #[default]
    Dark,
    /// Light theme.
    Light,
}

/// Relative date window used when filtering transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    /// No date restriction (the default).
    #[default]
    All,
    /// Same calendar day as the reference instant.
    Today,
    /// Within the seven days preceding the reference instant.
    Week,
    /// Same calendar month and year as the reference instant.
    Month,
    /// Same calendar year as the reference instant.
    Year,
}

/// Category filter: either a single category or everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    /// Match every category (the default).
    #[default]
    All,
    /// Match only [`Category::Food`].
    Food,
    /// Match only [`Category::Rent`].
    Rent,
    /// Match only [`Category::Transport`].
    Transport,
    /// Match only [`Category::Shopping`].
    Shopping,
    /// Match only [`Category::Entertainment`].
    Entertainment,
    /// Match only [`Category::Salary`].
    Salary,
    /// Match only [`Category::Other`].
    Other,
}

impl CategoryFilter {
    /// Returns `true` if this filter accepts the given category.
    #[inline]
    #[must_use]
    pub fn matches(self, category: Category) -> bool {
        self == Self::All || self == Self::from(category)
    }
}

impl From<Category> for CategoryFilter {
    #[inline]
    fn from(category: Category) -> Self {
        match category {
            Category::Food => Self::Food,
            Category::Rent => Self::Rent,
            Category::Transport => Self::Transport,
            Category::Shopping => Self::Shopping,
            Category::Entertainment => Self::Entertainment,
            Category::Salary => Self::Salary,
            Category::Other => Self::Other,
        }
    }
}
