//! Category rules: the allowed types, the default color, and field limits.
//!
//! A category groups transactions and budgets as either income or expense.
//! The limits mirror the column sizes in the `categories` table so that bad
//! input is rejected with a validation error instead of a database error.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::validate_hex_color;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const CATEGORY_TYPE_INCOME: &str = "income";
pub const CATEGORY_TYPE_EXPENSE: &str = "expense";

/// All valid category types.
pub const VALID_CATEGORY_TYPES: &[&str] = &[CATEGORY_TYPE_INCOME, CATEGORY_TYPE_EXPENSE];

/// Color stored when a category is created without one (Tailwind gray-500).
pub const DEFAULT_CATEGORY_COLOR: &str = "#6B7280";

/// Maximum length of a category name, in characters.
pub const MAX_NAME_LEN: usize = 50;

/// Maximum length of a category description, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 200;

// ---------------------------------------------------------------------------
// Category type
// ---------------------------------------------------------------------------

/// Whether a category tracks money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Income,
    Expense,
}

impl CategoryType {
    /// The value stored in the `categories.type` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => CATEGORY_TYPE_INCOME,
            Self::Expense => CATEGORY_TYPE_EXPENSE,
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsing is exact: no trimming and no case folding.
impl FromStr for CategoryType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CATEGORY_TYPE_INCOME => Ok(Self::Income),
            CATEGORY_TYPE_EXPENSE => Ok(Self::Expense),
            other => Err(CoreError::InvalidType(other.to_string())),
        }
    }
}

/// Lets `sqlx` decode the `type` column straight into the enum.
impl TryFrom<String> for CategoryType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

/// PostgreSQL text columns cannot store NUL bytes.
fn reject_nul(field: &str, value: &str) -> Result<(), CoreError> {
    if value.contains('\0') {
        return Err(CoreError::Validation(format!(
            "Category {field} must not contain NUL characters"
        )));
    }
    Ok(())
}

/// Validate a category name: required and at most [`MAX_NAME_LEN`] characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Category name is required".into()));
    }
    reject_nul("name", name)?;
    if name.chars().count() > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Category name must be at most {MAX_NAME_LEN} characters"
        )));
    }
    Ok(())
}

/// Validate a category description: no NUL and at most [`MAX_DESCRIPTION_LEN`] characters.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    reject_nul("description", description)?;
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Category description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}

/// Resolve the color to store for a new category.
///
/// A missing or empty color falls back to [`DEFAULT_CATEGORY_COLOR`]; anything
/// else must be a `#RRGGBB` hex string.
pub fn resolve_color(color: Option<&str>) -> Result<String, CoreError> {
    match color {
        None | Some("") => Ok(DEFAULT_CATEGORY_COLOR.to_string()),
        Some(c) => {
            validate_hex_color(c)?;
            Ok(c.to_string())
        }
    }
}

/// Collapse an update field to "no change" when it is absent or empty.
///
/// Partial updates cannot clear a text column: an empty string is treated
/// the same as an omitted field.
pub fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
