//! Budget entity model.

use family_budget_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A monthly budget row from the `budgets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Budget {
    pub id: DbId,
    pub user_id: DbId,
    pub category_id: DbId,
    /// Planned amount in whole yen.
    pub amount: i64,
    /// First day of the budgeted month.
    pub month: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
