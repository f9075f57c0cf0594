//! Transaction entity model.

use family_budget_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A transaction row from the `transactions` table.
///
/// `amount` is in whole yen. Whether it is income or an expense follows from
/// the type of the referenced category.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Transaction {
    pub id: DbId,
    pub user_id: DbId,
    pub category_id: DbId,
    pub amount: i64,
    pub description: String,
    pub date: Date,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
