//! Starter categories inserted into an empty database.

use family_budget_core::category::CategoryType;
use sqlx::{Postgres, QueryBuilder};

use crate::error::DbError;
use crate::DbPool;

/// A fixed category inserted by [`seed_data`].
#[derive(Debug, Clone, Copy)]
pub struct SeedCategory {
    pub name: &'static str,
    pub category_type: CategoryType,
    pub color: &'static str,
    pub description: &'static str,
}

const fn seed(
    name: &'static str,
    category_type: CategoryType,
    color: &'static str,
    description: &'static str,
) -> SeedCategory {
    SeedCategory {
        name,
        category_type,
        color,
        description,
    }
}

/// Six expense and two income categories, in insertion order.
pub const SEED_CATEGORIES: &[SeedCategory] = &[
    seed("食費", CategoryType::Expense, "#EF4444", "食料品・外食費"),
    seed("交通費", CategoryType::Expense, "#F97316", "電車・バス・タクシー代"),
    seed("娯楽費", CategoryType::Expense, "#EAB308", "映画・ゲーム・趣味"),
    seed("光熱費", CategoryType::Expense, "#22C55E", "電気・ガス・水道代"),
    seed("通信費", CategoryType::Expense, "#3B82F6", "携帯・インターネット代"),
    seed("医療費", CategoryType::Expense, "#8B5CF6", "病院・薬代"),
    seed("給与", CategoryType::Income, "#10B981", "会社からの給与"),
    seed("副収入", CategoryType::Income, "#06B6D4", "副業・その他収入"),
];

/// Insert [`SEED_CATEGORIES`] if there are no live categories.
///
/// Returns the number of rows inserted, which is zero when categories
/// already exist.
pub async fn seed_data(pool: &DbPool) -> Result<u64, DbError> {
    let mut tx = pool.begin().await.map_err(DbError::Seed)?;

    let (existing,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM categories WHERE deleted_at IS NULL")
            .fetch_one(&mut *tx)
            .await
            .map_err(DbError::Seed)?;

    if existing > 0 {
        tracing::debug!(existing, "Categories present, skipping seed");
        return Ok(0);
    }

    let mut builder: QueryBuilder<Postgres> =
        QueryBuilder::new("INSERT INTO categories (name, type, color, description) ");
    builder.push_values(SEED_CATEGORIES, |mut row, category| {
        row.push_bind(category.name)
            .push_bind(category.category_type.as_str())
            .push_bind(category.color)
            .push_bind(category.description);
    });

    let inserted = builder
        .build()
        .execute(&mut *tx)
        .await
        .map_err(DbError::Seed)?
        .rows_affected();

    tx.commit().await.map_err(DbError::Seed)?;

    tracing::info!(inserted, "Initial categories seeded");
    Ok(inserted)
}
