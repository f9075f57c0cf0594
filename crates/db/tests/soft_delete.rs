//! Integration tests for category CRUD and soft-delete behaviour.
//!
//! Exercises the repository layer against a real database to verify that:
//! - Soft-deleted categories are hidden from `find_by_id` and `list`
//! - The row itself survives and keeps its id
//! - Soft-delete is idempotent (second call returns `false`)
//! - Updates only touch the provided columns

use family_budget_core::category::CategoryType;
use family_budget_db::models::category::{CategoryChanges, NewCategory};
use family_budget_db::repositories::CategoryRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_category(name: &str, category_type: CategoryType) -> NewCategory {
    NewCategory {
        name: name.to_string(),
        category_type,
        color: "#6B7280".to_string(),
        description: "soft delete test".to_string(),
    }
}

// ---------------------------------------------------------------------------
// CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_find(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &new_category("Books", CategoryType::Expense))
        .await
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.created_at, created.updated_at);

    let found = CategoryRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("category should exist");
    assert_eq!(found.name, "Books");
    assert_eq!(found.category_type, CategoryType::Expense);
    assert_eq!(found.color, "#6B7280");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_in_insertion_order(pool: PgPool) {
    for name in ["First", "Second", "Third"] {
        CategoryRepo::create(&pool, &new_category(name, CategoryType::Income))
            .await
            .unwrap();
    }

    let names: Vec<String> = CategoryRepo::list(&pool)
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["First", "Second", "Third"]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_names_allowed(pool: PgPool) {
    let a = CategoryRepo::create(&pool, &new_category("Misc", CategoryType::Expense))
        .await
        .unwrap();
    let b = CategoryRepo::create(&pool, &new_category("Misc", CategoryType::Expense))
        .await
        .unwrap();
    assert_ne!(a.id, b.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_applies_only_provided_fields(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &new_category("Gym", CategoryType::Expense))
        .await
        .unwrap();

    let changes = CategoryChanges {
        name: Some("Fitness".to_string()),
        ..Default::default()
    };
    let updated = CategoryRepo::update(&pool, created.id, &changes)
        .await
        .unwrap()
        .expect("category should exist");

    assert_eq!(updated.name, "Fitness");
    assert_eq!(updated.color, created.color);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.category_type, CategoryType::Expense);
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_changes_type(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &new_category("Refund", CategoryType::Expense))
        .await
        .unwrap();

    let changes = CategoryChanges {
        category_type: Some(CategoryType::Income),
        ..Default::default()
    };
    let updated = CategoryRepo::update(&pool, created.id, &changes)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.category_type, CategoryType::Income);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_nonexistent_returns_none(pool: PgPool) {
    let result = CategoryRepo::update(&pool, 999_999, &CategoryChanges::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Soft delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_hides_category(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &new_category("Temp", CategoryType::Expense))
        .await
        .unwrap();

    assert!(CategoryRepo::soft_delete(&pool, created.id).await.unwrap());

    assert!(CategoryRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
    assert!(CategoryRepo::list(&pool).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_keeps_row(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &new_category("Kept", CategoryType::Income))
        .await
        .unwrap();
    CategoryRepo::soft_delete(&pool, created.id).await.unwrap();

    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM categories WHERE id = $1 AND deleted_at IS NOT NULL")
            .bind(created.id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(count, 1);

    // The id is not handed out again.
    let next = CategoryRepo::create(&pool, &new_category("Next", CategoryType::Income))
        .await
        .unwrap();
    assert!(next.id > created.id);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_is_idempotent(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &new_category("Twice", CategoryType::Expense))
        .await
        .unwrap();

    assert!(CategoryRepo::soft_delete(&pool, created.id).await.unwrap());
    assert!(!CategoryRepo::soft_delete(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_soft_delete_nonexistent_returns_false(pool: PgPool) {
    assert!(!CategoryRepo::soft_delete(&pool, 999_999).await.unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_ignores_soft_deleted(pool: PgPool) {
    let created = CategoryRepo::create(&pool, &new_category("Gone", CategoryType::Expense))
        .await
        .unwrap();
    CategoryRepo::soft_delete(&pool, created.id).await.unwrap();

    let changes = CategoryChanges {
        name: Some("Back".to_string()),
        ..Default::default()
    };
    assert!(CategoryRepo::update(&pool, created.id, &changes)
        .await
        .unwrap()
        .is_none());
}
