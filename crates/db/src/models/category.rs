//! Category entity model and DTOs.

use family_budget_core::category::{
    provided, resolve_color, validate_description, validate_name, CategoryType,
};
use family_budget_core::color::validate_hex_color;
use family_budget_core::error::CoreError;
use family_budget_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A category row from the `categories` table.
///
/// The soft-delete marker is never selected, so it never reaches clients.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub color: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new category, as received from clients.
///
/// Missing string fields deserialize as empty so that validation, not the
/// JSON decoder, decides what is acceptable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategory {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub category_type: String,
    pub color: Option<String>,
    pub description: Option<String>,
}

/// A create request that passed validation, with defaults filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub category_type: CategoryType,
    pub color: String,
    pub description: String,
}

impl CreateCategory {
    /// Validate the request and fill in defaults.
    ///
    /// The type is checked first: it is the one field with no fallback.
    pub fn validate(self) -> Result<NewCategory, CoreError> {
        let category_type: CategoryType = self.category_type.parse()?;
        validate_name(&self.name)?;
        let color = resolve_color(self.color.as_deref())?;
        let description = self.description.unwrap_or_default();
        validate_description(&description)?;

        Ok(NewCategory {
            name: self.name,
            category_type,
            color,
            description,
        })
    }
}

/// DTO for updating an existing category. All fields are optional.
///
/// An omitted, `null`, or empty field leaves the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub category_type: Option<String>,
    pub color: Option<String>,
    pub description: Option<String>,
}

/// The validated set of columns an update will overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub category_type: Option<CategoryType>,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl UpdateCategory {
    /// Drop empty fields and validate the rest.
    pub fn validate(self) -> Result<CategoryChanges, CoreError> {
        let category_type = provided(self.category_type)
            .map(|t| t.parse::<CategoryType>())
            .transpose()?;

        let name = provided(self.name);
        if let Some(name) = &name {
            validate_name(name)?;
        }

        let color = provided(self.color);
        if let Some(color) = &color {
            validate_hex_color(color)?;
        }

        let description = provided(self.description);
        if let Some(description) = &description {
            validate_description(description)?;
        }

        Ok(CategoryChanges {
            name,
            category_type,
            color,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use family_budget_core::category::DEFAULT_CATEGORY_COLOR;

    use super::*;

    fn create(name: &str, category_type: &str, color: Option<&str>) -> CreateCategory {
        CreateCategory {
            name: name.to_string(),
            category_type: category_type.to_string(),
            color: color.map(str::to_string),
            description: None,
        }
    }

    #[test]
    fn create_fills_default_color_and_description() {
        let new = create("Test", "expense", Some("")).validate().unwrap();
        assert_eq!(new.color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(new.description, "");
        assert_eq!(new.category_type, CategoryType::Expense);
    }

    #[test]
    fn create_rejects_unknown_type() {
        assert_matches!(
            create("Test", "invalid", None).validate(),
            Err(CoreError::InvalidType(_))
        );
    }

    #[test]
    fn create_rejects_missing_type_before_other_fields() {
        // Both the type and the name are bad; the type error wins.
        assert_matches!(create("", "", None).validate(), Err(CoreError::InvalidType(_)));
    }

    #[test]
    fn create_requires_name() {
        assert_matches!(
            create("", "income", None).validate(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn create_deserializes_with_missing_fields() {
        let input: CreateCategory = serde_json::from_str(r#"{"name": "Rent"}"#).unwrap();
        assert_eq!(input.category_type, "");
        assert_matches!(input.validate(), Err(CoreError::InvalidType(_)));
    }

    #[test]
    fn create_ignores_client_supplied_id() {
        let input: CreateCategory =
            serde_json::from_str(r#"{"id": 42, "name": "Rent", "type": "expense"}"#).unwrap();
        assert_eq!(input.validate().unwrap().name, "Rent");
    }

    #[test]
    fn update_treats_empty_fields_as_unchanged() {
        let changes = UpdateCategory {
            name: Some(String::new()),
            category_type: Some(String::new()),
            color: None,
            description: Some(String::new()),
        }
        .validate()
        .unwrap();
        assert_eq!(changes, CategoryChanges::default());
    }

    #[test]
    fn update_validates_provided_type() {
        let update = UpdateCategory {
            category_type: Some("savings".into()),
            ..Default::default()
        };
        assert_matches!(update.validate(), Err(CoreError::InvalidType(_)));
    }

    #[test]
    fn update_validates_provided_color() {
        let update = UpdateCategory {
            color: Some("blue".into()),
            ..Default::default()
        };
        assert_matches!(update.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn update_keeps_provided_fields() {
        let update: UpdateCategory =
            serde_json::from_str(r##"{"name": "Groceries", "type": "expense", "color": "#111111"}"##)
                .unwrap();
        let changes = update.validate().unwrap();
        assert_eq!(changes.name.as_deref(), Some("Groceries"));
        assert_eq!(changes.category_type, Some(CategoryType::Expense));
        assert_eq!(changes.color.as_deref(), Some("#111111"));
        assert_eq!(changes.description, None);
    }

    #[test]
    fn category_serializes_type_and_hides_soft_delete_marker() {
        let category = Category {
            id: 1,
            name: "食費".into(),
            category_type: CategoryType::Expense,
            color: "#EF4444".into(),
            description: String::new(),
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&category).unwrap();
        assert_eq!(json["type"], "expense");
        assert!(json.get("category_type").is_none());
        assert!(json.get("deleted_at").is_none());
    }
}
