// src/backend/models/requests.rs
use crate::models::Item;
use serde::Deserialize;
use validator::Validate;

// Item Creation
#[derive(Deserialize, Clone, Debug, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemRequest {
    #[serde(default)]
    #[validate(length(max = 100))]
    pub vertical: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub content_type: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub exam: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub status: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub verification_link: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub subject: String,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub content_subcategory: String,
    // Contact address; blank falls back to the acting identity.
    #[serde(default)]
    #[validate(length(max = 200))]
    pub email: String,
}

// Item Update (partial; absent fields are left untouched)
#[derive(Deserialize, Clone, Debug, Default, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemRequest {
    #[validate(length(max = 100))]
    pub vertical: Option<String>,
    #[validate(length(max = 100))]
    pub exam: Option<String>,
    #[validate(length(max = 100))]
    pub subject: Option<String>,
    #[validate(length(max = 100))]
    pub content_type: Option<String>,
    #[validate(length(max = 100))]
    pub status: Option<String>,
    #[validate(length(max = 100))]
    pub content_subcategory: Option<String>,
    #[validate(length(max = 500))]
    pub verification_link: Option<String>,
}

/// Conjunctive equality filters for listing and export.
///
/// An absent or empty-string criterion means "no filter for that field",
/// never "field must be empty".
#[derive(Clone, Debug, Default)]
pub struct ItemFilter {
    pub vertical: Option<String>,
    pub exam: Option<String>,
    pub subject: Option<String>,
    pub content_type: Option<String>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        field_matches(&self.vertical, &item.vertical)
            && field_matches(&self.exam, &item.exam)
            && field_matches(&self.subject, &item.subject)
            && field_matches(&self.content_type, &item.content_type)
    }

    pub fn is_empty(&self) -> bool {
        [&self.vertical, &self.exam, &self.subject, &self.content_type]
            .iter()
            .all(|criterion| normalized(criterion).is_none())
    }
}

fn normalized(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().filter(|value| !value.is_empty())
}

fn field_matches(criterion: &Option<String>, value: &str) -> bool {
    match normalized(criterion) {
        Some(expected) => expected == value,
        None => true,
    }
}
