/**
 * Portfolio Form Handling
 *
 * The create and update endpoints accept multipart form data: text fields
 * plus an optional single `image` file. The payload shape is dynamic
 * (string-encoded tags, optional file, partial field sets on update), so
 * it is collected into a `PortfolioForm` and normalized into a typed
 * input at this boundary before anything touches the data model.
 *
 * Validation errors carry the offending field in the message and map to
 * 400 responses.
 */

use std::collections::HashMap;

use axum::extract::Multipart;

use crate::error::ApiError;
use crate::portfolio::model::{
    max_year, parse_tags, year_in_range, Category, ItemStatus, PortfolioItem, MAX_TITLE_LEN,
    MIN_YEAR,
};

/// An image file received in the multipart payload
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Raw multipart payload: text fields plus an optional image
#[derive(Debug, Default)]
pub struct PortfolioForm {
    fields: HashMap<String, String>,
    pub image: Option<UploadedImage>,
}

/// Validated input for creating an item
#[derive(Debug, Clone)]
pub struct CreateItemInput {
    pub title: String,
    pub category: Category,
    pub client: String,
    pub year: i32,
    pub tags: Vec<String>,
    pub description: String,
    pub challenge: Option<String>,
    pub result_summary: Option<String>,
    pub color: Option<String>,
    pub featured: bool,
    pub status: ItemStatus,
}

/// Validated partial input for updating an item
///
/// `None` means "leave unchanged"; the image replacement travels
/// separately through the handler.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemInput {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub client: Option<String>,
    pub year: Option<i32>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
    pub challenge: Option<String>,
    pub result_summary: Option<String>,
    pub color: Option<String>,
    pub featured: Option<bool>,
    pub status: Option<ItemStatus>,
}

impl PortfolioForm {
    /// Collect a multipart payload into text fields and an optional image
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            if name == "image" {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    form.image = Some(UploadedImage {
                        file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            } else if !name.is_empty() {
                form.fields.insert(name, field.text().await?);
            }
        }

        Ok(form)
    }

    #[cfg(test)]
    pub fn from_fields(fields: &[(&str, &str)]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            image: None,
        }
    }

    fn text(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    fn required(&self, name: &str, message: &str) -> Result<String, ApiError> {
        match self.text(name).map(str::trim) {
            Some(value) if !value.is_empty() => Ok(value.to_string()),
            _ => Err(ApiError::validation(message)),
        }
    }

    fn optional(&self, name: &str) -> Option<String> {
        self.text(name)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// Normalize into a complete, validated create input
    pub fn into_create_input(self) -> Result<(CreateItemInput, Option<UploadedImage>), ApiError> {
        let title = self.required("title", "Please add a title")?;
        if title.len() > MAX_TITLE_LEN {
            return Err(ApiError::validation(format!(
                "Title cannot be more than {MAX_TITLE_LEN} characters"
            )));
        }

        let category = parse_category(&self.required("category", "Please add a category")?)?;
        let client = self.required("client", "Please add client name")?;
        let year = parse_year(&self.required("year", "Please add year")?)?;
        let description = self.required("description", "Please add description")?;

        let input = CreateItemInput {
            title,
            category,
            client,
            year,
            tags: self.text("tags").map(parse_tags).unwrap_or_default(),
            description,
            challenge: self.optional("challenge"),
            result_summary: self.optional("result"),
            color: self.optional("color"),
            featured: match self.text("featured") {
                Some(raw) => parse_bool(raw, "featured")?,
                None => false,
            },
            status: match self.text("status") {
                Some(raw) => parse_status(raw)?,
                None => ItemStatus::default(),
            },
        };

        Ok((input, self.image))
    }

    /// Normalize into a partial, validated update input
    pub fn into_update_input(self) -> Result<(UpdateItemInput, Option<UploadedImage>), ApiError> {
        let title = match self.optional("title") {
            Some(title) if title.len() > MAX_TITLE_LEN => {
                return Err(ApiError::validation(format!(
                    "Title cannot be more than {MAX_TITLE_LEN} characters"
                )));
            }
            other => other,
        };

        let input = UpdateItemInput {
            title,
            category: self
                .text("category")
                .map(parse_category)
                .transpose()?,
            client: self.optional("client"),
            year: self.text("year").map(parse_year).transpose()?,
            tags: self.text("tags").map(parse_tags),
            description: self.optional("description"),
            challenge: self.optional("challenge"),
            result_summary: self.optional("result"),
            color: self.optional("color"),
            featured: self
                .text("featured")
                .map(|raw| parse_bool(raw, "featured"))
                .transpose()?,
            status: self.text("status").map(parse_status).transpose()?,
        };

        Ok((input, self.image))
    }
}

/// Apply a partial update to an existing item
///
/// Only supplied fields change; `updated_at` is always refreshed.
pub fn apply_update(item: &mut PortfolioItem, input: UpdateItemInput) {
    if let Some(title) = input.title {
        item.title = title;
    }
    if let Some(category) = input.category {
        item.category = category;
    }
    if let Some(client) = input.client {
        item.client = client;
    }
    if let Some(year) = input.year {
        item.year = year;
    }
    if let Some(tags) = input.tags {
        item.tags = tags;
    }
    if let Some(description) = input.description {
        item.description = description;
    }
    if let Some(challenge) = input.challenge {
        item.challenge = Some(challenge);
    }
    if let Some(result_summary) = input.result_summary {
        item.result_summary = Some(result_summary);
    }
    if let Some(color) = input.color {
        item.color = color;
    }
    if let Some(featured) = input.featured {
        item.featured = featured;
    }
    if let Some(status) = input.status {
        item.status = status;
    }
    item.updated_at = chrono::Utc::now();
}

fn parse_category(raw: &str) -> Result<Category, ApiError> {
    Category::from_str(raw.trim())
        .ok_or_else(|| ApiError::validation(format!("Invalid category: {}", raw.trim())))
}

fn parse_status(raw: &str) -> Result<ItemStatus, ApiError> {
    ItemStatus::from_str(raw.trim())
        .ok_or_else(|| ApiError::validation(format!("Invalid status: {}", raw.trim())))
}

fn parse_year(raw: &str) -> Result<i32, ApiError> {
    let year: i32 = raw
        .trim()
        .parse()
        .map_err(|_| ApiError::validation(format!("Invalid year: {}", raw.trim())))?;
    if !year_in_range(year) {
        return Err(ApiError::validation(format!(
            "Year must be between {MIN_YEAR} and {}",
            max_year()
        )));
    }
    Ok(year)
}

fn parse_bool(raw: &str, field: &str) -> Result<bool, ApiError> {
    match raw.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(ApiError::validation(format!(
            "Invalid {field} value: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_form() -> PortfolioForm {
        PortfolioForm::from_fields(&[
            ("title", "X"),
            ("category", "Strategic Planning"),
            ("client", "C"),
            ("year", "2024"),
            ("description", "d"),
        ])
    }

    #[test]
    fn test_create_applies_defaults() {
        let (input, image) = complete_form().into_create_input().unwrap();
        assert_eq!(input.title, "X");
        assert_eq!(input.category, Category::StrategicPlanning);
        assert_eq!(input.year, 2024);
        assert_eq!(input.status, ItemStatus::Published);
        assert!(!input.featured);
        assert!(input.tags.is_empty());
        assert!(input.color.is_none());
        assert!(image.is_none());
    }

    #[test]
    fn test_create_rejects_missing_required_fields() {
        for (field, message) in [
            ("title", "Please add a title"),
            ("category", "Please add a category"),
            ("client", "Please add client name"),
            ("year", "Please add year"),
            ("description", "Please add description"),
        ] {
            let mut form = complete_form();
            form.fields.remove(field);
            let err = form.into_create_input().unwrap_err();
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn test_create_rejects_blank_required_fields() {
        let mut form = complete_form();
        form.fields.insert("client".to_string(), "   ".to_string());
        let err = form.into_create_input().unwrap_err();
        assert_eq!(err.to_string(), "Please add client name");
    }

    #[test]
    fn test_create_parses_string_tags() {
        let mut form = complete_form();
        form.fields
            .insert("tags".to_string(), "a, b, c".to_string());
        let (input, _) = form.into_create_input().unwrap();
        assert_eq!(input.tags, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_create_rejects_overlong_title() {
        let mut form = complete_form();
        form.fields.insert("title".to_string(), "x".repeat(101));
        assert!(form.into_create_input().is_err());
    }

    #[test]
    fn test_create_rejects_invalid_category() {
        let mut form = complete_form();
        form.fields
            .insert("category".to_string(), "Carpentry".to_string());
        let err = form.into_create_input().unwrap_err();
        assert_eq!(err.to_string(), "Invalid category: Carpentry");
    }

    #[test]
    fn test_create_rejects_out_of_range_year() {
        for year in ["2019", "1999", "3000"] {
            let mut form = complete_form();
            form.fields.insert("year".to_string(), year.to_string());
            assert!(form.into_create_input().is_err(), "year {year} accepted");
        }

        let mut form = complete_form();
        form.fields
            .insert("year".to_string(), "not-a-year".to_string());
        let err = form.into_create_input().unwrap_err();
        assert_eq!(err.to_string(), "Invalid year: not-a-year");
    }

    #[test]
    fn test_create_parses_status_and_featured() {
        let mut form = complete_form();
        form.fields
            .insert("status".to_string(), "draft".to_string());
        form.fields
            .insert("featured".to_string(), "true".to_string());
        let (input, _) = form.into_create_input().unwrap();
        assert_eq!(input.status, ItemStatus::Draft);
        assert!(input.featured);

        let mut form = complete_form();
        form.fields
            .insert("status".to_string(), "archived".to_string());
        assert!(form.into_create_input().is_err());
    }

    #[test]
    fn test_update_input_is_partial() {
        let form = PortfolioForm::from_fields(&[("title", "New title")]);
        let (input, _) = form.into_update_input().unwrap();
        assert_eq!(input.title.as_deref(), Some("New title"));
        assert!(input.category.is_none());
        assert!(input.year.is_none());
        assert!(input.status.is_none());
    }

    #[test]
    fn test_update_still_validates_supplied_fields() {
        let form = PortfolioForm::from_fields(&[("year", "1980")]);
        assert!(form.into_update_input().is_err());

        let form = PortfolioForm::from_fields(&[("category", "Gardening")]);
        assert!(form.into_update_input().is_err());
    }

    #[test]
    fn test_apply_update_leaves_unspecified_fields() {
        use crate::portfolio::model::DEFAULT_COLOR;
        use chrono::Utc;
        use uuid::Uuid;

        let mut item = PortfolioItem {
            id: Uuid::new_v4(),
            title: "Old".to_string(),
            category: Category::StrategicPlanning,
            client: "C".to_string(),
            year: 2023,
            image: None,
            tags: vec!["a".to_string()],
            description: "d".to_string(),
            challenge: None,
            result_summary: None,
            color: DEFAULT_COLOR.to_string(),
            featured: false,
            status: ItemStatus::Published,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let before = item.updated_at;

        apply_update(
            &mut item,
            UpdateItemInput {
                title: Some("New".to_string()),
                featured: Some(true),
                ..Default::default()
            },
        );

        assert_eq!(item.title, "New");
        assert!(item.featured);
        // Everything else untouched
        assert_eq!(item.client, "C");
        assert_eq!(item.year, 2023);
        assert_eq!(item.tags, vec!["a"]);
        assert_eq!(item.status, ItemStatus::Published);
        assert!(item.updated_at >= before);
    }
}
