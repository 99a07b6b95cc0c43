//! Field checks for the "Add New Recipe" form.
//!
//! Every failing field is reported at once, each with the message shown under that field.

use crate::model::RecipeForm;
use serde::Serialize;
use std::fmt::Display;

pub const TITLE_TOO_SHORT: &str = "Title must be at least 3 characters long.";
pub const PREP_TIME_NOT_POSITIVE: &str = "Prep time must be a positive number.";
pub const IMAGE_URL_INVALID: &str = "Please enter a valid image URL.";

const MIN_TITLE_CHARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RecipeField {
    Title,
    PrepTime,
    ImageUrl,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: RecipeField,
    pub message: &'static str,
}

/// Non-empty list of field errors, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn message_for(&self, field: RecipeField) -> Option<&'static str> {
        self.0
            .iter()
            .find(|error| error.field == field)
            .map(|error| error.message)
    }

    pub fn fields(&self) -> impl Iterator<Item = RecipeField> + '_ {
        self.0.iter().map(|error| error.field)
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|error| error.message).collect();
        f.write_str(&messages.join(" "))
    }
}

/// A form that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRecipe {
    pub title: String,
    pub prep_time: u32,
    pub image_url: String,
}

pub fn validate(form: &RecipeForm) -> Result<ValidRecipe, ValidationErrors> {
    let mut errors = Vec::new();

    if form.title.chars().count() < MIN_TITLE_CHARS {
        errors.push(FieldError {
            field: RecipeField::Title,
            message: TITLE_TOO_SHORT,
        });
    }

    let prep_time = u32::try_from(form.prep_time).ok().filter(|minutes| *minutes > 0);
    if prep_time.is_none() {
        errors.push(FieldError {
            field: RecipeField::PrepTime,
            message: PREP_TIME_NOT_POSITIVE,
        });
    }

    if url::Url::parse(&form.image_url).is_err() {
        errors.push(FieldError {
            field: RecipeField::ImageUrl,
            message: IMAGE_URL_INVALID,
        });
    }

    match prep_time {
        Some(prep_time) if errors.is_empty() => Ok(ValidRecipe {
            title: form.title.clone(),
            prep_time,
            image_url: form.image_url.clone(),
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_passes() {
        let valid = validate(&RecipeForm::new("Abc", 10, "https://x.com/i.png")).unwrap();
        assert_eq!(valid.prep_time, 10);
    }

    #[test]
    fn test_short_title() {
        let errors = validate(&RecipeForm::new("ab", 10, "https://x.com/i.png")).unwrap_err();
        assert_eq!(errors.message_for(RecipeField::Title), Some(TITLE_TOO_SHORT));
        assert_eq!(errors.0.len(), 1);
    }

    #[test]
    fn test_title_counts_characters_not_bytes() {
        assert!(validate(&RecipeForm::new("Pão", 10, "https://x.com/i.png")).is_ok());
    }

    #[test]
    fn test_prep_time_must_be_positive() {
        for minutes in [0, -5, i64::from(u32::MAX) + 1] {
            let errors =
                validate(&RecipeForm::new("Bagels", minutes, "https://x.com/i.png")).unwrap_err();
            assert_eq!(
                errors.message_for(RecipeField::PrepTime),
                Some(PREP_TIME_NOT_POSITIVE)
            );
        }
    }

    #[test]
    fn test_relative_url_rejected() {
        let errors = validate(&RecipeForm::new("Bagels", 30, "/images/bagel.png")).unwrap_err();
        assert_eq!(errors.message_for(RecipeField::ImageUrl), Some(IMAGE_URL_INVALID));
    }

    #[test]
    fn test_all_failures_reported_together() {
        let errors = validate(&RecipeForm::new("", 0, "not a url")).unwrap_err();
        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(
            fields,
            vec![RecipeField::Title, RecipeField::PrepTime, RecipeField::ImageUrl]
        );
    }
}
