//! Recipe cards.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Store key for a recipe.
///
/// Slugs are derived from titles and can collide; this key never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecipeId(pub u32);

impl From<u32> for RecipeId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "recipe_{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: RecipeId,
    pub slug: String,
    pub title: String,
    pub image_url: String,
    /// Minutes.
    pub prep_time: u32,
}

impl Recipe {
    /// Link target of the recipe card.
    pub fn detail_path(&self) -> String {
        format!("/recipe-management/{}", self.slug)
    }
}

/// Lowercases `title` and replaces every run of whitespace with a single `-`.
///
/// Leading and trailing runs are replaced too, so `" Rye "` becomes `"-rye-"`.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    slug
}

/// Raw input from the "Add New Recipe" dialog, checked by the recipe store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeForm {
    pub title: String,
    pub prep_time: i64,
    pub image_url: String,
}

impl RecipeForm {
    pub fn new(title: impl Into<String>, prep_time: i64, image_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            prep_time,
            image_url: image_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("Abc"), "abc");
        assert_eq!(slugify("Classic Sourdough Loaf"), "classic-sourdough-loaf");
        assert_eq!(slugify("Rye \t  Bread"), "rye-bread");
        assert_eq!(slugify(" Rye "), "-rye-");
    }

    #[test]
    fn test_slugify_lowercases_whole_title() {
        assert_eq!(slugify("ΟΔΟΣ ΑΡΤΟΣ"), "οδος-αρτος");
        assert_eq!(slugify("ΑΡΤΟΣ"), "αρτος");
    }

    #[test]
    fn test_slugify_keeps_punctuation() {
        assert_eq!(slugify("Bakery-Style Muffins!"), "bakery-style-muffins!");
    }

    #[test]
    fn test_detail_path() {
        let recipe = Recipe {
            id: RecipeId(1),
            slug: "flaky-croissants".to_string(),
            title: "Flaky Butter Croissants".to_string(),
            image_url: "https://example.com/c.png".to_string(),
            prep_time: 180,
        };
        assert_eq!(recipe.detail_path(), "/recipe-management/flaky-croissants");
    }
}
