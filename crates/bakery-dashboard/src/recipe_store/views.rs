//! Title search and the confirmation shown after a recipe is added.

use crate::model::{contains_ignore_case, Recipe};
use serde::Serialize;

/// Recipes whose title contains `term`, ignoring case.
pub fn search<'a>(recipes: &'a [Recipe], term: &'a str) -> impl Iterator<Item = &'a Recipe> {
    recipes
        .iter()
        .filter(move |recipe| contains_ignore_case(&recipe.title, term))
}

/// Transient notification text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

impl Toast {
    pub fn recipe_added(title: &str) -> Self {
        Self {
            title: "Recipe Added!".to_string(),
            description: format!("\"{title}\" has been added to your collection."),
        }
    }
}

/// Outcome of a successful `add_recipe`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeAdded {
    pub recipe: Recipe,
    pub toast: Toast,
}
