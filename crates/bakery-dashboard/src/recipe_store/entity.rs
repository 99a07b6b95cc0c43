//! [`StoreEntity`] implementation for [`Recipe`].

use super::error::RecipeError;
use super::validation::validate;
use crate::model::{slugify, Recipe, RecipeForm, RecipeId};
use std::convert::Infallible;
use store_framework::{Placement, StoreEntity};

impl StoreEntity for Recipe {
    type Id = RecipeId;
    type Create = RecipeForm;
    type Action = Infallible;
    type ActionResult = Infallible;
    type Error = RecipeError;

    /// The recipe grid shows the newest card first.
    const PLACEMENT: Placement = Placement::Prepend;

    fn id(&self) -> &RecipeId {
        &self.id
    }

    /// Validates the raw form and derives the slug from the title.
    fn from_create_params(id: RecipeId, form: RecipeForm) -> Result<Self, RecipeError> {
        let valid = validate(&form)?;
        Ok(Recipe {
            id,
            slug: slugify(&valid.title),
            title: valid.title,
            image_url: valid.image_url,
            prep_time: valid.prep_time,
        })
    }

    fn handle_action(&mut self, action: Infallible) -> Result<Infallible, RecipeError> {
        match action {}
    }
}
