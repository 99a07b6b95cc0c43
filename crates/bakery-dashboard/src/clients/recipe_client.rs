//! # Recipe Client
//!
//! Adds recipes from the form and searches the collection.
use crate::model::{Recipe, RecipeForm};
use crate::recipe_store::{self, RecipeAdded, RecipeError, Toast};
use async_trait::async_trait;
use store_framework::{DomainClient, StoreClient, StoreError};
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct RecipeClient {
    inner: StoreClient<Recipe>,
}

impl RecipeClient {
    pub fn new(inner: StoreClient<Recipe>) -> Self {
        Self { inner }
    }

    /// Validates and stores a recipe at the front of the collection.
    ///
    /// A rejected form returns [`RecipeError::Validation`] listing every failing field.
    #[instrument(skip(self))]
    pub async fn add_recipe(&self, form: RecipeForm) -> Result<RecipeAdded, RecipeError> {
        let id = match self.inner.create(form).await {
            Ok(id) => id,
            Err(e) => {
                let e = RecipeError::from(e);
                if let RecipeError::Validation(errors) = &e {
                    warn!(%errors, "Recipe form rejected");
                }
                return Err(e);
            }
        };
        let recipe = self
            .get(id)
            .await?
            .ok_or_else(|| RecipeError::StoreUnavailable(format!("{id} vanished after create")))?;
        info!(slug = %recipe.slug, "Recipe added");
        Ok(RecipeAdded {
            toast: Toast::recipe_added(&recipe.title),
            recipe,
        })
    }

    /// Title search; the empty term returns everything, newest first.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<Recipe>, RecipeError> {
        let recipes = self.list().await?;
        Ok(recipe_store::search(&recipes, term).cloned().collect())
    }
}

#[async_trait]
impl DomainClient<Recipe> for RecipeClient {
    type Error = RecipeError;

    fn inner(&self) -> &StoreClient<Recipe> {
        &self.inner
    }

    fn map_error(e: StoreError) -> RecipeError {
        RecipeError::from(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecipeId;
    use crate::recipe_store::{RecipeField, ValidationErrors};
    use store_framework::mock::MockStore;

    fn rye() -> Recipe {
        Recipe {
            id: RecipeId(7),
            slug: "rye-bread".to_string(),
            title: "Rye Bread".to_string(),
            image_url: "https://example.com/rye.png".to_string(),
            prep_time: 120,
        }
    }

    #[tokio::test]
    async fn test_add_recipe_returns_toast() {
        let mut mock = MockStore::<Recipe>::new();
        mock.expect_create().return_ok(RecipeId(7));
        mock.expect_get(RecipeId(7)).return_ok(Some(rye()));
        let recipes = RecipeClient::new(mock.client());

        let added = recipes
            .add_recipe(RecipeForm::new("Rye Bread", 120, "https://example.com/rye.png"))
            .await
            .unwrap();
        assert_eq!(added.recipe.slug, "rye-bread");
        assert_eq!(
            added.toast.description,
            "\"Rye Bread\" has been added to your collection."
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_validation_error_survives_the_channel() {
        let mut mock = MockStore::<Recipe>::new();
        let rejected = RecipeError::Validation(ValidationErrors(vec![
            crate::recipe_store::FieldError {
                field: RecipeField::Title,
                message: crate::recipe_store::TITLE_TOO_SHORT,
            },
        ]));
        mock.expect_create()
            .return_err(StoreError::EntityError(Box::new(rejected.clone())));
        let recipes = RecipeClient::new(mock.client());

        let result = recipes
            .add_recipe(RecipeForm::new("ab", 10, "https://x.com/i.png"))
            .await;
        assert_eq!(result, Err(rejected));
    }
}
