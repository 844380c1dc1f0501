use log::{debug, info};
use serde_json::json;

use super::ApiClient;
use crate::error::FinderError;
use crate::model::{RecipeId, RecipeList, RecipeResult, SavedRecipe};
use crate::session::Session;

/// Outcome of saving a favorite. Saving twice is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteSaved {
    Added,
    AlreadySaved,
}

impl ApiClient {
    /// `POST /api/recipes/save-favorite`
    pub async fn save_favorite(
        &self,
        session: &Session,
        recipe: &RecipeResult,
    ) -> Result<FavoriteSaved, FinderError> {
        let builder = self
            .client
            .post(self.url("/recipes/save-favorite"))
            .json(&json!({ "recipe_data": recipe }));
        let builder = self.authorized(builder, session)?;

        match self.send_empty(builder).await {
            Ok(()) => {
                info!("Saved '{}' to favorites", recipe.title);
                Ok(FavoriteSaved::Added)
            }
            Err(FinderError::Api { status: 409, .. }) => Ok(FavoriteSaved::AlreadySaved),
            Err(FinderError::Api { status: 400, detail })
                if detail.to_lowercase().contains("already") =>
            {
                debug!("'{}' was already a favorite", recipe.title);
                Ok(FavoriteSaved::AlreadySaved)
            }
            Err(e) => Err(e),
        }
    }

    /// `DELETE /api/recipes/remove-favorite/{id}`
    pub async fn remove_favorite(&self, session: &Session, id: &RecipeId) -> Result<(), FinderError> {
        let builder = self
            .client
            .delete(self.url(&format!("/recipes/remove-favorite/{}", id)));
        let builder = self.authorized(builder, session)?;
        self.send_empty(builder).await?;
        info!("Removed favorite {}", id);
        Ok(())
    }

    /// `GET /api/recipes/favorites`
    pub async fn list_favorites(&self, session: &Session) -> Result<Vec<SavedRecipe>, FinderError> {
        let builder = self.authorized(self.client.get(self.url("/recipes/favorites")), session)?;
        let list: RecipeList = self.send_json(builder).await?;
        Ok(list.recipes)
    }
}
