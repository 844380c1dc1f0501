use log::info;

use super::ApiClient;
use crate::error::FinderError;
use crate::model::{NewCustomRecipe, RecipeId, RecipeList, SavedRecipe};
use crate::session::Session;

impl ApiClient {
    /// `POST /api/recipes/custom`
    pub async fn create_custom(
        &self,
        session: &Session,
        recipe: &NewCustomRecipe,
    ) -> Result<SavedRecipe, FinderError> {
        let builder = self.client.post(self.url("/recipes/custom")).json(recipe);
        let builder = self.authorized(builder, session)?;
        let created: SavedRecipe = self.send_json(builder).await?;
        info!("Created custom recipe '{}' ({})", created.recipe.title, created.recipe.id);
        Ok(created)
    }

    /// `GET /api/recipes/custom`
    pub async fn list_custom(&self, session: &Session) -> Result<Vec<SavedRecipe>, FinderError> {
        let builder = self.authorized(self.client.get(self.url("/recipes/custom")), session)?;
        let list: RecipeList = self.send_json(builder).await?;
        Ok(list.recipes)
    }

    /// `DELETE /api/recipes/custom/{id}`
    pub async fn delete_custom(&self, session: &Session, id: &RecipeId) -> Result<(), FinderError> {
        let builder = self
            .client
            .delete(self.url(&format!("/recipes/custom/{}", id)));
        let builder = self.authorized(builder, session)?;
        self.send_empty(builder).await?;
        info!("Deleted custom recipe {}", id);
        Ok(())
    }
}
