//! Client core for finding recipes from the ingredients you already have.
//!
//! Ingredients come in as free text or voice transcripts, are normalized
//! into tags, validated into a search request and sent to the recipe
//! backend. Results arrive bucketed by preparation time and by whether they
//! use onion or garlic.

pub mod api;
pub mod builder;
pub mod config;
pub mod custom;
pub mod dialogs;
pub mod error;
pub mod ingredients;
pub mod model;
pub mod partition;
pub mod search;
pub mod session;
pub mod share;
pub mod voice;

pub use api::{ApiClient, FavoriteSaved};
pub use builder::{RecipeFinder, RecipeFinderBuilder};
pub use config::FinderConfig;
pub use custom::CustomRecipeDraft;
pub use error::{FinderError, ValidationError};
pub use ingredients::IngredientInput;
pub use model::{
    Cuisine, Nutrition, NutritionBars, OnionGarlic, PrepTier, RecipeId, RecipeResult,
    SavedRecipe, SearchResponse, TierBuckets,
};
pub use search::{build_request, RecipeService, SearchRequest, SearchSession, SearchState};
pub use session::Session;
pub use share::{share_link, ShareKind};
pub use voice::{SpeechRecognizer, VoiceInput};

/// Search with ingredient text against the configured backend
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use kitchen_finder::{search_recipes, Cuisine};
///
/// let results = search_recipes("chicken, rice, tomatoes", Cuisine::Any).await?;
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(
    ingredients: &str,
    cuisine: Cuisine,
) -> Result<SearchResponse, FinderError> {
    RecipeFinder::builder()
        .ingredients(ingredients)
        .cuisine(cuisine)
        .build()
        .await
}
