use log::debug;

use crate::model::{OnionGarlic, PrepTier, RecipeResult, SearchResponse};

/// Recipes kept per tier/onion-garlic bucket
pub const DEFAULT_BUCKET_SIZE: usize = 5;

const ONION_GARLIC_KEYWORDS: &[&str] = &[
    "onion", "garlic", "shallot", "leek", "scallion", "chive",
];

/// Whether any ingredient line mentions onion, garlic or a close relative
pub fn contains_onion_garlic<S: AsRef<str>>(ingredients: &[S]) -> bool {
    ingredients.iter().any(|ingredient| {
        let lower = ingredient.as_ref().to_lowercase();
        ONION_GARLIC_KEYWORDS.iter().any(|kw| lower.contains(kw))
    })
}

/// Bucket recipes by prep-time tier and onion-garlic flag.
///
/// Input order is kept within each bucket; anything past `per_bucket` is dropped.
pub fn categorize(recipes: Vec<RecipeResult>, per_bucket: usize) -> SearchResponse {
    let mut response = SearchResponse::default();
    let total = recipes.len();

    for recipe in recipes {
        let bucket = response
            .tier_mut(recipe.prep_tier())
            .get_mut(recipe.onion_garlic());
        if bucket.len() < per_bucket {
            bucket.push(recipe);
        }
    }

    debug!(
        "Categorized {} recipes, kept {}",
        total,
        response.total()
    );
    response
}

/// Flatten a partitioned response back into display order
pub fn flatten(response: &SearchResponse) -> Vec<(PrepTier, OnionGarlic, &RecipeResult)> {
    response
        .iter()
        .flat_map(|(tier, og, recipes)| recipes.iter().map(move |r| (tier, og, r)))
        .collect()
}
