use std::time::Duration;

use crate::api::ApiClient;
use crate::config::FinderConfig;
use crate::error::FinderError;
use crate::ingredients::IngredientInput;
use crate::model::{Cuisine, SearchResponse};
use crate::search::{build_request, SearchRequest};

/// Builder for configuring and running a one-off recipe search
#[derive(Debug, Default)]
pub struct RecipeFinderBuilder {
    input: IngredientInput,
    cuisine: Cuisine,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl RecipeFinderBuilder {
    /// Set the ingredient text, replacing anything set before
    ///
    /// # Example
    /// ```
    /// use kitchen_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .ingredients("chicken, rice, spinach");
    /// ```
    pub fn ingredients(mut self, text: impl Into<String>) -> Self {
        self.input.set_text(text);
        self
    }

    /// Append a spoken transcript to the ingredients
    ///
    /// The transcript goes through the same cleanup as live voice input:
    /// "and"/"with" become separators and words of two letters or less are dropped.
    ///
    /// # Example
    /// ```
    /// use kitchen_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .ingredients("paneer")
    ///     .transcript("spinach and tomatoes");
    /// ```
    pub fn transcript(mut self, transcript: &str) -> Self {
        self.input.append_transcript(transcript);
        self
    }

    /// Restrict results to one cuisine
    pub fn cuisine(mut self, cuisine: Cuisine) -> Self {
        self.cuisine = cuisine;
        self
    }

    /// Use a specific backend instead of the configured one
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for the search request
    ///
    /// # Example
    /// ```
    /// use kitchen_finder::RecipeFinder;
    /// use std::time::Duration;
    ///
    /// let builder = RecipeFinder::builder()
    ///     .ingredients("egg, rice")
    ///     .timeout(Duration::from_secs(30));
    /// ```
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Validate the ingredients without sending anything
    pub fn request(&self) -> Result<SearchRequest, FinderError> {
        Ok(build_request(self.input.text(), self.cuisine)?)
    }

    /// Build and execute the search
    ///
    /// Configuration comes from `kitchen.toml` / `KITCHEN__*` unless both
    /// base URL and timeout were set on the builder.
    ///
    /// # Errors
    /// Returns `FinderError` if:
    /// - Fewer than two ingredients were given (nothing is sent)
    /// - Configuration cannot be loaded
    /// - The backend call fails
    ///
    /// # Example
    /// ```no_run
    /// # use kitchen_finder::RecipeFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let results = RecipeFinder::builder()
    ///     .ingredients("chicken, rice")
    ///     .build()
    ///     .await?;
    /// println!("{} recipes", results.total());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn build(self) -> Result<SearchResponse, FinderError> {
        let request = self.request()?;

        let (base_url, timeout) = match (self.base_url, self.timeout) {
            (Some(url), Some(timeout)) => (url, timeout),
            (base_url, timeout) => {
                let config = FinderConfig::load()?;
                let timeout = timeout.unwrap_or_else(|| config.timeout());
                (base_url.unwrap_or(config.base_url), timeout)
            }
        };

        let client = ApiClient::with_base_url(&base_url, timeout)?;
        client.search(&request).await
    }
}

/// Main entry point for the builder API
pub struct RecipeFinder;

impl RecipeFinder {
    /// Creates a new builder for a recipe search
    ///
    /// # Example
    /// ```
    /// use kitchen_finder::RecipeFinder;
    ///
    /// let builder = RecipeFinder::builder();
    /// ```
    pub fn builder() -> RecipeFinderBuilder {
        RecipeFinderBuilder::default()
    }
}
