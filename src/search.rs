use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;

use crate::error::{FinderError, ValidationError};
use crate::ingredients::tags_from_text;
use crate::model::{Cuisine, SearchResponse};

/// Number of candidate recipes requested from the backend. Not user configurable.
pub const RESULT_COUNT: u32 = 100;

/// Minimum number of ingredients for a search
pub const MIN_INGREDIENTS: usize = 2;

/// Body of `POST /api/recipes/search`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchRequest {
    pub ingredients: String,
    pub cuisine: Cuisine,
    #[serde(rename = "number")]
    pub result_count: u32,
}

/// Validate ingredient text and build the request for it.
///
/// Blank text fails with `EmptyInput`, fewer than two comma separated
/// ingredients with `InsufficientIngredients`.
pub fn build_request(text: &str, cuisine: Cuisine) -> Result<SearchRequest, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    if tags_from_text(trimmed).len() < MIN_INGREDIENTS {
        return Err(ValidationError::InsufficientIngredients);
    }
    Ok(SearchRequest {
        ingredients: trimmed.to_string(),
        cuisine,
        result_count: RESULT_COUNT,
    })
}

/// Anything that can answer a recipe search
#[async_trait]
pub trait RecipeService: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FinderError>;
}

#[derive(Debug)]
pub enum SearchState {
    Idle,
    Searching,
    Success(SearchResponse),
    Failed(FinderError),
}

/// Ticket for one in-flight search
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSearch {
    generation: u64,
    pub request: SearchRequest,
}

impl PendingSearch {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Search lifecycle for one session: Idle -> Searching -> Success | Failed -> Idle
#[derive(Debug)]
pub struct SearchSession {
    state: SearchState,
    generation: u64,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    pub fn new() -> Self {
        Self {
            state: SearchState::Idle,
            generation: 0,
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.state, SearchState::Searching)
    }

    /// Results to display; only present after a successful search
    pub fn results(&self) -> Option<&SearchResponse> {
        match &self.state {
            SearchState::Success(response) => Some(response),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FinderError> {
        match &self.state {
            SearchState::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Validate and enter `Searching`.
    ///
    /// Prior results are dropped immediately. Returns `Ok(None)` when a
    /// search is already running. A validation error leaves the state alone.
    pub fn begin(
        &mut self,
        text: &str,
        cuisine: Cuisine,
    ) -> Result<Option<PendingSearch>, ValidationError> {
        if self.is_searching() {
            debug!("Search already in progress, ignoring submit");
            return Ok(None);
        }
        let request = build_request(text, cuisine)?;
        self.generation += 1;
        self.state = SearchState::Searching;
        info!(
            "Searching recipes for '{}' (cuisine: {})",
            request.ingredients, request.cuisine
        );
        Ok(Some(PendingSearch {
            generation: self.generation,
            request,
        }))
    }

    /// Record the outcome of a search. Returns false if the outcome was stale and dropped.
    pub fn complete(
        &mut self,
        pending: &PendingSearch,
        outcome: Result<SearchResponse, FinderError>,
    ) -> bool {
        if pending.generation != self.generation || !self.is_searching() {
            warn!(
                "Discarding stale search response (generation {}, current {})",
                pending.generation, self.generation
            );
            return false;
        }
        self.state = match outcome {
            Ok(response) => {
                info!("Search returned {} recipes", response.total());
                SearchState::Success(response)
            }
            Err(e) => {
                warn!("Search failed: {}", e);
                SearchState::Failed(e)
            }
        };
        true
    }

    /// Back to `Idle`. An outstanding search's response will be discarded.
    pub fn reset(&mut self) {
        if self.is_searching() {
            self.generation += 1;
        }
        self.state = SearchState::Idle;
    }

    /// Consume the session: the results on success, the error on failure,
    /// `None` if no search completed
    pub fn finish(self) -> Result<Option<SearchResponse>, FinderError> {
        match self.state {
            SearchState::Success(response) => Ok(Some(response)),
            SearchState::Failed(e) => Err(e),
            SearchState::Idle | SearchState::Searching => Ok(None),
        }
    }

    /// Begin a search, wait for the service and record the outcome
    pub async fn run(
        &mut self,
        service: &dyn RecipeService,
        text: &str,
        cuisine: Cuisine,
    ) -> Result<&SearchState, ValidationError> {
        if let Some(pending) = self.begin(text, cuisine)? {
            let outcome = service.search(&pending.request).await;
            self.complete(&pending, outcome);
        }
        Ok(&self.state)
    }
}
