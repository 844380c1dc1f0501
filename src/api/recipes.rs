use async_trait::async_trait;
use log::debug;

use super::ApiClient;
use crate::error::FinderError;
use crate::model::SearchResponse;
use crate::search::{RecipeService, SearchRequest};

impl ApiClient {
    /// `POST /api/recipes/search`
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FinderError> {
        debug!("POST /recipes/search {:?}", request);
        let builder = self.client.post(self.url("/recipes/search")).json(request);
        self.send_json(builder).await
    }
}

#[async_trait]
impl RecipeService for ApiClient {
    async fn search(&self, request: &SearchRequest) -> Result<SearchResponse, FinderError> {
        ApiClient::search(self, request).await
    }
}
