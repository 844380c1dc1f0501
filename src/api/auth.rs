use log::info;
use serde::Deserialize;
use serde_json::json;

use super::ApiClient;
use crate::error::FinderError;
use crate::model::AuthResponse;
use crate::session::Session;

#[derive(Deserialize)]
struct MessageResponse {
    #[serde(default)]
    message: String,
}

impl ApiClient {
    /// `POST /api/auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, FinderError> {
        let builder = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }));
        self.send_json(builder).await
    }

    /// `POST /api/auth/register`
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResponse, FinderError> {
        let builder = self
            .client
            .post(self.url("/auth/register"))
            .json(&json!({ "name": name, "email": email, "password": password }));
        self.send_json(builder).await
    }

    /// `POST /api/auth/forgot-password`. Returns the backend's confirmation message.
    pub async fn forgot_password(&self, email: &str) -> Result<String, FinderError> {
        let builder = self
            .client
            .post(self.url("/auth/forgot-password"))
            .json(&json!({ "email": email }));
        let response: MessageResponse = self.send_json(builder).await?;
        Ok(response.message)
    }

    /// `DELETE /api/auth/delete-account`. Logs the session out on success.
    pub async fn delete_account(
        &self,
        session: &mut Session,
        password: &str,
    ) -> Result<(), FinderError> {
        let builder = self
            .client
            .delete(self.url("/auth/delete-account"))
            .json(&json!({ "password": password }));
        let builder = self.authorized(builder, session)?;
        self.send_empty(builder).await?;
        info!("Account deleted");
        session.logout();
        Ok(())
    }
}
