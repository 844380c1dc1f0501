use log::info;

use crate::model::{AuthResponse, User};

/// Authentication context, passed to every call that needs it
#[derive(Debug, Clone, Default)]
pub struct Session {
    token: Option<String>,
    user: Option<User>,
}

impl Session {
    /// A session with nobody logged in
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// A session from a previously issued token, user details unknown
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            user: None,
        }
    }

    pub fn login(&mut self, auth: AuthResponse) {
        info!("Logged in as {}", auth.user.email);
        self.token = Some(auth.access_token);
        self.user = Some(auth.user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            info!("Logged out {}", user.email);
        }
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
