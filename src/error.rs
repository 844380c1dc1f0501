use reqwest::StatusCode;
use thiserror::Error;

/// Input problems caught before anything is sent to the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Ingredient text is blank
    #[error("Please enter at least 2 ingredients")]
    EmptyInput,

    /// Fewer than two comma separated ingredients
    #[error("Please enter at least 2 ingredients")]
    InsufficientIngredients,

    /// Custom recipe has no title
    #[error("Please give your recipe a title")]
    MissingTitle,

    /// Custom recipe has fewer than two ingredients
    #[error("Please add at least 2 ingredients")]
    TooFewIngredients,

    /// Custom recipe has no instruction steps
    #[error("Please add at least 1 instruction")]
    MissingInstructions,

    /// Custom recipe must serve at least one person
    #[error("Servings must be at least 1")]
    InvalidServings,

    /// Account deletion was not confirmed with the exact phrase
    #[error("Please type \"DELETE MY ACCOUNT\" to confirm")]
    ConfirmationMismatch,
}

/// Errors that can occur while talking to the recipe backend
#[derive(Error, Debug)]
pub enum FinderError {
    /// Request was rejected locally and never transmitted
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request exceeded the configured wait
    #[error("Request timed out")]
    Timeout,

    /// 502 from the backend: the recipe generation service is down
    #[error("Upstream recipe service unavailable (502)")]
    UpstreamUnavailable,

    /// 504 from the backend
    #[error("Gateway timeout (504)")]
    GatewayTimeout,

    /// Any other 5xx
    #[error("Server error ({0})")]
    Server(u16),

    /// 422 from the backend: ingredients were not in an accepted format
    #[error("Invalid ingredient format: {0}")]
    InvalidIngredients(String),

    /// No response was obtained at all
    #[error("Network error: {0}")]
    Network(String),

    /// Any other non-success status, with the backend's `detail` if present
    #[error("API error {status}: {detail}")]
    Api { status: u16, detail: String },

    /// Success status but the body was not the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),

    /// Call needs a logged in session
    #[error("You need to be logged in to do that")]
    NotAuthenticated,

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Anything that does not fit the categories above
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl FinderError {
    /// Map a non-success HTTP status (and the body's `detail`, if any) to an error
    pub fn from_status(status: StatusCode, detail: Option<String>) -> Self {
        match status.as_u16() {
            502 => FinderError::UpstreamUnavailable,
            504 => FinderError::GatewayTimeout,
            422 => FinderError::InvalidIngredients(detail.unwrap_or_default()),
            code if status.is_server_error() => FinderError::Server(code),
            code => FinderError::Api {
                status: code,
                detail: detail.unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                }),
            },
        }
    }

    /// The message a user should see for this failure
    pub fn user_message(&self) -> String {
        match self {
            FinderError::Validation(e) => e.to_string(),
            FinderError::Timeout => "The request took too long. The AI recipe service may be \
                 busy right now, please try again."
                .to_string(),
            FinderError::UpstreamUnavailable => "The recipe generation service is temporarily \
                 unavailable. Please try again in a few moments."
                .to_string(),
            FinderError::GatewayTimeout => {
                "The server timed out while generating recipes. Please try again.".to_string()
            }
            FinderError::Server(_) => "Server error. Please try again later.".to_string(),
            FinderError::InvalidIngredients(_) => {
                "Invalid ingredient format. Please check your ingredients and try again."
                    .to_string()
            }
            FinderError::Network(_) => {
                "Unable to reach the server. Please check your internet connection.".to_string()
            }
            FinderError::Api { detail, .. } => detail.clone(),
            FinderError::NotAuthenticated => self.to_string(),
            FinderError::Decode(_) | FinderError::Unknown(_) => {
                "No recipes found. Try different ingredients.".to_string()
            }
            FinderError::BuilderError(_) | FinderError::ConfigError(_) => self.to_string(),
        }
    }
}

impl From<reqwest::Error> for FinderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FinderError::Timeout
        } else if err.is_decode() {
            FinderError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            FinderError::from_status(status, None)
        } else if err.is_connect() || err.is_request() {
            FinderError::Network(err.to_string())
        } else {
            FinderError::Unknown(err.to_string())
        }
    }
}
