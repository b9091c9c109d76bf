use thiserror::Error;

/// Message shown when no provider API key is configured
pub const MISSING_KEY_MESSAGE: &str =
    "API Key is not configured. Please get a key from Google AI Studio.";

/// Message shown for every provider or parse failure
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate a valid plan from the AI. The AI response may not have been in the correct JSON format.";

/// Main error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(String),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, PlannerError>;

impl PlannerError {
    /// Get the error code for structured responses
    pub fn error_code(&self) -> &'static str {
        match self {
            PlannerError::Config(_) => "CONFIG_ERROR",
            PlannerError::Provider(_) => "PROVIDER_ERROR",
            PlannerError::Parse(_) => "PARSE_ERROR",
            PlannerError::InvalidInput(_) => "INVALID_INPUT",
            PlannerError::Serialization(_) => "SERIALIZATION_ERROR",
            PlannerError::Template(_) => "TEMPLATE_ERROR",
        }
    }

    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(self, PlannerError::InvalidInput(_))
    }

    /// The message a traveler sees on the page.
    ///
    /// Provider and parse failures collapse into one generic message; the
    /// details only go to the logs.
    pub fn user_message(&self) -> String {
        match self {
            PlannerError::Config(_) => MISSING_KEY_MESSAGE.to_string(),
            PlannerError::InvalidInput(message) => message.clone(),
            PlannerError::Provider(_) | PlannerError::Parse(_) | PlannerError::Serialization(_) => {
                GENERATION_FAILED_MESSAGE.to_string()
            }
            PlannerError::Template(_) => "The itinerary page could not be rendered.".to_string(),
        }
    }

    /// Convert to a structured error payload
    pub fn to_error_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.error_code(),
                "message": self.user_message(),
            }
        })
    }
}

impl From<tera::Error> for PlannerError {
    fn from(err: tera::Error) -> Self {
        PlannerError::Template(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_uses_key_message() {
        let error = PlannerError::Config("GEMINI_API_KEY is not set".to_string());
        assert_eq!(error.error_code(), "CONFIG_ERROR");
        assert_eq!(error.user_message(), MISSING_KEY_MESSAGE);
        assert!(error.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_provider_and_parse_share_generic_message() {
        let provider = PlannerError::Provider("HTTP 500".to_string());
        let parse = PlannerError::Parse("expected value".to_string());
        assert_eq!(provider.user_message(), GENERATION_FAILED_MESSAGE);
        assert_eq!(parse.user_message(), provider.user_message());
        assert!(!provider.user_message().contains("HTTP 500"));
    }

    #[test]
    fn test_error_payload() {
        let error = PlannerError::InvalidInput("Duration must be a whole number".to_string());
        assert!(error.is_client_error());

        let payload = error.to_error_payload();
        assert_eq!(payload["error"]["code"], "INVALID_INPUT");
        assert_eq!(payload["error"]["message"], "Duration must be a whole number");
    }
}
