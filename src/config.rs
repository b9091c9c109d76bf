use crate::error::{PlannerError, Result};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;

/// Process-wide configuration, loaded once before serving any request.
#[derive(Clone)]
pub struct PlannerConfig {
    /// Provider API key; `None` makes every plan request fail fast
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub bind_address: String,
    pub port: u16,
}

/// Placeholder printed instead of the API key in `Debug` output.
pub(crate) const REDACTED: &str = "<redacted>";

impl std::fmt::Debug for PlannerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlannerConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("bind_address", &self.bind_address)
            .field("port", &self.port)
            .finish()
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl PlannerConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let port = match read("PLANNER_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|err| {
                PlannerError::Config(format!("PLANNER_PORT must be a port number: {err}"))
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key: read("GEMINI_API_KEY"),
            base_url: read("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: read("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            bind_address: read("PLANNER_BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            port,
        })
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}
