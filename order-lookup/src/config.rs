use std::env;

const DEFAULT_API_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the order API; lookups go to `<api_url>/order/<id>`
    pub api_url: String,
}

impl Config {
    /// Read configuration from the environment (and `.env` if present)
    ///
    /// Optional env vars:
    /// - ORDER_API_URL: Base URL of the order API (default http://localhost:8080)
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_api_url(env::var("ORDER_API_URL").ok())
    }

    fn from_api_url(api_url: Option<String>) -> Self {
        Self {
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        }
    }

    /// Override the base URL, e.g. from the command line
    pub fn with_api_url(self, api_url: Option<String>) -> Self {
        match api_url {
            Some(api_url) => Self { api_url },
            None => self,
        }
    }
}
