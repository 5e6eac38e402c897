use serde_json::Value;

/// Represents different types of proxy configurations
#[derive(Debug, Clone)]
pub enum ProxyType {
    None,
    System,
    Http(String, Option<String>, Option<String>), // Http(server, username, password)
}

/// Configuration for API requests
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub proxy_type: ProxyType,
    pub headers: Option<Value>,
}

impl ApiConfig {
    /// Creates a new ApiConfig with minimal required parameters
    ///
    /// # Example
    /// ```no_run
    /// let config = ApiConfig::new(
    ///     Some("https://api.example.com".to_string()),
    ///     Some("your-api-key".to_string()),
    ///     ProxyType::None,
    ///     None,
    /// );
    /// ```
    pub fn new(
        api_url: Option<String>,
        api_key: Option<String>,
        proxy_type: ProxyType,
        headers: Option<Value>,
    ) -> Self {
        Self {
            api_url,
            api_key,
            proxy_type,
            headers,
        }
    }

    /// Returns a copy of this config with the given extra headers attached.
    /// Used by endpoints that need request-specific headers on top of the
    /// shared configuration.
    pub fn with_headers(&self, headers: Value) -> Self {
        Self {
            headers: Some(headers),
            ..self.clone()
        }
    }
}

/// Response wrapper for API calls
///
/// The body text is kept verbatim even for error statuses so that callers
/// can surface the raw upstream diagnostics.
#[derive(Debug)]
pub struct ApiResponse {
    /// HTTP status code of the response
    pub status: u16,
    /// The raw response body text
    pub content: String,
    /// Indicates a non-success HTTP status
    pub is_error: bool,
}

impl ApiResponse {
    /// Creates a new successful response
    pub fn success(status: u16, content: String) -> Self {
        Self {
            status,
            content,
            is_error: false,
        }
    }

    /// Creates a new error response
    pub fn error(status: u16, content: String) -> Self {
        Self {
            status,
            content,
            is_error: true,
        }
    }
}
