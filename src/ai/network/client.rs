use super::types::*;
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue},
    Client, Method, Response,
};
use rust_i18n::t;
use serde_json::Value;

#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Creates a new HTTP client based on configuration
    ///
    /// # Arguments
    /// * `proxy_type` - The proxy configuration to use
    ///
    /// # Returns
    /// A Result containing either the configured Client or an error message
    async fn create_client(&self, proxy_type: &ProxyType) -> Result<Client, String>;

    /// Sends a GET request to the given endpoint
    ///
    /// # Arguments
    /// * `config` - The API configuration including URL, authentication, and proxy settings
    /// * `endpoint` - The API endpoint to send the request to
    ///
    /// # Returns
    /// A Result containing either the ApiResponse or an error message
    async fn get_request(&self, config: &ApiConfig, endpoint: &str)
        -> Result<ApiResponse, String>;

    /// Sends a POST request with a JSON body
    ///
    /// The response body is read as text regardless of the HTTP status; a
    /// non-success status is reported through `ApiResponse::is_error` with
    /// the raw body preserved, not as an `Err`.
    ///
    /// # Arguments
    /// * `config` - The API configuration including URL, authentication, and proxy settings
    /// * `endpoint` - The API endpoint to send the request to
    /// * `body` - The request body as JSON
    ///
    /// # Returns
    /// A Result containing either the ApiResponse or an error message
    async fn post_request(
        &self,
        config: &ApiConfig,
        endpoint: &str,
        body: Value,
    ) -> Result<ApiResponse, String>;
}

#[derive(Clone, Default)]
pub struct DefaultApiClient;

impl DefaultApiClient {
    /// Creates a new instance of DefaultApiClient
    pub fn new() -> Self {
        Self
    }

    /// Builds the request headers from the configuration
    ///
    /// # Arguments
    /// * `config` - The API configuration containing header information
    /// * `with_body` - Whether the request carries a JSON body
    ///
    /// # Returns
    /// A Result containing either the HeaderMap or an error message
    fn build_headers(&self, config: &ApiConfig, with_body: bool) -> Result<HeaderMap, String> {
        let mut headers = HeaderMap::new();

        // Add API key if present and not empty
        if let Some(api_key) =
            config
                .api_key
                .as_ref()
                .and_then(|k| if k.is_empty() { None } else { Some(k) })
        {
            headers.insert(
                HeaderName::from_bytes(b"Authorization")
                    .map_err(|e| t!("network.header_error", error = e.to_string()).to_string())?,
                HeaderValue::from_str(&format!("Bearer {}", api_key))
                    .map_err(|e| t!("network.header_error", error = e.to_string()).to_string())?,
            );
        }

        if with_body {
            headers.insert(
                HeaderName::from_bytes(b"Content-Type")
                    .map_err(|e| t!("network.header_error", error = e.to_string()).to_string())?,
                HeaderValue::from_static("application/json"),
            );
        }

        // Add custom headers if present
        if let Some(custom_headers) = &config.headers {
            if let Some(obj) = custom_headers.as_object() {
                for (key, value) in obj {
                    if let Some(value_str) = value.as_str() {
                        let header_name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                            t!("network.header_error", error = e.to_string()).to_string()
                        })?;

                        headers.insert(
                            header_name,
                            HeaderValue::from_str(value_str).map_err(|e| {
                                t!("network.header_error", error = e.to_string()).to_string()
                            })?,
                        );
                    }
                }
            }
        }

        Ok(headers)
    }

    /// Joins the configured base URL with the endpoint path
    fn build_url(config: &ApiConfig, endpoint: &str) -> String {
        if endpoint.is_empty() {
            config.api_url.as_deref().unwrap_or_default().to_string()
        } else {
            let base_url = config
                .api_url
                .as_deref()
                .unwrap_or_default()
                .trim_end_matches('/');
            if !endpoint.starts_with('/') {
                format!("{}/{}", base_url, endpoint)
            } else {
                format!("{}{}", base_url, endpoint)
            }
        }
    }

    /// Reads the response into an ApiResponse, preserving the body text for
    /// both success and error statuses
    async fn process_response(&self, response: Response) -> Result<ApiResponse, String> {
        let status = response.status();

        let content = response
            .text()
            .await
            .map_err(|e| t!("network.response_read_error", error = e.to_string()).to_string())?;

        if status.is_success() {
            Ok(ApiResponse::success(status.as_u16(), content))
        } else {
            log::warn!(
                "Request failed - Status: {}, Body: {}",
                status.as_u16(),
                content
            );
            Ok(ApiResponse::error(status.as_u16(), content))
        }
    }

    async fn send_request(
        &self,
        config: &ApiConfig,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<ApiResponse, String> {
        let client = self.create_client(&config.proxy_type).await?;
        let headers = self.build_headers(config, body.is_some())?;
        let url = Self::build_url(config, endpoint);

        #[cfg(debug_assertions)]
        log::debug!("Request URL: {}", url);

        let mut request = client.request(method, url).headers(headers);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| t!("network.request_failed", error = e.to_string()).to_string())?;

        self.process_response(response).await
    }
}

#[async_trait]
impl ApiClient for DefaultApiClient {
    async fn create_client(&self, proxy_type: &ProxyType) -> Result<Client, String> {
        let mut client_builder = Client::builder();

        match proxy_type {
            ProxyType::None => {
                client_builder = client_builder.no_proxy();
            }
            ProxyType::System => {
                // Use system proxy settings (default behavior)
            }
            ProxyType::Http(proxy_url, proxy_username, proxy_password) => {
                let mut proxy = reqwest::Proxy::all(proxy_url)
                    .map_err(|e| t!("network.proxy_error", error = e.to_string()).to_string())?;
                let username = proxy_username.as_deref().unwrap_or_default();
                let password = proxy_password.as_deref().unwrap_or_default();
                if !username.is_empty() && !password.is_empty() {
                    proxy = proxy.basic_auth(username, password);
                }
                client_builder = client_builder.proxy(proxy);
            }
        }

        client_builder
            .build()
            .map_err(|e| t!("network.client_build_error", error = e.to_string()).to_string())
    }

    async fn get_request(
        &self,
        config: &ApiConfig,
        endpoint: &str,
    ) -> Result<ApiResponse, String> {
        self.send_request(config, Method::GET, endpoint, None).await
    }

    async fn post_request(
        &self,
        config: &ApiConfig,
        endpoint: &str,
        body: Value,
    ) -> Result<ApiResponse, String> {
        self.send_request(config, Method::POST, endpoint, Some(body))
            .await
    }
}
