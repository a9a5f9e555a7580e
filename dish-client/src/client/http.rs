// dish-client/src/client/http.rs
// HTTP 客户端 - 网络通信

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use http::Method;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// 服务端返回的错误响应格式
#[derive(serde::Deserialize)]
struct ApiErrorResponse {
    pub code: i32,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Query string and body of a single request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Query parameters (a JSON object)
    pub params: Option<serde_json::Value>,
    /// JSON body
    pub data: Option<serde_json::Value>,
}

impl RequestOptions {
    /// No query, no body
    pub fn none() -> Self {
        Self::default()
    }

    /// Send `params` as the query string
    pub fn with_params<P: Serialize + ?Sized>(params: &P) -> ClientResult<Self> {
        Ok(Self {
            params: Some(serde_json::to_value(params)?),
            data: None,
        })
    }

    /// Send `data` as the JSON body
    pub fn with_data<B: Serialize + ?Sized>(data: &B) -> ClientResult<Self> {
        Ok(Self {
            params: None,
            data: Some(serde_json::to_value(data)?),
        })
    }
}

/// HTTP 客户端 trait
///
/// The one capability the dish API needs from a transport.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn request<T: DeserializeOwned + Send>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<T>;
}

#[async_trait]
impl<H: HttpClient> HttpClient for Arc<H> {
    async fn request<T: DeserializeOwned + Send>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<T> {
        (**self).request(method, path, options).await
    }
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace or clear the authentication token
    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            tracing::warn!(status = %status, body = %text, "Request failed");
            // 尝试解析为 API 错误响应
            if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&text) {
                return Err(ClientError::Api {
                    code: api_err.code,
                    message: api_err.message,
                    details: api_err.details,
                });
            }
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized(text)),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(format!("{}: {}", status, text))),
            };
        }

        let body = response.bytes().await?;
        // 204 and friends: decode from `null` so unit-like responses still work
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(serde_json::Value::Null)?);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn request<T: DeserializeOwned + Send>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> ClientResult<T> {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut req = self.client.request(method, &url);
        if let Some(params) = &options.params {
            req = req.query(params);
        }
        if let Some(data) = &options.data {
            req = req.json(data);
        }
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = req.send().await?;
        self.handle_response(response).await
    }
}
