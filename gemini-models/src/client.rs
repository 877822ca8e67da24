//! Client configuration and transport layer.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client as HttpClient;
use tracing::debug;

use crate::credentials::{self, API_KEY_VAR};
use crate::error::{Error, Result};

/// 默认 API 根地址。
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/";
/// 默认 API 版本。
pub const DEFAULT_API_VERSION: &str = "v1beta";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini 客户端。
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub http: HttpClient,
    pub api_client: ApiClient,
}

/// HTTP 配置。
#[derive(Debug, Clone, Default)]
pub struct HttpOptions {
    pub base_url: Option<String>,
    pub api_version: Option<String>,
}

impl Client {
    /// 使用 API Key 创建客户端。
    ///
    /// # Errors
    /// 当 API Key 无法作为请求头发送或构建 HTTP 客户端失败时返回错误。
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    /// 从环境变量创建客户端。
    ///
    /// 读取 `GOOGLE_API_KEY`，并支持 `GENAI_BASE_URL`（或 `GEMINI_BASE_URL`）
    /// 与 `GENAI_API_VERSION` 覆盖，空白值忽略。
    ///
    /// # Errors
    /// 当环境变量缺失或构建客户端失败时返回错误。
    pub fn from_env() -> Result<Self> {
        let api_key = credentials::load_api_key(credentials::env_snapshot(), API_KEY_VAR)?;
        Self::builder()
            .api_key(api_key)
            .env_overrides(credentials::env_snapshot())
            .build()
    }

    /// 创建 Builder。
    #[must_use]
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// 访问 Models API。
    #[must_use]
    pub fn models(&self) -> crate::models::Models {
        crate::models::Models::new(self.inner.clone())
    }

    /// 当前使用的 API 根地址（以 `/` 结尾）。
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.api_client.base_url
    }

    /// 当前使用的 API 版本。
    #[must_use]
    pub fn api_version(&self) -> &str {
        &self.inner.api_client.api_version
    }
}

/// 客户端 Builder。
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    http_options: HttpOptions,
}

impl ClientBuilder {
    /// 设置 API Key。
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// 设置自定义基础 URL。
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.http_options.base_url = Some(base_url.into());
        self
    }

    /// 设置 API 版本。
    #[must_use]
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.http_options.api_version = Some(api_version.into());
        self
    }

    /// 应用环境变量中的基础 URL 与 API 版本覆盖。
    #[must_use]
    pub fn env_overrides<I>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut genai_base_url = None;
        let mut gemini_base_url = None;
        for (key, value) in vars {
            if value.trim().is_empty() {
                continue;
            }
            match key.as_str() {
                "GENAI_BASE_URL" => genai_base_url = Some(value),
                "GEMINI_BASE_URL" => gemini_base_url = Some(value),
                "GENAI_API_VERSION" => self.http_options.api_version = Some(value),
                _ => {}
            }
        }
        if let Some(base_url) = genai_base_url.or(gemini_base_url) {
            self.http_options.base_url = Some(base_url);
        }
        self
    }

    /// 构建客户端。
    ///
    /// # Errors
    /// 当缺少 API Key、参数无效或构建 HTTP 客户端失败时返回错误。
    pub fn build(self) -> Result<Client> {
        let Self {
            api_key,
            http_options,
        } = self;

        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::InvalidConfig {
                message: "API key required for Gemini API".into(),
            })?;
        let headers = Self::build_headers(&api_key)?;
        let http = HttpClient::builder().default_headers(headers).build()?;

        let api_client = ApiClient::new(&http_options)?;
        debug!(
            base_url = %api_client.base_url,
            api_version = %api_client.api_version,
            "gemini client configured"
        );

        Ok(Client {
            inner: Arc::new(ClientInner { http, api_client }),
        })
    }

    fn build_headers(api_key: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let mut header_value = HeaderValue::from_str(api_key).map_err(|_| Error::InvalidConfig {
            message: "Invalid API key value".into(),
        })?;
        header_value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), header_value);
        Ok(headers)
    }
}

impl ClientInner {
    /// 发送请求。鉴权头已作为默认头注入。
    ///
    /// # Errors
    /// 当请求构建或网络请求失败时返回错误。
    pub async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        let request = request.build()?;
        debug!(method = %request.method(), url = %request.url(), "sending request");
        Ok(self.http.execute(request).await?)
    }
}

pub(crate) struct ApiClient {
    pub base_url: String,
    pub api_version: String,
}

impl ApiClient {
    /// 创建 API 客户端配置。
    pub fn new(http_options: &HttpOptions) -> Result<Self> {
        let base_url = http_options
            .base_url
            .as_deref()
            .map_or_else(|| Ok(DEFAULT_BASE_URL.to_string()), normalize_base_url)?;

        let api_version = http_options
            .api_version
            .clone()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Ok(Self {
            base_url,
            api_version,
        })
    }
}

fn normalize_base_url(base_url: &str) -> Result<String> {
    let mut value = base_url.trim().to_string();
    if !value.ends_with('/') {
        value.push('/');
    }
    reqwest::Url::parse(&value).map_err(|err| Error::InvalidConfig {
        message: format!("Invalid base URL {value}: {err}"),
    })?;
    Ok(value)
}
