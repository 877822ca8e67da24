//! Models API surface.

use std::sync::Arc;

use gemini_models_types::models::{ListModelsConfig, ListModelsResponse, Model};
use tracing::debug;

use crate::client::ClientInner;
use crate::error::{Error, Result};

mod http;

use self::http::build_models_list_url;

/// 模型描述的来源。
///
/// [`Models`] 通过 HTTP 实现；测试可替换为内存实现以模拟成功或失败。
#[allow(async_fn_in_trait)]
pub trait ModelSource {
    /// 返回全部模型描述，顺序与来源一致。
    async fn list_models(&self) -> Result<Vec<Model>>;
}

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) const fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 列出模型（单页）。
    ///
    /// # Errors
    /// 当请求失败、API 返回非成功状态或响应无法解析时返回错误。
    pub async fn list(&self) -> Result<ListModelsResponse> {
        self.list_with_config(ListModelsConfig::default()).await
    }

    /// 列出模型（单页，带配置）。
    ///
    /// # Errors
    /// 当请求失败、API 返回非成功状态或响应无法解析时返回错误。
    pub async fn list_with_config(&self, config: ListModelsConfig) -> Result<ListModelsResponse> {
        let url = build_models_list_url(&self.inner, &config)?;
        let request = self.inner.http.get(url);
        let response = self.inner.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::ApiError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// 列出所有模型（自动翻页）。
    ///
    /// # Errors
    /// 任意一页失败即返回错误，不返回部分结果。
    pub async fn all(&self) -> Result<Vec<Model>> {
        self.all_with_config(ListModelsConfig::default()).await
    }

    /// 列出所有模型（带配置，自动翻页）。
    ///
    /// # Errors
    /// 任意一页失败即返回错误，不返回部分结果；服务端重复返回同一
    /// `nextPageToken` 时返回 [`Error::Parse`]。
    pub async fn all_with_config(&self, mut config: ListModelsConfig) -> Result<Vec<Model>> {
        let mut models = Vec::new();
        let mut pages = 0usize;
        loop {
            let response = self.list_with_config(config.clone()).await?;
            pages += 1;
            if let Some(items) = response.models {
                models.extend(items);
            }
            match response.next_page_token {
                Some(token) if !token.is_empty() => {
                    if config.page_token.as_deref() == Some(token.as_str()) {
                        return Err(Error::Parse {
                            message: format!("nextPageToken {token:?} repeated after {pages} pages"),
                        });
                    }
                    config.page_token = Some(token);
                }
                _ => break,
            }
        }
        debug!(pages, models = models.len(), "listed models");
        Ok(models)
    }
}

impl ModelSource for Models {
    async fn list_models(&self) -> Result<Vec<Model>> {
        self.all().await
    }
}
