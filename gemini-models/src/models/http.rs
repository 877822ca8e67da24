use crate::client::ClientInner;
use crate::error::{Error, Result};
use gemini_models_types::models::ListModelsConfig;

pub(super) fn build_models_list_url(
    inner: &ClientInner,
    config: &ListModelsConfig,
) -> Result<String> {
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    add_list_query_params(&format!("{base}{version}/models"), config)
}

pub(super) fn add_list_query_params(url: &str, config: &ListModelsConfig) -> Result<String> {
    let mut url = reqwest::Url::parse(url).map_err(|err| Error::InvalidConfig {
        message: err.to_string(),
    })?;
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(page_size) = config.page_size {
            pairs.append_pair("pageSize", &page_size.to_string());
        }
        if let Some(page_token) = &config.page_token {
            pairs.append_pair("pageToken", page_token);
        }
        if let Some(filter) = &config.filter {
            pairs.append_pair("filter", filter);
        }
        if let Some(query_base) = config.query_base {
            pairs.append_pair("queryBase", if query_base { "true" } else { "false" });
        }
    }
    // 无参数时去掉多余的 `?`。
    if url.query() == Some("") {
        url.set_query(None);
    }
    Ok(url.to_string())
}
