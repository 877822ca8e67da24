//! 凭据加载。

use std::ffi::OsString;

use tracing::debug;

use crate::error::{Error, Result};

/// 保存 API Key 的环境变量。
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";
/// 凭据缺失时用于列出相关环境变量的子串。
pub const RELATED_VAR_PATTERN: &str = "GOOGLE";

/// 从环境变量快照中读取 API Key。
///
/// 快照由调用方注入（二进制传入 [`env_snapshot`]），便于测试。
///
/// # Errors
/// 变量缺失或为空时返回 [`Error::MissingCredential`]，其中附带名称包含
/// [`RELATED_VAR_PATTERN`] 的变量名。
pub fn load_api_key<I>(vars: I, name: &str) -> Result<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut value = None;
    let mut related = Vec::new();
    for (key, val) in vars {
        if key.contains(RELATED_VAR_PATTERN) {
            related.push(key.clone());
        }
        if key == name {
            value = Some(val);
        }
    }

    match value {
        Some(value) if !value.is_empty() => {
            debug!(variable = name, "API key loaded");
            Ok(value)
        }
        _ => {
            related.sort();
            Err(Error::MissingCredential {
                name: name.to_string(),
                related,
            })
        }
    }
}

/// 当前进程环境变量的快照，规则见 [`snapshot_from`]。
#[must_use]
pub fn env_snapshot() -> Vec<(String, String)> {
    snapshot_from(std::env::vars_os())
}

/// 将原始环境变量转换为 UTF-8 快照。
///
/// 变量名按有损方式转换，非 UTF-8 的名称仍会出现在相关变量列表中；
/// 非 UTF-8 的值记为空字符串，与缺失同等处理。
pub fn snapshot_from<I>(vars: I) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .map(|(key, value)| {
            (
                key.to_string_lossy().into_owned(),
                value.into_string().unwrap_or_default(),
            )
        })
        .collect()
}

/// 渲染凭据缺失时的调试行，如 `Debug: All env vars containing 'GOOGLE': ['A', 'B']`。
#[must_use]
pub fn related_vars_line(related: &[String]) -> String {
    let quoted: Vec<String> = related.iter().map(|name| format!("'{name}'")).collect();
    format!(
        "Debug: All env vars containing '{RELATED_VAR_PATTERN}': [{}]",
        quoted.join(", ")
    )
}
