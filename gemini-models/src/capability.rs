//! Generation capability checks and model identifier normalization.

use gemini_models_types::models::Model;

/// 表示模型支持内容生成的方法名。
pub const GENERATE_CONTENT: &str = "generateContent";

/// 模型资源名前缀。
pub const MODEL_PREFIX: &str = "models/";

/// 模型是否在 `supportedGenerationMethods` 中声明了 `method`。
///
/// 缺失该字段视为空集合。
#[must_use]
pub fn supports_method(model: &Model, method: &str) -> bool {
    model
        .supported_generation_methods
        .as_deref()
        .is_some_and(|methods| methods.iter().any(|m| m == method))
}

/// 模型是否支持内容生成（聊天、文本生成）。
#[must_use]
pub fn supports_generation(model: &Model) -> bool {
    supports_method(model, GENERATE_CONTENT)
}

/// 去掉开头的 `models/`；没有该前缀时原样返回。
#[must_use]
pub fn strip_model_prefix(name: &str) -> &str {
    name.strip_prefix(MODEL_PREFIX).unwrap_or(name)
}
