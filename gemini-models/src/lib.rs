//! Gemini 模型目录：列出支持内容生成的模型。

pub mod capability;
pub mod client;
pub mod credentials;
pub mod error;
pub mod models;
pub mod report;
pub mod telemetry;

#[cfg(test)]
mod test_support;

pub use gemini_models_types as types;

pub use client::{Client, ClientBuilder, HttpOptions};
pub use error::{Error, Result};
pub use models::{ModelSource, Models};
