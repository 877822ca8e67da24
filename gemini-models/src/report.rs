//! Plain-text report of the models that support content generation.
//!
//! The output layout:
//!
//! ```text
//! 【利用可能なモデル一覧】
//! --------------------------------------------------
//! ID: gemini-2.0-flash
//! 説明: Fast and versatile
//! --------------------------------------------------
//!
//! 合計 1 個のモデルが見つかりました。
//!
//! モデルID一覧:
//!   - gemini-2.0-flash
//! ```

use std::io::Write;

use gemini_models_types::models::Model;
use tracing::trace;

use crate::capability::{strip_model_prefix, supports_generation};
use crate::error::Result;
use crate::models::ModelSource;

pub const HEADER: &str = "【利用可能なモデル一覧】";
pub const SEPARATOR_WIDTH: usize = 50;

/// 单遍过滤并打印模型，收集去前缀后的模型 ID。
pub struct Reporter<W> {
    out: W,
    separator: String,
    found: Vec<String>,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            separator: "-".repeat(SEPARATOR_WIDTH),
            found: Vec::new(),
        }
    }

    /// 打印标题与分隔线。
    ///
    /// # Errors
    /// 写入输出失败时返回错误。
    pub fn header(&mut self) -> Result<()> {
        writeln!(self.out, "{HEADER}")?;
        writeln!(self.out, "{}", self.separator)?;
        Ok(())
    }

    /// 处理一个模型：不支持内容生成时跳过，返回是否被收录。
    ///
    /// # Errors
    /// 写入输出失败时返回错误。
    pub fn record(&mut self, model: &Model) -> Result<bool> {
        let name = model.name.as_deref().unwrap_or_default();
        if !supports_generation(model) {
            trace!(model = name, "skipping model without generateContent");
            return Ok(false);
        }

        let id = strip_model_prefix(name);
        writeln!(self.out, "ID: {id}")?;
        if let Some(description) = model.description.as_deref().filter(|d| !d.is_empty()) {
            writeln!(self.out, "説明: {description}")?;
        }
        writeln!(self.out, "{}", self.separator)?;
        self.found.push(id.to_string());
        Ok(true)
    }

    /// 已收录的模型 ID。
    #[must_use]
    pub fn found(&self) -> &[String] {
        &self.found
    }

    /// 打印总数与 ID 列表，返回收录的 ID。
    ///
    /// # Errors
    /// 写入输出失败时返回错误。
    pub fn finish(mut self) -> Result<Vec<String>> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "合計 {} 個のモデルが見つかりました。",
            self.found.len()
        )?;
        writeln!(self.out)?;
        writeln!(self.out, "モデルID一覧:")?;
        for id in &self.found {
            writeln!(self.out, "  - {id}")?;
        }
        self.out.flush()?;
        Ok(self.found)
    }
}

/// 打印标题，从 `source` 获取模型并输出完整报告。
///
/// 获取失败时直接返回错误，不打印汇总。
///
/// # Errors
/// 模型来源失败或写入输出失败时返回错误。
pub async fn report_generation_models<S, W>(source: &S, out: W) -> Result<Vec<String>>
where
    S: ModelSource,
    W: Write,
{
    let mut reporter = Reporter::new(out);
    reporter.header()?;
    let models = source.list_models().await?;
    for model in &models {
        reporter.record(model)?;
    }
    reporter.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;

    struct StaticSource {
        models: Vec<Model>,
        calls: Cell<usize>,
    }

    impl StaticSource {
        fn new(models: Vec<Model>) -> Self {
            Self {
                models,
                calls: Cell::new(0),
            }
        }
    }

    impl ModelSource for StaticSource {
        async fn list_models(&self) -> Result<Vec<Model>> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.models.clone())
        }
    }

    struct FailingSource;

    impl ModelSource for FailingSource {
        async fn list_models(&self) -> Result<Vec<Model>> {
            Err(Error::ApiError {
                status: 403,
                message: "API key not valid".into(),
            })
        }
    }

    fn model(name: &str, methods: &[&str], description: Option<&str>) -> Model {
        Model {
            name: Some(name.to_string()),
            description: description.map(ToString::to_string),
            supported_generation_methods: Some(methods.iter().map(ToString::to_string).collect()),
            ..Default::default()
        }
    }

    async fn render(source: &StaticSource) -> (String, Vec<String>) {
        let mut out = Vec::new();
        let ids = report_generation_models(source, &mut out).await.unwrap();
        (String::from_utf8(out).unwrap(), ids)
    }

    fn sep() -> String {
        "-".repeat(SEPARATOR_WIDTH)
    }

    #[tokio::test]
    async fn test_single_model_report() {
        let source = StaticSource::new(vec![model(
            "models/chat-alpha",
            &["generateContent"],
            Some("test"),
        )]);
        let (output, ids) = render(&source).await;
        let expected = format!(
            "{HEADER}\n{s}\nID: chat-alpha\n説明: test\n{s}\n\n合計 1 個のモデルが見つかりました。\n\nモデルID一覧:\n  - chat-alpha\n",
            s = sep()
        );
        assert_eq!(output, expected);
        assert_eq!(ids, vec!["chat-alpha".to_string()]);
        assert_eq!(source.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_zero_models_report() {
        let source = StaticSource::new(Vec::new());
        let (output, ids) = render(&source).await;
        let expected = format!(
            "{HEADER}\n{}\n\n合計 0 個のモデルが見つかりました。\n\nモデルID一覧:\n",
            sep()
        );
        assert_eq!(output, expected);
        assert!(ids.is_empty());
    }

    #[tokio::test]
    async fn test_filters_and_preserves_order() {
        let source = StaticSource::new(vec![
            model("models/gemini-2.0-flash", &["generateContent", "countTokens"], None),
            model("models/text-embedding-004", &["embedContent"], Some("Embeddings")),
            model("aqa", &["generateAnswer"], None),
            model("gemini-exp", &["generateContent"], Some("")),
            model("models/gemma-3", &["countTokens", "generateContent"], Some("Open")),
        ]);
        let (output, ids) = render(&source).await;
        assert_eq!(
            ids,
            vec![
                "gemini-2.0-flash".to_string(),
                "gemini-exp".to_string(),
                "gemma-3".to_string()
            ]
        );
        assert!(!output.contains("text-embedding-004"));
        assert!(!output.contains("Embeddings"));
        assert!(!output.contains("aqa"));
        assert!(output.contains("合計 3 個のモデルが見つかりました。"));
        assert!(output.ends_with("  - gemini-2.0-flash\n  - gemini-exp\n  - gemma-3\n"));
        assert_eq!(output.matches("説明: ").count(), 1);
        assert!(output.contains(&format!("ID: gemini-exp\n{}\n", sep())));
    }

    #[tokio::test]
    async fn test_listing_failure_propagates_without_summary() {
        let mut out = Vec::new();
        let err = report_generation_models(&FailingSource, &mut out)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ApiError { status: 403, .. }));
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output, format!("{HEADER}\n{}\n", sep()));
    }

    #[test]
    fn test_record_missing_name_and_methods() {
        let mut reporter = Reporter::new(Vec::new());
        assert!(!reporter.record(&Model::default()).unwrap());
        let nameless = Model {
            supported_generation_methods: Some(vec!["generateContent".into()]),
            ..Default::default()
        };
        assert!(reporter.record(&nameless).unwrap());
        assert_eq!(reporter.found(), &[String::new()]);
    }
}
