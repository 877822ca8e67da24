use std::io::{self, Write};
use std::process::ExitCode;

use gemini_models::credentials::{self, API_KEY_VAR};
use gemini_models::report::report_generation_models;
use gemini_models::{telemetry, Client, Error, Result};
use tracing::warn;

async fn run(api_key: String) -> Result<Vec<String>> {
    let client = Client::builder()
        .api_key(api_key)
        .env_overrides(credentials::env_snapshot())
        .build()?;
    let stdout = io::stdout();
    report_generation_models(&client.models(), stdout.lock()).await
}

/// 写出缺失凭据的诊断信息。
fn write_missing_credential(out: &mut impl Write, err: &Error) -> io::Result<()> {
    let related: &[String] = match err {
        Error::MissingCredential { related, .. } => related.as_slice(),
        _ => &[],
    };
    writeln!(out, "{}", credentials::related_vars_line(related))?;
    writeln!(out, "Error: {err}")?;
    out.flush()
}

/// stdout 已被关闭（如管道读端退出）时静默忽略，其余写入失败记录告警。
fn ignore_broken_pipe(result: io::Result<()>) {
    match result {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {}
        Err(err) => warn!(error = %err, "failed to write to stdout"),
        Ok(()) => {}
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    let api_key = match credentials::load_api_key(credentials::env_snapshot(), API_KEY_VAR) {
        Ok(key) => key,
        Err(err) => {
            ignore_broken_pipe(write_missing_credential(&mut io::stdout().lock(), &err));
            return ExitCode::FAILURE;
        }
    };

    match run(api_key).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            ignore_broken_pipe(io::stdout().lock().flush());
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
