//! Stdout contract shared by both binaries.
//!
//! Each run prints exactly one JSON value: the result on success, or an
//! `{"error": "..."}` object on failure together with exit status 1.

use std::process::ExitCode;

use clap::error::ErrorKind;
use serde::Serialize;
use tracing::error;

#[derive(Debug, Serialize)]
struct ErrorPayload<'a> {
    error: &'a str,
}

/// Render the error object printed on failure.
pub fn error_json(message: &str) -> String {
    serde_json::to_string(&ErrorPayload { error: message })
        .unwrap_or_else(|_| r#"{"error":"unprintable error"}"#.to_string())
}

/// Print `value` as the run's result.
pub fn emit<T: Serialize>(value: &T) -> ExitCode {
    match serde_json::to_string(value) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err.into()),
    }
}

/// Print the error object for `err` and report failure.
pub fn fail(err: &anyhow::Error) -> ExitCode {
    report(&format!("{err:#}"))
}

/// Handle a command-line parse failure. Help and version output keep clap's
/// own formatting; anything else becomes an error object.
pub fn usage_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            let rendered = err.render().to_string();
            let first_line = rendered.lines().next().unwrap_or_default();
            report(first_line.trim_start_matches("error: ").trim())
        }
    }
}

fn report(message: &str) -> ExitCode {
    error!(error = %message, "run failed");
    println!("{}", error_json(message));
    ExitCode::FAILURE
}
