//! Error handling utilities for the CLI.

use std::process::ExitCode;

use intvm::{Error, RenderConfig, render_error_to};

/// Where a failing program or source came from.
#[derive(Debug, Clone, Copy)]
pub struct Origin<'a> {
    pub display_name: &'a str,
    pub program: Option<&'a [i32]>,
    pub source: Option<&'a str>,
}

/// Render an error to stderr and return the failure exit code.
pub fn report(error: impl Into<Error>, origin: Origin<'_>, no_color: bool) -> ExitCode {
    let config = RenderConfig {
        color: !no_color,
        filename: Some(origin.display_name),
        program: origin.program,
        source: origin.source,
        ..Default::default()
    };
    render_error_to(&error.into(), &mut std::io::stderr(), &config).ok();
    ExitCode::FAILURE
}

/// Print an input/output failure to stderr and return the failure exit code.
pub fn report_io(message: &str) -> ExitCode {
    eprintln!("error: {}", message);
    ExitCode::FAILURE
}
