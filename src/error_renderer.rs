//! Error rendering using ariadne
//!
//! Execution errors are shown against a disassembly of the failing program,
//! with the faulting instruction labelled. Assembly errors point at the
//! offending line of the assembly source.

use core::ops::Range;
use std::io::Write;

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use intvm_core::assembler::AssemblyError;
use intvm_core::vm::Listing;

use crate::{Error, ExecutionError, Opcode};

/// Character set for rendering error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Use Unicode characters for rich visual output.
    #[default]
    Unicode,
    /// Use ASCII-only characters for compatibility.
    Ascii,
}

/// Configuration for error rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig<'a> {
    /// Whether to use ANSI color codes in output.
    pub color: bool,
    /// The filename to display in error messages.
    /// Defaults to "<unknown>" if not provided.
    pub filename: Option<&'a str>,
    /// The character set to use for rendering.
    pub charset: CharSet,
    /// Words of the program an execution error came from.
    /// Without it, execution errors are rendered as a single line.
    pub program: Option<&'a [i32]>,
    /// Assembly source an assembly error came from.
    pub source: Option<&'a str>,
}

impl Default for RenderConfig<'_> {
    fn default() -> Self {
        RenderConfig::default()
    }
}

impl RenderConfig<'_> {
    const fn default() -> Self {
        Self {
            color: true,
            filename: None,
            charset: CharSet::Unicode,
            program: None,
            source: None,
        }
    }
}

/// Everything a report shows besides the source.
struct Diagnostic {
    code: &'static str,
    message: String,
    label: String,
    help: Option<String>,
}

/// Render an error to stderr using default config.
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr(), &RenderConfig::default()).ok();
}

/// Render an error to a writer with the given configuration.
///
/// This is the main rendering function. Use this when you need control over
/// the output destination or rendering options.
///
/// # Example
/// ```
/// use intvm::{execute, render_error_to, Error, RenderConfig};
///
/// let code = [0, 1, 2];
/// let err: Error = execute(&code).unwrap_err().into();
///
/// let mut buf = Vec::new();
/// let config = RenderConfig { color: false, program: Some(&code), ..Default::default() };
/// render_error_to(&err, &mut buf, &config).unwrap();
/// let output = String::from_utf8_lossy(&buf);
/// assert!(output.contains("0002  ADD"));
/// ```
pub fn render_error_to(
    error: &Error,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    match (error, config.program, config.source) {
        (Error::Execution(e), Some(words), _) => {
            let listing = Listing::new(words);
            let span = listing
                .span_of(e.position())
                .or_else(|| listing.last_span());
            match span {
                Some(span) => {
                    render_report(listing.text(), span, execution_diagnostic(e), writer, config)
                }
                None => render_plain(error, writer),
            }
        }
        (Error::Assembly(e), _, Some(source)) => match line_span(source, e.line()) {
            Some(span) => render_report(source, span, assembly_diagnostic(e), writer, config),
            None => render_plain(error, writer),
        },
        _ => render_plain(error, writer),
    }
}

fn render_plain(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    writeln!(writer, "Error: {}", error)
}

fn render_report(
    source: &str,
    span: Range<usize>,
    diagnostic: Diagnostic,
    writer: &mut dyn Write,
    config: &RenderConfig,
) -> std::io::Result<()> {
    let filename = config.filename.unwrap_or("<unknown>");

    let mut colors = ColorGenerator::new();
    colors.next(); // Skip the first color.

    let ariadne_charset = match config.charset {
        CharSet::Unicode => ariadne::CharSet::Unicode,
        CharSet::Ascii => ariadne::CharSet::Ascii,
    };
    let ariadne_config = ariadne::Config::default()
        .with_color(config.color)
        .with_char_set(ariadne_charset);

    let mut report = Report::build(ReportKind::Error, (filename, span.clone()))
        .with_code(diagnostic.code)
        .with_message(&diagnostic.message)
        .with_config(ariadne_config)
        .with_label(
            Label::new((filename, span))
                .with_message(&diagnostic.label)
                .with_color(colors.next()),
        );

    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    }

    report
        .finish()
        .write((filename, Source::from(source)), &mut *writer)
}

fn execution_diagnostic(error: &ExecutionError) -> Diagnostic {
    let (code, help) = match error {
        ExecutionError::IllegalInstruction { .. } => (
            "V001",
            Some(format!(
                "Valid opcodes are 0 ({}) through 6 ({})",
                Opcode::Const,
                Opcode::Swap
            )),
        ),
        ExecutionError::MissingOperand { .. } => ("V002", None),
        ExecutionError::StackOverflow { capacity, .. } => (
            "V003",
            Some(format!("The stack holds at most {} values", capacity)),
        ),
        ExecutionError::StackUnderflow { .. } => ("V004", None),
        ExecutionError::NegativeOffset { .. } => (
            "V005",
            Some("VAR counts down from the top of the stack, starting at 0".to_string()),
        ),
    };
    Diagnostic {
        code,
        message: error.to_string(),
        label: error.label().to_string(),
        help,
    }
}

fn assembly_diagnostic(error: &AssemblyError) -> Diagnostic {
    let (code, label) = match error {
        AssemblyError::UnknownMnemonic { .. } => ("A001", "unknown mnemonic"),
        AssemblyError::MissingOperand { .. } => ("A002", "operand missing"),
        AssemblyError::UnexpectedOperand { .. } => ("A003", "unexpected operand"),
        AssemblyError::InvalidOperand { .. } => ("A004", "invalid operand"),
    };
    Diagnostic {
        code,
        message: error.to_string(),
        label: label.to_string(),
        help: None,
    }
}

/// Character range of the 1-based `line` of `source`, without its line break.
fn line_span(source: &str, line: usize) -> Option<Range<usize>> {
    let mut offset = 0;
    for (index, text) in source.split_inclusive('\n').enumerate() {
        let len = text.trim_end_matches(['\n', '\r']).chars().count();
        if index + 1 == line {
            return Some(offset..offset + len);
        }
        offset += text.chars().count();
    }
    None
}
