//! Miette diagnostics for configuration files.
//!
//! Renders a TOML parse error with the offending span of the file and a
//! help line, instead of a bare one-line message.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(surebet::config))]
pub struct ConfigDiagnostic {
    /// Human-readable error message.
    pub message: String,

    /// Configuration file content.
    #[source_code]
    pub src: String,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text with suggestions for fixing the error.
    #[help]
    pub help: Option<String>,
}

impl ConfigDiagnostic {
    /// Create a new configuration diagnostic pointing at `offset..offset + len`.
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: impl Into<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src: src.into(),
            span: (offset, len).into(),
            help: None,
        }
    }

    /// Build a diagnostic from a TOML parse error over `src`.
    #[must_use]
    pub fn from_toml(err: &toml::de::Error, src: &str) -> Self {
        let (offset, len) = err
            .span()
            .map(|span| (span.start, span.len().max(1)))
            .unwrap_or((0, 0));

        Self::new(err.message().to_string(), src, offset, len)
            .with_help("see config.toml.example for the accepted keys and value types")
    }

    /// Add a help suggestion to the diagnostic.
    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render the diagnostic with miette's graphical handler.
    pub fn render(self) -> String {
        format!("{:?}", miette::Report::new(self))
    }
}
