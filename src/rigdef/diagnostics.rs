//! Diagnostics collected while resolving a document
//!
//! Resolution never aborts. Every problem it finds becomes a [`Message`]
//! tagged with the module and section keyword being processed, and the
//! caller decides what to do by looking at the counters afterwards.
//!
//! Messages are also mirrored to `tracing` at the matching level.

use crate::rigdef::ast::Keyword;
use serde::Serialize;
use std::fmt;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Non-actionable notice
    Info,
    /// Legacy quirk that was tolerated
    Warning,
    /// A reference or registration failed
    Error,
    /// Never raised by the resolver; reserved for callers whose upstream stage failed
    Fatal,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub text: String,
    pub severity: Severity,
    pub keyword: Option<Keyword>,
    pub module_name: String,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.severity)?;
        match (self.module_name.is_empty(), self.keyword) {
            (false, Some(keyword)) => write!(f, "{}/{}: ", self.module_name, keyword)?,
            (false, None) => write!(f, "{}: ", self.module_name)?,
            (true, Some(keyword)) => write!(f, "{keyword}: ")?,
            (true, None) => {}
        }
        f.write_str(&self.text)
    }
}

/// Append-only message log with running counters
///
/// Info and fatal messages share the "other" counter.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    messages: Vec<Message>,
    num_errors: usize,
    num_warnings: usize,
    num_other: usize,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(
        &mut self,
        severity: Severity,
        keyword: Option<Keyword>,
        module_name: &str,
        text: impl Into<String>,
    ) {
        let text = text.into();
        let section = keyword.map(Keyword::as_str).unwrap_or("-");
        match severity {
            Severity::Info => {
                self.num_other += 1;
                tracing::info!(module = module_name, keyword = section, "{text}");
            }
            Severity::Warning => {
                self.num_warnings += 1;
                tracing::warn!(module = module_name, keyword = section, "{text}");
            }
            Severity::Error => {
                self.num_errors += 1;
                tracing::error!(module = module_name, keyword = section, "{text}");
            }
            Severity::Fatal => {
                self.num_other += 1;
                tracing::error!(module = module_name, keyword = section, fatal = true, "{text}");
            }
        }
        self.messages.push(Message {
            text,
            severity,
            keyword,
            module_name: module_name.to_string(),
        });
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn error_count(&self) -> usize {
        self.num_errors
    }

    pub fn warning_count(&self) -> usize {
        self.num_warnings
    }

    pub fn other_count(&self) -> usize {
        self.num_other
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Human-readable report, one message per line
    pub fn format_report(&self) -> String {
        let mut report = String::new();
        for message in &self.messages {
            // Writing to a String cannot fail
            let _ = writeln!(report, "{message}");
        }
        report
    }

    /// One-line summary of the counters
    pub fn summary(&self) -> String {
        format!(
            "{} error(s), {} warning(s), {} other",
            self.num_errors, self.num_warnings, self.num_other
        )
    }
}
