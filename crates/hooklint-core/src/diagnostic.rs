// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Diagnostic values produced by the check.
//!
//! **DDD Context:** Reporting
//!
//! A [`Diagnostic`] is the only output the check produces: a human-readable
//! message, a severity, and an optional fix hint. It deliberately carries no
//! location metadata — the driver that supplied the syntax nodes knows where
//! they came from and owns file/line attribution, formatting, aggregation,
//! and exit-code policy. [`crate::report`] shows how a driver attaches a
//! location when rendering.
//!
//! Sinks receive zero or one diagnostic per method check through
//! [`DiagnosticSink`]; `Vec<Diagnostic>` is the ready-made accumulating
//! sink.

use ecow::EcoString;

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// An error that should fail the surrounding analysis.
    Error,
    /// A warning that should be addressed.
    Warning,
    /// A style/contract lint finding.
    Lint,
}

/// A diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The severity of the diagnostic.
    pub severity: Severity,
    /// The finding message.
    pub message: EcoString,
    /// Optional hint for how to fix the issue.
    pub hint: Option<EcoString>,
}

impl Diagnostic {
    /// Creates a new error diagnostic.
    #[must_use]
    pub fn error(message: impl Into<EcoString>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            hint: None,
        }
    }

    /// Creates a new warning diagnostic.
    #[must_use]
    pub fn warning(message: impl Into<EcoString>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            hint: None,
        }
    }

    /// Creates a new lint diagnostic.
    #[must_use]
    pub fn lint(message: impl Into<EcoString>) -> Self {
        Self {
            severity: Severity::Lint,
            message: message.into(),
            hint: None,
        }
    }

    /// Attaches a fix hint.
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<EcoString>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Receiver for diagnostics produced by a check.
///
/// The check reports at most one diagnostic per method; a sink may be handed
/// to many checks in sequence and is responsible for everything downstream
/// of the message text.
pub trait DiagnosticSink {
    /// Accept one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
