// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Rendering findings with miette.
//!
//! **DDD Context:** Reporting
//!
//! The core emits location-free [`Diagnostic`] values; location attribution
//! belongs to the driver that supplied the syntax nodes. This module is the
//! ready-made way for a driver to attach that location: combine a finding
//! with the method's [`Span`] and the source text it indexes into, and get a
//! [`RenderedFinding`] that miette formats with source context, an arrow at
//! the offending method, and a fix hint.

use crate::ast::Span;
use crate::diagnostic::{Diagnostic, Severity};
use miette::SourceSpan;

/// A finding bound to its source location, ready for display.
#[derive(Debug, miette::Diagnostic, thiserror::Error)]
#[error("{message}")]
#[diagnostic(code(hooklint::lint))]
pub struct RenderedFinding {
    /// Severity of the underlying diagnostic.
    pub severity: Severity,
    /// The finding message.
    pub message: String,
    /// Source text for context.
    #[source_code]
    pub src: miette::NamedSource<String>,
    /// Location of the flagged method within `src`.
    #[label("{label}")]
    pub span: SourceSpan,
    /// Label under the arrow (interpolated by the miette derive).
    pub label: String,
    /// Optional fix hint.
    #[help]
    pub help: Option<String>,
}

impl RenderedFinding {
    /// Binds a core diagnostic to a location in named source text.
    ///
    /// `span` is the location the driver attributes the finding to,
    /// typically the method declaration's span.
    #[must_use]
    pub fn new(diagnostic: &Diagnostic, span: Span, source_name: &str, source: &str) -> Self {
        let label = match diagnostic.severity {
            Severity::Error => "error here",
            Severity::Warning => "warning here",
            Severity::Lint => "flagged method",
        };

        Self {
            severity: diagnostic.severity,
            message: diagnostic.message.to_string(),
            src: miette::NamedSource::new(source_name, source.to_string()),
            span: span.into(),
            label: label.to_string(),
            help: diagnostic.hint.as_ref().map(ToString::to_string),
        }
    }
}
