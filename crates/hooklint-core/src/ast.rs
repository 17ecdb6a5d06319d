// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Syntax node descriptions consumed by the lint check.
//!
//! **DDD Context:** Syntax
//!
//! Hooklint does not parse source text. The surrounding analysis driver owns
//! a full parser and hands this crate a pre-built description of the one
//! method currently being visited: its written name and, when the
//! declaration has a body, its top-level statement list.
//!
//! # Design Philosophy
//!
//! The node set is deliberately closed and small. The delegating-call
//! scanner recognises exactly one statement shape — a bare expression
//! statement wrapping a call on a literal name reference — and treats every
//! other shape as non-matching without inspecting it further. Nested bodies
//! (`If`, `While`, `Try`, `Closure`) are represented so that drivers can
//! describe them faithfully, but the scanner never descends into them.
//!
//! Every node carries a [`Span`] into the driver's source text. The check
//! itself never reads spans; they exist so the driver can attribute any
//! finding to a location (see [`crate::report`]).
//!
//! # Example
//!
//! ```
//! use hooklint_core::ast::{Expression, Identifier, Span, Statement};
//!
//! // parent.setUp();
//! let span = Span::new(0, 15);
//! let statement = Statement::Expression {
//!     expression: Expression::Call {
//!         target: Box::new(Expression::NameReference(Identifier::new("parent", span))),
//!         method: Identifier::new("setUp", span),
//!         arguments: Vec::new(),
//!         span,
//!     },
//!     span,
//! };
//! assert_eq!(statement.span(), span);
//! ```

use ecow::EcoString;
use std::ops::Range;

/// A span of source code, as a byte offset range into the driver's source.
///
/// Spans travel with every syntax node so the driver can attribute findings
/// to locations. The core check never interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    start: u32,
    end: u32,
}

impl Span {
    /// Creates a new span from start and end byte offsets.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns the start byte offset.
    #[must_use]
    pub const fn start(self) -> u32 {
        self.start
    }

    /// Returns the end byte offset (exclusive).
    #[must_use]
    pub const fn end(self) -> u32 {
        self.end
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Converts to a `Range<usize>` for indexing into source text.
    #[must_use]
    pub const fn as_range(self) -> Range<usize> {
        self.start as usize..self.end as usize
    }
}

impl From<Span> for miette::SourceSpan {
    fn from(span: Span) -> Self {
        (span.start as usize, span.len() as usize).into()
    }
}

/// A name as written in source, case-preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The name of the identifier.
    pub name: EcoString,
    /// Source location.
    pub span: Span,
}

impl Identifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// An expression shape the check can encounter.
///
/// Only [`Expression::Call`] on an [`Expression::NameReference`] target is
/// ever matched; the remaining variants exist so drivers can describe real
/// method bodies without lying about their contents.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// A call on a target expression: `target.method(arguments)`.
    Call {
        /// The expression the call is directed at.
        target: Box<Expression>,
        /// The called member name, case-preserved.
        method: Identifier,
        /// Argument expressions. Never inspected by the scanner.
        arguments: Vec<Expression>,
        /// Source location of the entire call.
        span: Span,
    },

    /// A bare name reference: a variable, a class name, or a reserved
    /// identifier such as the ancestor keyword `parent`.
    NameReference(Identifier),

    /// A closure/lambda literal. Statements inside are never scanned.
    Closure {
        /// The closure body.
        body: Vec<Statement>,
        /// Source location including delimiters.
        span: Span,
    },

    /// Any expression shape the check does not model.
    Other {
        /// Source location of the expression.
        span: Span,
    },
}

impl Expression {
    /// Returns the span of this expression.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Call { span, .. } | Self::Closure { span, .. } | Self::Other { span } => *span,
            Self::NameReference(id) => id.span,
        }
    }
}

/// A top-level statement shape the check can encounter.
///
/// The scanner recognises [`Statement::Expression`] and nothing else.
/// Branch and loop bodies are carried but never descended into: a
/// delegating call inside an `if` does not satisfy the contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A bare expression in statement position.
    Expression {
        /// The wrapped expression.
        expression: Expression,
        /// Source location of the statement.
        span: Span,
    },

    /// A conditional with nested branch bodies.
    If {
        /// The condition expression.
        condition: Expression,
        /// Statements in the then-branch.
        then_branch: Vec<Statement>,
        /// Statements in the else-branch (empty when absent).
        else_branch: Vec<Statement>,
        /// Source location of the entire conditional.
        span: Span,
    },

    /// A loop with a nested body.
    While {
        /// The loop condition.
        condition: Expression,
        /// Statements in the loop body.
        body: Vec<Statement>,
        /// Source location of the entire loop.
        span: Span,
    },

    /// A protected region with handler and cleanup bodies.
    Try {
        /// Statements in the protected body.
        body: Vec<Statement>,
        /// Statements in the handler.
        handler: Vec<Statement>,
        /// Statements in the cleanup block (empty when absent).
        cleanup: Vec<Statement>,
        /// Source location of the entire region.
        span: Span,
    },

    /// A return statement.
    Return {
        /// The returned value, when present.
        value: Option<Expression>,
        /// Source location of the statement.
        span: Span,
    },

    /// Any statement shape the check does not model.
    Other {
        /// Source location of the statement.
        span: Span,
    },
}

impl Statement {
    /// Returns the span of this statement.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Expression { span, .. }
            | Self::If { span, .. }
            | Self::While { span, .. }
            | Self::Try { span, .. }
            | Self::Return { span, .. }
            | Self::Other { span } => *span,
        }
    }
}

/// The method currently under inspection.
///
/// Supplied by the driver's syntax source once per visited method
/// declaration. `body` is `None` for abstract or interface declarations,
/// which have no statements to scan.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDescriptor {
    /// The method name as written, case-preserved.
    pub name: EcoString,
    /// Top-level body statements, absent for bodyless declarations.
    pub body: Option<Vec<Statement>>,
    /// Source location of the declaration.
    pub span: Span,
}

impl MethodDescriptor {
    /// Creates a new method descriptor.
    #[must_use]
    pub fn new(name: impl Into<EcoString>, body: Option<Vec<Statement>>, span: Span) -> Self {
        Self {
            name: name.into(),
            body,
            span,
        }
    }
}
