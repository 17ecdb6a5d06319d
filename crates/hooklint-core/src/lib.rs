// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Hooklint core.
//!
//! This crate contains the detection logic for the fixture-lifecycle
//! delegation check:
//! - Syntax node and method descriptions (supplied by an external parser)
//! - Class hierarchy descriptions (supplied by an external type resolver)
//! - The lint check itself (applicability filter + delegating-call scanner)
//! - An optional presentation adapter for rendering findings
//!
//! The crate is a library embedded in a larger analysis driver; it performs
//! no I/O and defines no command-line surface of its own.

#![doc = include_str!("../../../README.md")]

pub mod ast;
pub mod diagnostic;
pub mod hierarchy;
pub mod lint;
pub mod report;

/// Re-export commonly used types.
pub mod prelude {
    pub use crate::ast::{Expression, Identifier, MethodDescriptor, Span, Statement};
    pub use crate::diagnostic::{Diagnostic, DiagnosticSink, Severity};
    pub use crate::hierarchy::{ClassDescriptor, ClassResolver};
    pub use crate::lint::check_method;
}
