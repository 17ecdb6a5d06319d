// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! The fixture-lifecycle delegation check.
//!
//! **DDD Context:** Lint
//!
//! This module wires the two pure decision functions from
//! [`missing_parent_call`] — the applicability filter and the
//! delegating-call scanner — into the per-method entry point the analysis
//! driver invokes. There is no rule registry: the driver calls
//! [`check_method`] once per visited method declaration and passes the
//! collaborators in explicitly. Checks hold no state, so any number of them
//! may run concurrently over different methods.

pub mod missing_parent_call;


use crate::ast::MethodDescriptor;
use crate::diagnostic::{Diagnostic, DiagnosticSink};
use crate::hierarchy::ClassResolver;
use tracing::{debug, trace};

/// Checks one method declaration for a missing parent hook delegation.
///
/// Resolves the enclosing class through `resolver`, decides applicability,
/// scans the top-level body statements, and reports at most one lint
/// diagnostic into `sink`. Unresolved or inapplicable inputs suppress the
/// check entirely; this is a best-effort lint and never fails.
///
/// The diagnostic message preserves the method name exactly as written,
/// while all matching is case-insensitive.
pub fn check_method(
    resolver: &dyn ClassResolver,
    method: &MethodDescriptor,
    sink: &mut dyn DiagnosticSink,
) {
    let class = resolver.enclosing_class();
    if !missing_parent_call::applies_to(class, &method.name) {
        trace!(method = %method.name, "delegation contract not applicable");
        return;
    }

    let lowered = method.name.to_ascii_lowercase();
    if missing_parent_call::has_parent_call(method.body.as_deref(), &lowered) {
        return;
    }

    debug!(method = %method.name, "missing parent hook delegation");
    sink.report(
        Diagnostic::lint(format!("Missing call to parent::{}() method.", method.name)).with_hint(
            format!(
                "Call `parent.{}()` from the top level of the method body",
                method.name
            ),
        ),
    );
}
