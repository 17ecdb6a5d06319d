// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Lint: overridden fixture lifecycle hooks must delegate to the parent hook.
//!
//! When a subclass of a fixture base class overrides `setUp` or `tearDown`
//! without calling the parent's hook, fixture state silently stops being
//! initialised and torn down along the inheritance chain.
//!
//! ```text
//! // Bad — parent fixture never set up
//! class DatabaseTest extends IntegrationTest {
//!     setUp() { this.db = openDb(); }
//! }
//!
//! // Good — chain preserved
//! class DatabaseTest extends IntegrationTest {
//!     setUp() { parent.setUp(); this.db = openDb(); }
//! }
//! ```
//!
//! Only the top-level statements of the method body are scanned. A
//! delegating call nested inside a conditional, loop, try-block, or closure
//! does not count: whether it runs depends on control flow, and the original
//! contract deliberately refuses to reason about that. Loosening the scan
//! would change which code is flagged, so the restriction is kept as is.

use crate::ast::{Expression, Statement};
use crate::hierarchy::ClassDescriptor;

/// The reserved identifier denoting the immediate superclass.
///
/// Matched case-insensitively against the target of a delegating call. This
/// is a fixed keyword of the checked language, never resolved symbolically.
pub const PARENT_KEYWORD: &str = "parent";

/// Lifecycle hook names subject to the delegation contract, lower-cased.
pub const LIFECYCLE_HOOKS: &[&str] = &["setup", "teardown"];

/// Decides whether the delegation contract applies to a method at all.
///
/// Not applicable when any of the following holds, checked in order:
/// the enclosing class could not be resolved; the class is outside the
/// fixture family; the class has no parent to delegate to; the parent is the
/// fixture root itself (its hook implementation is the base case); or the
/// method name is not a recognised lifecycle hook (case-insensitively).
///
/// Pure and total: every input yields a definite boolean.
#[must_use]
pub fn applies_to(class: Option<&ClassDescriptor>, method_name: &str) -> bool {
    let Some(class) = class else {
        return false;
    };
    if !class.in_fixture_family {
        return false;
    }
    let Some(parent) = class.parent.as_deref() else {
        return false;
    };
    if parent.is_fixture_root {
        return false;
    }
    LIFECYCLE_HOOKS
        .iter()
        .any(|hook| method_name.eq_ignore_ascii_case(hook))
}

/// Scans a method body for a top-level `parent.<method_name>(...)` call.
///
/// `method_name` must already be lower-cased by the caller. Returns `false`
/// for bodyless methods: an abstract declaration cannot delegate. The scan
/// stops on the first match; argument lists are never inspected, so a
/// delegating call with any arguments satisfies the contract.
#[must_use]
pub fn has_parent_call(statements: Option<&[Statement]>, method_name: &str) -> bool {
    let Some(statements) = statements else {
        return false;
    };
    statements
        .iter()
        .any(|statement| is_delegating_call(statement, method_name))
}

/// Matches the one recognised statement shape: a bare expression statement
/// wrapping a call of `method_name` directed at the literal [`PARENT_KEYWORD`]
/// name. Every other shape fails to match without further inspection.
fn is_delegating_call(statement: &Statement, method_name: &str) -> bool {
    let Statement::Expression { expression, .. } = statement else {
        return false;
    };
    let Expression::Call { target, method, .. } = expression else {
        return false;
    };
    let Expression::NameReference(name) = target.as_ref() else {
        return false;
    };
    name.name.eq_ignore_ascii_case(PARENT_KEYWORD) && method.name.eq_ignore_ascii_case(method_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Identifier, Span};

    fn test_span() -> Span {
        Span::new(0, 10)
    }

    /// `B extends A extends TestCase` — the shape the contract targets.
    fn grandchild_of_root() -> ClassDescriptor {
        ClassDescriptor::fixture("B").with_parent(
            ClassDescriptor::fixture("A").with_parent(ClassDescriptor::fixture_root("TestCase")),
        )
    }

    fn call(target_name: &str, method_name: &str) -> Statement {
        Statement::Expression {
            expression: Expression::Call {
                target: Box::new(Expression::NameReference(Identifier::new(
                    target_name,
                    test_span(),
                ))),
                method: Identifier::new(method_name, test_span()),
                arguments: Vec::new(),
                span: test_span(),
            },
            span: test_span(),
        }
    }

    // ── Applicability filter ─────────────────────────────────────────────

    #[test]
    fn unresolved_class_not_applicable() {
        assert!(!applies_to(None, "setUp"));
    }

    #[test]
    fn class_outside_fixture_family_not_applicable() {
        let class = ClassDescriptor::new("Helper")
            .with_parent(ClassDescriptor::new("Base"));
        assert!(!applies_to(Some(&class), "setUp"));
    }

    #[test]
    fn class_without_parent_not_applicable() {
        let class = ClassDescriptor::fixture("Orphan");
        assert!(!applies_to(Some(&class), "setUp"));
    }

    #[test]
    fn direct_child_of_fixture_root_not_applicable() {
        // A extends TestCase — the root's own hook is the base case.
        let class = ClassDescriptor::fixture("A")
            .with_parent(ClassDescriptor::fixture_root("TestCase"));
        assert!(!applies_to(Some(&class), "setUp"));
    }

    #[test]
    fn non_hook_method_not_applicable() {
        let class = grandchild_of_root();
        assert!(!applies_to(Some(&class), "helperMethod"));
        assert!(!applies_to(Some(&class), "setUpFixtures"));
        assert!(!applies_to(Some(&class), ""));
    }

    #[test]
    fn hook_methods_applicable_case_insensitively() {
        let class = grandchild_of_root();
        assert!(applies_to(Some(&class), "setUp"));
        assert!(applies_to(Some(&class), "setup"));
        assert!(applies_to(Some(&class), "SETUP"));
        assert!(applies_to(Some(&class), "tearDown"));
        assert!(applies_to(Some(&class), "TearDown"));
    }

    // ── Delegating-call scanner ──────────────────────────────────────────

    #[test]
    fn bodyless_method_has_no_call() {
        assert!(!has_parent_call(None, "setup"));
    }

    #[test]
    fn empty_body_has_no_call() {
        assert!(!has_parent_call(Some(&[]), "setup"));
    }

    #[test]
    fn direct_parent_call_matches() {
        let body = [call("parent", "setUp")];
        assert!(has_parent_call(Some(&body), "setup"));
    }

    #[test]
    fn parent_keyword_matches_case_insensitively() {
        let body = [call("Parent", "SETUP")];
        assert!(has_parent_call(Some(&body), "setup"));
    }

    #[test]
    fn call_on_other_target_does_not_match() {
        let body = [call("self", "setUp"), call("logger", "setUp")];
        assert!(!has_parent_call(Some(&body), "setup"));
    }

    #[test]
    fn call_of_other_method_does_not_match() {
        let body = [call("parent", "tearDown")];
        assert!(!has_parent_call(Some(&body), "setup"));
    }

    #[test]
    fn arguments_are_not_inspected() {
        let body = [Statement::Expression {
            expression: Expression::Call {
                target: Box::new(Expression::NameReference(Identifier::new(
                    "parent",
                    test_span(),
                ))),
                method: Identifier::new("setUp", test_span()),
                arguments: vec![Expression::Other { span: test_span() }],
                span: test_span(),
            },
            span: test_span(),
        }];
        assert!(has_parent_call(Some(&body), "setup"));
    }

    #[test]
    fn call_behind_computed_target_does_not_match() {
        // (factory()).setUp() — the target is not a literal name reference.
        let body = [Statement::Expression {
            expression: Expression::Call {
                target: Box::new(Expression::Other { span: test_span() }),
                method: Identifier::new("setUp", test_span()),
                arguments: Vec::new(),
                span: test_span(),
            },
            span: test_span(),
        }];
        assert!(!has_parent_call(Some(&body), "setup"));
    }

    #[test]
    fn call_nested_in_conditional_does_not_match() {
        let body = [Statement::If {
            condition: Expression::NameReference(Identifier::new("cond", test_span())),
            then_branch: vec![call("parent", "setUp")],
            else_branch: Vec::new(),
            span: test_span(),
        }];
        assert!(!has_parent_call(Some(&body), "setup"));
    }

    #[test]
    fn call_nested_in_loop_or_try_does_not_match() {
        let in_loop = [Statement::While {
            condition: Expression::Other { span: test_span() },
            body: vec![call("parent", "setUp")],
            span: test_span(),
        }];
        let in_try = [Statement::Try {
            body: vec![call("parent", "setUp")],
            handler: Vec::new(),
            cleanup: Vec::new(),
            span: test_span(),
        }];
        assert!(!has_parent_call(Some(&in_loop), "setup"));
        assert!(!has_parent_call(Some(&in_try), "setup"));
    }

    #[test]
    fn call_nested_in_closure_does_not_match() {
        let body = [Statement::Expression {
            expression: Expression::Closure {
                body: vec![call("parent", "setUp")],
                span: test_span(),
            },
            span: test_span(),
        }];
        assert!(!has_parent_call(Some(&body), "setup"));
    }

    #[test]
    fn match_found_after_other_statements() {
        let body = [
            Statement::Other { span: test_span() },
            Statement::Return {
                value: None,
                span: test_span(),
            },
            call("parent", "tearDown"),
        ];
        assert!(has_parent_call(Some(&body), "teardown"));
    }
}
