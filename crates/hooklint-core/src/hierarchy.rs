// Copyright 2026 James Casey
// SPDX-License-Identifier: Apache-2.0

//! Class hierarchy descriptions consumed by the lint check.
//!
//! **DDD Context:** Semantic Analysis
//!
//! Hooklint does not resolve symbols. The surrounding driver owns a type
//! resolver with full knowledge of the program's class hierarchy and hands
//! this crate a [`ClassDescriptor`] for the class enclosing the method under
//! inspection: its position in the designated fixture family and its
//! immediate parent link.
//!
//! Fixture-family membership is a capability flag rather than a framework
//! class name, so the check works against any test framework whose fixture
//! base class the resolver can recognise.

use ecow::EcoString;

/// Identity of a class under inspection.
///
/// **DDD Context:** Semantic Analysis — Value Object
///
/// Supplied by the external resolver and read-only for the duration of one
/// check. The `parent` chain is finite and acyclic, and `is_fixture_root` is
/// true for exactly one class in any chain — both guaranteed by the external
/// type system, not re-validated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Class name.
    pub name: EcoString,
    /// Whether this class or an ancestor is the designated fixture base type.
    pub in_fixture_family: bool,
    /// Whether this class is the designated fixture base type itself.
    pub is_fixture_root: bool,
    /// The immediate superclass, absent for root classes.
    pub parent: Option<Box<ClassDescriptor>>,
}

impl ClassDescriptor {
    /// Creates a descriptor for a class outside the fixture family.
    #[must_use]
    pub fn new(name: impl Into<EcoString>) -> Self {
        Self {
            name: name.into(),
            in_fixture_family: false,
            is_fixture_root: false,
            parent: None,
        }
    }

    /// Creates a descriptor for a class belonging to the fixture family.
    #[must_use]
    pub fn fixture(name: impl Into<EcoString>) -> Self {
        Self {
            in_fixture_family: true,
            ..Self::new(name)
        }
    }

    /// Creates a descriptor for the designated fixture base type itself.
    #[must_use]
    pub fn fixture_root(name: impl Into<EcoString>) -> Self {
        Self {
            in_fixture_family: true,
            is_fixture_root: true,
            ..Self::new(name)
        }
    }

    /// Links the immediate superclass.
    #[must_use]
    pub fn with_parent(mut self, parent: ClassDescriptor) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }
}

/// Resolver for the class enclosing the method currently under inspection.
///
/// Returns `None` when the check is invoked outside any class context (for
/// example, a free function visited by an over-eager driver); the check then
/// degrades to "not applicable" rather than failing.
pub trait ClassResolver {
    /// Resolve the enclosing class of the method being visited.
    fn enclosing_class(&self) -> Option<&ClassDescriptor>;
}

/// A descriptor resolves to itself: the common case for drivers that resolve
/// the class before invoking the check.
impl ClassResolver for ClassDescriptor {
    fn enclosing_class(&self) -> Option<&ClassDescriptor> {
        Some(self)
    }
}

/// An optional descriptor models a context where resolution may have failed.
impl ClassResolver for Option<ClassDescriptor> {
    fn enclosing_class(&self) -> Option<&ClassDescriptor> {
        self.as_ref()
    }
}
