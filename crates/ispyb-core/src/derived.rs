//! Derived accessors: read-only values computed from an instance and its
//! related instances.
//!
//! An accessor has two evaluation modes that must agree on every row:
//! in memory over loaded instances, and as a query expression that the
//! session or an external SQL server evaluates over joined rows. Absence of a
//! prerequisite (an unset relationship, a NULL operand) yields `None` in both
//! modes and is never an error.

use std::fmt;

use crate::query::Expr;
use crate::session::Instance;
use crate::value::Value;

/// A computed, never-stored property attached to one entity.
pub trait DerivedAccessor: Send + Sync + fmt::Debug {
    /// Entity the accessor is attached to.
    fn entity(&self) -> &str;

    /// Accessor name, unique among the entity's fields, relationships and accessors.
    fn name(&self) -> &str;

    /// Evaluate over an instance whose needed relationships are loaded.
    fn evaluate(&self, instance: &Instance) -> Option<Value>;

    /// The same computation as a query expression.
    fn expression(&self) -> Expr;
}

/// Turn a NULL result into absence.
pub fn present(value: Value) -> Option<Value> {
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present() {
        assert_eq!(present(Value::Null), None);
        assert_eq!(present(Value::from("MX415")), Some(Value::from("MX415")));
    }
}
