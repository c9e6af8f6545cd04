//! # Field Data
//!
//! Instance field values live behind the [`FieldData`] trait. The trait handles
//! the "where" of values; [`ScopedStorage`](crate::mixins::scoped_storage::ScopedStorage)
//! handles the "what" (defaults, validation, field lookup).
//!
//! Values are keyed by `(Scope, field name)`. A missing value means "not set",
//! and readers fall back to the field default.

use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use crate::fields::Scope;

/// Abstract interface for reading and writing instance field values.
pub trait FieldData {
    /// Stored value, or `None` when the field was never set.
    fn get(&self, scope: Scope, name: &str) -> Option<Value>;

    fn set(&self, scope: Scope, name: &str, value: Value);

    fn has(&self, scope: Scope, name: &str) -> bool {
        self.get(scope, name).is_some()
    }

    /// Remove a stored value. Returns whether there was one.
    fn delete(&self, scope: Scope, name: &str) -> bool;
}

/// In-memory field data.
///
/// Uses `RefCell` for interior mutability since blocks are used from a single
/// thread, which lets `FieldData` take `&self` everywhere.
#[derive(Debug, Default)]
pub struct DictFieldData {
    values: RefCell<HashMap<(Scope, String), Value>>,
}

impl DictFieldData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed values up front, e.g. from an authored definition.
    pub fn with_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = (Scope, S, Value)>,
        S: Into<String>,
    {
        let data = Self::new();
        {
            let mut map = data.values.borrow_mut();
            for (scope, name, value) in values {
                map.insert((scope, name.into()), value);
            }
        }
        data
    }

    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl FieldData for DictFieldData {
    fn get(&self, scope: Scope, name: &str) -> Option<Value> {
        self.values
            .borrow()
            .get(&(scope, name.to_string()))
            .cloned()
    }

    fn set(&self, scope: Scope, name: &str, value: Value) {
        self.values
            .borrow_mut()
            .insert((scope, name.to_string()), value);
    }

    fn has(&self, scope: Scope, name: &str) -> bool {
        self.values
            .borrow()
            .contains_key(&(scope, name.to_string()))
    }

    fn delete(&self, scope: Scope, name: &str) -> bool {
        self.values
            .borrow_mut()
            .remove(&(scope, name.to_string()))
            .is_some()
    }
}
