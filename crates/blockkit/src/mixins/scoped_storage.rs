//! # Scoped Storage
//!
//! Classes deriving from [`scoped_storage_mixin`] get a `fields` mapping: every
//! [`Field`] visible on the class, collected once when the class is built.
//!
//! ## Aggregation Rules
//!
//! - The MRO is walked from least to most derived; each class contributes the
//!   fields declared on its own body, plain mixins included.
//! - A more derived declaration of the same name replaces the earlier one, but the
//!   name keeps the position where it was first seen.
//! - A [`ClassAttr::Hidden`] mask drops the name from the mapping.
//! - Each class gets its own [`FieldMap`], even when it declares nothing new. The
//!   `Arc<Field>` values inside are shared, so `fields[name]` is the very same
//!   declaration attribute lookup finds.
//!
//! ## Instance Values
//!
//! [`ScopedStorage`] pairs a class with a [`FieldData`] backend and reads field
//! values with defaults applied.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::{Map, Value};

use crate::class::{ClassAttr, ComponentClass, MixinMarker};
use crate::error::{BlockError, Result};
use crate::field_data::FieldData;
use crate::fields::{Field, FieldMap};

static SCOPED_STORAGE_MIXIN: Lazy<Arc<ComponentClass>> = Lazy::new(|| {
    ComponentClass::root(
        "ScopedStorageMixin",
        MixinMarker::ScopedStorage,
        None,
        Vec::new(),
    )
});

/// The framework root for classes with scoped fields.
pub fn scoped_storage_mixin() -> &'static Arc<ComponentClass> {
    &SCOPED_STORAGE_MIXIN
}

/// Collect the fields of `ancestors` (most derived first) and an own class body.
pub(crate) fn aggregate_fields(
    ancestors: &[Arc<ComponentClass>],
    own: &[(String, ClassAttr)],
) -> FieldMap {
    let mut fields = FieldMap::new();
    let bodies = ancestors
        .iter()
        .rev()
        .map(|class| (class.name(), class.own_attrs().collect::<Vec<_>>()));

    for (class_name, attrs) in bodies {
        for (name, attr) in attrs {
            match attr {
                ClassAttr::Field(field) => {
                    if fields.insert(name, field.clone()).is_some() {
                        tracing::trace!(field = name, class = class_name, "field overridden");
                    }
                }
                ClassAttr::Hidden => {
                    fields.remove(name);
                }
                ClassAttr::Value(_) => {}
            }
        }
    }
    for (name, attr) in own {
        match attr {
            ClassAttr::Field(field) => {
                fields.insert(name.as_str(), field.clone());
            }
            ClassAttr::Hidden => {
                fields.remove(name);
            }
            ClassAttr::Value(_) => {}
        }
    }
    fields
}

/// Field values of one block instance.
pub struct ScopedStorage<D: FieldData> {
    class: Arc<ComponentClass>,
    field_data: D,
}

impl<D: FieldData> ScopedStorage<D> {
    /// Bind `class` to a field data backend. The class must use scoped storage.
    pub fn new(class: &Arc<ComponentClass>, field_data: D) -> Result<Self> {
        if !class.uses_scoped_storage() {
            return Err(BlockError::NotScopedStorage(class.name().to_string()));
        }
        Ok(Self {
            class: class.clone(),
            field_data,
        })
    }

    pub fn class(&self) -> &Arc<ComponentClass> {
        &self.class
    }

    pub fn field_data(&self) -> &D {
        &self.field_data
    }

    /// Look up a field declaration by name.
    pub fn field(&self, name: &str) -> Result<&Arc<Field>> {
        self.class
            .fields()
            .and_then(|fields| fields.get(name))
            .ok_or_else(|| BlockError::UnknownField {
                class: self.class.name().to_string(),
                field: name.to_string(),
            })
    }

    /// Current value of a field, falling back to its default.
    pub fn get(&self, name: &str) -> Result<Value> {
        let field = self.field(name)?;
        Ok(self
            .field_data
            .get(field.scope(), field.name())
            .unwrap_or_else(|| field.default_value().clone()))
    }

    /// Store a value after checking it against the field kind.
    pub fn set(&self, name: &str, value: Value) -> Result<()> {
        let field = self.field(name)?;
        if !field.kind().accepts(&value) {
            return Err(BlockError::InvalidValue {
                field: name.to_string(),
                expected: field.kind(),
            });
        }
        self.field_data.set(field.scope(), field.name(), value);
        Ok(())
    }

    /// Whether a value was stored, as opposed to reading the default.
    pub fn is_explicitly_set(&self, name: &str) -> Result<bool> {
        let field = self.field(name)?;
        Ok(self.field_data.has(field.scope(), field.name()))
    }

    /// Drop a stored value so the default applies again.
    pub fn reset(&self, name: &str) -> Result<()> {
        let field = self.field(name)?;
        self.field_data.delete(field.scope(), field.name());
        Ok(())
    }

    /// Every field value in mapping order.
    pub fn values(&self) -> Map<String, Value> {
        self.class
            .fields()
            .into_iter()
            .flat_map(FieldMap::iter)
            .map(|(name, field)| {
                let value = self
                    .field_data
                    .get(field.scope(), field.name())
                    .unwrap_or_else(|| field.default_value().clone());
                (name.to_string(), value)
            })
            .collect()
    }
}

impl<D: FieldData> std::fmt::Debug for ScopedStorage<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedStorage")
            .field("class", &self.class.name())
            .field("values", &self.values())
            .finish()
    }
}
