//! # Hierarchy
//!
//! Classes deriving from [`hierarchy_mixin`] declare whether they hold children
//! with a class-level `has_children` flag (false on the root).
//!
//! When a class resolves `has_children = true`, through its own body or any
//! ancestor, it also carries a `children` field (`List`, [`Scope::Children`]).
//! The field is injected into the class body before fields are aggregated, so it
//! shows up in the regular `fields` mapping. Classes that resolve `false` have no
//! `children` attribute at all.
//!
//! Subclasses of a class with children reuse the ancestor's `children` field. A
//! subclass that turns the flag off masks the inherited field with
//! [`ClassAttr::Hidden`], and turning it back on further down injects a fresh one.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::Value;

use super::scoped_storage::{scoped_storage_mixin, ScopedStorage};
use crate::class::{find_attr, Attrs, ClassAttr, ComponentClass, MixinMarker};
use crate::error::{BlockError, Result};
use crate::field_data::FieldData;
use crate::fields::{Field, Scope};

pub const HAS_CHILDREN: &str = "has_children";
pub const CHILDREN: &str = "children";

static HIERARCHY_MIXIN: Lazy<Arc<ComponentClass>> = Lazy::new(|| {
    ComponentClass::root(
        "HierarchyMixin",
        MixinMarker::Hierarchy,
        Some(scoped_storage_mixin()),
        vec![(HAS_CHILDREN.to_string(), ClassAttr::Value(Value::Bool(false)))],
    )
});

/// The framework root for classes that may hold children.
pub fn hierarchy_mixin() -> &'static Arc<ComponentClass> {
    &HIERARCHY_MIXIN
}

/// The declaration injected into classes with children.
pub fn children_field() -> Field {
    Field::list(CHILDREN, Scope::Children).with_help("The ids of the children of this block")
}

fn flag(attr: &ClassAttr) -> bool {
    attr.as_value().and_then(Value::as_bool).unwrap_or(false)
}

/// Make the class body agree with the resolved `has_children` flag.
///
/// A class with children and no inherited `children` field gets a fresh one. A
/// class without children that would inherit the field gets a mask instead. An
/// own `children` entry is left alone.
pub(crate) fn apply_children(class_name: &str, attrs: &mut Attrs, ancestors: &[Arc<ComponentClass>]) {
    let has_children = match find_attr(attrs, HAS_CHILDREN) {
        Some(attr) => flag(attr),
        None => ancestors
            .iter()
            .find_map(|class| class.own_attr(HAS_CHILDREN))
            .is_some_and(flag),
    };
    if find_attr(attrs, CHILDREN).is_some() {
        return;
    }
    let inherited = ancestors
        .iter()
        .find_map(|class| class.own_attr(CHILDREN))
        .and_then(ClassAttr::as_field)
        .is_some();

    match (has_children, inherited) {
        (true, false) => {
            tracing::trace!(class = class_name, "injecting children field");
            attrs.push((
                CHILDREN.to_string(),
                ClassAttr::Field(Arc::new(children_field())),
            ));
        }
        (false, true) => {
            tracing::trace!(class = class_name, "hiding inherited children field");
            attrs.push((CHILDREN.to_string(), ClassAttr::Hidden));
        }
        _ => {}
    }
}

impl ComponentClass {
    /// Resolved `has_children` flag; false when nothing declares it.
    pub fn has_children(&self) -> bool {
        self.attr(HAS_CHILDREN).is_some_and(flag)
    }

    pub fn uses_hierarchy(&self) -> bool {
        self.has_marker(MixinMarker::Hierarchy)
    }
}

impl<D: FieldData> ScopedStorage<D> {
    fn require_children(&self) -> Result<()> {
        let class = self.class();
        if class.has_children() && class.uses_hierarchy() {
            Ok(())
        } else {
            Err(BlockError::NoChildren(class.name().to_string()))
        }
    }

    /// Ids of this block's children, in order. Every stored id must be a string.
    pub fn children(&self) -> Result<Vec<String>> {
        self.require_children()?;
        match self.get(CHILDREN)? {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(id) => Ok(id),
                    other => Err(BlockError::InvalidChildId {
                        class: self.class().name().to_string(),
                        id: other,
                    }),
                })
                .collect(),
            _ => Ok(Vec::new()),
        }
    }

    /// Append a child id.
    pub fn add_child(&self, id: impl Into<String>) -> Result<()> {
        let mut ids = self.children()?;
        ids.push(id.into());
        self.set(CHILDREN, Value::from(ids))
    }
}
