//! # Component Classes
//!
//! Component classes are built at runtime by a [`ClassBuilder`], which plays the
//! part a metaclass plays in dynamic frameworks. Building a class runs, exactly once:
//!
//! 1. **Linearization**: the C3 method-resolution order of the class's bases
//!    (see [`mro`]). Plain mixins take part like any other base.
//! 2. **Hierarchy extension**: if the class descends from
//!    [`HierarchyMixin`](crate::mixins::hierarchy::hierarchy_mixin) and resolves
//!    `has_children = true`, a `children` field joins the class body.
//! 3. **Field aggregation**: if the class descends from
//!    [`ScopedStorageMixin`](crate::mixins::scoped_storage::scoped_storage_mixin),
//!    every field visible through the MRO is collected into a fresh [`FieldMap`].
//!
//! The result is an immutable `Arc<ComponentClass>`.
//!
//! ## Attribute Lookup
//!
//! [`ComponentClass::attr`] walks the MRO, own body first, and returns the first
//! declaration found. A [`ClassAttr::Hidden`] entry ends the walk with nothing,
//! which is how a subclass drops an inherited attribute. A class with no
//! `children` field simply has no such attribute, so `has_attr("children")` is
//! the presence check.

mod mro;

use std::sync::Arc;

use serde_json::Value;

use crate::error::{BlockError, Result};
use crate::fields::{Field, FieldMap};
use crate::mixins::{hierarchy, scoped_storage};

/// A value declared on a class body.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassAttr {
    Field(Arc<Field>),
    Value(Value),
    /// Masks an inherited attribute of the same name.
    Hidden,
}

impl ClassAttr {
    pub fn as_field(&self) -> Option<&Arc<Field>> {
        match self {
            ClassAttr::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            ClassAttr::Value(value) => Some(value),
            _ => None,
        }
    }
}

/// Framework roots whose presence in an MRO switches on class-building behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MixinMarker {
    ScopedStorage,
    Hierarchy,
}

pub(crate) type Attrs = Vec<(String, ClassAttr)>;

pub(crate) fn find_attr<'a>(attrs: &'a [(String, ClassAttr)], name: &str) -> Option<&'a ClassAttr> {
    attrs
        .iter()
        .find(|(attr_name, _)| attr_name == name)
        .map(|(_, attr)| attr)
}

fn set_attr(attrs: &mut Attrs, name: String, attr: ClassAttr) {
    match attrs.iter_mut().find(|(attr_name, _)| *attr_name == name) {
        Some(slot) => slot.1 = attr,
        None => attrs.push((name, attr)),
    }
}

/// A built component class.
pub struct ComponentClass {
    name: String,
    bases: Vec<Arc<ComponentClass>>,
    ancestors: Vec<Arc<ComponentClass>>,
    attrs: Attrs,
    fields: Option<FieldMap>,
    marker: Option<MixinMarker>,
}

impl ComponentClass {
    /// Build a framework root class. Roots have at most one parent, so
    /// linearization cannot fail.
    pub(crate) fn root(
        name: &str,
        marker: MixinMarker,
        parent: Option<&Arc<ComponentClass>>,
        attrs: Attrs,
    ) -> Arc<Self> {
        let bases: Vec<_> = parent.into_iter().cloned().collect();
        let ancestors = parent.map(|p| p.linearization()).unwrap_or_default();
        let fields = Some(scoped_storage::aggregate_fields(&ancestors, &attrs));
        Arc::new(Self {
            name: name.to_string(),
            bases,
            ancestors,
            attrs,
            fields,
            marker: Some(marker),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct bases, in declaration order.
    pub fn bases(&self) -> &[Arc<ComponentClass>] {
        &self.bases
    }

    /// Method-resolution order: this class, then its ancestors from most to least derived.
    pub fn mro(&self) -> impl Iterator<Item = &ComponentClass> {
        std::iter::once(self).chain(self.ancestors.iter().map(|c| c.as_ref()))
    }

    pub(crate) fn linearization(self: &Arc<Self>) -> Vec<Arc<ComponentClass>> {
        std::iter::once(self.clone())
            .chain(self.ancestors.iter().cloned())
            .collect()
    }

    /// Attributes declared on this class body, in declaration order.
    pub fn own_attrs(&self) -> impl Iterator<Item = (&str, &ClassAttr)> {
        self.attrs.iter().map(|(name, attr)| (name.as_str(), attr))
    }

    /// The entry for `name` on this class body, masks included.
    pub fn own_attr(&self, name: &str) -> Option<&ClassAttr> {
        find_attr(&self.attrs, name)
    }

    /// Resolve an attribute through the MRO. A mask hides everything behind it.
    pub fn attr(&self, name: &str) -> Option<&ClassAttr> {
        self.mro()
            .find_map(|class| class.own_attr(name))
            .filter(|attr| !matches!(attr, ClassAttr::Hidden))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Resolve an attribute that is a field.
    pub fn field(&self, name: &str) -> Option<&Arc<Field>> {
        self.attr(name).and_then(ClassAttr::as_field)
    }

    /// All fields visible on this class, or `None` for classes that do not use
    /// scoped storage (plain mixins).
    pub fn fields(&self) -> Option<&FieldMap> {
        self.fields.as_ref()
    }

    pub fn uses_scoped_storage(&self) -> bool {
        self.fields.is_some()
    }

    pub(crate) fn has_marker(&self, marker: MixinMarker) -> bool {
        self.mro().any(|class| class.marker == Some(marker))
    }

    /// Whether this class is `other` or derives from it.
    pub fn is_subclass_of(&self, other: &ComponentClass) -> bool {
        self.mro().any(|class| std::ptr::eq(class, other))
    }
}

impl std::fmt::Debug for ComponentClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentClass")
            .field("name", &self.name)
            .field("mro", &self.mro().map(|c| c.name()).collect::<Vec<_>>())
            .field(
                "fields",
                &self.fields.as_ref().map(|f| f.keys().collect::<Vec<_>>()),
            )
            .finish()
    }
}

/// Builds a [`ComponentClass`] from a class body and its bases.
///
/// ```
/// use blockkit::class::ClassBuilder;
/// use blockkit::fields::{Field, Scope};
/// use blockkit::mixins::scoped_storage::scoped_storage_mixin;
///
/// let tester = ClassBuilder::new("Tester")
///     .base(scoped_storage_mixin())
///     .field(Field::integer("field_a", Scope::Settings))
///     .build()
///     .unwrap();
/// assert!(tester.fields().unwrap().contains_key("field_a"));
/// ```
#[derive(Debug, Clone)]
pub struct ClassBuilder {
    name: String,
    bases: Vec<Arc<ComponentClass>>,
    attrs: Attrs,
}

impl ClassBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            attrs: Vec::new(),
        }
    }

    /// Append a direct base. Order matters: earlier bases take precedence.
    pub fn base(mut self, base: &Arc<ComponentClass>) -> Self {
        self.bases.push(base.clone());
        self
    }

    /// Declare a field on the class body under its own name.
    pub fn field(mut self, field: Field) -> Self {
        let name = field.name().to_string();
        set_attr(&mut self.attrs, name, ClassAttr::Field(Arc::new(field)));
        self
    }

    /// Declare a plain class attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        set_attr(&mut self.attrs, name.into(), ClassAttr::Value(value.into()));
        self
    }

    /// Mask an inherited attribute so lookup on this class finds nothing.
    pub fn hide(mut self, name: impl Into<String>) -> Self {
        set_attr(&mut self.attrs, name.into(), ClassAttr::Hidden);
        self
    }

    /// Declare `has_children` on the class body.
    pub fn has_children(self, has_children: bool) -> Self {
        self.attr(hierarchy::HAS_CHILDREN, has_children)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn build(self) -> Result<Arc<ComponentClass>> {
        for (i, base) in self.bases.iter().enumerate() {
            if self.bases[..i].iter().any(|b| Arc::ptr_eq(b, base)) {
                return Err(BlockError::DuplicateBase {
                    class: self.name,
                    base: base.name.clone(),
                });
            }
        }

        let ancestors = mro::linearize(&self.name, &self.bases)?;
        let mut attrs = self.attrs;

        let in_mro = |marker: MixinMarker| ancestors.iter().any(|c| c.marker == Some(marker));
        if in_mro(MixinMarker::Hierarchy) {
            hierarchy::apply_children(&self.name, &mut attrs, &ancestors);
        }
        let fields = in_mro(MixinMarker::ScopedStorage)
            .then(|| scoped_storage::aggregate_fields(&ancestors, &attrs));

        tracing::debug!(
            class = %self.name,
            mro_len = ancestors.len() + 1,
            fields = fields.as_ref().map_or(0, FieldMap::len),
            "built component class"
        );

        Ok(Arc::new(ComponentClass {
            name: self.name,
            bases: self.bases,
            ancestors,
            attrs,
            fields,
            marker: None,
        }))
    }
}
