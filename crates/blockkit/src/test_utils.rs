use std::sync::Arc;

use crate::class::{ClassBuilder, ComponentClass};
use crate::fields::{Field, Scope};
use crate::mixins::hierarchy::hierarchy_mixin;
use crate::mixins::scoped_storage::scoped_storage_mixin;

/// A small family of classes exercising every mixin combination.
pub struct ToyClasses {
    /// Declares `field_a` (settings) and `field_b` (content).
    pub storage_tester: Arc<ComponentClass>,
    /// Subclass of `storage_tester` with an empty body.
    pub child: Arc<ComponentClass>,
    /// Plain mixin declaring `field_c`.
    pub fields_mixin: Arc<ComponentClass>,
    /// `(fields_mixin, storage_tester)`.
    pub mixin_child: Arc<ComponentClass>,
    pub mixin_grandchild: Arc<ComponentClass>,
    pub has_children: Arc<ComponentClass>,
    pub without_children: Arc<ComponentClass>,
    pub inherited_children: Arc<ComponentClass>,
}

impl Default for ToyClasses {
    fn default() -> Self {
        Self::new()
    }
}

impl ToyClasses {
    pub fn new() -> Self {
        let storage_tester = ClassBuilder::new("ScopedStorageMixinTester")
            .base(scoped_storage_mixin())
            .field(Field::integer("field_a", Scope::Settings))
            .field(Field::integer("field_b", Scope::Content))
            .build()
            .expect("failed to build ScopedStorageMixinTester");
        let child = ClassBuilder::new("ChildClass")
            .base(&storage_tester)
            .build()
            .expect("failed to build ChildClass");
        let fields_mixin = ClassBuilder::new("FieldsMixin")
            .field(Field::integer("field_c", Scope::Settings))
            .build()
            .expect("failed to build FieldsMixin");
        let mixin_child = ClassBuilder::new("MixinChildClass")
            .base(&fields_mixin)
            .base(&storage_tester)
            .build()
            .expect("failed to build MixinChildClass");
        let mixin_grandchild = ClassBuilder::new("MixinGrandchildClass")
            .base(&mixin_child)
            .build()
            .expect("failed to build MixinGrandchildClass");

        let has_children = ClassBuilder::new("HasChildren")
            .base(hierarchy_mixin())
            .has_children(true)
            .build()
            .expect("failed to build HasChildren");
        let without_children = ClassBuilder::new("WithoutChildren")
            .base(hierarchy_mixin())
            .build()
            .expect("failed to build WithoutChildren");
        let inherited_children = ClassBuilder::new("InheritedChildren")
            .base(&has_children)
            .build()
            .expect("failed to build InheritedChildren");

        Self {
            storage_tester,
            child,
            fields_mixin,
            mixin_child,
            mixin_grandchild,
            has_children,
            without_children,
            inherited_children,
        }
    }
}
