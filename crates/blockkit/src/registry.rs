//! # Class Registry
//!
//! Name-addressed store of built component classes. A fresh registry already
//! knows the framework roots, `ScopedStorageMixin` and `HierarchyMixin`, so
//! manifests can name them as bases.

use std::collections::HashMap;
use std::sync::Arc;

use crate::class::{ClassBuilder, ComponentClass};
use crate::config::RegistryConfig;
use crate::error::{BlockError, Result};
use crate::manifest::{ClassManifest, Manifest};
use crate::mixins::hierarchy::hierarchy_mixin;
use crate::mixins::scoped_storage::scoped_storage_mixin;

#[derive(Debug)]
pub struct ClassRegistry {
    config: RegistryConfig,
    classes: HashMap<String, Arc<ComponentClass>>,
    order: Vec<String>,
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        let mut registry = Self {
            config,
            classes: HashMap::new(),
            order: Vec::new(),
        };
        for root in [scoped_storage_mixin(), hierarchy_mixin()] {
            registry.insert(root.clone());
        }
        registry
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    fn insert(&mut self, class: Arc<ComponentClass>) {
        let name = class.name().to_string();
        if self.classes.insert(name.clone(), class).is_none() {
            self.order.push(name);
        }
    }

    fn check_available(&self, name: &str) -> Result<()> {
        if self.classes.contains_key(name) && !self.config.allow_redefinition {
            return Err(BlockError::ClassAlreadyDefined(name.to_string()));
        }
        Ok(())
    }

    /// Build a class and register it under its name.
    pub fn define(&mut self, builder: ClassBuilder) -> Result<Arc<ComponentClass>> {
        self.check_available(builder.name())?;
        let class = builder.build()?;
        self.register(class.clone())?;
        Ok(class)
    }

    /// Register an already built class.
    pub fn register(&mut self, class: Arc<ComponentClass>) -> Result<()> {
        self.check_available(class.name())?;
        tracing::debug!(class = class.name(), "registered component class");
        self.insert(class);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<ComponentClass>> {
        self.classes.get(name)
    }

    pub fn resolve(&self, name: &str) -> Result<&Arc<ComponentClass>> {
        self.get(name)
            .ok_or_else(|| BlockError::UnknownClass(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Registered names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Define one manifest class, resolving its bases by name.
    pub fn define_manifest_class(&mut self, manifest: &ClassManifest) -> Result<Arc<ComponentClass>> {
        if self.config.check_defaults {
            if let Some(field) = manifest.fields.iter().map(|f| f.to_field()).find(|f| !f.has_valid_default()) {
                return Err(BlockError::InvalidDefault {
                    class: manifest.name.clone(),
                    field: field.name().to_string(),
                    expected: field.kind(),
                });
            }
        }

        let mut builder = manifest.body();
        for base in &manifest.bases {
            builder = builder.base(self.resolve(base)?);
        }
        self.define(builder)
    }

    /// Parse a TOML manifest and define its classes in order.
    ///
    /// All or nothing: when one class fails, the classes defined before it are
    /// rolled back and the registry is left as it was.
    pub fn load_manifest(&mut self, src: &str) -> Result<Vec<Arc<ComponentClass>>> {
        let manifest = Manifest::parse(src)?;
        tracing::debug!(classes = manifest.classes.len(), "loading class manifest");

        let snapshot = (self.classes.clone(), self.order.clone());
        let defined = manifest
            .classes
            .iter()
            .map(|class| self.define_manifest_class(class))
            .collect::<Result<Vec<_>>>();
        if let Err(err) = &defined {
            tracing::debug!(error = %err, "class manifest rejected, rolling back");
            (self.classes, self.order) = snapshot;
        }
        defined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Field, FieldKind, Scope};
    use serde_json::json;

    const COURSE: &str = r#"
[[class]]
name = "Sequence"
bases = ["HierarchyMixin"]
has_children = true

[[class.fields]]
name = "display_name"
kind = "string"
scope = "settings"
default = "Sequence"

[[class]]
name = "Chapter"
bases = ["Sequence"]

[[class.fields]]
name = "start"
kind = "string"
scope = "settings"
"#;

    #[test]
    fn starts_with_framework_roots() {
        let registry = ClassRegistry::new();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["ScopedStorageMixin", "HierarchyMixin"]
        );
        assert!(Arc::ptr_eq(
            registry.resolve("HierarchyMixin").unwrap(),
            hierarchy_mixin()
        ));
    }

    #[test]
    fn define_registers_by_name() {
        let mut registry = ClassRegistry::new();
        let class = registry
            .define(
                ClassBuilder::new("Video")
                    .base(scoped_storage_mixin())
                    .field(Field::string("url", Scope::Content)),
            )
            .unwrap();
        assert!(Arc::ptr_eq(registry.get("Video").unwrap(), &class));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn redefinition_is_rejected_by_default() {
        let mut registry = ClassRegistry::new();
        registry.define(ClassBuilder::new("Video")).unwrap();
        let err = registry.define(ClassBuilder::new("Video")).unwrap_err();
        assert!(matches!(err, BlockError::ClassAlreadyDefined(name) if name == "Video"));
    }

    #[test]
    fn redefinition_replaces_when_allowed() {
        let mut registry = ClassRegistry::with_config(RegistryConfig {
            allow_redefinition: true,
            ..Default::default()
        });
        let first = registry.define(ClassBuilder::new("Video")).unwrap();
        let second = registry.define(ClassBuilder::new("Video")).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(registry.get("Video").unwrap(), &second));
        assert_eq!(registry.names().filter(|n| *n == "Video").count(), 1);
    }

    #[test]
    fn unknown_class_is_an_error() {
        let registry = ClassRegistry::new();
        assert!(matches!(
            registry.resolve("Nope"),
            Err(BlockError::UnknownClass(name)) if name == "Nope"
        ));
    }

    #[test]
    fn manifest_classes_build_in_order() {
        let mut registry = ClassRegistry::new();
        let classes = registry.load_manifest(COURSE).unwrap();
        assert_eq!(classes.len(), 2);

        let chapter = registry.resolve("Chapter").unwrap();
        assert!(chapter.has_children());
        assert_eq!(
            chapter.fields().unwrap().keys().collect::<Vec<_>>(),
            vec!["display_name", "children", "start"]
        );
        assert_eq!(
            chapter.field("display_name").unwrap().default_value(),
            &json!("Sequence")
        );
        assert_eq!(chapter.field("children").unwrap().kind(), FieldKind::List);
    }

    #[test]
    fn manifest_with_unknown_base_fails() {
        let mut registry = ClassRegistry::new();
        let src = r#"
[[class]]
name = "Orphan"
bases = ["Missing"]
"#;
        assert!(matches!(
            registry.load_manifest(src),
            Err(BlockError::UnknownClass(name)) if name == "Missing"
        ));
        assert!(!registry.contains("Orphan"));
    }

    #[test]
    fn failed_manifest_leaves_registry_untouched() {
        let mut registry = ClassRegistry::new();
        let before = registry.names().map(str::to_string).collect::<Vec<_>>();
        let src = r#"
[[class]]
name = "Valid"
bases = ["ScopedStorageMixin"]

[[class]]
name = "Broken"
bases = ["Missing"]
"#;
        assert!(matches!(
            registry.load_manifest(src),
            Err(BlockError::UnknownClass(name)) if name == "Missing"
        ));
        assert!(!registry.contains("Valid"));
        assert_eq!(registry.names().collect::<Vec<_>>(), before);

        registry.define(ClassBuilder::new("Valid")).unwrap();
    }

    #[test]
    fn failed_manifest_keeps_replaced_classes() {
        let mut registry = ClassRegistry::with_config(RegistryConfig {
            allow_redefinition: true,
            ..Default::default()
        });
        let original = registry.define(ClassBuilder::new("Video")).unwrap();
        let src = r#"
[[class]]
name = "Video"

[[class]]
name = "Broken"
bases = ["Missing"]
"#;
        assert!(registry.load_manifest(src).is_err());
        assert!(Arc::ptr_eq(registry.get("Video").unwrap(), &original));
    }

    #[test]
    fn manifest_defaults_are_checked() {
        let src = r#"
[[class]]
name = "Bad"
bases = ["ScopedStorageMixin"]

[[class.fields]]
name = "count"
kind = "integer"
scope = "settings"
default = "many"
"#;
        let mut strict = ClassRegistry::new();
        assert!(matches!(
            strict.load_manifest(src),
            Err(BlockError::InvalidDefault { class, field, expected: FieldKind::Integer })
                if class == "Bad" && field == "count"
        ));

        let mut lenient = ClassRegistry::with_config(RegistryConfig {
            check_defaults: false,
            ..Default::default()
        });
        let classes = lenient.load_manifest(src).unwrap();
        assert_eq!(
            classes[0].field("count").unwrap().default_value(),
            &json!("many")
        );
    }
}
