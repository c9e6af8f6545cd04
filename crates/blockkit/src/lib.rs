//! # Blockkit Architecture
//!
//! Blockkit provides the mixins a pluggable block framework builds its components
//! from. A component author declares fields and views; blockkit resolves what a
//! class actually carries and answers capability questions about it.
//!
//! ## Two Kinds of Mixins
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Class-level (built once by ClassBuilder)                   │
//! │  - ScopedStorageMixin: fields mapping over the whole MRO    │
//! │  - HierarchyMixin: has_children flag, children field        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Instance-level (traits and accessors)                      │
//! │  - ScopedStorage: field values with defaults                │
//! │  - IndexInfo: index_dictionary() hook                       │
//! │  - Views: supports(...) tags, overridable has_support       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Class-level mixins are framework root classes. Deriving a class from one of
//! them (directly, or through any chain of bases and plain mixins) switches on
//! its class-building behaviour. Instance-level mixins are traits with default
//! methods; overriding a method is how a component changes policy.
//!
//! ## No Magic
//!
//! Nothing happens behind the author's back at runtime: the method-resolution
//! order is computed explicitly (C3), fields are collected into a plain ordered
//! map, and view tags live on the [`ViewMethod`] value itself.
//!
//! ## Module Overview
//!
//! - [`class`]: `ComponentClass`, `ClassBuilder`, MRO computation
//! - [`fields`]: `Field`, `FieldKind`, `Scope`, `FieldMap`
//! - [`mixins`]: scoped storage, hierarchy, index info, views
//! - [`field_data`]: instance value backends
//! - [`registry`]: name-addressed classes and TOML manifests
//! - [`manifest`]: manifest format
//! - [`config`]: registry configuration
//! - [`error`]: error types

pub mod class;
pub mod config;
pub mod error;
pub mod field_data;
pub mod fields;
pub mod manifest;
pub mod mixins;
pub mod registry;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use class::{ClassAttr, ClassBuilder, ComponentClass};
pub use config::RegistryConfig;
pub use error::{BlockError, Result};
pub use field_data::{DictFieldData, FieldData};
pub use fields::{Field, FieldKind, FieldMap, Scope};
pub use mixins::hierarchy::hierarchy_mixin;
pub use mixins::index_info::{IndexDictionary, IndexInfo};
pub use mixins::scoped_storage::{scoped_storage_mixin, ScopedStorage};
pub use mixins::views::{supports, supports_all, Supports, ViewMethod, ViewTable, Views};
pub use registry::ClassRegistry;
