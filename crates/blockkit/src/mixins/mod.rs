//! # Component Mixins
//!
//! Small, composable capabilities a component gains by inheriting a framework
//! root class (class-level metadata) or implementing a trait (instance behaviour).
//!
//! | Mixin | Kind | Gives |
//! |-------|------|-------|
//! | [`scoped_storage`] | root class | `fields` mapping, instance field values |
//! | [`hierarchy`] | root class | `has_children` flag, conditional `children` field |
//! | [`index_info`] | trait | `index_dictionary()` hook |
//! | [`views`] | trait | `supports(...)` tagging, overridable `has_support` |

pub mod hierarchy;
pub mod index_info;
pub mod scoped_storage;
pub mod views;
