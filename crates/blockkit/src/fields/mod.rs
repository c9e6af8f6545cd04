//! # Field Declarations
//!
//! A [`Field`] describes one named piece of component state: what kind of value it
//! holds, which [`Scope`] it lives in, and its default. Fields are declared on a
//! class body and shared by reference (`Arc<Field>`) with every subclass and every
//! per-class [`FieldMap`] that resolves them.
//!
//! ## Field Kinds
//!
//! | Kind | Implicit default | Accepts |
//! |------|------------------|---------|
//! | `Integer` | `null` | integers |
//! | `Float` | `null` | any number |
//! | `Boolean` | `false` | booleans |
//! | `String` | `""` | strings |
//! | `List` | `[]` | arrays |
//! | `Dict` | `{}` | objects |
//! | `Reference` | `null` | strings (ids of other blocks) |
//! | `Any` | `null` | anything |
//!
//! Every kind also accepts `null`.

mod field;
mod map;
mod scope;

pub use field::{Field, FieldKind};
pub use map::FieldMap;
pub use scope::Scope;
