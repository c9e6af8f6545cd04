//! # Class Manifests
//!
//! Component classes can be declared in TOML instead of code. Classes are
//! defined in document order, so a class may only name bases declared earlier
//! (or already registered).
//!
//! ```toml
//! [[class]]
//! name = "Problem"
//! bases = ["HierarchyMixin"]
//! has_children = true
//!
//! [[class.fields]]
//! name = "max_attempts"
//! kind = "integer"
//! scope = "settings"
//! default = 3
//! help = "How many submissions are allowed"
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::class::ClassBuilder;
use crate::error::Result;
use crate::fields::{Field, FieldKind, Scope};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "class")]
    pub classes: Vec<ClassManifest>,
}

impl Manifest {
    pub fn parse(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassManifest {
    pub name: String,
    #[serde(default)]
    pub bases: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
    #[serde(default)]
    pub fields: Vec<FieldManifest>,
    /// Plain class attributes.
    #[serde(default)]
    pub attrs: Map<String, Value>,
}

impl ClassManifest {
    /// Class body without bases; the registry resolves those by name.
    pub(crate) fn body(&self) -> ClassBuilder {
        let mut builder = ClassBuilder::new(&self.name);
        for (name, value) in &self.attrs {
            builder = builder.attr(name, value.clone());
        }
        if let Some(has_children) = self.has_children {
            builder = builder.has_children(has_children);
        }
        for field in &self.fields {
            builder = builder.field(field.to_field());
        }
        builder
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldManifest {
    pub name: String,
    pub kind: FieldKind,
    pub scope: Scope,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl FieldManifest {
    pub fn to_field(&self) -> Field {
        let mut field = Field::new(&self.name, self.kind, self.scope);
        if let Some(default) = &self.default {
            field = field.with_default(default.clone());
        }
        if let Some(help) = &self.help {
            field = field.with_help(help);
        }
        if let Some(display_name) = &self.display_name {
            field = field.with_display_name(display_name);
        }
        field
    }
}
