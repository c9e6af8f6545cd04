//! Field declarations and the kinds of values they hold.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Scope;

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Integer,
    Float,
    Boolean,
    String,
    List,
    Dict,
    /// Id of another block
    Reference,
    Any,
}

impl FieldKind {
    /// Default used when a field is declared without an explicit one.
    pub fn implicit_default(&self) -> Value {
        match self {
            FieldKind::Boolean => Value::Bool(false),
            FieldKind::String => Value::String(String::new()),
            FieldKind::List => Value::Array(Vec::new()),
            FieldKind::Dict => Value::Object(Map::new()),
            FieldKind::Integer | FieldKind::Float | FieldKind::Reference | FieldKind::Any => {
                Value::Null
            }
        }
    }

    /// Whether `value` has the shape this kind stores. `null` is always accepted.
    pub fn accepts(&self, value: &Value) -> bool {
        if value.is_null() {
            return true;
        }
        match self {
            FieldKind::Integer => value.is_i64() || value.is_u64(),
            FieldKind::Float => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::String | FieldKind::Reference => value.is_string(),
            FieldKind::List => value.is_array(),
            FieldKind::Dict => value.is_object(),
            FieldKind::Any => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Integer => "integer",
            FieldKind::Float => "float",
            FieldKind::Boolean => "boolean",
            FieldKind::String => "string",
            FieldKind::List => "list",
            FieldKind::Dict => "dict",
            FieldKind::Reference => "reference",
            FieldKind::Any => "any",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Declaration of one named, scoped attribute of a component class.
///
/// Built once and then only read. Classes hold fields as `Arc<Field>` so that
/// every resolved [`FieldMap`](super::FieldMap) refers to the very same declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    kind: FieldKind,
    scope: Scope,
    default: Value,
    help: Option<String>,
    display_name: Option<String>,
}

impl Field {
    /// Create a field with the implicit default for its kind.
    pub fn new(name: impl Into<String>, kind: FieldKind, scope: Scope) -> Self {
        Self {
            name: name.into(),
            kind,
            scope,
            default: kind.implicit_default(),
            help: None,
            display_name: None,
        }
    }

    pub fn integer(name: impl Into<String>, scope: Scope) -> Self {
        Self::new(name, FieldKind::Integer, scope)
    }

    pub fn string(name: impl Into<String>, scope: Scope) -> Self {
        Self::new(name, FieldKind::String, scope)
    }

    pub fn boolean(name: impl Into<String>, scope: Scope) -> Self {
        Self::new(name, FieldKind::Boolean, scope)
    }

    pub fn list(name: impl Into<String>, scope: Scope) -> Self {
        Self::new(name, FieldKind::List, scope)
    }

    /// Set the default value.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Human readable name, falling back to the field name.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    /// Whether the declared default is a valid value for this field's kind.
    pub fn has_valid_default(&self) -> bool {
        self.kind.accepts(&self.default)
    }
}
