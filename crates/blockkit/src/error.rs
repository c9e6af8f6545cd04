use thiserror::Error;

use crate::fields::FieldKind;

#[derive(Error, Debug)]
pub enum BlockError {
    #[error("Cannot create a consistent method resolution order for class {0}")]
    InconsistentMro(String),

    #[error("Duplicate base class {base} in class {class}")]
    DuplicateBase { class: String, base: String },

    #[error("Class already defined: {0}")]
    ClassAlreadyDefined(String),

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error("Class {class} has no field named {field}")]
    UnknownField { class: String, field: String },

    #[error("Class {0} does not use scoped storage")]
    NotScopedStorage(String),

    #[error("Class {0} does not have children")]
    NoChildren(String),

    #[error("Invalid child id {id} in class {class}: ids must be strings")]
    InvalidChildId { class: String, id: serde_json::Value },

    #[error("Invalid value for field {field}: expected {expected}")]
    InvalidValue { field: String, expected: FieldKind },

    #[error("Invalid default for field {field} in class {class}: expected {expected}")]
    InvalidDefault {
        class: String,
        field: String,
        expected: FieldKind,
    },

    #[error("Manifest error: {0}")]
    Manifest(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, BlockError>;
