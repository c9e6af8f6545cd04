//! # Configuration
//!
//! Registry behaviour is configured with [`confique`], layering environment
//! variables over an optional TOML file over compiled defaults.
//!
//! ## Available Settings
//!
//! | Key | Default | Env | Description |
//! |-----|---------|-----|-------------|
//! | `allow_redefinition` | `false` | `BLOCKKIT_ALLOW_REDEFINITION` | Let a class name be defined again, replacing the old class |
//! | `check_defaults` | `true` | `BLOCKKIT_CHECK_DEFAULTS` | Reject manifest fields whose default does not match their kind |

use std::path::Path;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration for a [`ClassRegistry`](crate::registry::ClassRegistry).
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Whether defining an already registered class name replaces it.
    #[config(default = false, env = "BLOCKKIT_ALLOW_REDEFINITION")]
    pub allow_redefinition: bool,

    /// Whether manifest field defaults are checked against the field kind.
    #[config(default = true, env = "BLOCKKIT_CHECK_DEFAULTS")]
    pub check_defaults: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            allow_redefinition: false,
            check_defaults: true,
        }
    }
}

impl RegistryConfig {
    /// Load from the environment and, if given, a TOML file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Self::builder().env();
        if let Some(path) = path {
            builder = builder.file(path);
        }
        Ok(builder.load()?)
    }
}
