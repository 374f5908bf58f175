//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Largest `registry.initial_capacity` a registry will reserve up front.
pub const MAX_INITIAL_CAPACITY: usize = 1 << 20;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BinderConfig {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub scopes: ScopesConfig,
}

/// Settings applied when a registry is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Number of bindings to reserve space for up front, at most
    /// [`MAX_INITIAL_CAPACITY`].
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,

    /// Emit a `trace` event for every lookup.
    #[serde(default)]
    pub trace_lookups: bool,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            initial_capacity: default_initial_capacity(),
            trace_lookups: false,
        }
    }
}

fn default_initial_capacity() -> usize {
    16
}

/// Binder scope settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScopesConfig {
    /// Scope handed out when callers do not name one.
    #[serde(default = "default_scope")]
    pub default_scope: String,

    /// Scopes created eagerly at startup.
    #[serde(default)]
    pub preload: Vec<String>,
}

impl Default for ScopesConfig {
    fn default() -> Self {
        Self {
            default_scope: default_scope(),
            preload: Vec::new(),
        }
    }
}

fn default_scope() -> String {
    "default".to_string()
}
