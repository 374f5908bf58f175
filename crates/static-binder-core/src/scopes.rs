//! Named binder scopes.
//!
//! A [`BinderScopes`] table owns one [`StaticBinder`] per scope name, so
//! independent parts of a program (plugins, test cases, tenants) can bind
//! the same types without seeing each other's implementations.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{debug, warn};

use static_binder_config::{BinderConfig, ConfigError, ConfigValidator, RegistryConfig};
use static_binder_protocols::error::BinderResult;
use static_binder_protocols::key::validate_name;

use crate::binder::StaticBinder;
use crate::registry::Keys;

const DEFAULT_SCOPE: &str = "default";

/// Table of binders keyed by scope name.
#[derive(Debug)]
pub struct BinderScopes {
    scopes: DashMap<String, Arc<StaticBinder>>,
    registry_config: RegistryConfig,
    default_scope: String,
}

impl BinderScopes {
    /// Create an empty table using the default registry settings.
    pub fn new() -> Self {
        Self {
            scopes: DashMap::new(),
            registry_config: RegistryConfig::default(),
            default_scope: DEFAULT_SCOPE.to_string(),
        }
    }

    /// Create a table from configuration.
    ///
    /// The configuration is validated first. The default scope and every
    /// `preload` scope exist once this returns.
    pub fn from_config(config: &BinderConfig) -> Result<Self, ConfigError> {
        let warnings = ConfigValidator::validate(config)?.into_result()?;
        for warning in &warnings {
            warn!(path = %warning.path, "{}", warning.message);
        }

        let scopes = Self {
            scopes: DashMap::new(),
            registry_config: config.registry.clone(),
            default_scope: config.scopes.default_scope.clone(),
        };

        let preload = std::iter::once(&config.scopes.default_scope).chain(&config.scopes.preload);
        for name in preload {
            scopes.scope(name).map_err(|e| ConfigError::InvalidValue {
                field: "scopes".to_string(),
                message: e.to_string(),
            })?;
        }

        Ok(scopes)
    }

    /// Get the binder for `name`, creating it on first use.
    ///
    /// Concurrent callers asking for the same new scope all receive the
    /// same binder.
    pub fn scope(&self, name: &str) -> BinderResult<Arc<StaticBinder>> {
        validate_name(name)?;
        if let Some(existing) = self.get(name) {
            return Ok(existing);
        }

        let (binder, created) = match self.scopes.entry(name.to_string()) {
            Entry::Occupied(entry) => (entry.get().clone(), false),
            Entry::Vacant(entry) => {
                let binder = Arc::new(StaticBinder::from_config(&self.registry_config));
                entry.insert(binder.clone());
                (binder, true)
            }
        };

        if created {
            debug!(scope = name, "Binder scope created");
        }
        Ok(binder)
    }

    /// Get the binder for the configured default scope.
    pub fn default_scope(&self) -> BinderResult<Arc<StaticBinder>> {
        self.scope(&self.default_scope)
    }

    pub fn default_scope_name(&self) -> &str {
        &self.default_scope
    }

    /// Get the binder for `name` without creating it.
    pub fn get(&self, name: &str) -> Option<Arc<StaticBinder>> {
        self.scopes.get(name).map(|entry| entry.value().clone())
    }

    /// Drop the table's handle to a scope.
    ///
    /// Callers still holding the binder keep using it; later calls to
    /// [`scope`](Self::scope) with the same name get a fresh binder.
    pub fn remove(&self, name: &str) -> bool {
        let removed = self.scopes.remove(name).is_some();
        if removed {
            debug!(scope = name, "Binder scope removed");
        }
        removed
    }

    /// Names of the scopes present during the call.
    pub fn names(&self) -> Keys<String> {
        Keys::new(self.scopes.iter().map(|entry| entry.key().clone()).collect())
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }
}

impl Default for BinderScopes {
    fn default() -> Self {
        Self::new()
    }
}
