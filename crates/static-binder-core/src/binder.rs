//! Type-keyed binder.
//!
//! [`StaticBinder`] binds at most one implementation per Rust type and hands
//! it back as an `Arc` of that same type, so lookups need no casts at the
//! call site:
//!
//! ```
//! use std::sync::Arc;
//! use static_binder_core::StaticBinder;
//!
//! struct Settings {
//!     verbose: bool,
//! }
//!
//! let binder = StaticBinder::new();
//! binder.bind(Arc::new(Settings { verbose: true })).unwrap();
//!
//! let settings = binder.find::<Settings>().unwrap();
//! assert!(settings.verbose);
//! ```

use std::any::Any;
use std::sync::Arc;

use once_cell::sync::Lazy;

use static_binder_config::RegistryConfig;
use static_binder_protocols::error::{BinderError, BinderResult};
use static_binder_protocols::key::TypeKey;

use crate::registry::{Binding, Keys, Registry};

type Erased = dyn Any + Send + Sync;

static GLOBAL: Lazy<StaticBinder> = Lazy::new(StaticBinder::new);

/// Registry keyed by the implementation's type.
#[derive(Debug, Default)]
pub struct StaticBinder {
    registry: Registry<TypeKey, Erased>,
}

impl StaticBinder {
    /// Create a new empty binder.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Create a binder from configuration.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self {
            registry: Registry::from_config(config),
        }
    }

    /// Process-wide default binder.
    ///
    /// Created on first access and never dropped. Bindings made here are
    /// visible to every caller in the process, so libraries should take an
    /// explicit `&StaticBinder` (or a [`BinderScopes`](crate::BinderScopes)
    /// scope) instead and leave the global to the application.
    pub fn global() -> &'static StaticBinder {
        &GLOBAL
    }

    /// Bind `instance` as the implementation of `T`.
    ///
    /// Returns an error if `T` is already bound.
    pub fn bind<T: Any + Send + Sync>(&self, instance: Arc<T>) -> BinderResult<()> {
        self.registry.register(TypeKey::of::<T>(), instance)
    }

    /// Bind `instance` as the implementation of `T`, replacing any existing binding.
    pub fn rebind<T: Any + Send + Sync>(&self, instance: Arc<T>) -> BinderResult<()> {
        self.registry
            .replace(TypeKey::of::<T>(), instance)
            .map(|_| ())
    }

    /// Bind `T` without keeping `instance` alive.
    pub fn bind_weak<T: Any + Send + Sync>(&self, instance: &Arc<T>) -> BinderResult<()> {
        let erased: Arc<Erased> = instance.clone();
        self.registry.register_weak(TypeKey::of::<T>(), &erased)
    }

    /// Bind `T` to a factory called on every lookup.
    pub fn bind_factory<T, F>(&self, factory: F) -> BinderResult<()>
    where
        T: Any + Send + Sync,
        F: Fn() -> Arc<T> + Send + Sync + 'static,
    {
        self.registry
            .register_with(
                TypeKey::of::<T>(),
                Binding::factory(move || -> Arc<Erased> { factory() }),
                false,
            )
            .map(|_| ())
    }

    /// Get the implementation of `T`, if bound.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        self.registry
            .try_resolve(&TypeKey::of::<T>())?
            .downcast::<T>()
            .ok()
    }

    /// Get the implementation of `T`.
    ///
    /// Returns [`BinderError::UnboundKey`] naming `T` if nothing is bound.
    pub fn find<T: Any + Send + Sync>(&self) -> BinderResult<Arc<T>> {
        let key = TypeKey::of::<T>();
        self.registry.resolve(&key)?.downcast::<T>().map_err(|_| {
            BinderError::invalid_implementation(key.to_string(), "bound value has a different type")
        })
    }

    /// Remove the binding for `T`. Returns whether one was removed.
    pub fn unbind<T: Any + Send + Sync>(&self) -> bool {
        self.registry.unregister(&TypeKey::of::<T>())
    }

    pub fn is_bound<T: Any + Send + Sync>(&self) -> bool {
        self.registry.contains(&TypeKey::of::<T>())
    }

    /// Snapshot of the currently bound types.
    pub fn types(&self) -> Keys<TypeKey> {
        self.registry.keys()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    /// Remove every binding, returning how many live ones were removed.
    pub fn clear(&self) -> usize {
        self.registry.clear()
    }
}

#[cfg(test)]
#[path = "binder_tests.rs"]
mod tests;
