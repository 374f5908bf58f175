//! Generic binding registry.
//!
//! Every registry in this crate is built on [`Registry`]: a hash map from
//! key to [`Binding`] guarded by a single read-write lock. Writers hold the
//! lock only for the map operation itself. Factories, drops of replaced
//! bindings and log events all happen after the guard is released.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use static_binder_config::{RegistryConfig, MAX_INITIAL_CAPACITY};
use static_binder_protocols::error::{BinderError, BinderResult};
use static_binder_protocols::key::BindingKey;

use super::binding::Binding;
use super::keys::Keys;

/// Thread-safe registry mapping keys to implementations.
///
/// Each key maps to at most one binding. Registration never silently
/// replaces an existing binding: callers choose explicitly between
/// [`register`](Self::register) (rejects duplicates) and
/// [`replace`](Self::replace) (last writer wins).
///
/// # Type Parameters
///
/// * `K` - The key type (e.g. `String`, [`TypeKey`](static_binder_protocols::TypeKey))
/// * `V` - The implementation type, possibly unsized (e.g. `dyn Logger`)
pub struct Registry<K: BindingKey, V: ?Sized + Send + Sync + 'static> {
    bindings: RwLock<HashMap<K, Binding<V>>>,
    trace_lookups: bool,
}

impl<K: BindingKey, V: ?Sized + Send + Sync + 'static> Registry<K, V> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a registry with room for `capacity` bindings.
    ///
    /// The reservation is capped at [`MAX_INITIAL_CAPACITY`]; the map still
    /// grows past it on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bindings: RwLock::new(HashMap::with_capacity(capacity.min(MAX_INITIAL_CAPACITY))),
            trace_lookups: false,
        }
    }

    /// Create a registry from configuration.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self {
            trace_lookups: config.trace_lookups,
            ..Self::with_capacity(config.initial_capacity)
        }
    }

    /// Register an implementation.
    ///
    /// Returns an error if the key is already bound.
    pub fn register(&self, key: K, implementation: Arc<V>) -> BinderResult<()> {
        self.register_with(key, Binding::Instance(implementation), false)
            .map(|_| ())
    }

    /// Register an implementation, replacing any existing binding.
    ///
    /// Returns the binding that was replaced.
    pub fn replace(&self, key: K, implementation: Arc<V>) -> BinderResult<Option<Binding<V>>> {
        self.register_with(key, Binding::Instance(implementation), true)
    }

    /// Register a non-owning binding to `implementation`.
    pub fn register_weak(&self, key: K, implementation: &Arc<V>) -> BinderResult<()> {
        self.register_with(key, Binding::weak(implementation), false)
            .map(|_| ())
    }

    /// Register a factory invoked on every resolve.
    pub fn register_factory<F>(&self, key: K, factory: F) -> BinderResult<()>
    where
        F: Fn() -> Arc<V> + Send + Sync + 'static,
    {
        self.register_with(key, Binding::factory(factory), false)
            .map(|_| ())
    }

    /// Insert a binding.
    ///
    /// With `overwrite == false` an existing live binding is left untouched
    /// and [`BinderError::DuplicateBinding`] is returned. With
    /// `overwrite == true` the existing binding is swapped out in one step
    /// and returned. A weak binding whose referent is gone counts as absent.
    pub fn register_with(
        &self,
        key: K,
        binding: Binding<V>,
        overwrite: bool,
    ) -> BinderResult<Option<Binding<V>>> {
        key.validate()?;
        if !binding.is_live() {
            return Err(BinderError::invalid_implementation(
                key.to_string(),
                "weak referent has already been dropped",
            ));
        }
        let kind = binding.kind();

        let mut bindings = self.bindings.write();
        let duplicate = !overwrite && bindings.get(&key).is_some_and(Binding::is_live);
        let previous = if duplicate {
            None
        } else {
            bindings.insert(key.clone(), binding)
        };
        drop(bindings);

        if duplicate {
            return Err(BinderError::DuplicateBinding(key.to_string()));
        }

        let previous = previous.filter(Binding::is_live);
        debug!(
            key = %key,
            kind,
            replaced = previous.is_some(),
            "Binding registered"
        );
        Ok(previous)
    }

    /// Resolve the implementation bound to `key`.
    ///
    /// Returns [`BinderError::UnboundKey`] if there is no live binding.
    pub fn resolve<Q>(&self, key: &Q) -> BinderResult<Arc<V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Display,
    {
        self.lookup(key)
            .ok_or_else(|| BinderError::UnboundKey(key.to_string()))
    }

    /// Resolve the implementation bound to `key`, if any.
    pub fn try_resolve<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Display,
    {
        self.lookup(key)
    }

    fn lookup<Q>(&self, key: &Q) -> Option<Arc<V>>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Display,
    {
        let binding = self.bindings.read().get(key).cloned();
        if self.trace_lookups {
            trace!(key = %key, found = binding.is_some(), "Resolving binding");
        }

        let binding = binding?;
        let implementation = binding.get();
        if implementation.is_none() {
            self.prune(key, &binding);
        }
        implementation
    }

    /// Drop a dead weak binding, unless someone re-registered the key meanwhile.
    fn prune<Q>(&self, key: &Q, stale: &Binding<V>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Display,
    {
        let removed = {
            let mut bindings = self.bindings.write();
            let still_stale = bindings
                .get(key)
                .is_some_and(|current| current.same_weak(stale) && !current.is_live());
            if still_stale {
                bindings.remove(key)
            } else {
                None
            }
        };

        if removed.is_some() {
            warn!(key = %key, "Pruned binding whose referent was dropped");
        }
    }

    /// Remove the binding for `key`.
    ///
    /// Returns `true` if a live binding was removed. Removing an absent key
    /// is not an error.
    pub fn unregister<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq + fmt::Display,
    {
        let removed = self.bindings.write().remove(key);
        match removed {
            Some(binding) if binding.is_live() => {
                debug!(key = %key, kind = binding.kind(), "Binding unregistered");
                true
            }
            _ => false,
        }
    }

    /// Check if `key` has a live binding.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.bindings
            .read()
            .get(key)
            .is_some_and(Binding::is_live)
    }

    /// Snapshot of the currently bound keys.
    pub fn keys(&self) -> Keys<K> {
        let keys: Arc<[K]> = self
            .bindings
            .read()
            .iter()
            .filter(|(_, binding)| binding.is_live())
            .map(|(key, _)| key.clone())
            .collect();
        Keys::new(keys)
    }

    /// Get the number of live bindings.
    pub fn len(&self) -> usize {
        self.bindings
            .read()
            .values()
            .filter(|binding| binding.is_live())
            .count()
    }

    /// Check if the registry has no live bindings.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every binding.
    ///
    /// Returns the number of live bindings removed.
    pub fn clear(&self) -> usize {
        let drained = std::mem::take(&mut *self.bindings.write());
        let count = drained.values().filter(|binding| binding.is_live()).count();
        debug!(count, "Registry cleared");
        count
    }
}

impl<K: BindingKey, V: ?Sized + Send + Sync + 'static> Default for Registry<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: BindingKey, V: ?Sized + Send + Sync + 'static> fmt::Debug for Registry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.len())
            .field("trace_lookups", &self.trace_lookups)
            .finish()
    }
}

#[cfg(test)]
#[path = "base_tests.rs"]
mod tests;
