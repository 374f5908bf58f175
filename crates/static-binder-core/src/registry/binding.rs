//! Binding representation.

use std::fmt;
use std::sync::{Arc, Weak};

/// Factory producing a fresh implementation on every resolve.
pub type Factory<V> = Arc<dyn Fn() -> Arc<V> + Send + Sync>;

/// How an implementation is held by a registry.
pub enum Binding<V: ?Sized> {
    /// A shared instance. Resolving hands out clones of the same `Arc`.
    Instance(Arc<V>),
    /// A non-owning reference. The binding disappears once the referent is dropped.
    Weak(Weak<V>),
    /// A factory invoked on each resolve.
    Factory(Factory<V>),
}

impl<V: ?Sized> Binding<V> {
    /// Non-owning binding to `instance`.
    pub fn weak(instance: &Arc<V>) -> Self {
        Binding::Weak(Arc::downgrade(instance))
    }

    /// Factory binding.
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn() -> Arc<V> + Send + Sync + 'static,
    {
        Binding::Factory(Arc::new(factory))
    }

    /// Whether the binding can still produce an implementation.
    pub fn is_live(&self) -> bool {
        match self {
            Binding::Weak(weak) => weak.strong_count() > 0,
            Binding::Instance(_) | Binding::Factory(_) => true,
        }
    }

    /// Produce the implementation, or `None` if a weak referent is gone.
    ///
    /// Factories run here, so callers must not hold a registry lock.
    pub fn get(&self) -> Option<Arc<V>> {
        match self {
            Binding::Instance(instance) => Some(instance.clone()),
            Binding::Weak(weak) => weak.upgrade(),
            Binding::Factory(factory) => Some(factory()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Binding::Instance(_) => "instance",
            Binding::Weak(_) => "weak",
            Binding::Factory(_) => "factory",
        }
    }

    /// Both bindings are the same weak reference.
    pub(crate) fn same_weak(&self, other: &Self) -> bool {
        match (self, other) {
            (Binding::Weak(a), Binding::Weak(b)) => Weak::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<V: ?Sized> Clone for Binding<V> {
    fn clone(&self) -> Self {
        match self {
            Binding::Instance(instance) => Binding::Instance(instance.clone()),
            Binding::Weak(weak) => Binding::Weak(weak.clone()),
            Binding::Factory(factory) => Binding::Factory(factory.clone()),
        }
    }
}

impl<V: ?Sized> From<Arc<V>> for Binding<V> {
    fn from(instance: Arc<V>) -> Self {
        Binding::Instance(instance)
    }
}

impl<V: ?Sized> fmt::Debug for Binding<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("kind", &self.kind())
            .field("live", &self.is_live())
            .finish()
    }
}
