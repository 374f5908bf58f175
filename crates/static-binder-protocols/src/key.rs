//! Binding keys.

use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::BinderError;

/// Trait for values that can name a binding in a registry.
///
/// A key must be hashable and comparable so that each key maps to at most
/// one binding. The [`Display`](fmt::Display) form is what errors and log
/// events report.
pub trait BindingKey: Eq + Hash + Clone + fmt::Display + Send + Sync + 'static {
    /// Check that the key may be used for registration.
    ///
    /// The default accepts every value.
    fn validate(&self) -> Result<(), BinderError> {
        Ok(())
    }
}

/// Reject empty or whitespace-only names.
pub fn validate_name(name: &str) -> Result<(), BinderError> {
    if name.trim().is_empty() {
        return Err(BinderError::InvalidKey(format!("{:?}", name)));
    }
    Ok(())
}

impl BindingKey for String {
    fn validate(&self) -> Result<(), BinderError> {
        validate_name(self)
    }
}

impl BindingKey for &'static str {
    fn validate(&self) -> Result<(), BinderError> {
        validate_name(self)
    }
}

/// Type descriptor naming a binding by the Rust type it provides.
///
/// Equality and hashing use the [`TypeId`] only; the type name is kept for
/// display.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    /// Descriptor for `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Check whether this descriptor names `T`.
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeKey").field(&self.name).finish()
    }
}

impl BindingKey for TypeKey {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    struct Logger;
    struct Cache;

    #[test]
    fn test_string_key_validation() {
        assert!("Logger".to_string().validate().is_ok());
        assert!(String::new().validate().is_err());
        assert!("   ".to_string().validate().is_err());
    }

    #[test]
    fn test_static_str_key_validation() {
        assert!("Logger".validate().is_ok());
        let err = "".validate().unwrap_err();
        assert!(matches!(err, BinderError::InvalidKey(_)));
    }

    #[test]
    fn test_type_key_equality() {
        assert_eq!(TypeKey::of::<Logger>(), TypeKey::of::<Logger>());
        assert_ne!(TypeKey::of::<Logger>(), TypeKey::of::<Cache>());
    }

    #[test]
    fn test_type_key_hash() {
        let mut set = HashSet::new();
        set.insert(TypeKey::of::<Logger>());
        set.insert(TypeKey::of::<Logger>());
        set.insert(TypeKey::of::<Cache>());
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_type_key_display() {
        let key = TypeKey::of::<Logger>();
        assert!(key.to_string().ends_with("Logger"));
        assert_eq!(key.type_name(), key.to_string());
    }

    #[test]
    fn test_type_key_is() {
        let key = TypeKey::of::<Cache>();
        assert!(key.is::<Cache>());
        assert!(!key.is::<Logger>());
        assert_eq!(key.type_id(), TypeId::of::<Cache>());
    }

    #[test]
    fn test_type_key_always_valid() {
        assert!(TypeKey::of::<()>().validate().is_ok());
    }
}
