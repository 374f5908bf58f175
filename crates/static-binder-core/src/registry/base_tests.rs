use super::*;
use static_binder_protocols::TypeKey;

trait Logger: Send + Sync {
    fn name(&self) -> &str;
}

struct NamedLogger {
    name: String,
}

impl NamedLogger {
    fn new(name: &str) -> Arc<dyn Logger> {
        Arc::new(Self {
            name: name.to_string(),
        })
    }
}

impl Logger for NamedLogger {
    fn name(&self) -> &str {
        &self.name
    }
}

fn registry() -> Registry<String, dyn Logger> {
    Registry::new()
}

#[test]
fn test_registry_new() {
    let registry = registry();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_registry_default() {
    let registry: Registry<String, dyn Logger> = Registry::default();
    assert!(registry.is_empty());
}

#[test]
fn test_registry_from_config() {
    let config = RegistryConfig {
        initial_capacity: 4,
        trace_lookups: true,
    };
    let registry: Registry<String, dyn Logger> = Registry::from_config(&config);
    registry
        .register("Logger".to_string(), NamedLogger::new("a"))
        .unwrap();
    assert_eq!(registry.resolve("Logger").unwrap().name(), "a");
    assert!(format!("{:?}", registry).contains("trace_lookups: true"));
}

#[test]
fn test_resolve_unbound() {
    let registry = registry();
    let err = registry.resolve("Logger").err().unwrap();
    assert_eq!(err, BinderError::UnboundKey("Logger".to_string()));
    assert!(registry.try_resolve("Logger").is_none());
}

#[test]
fn test_register_then_resolve_preserves_identity() {
    let registry = registry();
    let logger = NamedLogger::new("a");

    registry.register("Logger".to_string(), logger.clone()).unwrap();
    let resolved = registry.resolve("Logger").unwrap();
    assert!(Arc::ptr_eq(&logger, &resolved));
    assert!(Arc::ptr_eq(&logger, &registry.try_resolve("Logger").unwrap()));
}

#[test]
fn test_register_duplicate_keeps_first() {
    let registry = registry();
    let first = NamedLogger::new("first");
    let second = NamedLogger::new("second");

    registry.register("Logger".to_string(), first.clone()).unwrap();
    let err = registry
        .register("Logger".to_string(), second)
        .unwrap_err();

    assert_eq!(err, BinderError::DuplicateBinding("Logger".to_string()));
    assert!(Arc::ptr_eq(&first, &registry.resolve("Logger").unwrap()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_replace_overwrites() {
    let registry = registry();
    let first = NamedLogger::new("first");
    let second = NamedLogger::new("second");

    registry.register("Logger".to_string(), first.clone()).unwrap();
    let previous = registry
        .replace("Logger".to_string(), second.clone())
        .unwrap()
        .unwrap();

    assert!(Arc::ptr_eq(&previous.get().unwrap(), &first));
    assert!(Arc::ptr_eq(&second, &registry.resolve("Logger").unwrap()));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_replace_on_empty_key() {
    let registry = registry();
    let previous = registry
        .replace("Logger".to_string(), NamedLogger::new("a"))
        .unwrap();
    assert!(previous.is_none());
    assert!(registry.contains("Logger"));
}

#[test]
fn test_register_with_overwrite_flag() {
    let registry = registry();
    registry
        .register_with("Logger".to_string(), NamedLogger::new("a").into(), false)
        .unwrap();

    let rejected =
        registry.register_with("Logger".to_string(), NamedLogger::new("b").into(), false);
    assert!(matches!(rejected, Err(BinderError::DuplicateBinding(_))));

    let replaced = registry
        .register_with("Logger".to_string(), NamedLogger::new("c").into(), true)
        .unwrap();
    assert!(replaced.is_some());
    assert_eq!(registry.resolve("Logger").unwrap().name(), "c");
}

#[test]
fn test_register_invalid_key() {
    let registry = registry();
    let err = registry
        .register(String::new(), NamedLogger::new("a"))
        .unwrap_err();
    assert!(matches!(err, BinderError::InvalidKey(_)));
    assert!(registry.is_empty());
}

#[test]
fn test_unregister() {
    let registry = registry();
    registry
        .register("Logger".to_string(), NamedLogger::new("a"))
        .unwrap();

    assert!(registry.unregister("Logger"));
    assert!(matches!(
        registry.resolve("Logger"),
        Err(BinderError::UnboundKey(_))
    ));
    assert!(registry.is_empty());
}

#[test]
fn test_unregister_nonexistent() {
    let registry = registry();
    assert!(!registry.unregister("nonexistent"));
}

#[test]
fn test_register_after_unregister() {
    let registry = registry();
    registry
        .register("Logger".to_string(), NamedLogger::new("a"))
        .unwrap();
    registry.unregister("Logger");
    registry
        .register("Logger".to_string(), NamedLogger::new("b"))
        .unwrap();
    assert_eq!(registry.resolve("Logger").unwrap().name(), "b");
}

#[test]
fn test_contains() {
    let registry = registry();
    assert!(!registry.contains("Logger"));
    registry
        .register("Logger".to_string(), NamedLogger::new("a"))
        .unwrap();
    assert!(registry.contains("Logger"));
}

#[test]
fn test_keys_snapshot() {
    let registry = registry();
    registry
        .register("Logger".to_string(), NamedLogger::new("a"))
        .unwrap();
    registry
        .register("Audit".to_string(), NamedLogger::new("b"))
        .unwrap();

    let keys = registry.keys();
    assert_eq!(keys.len(), 2);
    assert!(keys.contains("Logger"));
    assert!(keys.contains("Audit"));

    registry.unregister("Logger");
    registry
        .register("Metrics".to_string(), NamedLogger::new("c"))
        .unwrap();

    // Taken before the mutations, so unchanged.
    assert_eq!(keys.len(), 2);
    assert!(keys.contains("Logger"));
    assert!(!keys.contains("Metrics"));

    let fresh = registry.keys();
    assert!(fresh.contains("Metrics"));
    assert!(!fresh.contains("Logger"));
}

#[test]
fn test_keys_restartable() {
    let registry = registry();
    registry
        .register("Logger".to_string(), NamedLogger::new("a"))
        .unwrap();
    let keys = registry.keys();
    assert_eq!(keys.iter().count(), 1);
    assert_eq!(keys.iter().count(), 1);
}

#[test]
fn test_weak_binding_resolves_while_alive() {
    let registry = registry();
    let logger = NamedLogger::new("weak");
    registry
        .register_weak("Logger".to_string(), &logger)
        .unwrap();

    let resolved = registry.resolve("Logger").unwrap();
    assert!(Arc::ptr_eq(&logger, &resolved));
    assert!(registry.keys().contains("Logger"));
}

#[test]
fn test_weak_binding_pruned_after_drop() {
    let registry = registry();
    let logger = NamedLogger::new("weak");
    registry
        .register_weak("Logger".to_string(), &logger)
        .unwrap();
    drop(logger);

    assert!(!registry.contains("Logger"));
    assert!(registry.keys().is_empty());
    assert_eq!(registry.len(), 0);
    assert!(matches!(
        registry.resolve("Logger"),
        Err(BinderError::UnboundKey(_))
    ));
    assert!(registry.bindings.read().is_empty());
}

#[test]
fn test_dead_weak_binding_does_not_block_register() {
    let registry = registry();
    let logger = NamedLogger::new("weak");
    registry
        .register_weak("Logger".to_string(), &logger)
        .unwrap();
    drop(logger);

    registry
        .register("Logger".to_string(), NamedLogger::new("strong"))
        .unwrap();
    assert_eq!(registry.resolve("Logger").unwrap().name(), "strong");
}

#[test]
fn test_unregister_dead_weak_reports_nothing_removed() {
    let registry = registry();
    let logger = NamedLogger::new("weak");
    registry
        .register_weak("Logger".to_string(), &logger)
        .unwrap();
    drop(logger);

    assert!(!registry.unregister("Logger"));
}

#[test]
fn test_register_dead_weak_rejected() {
    let registry = registry();
    let logger = NamedLogger::new("gone");
    let binding = Binding::weak(&logger);
    drop(logger);

    let err = registry
        .register_with("Logger".to_string(), binding, false)
        .unwrap_err();
    assert!(matches!(err, BinderError::InvalidImplementation { .. }));
    assert_eq!(err.key(), "Logger");
}

#[test]
fn test_factory_binding() {
    let registry = registry();
    registry
        .register_factory("Logger".to_string(), || NamedLogger::new("fresh"))
        .unwrap();

    let a = registry.resolve("Logger").unwrap();
    let b = registry.resolve("Logger").unwrap();
    assert_eq!(a.name(), "fresh");
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn test_factory_may_use_registry() {
    let registry = Arc::new(registry());
    registry
        .register("Base".to_string(), NamedLogger::new("base"))
        .unwrap();

    let inner = Arc::downgrade(&registry);
    registry
        .register_factory("Derived".to_string(), move || {
            let registry = inner.upgrade().unwrap();
            let base = registry.resolve("Base").unwrap();
            NamedLogger::new(&format!("{}-derived", base.name()))
        })
        .unwrap();

    // Would deadlock if the factory ran under the registry lock.
    assert_eq!(registry.resolve("Derived").unwrap().name(), "base-derived");
}

#[test]
fn test_clear() {
    let registry = registry();
    registry
        .register("A".to_string(), NamedLogger::new("a"))
        .unwrap();
    registry
        .register("B".to_string(), NamedLogger::new("b"))
        .unwrap();
    assert_eq!(registry.clear(), 2);
    assert!(registry.is_empty());
    assert!(registry.keys().is_empty());
}

#[test]
fn test_clear_counts_live_bindings_only() {
    let registry = registry();
    let weak = NamedLogger::new("weak");
    registry
        .register("Live".to_string(), NamedLogger::new("live"))
        .unwrap();
    registry.register_weak("Dead".to_string(), &weak).unwrap();
    drop(weak);

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.clear(), 1);
    assert!(registry.bindings.read().is_empty());
}

#[test]
fn test_oversized_capacity_does_not_panic() {
    let config = RegistryConfig {
        initial_capacity: usize::MAX,
        trace_lookups: false,
    };
    let registry: Registry<String, dyn Logger> = Registry::from_config(&config);
    registry
        .register("Logger".to_string(), NamedLogger::new("a"))
        .unwrap();
    assert_eq!(registry.len(), 1);

    let direct: Registry<String, dyn Logger> = Registry::with_capacity(usize::MAX);
    assert!(direct.is_empty());
}

#[test]
fn test_static_str_keys() {
    let registry: Registry<&'static str, dyn Logger> = Registry::new();
    registry.register("Logger", NamedLogger::new("a")).unwrap();
    assert_eq!(registry.resolve("Logger").unwrap().name(), "a");
    assert!(registry.unregister("Logger"));
    assert!(registry.register("", NamedLogger::new("b")).is_err());
}

#[test]
fn test_type_keys() {
    let registry: Registry<TypeKey, dyn Logger> = Registry::new();
    let key = TypeKey::of::<NamedLogger>();
    registry.register(key, NamedLogger::new("typed")).unwrap();
    assert_eq!(registry.resolve(&key).unwrap().name(), "typed");

    let err = registry.resolve(&TypeKey::of::<String>()).err().unwrap();
    assert!(err.key().contains("String"));
}
