//! # static-binder
//!
//! Bind an abstract capability to a concrete implementation once, then
//! resolve it from anywhere that holds the registry.
//!
//! ## Crates
//!
//! - `static-binder-protocols` - Keys and the [`BinderError`] taxonomy
//! - `static-binder-core` - [`Registry`], [`StaticBinder`] and [`BinderScopes`]
//! - `static-binder-config` - TOML configuration for registries and scopes
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use static_binder::{BinderError, Registry};
//!
//! trait Logger: Send + Sync {
//!     fn log(&self, line: &str) -> String;
//! }
//!
//! struct Prefixed(&'static str);
//!
//! impl Logger for Prefixed {
//!     fn log(&self, line: &str) -> String {
//!         format!("{} {}", self.0, line)
//!     }
//! }
//!
//! let registry: Registry<String, dyn Logger> = Registry::new();
//! registry.register("Logger".to_string(), Arc::new(Prefixed("[a]"))).unwrap();
//! assert_eq!(registry.resolve("Logger").unwrap().log("hi"), "[a] hi");
//!
//! registry.replace("Logger".to_string(), Arc::new(Prefixed("[b]"))).unwrap();
//! assert_eq!(registry.resolve("Logger").unwrap().log("hi"), "[b] hi");
//!
//! assert!(registry.unregister("Logger"));
//! assert!(matches!(registry.resolve("Logger"), Err(BinderError::UnboundKey(_))));
//! ```

pub use static_binder_config::{
    BinderConfig, ConfigError, ConfigLoader, ConfigValidator, RegistryConfig, ScopesConfig,
};
pub use static_binder_core::{BinderScopes, Binding, Keys, Registry, StaticBinder};
pub use static_binder_protocols::{BinderError, BinderResult, BindingKey, TypeKey};
