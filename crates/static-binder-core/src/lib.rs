//! # Static Binder Core
//!
//! Binding registry implementation for the static-binder workspace.
//!
//! ## Components
//!
//! - [`Registry`] - Thread-safe key to implementation mapping
//! - [`Binding`] - How an implementation is held (shared, weak, or factory)
//! - [`Keys`] - Snapshot of the keys bound at a point in time
//! - [`StaticBinder`] - Registry keyed by the implementation's type
//! - [`BinderScopes`] - Named, independently owned binders

pub mod binder;
pub mod registry;
pub mod scopes;

pub use binder::StaticBinder;
pub use registry::{Binding, Keys, Registry};
pub use scopes::BinderScopes;
