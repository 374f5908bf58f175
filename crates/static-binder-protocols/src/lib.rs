//! # Static Binder Protocols
//!
//! Shared definitions for the static-binder workspace.
//! Contains only interface definitions - no registry implementation.
//!
//! ## Core Items
//!
//! - [`BindingKey`] - Trait for values that can name a binding
//! - [`TypeKey`] - Type descriptor used to bind implementations by type
//! - [`BinderError`] - Error type for all registry operations

pub mod error;
pub mod key;

pub use error::{BinderError, BinderResult};
pub use key::{validate_name, BindingKey, TypeKey};
