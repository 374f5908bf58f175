//! Binding registry and its supporting types.

mod base;
mod binding;
mod keys;

pub use base::Registry;
pub use binding::{Binding, Factory};
pub use keys::{Keys, KeysIntoIter};
