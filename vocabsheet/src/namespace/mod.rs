//! Namespace-qualified name resolution

pub mod resolver;

pub use resolver::{resolve, resolve_node};
