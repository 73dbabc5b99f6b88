//! Deresolver tests
//!
//! - Names relative to enclosing packages
//! - Visibility boundaries along the outward walk
//! - Fallback on name clashes
//! - Imports and aliases
//! - Round-trip, idempotence and parallel determinism
//! - Labels built from deresolved names

pub mod tests_imports_and_aliases;
pub mod tests_labels;
pub mod tests_properties;
pub mod tests_relative_names;
