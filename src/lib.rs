//! # syster-names
//!
//! Shortest unambiguous names for SysML v2 and KerML model elements.
//!
//! Given an element and the place where a reference to it is written, the
//! [`Deresolver`] finds the shortest name that resolves back to that element
//! from there. [`NameConflictFilter`] suppresses members whose names would
//! shadow earlier ones when listing a namespace.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! labels, compartment → Label text and diagram compartments
//!   ↓
//! deresolve           → Deresolver, session caches
//!   ↓
//! conflict            → NameConflictFilter
//!   ↓
//! scope               → Visibility, resolution, NamingEnvironment
//!   ↓
//! names               → Printable and qualified names, reserved words
//!   ↓
//! model               → Elements, memberships, views, builder
//! ```

// ============================================================================
// MODULES (dependency order: model → names → scope → conflict → deresolve)
// ============================================================================

/// Model snapshot: elements, memberships, relationships
pub mod model;

/// Name spelling: reserved words, quoting, qualified names
pub mod names;

/// Visible memberships, name resolution, deresolving namespaces
pub mod scope;

/// Per-pass name-clash filter
pub mod conflict;

/// Shortest unambiguous names
pub mod deresolve;

/// Inherited compartment items
pub mod compartment;

/// Reference text for labels and export
pub mod labels;

pub use conflict::NameConflictFilter;
pub use deresolve::{Deresolver, DeresolverOptions};
pub use model::{Element, ElementId, ElementKind, ElementView, MembershipView, Model, ModelError};
pub use scope::{ModelScopes, NamingEnvironment};
