//! Standalone model representation.
//!
//! The naming algorithms only need identities, names, the ownership tree and
//! a handful of relationships (memberships, imports, specializations). This
//! module provides exactly that, independent of any parser or database.
//!
//! ## Design
//!
//! Relationships are elements: a [`Membership`](ElementKind::Membership) has
//! an ID, an owner and owned elements like anything else, and additionally
//! carries [`RelationshipData`]. [`ElementView`] and [`MembershipView`] read
//! the same record in its element and relationship roles.

mod builder;
mod element;
mod error;
mod store;
pub mod views;

pub use builder::ModelBuilder;
pub use element::{Element, ElementId, ElementKind, RelationshipData, Visibility};
pub use error::ModelError;
pub use store::Model;
pub use views::{ElementView, MembershipView};
