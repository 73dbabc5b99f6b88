//! Error types for model construction.

use thiserror::Error;

use super::element::{ElementId, ElementKind};

/// Errors that can occur while building a [`Model`](super::Model).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Reference to an element that is not in the model.
    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    /// An element with this ID already exists.
    #[error("Duplicate element: {0}")]
    DuplicateElement(ElementId),

    /// The element was used as an owner or import target but cannot own members.
    #[error("Not a namespace: {0}")]
    NotANamespace(ElementId),

    /// The element was used as a membership but is not one.
    #[error("Not a membership: {0}")]
    NotAMembership(ElementId),

    /// Relationship ends that the metamodel does not allow.
    #[error("Invalid {kind:?}: {message}")]
    InvalidRelationship { kind: ElementKind, message: String },
}

impl ModelError {
    /// Create an invalid relationship error.
    pub fn invalid_relationship(kind: ElementKind, message: impl Into<String>) -> Self {
        Self::InvalidRelationship {
            kind,
            message: message.into(),
        }
    }
}
