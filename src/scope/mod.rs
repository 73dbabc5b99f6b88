//! Scoping: visibility, name resolution and the namespace a reference is
//! written from.
//!
//! [`NamingEnvironment`] is the query surface the deresolver runs against.
//! [`ModelScopes`] implements it over a [`Model`]; other hosts (a database
//! with its own symbol tables, a test double) can implement it directly.

mod deresolving;
mod resolve;
mod visibility;

pub use deresolving::deresolving_namespace;
pub use resolve::resolve;
pub use visibility::{
    VisibilityFilter, inherited_memberships, visible_memberships, visible_memberships_with,
};

use crate::model::{ElementId, ElementView, MembershipView, Model};
use crate::names;

// =============================================================================
// NamingEnvironment trait
// =============================================================================

/// The model queries needed to compute and check names.
///
/// All queries are by identity and must be pure for the lifetime of a
/// deresolution session: the same arguments give the same answer, and the
/// order of [`visible_memberships`](Self::visible_memberships) is stable.
pub trait NamingEnvironment {
    // -----------------------------------------------------------------
    // Element role
    // -----------------------------------------------------------------

    /// The containment parent.
    fn parent(&self, element: &ElementId) -> Option<ElementId>;

    /// The membership owning `element`, if its parent is one.
    fn owning_membership(&self, element: &ElementId) -> Option<ElementId>;

    /// The namespace `element` is a member of.
    fn owning_namespace(&self, element: &ElementId) -> Option<ElementId>;

    /// The effective name.
    fn name(&self, element: &ElementId) -> Option<String>;

    /// The absolute qualified name, already in printable form.
    fn qualified_name(&self, element: &ElementId) -> Option<String>;

    fn is_membership(&self, element: &ElementId) -> bool;

    // -----------------------------------------------------------------
    // Membership role
    // -----------------------------------------------------------------

    /// The element a membership makes visible.
    fn member_element(&self, membership: &ElementId) -> Option<ElementId>;

    /// The name under which a membership makes its member visible.
    fn member_name(&self, membership: &ElementId) -> Option<String>;

    // -----------------------------------------------------------------
    // Scope queries
    // -----------------------------------------------------------------

    /// Memberships visible from `namespace`, in a stable order.
    fn visible_memberships(&self, namespace: &ElementId, include_private: bool) -> Vec<ElementId>;

    /// The namespace from which a reference at `context` is resolved.
    fn deresolving_namespace(&self, context: &ElementId) -> Option<ElementId>;

    /// The membership `name` denotes when written in `namespace`.
    fn resolve(&self, namespace: &ElementId, name: &str) -> Option<ElementId>;
}

// =============================================================================
// ModelScopes
// =============================================================================

/// [`NamingEnvironment`] over an in-memory [`Model`].
#[derive(Clone, Copy, Debug)]
pub struct ModelScopes<'m> {
    model: &'m Model,
}

impl<'m> ModelScopes<'m> {
    pub fn new(model: &'m Model) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &'m Model {
        self.model
    }

    fn view(&self, id: &ElementId) -> Option<ElementView<'m>> {
        ElementView::from_id(id, self.model)
    }

    fn membership(&self, id: &ElementId) -> Option<MembershipView<'m>> {
        MembershipView::from_id(id, self.model)
    }
}

impl NamingEnvironment for ModelScopes<'_> {
    fn parent(&self, element: &ElementId) -> Option<ElementId> {
        self.view(element)?.owner().map(|v| v.id().clone())
    }

    fn owning_membership(&self, element: &ElementId) -> Option<ElementId> {
        self.view(element)?
            .owning_membership()
            .map(|m| m.id().clone())
    }

    fn owning_namespace(&self, element: &ElementId) -> Option<ElementId> {
        self.view(element)?
            .owning_namespace()
            .map(|v| v.id().clone())
    }

    fn name(&self, element: &ElementId) -> Option<String> {
        self.view(element)?.effective_name().map(str::to_string)
    }

    fn qualified_name(&self, element: &ElementId) -> Option<String> {
        names::qualified_name(self.view(element)?)
    }

    fn is_membership(&self, element: &ElementId) -> bool {
        self.model
            .get(element)
            .is_some_and(|e| e.kind.is_membership())
    }

    fn member_element(&self, membership: &ElementId) -> Option<ElementId> {
        self.membership(membership)?
            .member_element()
            .map(|v| v.id().clone())
    }

    fn member_name(&self, membership: &ElementId) -> Option<String> {
        self.membership(membership)?
            .member_name()
            .map(str::to_string)
    }

    fn visible_memberships(&self, namespace: &ElementId, include_private: bool) -> Vec<ElementId> {
        visible_memberships(self.model, namespace, include_private)
    }

    fn deresolving_namespace(&self, context: &ElementId) -> Option<ElementId> {
        deresolving_namespace(self.model, context)
    }

    fn resolve(&self, namespace: &ElementId, name: &str) -> Option<ElementId> {
        resolve(self.model, namespace, name)
    }
}
