//! Typed views over [`Model`].
//!
//! A membership is both a relationship and an element. Rather than model
//! that as inheritance, the same [`Element`] record is read through two
//! borrowed views:
//!
//! - [`ElementView`] — the element role: identity, names, containment
//!   parent, owning membership and namespace, owned memberships.
//! - [`MembershipView`] — the relationship role: owning namespace, member
//!   element, member name and visibility.
//!
//! ```ignore
//! let view = ElementView::from_id(&id, &model)?;
//! for membership in view.owned_memberships() {
//!     println!("{:?} {:?}", membership.visibility(), membership.member_name());
//! }
//! ```

use rustc_hash::FxHashSet;

use super::element::{Element, ElementId, ElementKind, Visibility};
use super::store::Model;

// ============================================================================
// ELEMENT VIEW
// ============================================================================

/// A borrowed view over any model element.
#[derive(Clone, Copy)]
pub struct ElementView<'m> {
    pub element: &'m Element,
    pub model: &'m Model,
}

impl std::fmt::Debug for ElementView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementView")
            .field("id", &self.element.id)
            .field("kind", &self.element.kind)
            .field("name", &self.element.name)
            .finish()
    }
}

impl PartialEq for ElementView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.element.id == other.element.id
    }
}

impl Eq for ElementView<'_> {}

impl<'m> ElementView<'m> {
    /// Create a new view over an element.
    pub fn new(element: &'m Element, model: &'m Model) -> Self {
        Self { element, model }
    }

    /// Create a view from an element ID. Returns None if the ID is not in the model.
    pub fn from_id(id: &ElementId, model: &'m Model) -> Option<Self> {
        model.get(id).map(|element| Self { element, model })
    }

    // ── Identity ────────────────────────────────────────────────────

    pub fn id(&self) -> &'m ElementId {
        &self.element.id
    }

    pub fn kind(&self) -> ElementKind {
        self.element.kind
    }

    /// The declared name (may be None for anonymous elements).
    pub fn declared_name(&self) -> Option<&'m str> {
        self.element.name.as_deref()
    }

    /// The declared short name (`<R10>`).
    pub fn declared_short_name(&self) -> Option<&'m str> {
        self.element.short_name.as_deref()
    }

    /// The name used to refer to this element.
    ///
    /// A feature without a declared name takes the effective name of the
    /// first feature it redefines.
    pub fn effective_name(&self) -> Option<&'m str> {
        self.effective(|view| view.declared_name())
    }

    /// The short name used to refer to this element, following the same
    /// redefinition rule as [`effective_name`](Self::effective_name).
    pub fn effective_short_name(&self) -> Option<&'m str> {
        self.effective(|view| view.declared_short_name())
    }

    fn effective(&self, declared: impl Fn(&ElementView<'m>) -> Option<&'m str>) -> Option<&'m str> {
        let mut visited = FxHashSet::default();
        let mut current = *self;
        loop {
            if let Some(name) = declared(&current) {
                return Some(name);
            }
            if !current.kind().is_feature_kind() || !visited.insert(current.id()) {
                return None;
            }
            current = current.redefined_features().into_iter().next()?;
        }
    }

    pub fn is_namespace(&self) -> bool {
        self.element.kind.is_namespace()
    }

    /// The relationship-role view, if this element is a membership.
    pub fn as_membership(&self) -> Option<MembershipView<'m>> {
        MembershipView::new(self.element, self.model)
    }

    // ── Ownership navigation ────────────────────────────────────────

    /// The containment parent (None for root elements).
    pub fn owner(&self) -> Option<ElementView<'m>> {
        self.element
            .owner
            .as_ref()
            .and_then(|id| Self::from_id(id, self.model))
    }

    /// The membership that owns this element, if its parent is one.
    pub fn owning_membership(&self) -> Option<MembershipView<'m>> {
        self.owner().and_then(|owner| owner.as_membership())
    }

    /// The namespace this element is a member of.
    ///
    /// Looks through the owning membership; an element owned directly by a
    /// namespace (unwrapped model) reports that namespace.
    pub fn owning_namespace(&self) -> Option<ElementView<'m>> {
        let owner = self.owner()?;
        let namespace = if owner.kind().is_membership() {
            owner.owner()?
        } else {
            owner
        };
        namespace.is_namespace().then_some(namespace)
    }

    /// Containment ancestors, nearest first.
    ///
    /// Stops if the owner chain loops back on itself.
    pub fn ancestors(&self) -> Vec<ElementView<'m>> {
        let mut seen = FxHashSet::default();
        seen.insert(self.id());
        let mut result = Vec::new();
        let mut current = self.owner();
        while let Some(view) = current {
            if !seen.insert(view.id()) {
                break;
            }
            result.push(view);
            current = view.owner();
        }
        result
    }

    /// All directly owned elements (including relationship elements).
    pub fn owned_elements(&self) -> Vec<ElementView<'m>> {
        self.model
            .owned_elements(self.id())
            .map(|element| Self::new(element, self.model))
            .collect()
    }

    /// Memberships owned by this namespace, in declaration order.
    pub fn owned_memberships(&self) -> Vec<MembershipView<'m>> {
        self.model
            .owned_elements(self.id())
            .filter_map(|element| MembershipView::new(element, self.model))
            .collect()
    }

    /// Imports owned by this namespace, in declaration order.
    pub fn owned_imports(&self) -> Vec<ElementView<'m>> {
        self.owned_elements()
            .into_iter()
            .filter(|view| view.kind().is_import())
            .collect()
    }

    // ── Relationships ───────────────────────────────────────────────

    /// The first source end, for relationship elements.
    pub fn source(&self) -> Option<ElementView<'m>> {
        self.element
            .source()
            .and_then(|id| Self::from_id(id, self.model))
    }

    /// The first target end, for relationship elements.
    pub fn target(&self) -> Option<ElementView<'m>> {
        self.element
            .target()
            .and_then(|id| Self::from_id(id, self.model))
    }

    /// Specialization-family relationships owned by this type.
    pub fn owned_specializations(&self) -> Vec<ElementView<'m>> {
        self.owned_elements()
            .into_iter()
            .filter(|view| view.kind().is_specialization())
            .collect()
    }

    /// Owned relationships of exactly this kind.
    pub fn owned_relationships_of_kind(&self, kind: ElementKind) -> Vec<ElementView<'m>> {
        self.owned_elements()
            .into_iter()
            .filter(|view| view.kind() == kind)
            .collect()
    }

    /// The types this type specializes, in relationship order.
    pub fn general_types(&self) -> Vec<ElementView<'m>> {
        self.owned_specializations()
            .into_iter()
            .filter_map(|rel| rel.target())
            .collect()
    }

    /// The features this feature redefines.
    pub fn redefined_features(&self) -> Vec<ElementView<'m>> {
        self.owned_relationships_of_kind(ElementKind::Redefinition)
            .into_iter()
            .filter_map(|rel| rel.target())
            .collect()
    }
}

// ============================================================================
// MEMBERSHIP VIEW
// ============================================================================

/// The relationship role of a membership element.
#[derive(Clone, Copy)]
pub struct MembershipView<'m> {
    pub membership: &'m Element,
    pub model: &'m Model,
}

impl std::fmt::Debug for MembershipView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MembershipView")
            .field("id", &self.membership.id)
            .field("member_name", &self.member_name())
            .field("visibility", &self.visibility())
            .finish()
    }
}

impl PartialEq for MembershipView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.membership.id == other.membership.id
    }
}

impl Eq for MembershipView<'_> {}

impl<'m> MembershipView<'m> {
    /// View `element` as a membership. Returns None for other kinds.
    pub fn new(element: &'m Element, model: &'m Model) -> Option<Self> {
        element.kind.is_membership().then_some(Self {
            membership: element,
            model,
        })
    }

    /// Create a view from a membership ID.
    pub fn from_id(id: &ElementId, model: &'m Model) -> Option<Self> {
        model.get(id).and_then(|element| Self::new(element, model))
    }

    pub fn id(&self) -> &'m ElementId {
        &self.membership.id
    }

    pub fn visibility(&self) -> Visibility {
        self.membership.visibility
    }

    /// The element role of this membership.
    pub fn element(&self) -> ElementView<'m> {
        ElementView::new(self.membership, self.model)
    }

    /// The namespace that owns this membership.
    pub fn membership_owning_namespace(&self) -> Option<ElementView<'m>> {
        self.element()
            .owner()
            .filter(|owner| owner.is_namespace())
    }

    /// The member element.
    ///
    /// Uses the relationship target when present, otherwise the first owned
    /// non-relationship element (unwrapped owning memberships).
    pub fn member_element(&self) -> Option<ElementView<'m>> {
        if let Some(target) = self.element().target() {
            return Some(target);
        }
        self.element()
            .owned_elements()
            .into_iter()
            .find(|child| !child.kind().is_relationship())
    }

    /// The name under which the member is visible.
    ///
    /// An alias membership carries its own name; otherwise this is the
    /// member element's effective name.
    pub fn member_name(&self) -> Option<&'m str> {
        if !self.membership.kind.is_owning_membership() {
            if let Some(alias) = self.membership.name.as_deref() {
                return Some(alias);
            }
        }
        self.member_element()?.effective_name()
    }

    /// The short name under which the member is visible.
    pub fn member_short_name(&self) -> Option<&'m str> {
        if !self.membership.kind.is_owning_membership() {
            if let Some(alias) = self.membership.short_name.as_deref() {
                return Some(alias);
            }
        }
        self.member_element()?.effective_short_name()
    }
}
