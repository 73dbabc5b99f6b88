//! The in-memory model graph.
//!
//! The `Model` stores elements by ID; relationships are elements too and
//! carry their ends in [`RelationshipData`](super::RelationshipData).
//!
//! ```text
//! Model
//! ├── elements: IndexMap<ElementId, Element>  (preserves insertion order)
//! └── roots: Vec<ElementId>
//! ```
//!
//! Ownership follows KerML: a namespace owns memberships, and an owning
//! membership owns its member element.
//!
//! ```text
//! Namespace (root, anonymous)
//! └── OwningMembership
//!     └── Package "Vehicles"
//!         ├── NamespaceImport  (relationship — direct child, no wrapper)
//!         └── OwningMembership
//!             └── PartDefinition "Car"
//! ```

use indexmap::IndexMap;

use super::element::{Element, ElementId, ElementKind, RelationshipData};

/// A SysML/KerML model snapshot.
#[derive(Clone, Debug, Default)]
pub struct Model {
    /// All elements by ID (IndexMap preserves insertion order for deterministic traversal).
    pub elements: IndexMap<ElementId, Element>,
    /// Root element IDs (elements without an owner).
    pub roots: Vec<ElementId>,
}

impl Model {
    /// Create a new empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element to the model, returning its ID.
    ///
    /// Elements without an owner become roots. The owner's `owned_elements`
    /// list is not touched; callers building ownership by hand keep both
    /// ends in sync (see [`ModelBuilder`](super::ModelBuilder)).
    pub fn add_element(&mut self, element: Element) -> ElementId {
        let id = element.id.clone();
        if element.owner.is_none() && !self.roots.contains(&id) {
            self.roots.push(id.clone());
        }
        self.elements.insert(id.clone(), element);
        id
    }

    /// Get an element by ID.
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Get a mutable element by ID.
    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    /// Returns true if the model has an element with this ID.
    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Iterate over all elements.
    pub fn iter_elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    /// Iterate over root elements.
    pub fn iter_roots(&self) -> impl Iterator<Item = &Element> {
        self.roots.iter().filter_map(|id| self.elements.get(id))
    }

    /// Get the number of elements.
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Iterate over the elements directly owned by `id`, in declaration order.
    pub fn owned_elements<'a>(&'a self, id: &ElementId) -> impl Iterator<Item = &'a Element> {
        self.get(id)
            .into_iter()
            .flat_map(|e| e.owned_elements.iter())
            .filter_map(|child| self.get(child))
    }

    /// Wrap all direct non-relationship children of every namespace in
    /// `OwningMembership` or `FeatureMembership` intermediaries.
    ///
    /// The generated membership takes over the child's visibility and points
    /// from the parent to the child. Idempotent: children whose parent is
    /// already a membership are skipped, and so are children of
    /// relationships.
    pub fn wrap_children_in_memberships(&mut self) {
        let to_wrap: Vec<(ElementId, ElementKind, ElementId)> = self
            .elements
            .values()
            .filter(|e| !e.kind.is_relationship())
            .filter_map(|e| {
                let owner_id = e.owner.as_ref()?;
                let owner = self.elements.get(owner_id)?;
                (!owner.kind.is_relationship()).then(|| (e.id.clone(), e.kind, owner_id.clone()))
            })
            .collect();

        for (child_id, child_kind, parent_id) in to_wrap {
            let m_kind = ElementKind::membership_kind_for(child_kind);
            let m_id = ElementId::new(format!("{}-m", child_id.as_str()));

            let mut membership = Element::new(m_id.clone(), m_kind);
            membership.owner = Some(parent_id.clone());
            membership.owned_elements.push(child_id.clone());
            membership.relationship = Some(RelationshipData::new(parent_id.clone(), child_id.clone()));

            if let Some(child) = self.elements.get_mut(&child_id) {
                membership.visibility = child.visibility;
                child.owner = Some(m_id.clone());
            }

            if let Some(parent) = self.elements.get_mut(&parent_id) {
                if let Some(pos) = parent.owned_elements.iter().position(|id| *id == child_id) {
                    parent.owned_elements[pos] = m_id.clone();
                } else {
                    parent.owned_elements.push(m_id.clone());
                }
            }

            self.elements.insert(m_id, membership);
        }
    }
}
