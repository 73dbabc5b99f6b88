//! Ergonomic construction of a well-formed [`Model`].
//!
//! Every member is added through an owning membership, so the resulting
//! graph already follows the KerML ownership convention:
//!
//! ```ignore
//! let mut b = ModelBuilder::new();
//! let root = b.root_namespace();
//! let vehicles = b.package(&root, "Vehicles")?;
//! let car = b.member(&vehicles, ElementKind::PartDefinition, "Car", Visibility::Public)?;
//! let model = b.build();
//! ```

use std::sync::Arc;

use super::element::{Element, ElementId, ElementKind, Visibility};
use super::error::ModelError;
use super::store::Model;

/// Builds a [`Model`] one element at a time.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    model: Model,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an anonymous root namespace (one per "file").
    pub fn root_namespace(&mut self) -> ElementId {
        self.model
            .add_element(Element::new(ElementId::generate(), ElementKind::Namespace))
    }

    /// Add a public package named `name` to `parent`.
    pub fn package(&mut self, parent: &ElementId, name: &str) -> Result<ElementId, ModelError> {
        self.member(parent, ElementKind::Package, name, Visibility::Public)
    }

    /// Add a named member of `kind` to `parent` through a new owning
    /// membership with the given visibility. Returns the member's ID.
    pub fn member(
        &mut self,
        parent: &ElementId,
        kind: ElementKind,
        name: &str,
        visibility: Visibility,
    ) -> Result<ElementId, ModelError> {
        let element = Element::new(ElementId::generate(), kind).with_name(name);
        self.owned_member(parent, element, visibility)
    }

    /// Add an unnamed public member of `kind` to `parent`.
    pub fn anonymous_member(
        &mut self,
        parent: &ElementId,
        kind: ElementKind,
    ) -> Result<ElementId, ModelError> {
        let element = Element::new(ElementId::generate(), kind);
        self.owned_member(parent, element, Visibility::Public)
    }

    /// Add a fully specified element to `parent` through a new owning
    /// membership. The element's own owner and visibility are overwritten.
    pub fn owned_member(
        &mut self,
        parent: &ElementId,
        mut element: Element,
        visibility: Visibility,
    ) -> Result<ElementId, ModelError> {
        self.require_namespace(parent)?;
        if self.model.contains(&element.id) {
            return Err(ModelError::DuplicateElement(element.id));
        }

        let member_id = element.id.clone();
        let membership_id = ElementId::generate();
        let membership = Element::new_relationship(
            membership_id.clone(),
            ElementKind::membership_kind_for(element.kind),
            parent.clone(),
            member_id.clone(),
        )
        .with_owner(parent.clone())
        .with_owned(member_id.clone())
        .with_visibility(visibility);

        element.owner = Some(membership_id.clone());
        element.visibility = Visibility::Public;

        self.attach(parent, &membership_id)?;
        self.model.add_element(membership);
        self.model.add_element(element);
        Ok(member_id)
    }

    /// Add a non-owning alias membership `alias <name> for <target>` to
    /// `parent`. Returns the membership's ID.
    pub fn alias(
        &mut self,
        parent: &ElementId,
        name: &str,
        target: &ElementId,
        visibility: Visibility,
    ) -> Result<ElementId, ModelError> {
        self.require_namespace(parent)?;
        self.require(target)?;
        let membership = Element::new_relationship(
            ElementId::generate(),
            ElementKind::Membership,
            parent.clone(),
            target.clone(),
        )
        .with_name(name)
        .with_owner(parent.clone())
        .with_visibility(visibility);
        self.add_owned_relationship(parent, membership)
    }

    /// Add `import <imported>::*;` to `namespace`.
    pub fn namespace_import(
        &mut self,
        namespace: &ElementId,
        imported: &ElementId,
        visibility: Visibility,
    ) -> Result<ElementId, ModelError> {
        self.import(namespace, ElementKind::NamespaceImport, imported, visibility, false)
    }

    /// Add `import <membership>;` to `namespace`.
    pub fn membership_import(
        &mut self,
        namespace: &ElementId,
        membership: &ElementId,
        visibility: Visibility,
    ) -> Result<ElementId, ModelError> {
        self.import(namespace, ElementKind::MembershipImport, membership, visibility, false)
    }

    /// Add an import of the given kind; `recursive` gives `::**`.
    pub fn import(
        &mut self,
        namespace: &ElementId,
        kind: ElementKind,
        target: &ElementId,
        visibility: Visibility,
        recursive: bool,
    ) -> Result<ElementId, ModelError> {
        self.require_namespace(namespace)?;
        match kind {
            ElementKind::NamespaceImport => self.require_namespace(target)?,
            ElementKind::MembershipImport => self.require_membership(target)?,
            _ => {
                return Err(ModelError::invalid_relationship(
                    kind,
                    "not an import kind",
                ));
            }
        }
        let mut import =
            Element::new_relationship(ElementId::generate(), kind, namespace.clone(), target.clone())
                .with_owner(namespace.clone())
                .with_visibility(visibility);
        import.is_recursive = recursive;
        self.add_owned_relationship(namespace, import)
    }

    /// `specific :> general` between types.
    pub fn specialization(
        &mut self,
        specific: &ElementId,
        general: &ElementId,
    ) -> Result<ElementId, ModelError> {
        self.specialize(ElementKind::Specialization, specific, general)
    }

    /// `feature : type`.
    pub fn typing(&mut self, feature: &ElementId, ty: &ElementId) -> Result<ElementId, ModelError> {
        self.specialize(ElementKind::FeatureTyping, feature, ty)
    }

    /// `feature :> subsetted`.
    pub fn subsetting(
        &mut self,
        feature: &ElementId,
        subsetted: &ElementId,
    ) -> Result<ElementId, ModelError> {
        self.specialize(ElementKind::Subsetting, feature, subsetted)
    }

    /// `feature :>> redefined`.
    pub fn redefinition(
        &mut self,
        feature: &ElementId,
        redefined: &ElementId,
    ) -> Result<ElementId, ModelError> {
        self.specialize(ElementKind::Redefinition, feature, redefined)
    }

    fn specialize(
        &mut self,
        kind: ElementKind,
        specific: &ElementId,
        general: &ElementId,
    ) -> Result<ElementId, ModelError> {
        let specific_kind = self.require(specific)?.kind;
        let general_kind = self.require(general)?.kind;
        let is_type = |k: ElementKind| k.is_definition() || k.is_feature_kind();
        if !is_type(specific_kind) || !is_type(general_kind) {
            return Err(ModelError::invalid_relationship(
                kind,
                format!("{specific} and {general} must both be types"),
            ));
        }
        if kind != ElementKind::Specialization && !specific_kind.is_feature_kind() {
            return Err(ModelError::invalid_relationship(
                kind,
                format!("{specific} is not a feature"),
            ));
        }
        let rel = Element::new_relationship(ElementId::generate(), kind, specific.clone(), general.clone())
            .with_owner(specific.clone());
        self.add_owned_relationship(specific, rel)
    }

    /// Insert a raw element. If it names an owner, it is appended to the
    /// owner's owned elements; [`build`](Self::build) wraps such direct
    /// children in memberships.
    pub fn element(&mut self, element: Element) -> Result<ElementId, ModelError> {
        if self.model.contains(&element.id) {
            return Err(ModelError::DuplicateElement(element.id));
        }
        if let Some(owner) = element.owner.clone() {
            self.attach(&owner, &element.id)?;
        }
        Ok(self.model.add_element(element))
    }

    /// Mutable access to an element already added.
    pub fn element_mut(&mut self, id: &ElementId) -> Result<&mut Element, ModelError> {
        self.model
            .get_mut(id)
            .ok_or_else(|| ModelError::UnknownElement(id.clone()))
    }

    /// Set the declared short name of an element.
    pub fn short_name(&mut self, id: &ElementId, short_name: &str) -> Result<(), ModelError> {
        self.element_mut(id)?.short_name = Some(Arc::from(short_name));
        Ok(())
    }

    /// The owning membership of a member added through this builder.
    pub fn membership_of(&self, member: &ElementId) -> Option<ElementId> {
        let owner = self.model.get(member)?.owner.as_ref()?;
        self.model
            .get(owner)
            .filter(|e| e.kind.is_membership())
            .map(|e| e.id.clone())
    }

    /// Read access to the model under construction.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Finish building. Directly owned children added with
    /// [`element`](Self::element) are wrapped in memberships.
    pub fn build(mut self) -> Model {
        self.model.wrap_children_in_memberships();
        self.model
    }

    fn add_owned_relationship(
        &mut self,
        owner: &ElementId,
        rel: Element,
    ) -> Result<ElementId, ModelError> {
        let id = rel.id.clone();
        self.attach(owner, &id)?;
        self.model.add_element(rel);
        Ok(id)
    }

    fn attach(&mut self, owner: &ElementId, child: &ElementId) -> Result<(), ModelError> {
        let owner = self.element_mut(owner)?;
        owner.owned_elements.push(child.clone());
        Ok(())
    }

    fn require(&self, id: &ElementId) -> Result<&Element, ModelError> {
        self.model
            .get(id)
            .ok_or_else(|| ModelError::UnknownElement(id.clone()))
    }

    fn require_namespace(&self, id: &ElementId) -> Result<(), ModelError> {
        if self.require(id)?.kind.is_namespace() {
            Ok(())
        } else {
            Err(ModelError::NotANamespace(id.clone()))
        }
    }

    fn require_membership(&self, id: &ElementId) -> Result<(), ModelError> {
        if self.require(id)?.kind.is_membership() {
            Ok(())
        } else {
            Err(ModelError::NotAMembership(id.clone()))
        }
    }
}
