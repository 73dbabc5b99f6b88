//! Element identities, metaclass kinds, and the element record itself.

use std::sync::Arc;

// ============================================================================
// IDs
// ============================================================================

/// Unique identifier for a model element.
///
/// This corresponds to `elementId` in the SysML v2 API and `xmi:id` in XMI.
/// Identity is the only thing the deresolution caches key on.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub Arc<str>);

impl ElementId {
    /// Create a new element ID.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Generate a new UUID v4 based ID.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string().into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&ElementId> for ElementId {
    fn from(id: &ElementId) -> Self {
        id.clone()
    }
}

// ============================================================================
// ELEMENT KINDS
// ============================================================================

/// The metatype of a model element.
///
/// A reduced set of SysML v2 / KerML metaclasses: enough to express the
/// namespace, membership, import and specialization structure that naming
/// depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    // Namespaces and Packages
    Namespace,
    Package,
    LibraryPackage,

    // KerML Classifiers
    Class,
    DataType,
    Structure,
    Behavior,
    Function,

    // SysML Definitions
    PartDefinition,
    ItemDefinition,
    ActionDefinition,
    PortDefinition,
    AttributeDefinition,
    RequirementDefinition,
    EnumerationDefinition,

    // SysML Usages
    PartUsage,
    ItemUsage,
    ActionUsage,
    PortUsage,
    AttributeUsage,
    RequirementUsage,
    ReferenceUsage,

    // KerML Features
    Feature,

    // Memberships
    Membership,
    OwningMembership,
    FeatureMembership,

    // Imports
    NamespaceImport,
    MembershipImport,

    // Specializations
    Specialization,
    FeatureTyping,
    Subsetting,
    Redefinition,

    // Annotations
    Comment,
    Documentation,

    // Generic
    Other,
}

impl ElementKind {
    /// Returns true if this is a definition (type-like).
    pub fn is_definition(&self) -> bool {
        matches!(
            self,
            Self::Class
                | Self::DataType
                | Self::Structure
                | Self::Behavior
                | Self::Function
                | Self::PartDefinition
                | Self::ItemDefinition
                | Self::ActionDefinition
                | Self::PortDefinition
                | Self::AttributeDefinition
                | Self::RequirementDefinition
                | Self::EnumerationDefinition
        )
    }

    /// Returns true if this is a usage (instance-like).
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::PartUsage
                | Self::ItemUsage
                | Self::ActionUsage
                | Self::PortUsage
                | Self::AttributeUsage
                | Self::RequirementUsage
                | Self::ReferenceUsage
        )
    }

    /// Returns true if this element kind is a Feature (or Feature subtype).
    pub fn is_feature_kind(&self) -> bool {
        self.is_usage() || matches!(self, Self::Feature)
    }

    /// Returns true if elements of this kind can own memberships.
    pub fn is_namespace(&self) -> bool {
        matches!(
            self,
            Self::Namespace | Self::Package | Self::LibraryPackage
        ) || self.is_definition()
            || self.is_feature_kind()
    }

    /// Returns true if this is a relationship.
    pub fn is_relationship(&self) -> bool {
        self.is_membership() || self.is_import() || self.is_specialization()
    }

    /// Returns true for every membership kind, including non-owning
    /// (alias) memberships.
    pub fn is_membership(&self) -> bool {
        matches!(
            self,
            Self::Membership | Self::OwningMembership | Self::FeatureMembership
        )
    }

    /// Returns true if this membership kind owns its member element.
    ///
    /// Owning memberships are transparent containers: the member element is
    /// an owned child of the membership.
    pub fn is_owning_membership(&self) -> bool {
        matches!(self, Self::OwningMembership | Self::FeatureMembership)
    }

    /// Returns true for namespace and membership imports.
    pub fn is_import(&self) -> bool {
        matches!(self, Self::NamespaceImport | Self::MembershipImport)
    }

    /// Returns true for the relationships through which a type inherits
    /// the members of a more general type.
    pub fn is_specialization(&self) -> bool {
        matches!(
            self,
            Self::Specialization | Self::FeatureTyping | Self::Subsetting | Self::Redefinition
        )
    }

    /// Pick the appropriate membership kind for wrapping this child element.
    ///
    /// Returns `FeatureMembership` if the child is a Feature subtype,
    /// otherwise `OwningMembership`.
    pub fn membership_kind_for(child_kind: ElementKind) -> ElementKind {
        if child_kind.is_feature_kind() {
            Self::FeatureMembership
        } else {
            Self::OwningMembership
        }
    }
}

// ============================================================================
// ELEMENT
// ============================================================================

/// Visibility of a membership or import.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Private,
    Protected,
}

impl Visibility {
    /// The SysML keyword, or `None` for the implicit `public`.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Self::Public => None,
            Self::Private => Some("private"),
            Self::Protected => Some("protected"),
        }
    }
}

/// Relationship-specific data stored on an `Element`.
///
/// For memberships the source is the owning namespace and the target is the
/// member element. For imports the target is the imported namespace or
/// membership. For specializations the source is the specific type and the
/// target the general one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationshipData {
    /// Source element(s) of the relationship.
    pub source: Vec<ElementId>,
    /// Target element(s) of the relationship.
    pub target: Vec<ElementId>,
}

impl RelationshipData {
    /// Create relationship data with a single source and target.
    pub fn new(source: impl Into<ElementId>, target: impl Into<ElementId>) -> Self {
        Self {
            source: vec![source.into()],
            target: vec![target.into()],
        }
    }

    /// Get the first source element ID, if any.
    pub fn source(&self) -> Option<&ElementId> {
        self.source.first()
    }

    /// Get the first target element ID, if any.
    pub fn target(&self) -> Option<&ElementId> {
        self.target.first()
    }
}

/// A model element.
///
/// Relationships (memberships, imports, specializations) are elements too;
/// they carry [`RelationshipData`].
#[derive(Clone, Debug)]
pub struct Element {
    /// Unique identifier.
    pub id: ElementId,
    /// The metatype.
    pub kind: ElementKind,
    /// The declared name (may be None for anonymous elements).
    ///
    /// On a non-owning membership this is the alias name.
    pub name: Option<Arc<str>>,
    /// Short name alias (`<R10>`).
    pub short_name: Option<Arc<str>>,
    /// The owning element's ID (None for root elements).
    pub owner: Option<ElementId>,
    /// IDs of directly owned elements, in declaration order.
    pub owned_elements: Vec<ElementId>,
    /// Visibility; meaningful on memberships and imports only.
    pub visibility: Visibility,
    /// Whether an import is recursive (`import X::**`).
    pub is_recursive: bool,
    /// Relationship-specific data (source/target).
    pub relationship: Option<RelationshipData>,
}

impl Element {
    /// Create a new element with the given ID and kind.
    pub fn new(id: impl Into<ElementId>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            name: None,
            short_name: None,
            owner: None,
            owned_elements: Vec::new(),
            visibility: Visibility::Public,
            is_recursive: false,
            relationship: None,
        }
    }

    /// Create a new relationship element with the given source and target.
    pub fn new_relationship(
        id: impl Into<ElementId>,
        kind: ElementKind,
        source: impl Into<ElementId>,
        target: impl Into<ElementId>,
    ) -> Self {
        Self {
            relationship: Some(RelationshipData::new(source, target)),
            ..Self::new(id, kind)
        }
    }

    /// Get the first source element ID (convenience for relationship elements).
    pub fn source(&self) -> Option<&ElementId> {
        self.relationship.as_ref()?.source()
    }

    /// Get the first target element ID (convenience for relationship elements).
    pub fn target(&self) -> Option<&ElementId> {
        self.relationship.as_ref()?.target()
    }

    /// Set the name.
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the short name.
    pub fn with_short_name(mut self, short_name: impl Into<Arc<str>>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    /// Set the owner.
    pub fn with_owner(mut self, owner: impl Into<ElementId>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Add an owned element ID.
    pub fn with_owned(mut self, owned: impl Into<ElementId>) -> Self {
        self.owned_elements.push(owned.into());
        self
    }

    /// Set the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Mark an import as recursive.
    pub fn recursive(mut self) -> Self {
        self.is_recursive = true;
        self
    }
}
