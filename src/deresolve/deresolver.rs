//! The deresolution walk.

use std::sync::Arc;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use super::ancestors::AncestorSet;
use super::cache::{CacheStats, SessionCaches};
use super::options::DeresolverOptions;
use crate::model::ElementId;
use crate::names::{QUALIFIED_NAME_SEPARATOR, printable_name};
use crate::scope::NamingEnvironment;

/// Computes the shortest name under which an element can be referenced
/// from a given context.
///
/// The model behind the environment must not change while a deresolver is
/// in use: visible memberships, qualified names and deresolved names are
/// cached for the whole session.
///
/// ```
/// use syster_names::deresolve::Deresolver;
/// use syster_names::model::{ElementKind, ModelBuilder, Visibility};
/// use syster_names::scope::ModelScopes;
///
/// let mut b = ModelBuilder::new();
/// let root = b.root_namespace();
/// let vehicles = b.package(&root, "Vehicles").unwrap();
/// let car = b.member(&vehicles, ElementKind::PartDefinition, "Car", Visibility::Public).unwrap();
/// let other = b.package(&root, "Other").unwrap();
/// let model = b.build();
///
/// let deresolver = Deresolver::new(ModelScopes::new(&model));
/// assert_eq!(deresolver.deresolved_name(Some(&car), Some(&vehicles)).as_deref(), Some("Car"));
/// assert_eq!(deresolver.deresolved_name(Some(&car), Some(&other)).as_deref(), Some("Vehicles::Car"));
/// ```
#[derive(Debug)]
pub struct Deresolver<E> {
    env: E,
    options: DeresolverOptions,
    caches: SessionCaches,
}

impl<E: NamingEnvironment> Deresolver<E> {
    /// Create a deresolver with default options.
    pub fn new(env: E) -> Self {
        Self::with_options(env, DeresolverOptions::default())
    }

    /// Create a deresolver with the given options.
    pub fn with_options(env: E, options: DeresolverOptions) -> Self {
        Self {
            env,
            options,
            caches: SessionCaches::default(),
        }
    }

    /// The naming environment queries go through.
    pub fn environment(&self) -> &E {
        &self.env
    }

    /// The options this deresolver was created with.
    pub fn options(&self) -> DeresolverOptions {
        self.options
    }

    /// Entry counts of the session caches.
    pub fn cache_stats(&self) -> CacheStats {
        self.caches.stats()
    }

    fn qualified_name(&self, element: &ElementId) -> Option<Arc<str>> {
        self.caches
            .qualified_name(element, || self.env.qualified_name(element))
            .filter(|qn| !qn.is_empty())
    }

    /// The absolute qualified name, or `""` when the element has none.
    fn absolute_name(&self, element: &ElementId) -> String {
        self.qualified_name(element)
            .map(|qn| qn.to_string())
            .unwrap_or_default()
    }

    fn visible_memberships(&self, namespace: &ElementId, include_private: bool) -> Arc<[ElementId]> {
        self.caches.visible_memberships(namespace, include_private, || {
            self.env.visible_memberships(namespace, include_private)
        })
    }
}

impl<E: NamingEnvironment + Sync> Deresolver<E> {
    /// The shortest name that denotes `element` when written at `context`.
    ///
    /// Returns `None` only when `element` is `None`. Without a context, or
    /// when no namespace can be derived from it, the absolute qualified name
    /// is returned; an element without a qualified name yields `""`.
    pub fn deresolved_name(
        &self,
        element: Option<&ElementId>,
        context: Option<&ElementId>,
    ) -> Option<String> {
        let element = element?;
        let Some(source) = context.and_then(|ctx| self.env.deresolving_namespace(ctx)) else {
            return Some(self.absolute_name(element));
        };

        if let Some(hit) = self.caches.deresolved_name(&source, element) {
            trace!("[DERESOLVE] cache hit for {} from {}", element, source);
            return Some(hit.to_string());
        }

        let ancestors = AncestorSet::of(&self.env, element);
        let name = if ancestors.is_empty() {
            trace!("[DERESOLVE] {} is a root, using its qualified name", element);
            self.absolute_name(element)
        } else {
            self.walk(element, &source, &ancestors)
        };
        self.caches.insert_deresolved_name(&source, element, &name);
        Some(name)
    }

    /// Look for the closest visible container of `element`, starting at
    /// `source` and moving out one owning namespace at a time. Private
    /// memberships only count in `source` itself.
    fn walk(&self, element: &ElementId, source: &ElementId, ancestors: &AncestorSet) -> String {
        let mut visited = FxHashSet::default();
        let mut current = Some(source.clone());

        while let Some(namespace) = current {
            if !visited.insert(namespace.clone()) {
                debug!(
                    "[DERESOLVE] ownership cycle at {}, using qualified name of {}",
                    namespace, element
                );
                break;
            }

            let visible = self.visible_memberships(&namespace, &namespace == source);
            if let Some(membership) = self.closest_candidate(&visible, ancestors) {
                trace!(
                    "[DERESOLVE] {} reachable from {} through {}",
                    element, namespace, membership
                );
                return self.build_relative_qualified_name(element, &namespace, &membership, source);
            }

            trace!("[DERESOLVE] nothing reaches {} from {}", element, namespace);
            current = self.env.owning_namespace(&namespace);
        }

        self.absolute_name(element)
    }

    /// The visible membership nearest to the element. Ties go to the
    /// earliest membership in visibility order, so the parallel and
    /// sequential scans agree.
    fn closest_candidate(&self, visible: &[ElementId], ancestors: &AncestorSet) -> Option<ElementId> {
        let rank = |(index, membership): (usize, &ElementId)| {
            ancestors
                .reach(membership, || self.env.member_element(membership))
                .map(|distance| (distance, index))
        };

        let closest = if visible.len() > self.options.parallel_threshold {
            visible.par_iter().enumerate().filter_map(rank).min()
        } else {
            visible.iter().enumerate().filter_map(rank).min()
        };

        closest.and_then(|(_, index)| visible.get(index).cloned())
    }

    /// Name `element` relative to `membership`, found visible from
    /// `namespace`, and make sure the result reads back as `element` from
    /// `source`.
    ///
    /// On a clash the name relative to `namespace` itself is tried, then the
    /// absolute qualified name.
    fn build_relative_qualified_name(
        &self,
        element: &ElementId,
        namespace: &ElementId,
        membership: &ElementId,
        source: &ElementId,
    ) -> String {
        let Some(element_qn) = self.qualified_name(element) else {
            warn!("[DERESOLVE] no qualified name found for {}", element);
            return String::new();
        };

        let candidate = self.relative_name(&element_qn, element, membership);
        if self.reads_back_as(source, &candidate, element) {
            return candidate;
        }
        debug!(
            "[DERESOLVE] '{}' written in {} does not denote {}",
            candidate, source, element
        );

        let shorter = self
            .qualified_name(namespace)
            .and_then(|namespace_qn| strip_qualifier(&element_qn, &namespace_qn).map(str::to_string))
            .filter(|remainder| *remainder != candidate && self.reads_back_as(source, remainder, element));

        match shorter {
            Some(name) => name,
            None => {
                debug!("[DERESOLVE] falling back to '{}'", element_qn);
                element_qn.to_string()
            }
        }
    }

    /// `element_qn` with everything above the membership's member replaced
    /// by the member's visible name.
    fn relative_name(&self, element_qn: &str, element: &ElementId, membership: &ElementId) -> String {
        let Some(member_name) = self.env.member_name(membership) else {
            return element_qn.to_string();
        };
        let member = self.env.member_element(membership);
        let printable = printable_name(&member_name);
        if member.as_ref() == Some(element) {
            return printable.into_owned();
        }

        let rest = member
            .and_then(|member| self.qualified_name(&member))
            .and_then(|member_qn| strip_qualifier(element_qn, &member_qn).map(str::to_string));
        match rest {
            Some(rest) => format!("{printable}{QUALIFIED_NAME_SEPARATOR}{rest}"),
            None => element_qn.to_string(),
        }
    }

    /// Returns true unless `name`, written in `source`, resolves to anything
    /// but the element's owning membership. An alias of the element counts
    /// as a clash.
    fn reads_back_as(&self, source: &ElementId, name: &str, element: &ElementId) -> bool {
        let Some(resolved) = self.env.resolve(source, name) else {
            return true;
        };
        self.env.owning_membership(element).as_ref() == Some(&resolved)
    }
}

/// `name` without the leading `qualifier::`.
fn strip_qualifier<'a>(name: &'a str, qualifier: &str) -> Option<&'a str> {
    name.strip_prefix(qualifier)?
        .strip_prefix(QUALIFIED_NAME_SEPARATOR)
        .filter(|rest| !rest.is_empty())
}
