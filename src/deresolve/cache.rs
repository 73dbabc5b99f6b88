//! Session caches.
//!
//! Every entry is valid only for the model snapshot the session started
//! with. Inserts overwrite with an equal value, so a lost race between two
//! readers computing the same entry is harmless.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::model::ElementId;

/// Entry counts of the session caches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub visible_memberships: usize,
    pub deresolved_names: usize,
    pub qualified_names: usize,
}

#[derive(Debug, Default)]
pub(crate) struct SessionCaches {
    /// (namespace, include_private) → visible memberships.
    visible_memberships: RwLock<FxHashMap<(ElementId, bool), Arc<[ElementId]>>>,
    /// (deresolving namespace, element) → deresolved name.
    deresolved_names: RwLock<FxHashMap<(ElementId, ElementId), Arc<str>>>,
    /// element → qualified name (`None` when it has none).
    qualified_names: RwLock<FxHashMap<ElementId, Option<Arc<str>>>>,
}

impl SessionCaches {
    pub(crate) fn visible_memberships(
        &self,
        namespace: &ElementId,
        include_private: bool,
        compute: impl FnOnce() -> Vec<ElementId>,
    ) -> Arc<[ElementId]> {
        let key = (namespace.clone(), include_private);
        if let Some(hit) = self.visible_memberships.read().get(&key) {
            return Arc::clone(hit);
        }
        let computed: Arc<[ElementId]> = compute().into();
        self.visible_memberships
            .write()
            .insert(key, Arc::clone(&computed));
        computed
    }

    pub(crate) fn deresolved_name(&self, namespace: &ElementId, element: &ElementId) -> Option<Arc<str>> {
        self.deresolved_names
            .read()
            .get(&(namespace.clone(), element.clone()))
            .cloned()
    }

    pub(crate) fn insert_deresolved_name(&self, namespace: &ElementId, element: &ElementId, name: &str) {
        self.deresolved_names
            .write()
            .insert((namespace.clone(), element.clone()), Arc::from(name));
    }

    pub(crate) fn qualified_name(
        &self,
        element: &ElementId,
        compute: impl FnOnce() -> Option<String>,
    ) -> Option<Arc<str>> {
        if let Some(hit) = self.qualified_names.read().get(element) {
            return hit.clone();
        }
        let computed: Option<Arc<str>> = compute().map(Arc::from);
        self.qualified_names
            .write()
            .insert(element.clone(), computed.clone());
        computed
    }

    pub(crate) fn stats(&self) -> CacheStats {
        CacheStats {
            visible_memberships: self.visible_memberships.read().len(),
            deresolved_names: self.deresolved_names.read().len(),
            qualified_names: self.qualified_names.read().len(),
        }
    }
}
