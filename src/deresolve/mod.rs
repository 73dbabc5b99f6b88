//! Shortest unambiguous names.
//!
//! A [`Deresolver`] turns an element reference into the shortest name that
//! reads back as that element when written at a given place in the model.
//! It walks outward from the namespace of the reference, looking at each
//! level for a visible membership on the element's containment path, and
//! validates every candidate by resolving it again.
//!
//! One deresolver serves one session against an unchanging model; its
//! caches are never invalidated.

mod ancestors;
mod cache;
mod deresolver;
mod options;

pub use ancestors::AncestorSet;
pub use cache::CacheStats;
pub use deresolver::Deresolver;
pub use options::{DEFAULT_PARALLEL_THRESHOLD, DeresolverOptions};
