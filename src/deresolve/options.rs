//! Deresolver options

/// Visible-membership count above which the candidate scan runs in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Tuning for a [`Deresolver`](super::Deresolver) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeresolverOptions {
    /// Namespaces with more visible memberships than this are scanned with
    /// rayon. The chosen candidate is the same either way.
    pub parallel_threshold: usize,
}

impl Default for DeresolverOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl DeresolverOptions {
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
