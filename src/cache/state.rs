//! Cache lifecycle states.

/// Lifecycle tag for a single cached value.
///
/// `Loading` covers only a first fetch, when there is nothing to show yet.
/// A refetch over an existing value keeps it `Loaded` (the stale value stays
/// readable) and is reported through the owning cache's `loading` flag.
/// Likewise `Failed` is only reached when a first fetch fails; a failed
/// refetch leaves the prior value untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheState<T> {
    /// No fetch has completed and none is in flight.
    NotLoaded,
    /// First fetch in flight.
    Loading,
    /// The most recent successful fetch result.
    Loaded(T),
    /// The first fetch failed; there is nothing to show.
    Failed,
}

impl<T> CacheState<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, CacheState::Loaded(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            CacheState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}
