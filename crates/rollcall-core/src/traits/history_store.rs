use crate::errors::RollCallResult;
use crate::models::HistoryState;

/// Single-writer store for the selection history.
///
/// Implementations serialize every load/mutate/save cycle behind one lock.
/// Persistence failures are logged and must not discard the in-memory update.
pub trait IHistoryStore: Send + Sync {
    /// A consistent copy of the current state.
    fn snapshot(&self) -> RollCallResult<HistoryState>;

    /// Apply `mutation` under the store lock, then persist.
    fn update(&self, mutation: &mut dyn FnMut(&mut HistoryState)) -> RollCallResult<()>;

    /// Discard everything and persist an empty state.
    fn clear(&self) -> RollCallResult<()>;

    /// Maximum number of entries kept in the history log.
    fn history_capacity(&self) -> usize;
}
