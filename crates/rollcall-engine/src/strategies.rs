//! Sequential and group selection orders. Random lives in [`crate::sampler`].

use rand::Rng;
use rollcall_core::HistoryState;

/// Round-robin continuation.
///
/// Finds the last log entry still present in `pool` and returns the next
/// `count` candidates after it, wrapping around. Starts at index 0 when no
/// logged candidate is in the pool. Never returns more than the pool size.
pub fn sequential(state: &HistoryState, pool: &[String], count: usize) -> Vec<String> {
    if pool.is_empty() {
        return Vec::new();
    }

    let last_index = state
        .history
        .iter()
        .rev()
        .find_map(|name| pool.iter().position(|c| c == name));
    let start = last_index.map_or(0, |i| i + 1);

    (0..count.min(pool.len()))
        .map(|offset| pool[(start + offset) % pool.len()].clone())
        .collect()
}

/// One uniform pick per contiguous bucket.
///
/// The pool is split into `count` buckets of `len / count` items (at least
/// one); the last bucket absorbs the remainder. Buckets starting past the end
/// of the pool are skipped.
pub fn group<R: Rng + ?Sized>(pool: &[String], count: usize, rng: &mut R) -> Vec<String> {
    group_bounds(pool.len(), count)
        .into_iter()
        .map(|bucket| pool[rng.random_range(bucket)].clone())
        .collect()
}

/// Bucket index ranges used by [`group`], exposed for callers that label groups.
pub fn group_bounds(pool_len: usize, count: usize) -> Vec<std::ops::Range<usize>> {
    if pool_len == 0 || count == 0 {
        return Vec::new();
    }
    let bucket_size = (pool_len / count).max(1);
    (0..count)
        .map(|bucket| (bucket, bucket * bucket_size))
        .take_while(|&(_, start)| start < pool_len)
        .map(|(bucket, start)| {
            let end = if bucket == count - 1 {
                pool_len
            } else {
                (start + bucket_size).min(pool_len)
            };
            start..end
        })
        .collect()
}
