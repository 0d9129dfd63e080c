use num_traits::{PrimInt, Unsigned};

use extents_core::models::Extent;

/// A compacted `(position, cumulative overlap count)` entry in the built
/// index.
///
/// The count is the number of extents covering every point from this
/// position up to (but not including) the next recorded position; exact
/// landings on a position are resolved by the closed-endpoint tie-break in
/// [`OverlapIndex::containing_count`](crate::OverlapIndex::containing_count).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapRecord<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    pub position: I,
    pub count: usize,
}

/// Compress a batch of extents into a sorted sequence of overlap records.
///
/// Every extent contributes two markers, `(start, +1)` and `(end, -1)`.
/// The markers are sorted by position only; relative order within a
/// position does not matter because all deltas at a position are folded
/// into a single record before the walk moves on. The result is strictly
/// increasing by position, at most `2 * extents.len()` records long, and its
/// last record always carries a count of zero.
pub fn compress<I>(extents: &[Extent<I>]) -> Vec<OverlapRecord<I>>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    let mut markers: Vec<(I, i32)> = Vec::with_capacity(extents.len() * 2);
    for extent in extents {
        markers.push((extent.start, 1));
        markers.push((extent.end, -1));
    }
    markers.sort_by_key(|marker| marker.0);

    let mut records: Vec<OverlapRecord<I>> = Vec::with_capacity(markers.len());
    let mut cnt: i64 = 0;

    for (position, delta) in markers {
        cnt += i64::from(delta);
        // an end marker never precedes its own start marker, so the
        // running total stays non-negative at every step
        debug_assert!(cnt >= 0);
        match records.last_mut() {
            // same position: overwrite the partial sum instead of
            // emitting a second record
            Some(last) if last.position == position => last.count = cnt as usize,
            _ => records.push(OverlapRecord {
                position,
                count: cnt as usize,
            }),
        }
    }

    records
}
