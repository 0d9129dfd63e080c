use num_traits::{PrimInt, Unsigned};

use extents_core::models::Extent;

use crate::events::{self, OverlapRecord};

/// A coordinate-compressed index answering "how many extents contain this
/// point?" in logarithmic time.
///
/// The index is built once from a full batch of extents and is immutable
/// afterwards. Construction compresses the batch into a sorted sequence of
/// [`OverlapRecord`]s (see [`events::compress`]); the extents themselves
/// are not retained. Queries binary-search that sequence, so a modest
/// build cost is traded for cheap repeated lookups on a skewed
/// build-once/query-many workload.
///
/// Because nothing mutates after construction, a built index can be shared
/// across any number of reader threads without coordination.
///
/// # Examples
///
/// ```
/// use extents_core::models::Extent;
/// use extents_overlap::OverlapIndex;
///
/// let index = OverlapIndex::build(vec![
///     Extent::new(0u32, 40),
///     Extent::new(2, 12),
///     Extent::new(4, 30),
/// ]);
///
/// assert_eq!(index.containing_count(3), 2);
/// assert_eq!(index.containing_count(100), 0);
/// ```
#[derive(Debug, Clone)]
pub struct OverlapIndex<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    records: Vec<OverlapRecord<I>>,
}

impl<I> OverlapIndex<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    /// Create a new OverlapIndex by passing in a vector of extents. The
    /// whole batch is consumed and compressed up front; an empty batch
    /// yields an index that answers 0 for every point.
    pub fn build(extents: Vec<Extent<I>>) -> Self {
        OverlapIndex {
            records: events::compress(&extents),
        }
    }

    /// Count the extents whose closed span contains `point`.
    ///
    /// A lower-bound search locates the first record at or past the point.
    /// Landing strictly before it means the point sits in a gap, where the
    /// count established by the preceding record still holds. Landing
    /// exactly on it takes the higher of the two neighboring counts: when
    /// more extents end at this position than start, those extents still
    /// contain their own endpoint, so the pre-transition count applies.
    ///
    /// A point before the first record has no preceding record at all and
    /// is answered with 0 rather than treated as an error.
    pub fn containing_count(&self, point: I) -> usize {
        let idx = Self::lower_bound(point, &self.records);

        if idx == self.records.len() {
            // past every record: every extent has already closed
            return 0;
        }

        let candidate = &self.records[idx];

        if point < candidate.position {
            match idx {
                0 => 0,
                _ => self.records[idx - 1].count,
            }
        } else if idx > 0 && self.records[idx - 1].count > candidate.count {
            self.records[idx - 1].count
        } else {
            candidate.count
        }
    }

    /// Get the number of records in the compressed sequence. This is the
    /// number of distinct coordinates among the input extents' endpoints,
    /// not the number of extents.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the index is empty (i.e. was built from no extents)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Binary search for the first record whose position is not less than
    /// `point`.
    ///
    /// Returns `records.len()` when every record lies before the point.
    /// Uses a branch-light binary search over the position key.
    #[inline]
    fn lower_bound(point: I, records: &[OverlapRecord<I>]) -> usize {
        if records.is_empty() || records[0].position >= point {
            return 0;
        } else if records[records.len() - 1].position < point {
            return records.len();
        }

        let mut cursor = 0;
        let mut length = records.len();
        while length > 1 {
            let half = length >> 1;
            length -= half;
            cursor += usize::from(records[cursor + half - 1].position < point) * half;
        }
        cursor
    }
}
