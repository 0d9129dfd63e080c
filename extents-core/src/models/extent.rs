use num_traits::{PrimInt, Unsigned};
use std::cmp::Ordering::{self};

/// Represent a closed range [start, end]
/// Inclusive of start, inclusive of end
#[derive(Eq, Debug, Clone, Copy)]
pub struct Extent<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    pub start: I,
    pub end: I,
}

impl<I> Extent<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    /// Create an extent from a raw coordinate pair.
    ///
    /// The pair is normalized: if `start > end` the endpoints are swapped
    /// rather than rejected, so every constructed extent satisfies
    /// `start <= end`.
    #[inline]
    pub fn new(start: I, end: I) -> Extent<I> {
        if start > end {
            Extent {
                start: end,
                end: start,
            }
        } else {
            Extent { start, end }
        }
    }

    /// Check if a point falls inside this extent, endpoints included
    #[inline]
    pub fn contains(&self, point: I) -> bool {
        self.start <= point && point <= self.end
    }
}

impl<I> Ord for Extent<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    #[inline]
    fn cmp(&self, other: &Extent<I>) -> Ordering {
        match self.start.cmp(&other.start) {
            Ordering::Less => Ordering::Less,
            Ordering::Greater => Ordering::Greater,
            Ordering::Equal => self.end.cmp(&other.end),
        }
    }
}

impl<I> PartialOrd for Extent<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I> PartialEq for Extent<I>
where
    I: PrimInt + Unsigned + Send + Sync,
{
    #[inline]
    fn eq(&self, other: &Extent<I>) -> bool {
        self.start == other.start && self.end == other.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn new_keeps_ordered_pair() {
        let e = Extent::new(3u32, 9);
        assert_eq!(e.start, 3);
        assert_eq!(e.end, 9);
    }

    #[test]
    fn new_swaps_reversed_pair() {
        let e = Extent::new(9u32, 3);
        assert_eq!(e.start, 3);
        assert_eq!(e.end, 9);
    }

    #[test]
    fn contains_includes_both_endpoints() {
        let e = Extent::new(5u32, 10);
        assert_eq!(e.contains(5), true);
        assert_eq!(e.contains(10), true);
        assert_eq!(e.contains(7), true);
        assert_eq!(e.contains(4), false);
        assert_eq!(e.contains(11), false);
    }

    #[test]
    fn degenerate_extent_contains_its_point() {
        let e = Extent::new(5u32, 5);
        assert_eq!(e.contains(5), true);
        assert_eq!(e.contains(4), false);
        assert_eq!(e.contains(6), false);
    }

    #[test]
    fn ordering_is_by_start_then_end() {
        let mut extents = vec![
            Extent::new(4u32, 8),
            Extent::new(1, 9),
            Extent::new(1, 3),
        ];
        extents.sort();
        assert_eq!(extents[0], Extent::new(1, 3));
        assert_eq!(extents[1], Extent::new(1, 9));
        assert_eq!(extents[2], Extent::new(4, 8));
    }
}
