//! Bounds-checked circular index
//!
//! All wrap-around arithmetic for fixed rings lives here, so callers never
//! do `% N` by hand.

/// Index into a ring of `N` slots, always in `0..N`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RingIndex<const N: usize>(usize);

impl<const N: usize> RingIndex<N> {
    /// First slot.
    pub const ZERO: Self = {
        assert!(N > 0, "Ring must have at least one slot");
        Self(0)
    };

    /// Index from a raw slot number, `None` if out of range.
    pub const fn new(idx: usize) -> Option<Self> {
        if idx < N {
            Some(Self(idx))
        } else {
            None
        }
    }

    /// Raw slot number.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Following slot, wrapping to 0 after the last.
    #[inline]
    pub const fn next(self) -> Self {
        if self.0 + 1 < N {
            Self(self.0 + 1)
        } else {
            Self(0)
        }
    }

    /// Preceding slot, wrapping to the last after 0.
    #[inline]
    pub const fn prev(self) -> Self {
        if self.0 > 0 {
            Self(self.0 - 1)
        } else {
            Self(N - 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bounds() {
        assert_eq!(RingIndex::<4>::new(3).map(RingIndex::get), Some(3));
        assert!(RingIndex::<4>::new(4).is_none());
    }

    #[test]
    fn test_next_wraps() {
        let last = RingIndex::<4>::new(3).unwrap();
        assert_eq!(last.next(), RingIndex::ZERO);
        assert_eq!(RingIndex::<4>::ZERO.next().get(), 1);
    }

    #[test]
    fn test_prev_wraps() {
        assert_eq!(RingIndex::<4>::ZERO.prev().get(), 3);
        assert_eq!(RingIndex::<4>::new(2).unwrap().prev().get(), 1);
    }

    #[test]
    fn test_single_slot_ring() {
        let idx = RingIndex::<1>::ZERO;
        assert_eq!(idx.next(), idx);
        assert_eq!(idx.prev(), idx);
    }
}
