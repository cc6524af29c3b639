/// Cyclic index arithmetic over positions `0..len`.
///
/// Every element and every window sum is addressed by a position; the
/// window centred on `i` covers `prev(i)`, `i` and `next(i)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ring {
    len: usize,
}

impl Ring {
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 3, "a ring needs at least three positions");
        Self { len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position after `index`, wrapping to 0.
    #[inline]
    pub fn next(&self, index: usize) -> usize {
        (index + 1) % self.len
    }

    /// Position before `index`, wrapping to `len - 1`.
    #[inline]
    pub fn prev(&self, index: usize) -> usize {
        if index > 0 {
            index - 1
        } else {
            self.len - 1
        }
    }

    /// Members of the window centred on `center`, in left-to-right order.
    #[inline]
    pub fn window(&self, center: usize) -> [usize; 3] {
        [self.prev(center), center, self.next(center)]
    }
}
