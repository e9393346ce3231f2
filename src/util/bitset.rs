//! Growable bitset over dense entity indices.
//!
//! Atom and bond selections are stored as bitsets; the set grows on demand
//! and trailing zero words are insignificant for equality.

use std::fmt;

const BITS: usize = 64;

/// A growable set of small non-negative integers.
#[derive(Clone, Default)]
pub struct BitSet {
    words: Vec<u64>,
}

impl BitSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty set with room for `n` bits.
    pub fn with_capacity(n: usize) -> Self {
        Self { words: Vec::with_capacity(n.div_ceil(BITS)) }
    }

    /// Set containing every index in `start..end`.
    pub fn from_range(start: usize, end: usize) -> Self {
        let mut bs = Self::with_capacity(end);
        bs.set_range(start, end);
        bs
    }

    #[inline]
    fn ensure(&mut self, word: usize) {
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
    }

    /// Add `i`.
    pub fn set(&mut self, i: usize) {
        let w = i / BITS;
        self.ensure(w);
        self.words[w] |= 1 << (i % BITS);
    }

    /// Add every index in `start..end`.
    pub fn set_range(&mut self, start: usize, end: usize) {
        for i in start..end {
            self.set(i);
        }
    }

    /// Remove `i`.
    pub fn clear(&mut self, i: usize) {
        if let Some(w) = self.words.get_mut(i / BITS) {
            *w &= !(1 << (i % BITS));
        }
    }

    /// Remove everything.
    pub fn clear_all(&mut self) {
        self.words.clear();
    }

    /// Membership test.
    #[inline]
    pub fn get(&self, i: usize) -> bool {
        self.words
            .get(i / BITS)
            .is_some_and(|w| w & (1 << (i % BITS)) != 0)
    }

    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Number of members.
    pub fn cardinality(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// One past the highest member, 0 when empty.
    pub fn len(&self) -> usize {
        for (wi, &w) in self.words.iter().enumerate().rev() {
            if w != 0 {
                return wi * BITS + (BITS - w.leading_zeros() as usize);
            }
        }
        0
    }

    /// Union in place.
    pub fn or(&mut self, other: &BitSet) {
        if other.words.len() > self.words.len() {
            self.words.resize(other.words.len(), 0);
        }
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a |= b;
        }
    }

    /// Intersection in place.
    pub fn and(&mut self, other: &BitSet) {
        for (i, a) in self.words.iter_mut().enumerate() {
            *a &= other.words.get(i).copied().unwrap_or(0);
        }
    }

    /// Difference in place.
    pub fn and_not(&mut self, other: &BitSet) {
        for (a, b) in self.words.iter_mut().zip(&other.words) {
            *a &= !b;
        }
    }

    /// True when the two sets share a member.
    pub fn intersects(&self, other: &BitSet) -> bool {
        self.words.iter().zip(&other.words).any(|(a, b)| a & b != 0)
    }

    /// Members in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { words: &self.words, word: 0, current: self.words.first().copied().unwrap_or(0) }
    }

    /// Copy with every member moved up by `delta`.
    pub fn shifted(&self, delta: usize) -> BitSet {
        if delta == 0 {
            return self.clone();
        }
        let mut out = BitSet::with_capacity(self.len() + delta);
        for i in self.iter() {
            out.set(i + delta);
        }
        out
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        let n = self.words.len().max(other.words.len());
        (0..n).all(|i| {
            self.words.get(i).copied().unwrap_or(0) == other.words.get(i).copied().unwrap_or(0)
        })
    }
}

impl Eq for BitSet {}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut bs = BitSet::new();
        for i in iter {
            bs.set(i);
        }
        bs
    }
}

impl<'a> IntoIterator for &'a BitSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over set members.
pub struct Iter<'a> {
    words: &'a [u64],
    word: usize,
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word * BITS + bit);
            }
            self.word += 1;
            self.current = *self.words.get(self.word)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bs = BitSet::new();
        bs.set(3);
        bs.set(130);
        assert!(bs.get(3));
        assert!(bs.get(130));
        assert!(!bs.get(4));
        assert_eq!(bs.cardinality(), 2);
        assert_eq!(bs.len(), 131);
        bs.clear(130);
        assert_eq!(bs.len(), 4);
        bs.clear(1000);
        assert_eq!(bs.iter().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_set_ops() {
        let mut a: BitSet = [1, 2, 3, 70].into_iter().collect();
        let b: BitSet = [2, 3, 4].into_iter().collect();
        let mut u = a.clone();
        u.or(&b);
        assert_eq!(u.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 70]);
        let mut d = a.clone();
        d.and_not(&b);
        assert_eq!(d.iter().collect::<Vec<_>>(), vec![1, 70]);
        a.and(&b);
        assert_eq!(a.iter().collect::<Vec<_>>(), vec![2, 3]);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_equality_ignores_trailing_words() {
        let mut a = BitSet::new();
        a.set(1);
        let mut b = BitSet::new();
        b.set(1);
        b.set(500);
        b.clear(500);
        assert_eq!(a, b);
        assert!(BitSet::new().is_empty());
        assert!(!b.is_empty());
    }

    #[test]
    fn test_shifted_and_range() {
        let bs = BitSet::from_range(2, 5);
        assert_eq!(bs.shifted(10).iter().collect::<Vec<_>>(), vec![12, 13, 14]);
        assert_eq!(bs.shifted(0), bs);
    }
}
