pub mod math;
pub mod serde;

use std::fmt::{self, Debug};

use num::Num;
use thiserror::Error;

/// ZeroSpVec is a sparse vector that treats zero elements as implicit.
/// It keeps `indices` and `values` side by side:
/// `indices` holds the logical position of each stored element,
/// `values` holds the element itself.
///
/// Stored elements are guaranteed to be sorted by ascending index,
/// with no duplicate indices and every index below `len`.
#[derive(Clone, PartialEq)]
pub struct ZeroSpVec<N>
where
    N: Num,
{
    indices: Vec<usize>,
    values: Vec<N>,
    len: usize,
}

/// Reasons a set of raw entries cannot form a `ZeroSpVec`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZeroSpVecError {
    #[error("index {index} out of range for sparse vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("duplicate index {0}")]
    DuplicateIndex(usize),
}

impl<N> ZeroSpVec<N>
where
    N: Num,
{
    /// Create an all-zero vector of logical length `len`
    #[inline]
    pub fn new(len: usize) -> Self {
        ZeroSpVec {
            indices: Vec::new(),
            values: Vec::new(),
            len,
        }
    }

    /// Create an empty vector with room for `cap` non-zero entries
    #[inline]
    pub fn with_capacity(cap: usize) -> Self {
        ZeroSpVec {
            indices: Vec::with_capacity(cap),
            values: Vec::with_capacity(cap),
            len: 0,
        }
    }

    /// Build from `(index, value)` entries in any order.
    /// Zero values are dropped; duplicates and out-of-range indices are rejected.
    ///
    /// # Arguments
    /// * `len` - logical length of the vector
    /// * `entries` - non-zero candidates
    pub fn from_entries(len: usize, mut entries: Vec<(usize, N)>) -> Result<Self, ZeroSpVecError> {
        entries.sort_by_key(|(index, _)| *index);
        let mut vec = ZeroSpVec::with_capacity(entries.len());
        vec.len = len;
        let mut prev = None;
        for (index, value) in entries {
            if index >= len {
                return Err(ZeroSpVecError::IndexOutOfRange { index, len });
            }
            if prev == Some(index) {
                return Err(ZeroSpVecError::DuplicateIndex(index));
            }
            prev = Some(index);
            if value != N::zero() {
                vec.indices.push(index);
                vec.values.push(value);
            }
        }
        Ok(vec)
    }

    /// Build from entries the caller already sorted by unique, in-range index.
    /// Zero values are dropped.
    pub(crate) fn from_sorted_entries(len: usize, entries: Vec<(usize, N)>) -> Self {
        debug_assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        debug_assert!(entries.last().map_or(true, |(i, _)| *i < len));
        let mut vec = ZeroSpVec::with_capacity(entries.len());
        vec.len = len;
        for (index, value) in entries {
            if value != N::zero() {
                vec.indices.push(index);
                vec.values.push(value);
            }
        }
        vec
    }

    /// Build from a dense vector, keeping only non-zero elements
    #[inline]
    pub fn from_vec(vec: Vec<N>) -> Self {
        let mut zero_sp_vec = ZeroSpVec::with_capacity(vec.len());
        for entry in vec {
            zero_sp_vec.push(entry);
        }
        zero_sp_vec
    }

    /// Append one logical element; zero is not stored
    #[inline]
    pub fn push(&mut self, elem: N) {
        if elem != N::zero() {
            self.indices.push(self.len);
            self.values.push(elem);
        }
        self.len += 1;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// number of stored (non-zero) elements
    #[inline]
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Get the stored value at a logical index.
    /// Returns `None` for implicit zeros and for out-of-range indices.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&N> {
        if index >= self.len {
            return None;
        }
        self.indices
            .binary_search(&index)
            .ok()
            .map(|pos| &self.values[pos])
    }

    /// Iterate the stored `(index, value)` pairs in ascending index order
    #[inline]
    pub fn raw_iter(&self) -> impl Iterator<Item = (usize, &N)> + '_ {
        self.indices.iter().copied().zip(self.values.iter())
    }
}

impl<N> Default for ZeroSpVec<N>
where
    N: Num,
{
    fn default() -> Self {
        ZeroSpVec::new(0)
    }
}

impl<N: Num + Debug> Debug for ZeroSpVec<N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "ZeroSpVec(len: {}, {:?})", self.len, self.raw_iter().collect::<Vec<_>>())
        } else {
            f.debug_map().entries(self.raw_iter()).finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_skips_zero_but_counts_length() {
        let vec = ZeroSpVec::from_vec(vec![0.0, 1.5, 0.0, 2.0]);
        assert_eq!(vec.len(), 4);
        assert_eq!(vec.nnz(), 2);
        assert_eq!(vec.get(1), Some(&1.5));
        assert_eq!(vec.get(2), None);
        assert_eq!(vec.get(9), None);
    }

    #[test]
    fn from_entries_sorts_and_drops_zero() {
        let vec = ZeroSpVec::from_entries(5, vec![(3, 1.0), (0, 2.0), (4, 0.0)]).unwrap();
        let pairs: Vec<(usize, f64)> = vec.raw_iter().map(|(i, v)| (i, *v)).collect();
        assert_eq!(pairs, vec![(0, 2.0), (3, 1.0)]);
    }

    #[test]
    fn from_entries_rejects_bad_indices() {
        assert_eq!(
            ZeroSpVec::from_entries(2, vec![(2, 1.0)]),
            Err(ZeroSpVecError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            ZeroSpVec::from_entries(4, vec![(1, 1.0), (1, 3.0)]),
            Err(ZeroSpVecError::DuplicateIndex(1))
        );
    }
}
