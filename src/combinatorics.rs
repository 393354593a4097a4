//! Provides a mixed-radix enumeration of index tuples, used by the factor searches.
//!
//! # Examples
//!
//! All pairs with a first index below 2 and a second index below 3:
//!
//! ```rust
//! use exacta::combinatorics::CartesianProductIterator;
//!
//! let mut c = CartesianProductIterator::new(vec![2, 3]);
//! let mut tuples = vec![];
//! while let Some(a) = c.next() {
//!     tuples.push(a.to_vec());
//! }
//!
//! let ans = vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]];
//!
//! assert_eq!(tuples, ans);
//! ```

/// An iterator type over all index tuples `(i_0, ..., i_{k-1})` with `i_j < radices[j]`,
/// in lexicographic order.
///
/// The tuples are lent out as slices, so the iterator does not implement [Iterator].
pub struct CartesianProductIterator {
    radices: Vec<usize>,
    indices: Vec<usize>,
    init: bool,
    done: bool,
}

impl CartesianProductIterator {
    /// Creates a new `CartesianProductIterator` with the given number of choices per position.
    pub fn new(radices: Vec<usize>) -> CartesianProductIterator {
        let done = radices.iter().any(|r| *r == 0);
        CartesianProductIterator {
            indices: vec![0; radices.len()],
            radices,
            init: false,
            done,
        }
    }

    /// The total number of tuples, if it fits in a `usize`.
    pub fn len(&self) -> Option<usize> {
        self.radices
            .iter()
            .try_fold(1usize, |acc, r| acc.checked_mul(*r))
    }

    /// Returns true if the iterator yields no tuples.
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Advances the iterator and returns the next tuple.
    pub fn next(&mut self) -> Option<&[usize]> {
        if self.done {
            return None;
        }

        if !self.init {
            self.init = true;
            return Some(&self.indices);
        }

        for i in (0..self.indices.len()).rev() {
            self.indices[i] += 1;
            if self.indices[i] < self.radices[i] {
                return Some(&self.indices);
            }
            self.indices[i] = 0;
        }

        self.done = true;
        None
    }
}

#[cfg(test)]
mod test {
    use super::CartesianProductIterator;

    fn collect(radices: Vec<usize>) -> Vec<Vec<usize>> {
        let mut c = CartesianProductIterator::new(radices);
        let mut res = vec![];
        while let Some(a) = c.next() {
            res.push(a.to_vec());
        }
        res
    }

    #[test]
    fn product() {
        let r = collect(vec![2, 1, 2]);
        assert_eq!(
            r,
            vec![vec![0, 0, 0], vec![0, 0, 1], vec![1, 0, 0], vec![1, 0, 1]]
        );
        assert_eq!(CartesianProductIterator::new(vec![3, 4, 5]).len(), Some(60));
    }

    #[test]
    fn degenerate() {
        assert_eq!(collect(vec![]), vec![Vec::<usize>::new()]);
        assert!(collect(vec![3, 0]).is_empty());
        assert!(CartesianProductIterator::new(vec![3, 0]).is_empty());

        let mut c = CartesianProductIterator::new(vec![1]);
        assert!(c.next().is_some());
        assert!(c.next().is_none());
        assert!(c.next().is_none());
    }
}
