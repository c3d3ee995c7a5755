//! `SquareMatrix`: a dense, growable `n x n` matrix.
//!
//! Storage is a single contiguous row-major `Vec<T>`, so scanning a row is a
//! slice walk. The matrix only ever grows, one row and one column at a time,
//! which is exactly what an adjacency matrix with append-only vertices needs.
//!
//! # Memory
//!
//! The matrix always holds `n²` cells, whether or not they carry data.

use core::fmt;

/// A dense square matrix whose dimension grows by one at a time.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SquareMatrix<T> {
    data: Vec<T>,
    dim: usize,
}

impl<T> SquareMatrix<T> {
    /// Creates an empty `0 x 0` matrix.
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            dim: 0,
        }
    }

    /// Creates a `dim x dim` matrix with every cell set to `T::default()`.
    pub fn with_dim(dim: usize) -> Self
    where
        T: Default + Clone,
    {
        Self::filled(dim, T::default())
    }

    /// Creates a `dim x dim` matrix with every cell set to `value`.
    pub fn filled(dim: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: vec![value; dim * dim],
            dim,
        }
    }

    /// Returns the dimension (number of rows, equal to the number of columns).
    #[inline(always)]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns `true` if the matrix has no cells.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.dim == 0
    }

    /// Returns a shared reference to the element at (row, col).
    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.dim && col < self.dim {
            self.data.get(row * self.dim + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at (row, col).
    #[inline(always)]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < self.dim && col < self.dim {
            self.data.get_mut(row * self.dim + col)
        } else {
            None
        }
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.dim {
            let start = row * self.dim;
            Some(&self.data[start..start + self.dim])
        } else {
            None
        }
    }

    /// Iterates over all rows in order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        // `chunks_exact(0)` panics, and an empty matrix has no rows anyway.
        self.data.chunks_exact(self.dim.max(1)).take(self.dim)
    }

    /// Iterates over `(row, col, &value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        let dim = self.dim;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (i / dim, i % dim, v))
    }

    /// Grows the matrix by one row and one column, filling the new cells with
    /// values produced by `fill`. Returns the new dimension.
    ///
    /// Existing cells keep their (row, col) coordinates.
    pub fn grow_with<F>(&mut self, mut fill: F) -> usize
    where
        F: FnMut() -> T,
    {
        let old = self.dim;
        let new = old + 1;
        let mut data = Vec::with_capacity(new * new);
        let mut cells = core::mem::take(&mut self.data).into_iter();
        for _ in 0..old {
            data.extend(cells.by_ref().take(old));
            data.push(fill());
        }
        data.extend((0..new).map(|_| fill()));

        self.data = data;
        self.dim = new;
        new
    }
}

impl<T> Default for SquareMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}
