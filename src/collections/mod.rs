//! Storage primitives backing the graph types.

pub mod matrix;

pub use matrix::SquareMatrix;
