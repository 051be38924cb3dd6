// src/linalg/mod.rs

//! Dense complex linear algebra used by the interpreter and the
//! quantum-information utilities: matrices, vectors and small eigen-problems.

mod matrix;
pub mod eigen;
pub mod vector;

pub use matrix::ComplexMatrix;
