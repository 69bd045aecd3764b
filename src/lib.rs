//! Complex-number linear algebra over fixed-size vectors and matrices.
//!
//! # Motivation
//!
//! This library accompanies the programming drills of an introductory quantum computing theory
//! course: complex arithmetic, modulus/conjugate/phase, the vector space *C^n*, and its
//! generalization to *C^(m×n)* matrices. Each drill only ever needs small, statically-sized
//! values, so the whole library is built around plain value types.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. The API can be significantly
//!   simplified by relying on const generics to specify vector and matrix dimensions, and the
//!   drills never need anything else. Dimension mismatches become type errors instead of runtime
//!   checks.
//! - Be generic over the element type: the drills use both integer and floating-point complex
//!   numbers. Non-[`Copy`] element types (eg. "big decimals") are out of scope.
//! - No heap allocation, no SIMD, no BLAS. This is a teaching artifact, not a production
//!   numerics library.
//! - Operations are total and pure: they take their operands by value and return fresh values.
//!   The only numeric failure mode is division by a zero complex number, which follows the
//!   element type's native division-by-zero behavior.

pub mod approx;
mod complex;
mod matrix;
mod traits;
mod vector;

pub use complex::*;
pub use matrix::*;
pub use traits::*;
pub use vector::*;
