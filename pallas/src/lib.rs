//! Arithmetic for the Pallas elliptic curve `y^2 = x^3 + 5`.
//!
//! This crate provides the two Pasta prime fields as distinct Montgomery-form
//! types, affine and Jacobian curve points, point compression to
//! `(x, is_odd)`, and fixed-base multiplication backed by a generator table
//! that is built once per process.

mod affine;
mod basefield;
mod errors;
mod field;
mod generator_table;
mod group;
mod msm;
mod projective;
mod random;
mod scalarfield;

pub use affine::{Affine, CompressedPoint};
pub use basefield::BaseField;
pub use errors::{ArithmeticError, DecodeError};
pub use generator_table::mul_generator_affine;
pub use group::{Group, ScalarBits};
pub use msm::double_scalar_mul_basepoint_affine;
pub use projective::Projective;
pub use random::RandomField;
pub use scalarfield::ScalarField;
