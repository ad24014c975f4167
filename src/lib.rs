//! # Feature vector to field map conversion.
//!
//! This small crate converts numeric feature vectors, dense or sparse, into
//! named field maps suitable for feeding a predictive-model evaluator. Field
//! names come from the evaluator itself, in the order the model declares its
//! inputs, and are paired positionally against the vector with a truncating
//! zip. Sparse vectors drop absent positions from the output entirely rather
//! than materializing them as zero.
//!
pub mod convert;
pub mod errors;
pub mod fields;
pub mod vector;

// re-exports
pub use convert::*;
pub use errors::*;
pub use fields::*;
pub use vector::*;
