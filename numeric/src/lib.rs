//! Fixed-width integer model with explicit widening, narrowing and overflow
//! handling.
//!
//! Values are kept as 128-bit representations tagged with their [`IntType`],
//! sign-extended for signed types and zero-extended for unsigned ones. Every
//! narrowing is explicit: either a wrapping (truncating) conversion or a
//! checked one that reports [`OverflowError`]. Whether arithmetic is checked is
//! chosen per call site or per [`Scope`], never through global state.

mod error;
mod ops;
mod policy;
mod prim;
mod types;
mod value;

pub use error::{ConversionError, Operation, OverflowError};
pub use ops::BinaryOp;
pub use policy::{
    checked, checked_cast, unchecked, wrapping_cast, Checked, OverflowMode, OverflowPolicy,
    Scope, Unchecked,
};
pub use prim::Integral;
pub use types::IntType;
pub use value::IntValue;
