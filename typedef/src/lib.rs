//! Strongly typed scalar wrappers.
//!
//! [`strong_typedef!`] turns a primitive such as `f64` into as many distinct
//! nominal types as you need (`Latitude`, `Longitude`, `Meters`), each a
//! zero-cost `#[repr(transparent)]` newtype. Values of different wrappers
//! cannot be added, compared, assigned or passed for one another; crossing
//! back to the primitive is always an explicit `get()` or `From`.
//!
//! The wrappers are a type-safety veneer, not validated values: overflow,
//! division by zero and NaN behave exactly as they do for the primitive.
//! [`strong_typedef_hashable!`] opts a wrapper into `Eq + Hash` so it can key
//! hash maps.
//!
//! This crate contains pure value types with no IO, no async, and no logging.

mod arithmetic;
mod error;
mod hash;
mod typedef;

pub use arithmetic::{Arithmetic, assert_arithmetic};
pub use error::ParseTypedefError;
pub use typedef::StrongTypedef;
