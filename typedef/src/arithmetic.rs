//! The set of primitives a strong typedef may wrap.

use std::error::Error;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
}

/// An integer or floating-point primitive.
///
/// Sealed: implemented for `i8`..`i128`, `isize`, `u8`..`u128`, `usize`,
/// `f32` and `f64` only. `bool` and `char` have no arithmetic in Rust and are
/// rejected.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an arithmetic type",
    label = "strong typedefs can only wrap integer or floating-point primitives",
    note = "arithmetic types are `i8`..`i128`, `isize`, `u8`..`u128`, `usize`, `f32` and `f64`"
)]
pub trait Arithmetic:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + FromStr<Err: Error + Send + Sync + 'static>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    /// Feed this value into `state` so that equal values hash equally.
    fn hash_value<H: Hasher>(self, state: &mut H);
}

/// Compile-time witness that `T` is arithmetic.
///
/// Evaluated in a `const` item by [`strong_typedef!`](crate::strong_typedef),
/// so a non-arithmetic underlying type is rejected before anything runs.
pub const fn assert_arithmetic<T: Arithmetic>() {}

macro_rules! impl_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Arithmetic for $ty {
                #[inline]
                fn hash_value<H: Hasher>(self, state: &mut H) {
                    Hash::hash(&self, state);
                }
            }
        )+
    };
}

// -0.0 == 0.0 but their bit patterns differ; hash them as the same value.
macro_rules! impl_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Arithmetic for $ty {
                #[inline]
                fn hash_value<H: Hasher>(self, state: &mut H) {
                    let canonical = if self == 0.0 { 0.0 } else { self };
                    Hash::hash(&canonical.to_bits(), state);
                }
            }
        )+
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);
