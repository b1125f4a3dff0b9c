//! The wrapper generator.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};
use std::str::FromStr;

use crate::{Arithmetic, ParseTypedefError};

/// Contract shared by every type generated with [`strong_typedef!`].
///
/// Lets generic code work over any wrapper without knowing its name. Only
/// the macro implements it; the conversions here are the same ones the
/// generated inherent `new`/`get`/`get_mut` provide.
pub trait StrongTypedef:
    Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + FromStr<Err = ParseTypedefError>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Sum
    + Send
    + Sync
    + 'static
{
    /// The wrapped primitive.
    type Inner: Arithmetic;

    /// The wrapper's name as written at the declaration.
    const NAME: &'static str;

    fn from_inner(value: Self::Inner) -> Self;

    fn into_inner(self) -> Self::Inner;

    fn inner_mut(&mut self) -> &mut Self::Inner;
}

/// Declares one or more strongly typed scalar wrappers.
///
/// Each `struct Name(Inner);` becomes a `#[repr(transparent)]` newtype over
/// `Inner` with a private field. `Inner` must be an integer or floating-point
/// primitive ([`Arithmetic`]); anything else is a compile error naming it.
///
/// Every generated type:
///
/// - derives `Clone, Copy, Debug, Default, PartialEq, PartialOrd`, so
///   comparisons delegate to `Inner` (NaN included);
/// - is built with `Name::new` (const) or `Name::from`, and unwrapped with
///   `get` (const), `get_mut`, or `Inner::from`;
/// - supports `+ - * /` and `+= -= *= /=` against itself only, with
///   `Inner`'s overflow and division-by-zero behaviour;
/// - sums over iterators of `Name` or `&Name`;
/// - renders through `Display` exactly as `Inner` does, flags included;
/// - parses from text via `FromStr`, failing with [`ParseTypedefError`];
/// - implements [`StrongTypedef`].
///
/// Attributes and visibility are passed through, so an integer wrapper can
/// opt into `#[derive(Eq, Ord)]`. For `Hash`, see
/// [`strong_typedef_hashable!`](crate::strong_typedef_hashable).
///
/// ```
/// use strong_typedef::strong_typedef;
///
/// strong_typedef! {
///     /// Distance along a route.
///     pub struct Meters(f64);
///
///     #[derive(Eq, Ord)]
///     pub struct Count(u32);
/// }
///
/// let total = Meters::new(10.0) + Meters::new(5.0);
/// assert_eq!(total.get(), 15.0);
/// assert_eq!(total.to_string(), "15");
/// assert!(Count::new(1) < Count::new(2));
/// ```
///
/// Wrappers never mix with each other:
///
/// ```compile_fail
/// use strong_typedef::strong_typedef;
///
/// strong_typedef! {
///     pub struct Meters(f64);
///     pub struct Seconds(f64);
/// }
///
/// let _ = Meters::new(10.0) == Seconds::new(10.0);
/// ```
///
/// ```compile_fail
/// use strong_typedef::strong_typedef;
///
/// strong_typedef! {
///     pub struct Meters(f64);
///     pub struct Seconds(f64);
/// }
///
/// let _ = Meters::new(10.0) + Seconds::new(10.0);
/// ```
///
/// ```compile_fail
/// use strong_typedef::strong_typedef;
///
/// strong_typedef! {
///     pub struct Meters(f64);
///     pub struct Seconds(f64);
/// }
///
/// fn pace(distance: Meters) -> Meters {
///     distance
/// }
///
/// let _ = pace(Seconds::new(1.0));
/// ```
///
/// Nor with raw scalars:
///
/// ```compile_fail
/// use strong_typedef::strong_typedef;
///
/// strong_typedef! {
///     pub struct Meters(f64);
/// }
///
/// let _ = Meters::new(1.0) + 1.0;
/// ```
///
/// ```compile_fail
/// use strong_typedef::strong_typedef;
///
/// strong_typedef! {
///     pub struct Meters(f64);
/// }
///
/// let raw: f64 = Meters::new(1.0);
/// ```
///
/// ```compile_fail
/// use strong_typedef::strong_typedef;
///
/// strong_typedef! {
///     pub struct Meters(f64);
/// }
///
/// let _ = Meters::new(1.0) < 2.0;
/// ```
///
/// Non-arithmetic underlying types are rejected:
///
/// ```compile_fail
/// use strong_typedef::strong_typedef;
///
/// strong_typedef! {
///     pub struct Name(String);
/// }
/// ```
///
/// ```compile_fail
/// use strong_typedef::strong_typedef;
///
/// strong_typedef! {
///     pub struct Flag(bool);
/// }
/// ```
#[macro_export]
macro_rules! strong_typedef {
    ($(
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($inner:ty);
    )+) => {
        $(
            $(#[$meta])*
            #[derive(
                ::core::clone::Clone,
                ::core::marker::Copy,
                ::core::fmt::Debug,
                ::core::default::Default,
                ::core::cmp::PartialEq,
                ::core::cmp::PartialOrd,
            )]
            #[repr(transparent)]
            $vis struct $name($inner);

            const _: () = $crate::assert_arithmetic::<$inner>();

            impl $name {
                #[must_use]
                #[inline]
                pub const fn new(value: $inner) -> Self {
                    Self(value)
                }

                #[must_use]
                #[inline]
                pub const fn get(self) -> $inner {
                    self.0
                }

                #[inline]
                pub const fn get_mut(&mut self) -> &mut $inner {
                    &mut self.0
                }
            }

            impl $crate::StrongTypedef for $name {
                type Inner = $inner;

                const NAME: &'static str = ::core::stringify!($name);

                #[inline]
                fn from_inner(value: $inner) -> Self {
                    Self(value)
                }

                #[inline]
                fn into_inner(self) -> $inner {
                    self.0
                }

                #[inline]
                fn inner_mut(&mut self) -> &mut $inner {
                    &mut self.0
                }
            }

            impl ::core::convert::From<$inner> for $name {
                #[inline]
                fn from(value: $inner) -> Self {
                    Self(value)
                }
            }

            impl ::core::convert::From<$name> for $inner {
                #[inline]
                fn from(value: $name) -> Self {
                    value.0
                }
            }

            impl ::core::ops::Add for $name {
                type Output = Self;

                #[inline]
                fn add(self, rhs: Self) -> Self {
                    Self(self.0 + rhs.0)
                }
            }

            impl ::core::ops::Sub for $name {
                type Output = Self;

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    Self(self.0 - rhs.0)
                }
            }

            impl ::core::ops::Mul for $name {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    Self(self.0 * rhs.0)
                }
            }

            impl ::core::ops::Div for $name {
                type Output = Self;

                #[inline]
                fn div(self, rhs: Self) -> Self {
                    Self(self.0 / rhs.0)
                }
            }

            impl ::core::ops::AddAssign for $name {
                #[inline]
                fn add_assign(&mut self, rhs: Self) {
                    self.0 += rhs.0;
                }
            }

            impl ::core::ops::SubAssign for $name {
                #[inline]
                fn sub_assign(&mut self, rhs: Self) {
                    self.0 -= rhs.0;
                }
            }

            impl ::core::ops::MulAssign for $name {
                #[inline]
                fn mul_assign(&mut self, rhs: Self) {
                    self.0 *= rhs.0;
                }
            }

            impl ::core::ops::DivAssign for $name {
                #[inline]
                fn div_assign(&mut self, rhs: Self) {
                    self.0 /= rhs.0;
                }
            }

            impl ::core::iter::Sum for $name {
                fn sum<I: ::core::iter::Iterator<Item = Self>>(iter: I) -> Self {
                    iter.fold(<Self as ::core::default::Default>::default(), |acc, x| acc + x)
                }
            }

            impl<'a> ::core::iter::Sum<&'a $name> for $name {
                fn sum<I: ::core::iter::Iterator<Item = &'a Self>>(iter: I) -> Self {
                    iter.fold(<Self as ::core::default::Default>::default(), |acc, x| acc + *x)
                }
            }

            impl ::core::fmt::Display for $name {
                #[inline]
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(&self.0, f)
                }
            }

            impl ::core::str::FromStr for $name {
                type Err = $crate::ParseTypedefError;

                fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                    <$inner as ::core::str::FromStr>::from_str(s)
                        .map(Self)
                        .map_err(|source| {
                            $crate::ParseTypedefError::new(::core::stringify!($name), s, source)
                        })
                }
            }
        )+
    };
}
