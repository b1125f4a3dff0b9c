//! Opt-in hashing for generated wrappers.

/// Makes wrappers declared with [`strong_typedef!`](crate::strong_typedef)
/// usable as `HashMap`/`HashSet` keys by implementing `Eq` and `Hash`.
///
/// The hash unwraps and delegates to the primitive: integers hash as
/// themselves, floats hash their bits with `-0.0` folded into `0.0`, so equal
/// wrappers always hash equally. Don't also derive `Eq` or `Hash` on a
/// wrapper passed here. A float wrapper still never equals a NaN, so a NaN
/// key can be inserted but not found again.
///
/// The `Inner => Name` form also checks that `Name` wraps `Inner`.
///
/// ```
/// use std::collections::HashMap;
///
/// use strong_typedef::{strong_typedef, strong_typedef_hashable};
///
/// strong_typedef! {
///     pub struct NodeId(u64);
///     pub struct Latitude(f64);
/// }
/// strong_typedef_hashable!(NodeId);
/// strong_typedef_hashable!(f64 => Latitude);
///
/// let mut names = HashMap::new();
/// names.insert(NodeId::new(7), "depot");
/// assert_eq!(names.get(&NodeId::new(7)), Some(&"depot"));
///
/// let mut seen = std::collections::HashSet::new();
/// seen.insert(Latitude::new(0.0));
/// assert!(seen.contains(&Latitude::new(-0.0)));
/// ```
///
/// ```compile_fail
/// use strong_typedef::{strong_typedef, strong_typedef_hashable};
///
/// strong_typedef! {
///     pub struct Latitude(f64);
/// }
/// strong_typedef_hashable!(f32 => Latitude);
/// ```
///
/// Without this macro a wrapper cannot key a hash map:
///
/// ```compile_fail
/// use std::collections::HashSet;
///
/// use strong_typedef::strong_typedef;
///
/// strong_typedef! {
///     pub struct Latitude(f64);
/// }
///
/// let mut seen = HashSet::new();
/// seen.insert(Latitude::new(1.0));
/// ```
#[macro_export]
macro_rules! strong_typedef_hashable {
    ($inner:ty => $name:path) => {
        const _: fn($name) -> $inner = <$name as $crate::StrongTypedef>::into_inner;

        $crate::strong_typedef_hashable!($name);
    };
    ($($name:path),+ $(,)?) => {
        $(
            impl ::core::cmp::Eq for $name {}

            impl ::core::hash::Hash for $name {
                #[inline]
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    $crate::Arithmetic::hash_value(
                        <$name as $crate::StrongTypedef>::into_inner(*self),
                        state,
                    );
                }
            }
        )+
    };
}
