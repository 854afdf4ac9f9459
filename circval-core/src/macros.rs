//! Macros for wiring up conversions between ranges.

/// Generates `From` implementations for all pairs of ranges in the list.
///
/// A blanket `impl<A, B> From<Circular<A>> for Circular<B>` would overlap with the reflexive `From<T> for T`, so
/// each pair is spelled out. For every ordered pair the macro implements `From` for [`Circular`](crate::Circular),
/// [`ArcLength`](crate::ArcLength) and [`CircArc`](crate::CircArc), each delegating to the type's `to` method.
#[macro_export]
macro_rules! impl_range_conversions {
    (@pair $from:ty, $to:ty) => {
        impl From<$crate::Circular<$from>> for $crate::Circular<$to> {
            fn from(value: $crate::Circular<$from>) -> Self {
                value.to::<$to>()
            }
        }

        impl From<$crate::ArcLength<$from>> for $crate::ArcLength<$to> {
            fn from(value: $crate::ArcLength<$from>) -> Self {
                value.to::<$to>()
            }
        }

        impl From<$crate::CircArc<$from>> for $crate::CircArc<$to> {
            fn from(value: $crate::CircArc<$from>) -> Self {
                value.to::<$to>()
            }
        }
    };

    // Base case: single range, no conversions needed
    ($range:ty) => {};
    ($range:ty,) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            $crate::impl_range_conversions!(@pair $first, $rest);
            $crate::impl_range_conversions!(@pair $rest, $first);
        )+

        $crate::impl_range_conversions!($($rest),+);
    };
}
