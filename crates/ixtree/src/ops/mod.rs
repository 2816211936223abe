//! Module of operations that the trees aggregate with.
//!
//! A tree needs some operation, and this module contains the main [`Operation`] trait,
//! together with the marker trait [`Commutative`] and the [`Identity`] and [`Invertible`]
//! extensions. The lazy segment tree additionally needs its values to accept additive
//! tags, which is described by [`Delta`].
//!
//! Any closure or function with the signature `Fn(&N, &N) -> N` is an [`Operation`], so
//! callers can plug in their own merge without defining a type:
//!
//! ```rust
//! use ixtree::LazySegmentTree;
//!
//! let mut tree = LazySegmentTree::build(vec![4i64, 1, 3], i64::MIN, |a: &i64, b: &i64| *a.max(b));
//! tree.range_add(0, 1, 10).unwrap();
//! assert_eq!(tree.root(), &14);
//! ```

use core::num::Wrapping;

/// A trait that specifies which associative operator to use in a tree.
pub trait Operation<N> {
    /// The operation that is performed to combine two intervals in the tree.
    ///
    /// This function must be [associative][1], that is `combine(combine(a, b), c) =
    /// combine(a, combine(b, c))`. This is not checked at runtime.
    ///
    /// [1]: https://en.wikipedia.org/wiki/Associative_property
    fn combine(&self, a: &N, b: &N) -> N;
    /// Replace the value in `a` with `combine(a, b)`. This function exists to allow
    /// certain optimizations and by default simply calls `combine`.
    #[inline]
    fn combine_mut(&self, a: &mut N, b: &N) {
        let res = self.combine(&*a, b);
        *a = res;
    }
    /// Must return the same as `combine`. This function exists to allow certain
    /// optimizations and by default simply calls `combine_mut`.
    #[inline]
    fn combine_left(&self, mut a: N, b: &N) -> N {
        self.combine_mut(&mut a, b);
        a
    }
}

impl<N, F> Operation<N> for F
where
    F: Fn(&N, &N) -> N,
{
    #[inline]
    fn combine(&self, a: &N, b: &N) -> N {
        self(a, b)
    }
}

/// A marker trait that specifies that an [`Operation`] is [commutative][1], that is:
/// `combine(a, b) = combine(b, a)`.
///
/// [1]: https://en.wikipedia.org/wiki/Commutative_property
pub trait Commutative<N>: Operation<N> {}

/// A trait that specifies that this [`Operation`] has an [identity element][1].
///
/// An identity must satisfy `combine(a, id) = a` and `combine(id, a) = a`.
///
/// [1]: https://en.wikipedia.org/wiki/Identity_element
pub trait Identity<N> {
    /// Returns an element such that if combined with any element `a` the result is `a`.
    fn identity(&self) -> N;
}

/// A trait for invertible operations.
///
/// After `combine_mut(&mut a, &b)` followed by `uncombine(&mut a, &b)` the value of `a`
/// must be unchanged.
pub trait Invertible<N> {
    /// Undo a previous `combine_mut(a, b)`.
    fn uncombine(&self, a: &mut N, b: &N);
}

/// An additive tag that can be recorded at a tree node and applied to values later on.
///
/// `zero` must be neutral for `apply`, and applying two tags in sequence must be the same
/// as applying their sum.
pub trait Delta: Clone {
    /// Returns the tag that changes nothing.
    fn zero() -> Self;
    /// Returns `true` if applying this tag is a no-op.
    fn is_zero(&self) -> bool;
    /// Adds `delta` to `self`.
    fn apply(&mut self, delta: &Self);
}

/// Each node contains the sum of the interval it represents.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Add;

/// Each node contains the minimum of the interval it represents.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Min;

/// Each node contains the maximum of the interval it represents.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct Max;

macro_rules! impl_operation_infix {
    ($op:ty, $ty:ty, $combineop:tt, $doc:expr) => {
        impl Operation<$ty> for $op {
            #[doc = $doc]
            #[inline]
            fn combine(&self, a: &$ty, b: &$ty) -> $ty {
                *a $combineop *b
            }
        }
    }
}
macro_rules! impl_operation_prefix {
    ($op:ty, $ty:ty, $combinef:expr, $doc:expr) => {
        impl Operation<$ty> for $op {
            #[doc = $doc]
            #[inline]
            fn combine(&self, a: &$ty, b: &$ty) -> $ty {
                $combinef(*a, *b)
            }
        }
    };
}
macro_rules! impl_identity {
    ($op:ty, $ty:ty, $iden:expr, $doc:expr) => {
        impl Identity<$ty> for $op {
            #[doc = $doc]
            #[inline]
            fn identity(&self) -> $ty {
                $iden
            }
        }
    };
}
macro_rules! impl_inverse {
    ($op:ty, $ty:ty, $uncombineop:tt, $doc:expr) => {
        impl Invertible<$ty> for $op {
            #[doc = $doc]
            #[inline]
            fn uncombine(&self, a: &mut $ty, b: &$ty) {
                *a = *a $uncombineop *b;
            }
        }
    }
}
macro_rules! impl_delta {
    ($ty:ty, $zero:expr) => {
        impl Delta for $ty {
            #[inline]
            fn zero() -> Self {
                $zero
            }
            #[inline]
            fn is_zero(&self) -> bool {
                *self == $zero
            }
            #[inline]
            fn apply(&mut self, delta: &Self) {
                *self = *self + *delta;
            }
        }
    };
}
macro_rules! impl_integer {
    ($ty:tt) => {
        impl_operation_infix!(Add, $ty, +, "Returns the sum.");
        impl_identity!(Add, $ty, 0, "Returns zero.");
        impl_inverse!(Add, $ty, -, "Returns the difference.");
        impl Commutative<$ty> for Add {}

        impl_operation_infix!(Add, Wrapping<$ty>, +, "Returns the sum.");
        impl_identity!(Add, Wrapping<$ty>, Wrapping(0), "Returns zero.");
        impl_inverse!(Add, Wrapping<$ty>, -, "Returns the difference.");
        impl Commutative<Wrapping<$ty>> for Add {}

        impl_operation_prefix!(Min, $ty, core::cmp::min, "Returns the minimum.");
        impl_identity!(Min, $ty, $ty::MAX, "Returns the largest possible value.");
        impl Commutative<$ty> for Min {}

        impl_operation_prefix!(Max, $ty, core::cmp::max, "Returns the maximum.");
        impl_identity!(Max, $ty, $ty::MIN, "Returns the smallest possible value.");
        impl Commutative<$ty> for Max {}

        impl_delta!($ty, 0);
        impl_delta!(Wrapping<$ty>, Wrapping(0));
    };
}
impl_integer!(u8);
impl_integer!(u16);
impl_integer!(u32);
impl_integer!(u64);
impl_integer!(u128);
impl_integer!(usize);
impl_integer!(i8);
impl_integer!(i16);
impl_integer!(i32);
impl_integer!(i64);
impl_integer!(i128);
impl_integer!(isize);

macro_rules! impl_float {
    ($ty:tt) => {
        impl_operation_infix!(Add, $ty, +, "Returns the sum.");
        impl_identity!(Add, $ty, 0.0, "Returns zero.");
        impl_inverse!(Add, $ty, -, "Returns the difference.");
        impl Commutative<$ty> for Add {}

        impl_operation_prefix!(Min, $ty, $ty::min, "Returns the minimum, ignoring NaN.");
        impl_identity!(Min, $ty, $ty::INFINITY, "Returns infinity.");
        impl Commutative<$ty> for Min {}

        impl_operation_prefix!(Max, $ty, $ty::max, "Returns the maximum, ignoring NaN.");
        impl_identity!(Max, $ty, $ty::NEG_INFINITY, "Returns negative infinity.");
        impl Commutative<$ty> for Max {}

        impl_delta!($ty, 0.0);
    };
}
impl_float!(f32);
impl_float!(f64);
