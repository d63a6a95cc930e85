//! Ordering and equality for literals.
//!
//! Every relation comes from one primitive, "precedes", computed by
//! [`Units::precedes`](crate::Units). Literal-to-literal relations are wired
//! into the standard operators through [`CompDef`]. Raw unit arrays are reached
//! through [`LessThan`] and the `*_with` methods of [`CompDef`], plus the const
//! methods on [`BoundedLiteral`] below.
//!
//! The primitive is not a strict weak order: a position where the left side is
//! greater does not stop the scan, so `"ba"` and `"ab"` each precede the other.
//! `partial_cmp` reports such pairs as `None`.

use core::cmp::Ordering;

use fixlit_compare::{partial_cmp_with, CompDef, LessThan};

use crate::element::{LiteralChar, Units};
use crate::generic::bounded_literal::BoundedLiteral;
use crate::generic::concat::Concat;

impl<C: LiteralChar, const N: usize, const M: usize> LessThan<BoundedLiteral<C, M>>
    for BoundedLiteral<C, N>
{
    fn less_than(&self, other: &BoundedLiteral<C, M>) -> bool {
        C::precedes(self.get(), self.length(), other.get(), other.length())
    }
}

/// A raw array is read up to its first terminator, or in full when it has none.
impl<C: LiteralChar, const N: usize, const M: usize> LessThan<[C; M]> for BoundedLiteral<C, N> {
    fn less_than(&self, other: &[C; M]) -> bool {
        C::precedes(self.get(), self.length(), other, C::length(other))
    }
}

impl<C: LiteralChar, const N: usize, const M: usize> LessThan<BoundedLiteral<C, N>> for [C; M] {
    fn less_than(&self, other: &BoundedLiteral<C, N>) -> bool {
        C::precedes(self, C::length(self), other.get(), other.length())
    }
}

impl<C: LiteralChar, const N: usize> CompDef for BoundedLiteral<C, N> {}

impl<C: LiteralChar, const N: usize, const M: usize> PartialEq<BoundedLiteral<C, M>>
    for BoundedLiteral<C, N>
{
    fn eq(&self, other: &BoundedLiteral<C, M>) -> bool {
        self.equal_with(other)
    }
}

impl<C: LiteralChar, const N: usize, const M: usize> PartialOrd<BoundedLiteral<C, M>>
    for BoundedLiteral<C, N>
{
    fn partial_cmp(&self, other: &BoundedLiteral<C, M>) -> Option<Ordering> {
        partial_cmp_with(self, other)
    }

    fn lt(&self, other: &BoundedLiteral<C, M>) -> bool {
        self.less_than(other)
    }

    fn gt(&self, other: &BoundedLiteral<C, M>) -> bool {
        self.greater_than_with(other)
    }

    fn le(&self, other: &BoundedLiteral<C, M>) -> bool {
        self.less_or_equal_with(other)
    }

    fn ge(&self, other: &BoundedLiteral<C, M>) -> bool {
        self.greater_or_equal_with(other)
    }
}

/// The [`Units::precedes`] scan over units that are not stored contiguously.
fn precedes_runs<C, L, R>(lhs: L, lhs_len: usize, rhs: R, rhs_len: usize) -> bool
where
    C: LiteralChar,
    L: Iterator<Item = C>,
    R: Iterator<Item = C>,
{
    lhs.zip(rhs).any(|(l, r)| l < r) || lhs_len < rhs_len
}

impl<C: LiteralChar, const N: usize, const M: usize, const P: usize>
    LessThan<BoundedLiteral<C, P>> for Concat<C, N, M>
{
    fn less_than(&self, other: &BoundedLiteral<C, P>) -> bool {
        precedes_runs(
            self.iter().copied(),
            self.length(),
            other.iter().copied(),
            other.length(),
        )
    }
}

impl<C: LiteralChar, const N: usize, const M: usize, const P: usize>
    LessThan<Concat<C, N, M>> for BoundedLiteral<C, P>
{
    fn less_than(&self, other: &Concat<C, N, M>) -> bool {
        precedes_runs(
            self.iter().copied(),
            self.length(),
            other.iter().copied(),
            other.length(),
        )
    }
}

impl<C: LiteralChar, const N: usize, const M: usize, const P: usize, const Q: usize>
    LessThan<Concat<C, P, Q>> for Concat<C, N, M>
{
    fn less_than(&self, other: &Concat<C, P, Q>) -> bool {
        precedes_runs(
            self.iter().copied(),
            self.length(),
            other.iter().copied(),
            other.length(),
        )
    }
}

impl<C: LiteralChar, const N: usize, const M: usize> CompDef for Concat<C, N, M> {}

impl<C: LiteralChar, const N: usize, const M: usize, const P: usize>
    PartialEq<BoundedLiteral<C, P>> for Concat<C, N, M>
{
    fn eq(&self, other: &BoundedLiteral<C, P>) -> bool {
        self.equal_with(other)
    }
}

impl<C: LiteralChar, const N: usize, const M: usize, const P: usize>
    PartialEq<Concat<C, N, M>> for BoundedLiteral<C, P>
{
    fn eq(&self, other: &Concat<C, N, M>) -> bool {
        self.equal_with(other)
    }
}

impl<C: LiteralChar, const N: usize, const M: usize, const P: usize, const Q: usize>
    PartialEq<Concat<C, P, Q>> for Concat<C, N, M>
{
    fn eq(&self, other: &Concat<C, P, Q>) -> bool {
        self.equal_with(other)
    }
}

impl<C: LiteralChar, const N: usize, const M: usize, const P: usize>
    PartialOrd<BoundedLiteral<C, P>> for Concat<C, N, M>
{
    fn partial_cmp(&self, other: &BoundedLiteral<C, P>) -> Option<Ordering> {
        partial_cmp_with(self, other)
    }

    fn lt(&self, other: &BoundedLiteral<C, P>) -> bool {
        self.less_than(other)
    }

    fn gt(&self, other: &BoundedLiteral<C, P>) -> bool {
        self.greater_than_with(other)
    }

    fn le(&self, other: &BoundedLiteral<C, P>) -> bool {
        self.less_or_equal_with(other)
    }

    fn ge(&self, other: &BoundedLiteral<C, P>) -> bool {
        self.greater_or_equal_with(other)
    }
}

impl<C: LiteralChar, const N: usize, const M: usize, const P: usize>
    PartialOrd<Concat<C, N, M>> for BoundedLiteral<C, P>
{
    fn partial_cmp(&self, other: &Concat<C, N, M>) -> Option<Ordering> {
        partial_cmp_with(self, other)
    }

    fn lt(&self, other: &Concat<C, N, M>) -> bool {
        self.less_than(other)
    }

    fn gt(&self, other: &Concat<C, N, M>) -> bool {
        self.greater_than_with(other)
    }

    fn le(&self, other: &Concat<C, N, M>) -> bool {
        self.less_or_equal_with(other)
    }

    fn ge(&self, other: &Concat<C, N, M>) -> bool {
        self.greater_or_equal_with(other)
    }
}

macro_rules! impl_const_ordering {
    ($($unit:ty),* $(,)?) => {$(
        impl<const N: usize> BoundedLiteral<$unit, N> {
            /// `self < other`, usable in const contexts.
            pub const fn precedes<const M: usize>(&self, other: &BoundedLiteral<$unit, M>) -> bool {
                Units::<$unit>::precedes(self.get(), self.length(), other.get(), other.length())
            }

            /// `self < raw`, with `raw` read up to its first terminator.
            pub const fn precedes_raw<const M: usize>(&self, raw: &[$unit; M]) -> bool {
                Units::<$unit>::precedes(self.get(), self.length(), raw, Units::<$unit>::length(raw))
            }

            /// `raw < self`, with `raw` read up to its first terminator.
            pub const fn raw_precedes<const M: usize>(&self, raw: &[$unit; M]) -> bool {
                Units::<$unit>::precedes(raw, Units::<$unit>::length(raw), self.get(), self.length())
            }

            /// Neither side precedes the other.
            pub const fn equals<const M: usize>(&self, other: &BoundedLiteral<$unit, M>) -> bool {
                !self.precedes(other) && !other.precedes(self)
            }

            /// [`Units::is_same_n`] over all `N` storage positions.
            ///
            /// A literal shorter than its capacity has a terminator inside the
            /// compared width and never matches.
            pub const fn is_same(&self, units: &[$unit]) -> bool {
                Units::<$unit>::is_same_n(self.get(), units, N)
            }
        }
    )*};
}

impl_const_ordering!(u8, u16, u32, char);
