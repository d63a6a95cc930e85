//! Sources that can be appended to a [`BoundedLiteral`].
//!
//! [`AppendSource`] plays the role `PushPopCollection` plays for lists: one
//! small trait so `append` and `+=` accept every right-hand side through a
//! single code path.

use core::ops::AddAssign;
use core::slice;

use crate::element::LiteralChar;
use crate::generic::bounded_literal::BoundedLiteral;
use crate::generic::concat::Concat;
use crate::generic::literal_view::LiteralView;

/// Anything that can hand out a run of units to append.
pub trait AppendSource<C> {
    /// The units to append. Raw buffers are cut at their first terminator.
    fn units(&self) -> &[C];

    /// Units appended right after [`units`](Self::units), for sources stored
    /// in two runs. Both runs are checked against the capacity together.
    fn trailing_units(&self) -> &[C] {
        &[]
    }
}

impl<C: LiteralChar> AppendSource<C> for [C] {
    fn units(&self) -> &[C] {
        let end = self
            .iter()
            .position(|unit| *unit == C::NUL)
            .unwrap_or(self.len());
        &self[..end]
    }
}

impl<C: LiteralChar, const M: usize> AppendSource<C> for [C; M] {
    fn units(&self) -> &[C] {
        AppendSource::<C>::units(self.as_slice())
    }
}

impl<C: LiteralChar, const M: usize> AppendSource<C> for BoundedLiteral<C, M> {
    fn units(&self) -> &[C] {
        self.as_slice()
    }
}

impl<C: LiteralChar, const M: usize> AppendSource<C> for LiteralView<C, M> {
    fn units(&self) -> &[C] {
        self.as_literal().as_slice()
    }
}

impl<C: LiteralChar, const N: usize, const M: usize> AppendSource<C> for Concat<C, N, M> {
    fn units(&self) -> &[C] {
        self.head().as_slice()
    }

    fn trailing_units(&self) -> &[C] {
        self.tail().as_slice()
    }
}

impl AppendSource<u8> for str {
    fn units(&self) -> &[u8] {
        AppendSource::<u8>::units(self.as_bytes())
    }
}

/// Compound append.
///
/// # Panics
///
/// Panics with the [`LiteralError`](crate::LiteralError) message when the
/// content does not fit. Use [`BoundedLiteral::append`] to handle the error.
impl<C, S, const N: usize> AddAssign<&S> for BoundedLiteral<C, N>
where
    C: LiteralChar,
    S: AppendSource<C> + ?Sized,
{
    fn add_assign(&mut self, source: &S) {
        if let Err(err) = self.append(source) {
            panic!("compound append failed: {err}");
        }
    }
}

macro_rules! impl_unit_source {
    ($($unit:ty),* $(,)?) => {$(
        impl AppendSource<$unit> for $unit {
            fn units(&self) -> &[$unit] {
                slice::from_ref(self)
            }
        }

        /// Compound append of a single unit. Panics on overflow like `+= &source`.
        impl<const N: usize> AddAssign<$unit> for BoundedLiteral<$unit, N> {
            fn add_assign(&mut self, unit: $unit) {
                if let Err(err) = self.push(unit) {
                    panic!("compound append failed: {err}");
                }
            }
        }
    )*};
}

impl_unit_source!(u8, u16, u32, char);
