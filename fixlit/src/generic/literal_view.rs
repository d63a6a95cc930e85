//! Conversion from terminated unit buffers into literals.

use core::fmt;
use core::ops::Deref;

use crate::element::{LiteralChar, Units};
use crate::error::Result;
use crate::generic::bounded_literal::BoundedLiteral;

/// A literal built by scanning a terminated buffer.
///
/// The length is the number of units before the first terminator, or the whole
/// buffer when there is none. Use [`to_literal!`](crate::to_literal) to size the
/// view from the buffer at compile time.
///
/// ```rust
/// use fixlit::LiteralView;
///
/// const VIEW: LiteralView<u8, 8> = match LiteralView::<u8, 8>::from_units(b"dir\0ectory") {
///     Ok(view) => view,
///     Err(err) => panic!("{}", err.as_str()),
/// };
/// assert_eq!(VIEW.length(), 3);
/// assert_eq!(VIEW.size(), 8);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LiteralView<C, const N: usize> {
    literal: BoundedLiteral<C, N>,
}

impl<C: LiteralChar, const N: usize> LiteralView<C, N> {
    pub const fn as_literal(&self) -> &BoundedLiteral<C, N> {
        &self.literal
    }

    pub const fn into_literal(self) -> BoundedLiteral<C, N> {
        self.literal
    }
}

macro_rules! impl_from_units {
    ($($unit:ty),* $(,)?) => {$(
        impl<const N: usize> LiteralView<$unit, N> {
            /// Scans `units` up to the first terminator and copies that prefix.
            ///
            /// Fails with [`LiteralError::Overflow`](crate::LiteralError::Overflow)
            /// when the prefix is longer than `N`.
            pub const fn from_units(units: &[$unit]) -> Result<Self> {
                let (prefix, _) = units.split_at(Units::<$unit>::length(units));
                match BoundedLiteral::from_elements(prefix) {
                    Ok(literal) => Ok(Self { literal }),
                    Err(err) => Err(err),
                }
            }
        }
    )*};
}

impl_from_units!(u8, u16, u32, char);

impl<C: LiteralChar, const N: usize> Deref for LiteralView<C, N> {
    type Target = BoundedLiteral<C, N>;

    fn deref(&self) -> &Self::Target {
        &self.literal
    }
}

impl<C: LiteralChar, const N: usize> From<LiteralView<C, N>> for BoundedLiteral<C, N> {
    fn from(view: LiteralView<C, N>) -> Self {
        view.literal
    }
}

impl<C: LiteralChar, const N: usize> fmt::Display for LiteralView<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.literal, f)
    }
}
