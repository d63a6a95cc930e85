//! Element types a literal can hold, and const helpers over raw element buffers.
//!
//! Comparisons on a generic element type cannot run in a `const fn`, so every
//! routine that compares elements is stamped out once per supported type on
//! [`Units`]. [`LiteralChar`] routes runtime trait impls to the same routines.

use core::fmt::{self, Write};
use core::marker::PhantomData;

mod sealed {
    pub trait Sealed {}
}

/// A code unit a literal can store: `u8`, `u16`, `u32` or `char`.
pub trait LiteralChar: Copy + PartialEq + PartialOrd + fmt::Debug + sealed::Sealed + 'static {
    /// Terminator value. Also fills the storage past the logical length.
    const NUL: Self;

    /// Runtime entry to [`Units::length`] for this element type.
    fn length(units: &[Self]) -> usize;

    /// Runtime entry to [`Units::precedes`] for this element type.
    fn precedes(lhs: &[Self], lhs_len: usize, rhs: &[Self], rhs_len: usize) -> bool;

    /// Renders `units` as text.
    fn write_units(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Const helpers over element buffers, one inherent impl per element type.
///
/// ```rust
/// use fixlit::Units;
///
/// const LEN: usize = Units::<u8>::length(b"help\0trailing");
/// assert_eq!(LEN, 4);
///
/// assert!(Units::<u8>::is_same_n(b"directory", b"directory", 9));
/// assert!(!Units::<u8>::is_same_n(b"directory", b"help", 9));
/// ```
pub struct Units<C>(PhantomData<C>);

macro_rules! impl_units {
    ($($unit:ty),* $(,)?) => {$(
        impl sealed::Sealed for $unit {}

        impl Units<$unit> {
            /// Number of units before the first terminator, or the slice length
            /// when there is none.
            pub const fn length(units: &[$unit]) -> usize {
                let mut index = 0;
                while index < units.len() && units[index] != <$unit as LiteralChar>::NUL {
                    index += 1;
                }
                index
            }

            /// Compares exactly `n` positions.
            ///
            /// Any differing position, or a terminator on either side before
            /// position `n`, yields `false`. Running past the end of a slice
            /// counts as reaching its terminator. Identical strings shorter than
            /// `n` are therefore reported as different.
            pub const fn is_same_n(lhs: &[$unit], rhs: &[$unit], n: usize) -> bool {
                let nul = <$unit as LiteralChar>::NUL;
                let mut index = 0;
                while index < n {
                    if index >= lhs.len() || index >= rhs.len() {
                        return false;
                    }
                    if lhs[index] != rhs[index] || lhs[index] == nul || rhs[index] == nul {
                        return false;
                    }
                    index += 1;
                }
                true
            }

            /// The ordering scan shared by every literal comparison.
            ///
            /// Walks the first `min(lhs_len, rhs_len)` positions and returns
            /// `true` at the first position where `lhs` is strictly less. A
            /// strictly greater position does not end the scan. When no position
            /// reports less, the shorter side precedes.
            pub const fn precedes(lhs: &[$unit], lhs_len: usize, rhs: &[$unit], rhs_len: usize) -> bool {
                let shorter = if lhs_len < rhs_len { lhs_len } else { rhs_len };
                let mut index = 0;
                while index < shorter {
                    if lhs[index] < rhs[index] {
                        return true;
                    }
                    index += 1;
                }
                lhs_len < rhs_len
            }
        }
    )*};
}

impl_units!(u8, u16, u32, char);

impl LiteralChar for u8 {
    const NUL: Self = 0;

    fn length(units: &[Self]) -> usize {
        Units::<u8>::length(units)
    }

    fn precedes(lhs: &[Self], lhs_len: usize, rhs: &[Self], rhs_len: usize) -> bool {
        Units::<u8>::precedes(lhs, lhs_len, rhs, rhs_len)
    }

    fn write_units(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match core::str::from_utf8(units) {
            Ok(text) => f.write_str(text),
            Err(_) => write!(f, "{}", units.escape_ascii()),
        }
    }
}

impl LiteralChar for u16 {
    const NUL: Self = 0;

    fn length(units: &[Self]) -> usize {
        Units::<u16>::length(units)
    }

    fn precedes(lhs: &[Self], lhs_len: usize, rhs: &[Self], rhs_len: usize) -> bool {
        Units::<u16>::precedes(lhs, lhs_len, rhs, rhs_len)
    }

    fn write_units(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for decoded in char::decode_utf16(units.iter().copied()) {
            f.write_char(decoded.unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl LiteralChar for u32 {
    const NUL: Self = 0;

    fn length(units: &[Self]) -> usize {
        Units::<u32>::length(units)
    }

    fn precedes(lhs: &[Self], lhs_len: usize, rhs: &[Self], rhs_len: usize) -> bool {
        Units::<u32>::precedes(lhs, lhs_len, rhs, rhs_len)
    }

    fn write_units(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in units {
            f.write_char(char::from_u32(*unit).unwrap_or(char::REPLACEMENT_CHARACTER))?;
        }
        Ok(())
    }
}

impl LiteralChar for char {
    const NUL: Self = '\0';

    fn length(units: &[Self]) -> usize {
        Units::<char>::length(units)
    }

    fn precedes(lhs: &[Self], lhs_len: usize, rhs: &[Self], rhs_len: usize) -> bool {
        Units::<char>::precedes(lhs, lhs_len, rhs, rhs_len)
    }

    fn write_units(units: &[Self], f: &mut fmt::Formatter<'_>) -> fmt::Result {
        units.iter().try_for_each(|unit| f.write_char(*unit))
    }
}
