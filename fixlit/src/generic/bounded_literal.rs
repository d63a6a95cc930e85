//! Fixed-capacity string literal for allocation-free and compile-time use.
//!
//! This module provides [`BoundedLiteral`], an array-backed string with a tracked
//! logical length. Construction, size queries and concatenation are `const fn`s,
//! so literals can be built and combined while evaluating constants.

use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

use bytemuck::Zeroable;

use crate::element::LiteralChar;
use crate::error::{LiteralError, Result};
use crate::generic::append::AppendSource;

/// Compile-time checks on a single capacity.
struct Capacity<const N: usize>;

impl<const N: usize> Capacity<N> {
    const NONZERO: () = assert!(N > 0, "a literal needs a capacity of at least one element");
}

/// Compile-time check that a concatenation target fits both operands exactly.
struct CapacitySum<const N: usize, const M: usize, const O: usize>;

impl<const N: usize, const M: usize, const O: usize> CapacitySum<N, M, O> {
    const EXACT: () = assert!(
        O == N + M,
        "concatenated capacity must equal the sum of both capacities"
    );
}

/// A string literal stored in a fixed array of `N` code units.
///
/// Only the first [`length`](Self::length) units are content. The remaining
/// slots hold [`LiteralChar::NUL`] and stay addressable through indexing.
///
/// # Type Parameters
///
/// * `C` - The code unit: `u8`, `u16`, `u32` or `char`.
/// * `N` - The capacity in units. Zero is rejected at compile time.
///
/// # Examples
///
/// ```rust
/// use fixlit::BoundedLiteral;
///
/// const DIRECTORY: BoundedLiteral<u8, 9> = BoundedLiteral::from_array(b"directory");
/// const _: () = assert!(DIRECTORY.length() == 9);
///
/// let mut path: BoundedLiteral<u8, 40> = BoundedLiteral::new();
/// path.append(&DIRECTORY).unwrap();
/// path.append("/cucumber").unwrap();
/// assert_eq!(path.to_string(), "directory/cucumber");
/// ```
///
/// A zero capacity fails to compile:
///
/// ```compile_fail
/// use fixlit::BoundedLiteral;
///
/// const EMPTY: BoundedLiteral<u8, 0> = BoundedLiteral::new();
/// ```
#[derive(Clone, Copy)]
pub struct BoundedLiteral<C, const N: usize> {
    items: [C; N],
    len: usize,
}

impl<C: LiteralChar, const N: usize> BoundedLiteral<C, N> {
    /// Creates an empty literal with every slot set to the terminator.
    pub const fn new() -> Self {
        let () = Capacity::<N>::NONZERO;
        Self {
            items: [C::NUL; N],
            len: 0,
        }
    }

    /// Copies all `N` units of `units`. The logical length is `N`.
    ///
    /// ```rust
    /// use fixlit::BoundedLiteral;
    ///
    /// const HELP: BoundedLiteral<u8, 4> = BoundedLiteral::from_array(b"help");
    /// assert_eq!(HELP.length(), HELP.size());
    /// ```
    pub const fn from_array(units: &[C; N]) -> Self {
        let () = Capacity::<N>::NONZERO;
        let mut items = [C::NUL; N];
        let mut index = 0;
        while index < N {
            items[index] = units[index];
            index += 1;
        }
        Self { items, len: N }
    }

    /// Copies `units` into a literal whose length is the number of units given.
    ///
    /// Fails with [`LiteralError::Overflow`] when more than `N` units are given.
    pub const fn from_elements(units: &[C]) -> Result<Self> {
        let () = Capacity::<N>::NONZERO;
        if units.len() > N {
            return Err(LiteralError::Overflow {
                requested: units.len(),
                capacity: N,
            });
        }
        let mut items = [C::NUL; N];
        let mut index = 0;
        while index < units.len() {
            items[index] = units[index];
            index += 1;
        }
        Ok(Self {
            items,
            len: units.len(),
        })
    }

    /// The full backing storage, including the slots past the length.
    pub const fn get(&self) -> &[C; N] {
        &self.items
    }

    /// The capacity `N`.
    pub const fn size(&self) -> usize {
        N
    }

    /// Number of content units.
    pub const fn length(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Units that can still be appended. One slot is always kept free for the
    /// terminator.
    pub const fn remaining(&self) -> usize {
        N.saturating_sub(self.len + 1)
    }

    /// Joins `self` and `other` into a literal of capacity `O`.
    ///
    /// `O` must be exactly `N + M`; anything else fails to compile. The
    /// [`concat_literals!`](crate::concat_literals) macro fills `O` in.
    ///
    /// ```rust
    /// use fixlit::BoundedLiteral;
    ///
    /// const HEAD: BoundedLiteral<u8, 4> = BoundedLiteral::from_array(b"help");
    /// const TAIL: BoundedLiteral<u8, 2> = BoundedLiteral::from_array(b"er");
    /// const JOINED: BoundedLiteral<u8, 6> = HEAD.concat(&TAIL);
    /// assert_eq!(JOINED.to_string(), "helper");
    /// ```
    ///
    /// ```compile_fail
    /// use fixlit::BoundedLiteral;
    ///
    /// const HEAD: BoundedLiteral<u8, 4> = BoundedLiteral::from_array(b"help");
    /// const TAIL: BoundedLiteral<u8, 2> = BoundedLiteral::from_array(b"er");
    /// const JOINED: BoundedLiteral<u8, 5> = HEAD.concat(&TAIL);
    /// ```
    pub const fn concat<const M: usize, const O: usize>(
        &self,
        other: &BoundedLiteral<C, M>,
    ) -> BoundedLiteral<C, O> {
        let () = CapacitySum::<N, M, O>::EXACT;
        let mut items = [C::NUL; O];
        let mut index = 0;
        while index < self.len {
            items[index] = self.items[index];
            index += 1;
        }
        let mut offset = 0;
        while offset < other.len {
            items[self.len + offset] = other.items[offset];
            offset += 1;
        }
        BoundedLiteral {
            items,
            len: self.len + other.len,
        }
    }

    /// The content units.
    pub fn as_slice(&self) -> &[C] {
        &self.items[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [C] {
        &mut self.items[..self.len]
    }

    /// Iterates over the content units.
    pub fn iter(&self) -> slice::Iter<'_, C> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, C> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterates from position `index` to the end of the content.
    ///
    /// Any position up to and including the capacity is accepted; positions at
    /// or past the length yield an empty iterator. Anything further fails with
    /// [`LiteralError::OutOfRange`].
    ///
    /// ```rust
    /// use fixlit::BoundedLiteral;
    ///
    /// let literal = BoundedLiteral::from_array(b"directory");
    /// let tail: Vec<u8> = literal.iter_from(8).unwrap().copied().collect();
    /// assert_eq!(tail, b"y");
    /// assert!(literal.iter_from(10).is_err());
    /// ```
    pub fn iter_from(&self, index: usize) -> Result<slice::Iter<'_, C>> {
        let start = self.checked_start(index)?;
        Ok(self.items[start..self.len].iter())
    }

    /// Mutable form of [`iter_from`](Self::iter_from).
    pub fn iter_mut_from(&mut self, index: usize) -> Result<slice::IterMut<'_, C>> {
        let start = self.checked_start(index)?;
        Ok(self.items[start..self.len].iter_mut())
    }

    fn checked_start(&self, index: usize) -> Result<usize> {
        if index > N {
            return Err(LiteralError::OutOfRange { index, capacity: N });
        }
        Ok(index.min(self.len))
    }

    /// Appends the content of `source` in place.
    ///
    /// Accepted sources are single units, unit arrays and slices read up to
    /// their first terminator, `str` for byte literals, and other literals.
    /// The content must leave the terminator slot free. On
    /// [`LiteralError::Overflow`] the literal is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixlit::BoundedLiteral;
    ///
    /// let mut literal: BoundedLiteral<u8, 40> = BoundedLiteral::new();
    /// literal.append(b"directory").unwrap();
    /// literal.append("cucumber").unwrap().append(&b'1').unwrap();
    /// assert_eq!(literal.length(), 18);
    /// ```
    pub fn append<S>(&mut self, source: &S) -> Result<&mut Self>
    where
        S: AppendSource<C> + ?Sized,
    {
        self.append_units(source.units(), source.trailing_units())
    }

    /// Appends a single unit.
    pub fn push(&mut self, unit: C) -> Result<&mut Self> {
        self.append_units(slice::from_ref(&unit), &[])
    }

    fn append_units(&mut self, head: &[C], tail: &[C]) -> Result<&mut Self> {
        let requested = self.len + head.len() + tail.len();
        if requested >= N {
            tracing::debug!(
                capacity = N,
                length = self.len,
                requested,
                "append rejected: no room for terminator"
            );
            return Err(LiteralError::Overflow {
                requested,
                capacity: N,
            });
        }

        let middle = self.len + head.len();
        self.items[self.len..middle].copy_from_slice(head);
        self.items[middle..requested].copy_from_slice(tail);
        self.len = requested;
        tracing::trace!(capacity = N, length = self.len, "literal appended");
        Ok(self)
    }
}

impl<C: LiteralChar, const N: usize> Default for BoundedLiteral<C, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: fmt::Debug, const N: usize> fmt::Debug for BoundedLiteral<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedLiteral")
            .field("content", &&self.items[..self.len])
            .field("capacity", &N)
            .finish()
    }
}

impl<C: LiteralChar, const N: usize> fmt::Display for BoundedLiteral<C, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        C::write_units(self.as_slice(), f)
    }
}

/// Indexes the full storage, not only the content.
impl<C, const N: usize> Index<usize> for BoundedLiteral<C, N> {
    type Output = C;

    fn index(&self, index: usize) -> &C {
        &self.items[index]
    }
}

impl<C, const N: usize> IndexMut<usize> for BoundedLiteral<C, N> {
    fn index_mut(&mut self, index: usize) -> &mut C {
        &mut self.items[index]
    }
}

impl<'a, C: LiteralChar, const N: usize> IntoIterator for &'a BoundedLiteral<C, N> {
    type Item = &'a C;
    type IntoIter = slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, C: LiteralChar, const N: usize> IntoIterator for &'a mut BoundedLiteral<C, N> {
    type Item = &'a mut C;
    type IntoIter = slice::IterMut<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<C: LiteralChar, const N: usize> From<&[C; N]> for BoundedLiteral<C, N> {
    fn from(units: &[C; N]) -> Self {
        Self::from_array(units)
    }
}

impl<C: LiteralChar, const N: usize> TryFrom<&[C]> for BoundedLiteral<C, N> {
    type Error = LiteralError;

    fn try_from(units: &[C]) -> Result<Self> {
        Self::from_elements(units)
    }
}

/// A zeroed literal is an empty literal. The capacity check of
/// [`BoundedLiteral::new`] applies:
///
/// ```compile_fail
/// use bytemuck::Zeroable;
/// use fixlit::BoundedLiteral;
///
/// let empty: BoundedLiteral<u8, 0> = Zeroable::zeroed();
/// ```
// SAFETY: every supported unit type is zeroable and its terminator is zero, so
// all-zero storage with a zero length is a valid empty literal.
unsafe impl<C: LiteralChar + Zeroable, const N: usize> Zeroable for BoundedLiteral<C, N> {
    fn zeroed() -> Self {
        Self::new()
    }
}
