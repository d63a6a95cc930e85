//! Result of `literal + literal`.

use core::fmt;
use core::iter::Chain;
use core::ops::Add;
use core::slice;

use crate::element::LiteralChar;
use crate::generic::bounded_literal::BoundedLiteral;

/// Two literals joined by `+`, with a combined capacity of `N + M`.
///
/// The operator cannot name `N + M` as a capacity on stable Rust, so it keeps
/// both operands. It still appends and compares as one literal, and
/// [`flatten`](Self::flatten) copies it into a single literal once the target
/// capacity is spelled out.
///
/// ```rust
/// use fixlit::BoundedLiteral;
///
/// let directory = BoundedLiteral::from_array(b"directory");
/// let cucumber = BoundedLiteral::from_array(b"cucumber");
///
/// let joined = directory + cucumber;
/// assert_eq!(joined.size(), 17);
/// assert_eq!(joined.length(), 17);
///
/// let flat: BoundedLiteral<u8, 17> = joined.flatten();
/// assert_eq!(flat.to_string(), "directorycucumber");
/// assert!(joined == flat);
///
/// let mut path: BoundedLiteral<u8, 32> = BoundedLiteral::new();
/// path += &joined;
/// assert_eq!(path.length(), 17);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Concat<C, const N: usize, const M: usize> {
    head: BoundedLiteral<C, N>,
    tail: BoundedLiteral<C, M>,
}

impl<C: LiteralChar, const N: usize, const M: usize> Concat<C, N, M> {
    pub const fn new(head: BoundedLiteral<C, N>, tail: BoundedLiteral<C, M>) -> Self {
        Self { head, tail }
    }

    /// Combined capacity `N + M`.
    pub const fn size(&self) -> usize {
        N + M
    }

    /// Combined content length.
    pub const fn length(&self) -> usize {
        self.head.length() + self.tail.length()
    }

    pub const fn head(&self) -> &BoundedLiteral<C, N> {
        &self.head
    }

    pub const fn tail(&self) -> &BoundedLiteral<C, M> {
        &self.tail
    }

    /// Iterates over the content of both operands in order.
    pub fn iter(&self) -> Chain<slice::Iter<'_, C>, slice::Iter<'_, C>> {
        self.head.iter().chain(self.tail.iter())
    }

    /// Copies both operands into one literal. `O` must equal `N + M`.
    pub const fn flatten<const O: usize>(&self) -> BoundedLiteral<C, O> {
        self.head.concat(&self.tail)
    }
}

impl<C: LiteralChar, const N: usize, const M: usize> Add<BoundedLiteral<C, M>>
    for BoundedLiteral<C, N>
{
    type Output = Concat<C, N, M>;

    fn add(self, tail: BoundedLiteral<C, M>) -> Concat<C, N, M> {
        Concat::new(self, tail)
    }
}

impl<C: LiteralChar, const N: usize, const M: usize> fmt::Display for Concat<C, N, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.head, f)?;
        fmt::Display::fmt(&self.tail, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_both_operands() {
        let head: BoundedLiteral<u8, 4> = BoundedLiteral::from_array(b"help");
        let mut tail: BoundedLiteral<u8, 6> = BoundedLiteral::new();
        tail.append(b"er").unwrap();

        let joined = head + tail;
        assert_eq!(joined.size(), 10);
        assert_eq!(joined.length(), 6);
        assert_eq!(joined.head().as_slice(), b"help");
        assert_eq!(joined.tail().as_slice(), b"er");
        assert!(joined.iter().copied().eq(b"helper".iter().copied()));
        assert_eq!(joined.to_string(), "helper");
    }

    #[test]
    fn test_flatten_in_const() {
        const HEAD: BoundedLiteral<char, 2> = BoundedLiteral::from_array(&['o', 'k']);
        const TAIL: BoundedLiteral<char, 1> = BoundedLiteral::from_array(&['!']);
        const FLAT: BoundedLiteral<char, 3> = Concat::new(HEAD, TAIL).flatten();
        assert_eq!(FLAT.to_string(), "ok!");
        assert_eq!(FLAT.length(), 3);
    }
}
