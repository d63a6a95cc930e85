//! # fixlit-compare
//!
//! Derives a full set of relational operators from a single strict less-than.
//!
//! A type opts in by implementing [`LessThan`] and then [`CompDef`]. `CompDef`
//! carries no state; its default methods express `>`, `<=`, `>=` and `==`
//! purely in terms of `<`, resolved through static dispatch.
//!
//! | Operator | Synthesized as |
//! |----------|----------------|
//! | `a > b`  | `b < a`        |
//! | `a <= b` | `!(b < a)`     |
//! | `a >= b` | `!(a < b)`     |
//! | `a == b` | `!(a < b) && !(b < a)` |
//!
//! There is no synthesized not-equal. [`derive(CompDef)`](derive@CompDef) wires
//! the synthesized methods into `PartialEq`/`PartialOrd`, and Rust's
//! `PartialEq::ne` negates the synthesized equality.
//!
//! ## Capability gate
//!
//! The gate is enforced by the compiler, before any value exists.
//!
//! A host without a less-than cannot opt in:
//!
//! ```compile_fail
//! use fixlit_compare::CompDef;
//!
//! struct NoLessThan;
//!
//! impl CompDef for NoLessThan {}
//! ```
//!
//! A less-than returning anything other than `bool` is rejected:
//!
//! ```compile_fail
//! use fixlit_compare::{CompDef, LessThan};
//!
//! struct WrongResult;
//!
//! impl LessThan for WrongResult {
//!     fn less_than(&self, _other: &Self) -> String {
//!         String::from("operator")
//!     }
//! }
//!
//! impl CompDef for WrongResult {}
//! ```
//!
//! The derive applies the same gate:
//!
//! ```compile_fail
//! use fixlit_compare::CompDef;
//!
//! #[derive(CompDef)]
//! struct Unordered(u32);
//! ```
//!
//! ## Example
//!
//! ```rust
//! use fixlit_compare::{CompDef, LessThan};
//!
//! #[derive(CompDef)]
//! struct Rank(u8);
//!
//! impl LessThan for Rank {
//!     fn less_than(&self, other: &Self) -> bool {
//!         self.0 < other.0
//!     }
//! }
//!
//! let low = Rank(0);
//! let high = Rank(1);
//! assert!(low < high);
//! assert!(high > low);
//! assert!(low <= high && !(low >= high));
//! assert!(low != high);
//! assert!(high.equal(&Rank(1)));
//! ```

use core::cmp::Ordering;

pub use fixlit_compare_derive::CompDef;

/// Strict less-than: the one primitive a [`CompDef`] host supplies.
///
/// `Rhs` defaults to `Self`. Implement it for other right-hand types to enable
/// the heterogeneous `*_with` methods of [`CompDef`].
pub trait LessThan<Rhs: ?Sized = Self> {
    /// Returns `true` when `self` is strictly ordered before `other`.
    fn less_than(&self, other: &Rhs) -> bool;
}

/// Operator synthesis from [`LessThan`].
///
/// Implementing `CompDef` is the capability check: the supertrait bound makes
/// the compiler reject hosts without a `bool`-returning less-than.
pub trait CompDef: LessThan {
    /// `self > other`, as `other < self`.
    fn greater_than(&self, other: &Self) -> bool {
        other.less_than(self)
    }

    /// `self <= other`, as `!(other < self)`.
    fn less_or_equal(&self, other: &Self) -> bool {
        !other.less_than(self)
    }

    /// `self >= other`, as `!(self < other)`.
    fn greater_or_equal(&self, other: &Self) -> bool {
        !self.less_than(other)
    }

    /// `self == other`, as `!(self < other) && !(other < self)`.
    fn equal(&self, other: &Self) -> bool {
        !self.less_than(other) && !other.less_than(self)
    }

    /// Heterogeneous [`greater_than`](Self::greater_than).
    fn greater_than_with<Rhs>(&self, other: &Rhs) -> bool
    where
        Rhs: LessThan<Self> + ?Sized,
    {
        other.less_than(self)
    }

    /// Heterogeneous [`less_or_equal`](Self::less_or_equal).
    fn less_or_equal_with<Rhs>(&self, other: &Rhs) -> bool
    where
        Rhs: LessThan<Self> + ?Sized,
    {
        !other.less_than(self)
    }

    /// Heterogeneous [`greater_or_equal`](Self::greater_or_equal).
    fn greater_or_equal_with<Rhs>(&self, other: &Rhs) -> bool
    where
        Self: LessThan<Rhs>,
        Rhs: ?Sized,
    {
        !self.less_than(other)
    }

    /// Heterogeneous [`equal`](Self::equal). Needs less-than in both directions.
    fn equal_with<Rhs>(&self, other: &Rhs) -> bool
    where
        Self: LessThan<Rhs>,
        Rhs: LessThan<Self> + ?Sized,
    {
        !self.less_than(other) && !other.less_than(self)
    }
}

/// Three-way view of two one-sided less-than checks.
///
/// Returns `None` when each side reports being less than the other, which a
/// less-than that is not a strict weak ordering can produce.
///
/// ```rust
/// use core::cmp::Ordering;
/// use fixlit_compare::{partial_cmp_with, LessThan};
///
/// struct Level(i32);
///
/// impl LessThan for Level {
///     fn less_than(&self, other: &Self) -> bool {
///         self.0 < other.0
///     }
/// }
///
/// assert_eq!(partial_cmp_with(&Level(1), &Level(2)), Some(Ordering::Less));
/// assert_eq!(partial_cmp_with(&Level(2), &Level(2)), Some(Ordering::Equal));
/// ```
pub fn partial_cmp_with<L, R>(lhs: &L, rhs: &R) -> Option<Ordering>
where
    L: LessThan<R> + ?Sized,
    R: LessThan<L> + ?Sized,
{
    match (lhs.less_than(rhs), rhs.less_than(lhs)) {
        (true, false) => Some(Ordering::Less),
        (false, true) => Some(Ordering::Greater),
        (false, false) => Some(Ordering::Equal),
        (true, true) => None,
    }
}

/// Const capability assertion: compiles only when `L: LessThan<R>`.
///
/// ```rust
/// use fixlit_compare::{require_less_than, LessThan};
///
/// struct Tick(u64);
///
/// impl LessThan for Tick {
///     fn less_than(&self, other: &Self) -> bool {
///         self.0 < other.0
///     }
/// }
///
/// const _: () = require_less_than::<Tick, Tick>();
/// ```
///
/// ```compile_fail
/// use fixlit_compare::require_less_than;
///
/// struct Untracked;
///
/// const _: () = require_less_than::<Untracked, Untracked>();
/// ```
pub const fn require_less_than<L, R>()
where
    L: LessThan<R> + ?Sized,
    R: ?Sized,
{
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Score(i32);

    impl LessThan for Score {
        fn less_than(&self, other: &Self) -> bool {
            self.0 < other.0
        }
    }

    impl CompDef for Score {}

    struct Limit(i32);

    impl LessThan<Limit> for Score {
        fn less_than(&self, other: &Limit) -> bool {
            self.0 < other.0
        }
    }

    impl LessThan<Score> for Limit {
        fn less_than(&self, other: &Score) -> bool {
            self.0 < other.0
        }
    }

    #[test]
    fn test_synthesized_homogeneous() {
        let low = Score(0);
        let high = Score(1);

        assert!(low.less_than(&high));
        assert!(!low.greater_than(&high));
        assert!(low.less_or_equal(&high));
        assert!(!low.greater_or_equal(&high));
        assert!(!low.equal(&high));

        assert!(high.greater_than(&low));
        assert!(high.greater_or_equal(&high));
        assert!(high.less_or_equal(&high));
        assert!(high.equal(&Score(1)));
    }

    #[test]
    fn test_synthesized_heterogeneous() {
        let score = Score(5);

        assert!(score.greater_than_with(&Limit(4)));
        assert!(!score.greater_than_with(&Limit(5)));
        assert!(score.less_or_equal_with(&Limit(5)));
        assert!(score.greater_or_equal_with(&Limit(5)));
        assert!(!score.greater_or_equal_with(&Limit(6)));
        assert!(score.equal_with(&Limit(5)));
        assert!(!score.equal_with(&Limit(7)));
    }

    #[test]
    fn test_partial_cmp_with_inconsistent_less_than() {
        struct Always;

        impl LessThan for Always {
            fn less_than(&self, _other: &Self) -> bool {
                true
            }
        }

        assert_eq!(partial_cmp_with(&Always, &Always), None);
        assert_eq!(
            partial_cmp_with(&Score(3), &Score(1)),
            Some(Ordering::Greater)
        );
    }
}
