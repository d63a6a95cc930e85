/// Builds a [`LiteralView`](crate::LiteralView) whose capacity is the length of
/// a terminated unit buffer.
///
/// `$units` must be a constant expression. The length is found by a const
/// terminator scan, so an empty buffer yields a zero capacity and fails to
/// compile.
///
/// ```rust
/// use fixlit::{to_literal, LiteralView};
///
/// const RAW: &[u8] = b"directory\0unused";
/// const VIEW: LiteralView<u8, 9> = to_literal!(u8, RAW);
/// assert_eq!(VIEW.to_string(), "directory");
/// ```
#[macro_export]
macro_rules! to_literal {
    ($unit:ty, $units:expr $(,)?) => {
        match $crate::LiteralView::<$unit, { $crate::Units::<$unit>::length($units) }>::from_units(
            $units,
        ) {
            ::core::result::Result::Ok(view) => view,
            ::core::result::Result::Err(err) => ::core::panic!("{}", err.as_str()),
        }
    };
}

/// Concatenates two constant literals into one of capacity `N + M`.
///
/// ```rust
/// use fixlit::{concat_literals, BoundedLiteral};
///
/// const DIRECTORY: BoundedLiteral<u8, 9> = BoundedLiteral::from_array(b"directory");
/// const CUCUMBER: BoundedLiteral<u8, 8> = BoundedLiteral::from_array(b"cucumber");
/// const JOINED: BoundedLiteral<u8, 17> = concat_literals!(DIRECTORY, CUCUMBER);
/// assert_eq!(JOINED.length(), 17);
/// ```
#[macro_export]
macro_rules! concat_literals {
    ($head:expr, $tail:expr $(,)?) => {{
        let joined: $crate::BoundedLiteral<_, { $head.size() + $tail.size() }> =
            $head.concat(&$tail);
        joined
    }};
}

/// Builds a [`BoundedLiteral`](crate::BoundedLiteral) from a unit array, or
/// from a capacity and a list of units.
///
/// In a const context, listing more units than the capacity holds fails to
/// compile.
///
/// ```rust
/// use fixlit::{literal, BoundedLiteral};
///
/// const HELP: BoundedLiteral<u8, 4> = literal!(b"help");
/// const PARTIAL: BoundedLiteral<char, 8> = literal!(8; 'd', 'i', 'r');
/// assert_eq!(HELP.length(), 4);
/// assert_eq!(PARTIAL.length(), 3);
/// ```
///
/// ```compile_fail
/// use fixlit::{literal, BoundedLiteral};
///
/// const TOO_LONG: BoundedLiteral<char, 2> = literal!(2; 'd', 'i', 'r');
/// ```
#[macro_export]
macro_rules! literal {
    ($capacity:expr; $($unit:expr),+ $(,)?) => {
        match $crate::BoundedLiteral::<_, { $capacity }>::from_elements(&[$($unit),+]) {
            ::core::result::Result::Ok(literal) => literal,
            ::core::result::Result::Err(err) => ::core::panic!("{}", err.as_str()),
        }
    };
    ($units:expr $(,)?) => {
        $crate::BoundedLiteral::from_array($units)
    };
}
