use core::cmp::Ordering;
use fixlit_compare::{require_less_than, CompDef, LessThan};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy, CompDef)]
#[comp_def(rhs = i32)]
struct IntClass(i32);

impl LessThan for IntClass {
    fn less_than(&self, other: &Self) -> bool {
        self.0 < other.0
    }
}

impl LessThan<i32> for IntClass {
    fn less_than(&self, other: &i32) -> bool {
        self.0 < *other
    }
}

impl LessThan<IntClass> for i32 {
    fn less_than(&self, other: &IntClass) -> bool {
        *self < other.0
    }
}

const _: () = require_less_than::<IntClass, IntClass>();
const _: () = require_less_than::<IntClass, i32>();

// -----------------------------------------------------------------------------
// Truth tables over the three relations: less, equal, greater.
// -----------------------------------------------------------------------------
#[test]
fn left_side_smaller() {
    let minimum = IntClass(0);
    let non_minimum = IntClass(1);

    assert!(minimum < non_minimum);
    assert!(!(minimum > non_minimum));
    assert!(minimum <= non_minimum);
    assert!(!(minimum >= non_minimum));
    assert!(!(minimum == non_minimum));
    assert!(minimum != non_minimum);
}

#[test]
fn both_sides_equal() {
    let non_minimum = IntClass(1);
    let same = non_minimum;

    assert!(!(non_minimum < same));
    assert!(!(non_minimum > same));
    assert!(non_minimum <= same);
    assert!(non_minimum >= same);
    assert!(non_minimum == same);
    assert!(!(non_minimum != same));
}

#[test]
fn left_side_larger() {
    let minimum = IntClass(0);
    let non_minimum = IntClass(1);

    assert!(!(non_minimum < minimum));
    assert!(non_minimum > minimum);
    assert!(!(non_minimum <= minimum));
    assert!(non_minimum >= minimum);
    assert!(!(non_minimum == minimum));
    assert!(non_minimum != minimum);
}

#[test]
fn heterogeneous_operators() {
    let value = IntClass(7);

    assert!(value < 8);
    assert!(value > 6);
    assert!(value <= 7);
    assert!(value >= 7);
    assert!(value == 7);
    assert!(value != 6);
    assert_eq!(value.partial_cmp(&9), Some(Ordering::Less));
}

#[test]
fn trait_methods_match_operators() {
    let (a, b) = (IntClass(3), IntClass(4));

    assert_eq!(a.greater_than(&b), a > b);
    assert_eq!(a.less_or_equal(&b), a <= b);
    assert_eq!(a.greater_or_equal(&b), a >= b);
    assert_eq!(a.equal(&b), a == b);
}

// -----------------------------------------------------------------------------
// Generic hosts keep their bounds.
// -----------------------------------------------------------------------------
#[derive(CompDef)]
struct Tagged<T: Copy> {
    weight: u8,
    _tag: T,
}

impl<T: Copy> LessThan for Tagged<T> {
    fn less_than(&self, other: &Self) -> bool {
        self.weight < other.weight
    }
}

#[test]
fn generic_host() {
    let light = Tagged { weight: 1, _tag: 'a' };
    let heavy = Tagged { weight: 9, _tag: 'b' };

    assert!(light < heavy);
    assert!(heavy >= light);
    assert!(light == Tagged { weight: 1, _tag: 'z' });
}

proptest! {
    #[test]
    fn synthesized_matches_native(a in any::<i32>(), b in any::<i32>()) {
        let (x, y) = (IntClass(a), IntClass(b));

        prop_assert_eq!(x < y, a < b);
        prop_assert_eq!(x > y, a > b);
        prop_assert_eq!(x <= y, a <= b);
        prop_assert_eq!(x >= y, a >= b);
        prop_assert_eq!(x == y, a == b);
        prop_assert_eq!(x != y, a != b);
        prop_assert_eq!(x.partial_cmp(&y), a.partial_cmp(&b));
    }
}
