use fixlit::{BoundedLiteral, LiteralError};
use proptest::prelude::*;

const CAPACITY: usize = 16;

fn content() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(b'a'..=b'z', 0..CAPACITY)
}

fn literal_of(units: &[u8]) -> BoundedLiteral<u8, CAPACITY> {
    BoundedLiteral::from_elements(units).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn content_reads_back(units in content()) {
        let literal = literal_of(&units);
        prop_assert_eq!(literal.length(), units.len());
        prop_assert_eq!(literal.as_slice(), units.as_slice());
        prop_assert_eq!(literal.size(), CAPACITY);
    }

    #[test]
    fn append_is_all_or_nothing(head in content(), tail in content()) {
        let mut literal = literal_of(&head);
        let before = literal;

        let outcome = literal.append(tail.as_slice()).map(|_| ());
        match outcome {
            Ok(()) => {
                prop_assert!(head.len() + tail.len() < CAPACITY);
                prop_assert_eq!(&literal.as_slice()[..head.len()], head.as_slice());
                prop_assert_eq!(&literal.as_slice()[head.len()..], tail.as_slice());
            }
            Err(err) => {
                prop_assert_eq!(err, LiteralError::Overflow {
                    requested: head.len() + tail.len(),
                    capacity: CAPACITY,
                });
                prop_assert_eq!(literal.get(), before.get());
                prop_assert_eq!(literal.length(), before.length());
            }
        }
    }

    #[test]
    fn concat_joins_content(head in content(), tail in content()) {
        let joined: BoundedLiteral<u8, { CAPACITY * 2 }> =
            literal_of(&head).concat(&literal_of(&tail));

        prop_assert_eq!(joined.size(), CAPACITY * 2);
        prop_assert_eq!(joined.length(), head.len() + tail.len());
        let expected: Vec<u8> = head.iter().chain(tail.iter()).copied().collect();
        prop_assert_eq!(joined.as_slice(), expected.as_slice());
    }

    #[test]
    fn less_than_is_irreflexive(units in content()) {
        let literal = literal_of(&units);
        prop_assert!(!(literal < literal));
        prop_assert!(literal == literal);
    }

    #[test]
    fn strict_prefix_precedes(units in content(), extra in b'a'..=b'z') {
        prop_assume!(units.len() + 1 < CAPACITY);
        let shorter = literal_of(&units);
        let mut longer = shorter;
        longer.push(extra).unwrap();

        prop_assert!(shorter < longer);
        prop_assert!(!(longer < shorter));
        prop_assert!(shorter != longer);
    }

    #[test]
    fn single_difference_orders_one_way(units in content(), index in 0..CAPACITY) {
        prop_assume!(!units.is_empty());
        let index = index % units.len();
        prop_assume!(units[index] < b'z');

        let lower = literal_of(&units);
        let mut raised = units.clone();
        raised[index] += 1;
        let higher = literal_of(&raised);

        prop_assert!(lower < higher);
        prop_assert!(!(higher < lower));
        prop_assert!(higher > lower);
        prop_assert!(lower != higher);
    }

    #[test]
    fn equality_matches_content(a in content(), b in content()) {
        // Without a prefix relation, the quirky scan can make both sides
        // precede each other, but equality still means identical content.
        let (left, right) = (literal_of(&a), literal_of(&b));
        if left == right {
            prop_assert_eq!(a, b);
        }
    }
}
