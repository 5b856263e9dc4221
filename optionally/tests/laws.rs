use std::cell::Cell;

use optionally::{maybe, outcome, Maybe, Outcome};
use proptest::prelude::*;

fn arb_maybe() -> impl Strategy<Value = Maybe<i32>> {
    proptest::option::of(any::<i32>()).prop_map(Maybe::from)
}

fn arb_outcome() -> impl Strategy<Value = Outcome<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::success),
        "[a-z]{1,8}".prop_map(Outcome::failure),
    ]
}

proptest! {
    #[test]
    fn maybe_identity(m in arb_maybe()) {
        prop_assert_eq!(m.map(|x| x), m);
    }

    #[test]
    fn maybe_composition(m in arb_maybe()) {
        let f = |x: i32| x.wrapping_mul(3);
        let g = |x: i32| x.wrapping_sub(7);
        prop_assert_eq!(m.map(f).map(g), m.map(|x| g(f(x))));
    }

    #[test]
    fn outcome_identity(o in arb_outcome()) {
        prop_assert_eq!(o.clone().map(|x| x), o);
    }

    #[test]
    fn outcome_composition(o in arb_outcome()) {
        let f = |x: i32| i64::from(x) * 2;
        let g = |x: i64| x.to_string();
        prop_assert_eq!(o.clone().map(f).map(g), o.map(|x| g(f(x))));
    }

    #[test]
    fn and_then_with_some_is_map(m in arb_maybe()) {
        prop_assert_eq!(m.and_then(|x| Maybe::some(x / 2)), m.map(|x| x / 2));
    }

    #[test]
    fn filter_matches_predicate(x in any::<i32>()) {
        let kept = Maybe::some(x).filter(|v| v % 2 == 0);
        if x % 2 == 0 {
            prop_assert_eq!(kept, Maybe::some(x));
        } else {
            prop_assert_eq!(kept, Maybe::none());
        }
    }

    #[test]
    fn apply2_is_some_iff_both_some(a in arb_maybe(), b in arb_maybe()) {
        let applied = maybe::apply2(|x: i32, y: i32| x.wrapping_add(y), a, b);
        prop_assert_eq!(applied.is_some(), a.is_some() && b.is_some());
    }

    #[test]
    fn apply3_collects_every_failure(a in arb_outcome(), b in arb_outcome(), c in arb_outcome()) {
        let expected: Vec<String> = [a.clone(), b.clone(), c.clone()]
            .into_iter()
            .filter_map(|o| o.failure_value().into_option())
            .collect();
        let applied = outcome::apply3(|x: i32, y: i32, z: i32| (x, y, z), a, b, c);
        if expected.is_empty() {
            prop_assert!(applied.is_success());
        } else {
            prop_assert_eq!(applied.failure_value(), Maybe::some(expected));
        }
    }

    #[test]
    fn perform_runs_exactly_one(o in arb_outcome()) {
        let calls = Cell::new(0);
        o.perform(|_| calls.set(calls.get() + 1), |_| calls.set(calls.get() + 1));
        prop_assert_eq!(calls.get(), 1);
    }
}

#[test]
fn short_circuit_never_calls_mapper() {
    let called = Cell::new(false);
    let mark = |x: i32| {
        called.set(true);
        x
    };
    let _ = Maybe::<i32>::none().map(mark);
    let _ = Maybe::<i32>::none().and_then(|x| Maybe::some(mark(x)));
    let _ = Outcome::<i32, &str>::failure("x").map(mark);
    let _ = Outcome::<i32, &str>::failure("x").and_then(|x| Outcome::success(mark(x)));
    assert!(!called.get());
}
