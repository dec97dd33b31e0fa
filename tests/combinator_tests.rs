#![cfg(feature = "combinator")]
//! Integration tests for the first-error-wins combinators.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use outcomes::build;
use outcomes::combinator::{
    RecordBuilder, errors, for_m, join, lift2, lift6, list, map_and_unzip_with, map_m, oks,
    record, reduce_m, sequence, unless, when, zip_with_m,
};
use outcomes::control::Outcome;
use proptest::prelude::*;
use rstest::rstest;

type Checked<A> = Outcome<&'static str, A>;

// =============================================================================
// Concrete scenarios
// =============================================================================

#[rstest]
fn sequence_all_ok_collects_values() {
    let outcomes: Vec<Checked<i32>> = vec![Outcome::Ok(1), Outcome::Ok(2), Outcome::Ok(3)];
    assert_eq!(sequence(outcomes), Outcome::Ok(vec![1, 2, 3]));
}

#[rstest]
fn sequence_returns_first_error() {
    let outcomes: Vec<Checked<i32>> = vec![
        Outcome::Ok(1),
        Outcome::Err("e1"),
        Outcome::Ok(3),
        Outcome::Err("e2"),
    ];
    assert_eq!(sequence(outcomes), Outcome::Err("e1"));
}

#[derive(Debug, PartialEq)]
struct Foo {
    bar: i32,
    baz: String,
}

#[rstest]
fn build_reports_failing_field() {
    let foo: Outcome<&str, Foo> = build!(Foo {
        bar: Outcome::Ok(1),
        baz: Outcome::Err("bad baz"),
    });
    assert_eq!(foo, Outcome::Err("bad baz"));
}

#[rstest]
fn build_reads_outer_variables_named_like_fields() {
    let bar: Outcome<&str, i32> = Outcome::Ok(7);
    let baz = "outer";
    let foo = build!(Foo {
        baz: Outcome::Ok(baz.to_string()),
        bar: bar.map(|n| n * 2),
    });
    assert_eq!(foo, Outcome::Ok(Foo { bar: 14, baz: "outer".to_string() }));
}

#[rstest]
fn build_reports_first_failing_field_in_written_order() {
    let foo: Outcome<&str, Foo> = build!(Foo {
        baz: Outcome::Err("bad baz"),
        bar: Outcome::Err("bad bar"),
    });
    assert_eq!(foo, Outcome::Err("bad baz"));
}

#[rstest]
fn record_builder_reports_first_failure_in_insertion_order() {
    let record = RecordBuilder::<&str, i32>::new()
        .field("name", Outcome::Ok(1))
        .field("email", Outcome::Err("bad email"))
        .field("age", Outcome::Err("bad age"))
        .build();
    assert_eq!(record.map(|fields| fields.len()), Outcome::Err("bad email"));
}

#[rstest]
fn record_into_map_reports_first_failure_in_iteration_order() {
    let fields = vec![
        ("b", Outcome::Err("bad b")),
        ("a", Outcome::Err("bad a")),
    ];
    let collected: Outcome<&str, BTreeMap<&str, i32>> = record(fields);
    assert_eq!(collected, Outcome::Err("bad b"));
}

#[rstest]
fn zip_with_m_ignores_extra_elements() {
    let calls = Cell::new(0);
    let result: Checked<Vec<usize>> = zip_with_m(
        |text: &str, n: usize| {
            calls.set(calls.get() + 1);
            Outcome::Ok(text.len() + n)
        },
        ["ab", "cde"],
        [1, 2, 3],
    );
    assert_eq!(result, Outcome::Ok(vec![3, 5]));
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn reduce_m_stops_at_first_error() {
    let seen = RefCell::new(Vec::new());
    let result: Checked<i32> = reduce_m(
        |acc, x| {
            seen.borrow_mut().push(x);
            if x < 0 {
                Outcome::Err("negative")
            } else {
                Outcome::Ok(acc + x)
            }
        },
        0,
        [1, 2, -3, 4],
    );
    assert_eq!(result, Outcome::Err("negative"));
    assert_eq!(*seen.borrow(), vec![1, 2, -3]);
}

#[rstest]
#[case(false, Outcome::Ok(()))]
#[case(true, Outcome::Err("boom"))]
fn when_runs_action_only_if_condition_holds(#[case] condition: bool, #[case] expected: Checked<()>) {
    assert_eq!(when(condition, Outcome::Err("boom")), expected);
}

#[rstest]
#[case(true, Outcome::Ok(()))]
#[case(false, Outcome::Err("boom"))]
fn unless_is_when_negated(#[case] condition: bool, #[case] expected: Checked<()>) {
    assert_eq!(unless(condition, Outcome::Err("boom")), expected);
}

// =============================================================================
// map_m / for_m / map_and_unzip_with
// =============================================================================

#[rstest]
fn map_m_does_not_call_function_after_error() {
    let calls = Cell::new(0);
    let result: Checked<Vec<i32>> = map_m(
        |x: i32| {
            calls.set(calls.get() + 1);
            if x == 2 { Outcome::Err("two") } else { Outcome::Ok(x) }
        },
        [1, 2, 3, 4],
    );
    assert_eq!(result, Outcome::Err("two"));
    assert_eq!(calls.get(), 2);
}

#[rstest]
fn for_m_matches_map_m() {
    let double = |x: i32| Checked::Ok(x * 2);
    assert_eq!(for_m([1, 2, 3], double), map_m(double, [1, 2, 3]));
}

#[rstest]
fn map_and_unzip_with_splits_pairs() {
    let result: Checked<(Vec<i32>, Vec<String>)> =
        map_and_unzip_with(|x: i32| Outcome::Ok((x, x.to_string())), [1, 2]);
    assert_eq!(
        result,
        Outcome::Ok((vec![1, 2], vec!["1".to_string(), "2".to_string()]))
    );
}

// =============================================================================
// Lifting, records and helpers
// =============================================================================

#[rstest]
fn lift6_reports_first_error_in_argument_order() {
    let result: Checked<i32> = lift6(
        |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f,
        Outcome::Ok(1),
        Outcome::Ok(2),
        Outcome::Err("third"),
        Outcome::Ok(4),
        Outcome::Err("fifth"),
        Outcome::Ok(6),
    );
    assert_eq!(result, Outcome::Err("third"));
}

#[rstest]
fn lift2_combines_heterogeneous_values() {
    let result: Checked<String> = lift2(
        |name: &str, age: u8| format!("{name} ({age})"),
        Outcome::Ok("Ada"),
        Outcome::Ok(36),
    );
    assert_eq!(result, Outcome::Ok("Ada (36)".to_string()));
}

#[rstest]
fn record_builder_keeps_insertion_order() {
    let record = RecordBuilder::<&str, i32>::new()
        .field("b", Outcome::Ok(2))
        .field("a", Outcome::Ok(1))
        .build();
    let keys = record.map(|fields| fields.keys().map(str::to_string).collect::<Vec<_>>());
    assert_eq!(keys, Outcome::Ok(vec!["b".to_string(), "a".to_string()]));
}

#[rstest]
fn record_builder_overwrites_duplicate_keys() {
    let record = RecordBuilder::<&str, i32>::new()
        .field("a", Outcome::Err("stale"))
        .field("b", Outcome::Ok(2))
        .field("a", Outcome::Ok(1))
        .build();
    assert_eq!(record.map(|fields| fields.get("a").copied()), Outcome::Ok(Some(1)));
}

#[rstest]
fn errors_and_oks_partition() {
    let outcomes: Vec<Checked<i32>> = vec![Outcome::Ok(1), Outcome::Err("x"), Outcome::Ok(3)];
    assert_eq!(errors(outcomes.clone()), vec!["x"]);
    assert_eq!(oks(outcomes), vec![1, 3]);
}

#[rstest]
fn join_flattens() {
    let nested: Checked<Checked<i32>> = Outcome::Ok(Outcome::Err("inner"));
    assert_eq!(join(nested), Outcome::Err("inner"));
}

#[rstest]
fn group_collects_equal_runs() {
    assert_eq!(
        list::group([1, 1, 2, 3, 3, 3]),
        vec![vec![1, 1], vec![2], vec![3, 3, 3]]
    );
}

// =============================================================================
// Properties
// =============================================================================

fn outcome_strategy() -> impl Strategy<Value = Outcome<String, i32>> {
    prop_oneof![
        3 => any::<i32>().prop_map(Outcome::Ok),
        1 => "[a-z]{1,4}".prop_map(Outcome::Err),
    ]
}

proptest! {
    #[test]
    fn prop_sequence_returns_first_error(outcomes in prop::collection::vec(outcome_strategy(), 0..20)) {
        let expected = match outcomes.iter().find(|outcome| outcome.is_err()) {
            Some(first) => first.clone().map(|_| Vec::new()),
            None => Outcome::Ok(oks(outcomes.clone())),
        };
        prop_assert_eq!(sequence(outcomes), expected);
    }

    #[test]
    fn prop_zip_with_m_uses_shorter_length(
        lefts in prop::collection::vec(any::<i16>(), 0..10),
        rights in prop::collection::vec(any::<i16>(), 0..10),
    ) {
        let expected = lefts.len().min(rights.len());
        let zipped: Outcome<String, Vec<i32>> = zip_with_m(
            |a: i16, b: i16| Outcome::Ok(i32::from(a) + i32::from(b)),
            lefts,
            rights,
        );
        prop_assert_eq!(zipped.map(|values| values.len()), Outcome::Ok(expected));
    }

    #[test]
    fn prop_map_and_unzip_with_matches_unzip(items in prop::collection::vec(any::<i32>(), 0..10)) {
        let split = |x: i32| (x, x.wrapping_neg());
        let result: Outcome<String, (Vec<i32>, Vec<i32>)> =
            map_and_unzip_with(|x| Outcome::Ok(split(x)), items.clone());
        prop_assert_eq!(result, Outcome::Ok(list::unzip(items.into_iter().map(split))));
    }
}
