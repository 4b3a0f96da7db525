use itertools::Itertools;
use monotonic_grouper::{
    group_monotonic, group_successors, GroupError, GroupMonotonic, Grouped, Span, Value,
    DEFAULT_MIN_RANGE_SIZE,
};
use proptest::prelude::*;

fn expand_all(out: &[Grouped<Value>]) -> Vec<Value> {
    out.iter().flat_map(|g| g.expand()).collect()
}

#[test]
fn default_threshold_is_three() {
    let input = [1, 2, 3, 4, 5].map(Value::from).to_vec();
    assert_eq!(DEFAULT_MIN_RANGE_SIZE, 3);
    assert_eq!(
        input.group_monotonic().unwrap(),
        vec![Grouped::Range(Span::new(Value::Int(1), Value::Int(5)))]
    );

    // a run of two stays loose under the default
    let input = [1, 2].map(Value::from).to_vec();
    assert_eq!(
        input.group_monotonic().unwrap(),
        vec![Grouped::Item(Value::Int(1)), Grouped::Item(Value::Int(2))]
    );
}

#[test]
fn expansion_reproduces_a_mixed_output() {
    let input = [1, 2, 3, 7, 8, 20].map(Value::from).to_vec();
    let out = input.group_monotonic().unwrap();
    assert_eq!(out.len(), 4);
    assert_eq!(expand_all(&out), input);
}

#[test]
fn errors_surface_through_the_extension_trait() {
    let mixed = vec![Value::Int(1), Value::Int(2), Value::from("a")];
    assert!(matches!(
        mixed.group_monotonic(),
        Err(GroupError::InconsistentElementKind { index: 2, .. })
    ));

    let unsupported = vec![Value::Bool(false)];
    assert!(matches!(
        unsupported.group_monotonic(),
        Err(GroupError::UnsupportedElementKind { kind: "bool" })
    ));

    let empty: Vec<Value> = Vec::new();
    assert!(matches!(
        empty.group_monotonic_with(0),
        Err(GroupError::InvalidThreshold { got: 0 })
    ));
}

#[cfg(feature = "date")]
#[test]
fn date_runs_round_trip() {
    use chrono::NaiveDate;

    let input = [1, 2, 3, 10]
        .map(|day| Value::from(NaiveDate::from_ymd_opt(2024, 1, day).unwrap()))
        .to_vec();
    let out = input.group_monotonic().unwrap();
    assert_eq!(out.len(), 2);
    assert!(out[0].is_range());
    assert_eq!(expand_all(&out), input);
}

proptest! {
    #[test]
    fn round_trip_expansion_reproduces_input(
        values in prop::collection::vec(-50i64..50, 0..100),
        threshold in 1usize..6,
    ) {
        let input = values.iter().copied().map(Value::from).collect_vec();
        let out = group_monotonic(&input, threshold).unwrap();
        prop_assert_eq!(expand_all(&out), input);
    }

    #[test]
    fn output_is_never_longer_than_input(
        values in prop::collection::vec(-50i64..50, 0..100),
        threshold in 1usize..6,
    ) {
        let input = values.iter().copied().map(Value::from).collect_vec();
        let out = group_monotonic(&input, threshold).unwrap();
        prop_assert!(out.len() <= input.len());
    }

    #[test]
    fn raising_the_threshold_is_monotone(
        values in prop::collection::vec(-50i64..50, 0..100),
        threshold in 1usize..6,
    ) {
        let input = values.iter().copied().map(Value::from).collect_vec();
        let lo = group_monotonic(&input, threshold).unwrap();
        let hi = group_monotonic(&input, threshold + 1).unwrap();
        let loose = |out: &[Grouped<Value>]| out.iter().filter(|g| g.is_item()).count();
        let ranges = |out: &[Grouped<Value>]| out.iter().filter(|g| g.is_range()).count();
        prop_assert!(loose(&hi) >= loose(&lo));
        prop_assert!(ranges(&hi) <= ranges(&lo));
    }

    #[test]
    fn threshold_one_emits_only_ranges(
        values in prop::collection::vec(-50i64..50, 1..100),
    ) {
        let input = values.iter().copied().map(Value::from).collect_vec();
        let out = group_monotonic(&input, 1).unwrap();
        prop_assert!(out.iter().all(|g| g.is_range()));
        prop_assert_eq!(expand_all(&out), input);
    }

    #[test]
    fn char_sequences_round_trip(
        s in "[a-h]{0,40}",
        threshold in 1usize..5,
    ) {
        let input = s.chars().map(Value::from).collect_vec();
        let out = group_monotonic(&input, threshold).unwrap();
        prop_assert_eq!(expand_all(&out), input);
    }

    #[test]
    fn generic_entry_point_round_trips(
        values in prop::collection::vec(0u32..100, 0..100),
        threshold in 1usize..6,
    ) {
        let out = group_successors(&values, threshold).unwrap();
        let expanded: Vec<u32> = out.iter().flat_map(|g| g.expand()).collect();
        prop_assert_eq!(expanded, values);
    }
}
