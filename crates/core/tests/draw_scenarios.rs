use std::collections::BTreeSet;

use draw_numbers_core::{DomainError, DrawNumbersError, DrawSettings, draw};

fn domain_error(err: DrawNumbersError) -> DomainError {
    match err {
        DrawNumbersError::Domain(domain) => domain,
        other => panic!("expected a domain error, got {other}"),
    }
}

#[test]
fn full_span_draw_is_a_permutation() {
    let settings = DrawSettings {
        min: 1,
        max: 5,
        count: 5,
        ..DrawSettings::default()
    };
    let output = draw(&settings).expect("feasible draw");
    let distinct: BTreeSet<i64> = output.values.iter().copied().collect();
    assert_eq!(distinct, (1..=5).collect());
    assert_eq!(output.values.len(), 5);
}

#[test]
fn tight_exclusions_leave_exactly_one_outcome() {
    let settings = DrawSettings {
        min: 1,
        max: 10,
        count: 3,
        exclusion_enabled: true,
        excluded: (1..=7).collect(),
    };
    let output = draw(&settings).expect("feasible draw");
    let distinct: BTreeSet<i64> = output.values.iter().copied().collect();
    assert_eq!(distinct, BTreeSet::from([8, 9, 10]));
}

#[test]
fn fully_excluded_range_fails() {
    let settings = DrawSettings {
        min: 1,
        max: 10,
        count: 1,
        exclusion_enabled: true,
        excluded: (1..=10).collect(),
    };
    let err = domain_error(draw(&settings).unwrap_err());
    assert!(matches!(err, DomainError::RangeFullyExcluded { min: 1, max: 10 }));
}

#[test]
fn equal_bounds_fail_as_invalid_range() {
    let settings = DrawSettings {
        min: 5,
        max: 5,
        count: 1,
        ..DrawSettings::default()
    };
    let err = domain_error(draw(&settings).unwrap_err());
    assert!(matches!(err, DomainError::InvalidRange { min: 5, max: 5 }));
}

#[test]
fn overlong_request_reports_both_counts() {
    let settings = DrawSettings {
        min: 1,
        max: 3,
        count: 10,
        ..DrawSettings::default()
    };
    let err = domain_error(draw(&settings).unwrap_err());
    assert!(matches!(
        err,
        DomainError::InsufficientAvailable {
            requested: 10,
            available: 3
        }
    ));
}
