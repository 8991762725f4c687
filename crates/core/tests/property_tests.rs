use std::collections::BTreeSet;

use draw_numbers_core::{DrawSettings, SeededSource, draw_with};
use proptest::prelude::*;

proptest! {
    #[test]
    fn feasible_draws_meet_every_contract(
        min in -500i64..500,
        span in 1i64..200,
        count in 1u32..50,
        seed in any::<u64>(),
    ) {
        let max = min + span;
        prop_assume!(i64::from(count) <= span + 1);
        let settings = DrawSettings { min, max, count, ..DrawSettings::default() };

        let mut source = SeededSource::new(seed);
        let output = draw_with(&mut source, &settings).expect("feasible draw");

        prop_assert_eq!(output.values.len(), count as usize);
        let distinct: BTreeSet<i64> = output.values.iter().copied().collect();
        prop_assert_eq!(distinct.len(), count as usize);
        for value in &output.values {
            prop_assert!((min..=max).contains(value));
        }
    }

    #[test]
    fn excluded_values_never_appear(
        seed in any::<u64>(),
        excluded in proptest::collection::btree_set(1i64..=30, 0..20),
    ) {
        // 30 candidates, at most 19 excluded, so 5 are always available.
        let settings = DrawSettings {
            min: 1,
            max: 30,
            count: 5,
            exclusion_enabled: true,
            excluded: excluded.clone(),
        };

        let mut source = SeededSource::new(seed);
        let output = draw_with(&mut source, &settings).expect("feasible draw");
        for value in &output.values {
            prop_assert!(!excluded.contains(value));
        }
    }

    #[test]
    fn same_seed_replays_the_same_draw(seed in any::<u64>()) {
        let settings = DrawSettings { min: 1, max: 1000, count: 20, ..DrawSettings::default() };

        let first = draw_with(&mut SeededSource::new(seed), &settings).expect("feasible draw");
        let second = draw_with(&mut SeededSource::new(seed), &settings).expect("feasible draw");
        prop_assert_eq!(first.values, second.values);
    }

    #[test]
    fn degenerate_ranges_always_fail(min in -1000i64..1000, drop in 0i64..100) {
        let settings = DrawSettings {
            min,
            max: min - drop,
            count: 1,
            ..DrawSettings::default()
        };
        prop_assert!(draw_with(&mut SeededSource::new(0), &settings).is_err());
    }
}
