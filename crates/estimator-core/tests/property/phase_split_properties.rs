use estimator_core::models::{Phase, PhaseSplit};
use proptest::prelude::*;

fn arb_split() -> impl Strategy<Value = PhaseSplit> {
    prop::array::uniform4(0.0f64..10.0)
        .prop_filter("non-zero", |w| w.iter().sum::<f64>() > 1e-3)
        .prop_map(|w| PhaseSplit::new(w).normalized())
}

proptest! {
    #[test]
    fn allocation_sums_back_to_input(split in arb_split(), days in 0.0f64..10_000.0) {
        let amounts = split.allocate(days);
        prop_assert!((amounts.total() - days).abs() < 1e-6);
    }

    #[test]
    fn allocation_is_never_negative(split in arb_split(), days in 0.0f64..10_000.0) {
        let amounts = split.allocate(days);
        for phase in Phase::ALL {
            prop_assert!(amounts.get(phase) >= 0.0);
        }
    }

    #[test]
    fn normalized_split_is_valid(split in arb_split()) {
        prop_assert!(split.is_valid());
    }
}
