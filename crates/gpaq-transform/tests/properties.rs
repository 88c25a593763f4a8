//! Property tests for the derived metrics.

use gpaq_model::{MEASUREMENT_COLUMN_COUNT, Record};
use gpaq_transform::{VIGOROUS_MET, met_minutes};
use proptest::prelude::*;
use proptest::test_runner::Config;

fn answer() -> impl Strategy<Value = Option<f64>> {
    prop::option::of((0_u32..=60).prop_map(f64::from))
}

fn any_record() -> impl Strategy<Value = Record> {
    prop::collection::vec(answer(), MEASUREMENT_COLUMN_COUNT).prop_map(|values| {
        let mut array = [None; MEASUREMENT_COLUMN_COUNT];
        array.copy_from_slice(&values);
        Record::from_values("p", array)
    })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn totals_are_sums_of_parts(record in any_record()) {
        let m = met_minutes(&record);
        prop_assert_eq!(m.work, m.vigorous_work + m.moderate_work);
        prop_assert_eq!(m.leisure, m.vigorous_leisure + m.moderate_leisure);
        prop_assert_eq!(m.vigorous, m.vigorous_work + m.vigorous_leisure);
        prop_assert_eq!(m.moderate, m.moderate_work + m.moderate_leisure + m.travel);
        prop_assert_eq!(m.moderate_to_vigorous, m.vigorous + m.moderate);
    }

    #[test]
    fn moderate_to_vigorous_ignores_sitting(
        record in any_record(),
        hours in 0_u32..=24,
        minutes in 0_u32..=60,
    ) {
        let mut other = record.clone();
        other.sedentary.duration_hours = Some(f64::from(hours));
        other.sedentary.duration_minutes = Some(f64::from(minutes));

        let a = met_minutes(&record);
        let b = met_minutes(&other);
        prop_assert_eq!(a.moderate_to_vigorous, b.moderate_to_vigorous);
        prop_assert_eq!(b.sedentary, 7.0 * f64::from(hours * 60 + minutes));
    }

    #[test]
    fn derivation_is_pure(record in any_record()) {
        let mut derived = record.clone();
        derived.metrics = Some(met_minutes(&record));
        prop_assert_eq!(met_minutes(&derived), met_minutes(&record));
    }

    #[test]
    fn vigorous_work_matches_formula(
        days in 0_u32..=7,
        hours in 0_u32..=16,
        minutes in 0_u32..=60,
    ) {
        let mut record = Record::new("p");
        record.vigorous_work.frequency_days = Some(f64::from(days));
        record.vigorous_work.duration_hours = Some(f64::from(hours));
        record.vigorous_work.duration_minutes = Some(f64::from(minutes));

        let expected = VIGOROUS_MET * f64::from(days * (hours * 60 + minutes));
        prop_assert_eq!(met_minutes(&record).vigorous_work, expected);
    }
}
