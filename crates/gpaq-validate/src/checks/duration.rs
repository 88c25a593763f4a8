//! A "yes" gate needs a duration of at least one hour or one minute.

use gpaq_model::Table;

use super::record_ref;
use crate::issue::Issue;

/// Flags "yes" blocks where neither duration item is at least 1.
///
/// Both items empty is reported as [`Issue::MissingDuration`]; any other
/// failure as [`Issue::DurationBelowMinimum`]. A block with one item at least
/// 1 and the other empty passes.
pub fn check(table: &Table) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (index, record) in table.records.iter().enumerate() {
        for (block, answers) in record.gated_blocks() {
            if !answers.answered_yes() {
                continue;
            }
            let Some(gate) = block.gate_column() else {
                continue;
            };
            let hours = answers.duration_hours;
            let minutes = answers.duration_minutes;
            let reaches_minimum = |value: Option<f64>| value.is_some_and(|v| v >= 1.0);
            if reaches_minimum(hours) || reaches_minimum(minutes) {
                continue;
            }

            let record = record_ref(index, &record.id);
            let hours_column = block.hours_column();
            let minutes_column = block.minutes_column();
            issues.push(if hours.is_none() && minutes.is_none() {
                Issue::MissingDuration {
                    record,
                    gate,
                    hours_column,
                    minutes_column,
                }
            } else {
                Issue::DurationBelowMinimum {
                    record,
                    gate,
                    hours_column,
                    minutes_column,
                    hours,
                    minutes,
                }
            });
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpaq_model::Record;

    fn yes_with(hours: Option<f64>, minutes: Option<f64>) -> Table {
        let mut record = Record::new("1");
        record.travel.gate = Some(1.0);
        record.travel.frequency_days = Some(5.0);
        record.travel.duration_hours = hours;
        record.travel.duration_minutes = minutes;
        Table::new("t.csv", vec![record])
    }

    #[test]
    fn test_both_empty() {
        let issues = check(&yes_with(None, None));
        assert!(matches!(
            issues.as_slice(),
            [Issue::MissingDuration { gate: "P7", .. }]
        ));
    }

    #[test]
    fn test_both_below_one() {
        let issues = check(&yes_with(Some(0.0), Some(0.0)));
        assert!(matches!(
            issues.as_slice(),
            [Issue::DurationBelowMinimum { .. }]
        ));
        assert_eq!(check(&yes_with(Some(0.0), None)).len(), 1);
    }

    #[test]
    fn test_one_unit_is_enough() {
        assert!(check(&yes_with(Some(0.0), Some(1.0))).is_empty());
        assert!(check(&yes_with(Some(2.0), None)).is_empty());
        assert!(check(&yes_with(None, Some(45.0))).is_empty());
    }
}
