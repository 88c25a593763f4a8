//! Consistency issue types.
//!
//! The Issue enum provides type-safe issue creation where each variant
//! carries only its needed data.

use std::fmt;

use gpaq_model::format_numeric;

/// Position of a record inside its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    /// Zero-based record index (header row excluded).
    pub index: usize,
    /// Respondent identifier.
    pub id: String,
}

impl RecordRef {
    pub fn new(index: usize, id: impl Into<String>) -> Self {
        Self {
            index,
            id: id.into(),
        }
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} (ID {})", self.index, self.id)
    }
}

/// The consistency checks, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Check {
    /// Two tables share a name.
    DuplicateNames,
    /// Gate answers must be 1 or 2.
    GateValues,
    /// "No" must leave the block's follow-up items empty.
    NoActivityDetails,
    /// "Yes" must be followed by at least one day per week.
    ActivityFrequency,
    /// "Yes" must be followed by a duration of at least one hour or minute.
    ActivityDuration,
    /// Days, hours and minutes must lie within their ranges.
    ValueRanges,
}

impl Check {
    pub const ALL: [Check; 6] = [
        Self::DuplicateNames,
        Self::GateValues,
        Self::NoActivityDetails,
        Self::ActivityFrequency,
        Self::ActivityDuration,
        Self::ValueRanges,
    ];

    /// Short label for reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::DuplicateNames => "duplicate-name",
            Self::GateValues => "gate-value",
            Self::NoActivityDetails => "no-activity-details",
            Self::ActivityFrequency => "activity-frequency",
            Self::ActivityDuration => "activity-duration",
            Self::ValueRanges => "value-range",
        }
    }

    /// Review instruction from the scoring protocol, where one exists.
    pub fn guidance(self) -> Option<&'static str> {
        match self {
            Self::NoActivityDetails => Some(
                "according to ONAPS, the questionnaire must be deleted if activity is described while NO is answered",
            ),
            Self::ActivityDuration => Some(
                "according to ONAPS, the sub-domain must be deleted if no activity is described while YES is answered",
            ),
            Self::ValueRanges => {
                Some("check the correct time format: 7 days, 24 hours, 60 minutes")
            }
            _ => None,
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Consistency issue - each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq)]
pub enum Issue {
    /// The table name occurs more than once in the batch.
    DuplicateTableName { occurrences: usize },
    /// Gate holds something other than 1 or 2.
    InvalidGateValue {
        record: RecordRef,
        column: &'static str,
        value: f64,
    },
    /// Gate answered "no" but follow-up items are filled.
    DetailsAfterNo {
        record: RecordRef,
        gate: &'static str,
        filled: Vec<&'static str>,
    },
    /// Gate answered "yes" but days per week is empty or below one.
    MissingFrequency {
        record: RecordRef,
        gate: &'static str,
        column: &'static str,
        value: Option<f64>,
    },
    /// Gate answered "yes" but both duration items are empty.
    MissingDuration {
        record: RecordRef,
        gate: &'static str,
        hours_column: &'static str,
        minutes_column: &'static str,
    },
    /// Gate answered "yes" but neither duration item reaches one.
    DurationBelowMinimum {
        record: RecordRef,
        gate: &'static str,
        hours_column: &'static str,
        minutes_column: &'static str,
        hours: Option<f64>,
        minutes: Option<f64>,
    },
    /// Value outside the column's acceptable range.
    OutOfRange {
        record: RecordRef,
        column: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl Issue {
    /// Check that produces this issue.
    pub fn check(&self) -> Check {
        match self {
            Issue::DuplicateTableName { .. } => Check::DuplicateNames,
            Issue::InvalidGateValue { .. } => Check::GateValues,
            Issue::DetailsAfterNo { .. } => Check::NoActivityDetails,
            Issue::MissingFrequency { .. } => Check::ActivityFrequency,
            Issue::MissingDuration { .. } | Issue::DurationBelowMinimum { .. } => {
                Check::ActivityDuration
            }
            Issue::OutOfRange { .. } => Check::ValueRanges,
        }
    }

    /// Offending record, for record-level issues.
    pub fn record(&self) -> Option<&RecordRef> {
        match self {
            Issue::DuplicateTableName { .. } => None,
            Issue::InvalidGateValue { record, .. }
            | Issue::DetailsAfterNo { record, .. }
            | Issue::MissingFrequency { record, .. }
            | Issue::MissingDuration { record, .. }
            | Issue::DurationBelowMinimum { record, .. }
            | Issue::OutOfRange { record, .. } => Some(record),
        }
    }

    /// Column to look at in the raw data.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            Issue::DuplicateTableName { .. } => None,
            Issue::InvalidGateValue { column, .. } => Some(column),
            Issue::DetailsAfterNo { gate, .. } => Some(gate),
            Issue::MissingFrequency { column, .. } => Some(column),
            Issue::MissingDuration { gate, .. } => Some(gate),
            Issue::DurationBelowMinimum { gate, .. } => Some(gate),
            Issue::OutOfRange { column, .. } => Some(column),
        }
    }

    /// Format message with issue-specific data.
    pub fn message(&self) -> String {
        match self {
            Issue::DuplicateTableName { occurrences } => {
                format!("table name appears {occurrences} times in the batch")
            }

            Issue::InvalidGateValue {
                record,
                column,
                value,
            } => format!(
                "{column} at {record} has invalid value {} (value not 1 or 2)",
                format_numeric(*value)
            ),

            Issue::DetailsAfterNo {
                record,
                gate,
                filled,
            } => format!(
                "{gate} at {record}: no activity mentioned, yet items filled ({})",
                filled.join(", ")
            ),

            Issue::MissingFrequency {
                record,
                gate,
                column,
                value,
            } => format!(
                "{gate} at {record}: activity mentioned, yet {column} is {}",
                describe(*value)
            ),

            Issue::MissingDuration {
                record,
                gate,
                hours_column,
                minutes_column,
            } => format!(
                "{gate} at {record}: activity mentioned, yet {hours_column} and {minutes_column} are empty"
            ),

            Issue::DurationBelowMinimum {
                record,
                gate,
                hours_column,
                minutes_column,
                hours,
                minutes,
            } => format!(
                "{gate} at {record}: activity mentioned, yet 0 minute described ({hours_column} {}, {minutes_column} {})",
                describe(*hours),
                describe(*minutes)
            ),

            Issue::OutOfRange {
                record,
                column,
                value,
                min,
                max,
            } => format!(
                "wrong value {} in {column} at {record} (expected {} to {})",
                format_numeric(*value),
                format_numeric(*min),
                format_numeric(*max)
            ),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

fn describe(value: Option<f64>) -> String {
    match value {
        Some(v) => format_numeric(v),
        None => "empty".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let issue = Issue::OutOfRange {
            record: RecordRef::new(3, "R004"),
            column: "P2",
            value: 8.0,
            min: 0.0,
            max: 7.0,
        };
        insta::assert_snapshot!(
            issue.message(),
            @"wrong value 8 in P2 at index 3 (ID R004) (expected 0 to 7)"
        );
        assert_eq!(issue.check(), Check::ValueRanges);
        assert_eq!(issue.column(), Some("P2"));
    }

    #[test]
    fn test_details_after_no_message() {
        let issue = Issue::DetailsAfterNo {
            record: RecordRef::new(0, "17"),
            gate: "P7",
            filled: vec!["P8", "P9b"],
        };
        insta::assert_snapshot!(
            issue.message(),
            @"P7 at index 0 (ID 17): no activity mentioned, yet items filled (P8, P9b)"
        );
    }

    #[test]
    fn test_missing_frequency_message() {
        let issue = Issue::MissingFrequency {
            record: RecordRef::new(1, "A"),
            gate: "P1",
            column: "P2",
            value: None,
        };
        assert_eq!(
            issue.message(),
            "P1 at index 1 (ID A): activity mentioned, yet P2 is empty"
        );
    }

    #[test]
    fn test_duplicate_has_no_record() {
        let issue = Issue::DuplicateTableName { occurrences: 2 };
        assert!(issue.record().is_none());
        assert_eq!(issue.check(), Check::DuplicateNames);
    }

    #[test]
    fn test_guidance_only_for_protocol_checks() {
        assert!(Check::NoActivityDetails.guidance().is_some());
        assert!(Check::ActivityDuration.guidance().is_some());
        assert!(Check::ValueRanges.guidance().is_some());
        assert!(Check::GateValues.guidance().is_none());
    }
}
