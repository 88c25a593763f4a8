//! Canonical column schema.
//!
//! Column position is authoritative: input files are remapped positionally
//! onto [`EXPECTED_COLUMNS`] regardless of the labels in their header row.

/// Respondent identifier column.
pub const ID_COLUMN: &str = "ID";

/// Number of measurement columns (everything except [`ID_COLUMN`]).
pub const MEASUREMENT_COLUMN_COUNT: usize = 22;

/// The 23 expected column identifiers, in file order.
pub const EXPECTED_COLUMNS: [&str; MEASUREMENT_COLUMN_COUNT + 1] = [
    ID_COLUMN, "P1", "P2", "P3a", "P3b", "P4", "P5", "P6a", "P6b", "P7", "P8", "P9a", "P9b", "P10",
    "P11", "P12a", "P12b", "P13", "P14", "P15a", "P15b", "P16a", "P16b",
];

/// Questionnaire section a measurement column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActivityBlock {
    /// Vigorous-intensity activity at work (P1-P3b).
    VigorousWork,
    /// Moderate-intensity activity at work (P4-P6b).
    ModerateWork,
    /// Walking or cycling to get to and from places (P7-P9b).
    Travel,
    /// Vigorous-intensity sports, fitness or recreation (P10-P12b).
    VigorousLeisure,
    /// Moderate-intensity sports, fitness or recreation (P13-P15b).
    ModerateLeisure,
    /// Time spent sitting or reclining (P16a-P16b). Not gated.
    Sedentary,
}

impl ActivityBlock {
    /// Blocks opened by a yes/no gate question, in questionnaire order.
    pub const GATED: [ActivityBlock; 5] = [
        Self::VigorousWork,
        Self::ModerateWork,
        Self::Travel,
        Self::VigorousLeisure,
        Self::ModerateLeisure,
    ];

    /// All blocks in questionnaire order.
    pub const ALL: [ActivityBlock; 6] = [
        Self::VigorousWork,
        Self::ModerateWork,
        Self::Travel,
        Self::VigorousLeisure,
        Self::ModerateLeisure,
        Self::Sedentary,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::VigorousWork => "Vigorous work",
            Self::ModerateWork => "Moderate work",
            Self::Travel => "Active travel",
            Self::VigorousLeisure => "Vigorous leisure",
            Self::ModerateLeisure => "Moderate leisure",
            Self::Sedentary => "Sedentary",
        }
    }

    /// Gate column, if the block has one.
    pub fn gate_column(self) -> Option<&'static str> {
        match self {
            Self::VigorousWork => Some("P1"),
            Self::ModerateWork => Some("P4"),
            Self::Travel => Some("P7"),
            Self::VigorousLeisure => Some("P10"),
            Self::ModerateLeisure => Some("P13"),
            Self::Sedentary => None,
        }
    }

    /// Days-per-week column, if the block has one.
    pub fn frequency_column(self) -> Option<&'static str> {
        match self {
            Self::VigorousWork => Some("P2"),
            Self::ModerateWork => Some("P5"),
            Self::Travel => Some("P8"),
            Self::VigorousLeisure => Some("P11"),
            Self::ModerateLeisure => Some("P14"),
            Self::Sedentary => None,
        }
    }

    /// Duration hours column.
    pub fn hours_column(self) -> &'static str {
        match self {
            Self::VigorousWork => "P3a",
            Self::ModerateWork => "P6a",
            Self::Travel => "P9a",
            Self::VigorousLeisure => "P12a",
            Self::ModerateLeisure => "P15a",
            Self::Sedentary => "P16a",
        }
    }

    /// Duration minutes column.
    pub fn minutes_column(self) -> &'static str {
        match self {
            Self::VigorousWork => "P3b",
            Self::ModerateWork => "P6b",
            Self::Travel => "P9b",
            Self::VigorousLeisure => "P12b",
            Self::ModerateLeisure => "P15b",
            Self::Sedentary => "P16b",
        }
    }

    /// Columns that must stay empty when the gate is answered "no".
    pub fn dependent_columns(self) -> Vec<&'static str> {
        let mut columns = Vec::with_capacity(3);
        if let Some(frequency) = self.frequency_column() {
            columns.push(frequency);
        }
        columns.push(self.hours_column());
        columns.push(self.minutes_column());
        columns
    }

    /// Upper bound for the hours column: a day for sitting, 16 waking hours otherwise.
    pub fn max_hours(self) -> f64 {
        match self {
            Self::Sedentary => 24.0,
            _ => 16.0,
        }
    }
}

/// Role a measurement column plays inside its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Yes (1) / no (2) question.
    Gate,
    /// Days per week.
    Frequency,
    /// Hours per typical day.
    Hours,
    /// Minutes per typical day.
    Minutes,
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Gate => "gate (1 = yes, 2 = no)",
            Self::Frequency => "days per week",
            Self::Hours => "hours per day",
            Self::Minutes => "minutes per day",
        }
    }
}

/// Static description of one measurement column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub block: ActivityBlock,
    pub kind: FieldKind,
}

impl ColumnSpec {
    const fn new(name: &'static str, block: ActivityBlock, kind: FieldKind) -> Self {
        Self { name, block, kind }
    }

    /// Inclusive acceptable range. Gates are checked against {1, 2} instead.
    pub fn range(&self) -> Option<(f64, f64)> {
        match self.kind {
            FieldKind::Gate => None,
            FieldKind::Frequency => Some((0.0, 7.0)),
            FieldKind::Hours => Some((0.0, self.block.max_hours())),
            FieldKind::Minutes => Some((0.0, 60.0)),
        }
    }
}

/// Measurement columns in file order (positions 1..=22).
pub const COLUMN_SPECS: [ColumnSpec; MEASUREMENT_COLUMN_COUNT] = {
    use ActivityBlock::{
        ModerateLeisure, ModerateWork, Sedentary, Travel, VigorousLeisure, VigorousWork,
    };
    use FieldKind::{Frequency, Gate, Hours, Minutes};
    [
        ColumnSpec::new("P1", VigorousWork, Gate),
        ColumnSpec::new("P2", VigorousWork, Frequency),
        ColumnSpec::new("P3a", VigorousWork, Hours),
        ColumnSpec::new("P3b", VigorousWork, Minutes),
        ColumnSpec::new("P4", ModerateWork, Gate),
        ColumnSpec::new("P5", ModerateWork, Frequency),
        ColumnSpec::new("P6a", ModerateWork, Hours),
        ColumnSpec::new("P6b", ModerateWork, Minutes),
        ColumnSpec::new("P7", Travel, Gate),
        ColumnSpec::new("P8", Travel, Frequency),
        ColumnSpec::new("P9a", Travel, Hours),
        ColumnSpec::new("P9b", Travel, Minutes),
        ColumnSpec::new("P10", VigorousLeisure, Gate),
        ColumnSpec::new("P11", VigorousLeisure, Frequency),
        ColumnSpec::new("P12a", VigorousLeisure, Hours),
        ColumnSpec::new("P12b", VigorousLeisure, Minutes),
        ColumnSpec::new("P13", ModerateLeisure, Gate),
        ColumnSpec::new("P14", ModerateLeisure, Frequency),
        ColumnSpec::new("P15a", ModerateLeisure, Hours),
        ColumnSpec::new("P15b", ModerateLeisure, Minutes),
        ColumnSpec::new("P16a", Sedentary, Hours),
        ColumnSpec::new("P16b", Sedentary, Minutes),
    ]
};

/// Look up a measurement column by its canonical name.
pub fn column_spec(name: &str) -> Option<&'static ColumnSpec> {
    COLUMN_SPECS.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specs_follow_expected_column_order() {
        for (spec, expected) in COLUMN_SPECS.iter().zip(EXPECTED_COLUMNS.iter().skip(1)) {
            assert_eq!(spec.name, *expected);
        }
    }

    #[test]
    fn block_columns_match_specs() {
        for block in ActivityBlock::ALL {
            for column in block.dependent_columns() {
                assert_eq!(column_spec(column).unwrap().block, block);
            }
            if let Some(gate) = block.gate_column() {
                assert_eq!(column_spec(gate).unwrap().kind, FieldKind::Gate);
            }
        }
    }

    #[test]
    fn sedentary_hours_allow_full_day() {
        assert_eq!(column_spec("P16a").unwrap().range(), Some((0.0, 24.0)));
        assert_eq!(column_spec("P3a").unwrap().range(), Some((0.0, 16.0)));
        assert_eq!(column_spec("P2").unwrap().range(), Some((0.0, 7.0)));
        assert_eq!(column_spec("P15b").unwrap().range(), Some((0.0, 60.0)));
        assert_eq!(column_spec("P1").unwrap().range(), None);
    }
}
