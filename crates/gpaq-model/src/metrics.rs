//! Derived MET-minute metrics attached to a record after a clean check.

/// Derived column names, in output order.
pub const DERIVED_COLUMNS: [&str; 11] = [
    "VPA_work",
    "MPA_work",
    "travel",
    "VPA_hobbies",
    "MPA_hobbies",
    "sed",
    "work",
    "hobbies",
    "VPA",
    "MPA",
    "MVPA",
];

/// Weekly MET-minutes for one respondent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MetMinutes {
    /// `VPA_work`
    pub vigorous_work: f64,
    /// `MPA_work`
    pub moderate_work: f64,
    /// `travel`
    pub travel: f64,
    /// `VPA_hobbies`
    pub vigorous_leisure: f64,
    /// `MPA_hobbies`
    pub moderate_leisure: f64,
    /// `sed`
    pub sedentary: f64,
    /// `work`
    pub work: f64,
    /// `hobbies`
    pub leisure: f64,
    /// `VPA`
    pub vigorous: f64,
    /// `MPA`
    pub moderate: f64,
    /// `MVPA`
    pub moderate_to_vigorous: f64,
}

impl MetMinutes {
    /// Values aligned with [`DERIVED_COLUMNS`].
    pub fn values(&self) -> [f64; 11] {
        [
            self.vigorous_work,
            self.moderate_work,
            self.travel,
            self.vigorous_leisure,
            self.moderate_leisure,
            self.sedentary,
            self.work,
            self.leisure,
            self.vigorous,
            self.moderate,
            self.moderate_to_vigorous,
        ]
    }
}
