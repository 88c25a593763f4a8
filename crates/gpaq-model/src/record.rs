//! Typed respondent records.

use crate::columns::{ActivityBlock, COLUMN_SPECS, FieldKind, MEASUREMENT_COLUMN_COUNT};
use crate::metrics::MetMinutes;

/// Answers for one gated block: gate, days per week, hours and minutes per day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GatedBlock {
    pub gate: Option<f64>,
    pub frequency_days: Option<f64>,
    pub duration_hours: Option<f64>,
    pub duration_minutes: Option<f64>,
}

impl GatedBlock {
    /// Gate answered "yes" (1).
    pub fn answered_yes(&self) -> bool {
        self.gate == Some(1.0)
    }

    /// Gate answered "no" (2).
    pub fn answered_no(&self) -> bool {
        self.gate == Some(2.0)
    }
}

/// Sitting time. The sedentary block has no gate and no frequency.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SedentaryBlock {
    pub duration_hours: Option<f64>,
    pub duration_minutes: Option<f64>,
}

/// One respondent's questionnaire answers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    pub id: String,
    pub vigorous_work: GatedBlock,
    pub moderate_work: GatedBlock,
    pub travel: GatedBlock,
    pub vigorous_leisure: GatedBlock,
    pub moderate_leisure: GatedBlock,
    pub sedentary: SedentaryBlock,
    /// Set by the metric deriver once the owning table passed every check.
    pub metrics: Option<MetMinutes>,
}

impl Record {
    /// Empty record for the given respondent.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Build a record from measurement values in file order (P1..P16b).
    pub fn from_values(id: impl Into<String>, values: [Option<f64>; MEASUREMENT_COLUMN_COUNT]) -> Self {
        let mut record = Self::new(id);
        for (spec, value) in COLUMN_SPECS.iter().zip(values) {
            *record.slot_mut(spec.block, spec.kind) = value;
        }
        record
    }

    /// Measurement values in file order (P1..P16b).
    pub fn values(&self) -> [Option<f64>; MEASUREMENT_COLUMN_COUNT] {
        let mut values = [None; MEASUREMENT_COLUMN_COUNT];
        for (slot, spec) in values.iter_mut().zip(COLUMN_SPECS.iter()) {
            *slot = self.value(spec.block, spec.kind);
        }
        values
    }

    /// Gated block by kind. Returns `None` for [`ActivityBlock::Sedentary`].
    pub fn gated_block(&self, block: ActivityBlock) -> Option<&GatedBlock> {
        match block {
            ActivityBlock::VigorousWork => Some(&self.vigorous_work),
            ActivityBlock::ModerateWork => Some(&self.moderate_work),
            ActivityBlock::Travel => Some(&self.travel),
            ActivityBlock::VigorousLeisure => Some(&self.vigorous_leisure),
            ActivityBlock::ModerateLeisure => Some(&self.moderate_leisure),
            ActivityBlock::Sedentary => None,
        }
    }

    /// All gated blocks in questionnaire order.
    pub fn gated_blocks(&self) -> [(ActivityBlock, &GatedBlock); 5] {
        [
            (ActivityBlock::VigorousWork, &self.vigorous_work),
            (ActivityBlock::ModerateWork, &self.moderate_work),
            (ActivityBlock::Travel, &self.travel),
            (ActivityBlock::VigorousLeisure, &self.vigorous_leisure),
            (ActivityBlock::ModerateLeisure, &self.moderate_leisure),
        ]
    }

    /// Value of a single field. Gate and frequency are always `None` for the
    /// sedentary block.
    pub fn value(&self, block: ActivityBlock, kind: FieldKind) -> Option<f64> {
        match self.gated_block(block) {
            Some(gated) => match kind {
                FieldKind::Gate => gated.gate,
                FieldKind::Frequency => gated.frequency_days,
                FieldKind::Hours => gated.duration_hours,
                FieldKind::Minutes => gated.duration_minutes,
            },
            None => match kind {
                FieldKind::Hours => self.sedentary.duration_hours,
                FieldKind::Minutes => self.sedentary.duration_minutes,
                FieldKind::Gate | FieldKind::Frequency => None,
            },
        }
    }

    fn slot_mut(&mut self, block: ActivityBlock, kind: FieldKind) -> &mut Option<f64> {
        let gated = match block {
            ActivityBlock::VigorousWork => &mut self.vigorous_work,
            ActivityBlock::ModerateWork => &mut self.moderate_work,
            ActivityBlock::Travel => &mut self.travel,
            ActivityBlock::VigorousLeisure => &mut self.vigorous_leisure,
            ActivityBlock::ModerateLeisure => &mut self.moderate_leisure,
            ActivityBlock::Sedentary => {
                return match kind {
                    FieldKind::Minutes => &mut self.sedentary.duration_minutes,
                    // The schema has no sedentary gate or frequency column.
                    _ => &mut self.sedentary.duration_hours,
                };
            }
        };
        match kind {
            FieldKind::Gate => &mut gated.gate,
            FieldKind::Frequency => &mut gated.frequency_days,
            FieldKind::Hours => &mut gated.duration_hours,
            FieldKind::Minutes => &mut gated.duration_minutes,
        }
    }
}
