//! MET-minute formulas.

use gpaq_model::{GatedBlock, MetMinutes, Record};

/// MET value of vigorous activity.
pub const VIGOROUS_MET: f64 = 8.0;
/// MET value of moderate activity and active travel.
pub const MODERATE_MET: f64 = 4.0;
/// Weight applied to daily sitting minutes.
pub const SEDENTARY_WEIGHT: f64 = 7.0;

/// `weight * days * (hours * 60 + minutes)`, with missing values as zero.
pub fn weekly_met_minutes(
    weight: f64,
    days: Option<f64>,
    hours: Option<f64>,
    minutes: Option<f64>,
) -> f64 {
    weight * days.unwrap_or(0.0) * daily_minutes(hours, minutes)
}

fn daily_minutes(hours: Option<f64>, minutes: Option<f64>) -> f64 {
    hours.unwrap_or(0.0) * 60.0 + minutes.unwrap_or(0.0)
}

fn block_met_minutes(weight: f64, block: &GatedBlock) -> f64 {
    weekly_met_minutes(
        weight,
        block.frequency_days,
        block.duration_hours,
        block.duration_minutes,
    )
}

/// Compute every derived metric for a record from its raw answers.
///
/// Pure: previously stored metrics are ignored.
pub fn met_minutes(record: &Record) -> MetMinutes {
    let vigorous_work = block_met_minutes(VIGOROUS_MET, &record.vigorous_work);
    let moderate_work = block_met_minutes(MODERATE_MET, &record.moderate_work);
    let travel = block_met_minutes(MODERATE_MET, &record.travel);
    let vigorous_leisure = block_met_minutes(VIGOROUS_MET, &record.vigorous_leisure);
    let moderate_leisure = block_met_minutes(MODERATE_MET, &record.moderate_leisure);
    let sedentary = SEDENTARY_WEIGHT
        * daily_minutes(
            record.sedentary.duration_hours,
            record.sedentary.duration_minutes,
        );

    let vigorous = vigorous_work + vigorous_leisure;
    let moderate = moderate_work + moderate_leisure + travel;
    MetMinutes {
        vigorous_work,
        moderate_work,
        travel,
        vigorous_leisure,
        moderate_leisure,
        sedentary,
        work: vigorous_work + moderate_work,
        leisure: vigorous_leisure + moderate_leisure,
        vigorous,
        moderate,
        moderate_to_vigorous: vigorous + moderate,
    }
}
