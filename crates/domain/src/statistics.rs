use std::slice::Iter;

use chrono::{Datelike, Days, NaiveDate};

use crate::{ExerciseID, Property, ReadError, Workout};

#[allow(async_fn_in_trait)]
pub trait StatisticsRepository {
    async fn read_stats(&self, range: DateRange) -> Result<StatsSnapshot, ReadError>;
    async fn read_trends(&self, range: DateRange) -> Result<Vec<TrendPoint>, ReadError>;
    async fn read_recent_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn read_progress(
        &self,
        exercise_id: ExerciseID,
        days: u32,
    ) -> Result<Vec<ProgressPoint>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait StatisticsService {
    async fn get_stats(&self, range: DateRange) -> Result<StatsSnapshot, ReadError>;
    async fn get_trends(&self, range: DateRange) -> Result<Vec<TrendPoint>, ReadError>;
    async fn get_recent_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn get_progress(
        &self,
        exercise_id: ExerciseID,
        days: u32,
    ) -> Result<Vec<ProgressPoint>, ReadError>;
}

/// Aggregate snapshot computed server-side over a date range.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub total_workouts: u32,
    pub workouts_this_week: u32,
    pub workouts_this_month: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_sets: u32,
    pub total_exercises_logged: u32,
    pub total_volume: f32,
    pub total_calories: f32,
}

/// One day's aggregated values in a time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub workouts: u32,
    pub sets: u32,
    pub volume: f32,
    pub calories: f32,
}

/// One day's values in a per-exercise time series. Which fields are
/// populated depends on the exercise category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    pub max_weight: Option<f32>,
    pub total_volume: Option<f32>,
    pub total_reps: Option<u32>,
    pub duration: Option<f32>,
    pub distance: Option<f32>,
}

/// Concrete bounds for a stats or trends request. An unset bound is
/// omitted from the query and means unbounded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DateRangePreset {
    Last7Days,
    #[default]
    Last30Days,
    Last90Days,
    YearToDate,
    AllTime,
    Custom,
}

impl DateRangePreset {
    /// Trailing day count of the fixed presets.
    #[must_use]
    pub fn days(self) -> Option<u64> {
        match self {
            DateRangePreset::Last7Days => Some(7),
            DateRangePreset::Last30Days => Some(30),
            DateRangePreset::Last90Days => Some(90),
            DateRangePreset::YearToDate
            | DateRangePreset::AllTime
            | DateRangePreset::Custom => None,
        }
    }

    /// Resolves to concrete bounds. `Custom` requires both explicit bounds
    /// and resolves to `None` while either is missing; the caller must not
    /// issue a range-bounded request in that case.
    #[must_use]
    pub fn resolve(
        self,
        custom_start: Option<NaiveDate>,
        custom_end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Option<DateRange> {
        match self {
            DateRangePreset::YearToDate => Some(DateRange {
                start: NaiveDate::from_ymd_opt(today.year(), 1, 1),
                end: Some(today),
            }),
            DateRangePreset::AllTime => Some(DateRange::default()),
            DateRangePreset::Custom => match (custom_start, custom_end) {
                (Some(start), Some(end)) => Some(DateRange {
                    start: Some(start),
                    end: Some(end),
                }),
                _ => None,
            },
            preset => {
                let days = preset.days()?;
                Some(DateRange {
                    start: today.checked_sub_days(Days::new(days)),
                    end: Some(today),
                })
            }
        }
    }
}

impl Property for DateRangePreset {
    fn iter() -> Iter<'static, DateRangePreset> {
        static PRESETS: [DateRangePreset; 6] = [
            DateRangePreset::Last7Days,
            DateRangePreset::Last30Days,
            DateRangePreset::Last90Days,
            DateRangePreset::YearToDate,
            DateRangePreset::AllTime,
            DateRangePreset::Custom,
        ];
        PRESETS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            DateRangePreset::Last7Days => "Last 7 Days",
            DateRangePreset::Last30Days => "Last 30 Days",
            DateRangePreset::Last90Days => "Last 90 Days",
            DateRangePreset::YearToDate => "Year to Date",
            DateRangePreset::AllTime => "All Time",
            DateRangePreset::Custom => "Custom",
        }
    }
}
