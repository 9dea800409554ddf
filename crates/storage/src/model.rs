//! Wire models
//!
//! Serde representations of the JSON bodies exchanged with the REST
//! server, converted to and from the domain types at the crate boundary.
//! The domain crate itself stays free of serialization concerns.

use chrono::NaiveDate;
use fitlog_domain as domain;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConversionError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
}

impl From<ConversionError> for domain::ReadError {
    fn from(value: ConversionError) -> Self {
        Self::Other(Box::new(value))
    }
}

impl From<ConversionError> for domain::CreateError {
    fn from(value: ConversionError) -> Self {
        Self::Other(Box::new(value))
    }
}

impl From<ConversionError> for domain::UpdateError {
    fn from(value: ConversionError) -> Self {
        Self::Other(Box::new(value))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Strength,
    Cardio,
}

impl From<domain::Category> for Category {
    fn from(value: domain::Category) -> Self {
        match value {
            domain::Category::Strength => Category::Strength,
            domain::Category::Cardio => Category::Cardio,
        }
    }
}

impl From<Category> for domain::Category {
    fn from(value: Category) -> Self {
        match value {
            Category::Strength => domain::Category::Strength,
            Category::Cardio => domain::Category::Cardio,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Core,
    FullBody,
    Cardio,
}

impl From<domain::MuscleGroup> for MuscleGroup {
    fn from(value: domain::MuscleGroup) -> Self {
        match value {
            domain::MuscleGroup::Chest => MuscleGroup::Chest,
            domain::MuscleGroup::Back => MuscleGroup::Back,
            domain::MuscleGroup::Shoulders => MuscleGroup::Shoulders,
            domain::MuscleGroup::Biceps => MuscleGroup::Biceps,
            domain::MuscleGroup::Triceps => MuscleGroup::Triceps,
            domain::MuscleGroup::Legs => MuscleGroup::Legs,
            domain::MuscleGroup::Core => MuscleGroup::Core,
            domain::MuscleGroup::FullBody => MuscleGroup::FullBody,
            domain::MuscleGroup::Cardio => MuscleGroup::Cardio,
        }
    }
}

impl From<MuscleGroup> for domain::MuscleGroup {
    fn from(value: MuscleGroup) -> Self {
        match value {
            MuscleGroup::Chest => domain::MuscleGroup::Chest,
            MuscleGroup::Back => domain::MuscleGroup::Back,
            MuscleGroup::Shoulders => domain::MuscleGroup::Shoulders,
            MuscleGroup::Biceps => domain::MuscleGroup::Biceps,
            MuscleGroup::Triceps => domain::MuscleGroup::Triceps,
            MuscleGroup::Legs => domain::MuscleGroup::Legs,
            MuscleGroup::Core => domain::MuscleGroup::Core,
            MuscleGroup::FullBody => domain::MuscleGroup::FullBody,
            MuscleGroup::Cardio => domain::MuscleGroup::Cardio,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: Uuid,
    pub name: String,
    pub category: Category,
    pub muscle_group: MuscleGroup,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&domain::Exercise> for Exercise {
    fn from(value: &domain::Exercise) -> Self {
        Self {
            id: *value.id,
            name: value.name.as_ref().to_string(),
            category: value.category.into(),
            muscle_group: value.muscle_group.into(),
            description: value.description.clone(),
        }
    }
}

impl TryFrom<Exercise> for domain::Exercise {
    type Error = ConversionError;

    fn try_from(value: Exercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            category: value.category.into(),
            muscle_group: value.muscle_group.into(),
            description: value.description,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Set {
    pub set_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::Set> for Set {
    fn from(value: &domain::Set) -> Self {
        Self {
            set_number: value.set_number,
            weight: value.weight,
            reps: value.reps,
            duration_minutes: value.duration_minutes,
            distance_km: value.distance_km,
            notes: value.notes.clone(),
        }
    }
}

impl From<Set> for domain::Set {
    fn from(value: Set) -> Self {
        Self {
            set_number: value.set_number,
            weight: value.weight,
            reps: value.reps,
            duration_minutes: value.duration_minutes,
            distance_km: value.distance_km,
            notes: value.notes,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub category: Category,
    pub sets: Vec<Set>,
}

impl From<&domain::WorkoutEntry> for WorkoutEntry {
    fn from(value: &domain::WorkoutEntry) -> Self {
        Self {
            exercise_id: *value.exercise_id,
            exercise_name: value.exercise_name.clone(),
            category: value.category.into(),
            sets: value.sets.iter().map(Set::from).collect(),
        }
    }
}

impl From<WorkoutEntry> for domain::WorkoutEntry {
    fn from(value: WorkoutEntry) -> Self {
        Self {
            exercise_id: value.exercise_id.into(),
            exercise_name: value.exercise_name,
            category: value.category.into(),
            sets: value.sets.into_iter().map(domain::Set::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: Uuid,
    pub date: NaiveDate,
    pub entries: Vec<WorkoutEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl From<&domain::Workout> for Workout {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: *value.id,
            date: value.date,
            entries: value.entries.iter().map(WorkoutEntry::from).collect(),
            notes: value.notes.clone(),
        }
    }
}

impl From<Workout> for domain::Workout {
    fn from(value: Workout) -> Self {
        Self {
            id: value.id.into(),
            date: value.date,
            entries: value
                .entries
                .into_iter()
                .map(domain::WorkoutEntry::from)
                .collect(),
            notes: value.notes,
        }
    }
}

fn default_sets() -> u32 {
    domain::DEFAULT_SETS
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TemplateExercise {
    pub exercise_id: Uuid,
    pub exercise_name: String,
    pub category: Category,
    #[serde(default = "default_sets")]
    pub default_sets: u32,
}

impl From<&domain::TemplateExercise> for TemplateExercise {
    fn from(value: &domain::TemplateExercise) -> Self {
        Self {
            exercise_id: *value.exercise_id,
            exercise_name: value.exercise_name.clone(),
            category: value.category.into(),
            default_sets: value.default_sets,
        }
    }
}

impl From<TemplateExercise> for domain::TemplateExercise {
    fn from(value: TemplateExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.into(),
            exercise_name: value.exercise_name,
            category: value.category.into(),
            default_sets: value.default_sets,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub exercises: Vec<TemplateExercise>,
}

impl From<&domain::Template> for Template {
    fn from(value: &domain::Template) -> Self {
        Self {
            id: *value.id,
            name: value.name.as_ref().to_string(),
            description: value.description.clone(),
            exercises: value.exercises.iter().map(TemplateExercise::from).collect(),
        }
    }
}

impl TryFrom<Template> for domain::Template {
    type Error = ConversionError;

    fn try_from(value: Template) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            description: value.description,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::TemplateExercise::from)
                .collect(),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub total_workouts: u32,
    pub total_exercises_logged: u32,
    pub total_sets: u32,
    pub total_volume: f32,
    pub total_calories: f32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub workouts_this_week: u32,
    pub workouts_this_month: u32,
}

impl From<StatsSnapshot> for domain::StatsSnapshot {
    fn from(value: StatsSnapshot) -> Self {
        Self {
            total_workouts: value.total_workouts,
            workouts_this_week: value.workouts_this_week,
            workouts_this_month: value.workouts_this_month,
            current_streak: value.current_streak,
            longest_streak: value.longest_streak,
            total_sets: value.total_sets,
            total_exercises_logged: value.total_exercises_logged,
            total_volume: value.total_volume,
            total_calories: value.total_calories,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub workouts: u32,
    pub sets: u32,
    pub volume: f32,
    pub calories: f32,
}

impl From<TrendPoint> for domain::TrendPoint {
    fn from(value: TrendPoint) -> Self {
        Self {
            date: value.date,
            workouts: value.workouts,
            sets: value.sets,
            volume: value.volume,
            calories: value.calories,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct ProgressPoint {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_volume: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_reps: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f32>,
}

impl From<ProgressPoint> for domain::ProgressPoint {
    fn from(value: ProgressPoint) -> Self {
        Self {
            date: value.date,
            max_weight: value.max_weight,
            total_volume: value.total_volume,
            total_reps: value.total_reps,
            duration: value.duration,
            distance: value.distance,
        }
    }
}
