use chrono::NaiveDate;
use derive_more::Deref;
use uuid::Uuid;

use crate::{Category, CreateError, DeleteError, Exercise, ExerciseID, ReadError, Template};

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self, limit: Option<u32>) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(
        &self,
        date: NaiveDate,
        entries: Vec<WorkoutEntry>,
        notes: Option<String>,
    ) -> Result<Workout, CreateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutService {
    async fn get_workouts(&self, limit: Option<u32>) -> Result<Vec<Workout>, ReadError>;
    async fn create_workout(
        &self,
        date: NaiveDate,
        entries: Vec<WorkoutEntry>,
        notes: Option<String>,
    ) -> Result<Workout, CreateError>;
    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError>;
}

/// A logged training session. Created complete in one save operation and
/// deleted as a whole unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub date: NaiveDate,
    pub entries: Vec<WorkoutEntry>,
    pub notes: Option<String>,
}

impl Workout {
    /// Totals across all sets of all entries, in order. Contribution is
    /// decided per field, not per category, to tolerate malformed or
    /// legacy records. Missing or zero fields contribute nothing.
    #[must_use]
    pub fn totals(&self) -> WorkoutTotals {
        let mut totals = WorkoutTotals::default();
        for entry in &self.entries {
            for set in &entry.sets {
                totals.sets += 1;
                if let (Some(weight), Some(reps)) = (set.weight, set.reps) {
                    #[allow(clippy::cast_precision_loss)]
                    if weight > 0.0 && reps > 0 {
                        totals.volume += weight * reps as f32;
                    }
                }
                if let Some(duration) = set.duration_minutes {
                    if duration > 0.0 {
                        totals.duration += duration;
                    }
                }
                if let Some(distance) = set.distance_km {
                    if distance > 0.0 {
                        totals.distance += distance;
                    }
                }
            }
        }
        totals
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(Uuid);

impl WorkoutID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for WorkoutID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for WorkoutID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct WorkoutTotals {
    pub sets: u32,
    pub volume: f32,
    pub duration: f32,
    pub distance: f32,
}

/// One exercise's worth of sets within a workout. Name and category are
/// copies taken at add time and are not re-synced if the exercise changes
/// later.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutEntry {
    pub exercise_id: ExerciseID,
    pub exercise_name: String,
    pub category: Category,
    pub sets: Vec<Set>,
}

impl WorkoutEntry {
    #[must_use]
    pub fn new(exercise: &Exercise) -> Self {
        Self {
            exercise_id: exercise.id,
            exercise_name: exercise.name.as_ref().to_string(),
            category: exercise.category,
            sets: vec![Set::empty(exercise.category, 1)],
        }
    }

    /// Appends a set numbered `len + 1`, starting from the values of the
    /// previous set.
    pub fn add_set(&mut self) {
        #[allow(clippy::cast_possible_truncation)]
        let set_number = self.sets.len() as u32 + 1;
        let mut set = self
            .sets
            .last()
            .cloned()
            .unwrap_or_else(|| Set::empty(self.category, 0));
        set.set_number = set_number;
        set.notes = None;
        self.sets.push(set);
    }

    /// Removes the set at `index` and renumbers the remaining sets
    /// contiguously from 1. The last remaining set cannot be removed.
    /// Returns whether a set was removed.
    pub fn remove_set(&mut self, index: usize) -> bool {
        if self.sets.len() <= 1 || index >= self.sets.len() {
            return false;
        }
        self.sets.remove(index);
        for (i, set) in self.sets.iter_mut().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            {
                set.set_number = i as u32 + 1;
            }
        }
        true
    }
}

/// One repetition unit within an entry. The populated fields are determined
/// by the parent entry's category: weight and reps for strength, duration
/// and distance for cardio.
#[derive(Debug, Clone, PartialEq)]
pub struct Set {
    pub set_number: u32,
    pub weight: Option<f32>,
    pub reps: Option<u32>,
    pub duration_minutes: Option<f32>,
    pub distance_km: Option<f32>,
    pub notes: Option<String>,
}

impl Set {
    #[must_use]
    pub fn empty(category: Category, set_number: u32) -> Self {
        match category {
            Category::Strength => Self {
                set_number,
                weight: Some(0.0),
                reps: Some(0),
                duration_minutes: None,
                distance_km: None,
                notes: None,
            },
            Category::Cardio => Self {
                set_number,
                weight: None,
                reps: None,
                duration_minutes: Some(0.0),
                distance_km: Some(0.0),
                notes: None,
            },
        }
    }
}

/// Draft of a workout being logged. Starts empty, accumulates entries and
/// may be saved once at least one entry is present.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutDraft {
    pub date: NaiveDate,
    pub notes: String,
    entries: Vec<WorkoutEntry>,
}

impl WorkoutDraft {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            notes: String::new(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    pub fn entry_mut(&mut self, index: usize) -> Option<&mut WorkoutEntry> {
        self.entries.get_mut(index)
    }

    pub fn add_exercise(&mut self, exercise: &Exercise) {
        self.entries.push(WorkoutEntry::new(exercise));
    }

    /// Extends the draft with freshly expanded entries from `template`.
    pub fn apply_template(&mut self, template: &Template) {
        self.entries.extend(template.expand());
    }

    pub fn remove_entry(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Save precondition: a draft without entries must not be dispatched.
    #[must_use]
    pub fn ready_to_save(&self) -> bool {
        !self.entries.is_empty()
    }

    #[must_use]
    pub fn notes(&self) -> Option<String> {
        let notes = self.notes.trim();
        if notes.is_empty() {
            None
        } else {
            Some(notes.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::Name;

    fn strength_set(set_number: u32, weight: f32, reps: u32) -> Set {
        Set {
            set_number,
            weight: Some(weight),
            reps: Some(reps),
            duration_minutes: None,
            distance_km: None,
            notes: None,
        }
    }

    fn cardio_set(set_number: u32, duration_minutes: f32, distance_km: f32) -> Set {
        Set {
            set_number,
            weight: None,
            reps: None,
            duration_minutes: Some(duration_minutes),
            distance_km: Some(distance_km),
            notes: None,
        }
    }

    fn strength_entry(sets: Vec<Set>) -> WorkoutEntry {
        WorkoutEntry {
            exercise_id: 1.into(),
            exercise_name: "Bench Press".to_string(),
            category: Category::Strength,
            sets,
        }
    }

    fn cardio_entry(sets: Vec<Set>) -> WorkoutEntry {
        WorkoutEntry {
            exercise_id: 2.into(),
            exercise_name: "Running".to_string(),
            category: Category::Cardio,
            sets,
        }
    }

    fn workout(entries: Vec<WorkoutEntry>) -> Workout {
        Workout {
            id: 1.into(),
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            entries,
            notes: None,
        }
    }

    fn exercise(id: u128, name: &str, category: Category) -> Exercise {
        Exercise {
            id: id.into(),
            name: Name::new(name).unwrap(),
            category,
            muscle_group: match category {
                Category::Strength => crate::MuscleGroup::Chest,
                Category::Cardio => crate::MuscleGroup::Cardio,
            },
            description: None,
        }
    }

    #[test]
    fn test_totals_mixed_workout() {
        let workout = workout(vec![
            strength_entry(vec![strength_set(1, 100.0, 5), strength_set(2, 80.0, 8)]),
            cardio_entry(vec![cardio_set(1, 30.0, 5.0)]),
        ]);
        assert_eq!(
            workout.totals(),
            WorkoutTotals {
                sets: 3,
                volume: 1140.0,
                duration: 30.0,
                distance: 5.0,
            }
        );
    }

    #[test]
    fn test_totals_set_count_matches_entry_sets() {
        let workout = workout(vec![
            strength_entry(vec![strength_set(1, 100.0, 5)]),
            strength_entry(vec![strength_set(1, 60.0, 10), strength_set(2, 60.0, 10)]),
            cardio_entry(vec![cardio_set(1, 20.0, 3.0)]),
        ]);
        let expected = workout
            .entries
            .iter()
            .map(|e| u32::try_from(e.sets.len()).unwrap())
            .sum::<u32>();
        assert_eq!(workout.totals().sets, expected);
    }

    #[test]
    fn test_totals_cardio_only_has_no_volume() {
        let workout = workout(vec![cardio_entry(vec![
            cardio_set(1, 30.0, 5.0),
            cardio_set(2, 15.0, 2.5),
        ])]);
        let totals = workout.totals();
        assert_eq!(totals.volume, 0.0);
        assert_eq!(totals.duration, 45.0);
        assert_eq!(totals.distance, 7.5);
    }

    #[test]
    fn test_totals_strength_only_has_no_duration_or_distance() {
        let workout = workout(vec![strength_entry(vec![
            strength_set(1, 100.0, 5),
            strength_set(2, 100.0, 5),
        ])]);
        let totals = workout.totals();
        assert_eq!(totals.duration, 0.0);
        assert_eq!(totals.distance, 0.0);
        assert_eq!(totals.volume, 1000.0);
    }

    #[rstest]
    #[case::zero_weight(Some(0.0), Some(10), 0.0)]
    #[case::zero_reps(Some(100.0), Some(0), 0.0)]
    #[case::missing_weight(None, Some(10), 0.0)]
    #[case::missing_reps(Some(100.0), None, 0.0)]
    #[case::both_present(Some(100.0), Some(10), 1000.0)]
    fn test_totals_volume_requires_nonzero_weight_and_reps(
        #[case] weight: Option<f32>,
        #[case] reps: Option<u32>,
        #[case] expected_volume: f32,
    ) {
        let workout = workout(vec![strength_entry(vec![Set {
            set_number: 1,
            weight,
            reps,
            duration_minutes: None,
            distance_km: None,
            notes: None,
        }])]);
        let totals = workout.totals();
        assert_eq!(totals.sets, 1);
        assert_eq!(totals.volume, expected_volume);
    }

    #[test]
    fn test_totals_ignores_category_of_malformed_records() {
        // A legacy strength set carrying cardio fields still contributes them.
        let workout = workout(vec![strength_entry(vec![Set {
            set_number: 1,
            weight: Some(50.0),
            reps: Some(10),
            duration_minutes: Some(5.0),
            distance_km: None,
            notes: None,
        }])]);
        let totals = workout.totals();
        assert_eq!(totals.volume, 500.0);
        assert_eq!(totals.duration, 5.0);
    }

    #[test]
    fn test_add_set_copies_previous_values() {
        let mut entry = strength_entry(vec![strength_set(1, 80.0, 8)]);
        entry.add_set();
        assert_eq!(
            entry.sets,
            vec![strength_set(1, 80.0, 8), strength_set(2, 80.0, 8)]
        );
    }

    #[test]
    fn test_remove_set_renumbers_contiguously() {
        let mut entry = strength_entry(vec![
            strength_set(1, 100.0, 5),
            strength_set(2, 90.0, 6),
            strength_set(3, 80.0, 8),
        ]);
        assert!(entry.remove_set(1));
        assert_eq!(
            entry.sets,
            vec![strength_set(1, 100.0, 5), strength_set(2, 80.0, 8)]
        );
    }

    #[test]
    fn test_remove_set_refuses_last_set() {
        let mut entry = strength_entry(vec![strength_set(1, 100.0, 5)]);
        assert!(!entry.remove_set(0));
        assert_eq!(entry.sets.len(), 1);
    }

    #[test]
    fn test_remove_set_out_of_range() {
        let mut entry = strength_entry(vec![strength_set(1, 100.0, 5), strength_set(2, 90.0, 6)]);
        assert!(!entry.remove_set(2));
        assert_eq!(entry.sets.len(), 2);
    }

    #[test]
    fn test_set_empty_shapes() {
        assert_eq!(
            Set::empty(Category::Strength, 1),
            Set {
                set_number: 1,
                weight: Some(0.0),
                reps: Some(0),
                duration_minutes: None,
                distance_km: None,
                notes: None,
            }
        );
        assert_eq!(
            Set::empty(Category::Cardio, 2),
            Set {
                set_number: 2,
                weight: None,
                reps: None,
                duration_minutes: Some(0.0),
                distance_km: Some(0.0),
                notes: None,
            }
        );
    }

    #[test]
    fn test_draft_starts_empty_and_becomes_ready() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut draft = WorkoutDraft::new(date);
        assert!(draft.is_empty());
        assert!(!draft.ready_to_save());

        draft.add_exercise(&exercise(1, "Bench Press", Category::Strength));
        assert!(!draft.is_empty());
        assert!(draft.ready_to_save());
        assert_eq!(draft.entries()[0].sets, vec![Set::empty(Category::Strength, 1)]);

        draft.remove_entry(0);
        assert!(draft.is_empty());
        assert!(!draft.ready_to_save());
    }

    #[test]
    fn test_draft_notes_trimmed_to_option() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut draft = WorkoutDraft::new(date);
        assert_eq!(draft.notes(), None);
        draft.notes = "   ".to_string();
        assert_eq!(draft.notes(), None);
        draft.notes = "  Felt strong  ".to_string();
        assert_eq!(draft.notes(), Some("Felt strong".to_string()));
    }
}
