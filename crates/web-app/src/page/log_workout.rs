use chrono::NaiveDate;
use fitlog_domain as domain;

use crate::notification::Notifications;

/// Log-workout page: a workout draft built from the exercise picker or a
/// template, saved as a whole once at least one entry is present.
pub struct LogWorkout {
    pub draft: domain::WorkoutDraft,
    pub exercises: Vec<domain::Exercise>,
    pub filter: domain::ExerciseFilter,
    pub saving: bool,
}

impl LogWorkout {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            draft: domain::WorkoutDraft::new(today),
            exercises: Vec::new(),
            filter: domain::ExerciseFilter::default(),
            saving: false,
        }
    }

    /// Fetches the exercises shown in the picker.
    pub async fn load(
        &mut self,
        service: &impl domain::ExerciseService,
        notifications: &mut Notifications,
    ) {
        match service.get_exercises().await {
            Ok(exercises) => self.exercises = exercises,
            Err(_) => notifications.error("Failed to load exercises"),
        }
    }

    #[must_use]
    pub fn filtered_exercises(&self) -> Vec<&domain::Exercise> {
        self.filter.exercises(self.exercises.iter())
    }

    /// Adds an entry for the picked exercise and resets the picker filter.
    pub fn add_exercise(&mut self, exercise: &domain::Exercise) {
        self.draft.add_exercise(exercise);
        self.filter.clear();
    }

    pub fn start_from_template(&mut self, template: &domain::Template) {
        self.draft.apply_template(template);
    }

    /// Saves the draft. A draft without entries is rejected client-side
    /// and no request is dispatched; on failure the draft is kept.
    pub async fn save(
        &mut self,
        service: &impl domain::WorkoutService,
        notifications: &mut Notifications,
    ) -> bool {
        if !self.draft.ready_to_save() {
            notifications.error("Add at least one exercise");
            return false;
        }
        self.saving = true;
        let result = service
            .create_workout(
                self.draft.date,
                self.draft.entries().to_vec(),
                self.draft.notes(),
            )
            .await;
        self.saving = false;
        match result {
            Ok(workout) => {
                self.draft = domain::WorkoutDraft::new(workout.date);
                notifications.success("Workout logged");
                true
            }
            Err(_) => {
                notifications.error("Failed to save workout");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures_util::FutureExt;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::page::tests::{FakeService, date, exercise, template};

    #[test]
    fn test_save_empty_draft_dispatches_no_request() {
        let service = FakeService::default();
        let mut notifications = Notifications::default();
        let mut page = LogWorkout::new(date(2024, 6, 10));

        let saved = page.save(&service, &mut notifications).now_or_never().unwrap();

        assert!(!saved);
        assert!(service.calls.borrow().is_empty());
        assert_eq!(
            notifications.pop().map(|n| n.message),
            Some("Add at least one exercise".to_string())
        );
    }

    #[test]
    fn test_save_clears_draft_on_success() {
        let service = FakeService::default();
        let mut notifications = Notifications::default();
        let mut page = LogWorkout::new(date(2024, 6, 10));
        page.add_exercise(&exercise(1, "Bench Press", domain::Category::Strength));
        page.draft.notes = "Felt strong".to_string();

        let saved = page.save(&service, &mut notifications).now_or_never().unwrap();

        assert!(saved);
        assert!(page.draft.is_empty());
        assert_eq!(page.draft.notes, String::new());
        assert_eq!(*service.calls.borrow(), vec!["create_workout"]);
    }

    #[test]
    fn test_save_failure_keeps_draft() {
        let service = FakeService {
            failing: ["create_workout"].into(),
            ..FakeService::default()
        };
        let mut notifications = Notifications::default();
        let mut page = LogWorkout::new(date(2024, 6, 10));
        page.add_exercise(&exercise(1, "Bench Press", domain::Category::Strength));
        page.draft.notes = "Felt strong".to_string();

        let saved = page.save(&service, &mut notifications).now_or_never().unwrap();

        assert!(!saved);
        assert_eq!(page.draft.entries().len(), 1);
        assert_eq!(page.draft.notes, "Felt strong".to_string());
        assert_eq!(
            notifications.pop().map(|n| n.message),
            Some("Failed to save workout".to_string())
        );
    }

    #[test]
    fn test_add_exercise_resets_picker_filter() {
        let mut page = LogWorkout::new(date(2024, 6, 10));
        page.filter.name = "bench".to_string();
        page.filter.muscle_group = Some(domain::MuscleGroup::Chest);

        page.add_exercise(&exercise(1, "Bench Press", domain::Category::Strength));

        assert!(page.filter.is_empty());
        assert_eq!(page.draft.entries().len(), 1);
    }

    #[test]
    fn test_start_from_template_extends_draft() {
        let mut page = LogWorkout::new(date(2024, 6, 10));
        page.start_from_template(&template(1, "Push Day"));

        assert!(page.draft.ready_to_save());
        assert_eq!(page.draft.entries().len(), 2);
    }
}
