use fitlog_domain as domain;

use crate::notification::Notifications;

/// Exercise library page: the exercise list with free-text, muscle group
/// and category filters, grouped by muscle group for display.
#[derive(Default)]
pub struct Exercises {
    pub exercises: Vec<domain::Exercise>,
    pub filter: domain::ExerciseFilter,
    pub loading: bool,
}

impl Exercises {
    pub async fn load(
        &mut self,
        service: &impl domain::ExerciseService,
        notifications: &mut Notifications,
    ) {
        self.loading = true;
        match service.get_exercises().await {
            Ok(exercises) => self.exercises = exercises,
            Err(_) => notifications.error("Failed to load exercises"),
        }
        self.loading = false;
    }

    #[must_use]
    pub fn filtered(&self) -> Vec<&domain::Exercise> {
        self.filter.exercises(self.exercises.iter())
    }

    #[must_use]
    pub fn grouped(&self) -> Vec<(domain::MuscleGroup, Vec<&domain::Exercise>)> {
        domain::group_by_muscle_group(self.filtered())
    }

    /// Creates an exercise after validating the name client-side. An
    /// invalid name dispatches no request.
    pub async fn create_exercise(
        &mut self,
        service: &impl domain::ExerciseService,
        notifications: &mut Notifications,
        name: &str,
        category: domain::Category,
        muscle_group: domain::MuscleGroup,
        description: Option<String>,
    ) -> bool {
        let name = match domain::Name::new(name) {
            Ok(name) => name,
            Err(err) => {
                notifications.error(err.to_string());
                return false;
            }
        };
        match service
            .create_exercise(name, category, muscle_group, description)
            .await
        {
            Ok(exercise) => {
                self.exercises.push(exercise);
                notifications.success("Exercise created");
                true
            }
            Err(_) => {
                notifications.error("Failed to create exercise");
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
    use crate::page::tests::{FakeService, exercise};

    #[test]
    fn test_load_replaces_exercises() {
        let service = FakeService {
            exercises: vec![exercise(1, "Bench Press", domain::Category::Strength)],
            ..FakeService::default()
        };
        let mut notifications = Notifications::default();
        let mut page = Exercises::default();

        page.load(&service, &mut notifications).now_or_never().unwrap();

        assert_eq!(page.exercises.len(), 1);
        assert!(notifications.is_empty());
    }

    #[test]
    fn test_load_failure_keeps_prior_state() {
        let service = FakeService {
            failing: ["get_exercises"].into(),
            ..FakeService::default()
        };
        let mut notifications = Notifications::default();
        let mut page = Exercises {
            exercises: vec![exercise(1, "Bench Press", domain::Category::Strength)],
            ..Exercises::default()
        };

        page.load(&service, &mut notifications).now_or_never().unwrap();

        assert_eq!(page.exercises.len(), 1);
        assert_eq!(
            notifications.pop().map(|n| n.message),
            Some("Failed to load exercises".to_string())
        );
    }

    #[test]
    fn test_filtered_and_grouped_follow_the_filter() {
        let mut page = Exercises {
            exercises: vec![
                exercise(1, "Bench Press", domain::Category::Strength),
                exercise(2, "Running", domain::Category::Cardio),
            ],
            ..Exercises::default()
        };
        page.exercises[0].muscle_group = domain::MuscleGroup::Chest;
        page.exercises[1].muscle_group = domain::MuscleGroup::Cardio;

        assert_eq!(page.filtered().len(), 2);
        assert_eq!(
            page.grouped().iter().map(|(m, _)| *m).collect::<Vec<_>>(),
            vec![domain::MuscleGroup::Chest, domain::MuscleGroup::Cardio]
        );

        page.filter.name = "bench".to_string();
        assert_eq!(page.filtered().len(), 1);
        assert_eq!(
            page.grouped().iter().map(|(m, _)| *m).collect::<Vec<_>>(),
            vec![domain::MuscleGroup::Chest]
        );
    }

    #[test]
    fn test_create_exercise_with_invalid_name_dispatches_no_request() {
        let service = FakeService::default();
        let mut notifications = Notifications::default();
        let mut page = Exercises::default();

        let created = page
            .create_exercise(
                &service,
                &mut notifications,
                "   ",
                domain::Category::Strength,
                domain::MuscleGroup::Chest,
                None,
            )
            .now_or_never()
            .unwrap();

        assert!(!created);
        assert!(service.calls.borrow().is_empty());
        assert_eq!(
            notifications.pop().map(|n| n.message),
            Some("Name must not be empty".to_string())
        );
    }

    #[test]
    fn test_create_exercise_appends_to_list() {
        let service = FakeService::default();
        let mut notifications = Notifications::default();
        let mut page = Exercises::default();

        let created = page
            .create_exercise(
                &service,
                &mut notifications,
                "Face Pull",
                domain::Category::Strength,
                domain::MuscleGroup::Back,
                Some("Rear delt and upper back".to_string()),
            )
            .now_or_never()
            .unwrap();

        assert!(created);
        assert_eq!(page.exercises.len(), 1);
        assert_eq!(page.exercises[0].name.as_ref(), "Face Pull");
    }
}
