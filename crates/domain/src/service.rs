use chrono::NaiveDate;
use log::{debug, error};

use crate::{
    Category, CreateError, DateRange, DeleteError, Exercise, ExerciseID, ExerciseRepository,
    ExerciseService, MuscleGroup, Name, ProgressPoint, ReadError, StatisticsRepository,
    StatisticsService, StatsSnapshot, Template, TemplateExercise, TemplateID, TemplateRepository,
    TemplateService, TrendPoint, UpdateError, Workout, WorkoutEntry, WorkoutID, WorkoutRepository,
    WorkoutService,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> ExerciseService for Service<R> {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError> {
        log_on_error!(
            self.repository.read_exercises(),
            ReadError,
            "get",
            "exercises"
        )
    }

    async fn create_exercise(
        &self,
        name: Name,
        category: Category,
        muscle_group: MuscleGroup,
        description: Option<String>,
    ) -> Result<Exercise, CreateError> {
        log_on_error!(
            self.repository
                .create_exercise(name, category, muscle_group, description),
            CreateError,
            "create",
            "exercise"
        )
    }
}

impl<R: WorkoutRepository> WorkoutService for Service<R> {
    async fn get_workouts(&self, limit: Option<u32>) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_workouts(limit),
            ReadError,
            "get",
            "workouts"
        )
    }

    async fn create_workout(
        &self,
        date: NaiveDate,
        entries: Vec<WorkoutEntry>,
        notes: Option<String>,
    ) -> Result<Workout, CreateError> {
        log_on_error!(
            self.repository.create_workout(date, entries, notes),
            CreateError,
            "create",
            "workout"
        )
    }

    async fn delete_workout(&self, id: WorkoutID) -> Result<WorkoutID, DeleteError> {
        log_on_error!(
            self.repository.delete_workout(id),
            DeleteError,
            "delete",
            "workout"
        )
    }
}

impl<R: TemplateRepository> TemplateService for Service<R> {
    async fn get_templates(&self) -> Result<Vec<Template>, ReadError> {
        log_on_error!(
            self.repository.read_templates(),
            ReadError,
            "get",
            "templates"
        )
    }

    async fn create_template(
        &self,
        name: Name,
        description: Option<String>,
        exercises: Vec<TemplateExercise>,
    ) -> Result<Template, CreateError> {
        log_on_error!(
            self.repository.create_template(name, description, exercises),
            CreateError,
            "create",
            "template"
        )
    }

    async fn replace_template(&self, template: Template) -> Result<Template, UpdateError> {
        log_on_error!(
            self.repository.replace_template(template),
            UpdateError,
            "replace",
            "template"
        )
    }

    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError> {
        log_on_error!(
            self.repository.delete_template(id),
            DeleteError,
            "delete",
            "template"
        )
    }
}

impl<R: StatisticsRepository> StatisticsService for Service<R> {
    async fn get_stats(&self, range: DateRange) -> Result<StatsSnapshot, ReadError> {
        log_on_error!(self.repository.read_stats(range), ReadError, "get", "stats")
    }

    async fn get_trends(&self, range: DateRange) -> Result<Vec<TrendPoint>, ReadError> {
        log_on_error!(
            self.repository.read_trends(range),
            ReadError,
            "get",
            "trends"
        )
    }

    async fn get_recent_workouts(&self) -> Result<Vec<Workout>, ReadError> {
        log_on_error!(
            self.repository.read_recent_workouts(),
            ReadError,
            "get",
            "recent workouts"
        )
    }

    async fn get_progress(
        &self,
        exercise_id: ExerciseID,
        days: u32,
    ) -> Result<Vec<ProgressPoint>, ReadError> {
        log_on_error!(
            self.repository.read_progress(exercise_id, days),
            ReadError,
            "get",
            "progress"
        )
    }
}
