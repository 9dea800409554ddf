use derive_more::Deref;
use uuid::Uuid;

use crate::{
    Category, CreateError, DeleteError, ExerciseID, Name, ReadError, Set, UpdateError,
    WorkoutEntry,
};

/// Number of sets an expanded template exercise gets when the stored count
/// is absent or non-positive.
pub const DEFAULT_SETS: u32 = 3;

#[allow(async_fn_in_trait)]
pub trait TemplateRepository {
    async fn read_templates(&self) -> Result<Vec<Template>, ReadError>;
    async fn create_template(
        &self,
        name: Name,
        description: Option<String>,
        exercises: Vec<TemplateExercise>,
    ) -> Result<Template, CreateError>;
    async fn replace_template(&self, template: Template) -> Result<Template, UpdateError>;
    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait TemplateService {
    async fn get_templates(&self) -> Result<Vec<Template>, ReadError>;
    async fn create_template(
        &self,
        name: Name,
        description: Option<String>,
        exercises: Vec<TemplateExercise>,
    ) -> Result<Template, CreateError>;
    async fn replace_template(&self, template: Template) -> Result<Template, UpdateError>;
    async fn delete_template(&self, id: TemplateID) -> Result<TemplateID, DeleteError>;
}

/// A named, reusable blueprint of exercises used to pre-populate a new
/// workout draft. Editing a template never mutates past workouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub id: TemplateID,
    pub name: Name,
    pub description: Option<String>,
    pub exercises: Vec<TemplateExercise>,
}

impl Template {
    /// Produces workout entries for every template exercise, in order.
    /// Every entry consists of freshly constructed sets; the result shares
    /// no structure with the template.
    #[must_use]
    pub fn expand(&self) -> Vec<WorkoutEntry> {
        self.exercises.iter().map(TemplateExercise::expand).collect()
    }
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TemplateID(Uuid);

impl TemplateID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for TemplateID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for TemplateID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateExercise {
    pub exercise_id: ExerciseID,
    pub exercise_name: String,
    pub category: Category,
    pub default_sets: u32,
}

impl TemplateExercise {
    fn expand(&self) -> WorkoutEntry {
        let num_sets = if self.default_sets == 0 {
            DEFAULT_SETS
        } else {
            self.default_sets
        };
        WorkoutEntry {
            exercise_id: self.exercise_id,
            exercise_name: self.exercise_name.clone(),
            category: self.category,
            sets: (1..=num_sets).map(|n| Set::empty(self.category, n)).collect(),
        }
    }
}
