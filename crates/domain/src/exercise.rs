use std::slice::Iter;

use derive_more::Deref;
use uuid::Uuid;

use crate::{CreateError, Name, ReadError};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn create_exercise(
        &self,
        name: Name,
        category: Category,
        muscle_group: MuscleGroup,
        description: Option<String>,
    ) -> Result<Exercise, CreateError>;
}

#[allow(async_fn_in_trait)]
pub trait ExerciseService {
    async fn get_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
    async fn create_exercise(
        &self,
        name: Name,
        category: Category,
        muscle_group: MuscleGroup,
        description: Option<String>,
    ) -> Result<Exercise, CreateError>;
}

/// Reference data describing a single exercise. Created via explicit user
/// action, otherwise read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub category: Category,
    pub muscle_group: MuscleGroup,
    pub description: Option<String>,
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(Uuid);

impl ExerciseID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for ExerciseID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for ExerciseID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Strength,
    Cardio,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORIES: [Category; 2] = [Category::Strength, Category::Cardio];
        CATEGORIES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Cardio => "Cardio",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
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

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 9] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Legs,
            MuscleGroup::Core,
            MuscleGroup::FullBody,
            MuscleGroup::Cardio,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
            MuscleGroup::Cardio => "Cardio",
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn iter_filter() -> Iter<'static, Self> {
        Self::iter()
    }
    fn name(self) -> &'static str;
}

/// Predicates applied to an exercise list. An unset selector matches all
/// exercises; all set predicates must hold.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub name: String,
    pub muscle_group: Option<MuscleGroup>,
    pub category: Option<Category>,
}

impl ExerciseFilter {
    /// Returns the matching subset in input order. The name is matched
    /// case-insensitively as a substring.
    #[must_use]
    pub fn exercises<'a>(&self, exercises: impl Iterator<Item = &'a Exercise>) -> Vec<&'a Exercise> {
        let name = self.name.to_lowercase();
        let name = name.trim();
        exercises
            .filter(|e| {
                e.name.as_ref().to_lowercase().contains(name)
                    && self.muscle_group.is_none_or(|m| e.muscle_group == m)
                    && self.category.is_none_or(|c| e.category == c)
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty() && self.muscle_group.is_none() && self.category.is_none()
    }

    #[must_use]
    pub fn muscle_group_list(&self) -> Vec<(MuscleGroup, bool)> {
        MuscleGroup::iter_filter()
            .map(|m| (*m, self.muscle_group == Some(*m)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn category_list(&self) -> Vec<(Category, bool)> {
        Category::iter_filter()
            .map(|c| (*c, self.category == Some(*c)))
            .collect::<Vec<_>>()
    }

    pub fn toggle_muscle_group(&mut self, muscle_group: MuscleGroup) {
        if self.muscle_group == Some(muscle_group) {
            self.muscle_group = None;
        } else {
            self.muscle_group = Some(muscle_group);
        }
    }

    pub fn toggle_category(&mut self, category: Category) {
        if self.category == Some(category) {
            self.category = None;
        } else {
            self.category = Some(category);
        }
    }

    pub fn clear(&mut self) {
        *self = ExerciseFilter::default();
    }
}

/// Partitions exercises into muscle group buckets. Bucket order equals the
/// order in which distinct muscle groups first appear in the input, and
/// every bucket preserves input order.
#[must_use]
pub fn group_by_muscle_group<'a>(
    exercises: impl IntoIterator<Item = &'a Exercise>,
) -> Vec<(MuscleGroup, Vec<&'a Exercise>)> {
    let mut groups: Vec<(MuscleGroup, Vec<&Exercise>)> = Vec::new();
    for exercise in exercises {
        if let Some((_, bucket)) = groups.iter_mut().find(|(m, _)| *m == exercise.muscle_group) {
            bucket.push(exercise);
        } else {
            groups.push((exercise.muscle_group, vec![exercise]));
        }
    }
    groups
}
