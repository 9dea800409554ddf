use fitlog_domain as domain;
use futures_util::future;

use crate::notification::Notifications;

/// Templates page: the template list plus a create/edit form backed by the
/// exercise picker.
#[derive(Default)]
pub struct Templates {
    pub templates: Vec<domain::Template>,
    pub exercises: Vec<domain::Exercise>,
    pub form: Option<TemplateForm>,
    pub loading: bool,
}

impl Templates {
    /// Fetches templates and exercises concurrently; each result is
    /// applied independently.
    pub async fn load(
        &mut self,
        service: &(impl domain::TemplateService + domain::ExerciseService),
        notifications: &mut Notifications,
    ) {
        self.loading = true;
        let (templates, exercises) =
            future::join(service.get_templates(), service.get_exercises()).await;
        self.loading = false;
        match templates {
            Ok(templates) => self.templates = templates,
            Err(_) => notifications.error("Failed to load templates"),
        }
        match exercises {
            Ok(exercises) => self.exercises = exercises,
            Err(_) => notifications.error("Failed to load exercises"),
        }
    }

    pub fn open_create_form(&mut self) {
        self.form = Some(TemplateForm::new());
    }

    pub fn open_edit_form(&mut self, id: domain::TemplateID) {
        if let Some(template) = self.templates.iter().find(|t| t.id == id) {
            self.form = Some(TemplateForm::edit(template));
        }
    }

    pub fn close_form(&mut self) {
        self.form = None;
    }

    /// Saves the form after checking the client-side preconditions
    /// (non-empty name, at least one exercise). On failure the form is
    /// kept open with its state intact.
    pub async fn save(
        &mut self,
        service: &impl domain::TemplateService,
        notifications: &mut Notifications,
    ) -> bool {
        let Some(form) = &self.form else {
            return false;
        };
        let name = match domain::Name::new(&form.name) {
            Ok(name) => name,
            Err(err) => {
                notifications.error(err.to_string());
                return false;
            }
        };
        if form.exercises.is_empty() {
            notifications.error("Select at least one exercise");
            return false;
        }
        let result = if form.id.is_nil() {
            service
                .create_template(name, form.description(), form.exercises.clone())
                .await
                .map(Created::New)
        } else {
            service
                .replace_template(domain::Template {
                    id: form.id,
                    name,
                    description: form.description(),
                    exercises: form.exercises.clone(),
                })
                .await
                .map(Created::Replaced)
                .map_err(Into::into)
        };
        match result {
            Ok(Created::New(template)) => {
                self.templates.insert(0, template);
                self.form = None;
                notifications.success("Template created");
                true
            }
            Ok(Created::Replaced(template)) => {
                if let Some(existing) = self.templates.iter_mut().find(|t| t.id == template.id) {
                    *existing = template;
                }
                self.form = None;
                notifications.success("Template updated");
                true
            }
            Err(_) => {
                notifications.error("Failed to save template");
                false
            }
        }
    }

    pub async fn delete_template(
        &mut self,
        service: &impl domain::TemplateService,
        notifications: &mut Notifications,
        id: domain::TemplateID,
    ) {
        match service.delete_template(id).await {
            Ok(id) => {
                self.templates.retain(|t| t.id != id);
                notifications.success("Template deleted");
            }
            Err(_) => notifications.error("Failed to delete template"),
        }
    }
}

enum Created {
    New(domain::Template),
    Replaced(domain::Template),
}

/// Create/edit form state. A nil id marks a template that has not been
/// created yet.
pub struct TemplateForm {
    pub id: domain::TemplateID,
    pub name: String,
    pub description: String,
    pub exercises: Vec<domain::TemplateExercise>,
    pub filter: domain::ExerciseFilter,
}

impl TemplateForm {
    fn new() -> Self {
        Self {
            id: domain::TemplateID::nil(),
            name: String::new(),
            description: String::new(),
            exercises: Vec::new(),
            filter: domain::ExerciseFilter::default(),
        }
    }

    fn edit(template: &domain::Template) -> Self {
        Self {
            id: template.id,
            name: template.name.as_ref().to_string(),
            description: template.description.clone().unwrap_or_default(),
            exercises: template.exercises.clone(),
            filter: domain::ExerciseFilter::default(),
        }
    }

    /// Adds the exercise with the default set count, or removes it if
    /// already selected.
    pub fn toggle_exercise(&mut self, exercise: &domain::Exercise) {
        if let Some(index) = self
            .exercises
            .iter()
            .position(|e| e.exercise_id == exercise.id)
        {
            self.exercises.remove(index);
        } else {
            self.exercises.push(domain::TemplateExercise {
                exercise_id: exercise.id,
                exercise_name: exercise.name.as_ref().to_string(),
                category: exercise.category,
                default_sets: domain::DEFAULT_SETS,
            });
        }
    }

    pub fn remove_exercise(&mut self, id: domain::ExerciseID) {
        self.exercises.retain(|e| e.exercise_id != id);
    }

    #[must_use]
    pub fn description(&self) -> Option<String> {
        let description = self.description.trim();
        if description.is_empty() {
            None
        } else {
            Some(description.to_string())
        }
    }
}
