//! REST
//!
//! Implementation of the domain repositories on the remote HTTP API. All
//! endpoints live under the `api` base path and exchange JSON bodies;
//! dates on the wire are calendar-day strings and omitted range bounds
//! mean unbounded.

use chrono::NaiveDate;
use fitlog_domain as domain;
use gloo_net::http::{Request, Response};
use serde_json::json;

use crate::model;

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send(&self, request: Request) -> Result<Response, gloo_net::Error>;
}

#[derive(Clone)]
pub struct GlooNetSendRequest;

impl SendRequest for GlooNetSendRequest {
    async fn send(&self, request: Request) -> Result<Response, gloo_net::Error> {
        request.send().await
    }
}

#[derive(Clone)]
pub struct REST<S: SendRequest> {
    send_request: S,
}

impl REST<GlooNetSendRequest> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            send_request: GlooNetSendRequest,
        }
    }
}

impl Default for REST<GlooNetSendRequest> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SendRequest> REST<S> {
    pub const fn with_send_request(send_request: S) -> Self {
        Self { send_request }
    }

    async fn fetch<T>(&self, request: Request) -> Result<T, domain::StorageError>
    where
        T: for<'de> serde::Deserialize<'de>,
    {
        match self.send_request.send(request).await {
            Ok(response) => {
                if response.ok() {
                    response
                        .json::<T>()
                        .await
                        .map_err(|err| domain::StorageError::Deserialization(err.to_string()))
                } else {
                    Err(domain::StorageError::BadStatus {
                        status: response.status(),
                        text: response.status_text(),
                    })
                }
            }
            Err(_) => Err(domain::StorageError::NoConnection),
        }
    }

    async fn fetch_no_content<T>(
        &self,
        request: Request,
        result: T,
    ) -> Result<T, domain::StorageError> {
        match self.send_request.send(request).await {
            Ok(response) => {
                if response.ok() {
                    Ok(result)
                } else {
                    Err(domain::StorageError::BadStatus {
                        status: response.status(),
                        text: response.status_text(),
                    })
                }
            }
            Err(_) => Err(domain::StorageError::NoConnection),
        }
    }
}

impl<S: SendRequest> domain::ExerciseRepository for REST<S> {
    async fn read_exercises(&self) -> Result<Vec<domain::Exercise>, domain::ReadError> {
        let exercises: Vec<model::Exercise> = self
            .fetch(Request::get("api/exercises").build().unwrap())
            .await?;
        Ok(exercises
            .into_iter()
            .map(domain::Exercise::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn create_exercise(
        &self,
        name: domain::Name,
        category: domain::Category,
        muscle_group: domain::MuscleGroup,
        description: Option<String>,
    ) -> Result<domain::Exercise, domain::CreateError> {
        let exercise: model::Exercise = self
            .fetch(
                Request::post("api/exercises")
                    .json(&json!({
                        "name": name.as_ref(),
                        "category": model::Category::from(category),
                        "muscle_group": model::MuscleGroup::from(muscle_group),
                        "description": description,
                    }))
                    .expect("serialization failed"),
            )
            .await?;
        Ok(exercise.try_into()?)
    }
}

impl<S: SendRequest> domain::WorkoutRepository for REST<S> {
    async fn read_workouts(&self, limit: Option<u32>) -> Result<Vec<domain::Workout>, domain::ReadError> {
        let url = match limit {
            Some(limit) => format!("api/workouts?limit={limit}"),
            None => "api/workouts".to_string(),
        };
        let workouts: Vec<model::Workout> =
            self.fetch(Request::get(&url).build().unwrap()).await?;
        Ok(workouts.into_iter().map(domain::Workout::from).collect())
    }

    async fn create_workout(
        &self,
        date: NaiveDate,
        entries: Vec<domain::WorkoutEntry>,
        notes: Option<String>,
    ) -> Result<domain::Workout, domain::CreateError> {
        let workout: model::Workout = self
            .fetch(
                Request::post("api/workouts")
                    .json(&json!({
                        "date": date,
                        "entries": entries.iter().map(model::WorkoutEntry::from).collect::<Vec<_>>(),
                        "notes": notes,
                    }))
                    .expect("serialization failed"),
            )
            .await?;
        Ok(workout.into())
    }

    async fn delete_workout(
        &self,
        id: domain::WorkoutID,
    ) -> Result<domain::WorkoutID, domain::DeleteError> {
        Ok(self
            .fetch_no_content(
                Request::delete(&format!("api/workouts/{}", *id))
                    .build()
                    .unwrap(),
                id,
            )
            .await?)
    }
}

impl<S: SendRequest> domain::TemplateRepository for REST<S> {
    async fn read_templates(&self) -> Result<Vec<domain::Template>, domain::ReadError> {
        let templates: Vec<model::Template> = self
            .fetch(Request::get("api/templates").build().unwrap())
            .await?;
        Ok(templates
            .into_iter()
            .map(domain::Template::try_from)
            .collect::<Result<Vec<_>, _>>()?)
    }

    async fn create_template(
        &self,
        name: domain::Name,
        description: Option<String>,
        exercises: Vec<domain::TemplateExercise>,
    ) -> Result<domain::Template, domain::CreateError> {
        let template: model::Template = self
            .fetch(
                Request::post("api/templates")
                    .json(&json!({
                        "name": name.as_ref(),
                        "description": description,
                        "exercises": exercises.iter().map(model::TemplateExercise::from).collect::<Vec<_>>(),
                    }))
                    .expect("serialization failed"),
            )
            .await?;
        Ok(template.try_into()?)
    }

    async fn replace_template(
        &self,
        template: domain::Template,
    ) -> Result<domain::Template, domain::UpdateError> {
        let template: model::Template = self
            .fetch(
                Request::put(&format!("api/templates/{}", *template.id))
                    .json(&json!({
                        "name": template.name.as_ref(),
                        "description": template.description,
                        "exercises": template.exercises.iter().map(model::TemplateExercise::from).collect::<Vec<_>>(),
                    }))
                    .expect("serialization failed"),
            )
            .await?;
        Ok(template.try_into()?)
    }

    async fn delete_template(
        &self,
        id: domain::TemplateID,
    ) -> Result<domain::TemplateID, domain::DeleteError> {
        Ok(self
            .fetch_no_content(
                Request::delete(&format!("api/templates/{}", *id))
                    .build()
                    .unwrap(),
                id,
            )
            .await?)
    }
}

impl<S: SendRequest> domain::StatisticsRepository for REST<S> {
    async fn read_stats(
        &self,
        range: domain::DateRange,
    ) -> Result<domain::StatsSnapshot, domain::ReadError> {
        let url = format!("api/stats{}", range_query(range));
        let stats: model::StatsSnapshot =
            self.fetch(Request::get(&url).build().unwrap()).await?;
        Ok(stats.into())
    }

    async fn read_trends(
        &self,
        range: domain::DateRange,
    ) -> Result<Vec<domain::TrendPoint>, domain::ReadError> {
        let url = format!("api/trends{}", range_query(range));
        let trends: Vec<model::TrendPoint> =
            self.fetch(Request::get(&url).build().unwrap()).await?;
        Ok(trends.into_iter().map(domain::TrendPoint::from).collect())
    }

    async fn read_recent_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        let workouts: Vec<model::Workout> = self
            .fetch(Request::get("api/recent-workouts").build().unwrap())
            .await?;
        Ok(workouts.into_iter().map(domain::Workout::from).collect())
    }

    async fn read_progress(
        &self,
        exercise_id: domain::ExerciseID,
        days: u32,
    ) -> Result<Vec<domain::ProgressPoint>, domain::ReadError> {
        let url = format!("api/progress/{}?days={days}", *exercise_id);
        let progress: Vec<model::ProgressPoint> =
            self.fetch(Request::get(&url).build().unwrap()).await?;
        Ok(progress
            .into_iter()
            .map(domain::ProgressPoint::from)
            .collect())
    }
}

/// Query string for an optional date window. Unset bounds are omitted; a
/// fully unbounded range produces no query string at all.
fn range_query(range: domain::DateRange) -> String {
    let mut query = Vec::new();
    if let Some(start) = range.start {
        query.push(format!("start_date={start}"));
    }
    if let Some(end) = range.end {
        query.push(format!("end_date={end}"));
    }
    if query.is_empty() {
        String::new()
    } else {
        format!("?{}", query.join("&"))
    }
}
