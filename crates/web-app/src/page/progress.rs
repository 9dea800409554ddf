use fitlog_domain as domain;

use crate::notification::Notifications;

const DEFAULT_DAYS: u32 = 30;

/// Progress page: a per-exercise time series over a trailing day range.
/// Both controls re-fetch on change, so responses carry a request token
/// and stale responses are discarded instead of overwriting newer ones.
pub struct Progress {
    pub exercises: Vec<domain::Exercise>,
    pub selected: Option<domain::ExerciseID>,
    pub days: u32,
    pub data: Vec<domain::ProgressPoint>,
    pub loading: bool,
    current_request: u64,
}

impl Progress {
    #[must_use]
    pub fn new() -> Self {
        Self {
            exercises: Vec::new(),
            selected: None,
            days: DEFAULT_DAYS,
            data: Vec::new(),
            loading: false,
            current_request: 0,
        }
    }

    /// Fetches the exercise list and preselects the first strength
    /// exercise if none is selected yet.
    pub async fn load_exercises(
        &mut self,
        service: &impl domain::ExerciseService,
        notifications: &mut Notifications,
    ) {
        match service.get_exercises().await {
            Ok(exercises) => {
                if self.selected.is_none() {
                    self.selected = exercises
                        .iter()
                        .find(|e| e.category == domain::Category::Strength)
                        .map(|e| e.id);
                }
                self.exercises = exercises;
            }
            Err(_) => notifications.error("Failed to load exercises"),
        }
    }

    pub fn select_exercise(&mut self, id: domain::ExerciseID) {
        self.selected = Some(id);
    }

    pub fn set_days(&mut self, days: u32) {
        self.days = days;
    }

    #[must_use]
    pub fn selected_exercise(&self) -> Option<&domain::Exercise> {
        self.selected
            .and_then(|id| self.exercises.iter().find(|e| e.id == id))
    }

    /// Starts a progress request, superseding any request still in
    /// flight. Returns `None` when no exercise is selected.
    pub fn begin_load(&mut self) -> Option<ProgressRequest> {
        let exercise_id = self.selected?;
        self.current_request += 1;
        self.loading = true;
        Some(ProgressRequest {
            token: self.current_request,
            exercise_id,
            days: self.days,
        })
    }

    /// Applies a response. Responses to superseded requests are
    /// discarded.
    pub fn apply(
        &mut self,
        request: &ProgressRequest,
        result: Result<Vec<domain::ProgressPoint>, domain::ReadError>,
        notifications: &mut Notifications,
    ) {
        if request.token != self.current_request {
            return;
        }
        self.loading = false;
        match result {
            Ok(data) => self.data = data,
            Err(_) => notifications.error("Failed to load progress data"),
        }
    }

    /// Fetches the series for the current controls in one step. Callers
    /// that overlap requests use `begin_load`/`apply` directly.
    pub async fn load(
        &mut self,
        service: &impl domain::StatisticsService,
        notifications: &mut Notifications,
    ) {
        let Some(request) = self.begin_load() else {
            return;
        };
        let result = service
            .get_progress(request.exercise_id, request.days)
            .await;
        self.apply(&request, result, notifications);
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ProgressRequest {
    token: u64,
    pub exercise_id: domain::ExerciseID,
    pub days: u32,
}
