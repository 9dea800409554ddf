use std::collections::BTreeSet;

use chrono::NaiveDate;
use fitlog_domain as domain;

use crate::notification::Notifications;

const WORKOUT_LIMIT: u32 = 100;

/// History page: the most recent workouts with per-workout totals, an
/// optional single-day filter and whole-workout deletion.
#[derive(Default)]
pub struct History {
    pub workouts: Vec<domain::Workout>,
    pub selected_date: Option<NaiveDate>,
    pub expanded: Option<domain::WorkoutID>,
    pub loading: bool,
}

impl History {
    pub async fn load(
        &mut self,
        service: &impl domain::WorkoutService,
        notifications: &mut Notifications,
    ) {
        self.loading = true;
        match service.get_workouts(Some(WORKOUT_LIMIT)).await {
            Ok(workouts) => self.workouts = workouts,
            Err(_) => notifications.error("Failed to load workouts"),
        }
        self.loading = false;
    }

    /// Workouts on the selected day, or all workouts if no day is
    /// selected. Input order is preserved.
    #[must_use]
    pub fn filtered(&self) -> Vec<&domain::Workout> {
        self.workouts
            .iter()
            .filter(|w| self.selected_date.is_none_or(|date| w.date == date))
            .collect()
    }

    /// Days with at least one workout, for marking the calendar widget.
    #[must_use]
    pub fn workout_dates(&self) -> BTreeSet<NaiveDate> {
        self.workouts.iter().map(|w| w.date).collect()
    }

    pub fn toggle_expanded(&mut self, id: domain::WorkoutID) {
        self.expanded = if self.expanded == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Deletes the workout and removes exactly that id from the in-memory
    /// list, leaving the order of the others unchanged.
    pub async fn delete_workout(
        &mut self,
        service: &impl domain::WorkoutService,
        notifications: &mut Notifications,
        id: domain::WorkoutID,
    ) {
        match service.delete_workout(id).await {
            Ok(id) => {
                self.workouts.retain(|w| w.id != id);
                if self.expanded == Some(id) {
                    self.expanded = None;
                }
                notifications.success("Workout deleted");
            }
            Err(_) => notifications.error("Failed to delete workout"),
        }
    }
}
