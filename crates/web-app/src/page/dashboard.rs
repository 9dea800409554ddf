use chrono::NaiveDate;
use fitlog_domain as domain;
use futures_util::future;

use crate::notification::Notifications;

/// Dashboard page: aggregate stats, trend series and the most recent
/// workouts over a selectable date range.
pub struct Dashboard {
    pub preset: domain::DateRangePreset,
    pub custom_start: Option<NaiveDate>,
    pub custom_end: Option<NaiveDate>,
    pub stats: Option<domain::StatsSnapshot>,
    pub trends: Vec<domain::TrendPoint>,
    pub recent_workouts: Vec<domain::Workout>,
    pub loading: bool,
}

impl Dashboard {
    #[must_use]
    pub fn new() -> Self {
        Self {
            preset: domain::DateRangePreset::AllTime,
            custom_start: None,
            custom_end: None,
            stats: None,
            trends: Vec::new(),
            recent_workouts: Vec::new(),
            loading: false,
        }
    }

    /// Switching away from `Custom` clears previously chosen explicit
    /// bounds.
    pub fn set_preset(&mut self, preset: domain::DateRangePreset) {
        if preset != domain::DateRangePreset::Custom {
            self.custom_start = None;
            self.custom_end = None;
        }
        self.preset = preset;
    }

    pub fn set_custom_bounds(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.custom_start = start;
        self.custom_end = end;
    }

    /// Issues the stats, trends and recent-workouts requests concurrently
    /// and applies each result independently. A failed request surfaces a
    /// notification and leaves the corresponding prior state untouched.
    /// With an unresolved custom range no request is issued.
    pub async fn load(
        &mut self,
        service: &impl domain::StatisticsService,
        notifications: &mut Notifications,
        today: NaiveDate,
    ) {
        let Some(range) = self
            .preset
            .resolve(self.custom_start, self.custom_end, today)
        else {
            return;
        };
        self.loading = true;
        let (stats, trends, recent_workouts) = future::join3(
            service.get_stats(range),
            service.get_trends(range),
            service.get_recent_workouts(),
        )
        .await;
        self.loading = false;
        match stats {
            Ok(stats) => self.stats = Some(stats),
            Err(_) => notifications.error("Failed to load stats"),
        }
        match trends {
            Ok(trends) => self.trends = trends,
            Err(_) => notifications.error("Failed to load trends"),
        }
        match recent_workouts {
            Ok(recent_workouts) => self.recent_workouts = recent_workouts,
            Err(_) => notifications.error("Failed to load recent workouts"),
        }
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}
