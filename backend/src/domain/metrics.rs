//! Calorie metrics for the calorie tracker.
//!
//! Everything here is derived from the activity list on demand; nothing is
//! stored next to the list, so the totals can never drift from it.

use shared::{Activity, ActivityCategory, CalorieChartData, CalorieSummary};

use crate::domain::errors::StoreError;

/// Stateless calculator for calorie totals and category display data
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsCalculator;

impl MetricsCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Partition the activities by category and sum each side
    pub fn calculate_summary(&self, activities: &[Activity]) -> CalorieSummary {
        let calories_consumed = self.calories_consumed(activities);
        let calories_burned = self.calories_burned(activities);

        CalorieSummary {
            calories_consumed,
            calories_burned,
            net_calories: calories_consumed - calories_burned,
        }
    }

    pub fn calories_consumed(&self, activities: &[Activity]) -> i64 {
        self.total_for_category(activities, ActivityCategory::Food)
    }

    pub fn calories_burned(&self, activities: &[Activity]) -> i64 {
        self.total_for_category(activities, ActivityCategory::Exercise)
    }

    pub fn net_calories(&self, activities: &[Activity]) -> i64 {
        self.calories_consumed(activities) - self.calories_burned(activities)
    }

    fn total_for_category(&self, activities: &[Activity], category: ActivityCategory) -> i64 {
        self.activities_in_category(activities, category)
            .map(|activity| i64::from(activity.calories))
            .sum()
    }

    /// Activities belonging to `category`, in list order
    pub fn activities_in_category<'a>(
        &self,
        activities: &'a [Activity],
        category: ActivityCategory,
    ) -> impl Iterator<Item = &'a Activity> {
        activities
            .iter()
            .filter(move |activity| activity.category == category)
    }

    pub fn is_empty(&self, activities: &[Activity]) -> bool {
        activities.is_empty()
    }

    /// Display label for a raw category code
    pub fn category_label(&self, code: u8) -> Result<&'static str, StoreError> {
        ActivityCategory::try_from(code)
            .map(ActivityCategory::label)
            .map_err(|_| StoreError::UnknownCategory(code))
    }

    /// Series values for the consumed vs. burned bar chart
    pub fn chart_data(&self, summary: &CalorieSummary) -> CalorieChartData {
        CalorieChartData {
            consumed: summary.calories_consumed,
            burned: summary.calories_burned,
        }
    }
}
