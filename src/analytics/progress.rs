use crate::model::GanttTask;

use super::duration::planned_duration;

/// How much each task counts toward the project-level progress figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weighting {
    /// Longer tasks count proportionally more (the default).
    #[default]
    Duration,
    /// Every task counts the same regardless of its planned window.
    Equal,
}

impl Weighting {
    /// Weight of a single task under this strategy.
    pub fn weight(self, task: &GanttTask) -> f64 {
        match self {
            Weighting::Duration => planned_duration(task) as f64,
            Weighting::Equal => 1.0,
        }
    }
}

/// Project-level completion percentage, the "Avance total" figure.
///
/// Computed as `sum(weight * progress) / sum(weight)` over tasks with a
/// positive weight; under [`Weighting::Duration`] unscheduled and zero-length
/// tasks carry no weight and drop out of the sum. When no task carries any
/// weight the figure falls back to the unweighted mean over all tasks, and an
/// empty slice yields `0.0`.
///
/// The result is clamped to `[0, 100]` as a defense against out-of-range
/// stored progress values; the stored values themselves are left alone.
pub fn weighted_progress(tasks: &[GanttTask], weighting: Weighting) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }

    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;
    for task in tasks {
        let weight = weighting.weight(task);
        if weight > 0.0 {
            weighted_sum += weight * f64::from(task.progress);
            total_weight += weight;
        }
    }

    let pct = if total_weight > 0.0 {
        weighted_sum / total_weight
    } else {
        tasks.iter().map(|t| f64::from(t.progress)).sum::<f64>() / tasks.len() as f64
    };
    pct.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(start: (i32, u32, u32), end: (i32, u32, u32), progress: f32) -> GanttTask {
        let mut t = GanttTask::scheduled(
            Uuid::new_v4(),
            "t",
            1,
            date(start.0, start.1, start.2),
            date(end.0, end.1, end.2),
        );
        t.progress = progress;
        t
    }

    #[test]
    fn empty_project_is_zero() {
        assert_eq!(weighted_progress(&[], Weighting::Duration), 0.0);
    }

    #[test]
    fn longer_tasks_count_more() {
        // 9-day task done, 15-day task untouched: (9*100 + 15*0) / 24
        let tasks = vec![
            task((2024, 1, 1), (2024, 1, 10), 100.0),
            task((2024, 1, 5), (2024, 1, 20), 0.0),
        ];
        assert_eq!(weighted_progress(&tasks, Weighting::Duration), 37.5);
    }

    #[test]
    fn identical_durations_degenerate_to_mean() {
        let tasks = vec![
            task((2024, 1, 1), (2024, 1, 11), 20.0),
            task((2024, 2, 1), (2024, 2, 11), 60.0),
            task((2024, 3, 1), (2024, 3, 11), 100.0),
        ];
        assert_eq!(weighted_progress(&tasks, Weighting::Duration), 60.0);
    }

    #[test]
    fn unscheduled_tasks_fall_back_to_plain_mean() {
        let project = Uuid::new_v4();
        let mut a = GanttTask::new(project, "a", 1);
        a.progress = 30.0;
        // Start without end: still weightless.
        let mut b = GanttTask::new(project, "b", 2);
        b.start_plan = Some(date(2024, 1, 1));
        b.progress = 70.0;
        assert_eq!(weighted_progress(&[a, b], Weighting::Duration), 50.0);
    }

    #[test]
    fn weightless_tasks_do_not_dilute_weighted_sum() {
        let mut unscheduled = GanttTask::new(Uuid::new_v4(), "u", 3);
        unscheduled.progress = 0.0;
        let tasks = vec![task((2024, 1, 1), (2024, 1, 11), 80.0), unscheduled];
        assert_eq!(weighted_progress(&tasks, Weighting::Duration), 80.0);
    }

    #[test]
    fn result_is_clamped_against_bad_input() {
        let over = vec![task((2024, 1, 1), (2024, 1, 10), 150.0)];
        assert_eq!(weighted_progress(&over, Weighting::Duration), 100.0);

        let under = vec![task((2024, 1, 1), (2024, 1, 10), -25.0)];
        assert_eq!(weighted_progress(&under, Weighting::Duration), 0.0);
    }

    #[test]
    fn equal_weighting_ignores_durations() {
        let tasks = vec![
            task((2024, 1, 1), (2024, 1, 2), 100.0),
            task((2024, 1, 1), (2024, 12, 31), 0.0),
        ];
        assert_eq!(weighted_progress(&tasks, Weighting::Equal), 50.0);
    }
}
