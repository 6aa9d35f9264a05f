use chrono::NaiveDate;

use crate::model::GanttTask;

/// Number of days spanned by an optional date pair.
///
/// Day counting is exclusive: `end - start`, so a window starting and ending
/// on the same date has duration zero. Every weighted computation in this
/// crate reuses this convention, so duration figures and curve buckets never
/// disagree.
///
/// Missing dates and inverted ranges (end before start) both yield `0`. This
/// is a derived display value, not a validated write path, so bad data is
/// clamped rather than rejected.
pub fn duration_days(start: Option<NaiveDate>, end: Option<NaiveDate>) -> i64 {
    match (start, end) {
        (Some(start), Some(end)) => (end - start).num_days().max(0),
        _ => 0,
    }
}

/// Planned duration of a task in days.
pub fn planned_duration(task: &GanttTask) -> i64 {
    duration_days(task.start_plan, task.end_plan)
}
