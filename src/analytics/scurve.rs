use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::GanttTask;

use super::duration::duration_days;

/// One bucket of the planned-vs-actual cumulative progress series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub date: NaiveDate,
    /// Cumulative fraction of total planned work due by this date, 0–100.
    pub planned_pct: f64,
    /// Cumulative fraction of total planned work done by this date, 0–100.
    pub actual_pct: f64,
}

/// A task that can be placed on the timeline: both planned dates present and
/// the range not inverted.
struct Plotted {
    start: NaiveDate,
    end: NaiveDate,
    weight: f64,
    progress: f64,
}

fn plottable(tasks: &[GanttTask]) -> Vec<Plotted> {
    tasks
        .iter()
        .filter_map(|task| {
            let start = task.start_plan?;
            let end = task.end_plan?;
            if end < start {
                return None;
            }
            Some(Plotted {
                start,
                end,
                weight: duration_days(Some(start), Some(end)) as f64,
                // Out-of-range stored progress would make a cumulative curve
                // regress; clamp per task, the stored value is left alone.
                progress: f64::from(task.progress).clamp(0.0, 100.0),
            })
        })
        .collect()
}

/// Fraction of the task's planned window elapsed by `date`, clamped to [0, 1].
fn elapsed_fraction(task: &Plotted, date: NaiveDate) -> f64 {
    if task.weight <= 0.0 {
        return if date >= task.end { 1.0 } else { 0.0 };
    }
    let elapsed = (date - task.start).num_days() as f64;
    (elapsed / task.weight).clamp(0.0, 1.0)
}

/// Build the daily planned-vs-actual cumulative series across the project
/// window.
///
/// The window runs from the earliest `start_plan` to the latest `end_plan`
/// over tasks carrying both dates; tasks without a usable date pair cannot be
/// placed on a timeline and are left out of the curve entirely (they still
/// count toward [`weighted_progress`] — the two computations are deliberately
/// decoupled). An empty result means "not enough scheduled data to chart",
/// never a failure.
///
/// The planned curve assumes linear progress within each task's window, so it
/// is non-decreasing and ends at 100. The actual curve is an approximation:
/// only a current progress snapshot is stored per task (there is no history
/// log), so before `as_of` the snapshot is prorated along the task's planned
/// window and from `as_of` onward it is held flat. Callers charting past
/// dates should treat the actual side as synthesized, not recorded.
///
/// Every day of the window appears exactly once, in ascending order.
///
/// [`weighted_progress`]: super::progress::weighted_progress
pub fn daily_series(tasks: &[GanttTask], as_of: NaiveDate) -> Vec<CurvePoint> {
    let plotted = plottable(tasks);
    let total_weight: f64 = plotted.iter().map(|t| t.weight).sum();
    if total_weight <= 0.0 {
        return Vec::new();
    }

    // plottable() guarantees at least one dated task here.
    let window_start = plotted.iter().map(|t| t.start).min().unwrap_or(as_of);
    let window_end = plotted.iter().map(|t| t.end).max().unwrap_or(as_of);

    let mut points = Vec::with_capacity((window_end - window_start).num_days() as usize + 1);
    let mut date = window_start;
    while date <= window_end {
        let mut planned = 0.0;
        let mut actual = 0.0;
        for task in &plotted {
            let fraction = elapsed_fraction(task, date);
            planned += task.weight * fraction;
            let snapshot = task.weight * task.progress / 100.0;
            actual += if date >= as_of {
                snapshot
            } else {
                snapshot * fraction
            };
        }
        points.push(CurvePoint {
            date,
            planned_pct: (planned / total_weight * 100.0).clamp(0.0, 100.0),
            actual_pct: (actual / total_weight * 100.0).clamp(0.0, 100.0),
        });
        date += Duration::days(1);
    }

    debug!(
        days = points.len(),
        %window_start,
        %window_end,
        "built daily S-Curve series"
    );
    points
}

/// Build the weekly planned-vs-actual series.
///
/// Daily buckets are grouped by ISO week and each week reports the last daily
/// value within it, dated at that day — the weekly curve is a subsample of
/// the daily one and can never disagree with it.
pub fn weekly_series(tasks: &[GanttTask], as_of: NaiveDate) -> Vec<CurvePoint> {
    let mut points: Vec<CurvePoint> = Vec::new();
    for point in daily_series(tasks, as_of) {
        match points.last_mut() {
            Some(last) if last.date.iso_week() == point.date.iso_week() => *last = point,
            _ => points.push(point),
        }
    }
    points
}

/// Daily series evaluated as of the local date.
pub fn daily_series_today(tasks: &[GanttTask]) -> Vec<CurvePoint> {
    daily_series(tasks, chrono::Local::now().date_naive())
}

/// Weekly series evaluated as of the local date.
pub fn weekly_series_today(tasks: &[GanttTask]) -> Vec<CurvePoint> {
    weekly_series(tasks, chrono::Local::now().date_naive())
}
