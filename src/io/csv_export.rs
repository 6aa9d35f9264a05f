use std::path::Path;

use chrono::NaiveDate;

use crate::analytics::{planned_duration, CurvePoint};
use crate::error::IoError;
use crate::model::GanttTask;

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_default()
}

/// Export the task schedule as a semicolon-delimited CSV file.
///
/// Columns: WBS ; Task ; Resource ; Start ; End ; Duration (days) ; Progress %
/// Dates are formatted as DD/MM/YYYY; unscheduled dates are left blank.
/// Returns the number of tasks written.
pub fn export_schedule(tasks: &[GanttTask], path: &Path) -> Result<usize, IoError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record([
        "WBS",
        "Task",
        "Resource",
        "Start",
        "End",
        "Duration (days)",
        "Progress %",
    ])?;

    for task in tasks {
        wtr.write_record([
            task.wbs_order.to_string(),
            task.name.clone(),
            task.resource.clone().unwrap_or_default(),
            format_date(task.start_plan),
            format_date(task.end_plan),
            planned_duration(task).to_string(),
            format!("{:.1}", task.progress),
        ])?;
    }

    wtr.flush()?;
    Ok(tasks.len())
}

/// Export an S-Curve series (daily or weekly) for spreadsheet consumers,
/// payment certificates included.
///
/// Columns: Date ; Planned % ; Actual %
/// Returns the number of points written. An empty series still produces a
/// file with just the header row — "not enough scheduled data" is a valid
/// export, not an error.
pub fn export_series(series: &[CurvePoint], path: &Path) -> Result<usize, IoError> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_path(path)?;

    wtr.write_record(["Date", "Planned %", "Actual %"])?;
    for point in series {
        wtr.write_record([
            point.date.format("%d/%m/%Y").to_string(),
            format!("{:.2}", point.planned_pct),
            format!("{:.2}", point.actual_pct),
        ])?;
    }

    wtr.flush()?;
    Ok(series.len())
}
