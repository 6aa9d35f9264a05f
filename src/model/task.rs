use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unit of work within a Gantt project.
///
/// All four dates are optional: a task may be registered before anyone
/// schedules it, and actual dates are only filled in as work happens.
/// A task with no planned window is "unscheduled" — it has zero duration
/// and cannot be placed on the S-Curve timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttTask {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    /// Work-Breakdown-Structure sequence number: the stable display order
    /// of the task within its project.
    pub wbs_order: u32,
    /// Optional label of the assigned resource (person, crew, machine).
    pub resource: Option<String>,
    pub start_plan: Option<NaiveDate>,
    pub end_plan: Option<NaiveDate>,
    pub start_actual: Option<NaiveDate>,
    pub end_actual: Option<NaiveDate>,
    /// Completion percentage from 0.0 to 100.0.
    pub progress: f32,
}

impl GanttTask {
    /// Create a new unscheduled task with sensible defaults.
    pub fn new(project_id: Uuid, name: impl Into<String>, wbs_order: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            name: name.into(),
            wbs_order,
            resource: None,
            start_plan: None,
            end_plan: None,
            start_actual: None,
            end_actual: None,
            progress: 0.0,
        }
    }

    /// Create a task with a planned window.
    pub fn scheduled(
        project_id: Uuid,
        name: impl Into<String>,
        wbs_order: u32,
        start_plan: NaiveDate,
        end_plan: NaiveDate,
    ) -> Self {
        Self {
            start_plan: Some(start_plan),
            end_plan: Some(end_plan),
            ..Self::new(project_id, name, wbs_order)
        }
    }
}
