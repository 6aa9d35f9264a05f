use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::analytics::{daily_series, weekly_series, weighted_progress, CurvePoint, Weighting};
use crate::error::DependencyError;
use crate::model::{GanttDependency, GanttProject, GanttTask};
use crate::validate::validate_dependency;

/// Fields accepted when creating a task.
///
/// `wbs_order` is auto-assigned (max existing + 1) when absent.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub name: String,
    pub wbs_order: Option<u32>,
    pub resource: Option<String>,
    pub start_plan: Option<NaiveDate>,
    pub end_plan: Option<NaiveDate>,
    pub progress: f32,
}

impl NewTask {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn planned(name: impl Into<String>, start_plan: NaiveDate, end_plan: NaiveDate) -> Self {
        Self {
            start_plan: Some(start_plan),
            end_plan: Some(end_plan),
            ..Self::named(name)
        }
    }
}

/// Partial task update.
///
/// Outer `None` leaves a field untouched; for the optional fields,
/// `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub wbs_order: Option<u32>,
    pub resource: Option<Option<String>>,
    pub start_plan: Option<Option<NaiveDate>>,
    pub end_plan: Option<Option<NaiveDate>>,
    pub start_actual: Option<Option<NaiveDate>>,
    pub end_actual: Option<Option<NaiveDate>>,
    pub progress: Option<f32>,
}

/// One project's tasks and dependency edges, held in memory.
///
/// This is the aggregate the persistence layer hydrates before any analytics
/// run. Mutations keep the edge set consistent with the task set (removing a
/// task cascades to its edges), and new edges pass
/// [`validate_dependency`] before they are stored. Tasks are kept in WBS
/// display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectWorkspace {
    pub project: GanttProject,
    tasks: Vec<GanttTask>,
    dependencies: Vec<GanttDependency>,
}

impl ProjectWorkspace {
    pub fn new(project: GanttProject) -> Self {
        Self {
            project,
            tasks: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    pub fn tasks(&self) -> &[GanttTask] {
        &self.tasks
    }

    pub fn dependencies(&self) -> &[GanttDependency] {
        &self.dependencies
    }

    pub fn task(&self, id: Uuid) -> Option<&GanttTask> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Create a task, auto-assigning the next WBS order when none is given.
    /// Returns the id of the new task.
    pub fn add_task(&mut self, new: NewTask) -> Uuid {
        let wbs_order = new.wbs_order.unwrap_or_else(|| self.next_wbs_order());
        let mut task = GanttTask::new(self.project.id, new.name, wbs_order);
        task.resource = new.resource;
        task.start_plan = new.start_plan;
        task.end_plan = new.end_plan;
        task.progress = new.progress;
        let id = task.id;
        self.tasks.push(task);
        self.tasks.sort_by_key(|t| t.wbs_order);
        debug!(task = %id, wbs_order, "task added");
        id
    }

    fn next_wbs_order(&self) -> u32 {
        self.tasks.iter().map(|t| t.wbs_order).max().map_or(1, |n| n + 1)
    }

    /// Apply a partial update. Returns `false` when the task does not exist.
    pub fn patch_task(&mut self, id: Uuid, patch: TaskPatch) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        if let Some(name) = patch.name {
            task.name = name;
        }
        if let Some(wbs_order) = patch.wbs_order {
            task.wbs_order = wbs_order;
        }
        if let Some(resource) = patch.resource {
            task.resource = resource;
        }
        if let Some(start_plan) = patch.start_plan {
            task.start_plan = start_plan;
        }
        if let Some(end_plan) = patch.end_plan {
            task.end_plan = end_plan;
        }
        if let Some(start_actual) = patch.start_actual {
            task.start_actual = start_actual;
        }
        if let Some(end_actual) = patch.end_actual {
            task.end_actual = end_actual;
        }
        if let Some(progress) = patch.progress {
            task.progress = progress;
        }
        self.tasks.sort_by_key(|t| t.wbs_order);
        debug!(task = %id, "task patched");
        true
    }

    /// Remove a task and every edge referencing it.
    /// Returns `false` when the task does not exist.
    pub fn remove_task(&mut self, id: Uuid) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return false;
        }
        self.dependencies
            .retain(|d| d.predecessor != id && d.successor != id);
        debug!(task = %id, "task removed");
        true
    }

    /// Link two tasks finish-to-start. The edge is validated first; nothing
    /// is written on rejection. Returns the id of the new edge.
    pub fn link(
        &mut self,
        predecessor: Uuid,
        successor: Uuid,
        lag_days: i32,
    ) -> Result<Uuid, DependencyError> {
        validate_dependency(&self.tasks, &self.dependencies, predecessor, successor)?;
        let dep = GanttDependency::finish_to_start(self.project.id, predecessor, successor, lag_days);
        let id = dep.id;
        self.dependencies.push(dep);
        debug!(dependency = %id, %predecessor, %successor, lag_days, "tasks linked");
        Ok(id)
    }

    /// Remove a dependency edge. Returns `false` when it does not exist.
    pub fn unlink(&mut self, id: Uuid) -> bool {
        let before = self.dependencies.len();
        self.dependencies.retain(|d| d.id != id);
        self.dependencies.len() != before
    }

    /// Project-level completion percentage under the given weighting.
    pub fn progress(&self, weighting: Weighting) -> f64 {
        weighted_progress(&self.tasks, weighting)
    }

    /// Daily planned-vs-actual S-Curve series.
    pub fn daily_series(&self, as_of: NaiveDate) -> Vec<CurvePoint> {
        daily_series(&self.tasks, as_of)
    }

    /// Weekly planned-vs-actual S-Curve series.
    pub fn weekly_series(&self, as_of: NaiveDate) -> Vec<CurvePoint> {
        weekly_series(&self.tasks, as_of)
    }
}
