//! Scheduling and progress analytics for Gantt-planned quoting projects.
//!
//! The crate models one planning workspace per quote — tasks with planned and
//! actual windows plus finish-to-start dependency edges — and derives the
//! figures the surrounding application charts and bills against: per-task
//! durations, a duration-weighted project completion percentage ("Avance
//! total"), and daily or weekly planned-vs-actual cumulative S-Curve series.
//!
//! Everything is a pure pass over in-memory data: the persistence layer
//! hydrates a [`ProjectWorkspace`], analytics recompute deterministically on
//! every call, and the read side never fails — missing dates, zero total
//! weight, or an empty task list resolve to zeros and empty series so
//! consumers can render a "no data" state. Validation errors only exist on
//! the write path, when a dependency edge is created.

pub mod analytics;
pub mod error;
pub mod io;
pub mod model;
pub mod validate;
pub mod workspace;

pub use analytics::{
    daily_series, duration_days, planned_duration, weekly_series, weighted_progress, CurvePoint,
    Weighting,
};
pub use error::{DependencyError, IoError};
pub use model::{DependencyKind, GanttDependency, GanttProject, GanttTask};
pub use validate::validate_dependency;
pub use workspace::{NewTask, ProjectWorkspace, TaskPatch};
