pub mod dependency;
pub mod project;
pub mod task;

pub use dependency::{DependencyKind, GanttDependency};
pub use project::GanttProject;
pub use task::GanttTask;
