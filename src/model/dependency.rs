use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Relationship type between two tasks.
///
/// Only finish-to-start scheduling is modeled; the enum exists so the wire
/// format (`"FS"`) stays open for the other classic link types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DependencyKind {
    #[default]
    #[serde(rename = "FS")]
    FinishToStart,
}

/// A directed dependency edge between two tasks in the same project.
///
/// Lag is advisory metadata: it is stored and round-tripped but never used to
/// shift the successor's dates. Schedule propagation is intentionally not part
/// of this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttDependency {
    pub id: Uuid,
    pub project_id: Uuid,
    pub predecessor: Uuid,
    pub successor: Uuid,
    pub kind: DependencyKind,
    /// Signed day offset: positive delays the successor past the
    /// predecessor's finish, negative allows overlap.
    pub lag_days: i32,
}

impl GanttDependency {
    /// Create a finish-to-start edge with the given lag.
    pub fn finish_to_start(
        project_id: Uuid,
        predecessor: Uuid,
        successor: Uuid,
        lag_days: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            predecessor,
            successor,
            kind: DependencyKind::FinishToStart,
            lag_days,
        }
    }
}
