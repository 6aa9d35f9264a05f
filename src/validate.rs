use std::collections::{HashSet, VecDeque};

use uuid::Uuid;

use crate::error::DependencyError;
use crate::model::{GanttDependency, GanttTask};

/// Validate a prospective finish-to-start edge before it is stored.
///
/// Rejects self-references, endpoints that do not resolve within `tasks`, and
/// edges that would close a cycle over the existing edge set. Any signed lag
/// is acceptable (lag is advisory metadata, so it is not an input here), and
/// this function is pure validation — the caller decides whether to persist.
///
/// Edges in `dependencies` that reference tasks no longer present are skipped
/// during the cycle walk rather than treated as fatal; a stale edge left
/// behind by a task deletion must never block new links.
pub fn validate_dependency(
    tasks: &[GanttTask],
    dependencies: &[GanttDependency],
    predecessor: Uuid,
    successor: Uuid,
) -> Result<(), DependencyError> {
    if predecessor == successor {
        return Err(DependencyError::SelfReference);
    }

    let known: HashSet<Uuid> = tasks.iter().map(|t| t.id).collect();
    if !known.contains(&predecessor) {
        return Err(DependencyError::UnknownTask(predecessor));
    }
    if !known.contains(&successor) {
        return Err(DependencyError::UnknownTask(successor));
    }

    // The new edge runs predecessor -> successor, so it closes a cycle
    // exactly when the predecessor is already reachable from the successor.
    if reaches(dependencies, &known, successor, predecessor) {
        return Err(DependencyError::WouldCycle);
    }

    Ok(())
}

/// BFS over the existing edges: is `target` reachable from `from`?
fn reaches(
    dependencies: &[GanttDependency],
    known: &HashSet<Uuid>,
    from: Uuid,
    target: Uuid,
) -> bool {
    let mut queue = VecDeque::from([from]);
    let mut seen = HashSet::from([from]);
    while let Some(current) = queue.pop_front() {
        if current == target {
            return true;
        }
        for dep in dependencies {
            if dep.predecessor != current || !known.contains(&dep.successor) {
                continue;
            }
            if seen.insert(dep.successor) {
                queue.push_back(dep.successor);
            }
        }
    }
    false
}
