use std::path::Path;

use crate::error::IoError;
use crate::workspace::ProjectWorkspace;

/// Save a workspace (project, tasks, dependencies) to a JSON file.
pub fn save_workspace(workspace: &ProjectWorkspace, path: &Path) -> Result<(), IoError> {
    let json = serde_json::to_string_pretty(workspace)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Load a workspace from a JSON file.
pub fn load_workspace(path: &Path) -> Result<ProjectWorkspace, IoError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
