//! `.esqproj` project file: the whole workspace as pretty JSON.

use super::{ExportFile, to_json_pretty};
use crate::error::Result;
use crate::model::types::Workspace;

pub const PROJECT_EXTENSION: &str = "esqproj";

pub fn project_file(workspace: &Workspace) -> Result<ExportFile> {
    Ok(ExportFile {
        name: format!("{}.{}", workspace.name, PROJECT_EXTENSION),
        mime: "application/json".into(),
        content: to_json_pretty("workspace", workspace)?,
    })
}
