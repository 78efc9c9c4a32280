//! Entity model: project-file JSON → Rust types + graph construction.

pub mod graph;
pub mod types;

pub use graph::DecisionGraph;
pub use types::*;

use crate::error::{Error, Result};

/// Deserialize a project file (`.esqproj` JSON) into a `Workspace`.
pub fn parse(json: &str) -> Result<Workspace> {
    let workspace = serde_json::from_str::<Workspace>(json).map_err(|e| {
        tracing::debug!(error = %e, "workspace JSON rejected");
        Error::Parse(e)
    })?;

    if workspace.version != SUPPORTED_VERSION {
        return Err(Error::UnsupportedVersion {
            found: workspace.version,
            expected: SUPPORTED_VERSION,
        });
    }

    Ok(workspace)
}

