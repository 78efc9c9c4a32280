//! Shared issue vocabulary used by every workspace check.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueKind {
    /// Unsafe to export or execute.
    Error,
    /// Advisory; does not block downstream use.
    Warning,
}

impl std::fmt::Display for IssueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueKind::Error => write!(f, "error"),
            IssueKind::Warning => write!(f, "warning"),
        }
    }
}

/// Stable issue taxonomy. The string form is the contract callers filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IssueCode {
    NoStart,
    DupNodeId,
    DupEdgeId,
    EdgeRef,
    NoOut,
    Orphan,
    VtSlug,
    ConflictRule,
    NodeQuestionUnlinked,
    NodeQuestionMissing,
    NodeVtMissing,
    CondQuestionMissing,
    ActionVtMissing,
    ActionVtFromMissing,
    ActionVtToMissing,
    ActionPoolMissing,
    ActionNodeMissing,
    ActionNoopEngine,
}

impl IssueCode {
    pub const ALL: [IssueCode; 18] = [
        IssueCode::NoStart,
        IssueCode::DupNodeId,
        IssueCode::DupEdgeId,
        IssueCode::EdgeRef,
        IssueCode::NoOut,
        IssueCode::Orphan,
        IssueCode::VtSlug,
        IssueCode::ConflictRule,
        IssueCode::NodeQuestionUnlinked,
        IssueCode::NodeQuestionMissing,
        IssueCode::NodeVtMissing,
        IssueCode::CondQuestionMissing,
        IssueCode::ActionVtMissing,
        IssueCode::ActionVtFromMissing,
        IssueCode::ActionVtToMissing,
        IssueCode::ActionPoolMissing,
        IssueCode::ActionNodeMissing,
        IssueCode::ActionNoopEngine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::NoStart => "NO_START",
            IssueCode::DupNodeId => "DUP_NODE_ID",
            IssueCode::DupEdgeId => "DUP_EDGE_ID",
            IssueCode::EdgeRef => "EDGE_REF",
            IssueCode::NoOut => "NO_OUT",
            IssueCode::Orphan => "ORPHAN",
            IssueCode::VtSlug => "VT_SLUG",
            IssueCode::ConflictRule => "CONFLICT_RULE",
            IssueCode::NodeQuestionUnlinked => "NODE_QUESTION_UNLINKED",
            IssueCode::NodeQuestionMissing => "NODE_QUESTION_MISSING",
            IssueCode::NodeVtMissing => "NODE_VT_MISSING",
            IssueCode::CondQuestionMissing => "COND_QUESTION_MISSING",
            IssueCode::ActionVtMissing => "ACTION_VT_MISSING",
            IssueCode::ActionVtFromMissing => "ACTION_VT_FROM_MISSING",
            IssueCode::ActionVtToMissing => "ACTION_VT_TO_MISSING",
            IssueCode::ActionPoolMissing => "ACTION_POOL_MISSING",
            IssueCode::ActionNodeMissing => "ACTION_NODE_MISSING",
            IssueCode::ActionNoopEngine => "ACTION_NOOP_ENGINE",
        }
    }

    /// Severity is fixed per code.
    pub fn kind(&self) -> IssueKind {
        match self {
            IssueCode::Orphan
            | IssueCode::VtSlug
            | IssueCode::NodeQuestionUnlinked
            | IssueCode::ActionVtFromMissing
            | IssueCode::ActionNoopEngine => IssueKind::Warning,
            IssueCode::NoStart
            | IssueCode::DupNodeId
            | IssueCode::DupEdgeId
            | IssueCode::EdgeRef
            | IssueCode::NoOut
            | IssueCode::ConflictRule
            | IssueCode::NodeQuestionMissing
            | IssueCode::NodeVtMissing
            | IssueCode::CondQuestionMissing
            | IssueCode::ActionVtMissing
            | IssueCode::ActionVtToMissing
            | IssueCode::ActionPoolMissing
            | IssueCode::ActionNodeMissing => IssueKind::Error,
        }
    }
}

impl std::fmt::Display for IssueCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<str> for IssueCode {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for IssueCode {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

/// The entity an issue points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum IssueData {
    Node { node_id: String },
    Edge { edge_id: String, from: String, to: String },
    Rule { edge_id: String, rule_id: String },
    VisitType { visit_type_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub code: IssueCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<IssueData>,
}

impl Issue {
    pub fn new(code: IssueCode, message: impl Into<String>, data: Option<IssueData>) -> Self {
        Issue {
            kind: code.kind(),
            code,
            message: message.into(),
            data,
        }
    }

    pub fn node(code: IssueCode, message: impl Into<String>, node_id: &str) -> Self {
        Issue::new(
            code,
            message,
            Some(IssueData::Node {
                node_id: node_id.to_string(),
            }),
        )
    }

    pub fn rule(code: IssueCode, message: impl Into<String>, edge_id: &str, rule_id: &str) -> Self {
        Issue::new(
            code,
            message,
            Some(IssueData::Rule {
                edge_id: edge_id.to_string(),
                rule_id: rule_id.to_string(),
            }),
        )
    }

    pub fn is_error(&self) -> bool {
        self.kind == IssueKind::Error
    }

    pub fn is_warning(&self) -> bool {
        self.kind == IssueKind::Warning
    }

    /// Node id carried in `data`, if the issue points at a node.
    pub fn node_id(&self) -> Option<&str> {
        match &self.data {
            Some(IssueData::Node { node_id }) => Some(node_id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}:{}] {}", self.kind, self.code, self.message)
    }
}

/// Ordered view over one `validate` result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// True when nothing blocks export or execution.
    pub fn is_exportable(&self) -> bool {
        self.error_count() == 0
    }

    pub fn has_code(&self, code: IssueCode) -> bool {
        self.issues.iter().any(|i| i.code == code)
    }

    pub fn with_code(&self, code: IssueCode) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |i| i.code == code)
    }
}

impl From<Vec<Issue>> for ValidationReport {
    fn from(issues: Vec<Issue>) -> Self {
        ValidationReport { issues }
    }
}
