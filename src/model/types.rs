//! Rust types mirroring the editor's workspace schema.
//!
//! These types are the serde target for `.esqproj` project files.
//! Field names follow the editor JSON (camelCase); optional fields are
//! omitted on re-serialization when absent.

use serde::{Deserialize, Serialize};

/// The only project-file version this crate reads.
pub const SUPPORTED_VERSION: &str = "1.0";

// =============================================================================
// TOP-LEVEL WORKSPACE
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub version: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub questions: Vec<Question>,
    pub visit_types: Vec<VisitType>,
    pub pools: Vec<SchedulingPool>,
    pub rules: Vec<Rule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library: Option<Library>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ai_notes: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub questionnaires: Vec<Questionnaire>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub folders: Vec<LibraryFolder>,
}

impl Workspace {
    /// An empty workspace with the supported version and no entities.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Workspace {
            id: id.into(),
            name: name.into(),
            version: SUPPORTED_VERSION.into(),
            nodes: Vec::new(),
            edges: Vec::new(),
            questions: Vec::new(),
            visit_types: Vec::new(),
            pools: Vec::new(),
            rules: Vec::new(),
            library: None,
            ai_notes: Vec::new(),
            created_at: String::new(),
            updated_at: String::new(),
            questionnaires: Vec::new(),
            folders: Vec::new(),
        }
    }

    /// First node of kind `Start`, if any.
    pub fn start_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Start)
    }

    /// Iterate `(edge, rule)` pairs for every rule attached to an edge.
    pub fn edge_rules(&self) -> impl Iterator<Item = (&Edge, &Rule)> {
        self.edges
            .iter()
            .flat_map(|e| e.conditions.iter().map(move |r| (e, r)))
    }
}

/// Shared catalog the editor copies entities from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub visit_types: Vec<VisitType>,
    #[serde(default)]
    pub pools: Vec<SchedulingPool>,
}

// =============================================================================
// GRAPH
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Start,
    Question,
    Gate,
    VisitType,
    Pool,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    /// Meaningful when `kind == Question`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    /// Meaningful when `kind == VisitType`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_type_id: Option<String>,
    /// Meaningful when `kind == Pool`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
    #[serde(default)]
    pub position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<NodeMeta>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Node {
            id: id.into(),
            kind,
            question_id: None,
            visit_type_id: None,
            pool_id: None,
            position: Position::default(),
            meta: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeShape {
    Rect,
    Pill,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NodeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<NodeShape>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Simple per-edge guard, AND-combined.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edge_conditions: Vec<Condition>,
    /// Full rule objects attached to the edge. Absent and empty are equivalent.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Rule>,
}

impl Edge {
    pub fn new(id: impl Into<String>, from: impl Into<String>, to: impl Into<String>) -> Self {
        Edge {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            label: None,
            edge_conditions: Vec::new(),
            conditions: Vec::new(),
        }
    }
}

// =============================================================================
// QUESTIONS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionType {
    YesNo,
    SingleSelect,
    MultiSelect,
    FreeText,
    Number,
    Date,
    Time,
    DateTime,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::YesNo => "YesNo",
            QuestionType::SingleSelect => "SingleSelect",
            QuestionType::MultiSelect => "MultiSelect",
            QuestionType::FreeText => "FreeText",
            QuestionType::Number => "Number",
            QuestionType::Date => "Date",
            QuestionType::Time => "Time",
            QuestionType::DateTime => "DateTime",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub name: String,
    pub prompt: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<QuestionOption>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<QuestionValidation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_hints: Option<DisplayHints>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

impl Question {
    pub fn is_required(&self) -> bool {
        self.validation
            .as_ref()
            .and_then(|v| v.required)
            .unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct QuestionValidation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DisplayHints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

// =============================================================================
// OUTCOMES
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitType {
    pub id: String,
    /// Expected to be an upper-case slug, e.g. `MRI_BRAIN_WWO`.
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulingPool {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// =============================================================================
// RULES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Comparator {
    Eq,
    Neq,
    Gt,
    Lt,
    Gte,
    Lte,
    Contains,
    In,
    Notin,
    IsEmpty,
    IsNotEmpty,
}

/// An answer literal a condition compares against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<String>),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    pub question_id: String,
    pub comparator: Comparator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<AnswerValue>,
}

/// Outcome a rule assigns. One variant per action kind, each with only the
/// identifiers that kind targets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RuleAction {
    ShowNode {
        #[serde(rename = "nodeId")]
        node_id: String,
    },
    SkipNode {
        #[serde(rename = "nodeId")]
        node_id: String,
    },
    SetVisitType {
        #[serde(rename = "visitTypeId")]
        visit_type_id: String,
    },
    FlipVisitType {
        /// Only applies when the current visit type matches; advisory.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        from: Option<String>,
        to: String,
    },
    SetSchedulingPool {
        #[serde(rename = "poolId")]
        pool_id: String,
    },
}

impl RuleAction {
    pub fn type_name(&self) -> &'static str {
        match self {
            RuleAction::ShowNode { .. } => "ShowNode",
            RuleAction::SkipNode { .. } => "SkipNode",
            RuleAction::SetVisitType { .. } => "SetVisitType",
            RuleAction::FlipVisitType { .. } => "FlipVisitType",
            RuleAction::SetSchedulingPool { .. } => "SetSchedulingPool",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub id: String,
    /// AND-combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<Condition>>,
    /// OR-combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any: Option<Vec<Condition>>,
    /// Negated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not: Option<Vec<Condition>>,
    pub action: RuleAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

impl Rule {
    pub fn new(id: impl Into<String>, action: RuleAction) -> Self {
        Rule {
            id: id.into(),
            all: None,
            any: None,
            not: None,
            action,
            note: None,
            folder_id: None,
        }
    }

    pub fn all_conditions(&self) -> &[Condition] {
        self.all.as_deref().unwrap_or_default()
    }

    pub fn any_conditions(&self) -> &[Condition] {
        self.any.as_deref().unwrap_or_default()
    }

    pub fn not_conditions(&self) -> &[Condition] {
        self.not.as_deref().unwrap_or_default()
    }

    /// Every condition in `all`, then `any`, then `not`. Absent lists are empty.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.all_conditions()
            .iter()
            .chain(self.any_conditions())
            .chain(self.not_conditions())
    }
}

// =============================================================================
// LIBRARY ORGANIZATION
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Questionnaire {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered.
    #[serde(default)]
    pub question_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryFolderKind {
    Question,
    Questionnaire,
    Rule,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryFolder {
    pub id: String,
    pub name: String,
    pub kind: LibraryFolderKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}
