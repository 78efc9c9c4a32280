use esqgraph::model::*;
use esqgraph::validate::{Issue, IssueCode};

// =============================================================================
// Workspace builders
// =============================================================================

/// Minimal valid workspace: Start `n1` → End `n2`, nothing else.
pub fn base_workspace() -> Workspace {
    let mut ws = Workspace::new("ws-test", "Test Workspace");
    ws.nodes = vec![node("n1", NodeKind::Start), node("n2", NodeKind::End)];
    ws.edges = vec![edge("e1", "n1", "n2")];
    ws
}

/// Workspace with only the given nodes and edges.
pub fn graph_workspace(nodes: Vec<Node>, edges: Vec<Edge>) -> Workspace {
    let mut ws = Workspace::new("ws-test", "Test Workspace");
    ws.nodes = nodes;
    ws.edges = edges;
    ws
}

/// Base workspace plus one catalog entry of each kind:
/// question `q1`, visit type `vt1`, pool `p1`.
pub fn catalog_workspace() -> Workspace {
    let mut ws = base_workspace();
    ws.questions = vec![question("q1", QuestionType::YesNo)];
    ws.visit_types = vec![visit_type("vt1", "MRI_BRAIN")];
    ws.pools = vec![pool("p1", "MRI_3T")];
    ws
}

/// Attach rules to the base workspace's `n1 → n2` edge.
pub fn with_edge_rules(mut ws: Workspace, rules: Vec<Rule>) -> Workspace {
    ws.edges[0].conditions = rules;
    ws
}

// =============================================================================
// Entity builders
// =============================================================================

pub fn node(id: &str, kind: NodeKind) -> Node {
    Node::new(id, kind)
}

pub fn question_node(id: &str, question_id: Option<&str>) -> Node {
    let mut n = Node::new(id, NodeKind::Question);
    n.question_id = question_id.map(str::to_string);
    n
}

pub fn visit_type_node(id: &str, visit_type_id: Option<&str>) -> Node {
    let mut n = Node::new(id, NodeKind::VisitType);
    n.visit_type_id = visit_type_id.map(str::to_string);
    n
}

pub fn edge(id: &str, from: &str, to: &str) -> Edge {
    Edge::new(id, from, to)
}

pub fn question(id: &str, question_type: QuestionType) -> Question {
    Question {
        id: id.into(),
        name: id.into(),
        prompt: format!("Prompt for {id}"),
        question_type,
        options: vec![],
        validation: None,
        display_hints: None,
        folder_id: None,
    }
}

pub fn visit_type(id: &str, name: &str) -> VisitType {
    VisitType {
        id: id.into(),
        name: name.into(),
        category: None,
        code: None,
        notes: None,
    }
}

pub fn pool(id: &str, name: &str) -> SchedulingPool {
    SchedulingPool {
        id: id.into(),
        name: name.into(),
        category: None,
        notes: None,
    }
}

pub fn cond(question_id: &str, comparator: Comparator, value: &str) -> Condition {
    Condition {
        question_id: question_id.into(),
        comparator,
        value: Some(AnswerValue::Text(value.into())),
    }
}

pub fn rule(id: &str, action: RuleAction) -> Rule {
    Rule::new(id, action)
}

pub fn rule_all(id: &str, all: Vec<Condition>, action: RuleAction) -> Rule {
    let mut r = Rule::new(id, action);
    r.all = Some(all);
    r
}

pub fn set_vt(id: &str) -> RuleAction {
    RuleAction::SetVisitType {
        visit_type_id: id.into(),
    }
}

// =============================================================================
// Assertions
// =============================================================================

pub fn codes(issues: &[Issue]) -> Vec<&'static str> {
    issues.iter().map(|i| i.code.as_str()).collect()
}

pub fn count_code(issues: &[Issue], code: IssueCode) -> usize {
    issues.iter().filter(|i| i.code == code).count()
}

pub fn assert_has_issue(issues: &[Issue], code: IssueCode) {
    assert!(
        issues.iter().any(|i| i.code == code),
        "Expected issue {}, got: {:?}",
        code,
        codes(issues)
    );
}

pub fn assert_no_issue(issues: &[Issue], code: IssueCode) {
    assert!(
        !issues.iter().any(|i| i.code == code),
        "Did not expect issue {}, but got: {:?}",
        code,
        issues
    );
}

/// One issue per line, in `Display` form.
pub fn render(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
