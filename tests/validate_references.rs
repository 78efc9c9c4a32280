//! Integration tests for reference, naming, and rule-conflict checks.

#[allow(dead_code)]
mod helpers;

use esqgraph::model::{Comparator, NodeKind, RuleAction};
use esqgraph::validate::{IssueCode, IssueData, IssueKind, validate};
use helpers::*;

/// Catalog workspace with `node` spliced in between Start and End.
fn with_middle_node(node: esqgraph::model::Node) -> esqgraph::model::Workspace {
    let mut ws = catalog_workspace();
    let id = node.id.clone();
    ws.nodes.push(node);
    ws.edges = vec![edge("e1", "n1", &id), edge("e2", &id, "n2")];
    ws
}

// =============================================================================
// Node links
// =============================================================================

#[test]
fn question_node_with_missing_question() {
    let issues = validate(&with_middle_node(question_node("ask", Some("qX"))));
    assert_eq!(codes(&issues), vec!["NODE_QUESTION_MISSING"]);
    assert_eq!(issues[0].node_id(), Some("ask"));
    assert!(issues[0].message.contains("qX"));
}

#[test]
fn question_node_without_link_is_warning() {
    let issues = validate(&with_middle_node(question_node("ask", None)));
    assert_eq!(codes(&issues), vec!["NODE_QUESTION_UNLINKED"]);
    assert_eq!(issues[0].kind, IssueKind::Warning);
}

#[test]
fn question_node_with_empty_link_is_unlinked() {
    let issues = validate(&with_middle_node(question_node("ask", Some(""))));
    assert_eq!(codes(&issues), vec!["NODE_QUESTION_UNLINKED"]);
}

#[test]
fn question_node_with_known_question_is_clean() {
    assert!(validate(&with_middle_node(question_node("ask", Some("q1")))).is_empty());
}

#[test]
fn visit_type_node_with_missing_visit_type() {
    let issues = validate(&with_middle_node(visit_type_node("assign", Some("vtX"))));
    assert_eq!(codes(&issues), vec!["NODE_VT_MISSING"]);
    assert_eq!(issues[0].node_id(), Some("assign"));
}

#[test]
fn visit_type_node_without_link_is_clean() {
    assert!(validate(&with_middle_node(visit_type_node("assign", None))).is_empty());
}

#[test]
fn pool_and_gate_nodes_are_not_link_checked() {
    let mut pool_node = node("p", NodeKind::Pool);
    pool_node.pool_id = Some("nowhere".into());
    assert!(validate(&with_middle_node(pool_node)).is_empty());
    assert!(validate(&with_middle_node(node("g", NodeKind::Gate))).is_empty());
}

#[test]
fn links_on_wrong_kind_are_ignored() {
    let mut gate = node("g", NodeKind::Gate);
    gate.question_id = Some("qX".into());
    gate.visit_type_id = Some("vtX".into());
    assert!(validate(&with_middle_node(gate)).is_empty());
}

// =============================================================================
// Rule conditions
// =============================================================================

#[test]
fn condition_questions_checked_across_all_any_not() {
    let mut r = rule("r1", set_vt("vt1"));
    r.all = Some(vec![cond("qa", Comparator::Gt, "1")]);
    r.any = Some(vec![cond("q1", Comparator::Contains, "x"), cond("qb", Comparator::In, "y")]);
    r.not = Some(vec![cond("qc", Comparator::Lte, "3")]);
    let issues = validate(&with_edge_rules(catalog_workspace(), vec![r]));

    let missing: Vec<_> = issues
        .iter()
        .filter(|i| i.code == IssueCode::CondQuestionMissing)
        .map(|i| i.message.as_str())
        .collect();
    assert_eq!(missing.len(), 3);
    assert!(missing[0].contains("qa"));
    assert!(missing[1].contains("qb"));
    assert!(missing[2].contains("qc"));
    assert_eq!(
        issues[0].data,
        Some(IssueData::Rule {
            edge_id: "e1".into(),
            rule_id: "r1".into(),
        })
    );
}

#[test]
fn rule_without_condition_lists_is_valid() {
    let ws = with_edge_rules(catalog_workspace(), vec![rule("r1", set_vt("vt1"))]);
    assert!(validate(&ws).is_empty());
}

#[test]
fn edge_conditions_are_not_reference_checked() {
    let mut ws = catalog_workspace();
    ws.edges[0].edge_conditions = vec![cond("qX", Comparator::Eq, "a")];
    assert!(validate(&ws).is_empty());
}

#[test]
fn workspace_level_rules_are_not_checked() {
    let mut ws = catalog_workspace();
    ws.rules = vec![rule("orphan-rule", set_vt("vtX"))];
    assert!(validate(&ws).is_empty());
}

// =============================================================================
// Rule actions
// =============================================================================

#[test]
fn set_visit_type_missing() {
    let ws = with_edge_rules(catalog_workspace(), vec![rule("r1", set_vt("vtX"))]);
    assert_eq!(codes(&validate(&ws)), vec!["ACTION_VT_MISSING"]);
}

#[test]
fn flip_with_missing_from_is_only_a_warning() {
    let action = RuleAction::FlipVisitType {
        from: Some("vtOld".into()),
        to: "vt1".into(),
    };
    let issues = validate(&with_edge_rules(catalog_workspace(), vec![rule("r1", action)]));
    assert_eq!(codes(&issues), vec!["ACTION_VT_FROM_MISSING"]);
    assert_eq!(issues[0].kind, IssueKind::Warning);
}

#[test]
fn flip_with_missing_to_is_error() {
    let action = RuleAction::FlipVisitType {
        from: None,
        to: "vtX".into(),
    };
    let issues = validate(&with_edge_rules(catalog_workspace(), vec![rule("r1", action)]));
    assert_eq!(codes(&issues), vec!["ACTION_VT_TO_MISSING"]);
    assert_eq!(issues[0].kind, IssueKind::Error);
}

#[test]
fn flip_with_both_missing_reports_from_then_to() {
    let action = RuleAction::FlipVisitType {
        from: Some("vtOld".into()),
        to: "vtX".into(),
    };
    let issues = validate(&with_edge_rules(catalog_workspace(), vec![rule("r1", action)]));
    assert_eq!(codes(&issues), vec!["ACTION_VT_FROM_MISSING", "ACTION_VT_TO_MISSING"]);
}

#[test]
fn set_pool_missing() {
    let action = RuleAction::SetSchedulingPool {
        pool_id: "pX".into(),
    };
    let issues = validate(&with_edge_rules(catalog_workspace(), vec![rule("r1", action)]));
    assert_eq!(codes(&issues), vec!["ACTION_POOL_MISSING"]);
}

#[test]
fn set_pool_known_is_clean() {
    let action = RuleAction::SetSchedulingPool {
        pool_id: "p1".into(),
    };
    assert!(validate(&with_edge_rules(catalog_workspace(), vec![rule("r1", action)])).is_empty());
}

#[test]
fn show_node_existing_is_noop_warning_only() {
    let mut ws = catalog_workspace();
    ws.nodes.push(node("n9", NodeKind::End));
    ws.edges.push(edge("e2", "n1", "n9"));
    let action = RuleAction::ShowNode {
        node_id: "n9".into(),
    };
    let issues = validate(&with_edge_rules(ws, vec![rule("r1", action)]));
    assert_eq!(codes(&issues), vec!["ACTION_NOOP_ENGINE"]);
    assert!(issues[0].message.contains("ShowNode"));
}

#[test]
fn show_node_missing_is_error_and_noop_warning() {
    let action = RuleAction::ShowNode {
        node_id: "n9".into(),
    };
    let issues = validate(&with_edge_rules(catalog_workspace(), vec![rule("r1", action)]));
    assert_eq!(codes(&issues), vec!["ACTION_NODE_MISSING", "ACTION_NOOP_ENGINE"]);
}

#[test]
fn skip_node_also_flags_noop() {
    let action = RuleAction::SkipNode {
        node_id: "n2".into(),
    };
    let issues = validate(&with_edge_rules(catalog_workspace(), vec![rule("r1", action)]));
    assert_eq!(codes(&issues), vec!["ACTION_NOOP_ENGINE"]);
    assert!(issues[0].message.contains("SkipNode"));
}

// =============================================================================
// Naming
// =============================================================================

#[test]
fn visit_type_name_must_be_slug() {
    let mut ws = catalog_workspace();
    ws.visit_types.push(visit_type("vt2", "mri brain"));
    let issues = validate(&ws);
    assert_eq!(codes(&issues), vec!["VT_SLUG"]);
    assert_eq!(issues[0].kind, IssueKind::Warning);
    assert_eq!(
        issues[0].data,
        Some(IssueData::VisitType {
            visit_type_id: "vt2".into(),
        })
    );
}

#[test]
fn pool_names_are_not_slug_checked() {
    let mut ws = catalog_workspace();
    ws.pools.push(pool("p2", "main campus"));
    assert!(validate(&ws).is_empty());
}

// =============================================================================
// CONFLICT_RULE
// =============================================================================

#[test]
fn eq_neq_across_different_questions_conflicts() {
    // Any eq alongside any neq in one AND list is flagged, even when the
    // two conditions look at different questions.
    let mut ws = catalog_workspace();
    ws.questions.push(question("q2", esqgraph::model::QuestionType::SingleSelect));
    let r = rule_all(
        "r1",
        vec![cond("q1", Comparator::Eq, "A"), cond("q2", Comparator::Neq, "B")],
        set_vt("vt1"),
    );
    let issues = validate(&with_edge_rules(ws, vec![r]));
    assert_eq!(codes(&issues), vec!["CONFLICT_RULE"]);
    assert_eq!(issues[0].kind, IssueKind::Error);
}

#[test]
fn eq_neq_in_any_list_is_not_a_conflict() {
    let mut r = rule("r1", set_vt("vt1"));
    r.any = Some(vec![cond("q1", Comparator::Eq, "A"), cond("q1", Comparator::Neq, "B")]);
    assert!(validate(&with_edge_rules(catalog_workspace(), vec![r])).is_empty());
}

#[test]
fn references_precede_conflicts() {
    let r = rule_all(
        "r1",
        vec![cond("q1", Comparator::Eq, "A"), cond("qX", Comparator::Neq, "B")],
        set_vt("vtX"),
    );
    let issues = validate(&with_edge_rules(catalog_workspace(), vec![r]));
    assert_eq!(
        codes(&issues),
        vec!["COND_QUESTION_MISSING", "ACTION_VT_MISSING", "CONFLICT_RULE"]
    );
}
