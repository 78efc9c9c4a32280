//! Referential integrity: node links, rule conditions, and rule actions must
//! resolve within the same workspace.
//! SYNC NOTE: Match arms here must track `RuleAction` in `model/types.rs`.

use super::index::WorkspaceIndex;
use super::issue::{Issue, IssueCode};
use crate::model::types::{Edge, Node, NodeKind, Rule, RuleAction, Workspace};

/// Run all reference checks. Returns every issue found.
pub fn check_references(workspace: &Workspace, index: &WorkspaceIndex) -> Vec<Issue> {
    let mut issues = Vec::new();

    for node in &workspace.nodes {
        check_node_links(node, index, &mut issues);
    }

    for (edge, rule) in workspace.edge_rules() {
        check_rule_conditions(edge, rule, index, &mut issues);
        check_rule_action(edge, rule, index, &mut issues);
    }

    issues
}

/// Empty strings count as "not linked", matching what the editor writes
/// when a link is cleared.
fn linked(id: &Option<String>) -> Option<&str> {
    id.as_deref().filter(|s| !s.is_empty())
}

fn check_node_links(node: &Node, index: &WorkspaceIndex, issues: &mut Vec<Issue>) {
    match node.kind {
        NodeKind::Question => match linked(&node.question_id) {
            None => issues.push(Issue::node(
                IssueCode::NodeQuestionUnlinked,
                format!("Question node {} has no linked question.", node.id),
                &node.id,
            )),
            Some(qid) if !index.has_question(qid) => issues.push(Issue::node(
                IssueCode::NodeQuestionMissing,
                format!("Question node {} links missing question {}.", node.id, qid),
                &node.id,
            )),
            Some(_) => {}
        },
        NodeKind::VisitType => {
            if let Some(vt) = linked(&node.visit_type_id) {
                if !index.has_visit_type(vt) {
                    issues.push(Issue::node(
                        IssueCode::NodeVtMissing,
                        format!("VisitType node {} links missing VisitType {}.", node.id, vt),
                        &node.id,
                    ));
                }
            }
        }
        NodeKind::Start | NodeKind::Gate | NodeKind::Pool | NodeKind::End => {}
    }
}

/// Conditions from `all`, `any`, and `not`, in that order.
fn check_rule_conditions(edge: &Edge, rule: &Rule, index: &WorkspaceIndex, issues: &mut Vec<Issue>) {
    for condition in rule.conditions() {
        if !index.has_question(&condition.question_id) {
            issues.push(Issue::rule(
                IssueCode::CondQuestionMissing,
                format!(
                    "Rule {} on edge {} references missing question {}.",
                    rule.id, edge.id, condition.question_id
                ),
                &edge.id,
                &rule.id,
            ));
        }
    }
}

fn check_rule_action(edge: &Edge, rule: &Rule, index: &WorkspaceIndex, issues: &mut Vec<Issue>) {
    let here = format!("Rule {} on edge {}", rule.id, edge.id);
    let mut push = |code: IssueCode, message: String| {
        issues.push(Issue::rule(code, message, &edge.id, &rule.id));
    };

    match &rule.action {
        RuleAction::SetVisitType { visit_type_id } => {
            if !index.has_visit_type(visit_type_id) {
                push(
                    IssueCode::ActionVtMissing,
                    format!("{here} references missing VisitType {visit_type_id}."),
                );
            }
        }
        RuleAction::FlipVisitType { from, to } => {
            if let Some(from) = linked(from) {
                if !index.has_visit_type(from) {
                    push(
                        IssueCode::ActionVtFromMissing,
                        format!("{here} references missing from VisitType {from}."),
                    );
                }
            }
            if !index.has_visit_type(to) {
                push(
                    IssueCode::ActionVtToMissing,
                    format!("{here} references missing to VisitType {to}."),
                );
            }
        }
        RuleAction::SetSchedulingPool { pool_id } => {
            if !index.has_pool(pool_id) {
                push(
                    IssueCode::ActionPoolMissing,
                    format!("{here} references missing Pool {pool_id}."),
                );
            }
        }
        RuleAction::ShowNode { node_id } | RuleAction::SkipNode { node_id } => {
            if !index.has_node(node_id) {
                push(
                    IssueCode::ActionNodeMissing,
                    format!("{here} references missing node {node_id}."),
                );
            }
            // No execution engine applies these yet.
            push(
                IssueCode::ActionNoopEngine,
                format!(
                    "{here} uses {}, which is not applied by the engine.",
                    rule.action.type_name()
                ),
            );
        }
    }
}
