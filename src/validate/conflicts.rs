//! Logical contradictions inside a rule's AND list.

use super::issue::{Issue, IssueCode};
use crate::model::types::{Comparator, Rule, Workspace};

/// Flag every edge rule whose `all` list mixes `eq` and `neq`.
///
/// The pair need not target the same question: any `eq` alongside any `neq`
/// in one AND list is reported. `any` and `not` lists are not inspected.
pub fn check_conflicts(workspace: &Workspace) -> Vec<Issue> {
    workspace
        .edge_rules()
        .filter(|(_, rule)| has_eq_neq_conflict(rule))
        .map(|(edge, rule)| {
            Issue::rule(
                IssueCode::ConflictRule,
                format!(
                    "Rule {} on edge {} contains conflicting comparators.",
                    rule.id, edge.id
                ),
                &edge.id,
                &rule.id,
            )
        })
        .collect()
}

pub fn has_eq_neq_conflict(rule: &Rule) -> bool {
    let all = rule.all_conditions();
    let has_eq = all.iter().any(|c| c.comparator == Comparator::Eq);
    let has_neq = all.iter().any(|c| c.comparator == Comparator::Neq);
    has_eq && has_neq
}
