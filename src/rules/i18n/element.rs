//! Element-level i18n coverage.

use super::NodeCheck;
use crate::{
    core::MarkupNode,
    issues::{Fix, Issue, MissingIdIssue, MissingTextIssue},
};

/// Check the node as a whole.
///
/// A marked node can only miss a custom id. An unmarked node is reported
/// when one of its direct children is text, bound text, or an ICU block.
pub fn inspect_element(node: &MarkupNode<'_>, check: &NodeCheck<'_>, issues: &mut Vec<Issue>) {
    let options = &check.settings.options;

    match node.i18n {
        Some(marker) => {
            if options.check_id && !marker.has_custom_id() {
                issues.push(Issue::MissingId(MissingIdIssue {
                    context: check.context.clone(),
                    tag: node.name.to_string(),
                }));
            }
        }
        None => {
            if options.check_text && has_translatable_child(node) {
                issues.push(Issue::MissingText(MissingTextIssue {
                    context: check.context.clone(),
                    tag: node.name.to_string(),
                    fix: Fix::insert(check.insertion_offset, " i18n"),
                }));
            }
        }
    }
}

fn has_translatable_child(node: &MarkupNode<'_>) -> bool {
    node.children
        .iter()
        .any(|child| child.content_kind().is_some())
}
