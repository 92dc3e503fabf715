//! Per-attribute i18n coverage.

use super::{NodeCheck, exemption::is_exempt};
use crate::{
    core::Attribute,
    issues::{Fix, Issue, MissingAttributeIssue, MissingIdOnAttributeIssue, Suggestion},
};

/// Check each attribute in document order.
///
/// An attribute with its own marker can only miss a custom id; one without
/// can only miss the marker. At most one issue per attribute.
pub fn inspect_attributes(attributes: &[Attribute], check: &NodeCheck<'_>, issues: &mut Vec<Issue>) {
    let options = &check.settings.options;

    for attr in attributes {
        match &attr.i18n {
            Some(marker) => {
                if options.check_id && !marker.has_custom_id() {
                    issues.push(Issue::MissingIdOnAttribute(MissingIdOnAttributeIssue {
                        context: check.context.clone(),
                        attribute: attr.name.clone(),
                    }));
                }
            }
            None => {
                if options.check_attributes
                    && !is_exempt(&attr.name, attr.value.as_deref(), &check.settings.ignore_set)
                {
                    issues.push(Issue::MissingAttribute(MissingAttributeIssue {
                        context: check.context.clone(),
                        attribute: attr.name.clone(),
                        fix: Fix::insert(check.insertion_offset, format!(" i18n-{}", attr.name)),
                        suggestion: Suggestion::ignore_attribute(&attr.name),
                    }));
                }
            }
        }
    }
}
