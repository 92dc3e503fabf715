//! Depth-first walk over a template that runs both inspectors on every
//! element and template node.

use tracing::trace;

use super::{
    NodeCheck, RuleSettings, attributes::inspect_attributes, element::inspect_element,
    locator::locate,
};
use crate::{
    core::{
        Element, MarkupNode, SourceContext, SourceLocation, SpanConverter, Template, Visit,
        walk_element, walk_template,
    },
    issues::Issue,
};

pub struct I18nChecker<'a, C: SpanConverter + ?Sized> {
    file_path: &'a str,
    converter: &'a C,
    settings: &'a RuleSettings,
    pub issues: Vec<Issue>,
}

impl<'a, C: SpanConverter + ?Sized> I18nChecker<'a, C> {
    pub fn new(file_path: &'a str, converter: &'a C, settings: &'a RuleSettings) -> Self {
        Self {
            file_path,
            converter,
            settings,
            issues: Vec::new(),
        }
    }

    /// Attribute issues come before the node's own issue.
    fn check_markup(&mut self, node: MarkupNode<'_>) {
        let location = locate(node.start_span, node.name, self.converter);
        let start = location.range.start;
        trace!(
            file = self.file_path,
            tag = node.name,
            line = start.line,
            col = start.col,
            "visit"
        );

        let context = SourceContext::new(
            SourceLocation::new(self.file_path, start.line, start.col),
            location.range.end,
            self.converter.line_text(start.line),
        );
        let check = NodeCheck {
            context: &context,
            insertion_offset: location.insertion_offset,
            settings: self.settings,
        };

        inspect_attributes(node.attributes, &check, &mut self.issues);
        inspect_element(&node, &check, &mut self.issues);
    }
}

impl<C: SpanConverter + ?Sized> Visit for I18nChecker<'_, C> {
    fn visit_element(&mut self, el: &Element) {
        self.check_markup(el.as_markup());
        walk_element(self, el);
    }

    fn visit_template(&mut self, tpl: &Template) {
        self.check_markup(tpl.as_markup());
        walk_template(self, tpl);
    }
}
