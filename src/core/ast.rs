//! Template AST consumed by the rules.
//!
//! The tree is produced once per file by [`crate::core::parsers::template`]
//! and is read-only afterwards.

use crate::core::source::SourceSpan;

/// i18n metadata attached to a node or an attribute.
///
/// Authored as `meaning|description@@customId`, every part optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct I18nMarker {
    pub meaning: Option<String>,
    pub description: Option<String>,
    /// Stable message id from the `@@` suffix. Never empty.
    pub custom_id: Option<String>,
}

impl I18nMarker {
    /// Parse the value of an `i18n` / `i18n-<attr>` attribute.
    pub fn parse(meta: &str) -> Self {
        let (rest, custom_id) = match meta.split_once("@@") {
            Some((rest, id)) => (rest, non_empty(id)),
            None => (meta, None),
        };
        let (meaning, description) = match rest.split_once('|') {
            Some((meaning, description)) => (non_empty(meaning), non_empty(description)),
            None => (None, non_empty(rest)),
        };
        Self {
            meaning,
            description,
            custom_id,
        }
    }

    /// Marker with an explicit message id.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            custom_id: non_empty(&id.into()),
            ..Default::default()
        }
    }

    pub fn has_custom_id(&self) -> bool {
        self.custom_id.is_some()
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Static (non-bound) attribute of an element or template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    /// `None` for value-less attributes such as `<input disabled>`.
    pub value: Option<String>,
    pub span: SourceSpan,
    /// Companion `i18n-<name>` marker.
    pub i18n: Option<I18nMarker>,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            name: name.into(),
            value: value.map(str::to_string),
            span: SourceSpan::default(),
            i18n: None,
        }
    }

    pub fn with_i18n(mut self, marker: I18nMarker) -> Self {
        self.i18n = Some(marker);
        self
    }
}

/// Plain markup element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<TemplateNode>,
    pub i18n: Option<I18nMarker>,
    /// Span of the opening tag.
    pub start_span: SourceSpan,
}

/// Structural template element (`<ng-template>` and friends).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// `None` for anonymous structural nodes.
    pub tag_name: Option<String>,
    pub attributes: Vec<Attribute>,
    pub children: Vec<TemplateNode>,
    pub i18n: Option<I18nMarker>,
    pub start_span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub value: String,
    pub span: SourceSpan,
}

/// Text containing `{{ }}` interpolations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundText {
    pub value: String,
    pub span: SourceSpan,
}

/// ICU plural/select expression, kept as raw source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Icu {
    pub expression: String,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub value: String,
    pub span: SourceSpan,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateNode {
    Element(Element),
    Template(Template),
    Text(Text),
    BoundText(BoundText),
    Icu(Icu),
    Comment(Comment),
}

/// Child kinds that count as translatable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildContentKind {
    Text,
    BoundText,
    Icu,
}

/// Borrowed view over the node kinds that can carry translatable content.
#[derive(Debug, Clone, Copy)]
pub struct MarkupNode<'a> {
    /// Tag name, empty for anonymous structural nodes.
    pub name: &'a str,
    pub attributes: &'a [Attribute],
    pub children: &'a [TemplateNode],
    pub i18n: Option<&'a I18nMarker>,
    pub start_span: SourceSpan,
}

impl TemplateNode {
    pub fn content_kind(&self) -> Option<ChildContentKind> {
        match self {
            TemplateNode::Text(_) => Some(ChildContentKind::Text),
            TemplateNode::BoundText(_) => Some(ChildContentKind::BoundText),
            TemplateNode::Icu(_) => Some(ChildContentKind::Icu),
            TemplateNode::Element(_) | TemplateNode::Template(_) | TemplateNode::Comment(_) => {
                None
            }
        }
    }
}

impl Element {
    pub fn as_markup(&self) -> MarkupNode<'_> {
        MarkupNode {
            name: &self.name,
            attributes: &self.attributes,
            children: &self.children,
            i18n: self.i18n.as_ref(),
            start_span: self.start_span,
        }
    }
}

impl Template {
    pub fn as_markup(&self) -> MarkupNode<'_> {
        MarkupNode {
            name: self.tag_name.as_deref().unwrap_or_default(),
            attributes: &self.attributes,
            children: &self.children,
            i18n: self.i18n.as_ref(),
            start_span: self.start_span,
        }
    }
}

/// Depth-first, pre-order visitor over a template tree.
///
/// Default methods walk into children; override a method and call the
/// matching `walk_*` helper to keep descending.
pub trait Visit {
    fn visit_nodes(&mut self, nodes: &[TemplateNode]) {
        for node in nodes {
            self.visit_node(node);
        }
    }

    fn visit_node(&mut self, node: &TemplateNode) {
        match node {
            TemplateNode::Element(el) => self.visit_element(el),
            TemplateNode::Template(tpl) => self.visit_template(tpl),
            TemplateNode::Text(_)
            | TemplateNode::BoundText(_)
            | TemplateNode::Icu(_)
            | TemplateNode::Comment(_) => {}
        }
    }

    fn visit_element(&mut self, el: &Element) {
        walk_element(self, el);
    }

    fn visit_template(&mut self, tpl: &Template) {
        walk_template(self, tpl);
    }
}

pub fn walk_element<V: Visit + ?Sized>(visitor: &mut V, el: &Element) {
    visitor.visit_nodes(&el.children);
}

pub fn walk_template<V: Visit + ?Sized>(visitor: &mut V, tpl: &Template) {
    visitor.visit_nodes(&tpl.children);
}
