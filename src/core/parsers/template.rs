//! HTML template parser.
//!
//! Produces the [`TemplateNode`] tree the rules consume. The parser is
//! deliberately small: it understands elements, comments, text with
//! `{{ }}` interpolations, ICU blocks, and the i18n marker attributes
//! (`i18n`, `i18n-<attr>`). Bindings such as `[value]`, `(click)` and
//! `*ngIf` are not static attributes and are left out of the tree.
//!
//! Control-flow blocks (`@if`, `@for`, `@switch`, `@defer` and their
//! branches) are transparent: their content is attached to the enclosing
//! element. `@let` declarations are dropped.

use anyhow::{Result, bail};

use crate::core::{
    ast::{
        Attribute, BoundText, Comment, Element, I18nMarker, Icu, Template, TemplateNode, Text,
    },
    source::{LineIndex, SourceSpan},
};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Elements whose content is raw text, never markup or translatable copy.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

const STRUCTURAL_TEMPLATE_TAG: &str = "ng-template";

const I18N_ATTRIBUTE: &str = "i18n";
const I18N_ATTRIBUTE_PREFIX: &str = "i18n-";

/// Prefixes of binding syntax that never produce static attributes.
const BINDING_PREFIXES: &[&str] = &[
    "[", "(", "*", "#", "@", "bind-", "on-", "bindon-", "let-", "ref-",
];

/// Control-flow block names that open a `{ ... }` body.
const BLOCK_NAMES: &[&str] = &[
    "if", "else", "for", "empty", "switch", "case", "default", "defer", "placeholder", "loading",
    "error",
];

const LET_DECLARATION: &str = "let";

/// ICU message kinds accepted after `{expr,`.
const ICU_KINDS: &[&str] = &["plural", "select", "selectordinal"];

/// A parsed template file.
#[derive(Debug, Clone)]
pub struct ParsedTemplate {
    pub file_path: String,
    pub source: String,
    pub nodes: Vec<TemplateNode>,
}

impl ParsedTemplate {
    pub fn line_index(&self) -> LineIndex<'_> {
        LineIndex::new(&self.source)
    }
}

/// Parse template source code into a tree.
pub fn parse_template_source(code: String, file_path: &str) -> Result<ParsedTemplate> {
    let nodes = parse_template(&code)?;
    Ok(ParsedTemplate {
        file_path: file_path.to_string(),
        source: code,
        nodes,
    })
}

/// Parse a template string into its top-level nodes.
pub fn parse_template(source: &str) -> Result<Vec<TemplateNode>> {
    TemplateParser::new(source).parse()
}

#[derive(Debug)]
struct RawAttribute {
    name: String,
    value: Option<String>,
    span: SourceSpan,
}

/// Element whose closing tag has not been seen yet.
#[derive(Debug)]
struct OpenElement {
    name: String,
    attributes: Vec<Attribute>,
    i18n: Option<I18nMarker>,
    start_span: SourceSpan,
    children: Vec<TemplateNode>,
}

impl OpenElement {
    fn finish(self) -> TemplateNode {
        if self.name == STRUCTURAL_TEMPLATE_TAG {
            TemplateNode::Template(Template {
                tag_name: Some(self.name),
                attributes: self.attributes,
                children: self.children,
                i18n: self.i18n,
                start_span: self.start_span,
            })
        } else {
            TemplateNode::Element(Element {
                name: self.name,
                attributes: self.attributes,
                children: self.children,
                i18n: self.i18n,
                start_span: self.start_span,
            })
        }
    }
}

/// Control-flow block whose closing `}` has not been seen yet.
#[derive(Debug)]
struct OpenBlock {
    name: String,
    start: usize,
    /// Element nesting depth the block was opened at.
    depth: usize,
}

/// Block syntax found at an `@`.
enum BlockSyntax {
    /// `@name (params) {`, `len` covers everything up to and including `{`.
    Open { name: String, len: usize },
    /// `@let name = expr;`
    Let { len: usize },
}

struct TemplateParser<'s> {
    src: &'s str,
    pos: usize,
    stack: Vec<OpenElement>,
    blocks: Vec<OpenBlock>,
    roots: Vec<TemplateNode>,
}

impl<'s> TemplateParser<'s> {
    fn new(src: &'s str) -> Self {
        Self {
            src,
            pos: 0,
            stack: Vec::new(),
            blocks: Vec::new(),
            roots: Vec::new(),
        }
    }

    fn parse(mut self) -> Result<Vec<TemplateNode>> {
        while !self.at_end() {
            if self.rest().starts_with("<!--") {
                self.parse_comment()?;
            } else if self.rest().starts_with("</") && self.is_tag_start(2) {
                self.parse_closing_tag()?;
            } else if self.rest().starts_with('<') && self.is_tag_start(1) {
                self.parse_opening_tag()?;
            } else {
                self.parse_text()?;
            }
        }

        if let Some(open) = self.stack.last() {
            bail!(
                "unclosed element <{}> opened at {}",
                open.name,
                self.describe(open.start_span.start)
            );
        }
        if let Some(block) = self.blocks.last() {
            bail!(
                "unclosed block @{} opened at {}",
                block.name,
                self.describe(block.start)
            );
        }
        Ok(self.roots)
    }

    fn rest(&self) -> &'s str {
        self.src.get(self.pos..).unwrap_or_default()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn is_tag_start(&self, skip: usize) -> bool {
        self.rest()
            .get(skip..)
            .and_then(|s| s.chars().next())
            .is_some_and(|c| c.is_ascii_alphabetic())
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn describe(&self, offset: usize) -> String {
        let pos = LineIndex::new(self.src).position(offset);
        format!("{}:{}", pos.line, pos.col)
    }

    fn push_node(&mut self, node: TemplateNode) {
        match self.stack.last_mut() {
            Some(parent) => parent.children.push(node),
            None => self.roots.push(node),
        }
    }

    fn parse_comment(&mut self) -> Result<()> {
        let start = self.pos;
        let body_start = start + "<!--".len();
        let Some(len) = self.src.get(body_start..).and_then(|s| s.find("-->")) else {
            bail!("unterminated comment starting at {}", self.describe(start));
        };
        let value = self.src[body_start..body_start + len].trim().to_string();
        self.pos = body_start + len + "-->".len();
        self.push_node(TemplateNode::Comment(Comment {
            value,
            span: SourceSpan::new(start, self.pos),
        }));
        Ok(())
    }

    fn read_name(&mut self) -> &'s str {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_whitespace() || matches!(c, '>' | '/' | '=' | '"' | '\'') {
                break;
            }
            self.bump();
        }
        &self.src[start..self.pos]
    }

    fn parse_closing_tag(&mut self) -> Result<()> {
        let start = self.pos;
        self.pos += "</".len();
        let name = self.read_name();
        self.skip_whitespace();
        if self.peek() != Some('>') {
            bail!("malformed closing tag </{}> at {}", name, self.describe(start));
        }
        self.bump();

        if is_void(name) {
            return Ok(());
        }
        match self.stack.last() {
            Some(open) if open.name.eq_ignore_ascii_case(name) => {
                self.ensure_block_closed_before(name)?;
                if let Some(open) = self.stack.pop() {
                    self.push_node(open.finish());
                }
                Ok(())
            }
            Some(open) => bail!(
                "unexpected closing tag </{}> at {}, expected </{}>",
                name,
                self.describe(start),
                open.name
            ),
            None => bail!(
                "unexpected closing tag </{}> at {}",
                name,
                self.describe(start)
            ),
        }
    }

    fn parse_opening_tag(&mut self) -> Result<()> {
        let start = self.pos;
        self.bump();
        let name = self.read_name().to_string();

        let mut raw_attributes = Vec::new();
        let self_closing = loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.starts_with("/>") {
                self.pos += 2;
                break true;
            }
            if rest.starts_with('>') {
                self.pos += 1;
                break false;
            }
            if self.at_end() {
                bail!("unclosed tag <{}> starting at {}", name, self.describe(start));
            }
            raw_attributes.push(self.parse_attribute()?);
        };

        let (attributes, i18n) = classify_attributes(raw_attributes);
        let open = OpenElement {
            start_span: SourceSpan::new(start, self.pos),
            attributes,
            i18n,
            children: Vec::new(),
            name,
        };

        if self_closing || is_void(&open.name) {
            self.push_node(open.finish());
        } else if RAW_TEXT_ELEMENTS.contains(&open.name.as_str()) {
            self.skip_raw_text(&open.name, start)?;
            self.push_node(open.finish());
        } else {
            self.stack.push(open);
        }
        Ok(())
    }

    fn parse_attribute(&mut self) -> Result<RawAttribute> {
        let start = self.pos;
        let name = self.read_name();
        if name.is_empty() {
            // Stray '/' or quote inside a tag
            bail!(
                "unexpected character {:?} in tag at {}",
                self.peek().unwrap_or_default(),
                self.describe(start)
            );
        }

        self.skip_whitespace();
        let value = if self.peek() == Some('=') {
            self.bump();
            self.skip_whitespace();
            Some(self.parse_attribute_value(name, start)?)
        } else {
            None
        };

        Ok(RawAttribute {
            name: name.to_string(),
            value,
            span: SourceSpan::new(start, self.pos),
        })
    }

    fn parse_attribute_value(&mut self, name: &str, start: usize) -> Result<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.bump();
                let value_start = self.pos;
                let Some(len) = self.rest().find(quote) else {
                    bail!(
                        "unterminated value for attribute '{}' at {}",
                        name,
                        self.describe(start)
                    );
                };
                self.pos = value_start + len + 1;
                Ok(self.src[value_start..value_start + len].to_string())
            }
            _ => {
                let value_start = self.pos;
                while let Some(c) = self.peek() {
                    if c.is_whitespace() || c == '>' || self.rest().starts_with("/>") {
                        break;
                    }
                    self.bump();
                }
                Ok(self.src[value_start..self.pos].to_string())
            }
        }
    }

    fn skip_raw_text(&mut self, name: &str, start: usize) -> Result<()> {
        let closing = format!("</{}", name);
        match self.rest().find(&closing) {
            Some(len) => {
                self.pos += len + closing.len();
                match self.rest().find('>') {
                    Some(end) => {
                        self.pos += end + 1;
                        Ok(())
                    }
                    None => bail!("malformed closing tag </{}>", name),
                }
            }
            None => bail!(
                "unclosed element <{}> opened at {}",
                name,
                self.describe(start)
            ),
        }
    }

    fn parse_text(&mut self) -> Result<()> {
        let mut segment_start = self.pos;
        let mut bound = false;

        while !self.at_end() {
            let rest = self.rest();
            if let Some(after) = rest.strip_prefix("{{") {
                self.pos += 2;
                if let Some(len) = after.find("}}") {
                    bound = true;
                    self.pos += len + 2;
                }
                continue;
            }
            if rest.starts_with('{') && is_icu_start(rest) {
                self.push_text(segment_start, self.pos, bound);
                bound = false;
                self.parse_icu()?;
                segment_start = self.pos;
                continue;
            }
            if rest.starts_with('}') && self.closes_block() {
                self.push_text(segment_start, self.pos, bound);
                bound = false;
                self.pos += 1;
                self.blocks.pop();
                segment_start = self.pos;
                continue;
            }
            if rest.starts_with('@') {
                if let Some(syntax) = self.block_syntax() {
                    self.push_text(segment_start, self.pos, bound);
                    bound = false;
                    match syntax {
                        BlockSyntax::Open { name, len } => {
                            self.blocks.push(OpenBlock {
                                name,
                                start: self.pos,
                                depth: self.stack.len(),
                            });
                            self.pos += len;
                        }
                        BlockSyntax::Let { len } => self.pos += len,
                    }
                    segment_start = self.pos;
                    continue;
                }
            }
            if rest.starts_with("<!--") || (rest.starts_with('<') && self.is_markup_start()) {
                break;
            }
            self.bump();
        }

        self.push_text(segment_start, self.pos, bound);
        Ok(())
    }

    /// A `}` closes the innermost block only at the depth it was opened at.
    fn closes_block(&self) -> bool {
        self.blocks
            .last()
            .is_some_and(|block| block.depth == self.stack.len())
    }

    fn ensure_block_closed_before(&self, tag: &str) -> Result<()> {
        match self.blocks.last() {
            Some(block) if block.depth == self.stack.len() => bail!(
                "unclosed block @{} opened at {} before </{}>",
                block.name,
                self.describe(block.start),
                tag
            ),
            _ => Ok(()),
        }
    }

    /// Recognise `@name (...) {` or `@let ...;` at the current position.
    ///
    /// Anything else (an e-mail address, a stray `@`) stays text.
    fn block_syntax(&self) -> Option<BlockSyntax> {
        let rest = self.rest().strip_prefix('@')?;
        let name_len = rest
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(rest.len());
        let name = &rest[..name_len];

        if name == LET_DECLARATION {
            let end = rest.find(';')?;
            return Some(BlockSyntax::Let { len: 1 + end + 1 });
        }
        if !BLOCK_NAMES.contains(&name) {
            return None;
        }

        let mut depth = 0usize;
        for (i, c) in rest[name_len..].char_indices() {
            match c {
                '(' => depth += 1,
                ')' => depth = depth.checked_sub(1)?,
                '{' if depth == 0 => {
                    return Some(BlockSyntax::Open {
                        name: name.to_string(),
                        len: 1 + name_len + i + 1,
                    });
                }
                '<' | '}' | ';' if depth == 0 => return None,
                _ => {}
            }
        }
        None
    }

    fn is_markup_start(&self) -> bool {
        self.is_tag_start(1) || (self.rest().starts_with("</") && self.is_tag_start(2))
    }

    fn push_text(&mut self, start: usize, end: usize, bound: bool) {
        let value = &self.src[start..end];
        if value.trim().is_empty() {
            return;
        }
        let span = SourceSpan::new(start, end);
        let value = value.to_string();
        let node = if bound {
            TemplateNode::BoundText(BoundText { value, span })
        } else {
            TemplateNode::Text(Text { value, span })
        };
        self.push_node(node);
    }

    fn parse_icu(&mut self) -> Result<()> {
        let start = self.pos;
        let mut depth = 0usize;
        while let Some(c) = self.peek() {
            self.bump();
            match c {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        self.push_node(TemplateNode::Icu(Icu {
                            expression: self.src[start..self.pos].to_string(),
                            span: SourceSpan::new(start, self.pos),
                        }));
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
        bail!(
            "unterminated ICU expression starting at {} (unescaped '{{'?)",
            self.describe(start)
        )
    }
}

/// `{expr, plural|select|selectordinal, ...`; any other brace is text.
fn is_icu_start(rest: &str) -> bool {
    let Some(body) = rest.strip_prefix('{') else {
        return false;
    };
    let Some((expr, tail)) = body.split_once(',') else {
        return false;
    };
    if expr.trim().is_empty() || expr.contains(['{', '}', '<']) {
        return false;
    }
    tail.split_once(',')
        .is_some_and(|(kind, _)| ICU_KINDS.contains(&kind.trim()))
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| void.eq_ignore_ascii_case(name))
}

fn is_binding(name: &str) -> bool {
    BINDING_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// `xlink:href` is stored as `:xlink:href`.
fn normalize_attribute_name(name: &str) -> String {
    if !name.starts_with(':') && name.contains(':') {
        format!(":{}", name)
    } else {
        name.to_string()
    }
}

/// Split raw attributes into static attributes and the node's own marker,
/// attaching `i18n-<name>` markers to their target attribute.
fn classify_attributes(raw: Vec<RawAttribute>) -> (Vec<Attribute>, Option<I18nMarker>) {
    let mut node_marker = None;
    let mut attribute_markers = Vec::new();
    let mut attributes: Vec<Attribute> = Vec::new();

    for attr in raw {
        let meta = attr.value.as_deref().unwrap_or_default();
        if attr.name == I18N_ATTRIBUTE {
            node_marker = Some(I18nMarker::parse(meta));
        } else if let Some(target) = attr.name.strip_prefix(I18N_ATTRIBUTE_PREFIX) {
            attribute_markers.push((normalize_attribute_name(target), I18nMarker::parse(meta)));
        } else if !is_binding(&attr.name) {
            attributes.push(Attribute {
                name: normalize_attribute_name(&attr.name),
                value: attr.value,
                span: attr.span,
                i18n: None,
            });
        }
    }

    // Markers for attributes that are absent or bound have nothing to attach to
    for (target, marker) in attribute_markers {
        if let Some(attr) = attributes.iter_mut().find(|a| a.name == target) {
            attr.i18n = Some(marker);
        }
    }

    (attributes, node_marker)
}
