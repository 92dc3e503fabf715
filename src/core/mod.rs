//! Core analysis engine.
//!
//! - `source`: byte spans, line/column positions and the `SpanConverter` seam
//! - `ast`: template tree and its visitor
//! - `parsers`: template parser
//! - `file_scanner`: template discovery from includes/ignores
//! - `context`: per-run state with lazily parsed templates

pub mod ast;
pub mod context;
pub mod file_scanner;
pub mod parsers;
pub mod source;

pub use ast::{
    Attribute, BoundText, ChildContentKind, Comment, Element, I18nMarker, Icu, MarkupNode,
    Template, TemplateNode, Text, Visit, walk_element, walk_template,
};
pub use context::CheckContext;
pub use source::{
    LineIndex, Position, SourceContext, SourceLocation, SourceRange, SourceSpan, SpanConverter,
};
