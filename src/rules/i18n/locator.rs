//! Report location and autofix insertion point of a node.

use crate::core::{SourceRange, SourceSpan, SpanConverter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLocation {
    /// Range of the opening tag.
    pub range: SourceRange,
    /// Offset right after `<name`, where ` attr` text can be spliced in.
    pub insertion_offset: usize,
}

/// Locate the opening tag of a node named `name`.
///
/// Anonymous nodes pass an empty name; their insertion point degenerates
/// to right after the `<`.
pub fn locate<C: SpanConverter + ?Sized>(
    span: SourceSpan,
    name: &str,
    converter: &C,
) -> NodeLocation {
    let range = converter.to_range(span);
    let start_offset = converter.to_offset(range.start);
    NodeLocation {
        range,
        insertion_offset: start_offset + 1 + name.len(),
    }
}
