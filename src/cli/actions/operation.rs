//! Low-level file edits produced by actions.

use std::{collections::BTreeMap, fs};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{LineIndex, Position, SourceContext, SpanConverter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Insert `text` at byte `offset` of the file named by `context`.
    InsertText {
        context: SourceContext,
        offset: usize,
        text: String,
    },
}

impl Operation {
    pub fn file_path(&self) -> &str {
        match self {
            Operation::InsertText { context, .. } => context.file_path(),
        }
    }

    /// Splice every insertion into `source`.
    ///
    /// Insertions are applied from the end of the file backwards so earlier
    /// offsets stay valid; several insertions at one offset keep the order
    /// they were given in. Exact duplicates (same offset and text) are
    /// applied once. Returns the edited text and the number of insertions
    /// applied.
    pub fn apply_to_source(source: &str, ops: &[Operation]) -> Result<(String, usize)> {
        let mut edits: Vec<(usize, usize, &str)> = Vec::new();
        for (index, op) in ops.iter().enumerate() {
            let Operation::InsertText { offset, text, .. } = op;
            if edits.iter().any(|(o, _, t)| o == offset && t == text) {
                continue;
            }
            if *offset > source.len() || !source.is_char_boundary(*offset) {
                bail!(
                    "Insertion offset {} is out of range for {} (file changed since check?)",
                    offset,
                    op.file_path()
                );
            }
            edits.push((*offset, index, text.as_str()));
        }

        edits.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

        let mut result = source.to_string();
        for (offset, _, text) in &edits {
            result.insert_str(*offset, text);
        }
        Ok((result, edits.len()))
    }

    /// Apply all insertions for one file and write it back.
    pub fn apply_to_file(file_path: &str, ops: &[Operation]) -> Result<usize> {
        let source = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path))?;
        let (edited, applied) = Self::apply_to_source(&source, ops)?;
        if applied > 0 {
            fs::write(file_path, edited)
                .with_context(|| format!("Failed to write file: {}", file_path))?;
        }
        Ok(applied)
    }

    /// Print every operation, reading each file once.
    pub fn preview_all(ops: &[Operation]) {
        let mut ops_by_file: BTreeMap<&str, Vec<&Operation>> = BTreeMap::new();
        for op in ops {
            ops_by_file.entry(op.file_path()).or_default().push(op);
        }

        for (file_path, file_ops) in ops_by_file {
            let content = fs::read_to_string(file_path).unwrap_or_default();
            for op in file_ops {
                op.preview_in(&content);
            }
        }
    }

    fn preview_in(&self, content: &str) {
        let Operation::InsertText {
            context,
            offset,
            text,
        } = self;
        let source_line = &context.source_line;
        let line = context.line();
        let col = context.col();

        // Clickable location: --> path:line:col
        println!("  {} {}:{}:{}", "-->".blue(), context.file_path(), line, col);

        println!("     {}", "|".blue());
        println!(" {:>3} {} {}", line.to_string().blue(), "|".blue(), source_line);

        // Caret pointing to the node
        let prefix: String = source_line.chars().take(col.saturating_sub(1)).collect();
        let caret_padding = UnicodeWidthStr::width(prefix.as_str());
        println!(
            "     {} {:>padding$}{}",
            "|".blue(),
            "",
            "^".green(),
            padding = caret_padding
        );

        match preview_line(content, line, *offset, text) {
            Some(edited) => println!("  {} {}", "+".green().bold(), edited.green()),
            None => println!("  {} insert {:?}", "+".green().bold(), text),
        }
        println!();
    }
}

/// The line holding `offset` with `text` spliced in, if the offset still
/// lands on that line.
fn preview_line(content: &str, line: usize, offset: usize, text: &str) -> Option<String> {
    let index = LineIndex::new(content);
    let line_start = index.to_offset(Position::new(line, 1));
    let line_text = index.line_text(line);
    let at = offset.checked_sub(line_start)?;
    if at > line_text.len() || !line_text.is_char_boundary(at) {
        return None;
    }
    Some(format!("{}{}{}", &line_text[..at], text, &line_text[at..]))
}
