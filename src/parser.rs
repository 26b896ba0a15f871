// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Block structure parsing.
//!
//! The parser walks classified lines once, maintaining an explicit stack
//! of open blocks instead of recursing, so nesting depth is bounded by a
//! configurable cap rather than the call stack. A block is a maximal run
//! of lines sharing one indentation level; a key or dash with no inline
//! value leaves a pending slot that the next strictly-deeper line opens a
//! nested block into. If nothing deeper follows, the pending slot
//! resolves to null.
//!
//! Parsing is deliberately lenient: unrecognized lines and unexpected
//! indentation are skipped, never fatal, and the result is always a
//! mapping. Everything skipped is recorded as a [`Diagnostic`] for
//! strict-mode consumers.

use crate::error::{Diagnostic, DiagnosticKind};
use crate::line::{Line, LineKind, classify};
use crate::scalar;
use crate::value::{Mapping, Value};

/// Options controlling a parse.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum nesting depth. Blocks nested deeper than this are skipped
    /// with a [`DiagnosticKind::DepthLimitExceeded`] diagnostic. Values
    /// below 1 are treated as 1.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Parse block-style parameter text with explicit options.
///
/// The output mapping is identical to [`crate::parse`]; diagnostics
/// record every line that was dropped, skipped, or coerced unexpectedly.
#[must_use]
pub fn parse_with_options(input: &str, options: &ParseOptions) -> (Mapping, Vec<Diagnostic>) {
    let mut parser = BlockParser::new(options);

    for (index, raw) in input.lines().enumerate() {
        let line = classify(index + 1, raw);
        match line.kind {
            LineKind::Blank | LineKind::Comment => {}
            LineKind::Unrecognized => {
                let kind = if parser.root.is_some() {
                    DiagnosticKind::ContentAfterRoot
                } else {
                    DiagnosticKind::UnrecognizedLine
                };
                parser
                    .diagnostics
                    .push(Diagnostic::new(kind, line.number));
            }
            LineKind::KeyValue { .. } | LineKind::SequenceItem { .. } => parser.feed(&line),
        }
    }

    parser.finish()
}

/// One open block: a mapping collecting key/value pairs or a sequence
/// collecting items, fixed by the shape of its first line.
#[derive(Debug)]
struct Frame {
    /// Indentation shared by every line of this block.
    indent: usize,
    /// Line number of the block's first line.
    line: usize,
    body: Body,
}

#[derive(Debug)]
enum Body {
    Mapping {
        entries: Mapping,
        /// Key whose value is an as-yet-unopened nested block.
        pending: Option<String>,
    },
    Sequence {
        items: Vec<Value>,
        /// Whether the last item awaits a nested block.
        pending: bool,
    },
}

impl Frame {
    fn open(line: &Line<'_>) -> Self {
        let body = match line.kind {
            LineKind::SequenceItem { .. } => Body::Sequence {
                items: Vec::new(),
                pending: false,
            },
            _ => Body::Mapping {
                entries: Mapping::new(),
                pending: None,
            },
        };
        Self {
            indent: line.indent,
            line: line.number,
            body,
        }
    }

    const fn is_mapping(&self) -> bool {
        matches!(self.body, Body::Mapping { .. })
    }

    const fn has_pending(&self) -> bool {
        match &self.body {
            Body::Mapping { pending, .. } => pending.is_some(),
            Body::Sequence { pending, .. } => *pending,
        }
    }

    /// Fill the pending slot with a finished nested value (or null when
    /// the nested block turned out to be absent).
    fn resolve_pending(&mut self, value: Value) {
        match &mut self.body {
            Body::Mapping { entries, pending } => {
                if let Some(key) = pending.take() {
                    entries.insert(key, value);
                }
            }
            Body::Sequence { items, pending } => {
                if *pending {
                    items.push(value);
                    *pending = false;
                }
            }
        }
    }

    /// Record a `key:` line with no inline value.
    fn open_key(&mut self, key: &str) {
        if let Body::Mapping { pending, .. } = &mut self.body {
            *pending = Some(key.to_owned());
        }
    }

    /// Record a lone `-` line with no inline value.
    fn open_item(&mut self) {
        if let Body::Sequence { pending, .. } = &mut self.body {
            *pending = true;
        }
    }

    fn insert(&mut self, key: &str, value: Value) {
        if let Body::Mapping { entries, .. } = &mut self.body {
            entries.insert(key.to_owned(), value);
        }
    }

    fn push(&mut self, value: Value) {
        if let Body::Sequence { items, .. } = &mut self.body {
            items.push(value);
        }
    }

    /// Finish the block. An unresolved pending slot means the nested
    /// block was absent and resolves to null.
    fn close(mut self) -> Value {
        self.resolve_pending(Value::Null);
        match self.body {
            Body::Mapping { entries, .. } => Value::Mapping(entries),
            Body::Sequence { items, .. } => Value::Sequence(items),
        }
    }
}

/// Parser state: the stack of open blocks plus accumulated diagnostics.
#[derive(Debug)]
struct BlockParser {
    max_depth: usize,
    stack: Vec<Frame>,
    diagnostics: Vec<Diagnostic>,
    /// When set, lines indented deeper than this are being skipped
    /// (an over-deep block after the depth cap tripped).
    skip_deeper_than: Option<usize>,
    /// Set once the root block has closed; the value and its first line.
    /// Content after this point is dropped.
    root: Option<(Value, usize)>,
}

impl BlockParser {
    fn new(options: &ParseOptions) -> Self {
        Self {
            max_depth: options.max_depth.max(1),
            stack: Vec::new(),
            diagnostics: Vec::new(),
            skip_deeper_than: None,
            root: None,
        }
    }

    /// Process one content line against the stack of open blocks.
    fn feed(&mut self, line: &Line<'_>) {
        let indent = line.indent;
        let number = line.number;

        if self.root.is_some() {
            self.diagnostics
                .push(Diagnostic::new(DiagnosticKind::ContentAfterRoot, number));
            return;
        }
        if let Some(threshold) = self.skip_deeper_than {
            if indent > threshold {
                return;
            }
            self.skip_deeper_than = None;
        }

        loop {
            if self.root.is_some() {
                // The root block closed while unwinding; this line is
                // outside it and is dropped.
                self.diagnostics
                    .push(Diagnostic::new(DiagnosticKind::ContentAfterRoot, number));
                return;
            }

            let depth = self.stack.len();
            let Some(top) = self.stack.last_mut() else {
                // First content line: it opens the root block at whatever
                // indentation it has.
                self.stack.push(Frame::open(line));
                continue;
            };

            // A strictly deeper line under a pending key/item opens a
            // nested block whose kind the line itself decides.
            if top.has_pending() && indent > top.indent {
                if depth >= self.max_depth {
                    let limit = self.max_depth;
                    let block = top.indent;
                    top.resolve_pending(Value::Null);
                    self.diagnostics.push(Diagnostic::new(
                        DiagnosticKind::DepthLimitExceeded { limit },
                        number,
                    ));
                    self.skip_deeper_than = Some(block);
                    return;
                }
                self.stack.push(Frame::open(line));
                continue;
            }

            if indent == top.indent {
                // Same level: a pending block from the previous line is
                // absent and resolves to null.
                if top.has_pending() {
                    top.resolve_pending(Value::Null);
                }
                match &line.kind {
                    LineKind::KeyValue { key, value } if top.is_mapping() => {
                        if value.is_empty() {
                            top.open_key(key);
                        } else {
                            let value = scalar::interpret(value, number, &mut self.diagnostics);
                            top.insert(key, value);
                        }
                        return;
                    }
                    LineKind::SequenceItem { value } if !top.is_mapping() => {
                        if value.is_empty() {
                            top.open_item();
                        } else {
                            let value = scalar::interpret(value, number, &mut self.diagnostics);
                            top.push(value);
                        }
                        return;
                    }
                    _ => {
                        // Same indentation, wrong shape: this block ends
                        // here and the line is retried one level up.
                        self.close_top();
                        continue;
                    }
                }
            }

            if indent < top.indent {
                if top.has_pending() {
                    top.resolve_pending(Value::Null);
                }
                self.close_top();
                continue;
            }

            // Deeper than the block with nothing pending: malformed
            // nesting, skipped rather than rejected.
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnexpectedIndentation {
                    block: top.indent,
                    found: indent,
                },
                number,
            ));
            return;
        }
    }

    /// Close the innermost block, folding its value into the parent's
    /// pending slot, or into the root result if it was the outermost.
    fn close_top(&mut self) {
        if let Some(frame) = self.stack.pop() {
            let opened_at = frame.line;
            let value = frame.close();
            if let Some(parent) = self.stack.last_mut() {
                parent.resolve_pending(value);
            } else {
                self.root = Some((value, opened_at));
            }
        }
    }

    /// Close any blocks still open at end of input and coerce the root
    /// to a mapping.
    fn finish(mut self) -> (Mapping, Vec<Diagnostic>) {
        while !self.stack.is_empty() {
            self.close_top();
        }
        let mapping = match self.root.take() {
            None => Mapping::new(),
            Some((Value::Mapping(entries), _)) => entries,
            Some((_, opened_at)) => {
                self.diagnostics
                    .push(Diagnostic::new(DiagnosticKind::RootNotMapping, opened_at));
                Mapping::new()
            }
        };
        (mapping, self.diagnostics)
    }
}
