// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Line classification.
//!
//! The block parser never looks at raw text; every input line is first
//! classified here by indentation width and syntactic shape. Blank and
//! comment lines never affect structure. A non-blank line that matches
//! none of the recognized shapes is classified [`LineKind::Unrecognized`]
//! and is ignored by the parser, only surfacing as a diagnostic.

/// A classified input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Line<'input> {
    /// 1-based source line number, for diagnostics.
    pub number: usize,
    /// Count of leading whitespace characters; the sole nesting signal.
    pub indent: usize,
    pub kind: LineKind<'input>,
}

/// The syntactic shape of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LineKind<'input> {
    /// Empty or whitespace-only.
    Blank,
    /// First non-space character is `#`.
    Comment,
    /// Non-blank, non-comment, but no recognized shape. Ignored, like blank.
    Unrecognized,
    /// `key: value` with the colon outside quotes; `value` may be empty.
    KeyValue {
        key: &'input str,
        value: &'input str,
    },
    /// `- value`, or a lone `-`; `value` may be empty.
    SequenceItem { value: &'input str },
}

/// Classify one raw line.
pub(crate) fn classify(number: usize, raw: &str) -> Line<'_> {
    let content = raw.trim_start();
    if content.trim_end().is_empty() {
        return Line {
            number,
            indent: 0,
            kind: LineKind::Blank,
        };
    }

    let indent = raw.chars().take_while(|c| c.is_whitespace()).count();

    let kind = if content.starts_with('#') {
        LineKind::Comment
    } else if let Some(rest) = sequence_item_rest(content) {
        LineKind::SequenceItem { value: rest.trim() }
    } else if let Some(colon) = find_unquoted_colon(content) {
        LineKind::KeyValue {
            key: content[..colon].trim(),
            value: content[colon + 1..].trim(),
        }
    } else {
        LineKind::Unrecognized
    };

    Line {
        number,
        indent,
        kind,
    }
}

/// Returns the text after the dash if this is a sequence item.
///
/// A line is a sequence item when its first non-space token is a dash
/// followed by a space or end-of-line.
fn sequence_item_rest(content: &str) -> Option<&str> {
    let rest = content.strip_prefix('-')?;
    if rest.is_empty() || rest.starts_with(' ') {
        Some(rest)
    } else {
        None
    }
}

/// Find the byte offset of the first colon outside single or double quotes.
fn find_unquoted_colon(content: &str) -> Option<usize> {
    let mut in_single = false;
    let mut in_double = false;
    for (offset, ch) in content.char_indices() {
        match ch {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            ':' if !in_single && !in_double => return Some(offset),
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines() {
        assert_eq!(classify(1, "").kind, LineKind::Blank);
        assert_eq!(classify(1, "   ").kind, LineKind::Blank);
        assert_eq!(classify(1, "\t").kind, LineKind::Blank);
    }

    #[test]
    fn test_comment_lines() {
        assert_eq!(classify(1, "# a comment").kind, LineKind::Comment);
        assert_eq!(classify(1, "   # indented").kind, LineKind::Comment);
    }

    #[test]
    fn test_key_value() {
        let line = classify(3, "  input: \"/path/to/input.txt\"");
        assert_eq!(line.number, 3);
        assert_eq!(line.indent, 2);
        assert_eq!(
            line.kind,
            LineKind::KeyValue {
                key: "input",
                value: "\"/path/to/input.txt\"",
            }
        );
    }

    #[test]
    fn test_key_with_empty_value() {
        assert_eq!(
            classify(1, "par:").kind,
            LineKind::KeyValue {
                key: "par",
                value: "",
            }
        );
    }

    #[test]
    fn test_sequence_items() {
        assert_eq!(
            classify(1, "  - item").kind,
            LineKind::SequenceItem { value: "item" }
        );
        assert_eq!(
            classify(1, "  -").kind,
            LineKind::SequenceItem { value: "" }
        );
        // A dash glued to text is not an item marker.
        assert_eq!(
            classify(1, "-item: 1").kind,
            LineKind::KeyValue {
                key: "-item",
                value: "1",
            }
        );
    }

    #[test]
    fn test_colon_inside_quotes_is_not_a_separator() {
        assert_eq!(classify(1, "\"a: b\"").kind, LineKind::Unrecognized);
        assert_eq!(
            classify(1, "key: \"a: b\"").kind,
            LineKind::KeyValue {
                key: "key",
                value: "\"a: b\"",
            }
        );
    }

    #[test]
    fn test_unrecognized_lines() {
        assert_eq!(classify(1, "just some text").kind, LineKind::Unrecognized);
    }

    #[test]
    fn test_colon_without_space() {
        assert_eq!(
            classify(1, "key:value").kind,
            LineKind::KeyValue {
                key: "key",
                value: "value",
            }
        );
    }
}
