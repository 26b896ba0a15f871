// Copyright (c) 2026 Arista Networks, Inc.
// Use of this source code is governed by the Apache License 2.0
// that can be found in the LICENSE file.

//! Diagnostics for lenient parsing.
//!
//! The block parser has no error channel: malformed lines are dropped and
//! parsing always produces a mapping. Diagnostics record what was dropped
//! or coerced, so strict consumers can reject input that the lenient
//! default silently tolerates. Accumulating diagnostics never changes the
//! parsed output.

/// A condition noted while parsing, tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The kind of condition
    pub kind: DiagnosticKind,
    /// 1-based line number where the condition occurred
    pub line: usize,
}

/// The kind of parse condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A non-blank, non-comment line matched no recognized shape and was ignored.
    UnrecognizedLine,

    /// A line inside a block was indented deeper than the block with no
    /// open nested block to receive it, and was skipped.
    UnexpectedIndentation { block: usize, found: usize },

    /// A nested block exceeded the configured depth cap and was skipped.
    DepthLimitExceeded { limit: usize },

    /// A numeric-looking token failed numeric coercion and was kept as a string.
    NumericCoercionFailed(String),

    /// The top-level block was not a mapping and was replaced by an empty one.
    RootNotMapping,

    /// A content line after the top-level block closed was dropped.
    ContentAfterRoot,
}

impl Diagnostic {
    /// Create a new diagnostic.
    #[must_use]
    pub const fn new(kind: DiagnosticKind, line: usize) -> Self {
        Self { kind, line }
    }

    /// Get a suggestion for how to fix this condition.
    ///
    /// Delegates to [`DiagnosticKind::suggestion()`].
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        self.kind.suggestion()
    }
}

impl DiagnosticKind {
    /// Get a suggestion for how to fix this condition.
    ///
    /// Returns `Some(suggestion)` if a helpful fix is available, or `None`
    /// if no specific suggestion applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnrecognizedLine => {
                Some("Expected `key: value`, `- item`, a comment, or a blank line")
            }
            Self::UnexpectedIndentation { .. } => Some(
                "Lines in one block must share the block's indentation; nest under a key or dash with no inline value",
            ),
            Self::NumericCoercionFailed(_) => {
                Some("Quote the value to make the string typing explicit")
            }
            Self::ContentAfterRoot => Some("Keep all content inside one top-level mapping"),
            Self::DepthLimitExceeded { .. } | Self::RootNotMapping => None,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            DiagnosticKind::UnrecognizedLine => write!(f, "unrecognized line ignored"),
            DiagnosticKind::UnexpectedIndentation { block, found } => {
                write!(
                    f,
                    "unexpected indentation: block is at {block} spaces, found {found}"
                )
            }
            DiagnosticKind::DepthLimitExceeded { limit } => {
                write!(f, "nesting deeper than {limit} levels skipped")
            }
            DiagnosticKind::NumericCoercionFailed(token) => {
                write!(f, "'{token}' is not a number, kept as a string")
            }
            DiagnosticKind::RootNotMapping => {
                write!(f, "top-level content is not a mapping")
            }
            DiagnosticKind::ContentAfterRoot => {
                write!(f, "content after the top-level block dropped")
            }
        }
    }
}

impl std::error::Error for Diagnostic {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let cases = [
            (
                DiagnosticKind::UnrecognizedLine,
                "line 3: unrecognized line ignored",
            ),
            (
                DiagnosticKind::UnexpectedIndentation { block: 2, found: 6 },
                "line 3: unexpected indentation: block is at 2 spaces, found 6",
            ),
            (
                DiagnosticKind::DepthLimitExceeded { limit: 128 },
                "line 3: nesting deeper than 128 levels skipped",
            ),
            (
                DiagnosticKind::NumericCoercionFailed("12abc".to_owned()),
                "line 3: '12abc' is not a number, kept as a string",
            ),
            (
                DiagnosticKind::RootNotMapping,
                "line 3: top-level content is not a mapping",
            ),
            (
                DiagnosticKind::ContentAfterRoot,
                "line 3: content after the top-level block dropped",
            ),
        ];

        for (kind, expected) in cases {
            assert_eq!(Diagnostic::new(kind, 3).to_string(), expected);
        }
    }

    #[test]
    fn test_suggestions() {
        assert!(
            Diagnostic::new(DiagnosticKind::UnrecognizedLine, 1)
                .suggestion()
                .is_some()
        );
        assert!(
            DiagnosticKind::UnexpectedIndentation { block: 0, found: 4 }
                .suggestion()
                .is_some()
        );
        assert!(
            DiagnosticKind::DepthLimitExceeded { limit: 8 }
                .suggestion()
                .is_none()
        );
    }
}
