// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Whitespace and comments attached to a syntactic position.
//!
//! A [`Space`] is the trivia between two tokens: leading whitespace followed
//! by an ordered list of comments, each carrying the whitespace that follows
//! it as its `suffix`. Spaces compare by value but are shared by reference,
//! so an unchanged space keeps its allocation through a rewrite.

use std::sync::{Arc, LazyLock};

use crate::id::Same;
use crate::markers::Markers;

/// A single comment.
///
/// `text` excludes the comment delimiters; the printer of the dialect adds
/// them back. `suffix` is the whitespace between this comment and the next
/// comment or token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    text: Arc<str>,
    suffix: Arc<str>,
    markers: Markers,
    multiline: bool,
}

impl Comment {
    pub fn new(text: impl Into<Arc<str>>, suffix: impl Into<Arc<str>>, multiline: bool) -> Self {
        Self {
            text: text.into(),
            suffix: suffix.into(),
            markers: Markers::empty(),
            multiline,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn with_text(&self, text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }

    pub fn with_suffix(&self, suffix: impl Into<Arc<str>>) -> Self {
        Self {
            suffix: suffix.into(),
            ..self.clone()
        }
    }

    pub fn with_markers(&self, markers: Markers) -> Self {
        Self {
            markers,
            ..self.clone()
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
struct SpaceData {
    comments: Vec<Comment>,
    whitespace: Option<Arc<str>>,
}

/// Whitespace plus ordered comments.
///
/// `whitespace` distinguishes `None` from `Some("")`; both render as nothing,
/// but the distinction survives the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space(Arc<SpaceData>);

static EMPTY: LazyLock<Space> = LazyLock::new(|| {
    Space(Arc::new(SpaceData {
        comments: Vec::new(),
        whitespace: None,
    }))
});

static SINGLE_SPACE: LazyLock<Space> = LazyLock::new(|| Space::build(Some(" "), Vec::new()));

impl Space {
    /// The canonical zero-byte space.
    pub fn empty() -> Self {
        EMPTY.clone()
    }

    /// A shared single blank.
    pub fn single_space() -> Self {
        SINGLE_SPACE.clone()
    }

    pub fn build(whitespace: Option<&str>, comments: Vec<Comment>) -> Self {
        if comments.is_empty() && whitespace.is_none() {
            return Self::empty();
        }
        Space(Arc::new(SpaceData {
            comments,
            whitespace: whitespace.map(Arc::from),
        }))
    }

    /// Parse `#` comments out of raw trivia text.
    ///
    /// Text before the first `#` becomes the whitespace; each comment runs to
    /// the end of its line and the rest up to the next `#` becomes its suffix.
    pub fn format(formatting: &str) -> Self {
        if formatting.is_empty() {
            return Self::empty();
        }
        let Some(first) = formatting.find('#') else {
            return Self::build(Some(formatting), Vec::new());
        };
        let whitespace = &formatting[..first];
        let mut comments = Vec::new();
        let mut rest = &formatting[first..];
        while let Some(body) = rest.strip_prefix('#') {
            let end = body.find('\n').unwrap_or(body.len());
            let text = &body[..end];
            let after = &body[end..];
            let next = after.find('#').unwrap_or(after.len());
            comments.push(Comment::new(text, &after[..next], false));
            rest = &after[next..];
        }
        Self::build(Some(whitespace), comments)
    }

    pub fn comments(&self) -> &[Comment] {
        &self.0.comments
    }

    /// Leading whitespace, or `""` when absent.
    pub fn whitespace(&self) -> &str {
        self.0.whitespace.as_deref().unwrap_or("")
    }

    /// Leading whitespace, keeping the absent/empty distinction.
    pub fn raw_whitespace(&self) -> Option<&str> {
        self.0.whitespace.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.0.comments.is_empty() && self.whitespace().is_empty()
    }

    /// The whitespace after the last comment, or the leading whitespace.
    pub fn last_whitespace(&self) -> &str {
        match self.0.comments.last() {
            Some(comment) => comment.suffix(),
            None => self.whitespace(),
        }
    }

    /// The text after the final newline of the last whitespace.
    pub fn indent(&self) -> &str {
        let last = self.last_whitespace();
        match last.rfind('\n') {
            Some(pos) => &last[pos + 1..],
            None => last,
        }
    }

    pub fn with_whitespace(&self, whitespace: Option<&str>) -> Self {
        if self.0.whitespace.as_deref() == whitespace {
            return self.clone();
        }
        Self::build(whitespace, self.0.comments.clone())
    }

    pub fn with_comments(&self, comments: Vec<Comment>) -> Self {
        if comments == self.0.comments {
            return self.clone();
        }
        Self::build(self.0.whitespace.as_deref(), comments)
    }

    /// The prefix of the first element, or the empty space.
    pub fn first_prefix<T: HasPrefix>(seq: &[T]) -> Space {
        seq.first()
            .map(|t| t.prefix().clone())
            .unwrap_or_else(Space::empty)
    }

    /// `seq` with the first element's prefix replaced when it differs.
    pub fn format_first_prefix<T: HasPrefix + Clone>(seq: &[T], prefix: Space) -> Vec<T> {
        let mut out = seq.to_vec();
        if let Some(first) = out.first_mut() {
            if *first.prefix() != prefix {
                *first = first.with_prefix(prefix);
            }
        }
        out
    }
}

impl Default for Space {
    fn default() -> Self {
        Self::empty()
    }
}

impl Same for Space {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Values that carry a leading [`Space`].
pub trait HasPrefix {
    fn prefix(&self) -> &Space;
    fn with_prefix(&self, prefix: Space) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_space_is_canonical() {
        assert!(Space::empty().same(&Space::empty()));
        assert!(Space::build(None, Vec::new()).same(&Space::empty()));
        assert!(Space::format("").same(&Space::empty()));
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(Space::format("  "), Space::format("  "));
        assert_ne!(Space::format("  "), Space::format(" "));
        assert!(!Space::format("  ").same(&Space::format("  ")));
    }

    #[test]
    fn indent_follows_the_last_newline() {
        assert_eq!(Space::format("\n    ").indent(), "    ");
        assert_eq!(Space::format("  ").indent(), "  ");
        let commented = Space::format("  # keep\n        ");
        assert_eq!(commented.comments().len(), 1);
        assert_eq!(commented.comments()[0].text(), " keep");
        assert_eq!(commented.indent(), "        ");
    }

    #[test]
    fn format_splits_consecutive_comments() {
        let space = Space::format(" #a\n#b\n  ");
        assert_eq!(space.whitespace(), " ");
        let texts: Vec<_> = space.comments().iter().map(Comment::text).collect();
        assert_eq!(texts, vec!["a", "b"]);
        assert_eq!(space.comments()[0].suffix(), "\n");
        assert_eq!(space.last_whitespace(), "\n  ");
    }

    #[test]
    fn whitespace_none_and_empty_are_distinct() {
        let none = Space::empty();
        let blank = none.with_whitespace(Some(""));
        assert_ne!(none, blank);
        assert_eq!(blank.whitespace(), none.whitespace());
        assert!(blank.is_empty());
    }

    #[derive(Clone)]
    struct Tok(Space);

    impl HasPrefix for Tok {
        fn prefix(&self) -> &Space {
            &self.0
        }
        fn with_prefix(&self, prefix: Space) -> Self {
            Tok(prefix)
        }
    }

    #[test]
    fn first_prefix_helpers() {
        let empty: Vec<Tok> = Vec::new();
        assert!(Space::first_prefix(&empty).same(&Space::empty()));

        let seq = vec![Tok(Space::format(" ")), Tok(Space::format("\n"))];
        assert_eq!(Space::first_prefix(&seq).whitespace(), " ");
        let formatted = Space::format_first_prefix(&seq, Space::format("\n\n"));
        assert_eq!(formatted[0].0.whitespace(), "\n\n");
        assert_eq!(formatted[1].0.whitespace(), "\n");
    }
}
