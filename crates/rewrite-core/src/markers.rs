// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Opaque per-node metadata.
//!
//! A [`Markers`] bag is attached to every node and every envelope. The core
//! does not interpret markers beyond carrying them through rewrites and
//! across the wire; recipes use them to annotate nodes (search results,
//! syntax hints such as a trailing comma).

use std::sync::{Arc, LazyLock};

use crate::id::{Id, Same};

/// A single marker.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker {
    id: Id,
    kind: Arc<str>,
    detail: Option<Arc<str>>,
}

impl Marker {
    pub const SEARCH_RESULT: &'static str = "org.openrewrite.marker.SearchResult";
    pub const TRAILING_COMMA: &'static str = "org.openrewrite.java.marker.TrailingComma";

    pub fn new(id: Id, kind: impl Into<Arc<str>>, detail: Option<Arc<str>>) -> Self {
        Self {
            id,
            kind: kind.into(),
            detail,
        }
    }

    /// A search result marker with an optional description.
    pub fn search_result(description: Option<&str>) -> Self {
        Self::new(Id::random(), Self::SEARCH_RESULT, description.map(Arc::from))
    }

    /// A trailing comma marker; `suffix` is the whitespace after the comma.
    pub fn trailing_comma(suffix: &str) -> Self {
        Self::new(Id::random(), Self::TRAILING_COMMA, Some(Arc::from(suffix)))
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn detail(&self) -> Option<&str> {
        self.detail.as_deref()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct MarkersData {
    id: Id,
    entries: Vec<Marker>,
}

/// An immutable bag of markers with its own id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers(Arc<MarkersData>);

static EMPTY: LazyLock<Markers> = LazyLock::new(|| {
    Markers(Arc::new(MarkersData {
        id: Id::nil(),
        entries: Vec::new(),
    }))
});

impl Markers {
    /// The canonical empty bag.
    pub fn empty() -> Self {
        EMPTY.clone()
    }

    pub fn build(id: Id, entries: Vec<Marker>) -> Self {
        Markers(Arc::new(MarkersData { id, entries }))
    }

    pub fn id(&self) -> Id {
        self.0.id
    }

    pub fn entries(&self) -> &[Marker] {
        &self.0.entries
    }

    pub fn is_empty(&self) -> bool {
        self.0.entries.is_empty()
    }

    /// First marker of the given kind.
    pub fn find(&self, kind: &str) -> Option<&Marker> {
        self.0.entries.iter().find(|m| m.kind() == kind)
    }

    /// A copy with `marker` appended, or replacing the marker with the same id.
    pub fn add(&self, marker: Marker) -> Self {
        let mut entries = self.0.entries.clone();
        match entries.iter_mut().find(|m| m.id == marker.id) {
            Some(slot) if *slot == marker => return self.clone(),
            Some(slot) => *slot = marker,
            None => entries.push(marker),
        }
        let id = if self.0.id.is_nil() { Id::random() } else { self.0.id };
        Markers::build(id, entries)
    }

    /// A copy without markers of the given kind.
    pub fn remove(&self, kind: &str) -> Self {
        if self.find(kind).is_none() {
            return self.clone();
        }
        let entries = self
            .0
            .entries
            .iter()
            .filter(|m| m.kind() != kind)
            .cloned()
            .collect();
        Markers::build(self.0.id, entries)
    }

    pub fn with_entries(&self, entries: Vec<Marker>) -> Self {
        if entries == self.0.entries {
            return self.clone();
        }
        Markers::build(self.0.id, entries)
    }
}

impl Default for Markers {
    fn default() -> Self {
        Self::empty()
    }
}

impl Same for Markers {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_shared() {
        assert!(Markers::empty().same(&Markers::empty()));
        assert!(Markers::empty().is_empty());
    }

    #[test]
    fn add_find_remove() {
        let markers = Markers::empty().add(Marker::search_result(Some("found")));
        assert!(!markers.id().is_nil());
        let found = markers.find(Marker::SEARCH_RESULT);
        assert_eq!(found.and_then(Marker::detail), Some("found"));

        let removed = markers.remove(Marker::SEARCH_RESULT);
        assert!(removed.is_empty());
        assert_eq!(removed.id(), markers.id());
        assert!(removed.remove(Marker::SEARCH_RESULT).same(&removed));
    }

    #[test]
    fn re_adding_the_same_marker_is_a_no_op() {
        let marker = Marker::trailing_comma(" ");
        let markers = Markers::empty().add(marker.clone());
        assert!(markers.add(marker).same(&markers));
    }
}
