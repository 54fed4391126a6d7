// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Envelopes that pin trivia to one syntactic position.
//!
//! - [`RightPadded`]: an element followed by trailing space (arguments,
//!   statements followed by a separator).
//! - [`LeftPadded`]: an element preceded by leading space (the operator of a
//!   binary, the initializer after `=`).
//! - [`Container`]: a delimited list of right-padded elements with the space
//!   before the opening delimiter.
//!
//! All three are immutable and shared by reference. Every `with_*` returns
//! the receiver itself when the new value is the one already held.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{LstError, LstResult};
use crate::id::{HasId, Id, Same};
use crate::markers::Markers;
use crate::space::Space;

// ============================================================================
// RightPadded
// ============================================================================

#[derive(Debug, PartialEq)]
struct RightPaddedData<T> {
    element: T,
    after: Space,
    markers: Markers,
}

/// An element followed by its trailing space.
#[derive(Debug)]
pub struct RightPadded<T>(Arc<RightPaddedData<T>>);

impl<T> Clone for RightPadded<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: PartialEq> PartialEq for RightPadded<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Same for RightPadded<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> RightPadded<T> {
    pub fn new(element: T, after: Space, markers: Markers) -> Self {
        Self(Arc::new(RightPaddedData {
            element,
            after,
            markers,
        }))
    }

    /// Wrap an element with no trailing space.
    pub fn build(element: T) -> Self {
        Self::new(element, Space::empty(), Markers::empty())
    }

    pub fn element(&self) -> &T {
        &self.0.element
    }

    pub fn after(&self) -> &Space {
        &self.0.after
    }

    pub fn markers(&self) -> &Markers {
        &self.0.markers
    }
}

impl<T: Clone + Same> RightPadded<T> {
    pub fn with_element(&self, element: T) -> Self {
        if element.same(&self.0.element) {
            return self.clone();
        }
        Self::new(element, self.0.after.clone(), self.0.markers.clone())
    }

    pub fn with_after(&self, after: Space) -> Self {
        if after.same(&self.0.after) {
            return self.clone();
        }
        Self::new(self.0.element.clone(), after, self.0.markers.clone())
    }

    pub fn with_markers(&self, markers: Markers) -> Self {
        if markers.same(&self.0.markers) {
            return self.clone();
        }
        Self::new(self.0.element.clone(), self.0.after.clone(), markers)
    }

    /// The bare elements of a padded list.
    pub fn get_elements(list: &[RightPadded<T>]) -> Vec<T> {
        list.iter().map(|rp| rp.element().clone()).collect()
    }
}

impl<T: Clone + Same + HasId> RightPadded<T> {
    /// Rebuild a padded list around new elements.
    ///
    /// Elements whose id was already in `old` keep their envelope; new ids get
    /// an empty envelope; ids missing from `elements` are dropped. When every
    /// element is the one already held, `old` comes back unchanged.
    pub fn with_elements(old: &[RightPadded<T>], elements: Vec<T>) -> LstResult<Vec<RightPadded<T>>> {
        if old.len() == elements.len()
            && old.iter().zip(&elements).all(|(rp, e)| rp.element().same(e))
        {
            return Ok(old.to_vec());
        }
        if elements.is_empty() {
            return Ok(Vec::new());
        }

        let mut by_id: HashMap<Id, &RightPadded<T>> = HashMap::with_capacity(old.len());
        for rp in old {
            let id = rp.element().id();
            if by_id.insert(id, rp).is_some() {
                return Err(LstError::DuplicateId { id });
            }
        }

        Ok(elements
            .into_iter()
            .map(|element| match by_id.get(&element.id()) {
                Some(existing) => existing.with_element(element),
                None => RightPadded::build(element),
            })
            .collect())
    }
}

// ============================================================================
// LeftPadded
// ============================================================================

#[derive(Debug, PartialEq)]
struct LeftPaddedData<T> {
    before: Space,
    element: T,
    markers: Markers,
}

/// An element preceded by its leading space.
#[derive(Debug)]
pub struct LeftPadded<T>(Arc<LeftPaddedData<T>>);

impl<T> Clone for LeftPadded<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: PartialEq> PartialEq for LeftPadded<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Same for LeftPadded<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> LeftPadded<T> {
    pub fn new(before: Space, element: T, markers: Markers) -> Self {
        Self(Arc::new(LeftPaddedData {
            before,
            element,
            markers,
        }))
    }

    /// Wrap an element with no leading space.
    pub fn build(element: T) -> Self {
        Self::new(Space::empty(), element, Markers::empty())
    }

    pub fn before(&self) -> &Space {
        &self.0.before
    }

    pub fn element(&self) -> &T {
        &self.0.element
    }

    pub fn markers(&self) -> &Markers {
        &self.0.markers
    }
}

impl<T: Clone + Same> LeftPadded<T> {
    pub fn with_element(&self, element: T) -> Self {
        if element.same(&self.0.element) {
            return self.clone();
        }
        Self::new(self.0.before.clone(), element, self.0.markers.clone())
    }

    pub fn with_before(&self, before: Space) -> Self {
        if before.same(&self.0.before) {
            return self.clone();
        }
        Self::new(before, self.0.element.clone(), self.0.markers.clone())
    }

    pub fn with_markers(&self, markers: Markers) -> Self {
        if markers.same(&self.0.markers) {
            return self.clone();
        }
        Self::new(self.0.before.clone(), self.0.element.clone(), markers)
    }
}

// ============================================================================
// Container
// ============================================================================

#[derive(Debug, PartialEq)]
struct ContainerData<T> {
    before: Space,
    elements: Vec<RightPadded<T>>,
    markers: Markers,
}

/// A delimited list of right-padded elements.
#[derive(Debug)]
pub struct Container<T>(Arc<ContainerData<T>>);

impl<T> Clone for Container<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: PartialEq> PartialEq for Container<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Same for Container<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Container<T> {
    pub fn new(before: Space, elements: Vec<RightPadded<T>>, markers: Markers) -> Self {
        Self(Arc::new(ContainerData {
            before,
            elements,
            markers,
        }))
    }

    /// A container with no elements and no space.
    pub fn empty() -> Self {
        Self::new(Space::empty(), Vec::new(), Markers::empty())
    }

    pub fn before(&self) -> &Space {
        &self.0.before
    }

    /// The padded elements (the padding facet of this container).
    pub fn padded_elements(&self) -> &[RightPadded<T>] {
        &self.0.elements
    }

    pub fn markers(&self) -> &Markers {
        &self.0.markers
    }

    pub fn len(&self) -> usize {
        self.0.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.elements.is_empty()
    }
}

impl<T: Clone + Same> Container<T> {
    /// The bare elements.
    pub fn elements(&self) -> Vec<T> {
        RightPadded::get_elements(&self.0.elements)
    }

    pub fn with_before(&self, before: Space) -> Self {
        if before.same(&self.0.before) {
            return self.clone();
        }
        Self::new(before, self.0.elements.clone(), self.0.markers.clone())
    }

    pub fn with_markers(&self, markers: Markers) -> Self {
        if markers.same(&self.0.markers) {
            return self.clone();
        }
        Self::new(self.0.before.clone(), self.0.elements.clone(), markers)
    }

    pub fn with_padded_elements(&self, elements: Vec<RightPadded<T>>) -> Self {
        if elements.same(&self.0.elements) {
            return self.clone();
        }
        Self::new(self.0.before.clone(), elements, self.0.markers.clone())
    }
}

impl<T: Clone + Same + HasId> Container<T> {
    /// Replace the elements, keeping the envelopes of surviving ids.
    pub fn with_elements(&self, elements: Vec<T>) -> LstResult<Self> {
        let padded = RightPadded::with_elements(&self.0.elements, elements)?;
        Ok(self.with_padded_elements(padded))
    }

    /// Like [`Container::with_elements`], but an empty list yields `None`.
    pub fn with_elements_nullable(
        container: Option<&Self>,
        elements: Vec<T>,
    ) -> LstResult<Option<Self>> {
        if elements.is_empty() {
            return Ok(None);
        }
        match container {
            Some(c) => c.with_elements(elements).map(Some),
            None => Ok(Some(Container::empty().with_elements(elements)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Leaf(Arc<(Id, &'static str)>);

    impl Leaf {
        fn new(name: &'static str) -> Self {
            Leaf(Arc::new((Id::random(), name)))
        }

        fn renamed(&self, name: &'static str) -> Self {
            Leaf(Arc::new((self.0 .0, name)))
        }
    }

    impl HasId for Leaf {
        fn id(&self) -> Id {
            self.0 .0
        }
    }

    impl Same for Leaf {
        fn same(&self, other: &Self) -> bool {
            self.0.same(&other.0)
        }
    }

    fn padded(leaves: &[Leaf], after: &str) -> Vec<RightPadded<Leaf>> {
        leaves
            .iter()
            .map(|l| RightPadded::new(l.clone(), Space::format(after), Markers::empty()))
            .collect()
    }

    #[test]
    fn unchanged_elements_keep_the_container() {
        let leaves = [Leaf::new("a"), Leaf::new("b")];
        let c = Container::new(Space::format(" "), padded(&leaves, " "), Markers::empty());
        let same = c.with_elements(c.elements()).unwrap();
        assert!(same.same(&c));
    }

    #[test]
    fn with_elements_reuses_envelopes_by_id() {
        let a = Leaf::new("a");
        let b = Leaf::new("b");
        let old = padded(&[a.clone(), b.clone()], "  ");
        let c = Leaf::new("c");
        let b2 = b.renamed("b2");

        let new = RightPadded::with_elements(&old, vec![b2.clone(), c.clone()]).unwrap();
        assert_eq!(new.len(), 2);
        assert!(new[0].element().same(&b2));
        assert_eq!(new[0].after().whitespace(), "  ");
        assert!(new[1].element().same(&c));
        assert!(new[1].after().same(&Space::empty()));
    }

    #[test]
    fn with_elements_rejects_duplicate_ids() {
        let a = Leaf::new("a");
        let old = padded(&[a.clone(), a.clone()], "");
        let err = RightPadded::with_elements(&old, vec![Leaf::new("z")]).unwrap_err();
        assert_eq!(err, LstError::DuplicateId { id: a.id() });
    }

    #[test]
    fn empty_elements_collapse_to_none() {
        let c = Container::new(Space::empty(), padded(&[Leaf::new("a")], ""), Markers::empty());
        assert!(Container::with_elements_nullable(Some(&c), Vec::new())
            .unwrap()
            .is_none());
        let fresh = Container::with_elements_nullable(None, vec![Leaf::new("x")])
            .unwrap()
            .unwrap();
        assert_eq!(fresh.len(), 1);
    }

    #[test]
    fn left_padded_identity() {
        let lp = LeftPadded::new(Space::format(" "), true, Markers::empty());
        assert!(lp.with_element(true).same(&lp));
        assert!(!lp.with_element(false).same(&lp));
        assert!(lp.with_before(lp.before().clone()).same(&lp));
    }
}
