// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Stable node identity.
//!
//! Every tree node, envelope bag, and marker carries an [`Id`]: a 128-bit
//! identifier assigned at construction. Copy-on-write updates keep the id,
//! which makes it the join key between a tree before and after a rewrite
//! and between the two peers of a remoting session.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stable, unique identifier for a tree element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Id(Uuid);

impl Id {
    /// Generate a fresh random id.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// The all-zero id, used by placeholders that are filled in later.
    pub const fn nil() -> Self {
        Self(Uuid::nil())
    }

    /// Build an id from its 16 raw bytes.
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// The 16 raw bytes of this id, as written on the wire.
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// The wrapped uuid.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for Id {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything that exposes a stable [`Id`].
///
/// Padded lists use this to pair a new element with the envelope it had
/// before the rewrite.
pub trait HasId {
    fn id(&self) -> Id;
}

impl<T: HasId + ?Sized> HasId for Arc<T> {
    fn id(&self) -> Id {
        (**self).id()
    }
}

/// Identity comparison in the copy-on-write sense.
///
/// `a.same(&b)` is true when `b` is the very value `a` holds: the same
/// allocation for shared values, plain equality for scalars. Every `with_*`
/// returns its receiver unchanged when the new value is `same` as the old.
pub trait Same {
    fn same(&self, other: &Self) -> bool;
}

impl<T: ?Sized> Same for Arc<T> {
    fn same(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: Same> Same for Option<T> {
    fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Same> Same for Vec<T> {
    fn same(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.same(b))
    }
}

macro_rules! same_by_eq {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Same for $ty {
                fn same(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

same_by_eq!(bool, u8, u32, i64, char, Id);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_bytes() {
        let id = Id::random();
        assert_eq!(Id::from_bytes(*id.as_bytes()), id);
        assert!(Id::nil().is_nil());
        assert!(!id.is_nil());
    }

    #[test]
    fn shared_values_compare_by_allocation() {
        let a: Arc<str> = Arc::from("x");
        let b: Arc<str> = Arc::from("x");
        assert!(a.same(&a.clone()));
        assert!(!a.same(&b));
        assert!(Some(a.clone()).same(&Some(a)));
    }
}
