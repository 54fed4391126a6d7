// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Error types for structural violations of the lossless source tree.
//!
//! Every error here is raised synchronously by the operation that detects
//! it. Trees are immutable, so a failed rebuild leaves the original intact
//! and there is no recovery path inside the core.

use thiserror::Error;

use crate::id::Id;
use crate::java_type::TypeId;

/// Result alias used throughout the core crates.
pub type LstResult<T> = std::result::Result<T, LstError>;

/// A violated tree invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LstError {
    /// The same id appears twice in one padded list.
    #[error("duplicate id {id} in padded list")]
    DuplicateId { id: Id },

    /// A slot received a node of a variant it cannot hold.
    #[error("slot '{slot}' expected {expected} but found {found}")]
    WrongVariant {
        slot: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A visit returned no node for a slot that is not optional.
    #[error("{node}.{slot} is required but the visit removed it")]
    RequiredSlotRemoved {
        node: &'static str,
        slot: &'static str,
    },

    /// A type reference does not resolve in the type table.
    #[error("type {0} is not present in the type table")]
    UnknownType(TypeId),
}

impl LstError {
    /// Shorthand for a wrong-variant error in the named slot.
    pub fn wrong_variant(slot: &'static str, expected: &'static str, found: &'static str) -> Self {
        LstError::WrongVariant {
            slot,
            expected,
            found,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_slot() {
        let err = LstError::wrong_variant("Binary.left", "expression", "Block");
        assert_eq!(
            err.to_string(),
            "slot 'Binary.left' expected expression but found Block"
        );

        let err = LstError::RequiredSlotRemoved {
            node: "If",
            slot: "then_part",
        };
        assert_eq!(err.to_string(), "If.then_part is required but the visit removed it");
    }
}
