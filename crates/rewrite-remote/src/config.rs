// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Receiver limits and name resolution settings.

use serde::{Deserialize, Serialize};

/// Settings for one remoting session.
///
/// Hosts usually deserialize this from JSON; any omitted field keeps its
/// default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemotingConfig {
    /// Deepest node or type nesting the receiver will decode.
    pub max_depth: usize,
    /// Longest string the receiver will accept, in bytes.
    pub max_string_len: usize,
    /// Most elements the receiver will accept in one list.
    pub max_list_len: usize,
    /// Accept `rewrite.java.tree.If.Else` style aliases besides canonical names.
    pub accept_short_type_names: bool,
}

impl Default for RemotingConfig {
    fn default() -> Self {
        Self {
            max_depth: 512,
            max_string_len: 16 * 1024 * 1024,
            max_list_len: 1024 * 1024,
            accept_short_type_names: true,
        }
    }
}
