// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Per-session state: the type arena and the reference tables on each side
//! of the wire.
//!
//! A session owns one [`TypeTable`]. Trees sent through the session are
//! attributed against it, and types received are decoded into it, so a peer
//! can send back what it received. A type crosses the wire in full once per
//! session. The sender remembers the handle it assigned; later uses send the
//! bare handle. The receiver keeps the handle to [`TypeId`] mapping. Both
//! reference tables survive across messages until [`reset`] is called.
//!
//! [`reset`]: RemotingContext::reset

use std::collections::HashMap;
use std::sync::Arc;

use minicbor::{Decoder, Encoder};
use rewrite_core::{TypeId, TypeTable};
use rewrite_tree::Tree;
use tracing::{debug, info_span};

use crate::config::RemotingConfig;
use crate::error::{RemoteError, RemoteResult};
use crate::factory::ReceiverFactory;
use crate::receiver::ReceiverContext;
use crate::registry::CodecRegistry;
use crate::sender::SenderContext;

#[derive(Debug)]
pub struct RemotingContext {
    config: RemotingConfig,
    registry: Arc<CodecRegistry>,
    factory: ReceiverFactory,
    sent: HashMap<TypeId, u32>,
    next_ref: u32,
    received: HashMap<u32, TypeId>,
    types: TypeTable,
}

impl RemotingContext {
    pub fn new(config: RemotingConfig, registry: Arc<CodecRegistry>) -> Self {
        let factory = ReceiverFactory::new(config.accept_short_type_names);
        Self {
            config,
            registry,
            factory,
            sent: HashMap::new(),
            next_ref: 0,
            received: HashMap::new(),
            types: TypeTable::new(),
        }
    }

    pub fn config(&self) -> &RemotingConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<CodecRegistry> {
        &self.registry
    }

    pub fn factory(&self) -> &ReceiverFactory {
        &self.factory
    }

    /// Start the session with `types` as its arena.
    pub fn with_types(mut self, types: TypeTable) -> Self {
        self.types = types;
        self
    }

    /// The session's arena: types attributed locally and types received.
    pub fn types(&self) -> &TypeTable {
        &self.types
    }

    /// Add types that trees sent through this session refer to.
    pub fn types_mut(&mut self) -> &mut TypeTable {
        &mut self.types
    }

    /// Forget every reference on both sides.
    ///
    /// The arena is kept, so `TypeId`s handed out earlier stay valid.
    pub fn reset(&mut self) {
        debug!(sent = self.sent.len(), received = self.received.len(), "resetting remoting context");
        self.sent.clear();
        self.next_ref = 0;
        self.received.clear();
    }

    /// Encode `after` as a diff against `before`.
    ///
    /// Type attributions in `after` resolve in [`types`](Self::types).
    pub fn send(&mut self, after: &Tree, before: Option<&Tree>) -> RemoteResult<Vec<u8>> {
        let _span = info_span!("send", kind = after.kind(), diff = before.is_some()).entered();
        let mut buf = Vec::new();
        let mut sender = SenderContext::new(self, Encoder::new(&mut buf));
        sender.send_node(Some(after), before)?;
        debug!(bytes = buf.len(), "encoded tree");
        Ok(buf)
    }

    /// Decode a message against the receiver's copy of the tree.
    ///
    /// Returns `None` when the message deletes the root.
    pub fn receive(&mut self, bytes: &[u8], before: Option<&Tree>) -> RemoteResult<Option<Tree>> {
        let _span = info_span!("receive", bytes = bytes.len(), diff = before.is_some()).entered();
        let mut receiver = ReceiverContext::new(self, Decoder::new(bytes));
        let tree = receiver.receive_node(before)?;
        receiver.finish()?;
        Ok(tree)
    }

    // ------------------------------------------------------------------------
    // Sender side
    // ------------------------------------------------------------------------

    pub(crate) fn sent_ref(&self, id: TypeId) -> Option<u32> {
        self.sent.get(&id).copied()
    }

    pub(crate) fn allocate_ref(&mut self, id: TypeId) -> u32 {
        let handle = self.next_ref;
        self.next_ref += 1;
        self.sent.insert(id, handle);
        debug!(%id, handle, "assigned type reference");
        handle
    }

    // ------------------------------------------------------------------------
    // Receiver side
    // ------------------------------------------------------------------------

    pub(crate) fn resolve_ref(&self, handle: u32) -> RemoteResult<TypeId> {
        self.received
            .get(&handle)
            .copied()
            .ok_or(RemoteError::UnknownReference(handle))
    }

    /// Reserve an arena slot for `handle` so that cycles back to it resolve
    /// while its fields are still being decoded.
    ///
    /// A handle is defined once per session.
    pub(crate) fn bind_ref(&mut self, handle: u32) -> RemoteResult<TypeId> {
        if self.received.contains_key(&handle) {
            return Err(RemoteError::malformed("new type reference", format!("redefinition of {handle}")));
        }
        let id = self.types.reserve();
        self.received.insert(handle, id);
        debug!(%id, handle, "bound type reference");
        Ok(id)
    }
}

impl Default for RemotingContext {
    fn default() -> Self {
        Self::new(RemotingConfig::default(), Arc::new(CodecRegistry::with_java_types()))
    }
}
