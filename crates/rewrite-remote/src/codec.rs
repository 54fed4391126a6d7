// Copyright (c) Ken Kocienda and other contributors.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! CBOR primitives shared by the sender and receiver.
//!
//! Every field on the wire starts with a [`State`] tag. Values that follow
//! a tag are plain CBOR items: strings, integers, booleans, 16-byte ids,
//! and definite-length arrays for trivia. Decoding goes through the
//! `read_*` helpers, which enforce the [`RemotingConfig`] limits.

use std::sync::Arc;

use minicbor::data::Type;
use minicbor::{Decoder, Encoder};
use rewrite_core::{Comment, Id, Marker, Markers, Space};
use rewrite_tree::WireValue;

use crate::config::RemotingConfig;
use crate::error::{RemoteError, RemoteResult};

pub type WireEncoder<'a> = Encoder<&'a mut Vec<u8>>;

/// Framing tag in front of every field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// The receiver keeps its previous value.
    NoChange = 0,
    /// A new value follows.
    Add = 1,
    /// Deltas against the receiver's previous value follow.
    Change = 2,
    /// The field is now absent.
    Delete = 3,
}

impl State {
    pub fn from_tag(tag: u8) -> RemoteResult<Self> {
        match tag {
            0 => Ok(State::NoChange),
            1 => Ok(State::Add),
            2 => Ok(State::Change),
            3 => Ok(State::Delete),
            other => Err(RemoteError::UnexpectedState(other)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            State::NoChange => "NO_CHANGE",
            State::Add => "ADD",
            State::Change => "CHANGE",
            State::Delete => "DELETE",
        }
    }
}

pub fn write_state(enc: &mut WireEncoder<'_>, state: State) -> RemoteResult<()> {
    enc.u8(state as u8)?;
    Ok(())
}

pub fn read_state(dec: &mut Decoder<'_>) -> RemoteResult<State> {
    State::from_tag(dec.u8()?)
}

// ============================================================================
// Limited reads
// ============================================================================

pub fn read_str<'b>(dec: &mut Decoder<'b>, config: &RemotingConfig) -> RemoteResult<&'b str> {
    if matches!(dec.datatype()?, Type::StringIndef) {
        return Err(RemoteError::malformed("definite-length string", "indefinite string"));
    }
    let s = dec.str()?;
    if s.len() > config.max_string_len {
        return Err(RemoteError::DecodeLimit("max_string_len"));
    }
    Ok(s)
}

pub fn read_len(dec: &mut Decoder<'_>, config: &RemotingConfig) -> RemoteResult<usize> {
    let len = dec.u64()?;
    if len > config.max_list_len as u64 {
        return Err(RemoteError::DecodeLimit("max_list_len"));
    }
    usize::try_from(len).map_err(|_| RemoteError::DecodeLimit("max_list_len"))
}

pub fn read_array_len(dec: &mut Decoder<'_>, config: &RemotingConfig) -> RemoteResult<usize> {
    let Some(len) = dec.array()? else {
        return Err(RemoteError::malformed("definite-length array", "indefinite array"));
    };
    if len > config.max_list_len as u64 {
        return Err(RemoteError::DecodeLimit("max_list_len"));
    }
    usize::try_from(len).map_err(|_| RemoteError::DecodeLimit("max_list_len"))
}

fn read_optional_str(dec: &mut Decoder<'_>, config: &RemotingConfig) -> RemoteResult<Option<Arc<str>>> {
    if dec.datatype()? == Type::Null {
        dec.null()?;
        return Ok(None);
    }
    Ok(Some(Arc::from(read_str(dec, config)?)))
}

fn write_optional_str(enc: &mut WireEncoder<'_>, value: Option<&str>) -> RemoteResult<()> {
    match value {
        Some(s) => enc.str(s)?,
        None => enc.null()?,
    };
    Ok(())
}

// ============================================================================
// Ids
// ============================================================================

pub fn write_id(enc: &mut WireEncoder<'_>, id: Id) -> RemoteResult<()> {
    enc.bytes(id.as_bytes())?;
    Ok(())
}

pub fn read_id(dec: &mut Decoder<'_>) -> RemoteResult<Id> {
    let bytes = dec.bytes()?;
    let bytes: [u8; 16] = bytes
        .try_into()
        .map_err(|_| RemoteError::malformed("16-byte id", format!("{} bytes", bytes.len())))?;
    Ok(Id::from_bytes(bytes))
}

// ============================================================================
// Markers
// ============================================================================

/// `[id, [[id, kind, detail|null], ...]]`
pub fn write_markers(enc: &mut WireEncoder<'_>, markers: &Markers) -> RemoteResult<()> {
    enc.array(2)?;
    write_id(enc, markers.id())?;
    enc.array(markers.entries().len() as u64)?;
    for marker in markers.entries() {
        enc.array(3)?;
        write_id(enc, marker.id())?;
        enc.str(marker.kind())?;
        write_optional_str(enc, marker.detail())?;
    }
    Ok(())
}

pub fn read_markers(dec: &mut Decoder<'_>, config: &RemotingConfig) -> RemoteResult<Markers> {
    expect_array(dec, 2, config)?;
    let id = read_id(dec)?;
    let len = read_array_len(dec, config)?;
    if id.is_nil() && len == 0 {
        return Ok(Markers::empty());
    }
    let mut entries = Vec::with_capacity(len);
    for _ in 0..len {
        expect_array(dec, 3, config)?;
        let marker_id = read_id(dec)?;
        let kind = read_str(dec, config)?;
        let detail = read_optional_str(dec, config)?;
        entries.push(Marker::new(marker_id, kind, detail));
    }
    Ok(Markers::build(id, entries))
}

// ============================================================================
// Space
// ============================================================================

/// `[whitespace|null, [[text, suffix, multiline, markers], ...]]`
pub fn write_space(enc: &mut WireEncoder<'_>, space: &Space) -> RemoteResult<()> {
    enc.array(2)?;
    write_optional_str(enc, space.raw_whitespace())?;
    enc.array(space.comments().len() as u64)?;
    for comment in space.comments() {
        enc.array(4)?;
        enc.str(comment.text())?;
        enc.str(comment.suffix())?;
        enc.bool(comment.is_multiline())?;
        write_markers(enc, comment.markers())?;
    }
    Ok(())
}

pub fn read_space(dec: &mut Decoder<'_>, config: &RemotingConfig) -> RemoteResult<Space> {
    expect_array(dec, 2, config)?;
    let whitespace = read_optional_str(dec, config)?;
    let len = read_array_len(dec, config)?;
    let mut comments = Vec::with_capacity(len);
    for _ in 0..len {
        expect_array(dec, 4, config)?;
        let text = read_str(dec, config)?;
        let suffix = read_str(dec, config)?;
        let multiline = dec.bool()?;
        let markers = read_markers(dec, config)?;
        comments.push(Comment::new(text, suffix, multiline).with_markers(markers));
    }
    Ok(Space::build(whitespace.as_deref(), comments))
}

// ============================================================================
// Scalars
// ============================================================================

pub fn write_value(enc: &mut WireEncoder<'_>, value: &WireValue) -> RemoteResult<()> {
    match value {
        WireValue::Null => enc.null()?,
        WireValue::Bool(b) => enc.bool(*b)?,
        WireValue::Int(i) => enc.i64(*i)?,
        WireValue::Float(f) => enc.f64(*f)?,
        WireValue::Str(s) => enc.str(s)?,
    };
    Ok(())
}

pub fn read_value(dec: &mut Decoder<'_>, config: &RemotingConfig) -> RemoteResult<WireValue> {
    Ok(match dec.datatype()? {
        Type::Null => {
            dec.null()?;
            WireValue::Null
        }
        Type::Bool => WireValue::Bool(dec.bool()?),
        Type::U8 | Type::U16 | Type::U32 | Type::U64 | Type::I8 | Type::I16 | Type::I32 | Type::I64 => {
            WireValue::Int(dec.i64()?)
        }
        Type::F16 | Type::F32 | Type::F64 => WireValue::Float(dec.f64()?),
        Type::String => WireValue::Str(Arc::from(read_str(dec, config)?)),
        other => return Err(RemoteError::malformed("scalar value", format!("{other:?}"))),
    })
}

fn expect_array(dec: &mut Decoder<'_>, len: usize, config: &RemotingConfig) -> RemoteResult<()> {
    let found = read_array_len(dec, config)?;
    if found != len {
        return Err(RemoteError::malformed("array length", found));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(f: impl FnOnce(&mut WireEncoder<'_>) -> RemoteResult<()>) -> Vec<u8> {
        let mut buf = Vec::new();
        let mut enc = Encoder::new(&mut buf);
        f(&mut enc).unwrap();
        buf
    }

    #[test]
    fn space_keeps_absent_versus_empty_whitespace() {
        let config = RemotingConfig::default();
        let absent = Space::build(None, vec![Comment::new(" note", "\n", false)]);
        let empty = Space::build(Some(""), vec![Comment::new(" note", "\n", false)]);

        let bytes = encode(|enc| write_space(enc, &absent));
        let decoded = read_space(&mut Decoder::new(&bytes), &config).unwrap();
        assert_eq!(decoded.raw_whitespace(), None);
        assert_eq!(decoded, absent);

        let bytes = encode(|enc| write_space(enc, &empty));
        let decoded = read_space(&mut Decoder::new(&bytes), &config).unwrap();
        assert_eq!(decoded.raw_whitespace(), Some(""));
    }

    #[test]
    fn empty_markers_decode_to_the_shared_bag() {
        let config = RemotingConfig::default();
        let bytes = encode(|enc| write_markers(enc, &Markers::empty()));
        let decoded = read_markers(&mut Decoder::new(&bytes), &config).unwrap();
        assert!(rewrite_core::Same::same(&decoded, &Markers::empty()));

        let marked = Markers::empty().add(Marker::search_result(Some("found")));
        let bytes = encode(|enc| write_markers(enc, &marked));
        let decoded = read_markers(&mut Decoder::new(&bytes), &config).unwrap();
        assert_eq!(decoded, marked);
    }

    #[test]
    fn long_strings_hit_the_limit() {
        let config = RemotingConfig {
            max_string_len: 4,
            ..RemotingConfig::default()
        };
        let bytes = encode(|enc| {
            enc.str("too long")?;
            Ok(())
        });
        let err = read_str(&mut Decoder::new(&bytes), &config).unwrap_err();
        assert!(matches!(err, RemoteError::DecodeLimit("max_string_len")));
    }

    #[test]
    fn unknown_state_tag() {
        assert!(matches!(State::from_tag(9), Err(RemoteError::UnexpectedState(9))));
        assert_eq!(State::from_tag(2).unwrap().name(), "CHANGE");
    }
}
