//! On-demand UTF-8 decoding over chunked byte storage.
//!
//! Byte-fed sources keep raw input in a `VecDeque<u8>` and decode exactly
//! one scalar per pull. The deque exposes its contents as two contiguous
//! slices, so a scalar can straddle the slice boundary; at most four bytes
//! are assembled on the stack before handing them to [`bstr::decode_utf8`].
//!
//! Decoding is strict. A malformed lead or continuation byte is
//! [`DecodeError::InvalidUtf8`]; input that ends mid-sequence is
//! [`DecodeError::Truncated`]. Neither consumes anything, so a caller may
//! append the missing bytes and pull again.

use alloc::collections::VecDeque;

use bstr::decode_utf8;
use thiserror::Error;

use crate::source::CharSource;

/// Errors produced while decoding the leading UTF-8 scalar of a byte
/// stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The leading bytes do not form a valid UTF-8 sequence.
    #[error("invalid UTF-8 sequence starting with byte 0x{0:02X}")]
    InvalidUtf8(u8),
    /// The input ends in the middle of a multi-byte sequence.
    #[error("truncated UTF-8 sequence: have {have} of {need} bytes")]
    Truncated {
        /// Bytes present from the start of the sequence.
        have: usize,
        /// Bytes the lead byte calls for.
        need: usize,
    },
}

/// Bytes a UTF-8 sequence occupies, judging by its lead byte.
fn sequence_len(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

/// Decodes the first scalar in `data` without consuming it, returning the
/// character and its encoded length.
pub(crate) fn decode_front(data: &VecDeque<u8>) -> Result<Option<(char, usize)>, DecodeError> {
    let (front, back) = data.as_slices();
    let Some(&lead) = front.first().or_else(|| back.first()) else {
        return Ok(None);
    };
    let Some(need) = sequence_len(lead) else {
        return Err(DecodeError::InvalidUtf8(lead));
    };

    // Common case: the whole scalar sits in the front slice.
    if front.len() >= need {
        return match decode_utf8(&front[..need]) {
            (Some(ch), size) => Ok(Some((ch, size))),
            (None, _) => Err(DecodeError::InvalidUtf8(lead)),
        };
    }

    // The scalar straddles the slice boundary, or the input runs short:
    // assemble up to four bytes on the stack and decode from there.
    let have = data.len().min(need);
    if have < need {
        return Err(DecodeError::Truncated { have, need });
    }
    let mut head = [0u8; 4];
    for (slot, byte) in head.iter_mut().zip(data.iter()) {
        *slot = *byte;
    }
    match decode_utf8(&head[..need]) {
        (Some(ch), size) => Ok(Some((ch, size))),
        (None, _) => Err(DecodeError::InvalidUtf8(lead)),
    }
}

/// In-memory byte source that decodes one UTF-8 scalar per pull.
///
/// Exhausted once every pushed byte has been decoded. A decode error
/// leaves the pending bytes untouched.
#[derive(Debug, Default)]
pub struct ByteSource {
    data: VecDeque<u8>,
}

impl ByteSource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            data: VecDeque::new(),
        }
    }

    /// Appends raw bytes to the pending input.
    ///
    /// Chunks need not align to character boundaries; a scalar split
    /// across two pushes decodes once both halves are present.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.data.reserve(bytes.len());
        self.data.extend(bytes.iter().copied());
    }

    /// Appends text to the pending input.
    pub fn push_str(&mut self, text: &str) {
        self.push_bytes(text.as_bytes());
    }

    /// Bytes not yet decoded.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len()
    }
}

impl From<&str> for ByteSource {
    fn from(text: &str) -> Self {
        let mut source = Self::new();
        source.push_str(text);
        source
    }
}

impl From<&[u8]> for ByteSource {
    fn from(bytes: &[u8]) -> Self {
        let mut source = Self::new();
        source.push_bytes(bytes);
        source
    }
}

impl CharSource for ByteSource {
    type Error = DecodeError;

    fn next_char(&mut self) -> Result<Option<char>, Self::Error> {
        match decode_front(&self.data)? {
            Some((ch, size)) => {
                self.data.drain(..size);
                Ok(Some(ch))
            }
            None => Ok(None),
        }
    }
}
