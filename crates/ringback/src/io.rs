use alloc::collections::VecDeque;
use std::io::{ErrorKind, Read};

use thiserror::Error;

use crate::{
    decode::{DecodeError, decode_front},
    source::CharSource,
};

/// Bytes pulled from the underlying reader per refill.
const CHUNK: usize = 4096;

/// Error returned by [`ReadSource`].
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying reader failed.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),
    /// The byte stream is not valid UTF-8.
    #[error("{0}")]
    Decode(#[from] DecodeError),
}

/// Character source decoding UTF-8 from any [`Read`] implementation.
///
/// Bytes are staged in an internal window, refilled in 4 KiB reads, so one
/// scalar is decoded per pull regardless of how the reader chunks its
/// output. Interrupted reads are retried; any other I/O error
/// is propagated.
#[derive(Debug)]
pub struct ReadSource<R> {
    reader: R,
    window: VecDeque<u8>,
    eof: bool,
}

impl<R: Read> ReadSource<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            window: VecDeque::with_capacity(CHUNK),
            eof: false,
        }
    }

    /// Consumes the source, returning the underlying reader.
    ///
    /// Bytes already staged in the window are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Tops the window up until it can hold a whole scalar or the reader
    /// runs dry.
    fn refill(&mut self) -> Result<(), std::io::Error> {
        let mut chunk = [0u8; CHUNK];
        while !self.eof && self.window.len() < 4 {
            match self.reader.read(&mut chunk) {
                Ok(0) => self.eof = true,
                Ok(n) => self.window.extend(chunk[..n].iter().copied()),
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }
}

impl<R: Read> CharSource for ReadSource<R> {
    type Error = ReadError;

    fn next_char(&mut self) -> Result<Option<char>, Self::Error> {
        self.refill()?;
        match decode_front(&self.window)? {
            Some((ch, size)) => {
                self.window.drain(..size);
                Ok(Some(ch))
            }
            None => Ok(None),
        }
    }
}
