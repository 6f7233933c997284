use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{ring::CharRing, source::CharSource, stream::CharStream};

/// A [`CharRing`] behind a mutex.
///
/// Exposes the same operations through `&self`, taking the lock for the
/// duration of each call and releasing it on every exit path. The adapter
/// adds mutual exclusion and nothing else: callers are serialized into a
/// total order with whatever fairness the platform lock provides.
#[derive(Debug)]
pub struct SyncCharRing<S> {
    inner: Mutex<CharRing<S>>,
}

impl<S: CharSource> SyncCharRing<S> {
    /// Wraps `source` with [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY)
    /// slots of pushback.
    pub fn new(source: S) -> Self {
        Self::from_ring(CharRing::new(source))
    }

    /// Wraps `source` with room to rewind up to `capacity` characters.
    pub fn with_capacity(source: S, capacity: usize) -> Self {
        Self::from_ring(CharRing::with_capacity(source, capacity))
    }

    /// Puts an already-configured ring behind a lock.
    pub fn from_ring(ring: CharRing<S>) -> Self {
        Self {
            inner: Mutex::new(ring),
        }
    }

    /// Reads the next character. See [`CharRing::read_char`].
    pub fn read_char(&self) -> Result<Option<char>, S::Error> {
        self.lock().read_char()
    }

    /// Makes the most recently read character readable again. See
    /// [`CharRing::unread_char`].
    pub fn unread_char(&self) {
        self.lock().unread_char();
    }

    /// Makes up to `count` previously read characters readable again. See
    /// [`CharRing::unread_chars`].
    pub fn unread_chars(&self, count: usize) {
        self.lock().unread_chars(count);
    }

    /// Number of slots in the ring.
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Buffered characters currently pending replay.
    pub fn pending(&self) -> usize {
        self.lock().pending()
    }

    /// Whether the source has been drained.
    pub fn is_exhausted(&self) -> bool {
        self.lock().is_exhausted()
    }

    /// Consumes the adapter, returning the bare ring.
    pub fn into_ring(self) -> CharRing<S> {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn lock(&self) -> MutexGuard<'_, CharRing<S>> {
        // A panicking holder cannot leave the ring mid-operation, so a
        // poisoned lock is recovered rather than surfaced.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: CharSource> CharStream for SyncCharRing<S> {
    type Error = S::Error;

    fn read_char(&mut self) -> Result<Option<char>, Self::Error> {
        SyncCharRing::read_char(self)
    }

    fn unread_char(&mut self) {
        SyncCharRing::unread_char(self);
    }

    fn unread_chars(&mut self, count: usize) {
        SyncCharRing::unread_chars(self, count);
    }
}
