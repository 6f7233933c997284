/// Capability interface over pushback character streams.
///
/// Both the bare [`CharRing`](crate::CharRing) and the mutex-guarded
/// [`SyncCharRing`](crate::SyncCharRing) implement this trait, so code that
/// only needs `{read, unread}` can stay generic over whether access is
/// serialized.
pub trait CharStream {
    /// Error produced when pulling from the underlying source fails.
    type Error;

    /// Reads the next character, replaying buffered history before touching
    /// the source. `Ok(None)` signals end of input and is sticky.
    fn read_char(&mut self) -> Result<Option<char>, Self::Error>;

    /// Makes the most recently read character readable again. Equivalent to
    /// `unread_chars(1)`.
    fn unread_char(&mut self);

    /// Makes up to `count` previously read characters readable again,
    /// newest first. Requests beyond the rewindable history saturate
    /// silently; this never fails.
    fn unread_chars(&mut self, count: usize);
}
