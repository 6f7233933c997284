//! Pushback buffering for character streams.
//!
//! `ringback` layers bounded "unread" semantics on top of a forward-only
//! character source: a lexical scanner can read one code point at a time,
//! tentatively consume several while probing for a token, and then roll
//! back without re-fetching anything from the underlying stream.
//!
//! The heart of the crate is [`CharRing`], a fixed-capacity circular buffer
//! of decoded characters with independent read and write cursors. Reads are
//! served from buffered history when any is pending and pulled from the
//! bound [`CharSource`] otherwise; [`CharRing::unread_chars`] rewinds the
//! read cursor over that history. Pushback depth is bounded by the buffer
//! capacity, and over-length rewinds saturate silently.
//!
//! ```rust
//! use ringback::{CharRing, TextSource};
//!
//! let mut ring = CharRing::with_capacity(TextSource::from("let x"), 8);
//!
//! assert_eq!(ring.read_char(), Ok(Some('l')));
//! assert_eq!(ring.read_char(), Ok(Some('e')));
//! ring.unread_chars(2);
//! assert_eq!(ring.read_char(), Ok(Some('l')));
//! ```
//!
//! With the `std` feature (on by default), [`ReadSource`] decodes UTF-8
//! from any [`std::io::Read`] implementation and [`SyncCharRing`] serializes
//! concurrent callers behind a mutex.

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod decode;
mod ring;
mod source;
mod stream;

#[cfg(feature = "std")]
mod io;
#[cfg(feature = "std")]
mod sync;

pub use decode::{ByteSource, DecodeError};
pub use ring::{CharRing, DEFAULT_CAPACITY};
pub use source::{CharSource, TextSource};
pub use stream::CharStream;

#[cfg(feature = "std")]
pub use io::{ReadError, ReadSource};
#[cfg(feature = "std")]
pub use sync::SyncCharRing;
