//! End-to-end pushback behavior over in-memory sources.

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;
use ringback::{ByteSource, CharRing, CharStream, DecodeError, TextSource};
use rstest::rstest;

/// Probe for a keyword, rolling back to the starting position when the
/// input does not match.
fn matches_keyword<T: CharStream>(stream: &mut T, word: &str) -> Result<bool, T::Error> {
    let mut seen = 0;
    for expected in word.chars() {
        match stream.read_char()? {
            Some(ch) if ch == expected => seen += 1,
            other => {
                let extra = usize::from(other.is_some());
                stream.unread_chars(seen + extra);
                return Ok(false);
            }
        }
    }
    Ok(true)
}

#[test]
fn sequential_reads_match_the_source() {
    fn prop(text: String) -> bool {
        let expected: Vec<char> = text.chars().collect();
        let mut ring = CharRing::new(TextSource::from(text.as_str()));
        let mut read = Vec::new();
        while let Some(ch) = ring.read_char().unwrap() {
            read.push(ch);
        }
        // Once drained, the end indicator repeats with no error.
        read == expected && ring.read_char() == Ok(None) && ring.read_char() == Ok(None)
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(String) -> bool);
}

#[test]
fn rewind_replays_the_last_k_characters() {
    fn prop(text: String, k: u8) -> bool {
        let capacity = 16;
        let chars: Vec<char> = text.chars().collect();
        let mut ring = CharRing::with_capacity(TextSource::from(text.as_str()), capacity);
        for _ in 0..chars.len() {
            let _ = ring.read_char().unwrap();
        }

        let k = usize::from(k).min(capacity).min(chars.len());
        ring.unread_chars(k);
        let replay: Vec<char> = (0..k).map(|_| ring.read_char().unwrap().unwrap()).collect();
        replay == &chars[chars.len() - k..]
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(String, u8) -> bool);
}

#[test]
fn over_length_rewinds_saturate() {
    fn prop(text: String, reads: u8, extra: u16) -> bool {
        let capacity = 8;
        let chars: Vec<char> = text.chars().collect();
        let n = usize::from(reads).min(chars.len());

        let mut saturated = CharRing::with_capacity(TextSource::from(text.as_str()), capacity);
        let mut exact = CharRing::with_capacity(TextSource::from(text.as_str()), capacity);
        for _ in 0..n {
            let _ = saturated.read_char().unwrap();
            let _ = exact.read_char().unwrap();
        }

        // Asking for more than the rewindable history must behave exactly
        // like asking for all of it.
        let max = n.min(capacity);
        saturated.unread_chars(max + usize::from(extra));
        exact.unread_chars(max);
        if saturated.pending() != exact.pending() {
            return false;
        }
        let a: Vec<_> = (0..max).map(|_| saturated.read_char().unwrap()).collect();
        let b: Vec<_> = (0..max).map(|_| exact.read_char().unwrap()).collect();
        a == b
    }

    QuickCheck::new()
        .tests(1_000)
        .quickcheck(prop as fn(String, u8, u16) -> bool);
}

#[quickcheck]
fn pushback_depth_never_exceeds_capacity(text: String, ops: Vec<(bool, u8)>) -> bool {
    let capacity = 4;
    let mut ring = CharRing::with_capacity(TextSource::from(text.as_str()), capacity);
    for (read, amount) in ops {
        if read {
            let _ = ring.read_char().unwrap();
        } else {
            ring.unread_chars(usize::from(amount));
        }
        if ring.pending() > capacity {
            return false;
        }
    }
    true
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(8)]
fn full_rewind_is_bounded_by_capacity(#[case] capacity: usize) {
    let text = "abcdefgh";
    let mut ring = CharRing::with_capacity(TextSource::from(text), capacity);
    for _ in 0..text.len() {
        let _ = ring.read_char().unwrap();
    }

    ring.unread_chars(usize::MAX);
    let depth = capacity.min(text.len());
    assert_eq!(ring.pending(), depth);
    let tail: String = (0..depth)
        .map(|_| ring.read_char().unwrap().unwrap())
        .collect();
    assert_eq!(tail, text[text.len() - depth..]);
}

#[test]
fn probing_scanner_rolls_back_cleanly() {
    let mut ring = CharRing::with_capacity(TextSource::from("letter"), 8);
    assert!(!matches_keyword(&mut ring, "lettuce").unwrap());

    // The failed probe consumed nothing.
    let rest: String = std::iter::from_fn(|| ring.read_char().unwrap()).collect();
    assert_eq!(rest, "letter");
}

#[test]
fn decode_errors_pass_through_the_ring() {
    let mut source = ByteSource::new();
    source.push_bytes(b"ok\xFF");
    let mut ring = CharRing::with_capacity(source, 4);

    assert_eq!(ring.read_char(), Ok(Some('o')));
    assert_eq!(ring.read_char(), Ok(Some('k')));
    assert_eq!(ring.read_char(), Err(DecodeError::InvalidUtf8(0xFF)));

    // The error is fatal to the call, not to the ring: buffered history
    // is still replayable.
    ring.unread_chars(2);
    assert_eq!(ring.read_char(), Ok(Some('o')));
    assert_eq!(ring.read_char(), Ok(Some('k')));
}
