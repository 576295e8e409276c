//! `${name}` placeholder expansion.
//!
//! A placeholder is `${` followed by a non-empty name and a closing `}`.
//! The name is everything up to the first `}`, so names like `${@env:HOME}`
//! are passed to the mapping function as-is.
//!
//! Malformed placeholders are copied through unchanged:
//! - `${` with no closing brace
//! - `${}` with an empty name
//!
//! When the input has nothing to replace, the input is returned borrowed.

use std::borrow::Cow;
use std::ops::Range;

/// A well-formed placeholder found in the input, as byte offsets.
struct Placeholder {
    /// Offset of the `$`.
    start: usize,
    /// Offsets of the name between the braces.
    name: Range<usize>,
    /// Offset just past the closing `}`.
    end: usize,
}

/// Find the next well-formed placeholder at or after `from`.
fn next_placeholder(src: &[u8], mut from: usize) -> Option<Placeholder> {
    loop {
        let start = from + src.get(from..)?.windows(2).position(|w| w == b"${")?;
        let name_start = start + 2;
        // No closing brace means no later placeholder can be closed either
        let close = name_start + src[name_start..].iter().position(|&b| b == b'}')?;
        if close == name_start {
            from = close + 1;
            continue;
        }
        return Some(Placeholder {
            start,
            name: name_start..close,
            end: close + 1,
        });
    }
}

/// Replace every `${name}` in `src` with `mapping(name)`.
///
/// Names that are not valid UTF-8 are passed lossily converted.
pub fn expand_variables<F, S>(src: &[u8], mut mapping: F) -> Cow<'_, [u8]>
where
    F: FnMut(&str) -> S,
    S: AsRef<str>,
{
    let mut out: Option<Vec<u8>> = None;
    let mut end = 0;
    while let Some(p) = next_placeholder(src, end) {
        let buf = out.get_or_insert_with(|| Vec::with_capacity(2 * src.len()));
        buf.extend_from_slice(&src[end..p.start]);
        let name = String::from_utf8_lossy(&src[p.name]);
        log::trace!("expanding variable {name}");
        buf.extend_from_slice(mapping(&name).as_ref().as_bytes());
        end = p.end;
    }
    match out {
        Some(mut buf) => {
            buf.extend_from_slice(&src[end..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(src),
    }
}

/// Replace every `${name}` in `src` with `mapping(name)`.
pub fn expand_variables_str<F, S>(src: &str, mut mapping: F) -> Cow<'_, str>
where
    F: FnMut(&str) -> S,
    S: AsRef<str>,
{
    let mut out: Option<String> = None;
    let mut end = 0;
    // `$`, `{` and `}` are ASCII, so every offset is a char boundary
    while let Some(p) = next_placeholder(src.as_bytes(), end) {
        let buf = out.get_or_insert_with(|| String::with_capacity(2 * src.len()));
        buf.push_str(&src[end..p.start]);
        let name = &src[p.name];
        log::trace!("expanding variable {name}");
        buf.push_str(mapping(name).as_ref());
        end = p.end;
    }
    match out {
        Some(mut buf) => {
            buf.push_str(&src[end..]);
            Cow::Owned(buf)
        }
        None => Cow::Borrowed(src),
    }
}
