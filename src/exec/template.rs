// src/exec/template.rs

//! Argument-template rendering.
//!
//! Buffered lines are raw bytes; they were never decoded on the way in, and
//! they are not decoded here. Substitution happens at the byte level and the
//! result becomes an `OsString`, so a line that is not valid UTF-8 still
//! reaches the child intact on Unix.

use std::ffi::OsString;

/// The literal template token replaced by the joined buffer.
pub const PLACEHOLDER: &[u8] = b"?";

/// Join buffered lines with `\n` into one blob (no trailing newline).
pub fn join_lines(lines: &[Vec<u8>]) -> Vec<u8> {
    let mut joined = Vec::with_capacity(lines.iter().map(|l| l.len() + 1).sum::<usize>());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            joined.push(b'\n');
        }
        joined.extend_from_slice(line);
    }
    joined
}

/// Render the final argument list from the template.
///
/// Every `?` occurrence in every template argument is replaced by `joined`;
/// this is plain substring replacement, not a templating language. Arguments
/// without a placeholder pass through unchanged.
pub fn render_args(template: &[String], joined: &[u8]) -> Vec<OsString> {
    template
        .iter()
        .map(|arg| {
            if arg.contains('?') {
                bytes_to_os_string(replace_all(arg.as_bytes(), PLACEHOLDER, joined))
            } else {
                OsString::from(arg)
            }
        })
        .collect()
}

/// Replace every occurrence of `needle` in `haystack` with `replacement`.
fn replace_all(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(haystack.len());
    let mut rest = haystack;
    while let Some(pos) = rest
        .windows(needle.len())
        .position(|w| w == needle)
    {
        out.extend_from_slice(&rest[..pos]);
        out.extend_from_slice(replacement);
        rest = &rest[pos + needle.len()..];
    }
    out.extend_from_slice(rest);
    out
}

#[cfg(unix)]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
fn bytes_to_os_string(bytes: Vec<u8>) -> OsString {
    OsString::from(String::from_utf8_lossy(&bytes).into_owned())
}
