//! String helpers.

/// Returns at most the first `max` characters of `s`. Lengths are counted in `char`s,
/// so multi-byte characters are never split.
pub fn trunc_string(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
