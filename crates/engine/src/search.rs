//! Case-insensitive whole-word search over cell text.
//!
//! Returns byte spans into the original text. Matching is non-overlapping:
//! after a hit the scan resumes right after the matched span. A hit must not
//! be glued to an alphanumeric character on a side where the target itself
//! starts (or ends) with an alphanumeric character, so `"cat"` matches in
//! `"cat, dog"` but not in `"concatenate"`.

use std::ops::Range;

pub fn find_matches(text: &str, target: &str) -> Vec<Range<usize>> {
    let needle: Vec<char> = target.chars().flat_map(char::to_lowercase).collect();
    let (Some(&first), Some(&last)) = (needle.first(), needle.last()) else {
        return Vec::new();
    };
    let check_before = first.is_alphanumeric();
    let check_after = last.is_alphanumeric();

    let mut spans = Vec::new();
    let mut start = 0;
    while start < text.len() {
        if let Some(end) = match_at(text, start, &needle) {
            let before_ok = !check_before || !prev_is_alnum(text, start);
            let after_ok = !check_after || !next_is_alnum(text, end);
            if before_ok && after_ok {
                spans.push(start..end);
                start = end;
                continue;
            }
        }
        start += text[start..].chars().next().map_or(1, char::len_utf8);
    }
    spans
}

/// Does the lowercased needle match the text at `start`? Returns the end offset.
fn match_at(text: &str, start: usize, needle: &[char]) -> Option<usize> {
    let mut k = 0;
    for (idx, c) in text[start..].char_indices() {
        for lc in c.to_lowercase() {
            if k >= needle.len() || needle[k] != lc {
                return None;
            }
            k += 1;
        }
        if k == needle.len() {
            return Some(start + idx + c.len_utf8());
        }
    }
    None
}

fn prev_is_alnum(text: &str, pos: usize) -> bool {
    text[..pos].chars().next_back().is_some_and(char::is_alphanumeric)
}

fn next_is_alnum(text: &str, pos: usize) -> bool {
    text[pos..].chars().next().is_some_and(char::is_alphanumeric)
}
