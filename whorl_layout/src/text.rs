// Copyright 2026 the Whorl Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label text layout: greedy wrapping and length-driven font sizing.
//!
//! Shaping and measurement stay downstream with the renderer; everything here
//! works on character counts, the same heuristic that drives the angular
//! partitioning.

use alloc::string::String;
use alloc::vec::Vec;

/// Font-size break points: a title of up to `.0` characters renders at `.1`.
///
/// The table is non-increasing; anything longer than the last break point
/// falls through to [`MIN_FONT_SIZE`].
const FONT_STEPS: &[(usize, f64)] = &[(8, 16.0), (14, 14.0), (22, 12.0), (32, 11.0)];

/// Lower bound of the wedge label font size.
const MIN_FONT_SIZE: f64 = 10.0;

/// Wrap a title into lines of at most `max_line_len` characters.
///
/// Whitespace-delimited words are packed greedily: a word moves to the next
/// line when it no longer fits, and a word longer than `max_line_len` that
/// appears among other words occupies its own line unsplit. A title that is
/// a single whitespace-free word longer than `max_line_len` has no word
/// boundaries to break at and is chunked into `max_line_len`-character
/// pieces instead.
///
/// Pure and deterministic; an empty or all-whitespace title yields no lines.
pub fn wrap_title(title: &str, max_line_len: usize) -> Vec<String> {
    let max_line_len = max_line_len.max(1);
    let mut words = title.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };
    if words.next().is_none() {
        return chunk_word(first, max_line_len);
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in title.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_line_len {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(core::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split a single word into pieces of at most `max_line_len` characters.
fn chunk_word(word: &str, max_line_len: usize) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    chars
        .chunks(max_line_len)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Font size for a wedge label of `title_len` characters.
///
/// A non-increasing step function: longer labels render smaller so they
/// still fit their allotted arc. Bounded by the first entry of
/// [`FONT_STEPS`] above and [`MIN_FONT_SIZE`] below.
pub fn font_size_for(title_len: usize) -> f64 {
    FONT_STEPS
        .iter()
        .find(|(up_to, _)| title_len <= *up_to)
        .map_or(MIN_FONT_SIZE, |(_, size)| *size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn short_title_is_one_line() {
        assert_eq!(wrap_title("Mentoring", 18), vec!["Mentoring"]);
    }

    #[test]
    fn words_pack_greedily() {
        assert_eq!(
            wrap_title("one two three", 9),
            vec!["one two", "three"]
        );
        assert_eq!(
            wrap_title("peer learning groups", 18),
            vec!["peer learning", "groups"]
        );
    }

    // A whitespace-free title has no word boundaries, so it breaks at the
    // character limit instead.
    #[test]
    fn lone_overlong_word_is_chunked() {
        assert_eq!(wrap_title("abcdefghij", 5), vec!["abcde", "fghij"]);
    }

    // An overlong word among other words keeps its own line, unsplit.
    #[test]
    fn overlong_word_in_text_stays_unsplit() {
        assert_eq!(wrap_title("a bcdefghijk", 5), vec!["a", "bcdefghijk"]);
    }

    #[test]
    fn empty_titles_yield_no_lines() {
        assert!(wrap_title("", 18).is_empty());
        assert!(wrap_title("   ", 18).is_empty());
    }

    #[test]
    fn wrapping_is_restartable() {
        let first = wrap_title("curriculum design basics", 10);
        let second = wrap_title("curriculum design basics", 10);
        assert_eq!(first, second, "pure function of its input");
        for line in &first {
            assert!(line.chars().count() <= 10, "line {line} within the limit");
        }
    }

    #[test]
    fn multibyte_titles_count_characters_not_bytes() {
        assert_eq!(wrap_title("éèêëàâäî", 4), vec!["éèêë".to_string(), "àâäî".to_string()]);
    }

    #[test]
    fn font_size_never_increases_with_length() {
        let mut last = f64::INFINITY;
        for len in 0..=64 {
            let size = font_size_for(len);
            assert!(size <= last, "size at {len} must not grow");
            assert!((MIN_FONT_SIZE..=16.0).contains(&size), "bounded at {len}");
            last = size;
        }
        assert_eq!(font_size_for(0), 16.0);
        assert_eq!(font_size_for(64), MIN_FONT_SIZE);
    }
}
