//! Levenshtein edit distance.
//!
//! All functions operate on Unicode scalar values, so a Cyrillic letter counts
//! as one edit just like an ASCII one. Only two rows of the cost matrix are kept
//! and the shorter operand is always the inner dimension, which bounds the
//! auxiliary memory by `min(|a|, |b|) + 1` cells.

use std::cmp::min;

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character insertions, deletions or
/// substitutions required to change one string into the other. The function is
/// total: the distance to an empty string is the length of the other one.
///
/// # Examples
///
/// ```
/// use antimat::util::levenshtein::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// assert_eq!(levenshtein_distance("пример", "пр1мер"), 1);
/// assert_eq!(levenshtein_distance("", "abc"), 3);
/// ```
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    levenshtein_chars(&s1_chars, &s2_chars)
}

/// Calculate the Levenshtein distance between two pre-split character slices.
///
/// Used by the fuzzy scanner, which slices fragments out of an already decoded
/// scanning unit and would otherwise re-decode UTF-8 for every comparison.
pub fn levenshtein_chars(a: &[char], b: &[char]) -> usize {
    // Keep the shorter operand as the inner dimension.
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; short.len() + 1];

    for (i, &long_ch) in long.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, &short_ch) in short.iter().enumerate() {
            let cost = usize::from(short_ch != long_ch);

            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[short.len()]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
///
/// Returns `None` as soon as the distance provably exceeds `threshold`, which
/// is cheaper than computing the full distance when filtering candidates.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();
    levenshtein_chars_threshold(&s1_chars, &s2_chars, threshold)
}

/// Slice variant of [`levenshtein_distance_threshold`].
pub fn levenshtein_chars_threshold(a: &[char], b: &[char], threshold: usize) -> Option<usize> {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    if long.len() - short.len() > threshold {
        return None;
    }
    if short.is_empty() {
        return Some(long.len());
    }

    let mut prev_row: Vec<usize> = (0..=short.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; short.len() + 1];

    for (i, &long_ch) in long.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &short_ch) in short.iter().enumerate() {
            let cost = usize::from(short_ch != long_ch);

            curr_row[j + 1] = min(
                min(prev_row[j + 1] + 1, curr_row[j] + 1),
                prev_row[j] + cost,
            );
            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        // Row minima never decrease, so the final distance is at least this.
        if min_in_row > threshold {
            return None;
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    let distance = prev_row[short.len()];
    if distance <= threshold {
        Some(distance)
    } else {
        None
    }
}
