//! Randomized checks of the edit distance against a full-matrix reference.

use antimat::util::levenshtein::{
    levenshtein_chars, levenshtein_distance, levenshtein_distance_threshold,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHABET: [char; 12] = ['п', 'р', 'и', 'м', 'е', 'ё', 'a', 'x', '1', '3', '*', '-'];

fn random_word(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())])
        .collect()
}

/// Textbook O(n·m) matrix.
fn reference(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut matrix = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            matrix[i][j] = (matrix[i - 1][j] + 1)
                .min(matrix[i][j - 1] + 1)
                .min(matrix[i - 1][j - 1] + cost);
        }
    }
    matrix[a.len()][b.len()]
}

#[test]
fn test_matches_reference() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..500 {
        let a = random_word(&mut rng, 10);
        let b = random_word(&mut rng, 10);
        assert_eq!(levenshtein_distance(&a, &b), reference(&a, &b), "{a:?} vs {b:?}");
    }
}

#[test]
fn test_metric_properties() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..300 {
        let a = random_word(&mut rng, 8);
        let b = random_word(&mut rng, 8);
        let c = random_word(&mut rng, 8);

        let ab = levenshtein_distance(&a, &b);
        assert_eq!(ab, levenshtein_distance(&b, &a));
        assert_eq!(levenshtein_distance(&a, &a), 0);
        assert_eq!(levenshtein_distance(&a, ""), a.chars().count());
        assert!(ab <= a.chars().count().max(b.chars().count()));
        assert!(ab <= levenshtein_distance(&a, &c) + levenshtein_distance(&c, &b));
    }
}

#[test]
fn test_threshold_agrees_with_full_distance() {
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..500 {
        let a = random_word(&mut rng, 9);
        let b = random_word(&mut rng, 9);
        let threshold = rng.random_range(0..4);
        let full = levenshtein_distance(&a, &b);

        let expected = (full <= threshold).then_some(full);
        assert_eq!(
            levenshtein_distance_threshold(&a, &b, threshold),
            expected,
            "{a:?} vs {b:?} within {threshold}"
        );
    }
}

#[test]
fn test_char_slices() {
    let a: Vec<char> = "пр1мер".chars().collect();
    let b: Vec<char> = "пример".chars().collect();
    assert_eq!(levenshtein_chars(&a, &b), 1);
    assert_eq!(levenshtein_chars(&[], &b), 6);
}
