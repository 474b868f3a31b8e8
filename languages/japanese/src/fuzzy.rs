//! Approximate key matching for the fuzzy search path.
//!
//! Scores live in `0.0..=1.0`:
//! - identical key: `1.0`
//! - query is an ordered subsequence of the key: `0.5..0.95`, higher for keys the query covers
//!   more of, contains contiguously, or prefixes
//! - otherwise: below `0.45`, proportional to the longest common subsequence

use std::cmp::Ordering;

/// Keys scoring below this are not matches at all
pub const MIN_SIMILARITY: f64 = 0.25;

const SUBSEQUENCE_BASE: f64 = 0.5;
const COVERAGE_WEIGHT: f64 = 0.2;
const SUBSTRING_BONUS: f64 = 0.15;
const PREFIX_BONUS: f64 = 0.1;
const PARTIAL_WEIGHT: f64 = 0.45;

#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch<'a> {
    pub key: &'a str,
    pub score: f64,
}

fn is_subsequence(needle: &[char], haystack: &[char]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|c| rest.any(|h| h == c))
}

fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Similarity of an already-normalized query against one index key
pub fn similarity(query: &str, key: &str) -> f64 {
    if query.is_empty() || key.is_empty() {
        return 0.0;
    }
    if query == key {
        return 1.0;
    }

    let q: Vec<char> = query.chars().collect();
    let k: Vec<char> = key.chars().collect();

    if is_subsequence(&q, &k) {
        let coverage = q.len() as f64 / k.len() as f64;
        let mut score = SUBSEQUENCE_BASE + COVERAGE_WEIGHT * coverage;
        if key.contains(query) {
            score += SUBSTRING_BONUS;
        }
        if key.starts_with(query) {
            score += PREFIX_BONUS;
        }
        return score;
    }

    let common = lcs_len(&q, &k) as f64;
    PARTIAL_WEIGHT * common / q.len().max(k.len()) as f64
}

/// Best `limit` keys for `query`, highest score first, ties broken by key
pub fn rank_keys<'a>(
    query: &str,
    keys: impl IntoIterator<Item = &'a str>,
    limit: usize,
) -> Vec<FuzzyMatch<'a>> {
    if query.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut matches: Vec<FuzzyMatch<'a>> = keys
        .into_iter()
        .filter_map(|key| {
            let score = similarity(query, key);
            (score >= MIN_SIMILARITY).then_some(FuzzyMatch { key, score })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.key.cmp(b.key))
    });
    matches.truncate(limit);
    matches
}
