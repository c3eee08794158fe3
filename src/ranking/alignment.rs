//! Alignment-based similarity between a query and a card name.
//!
//! The matcher finds maximal common character blocks between the two strings
//! and charges an edit cost for every stretch of the name the query skipped.
//! The score is `match_size / match_cost`, where the cost starts at the query
//! length, so it only reaches 1.0 when nothing of the name is left over.

use crate::ranking::normalize::{count_words, fold_candidate};

/// A run of `size` equal characters at `query_start` / `candidate_start`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Block {
    pub query_start: usize,
    pub candidate_start: usize,
    pub size: usize,
}

/// Outcome of aligning a query against one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    /// Characters covered by matching blocks
    pub match_size: usize,
    /// Query length plus the gap penalties
    pub match_cost: usize,
    /// Query and candidate were identical after case folding
    pub exact: bool,
}

impl Alignment {
    /// Normalized score in [0, 1]
    pub fn score(&self) -> f64 {
        if self.match_cost == 0 {
            0.0
        } else {
            self.match_size as f64 / self.match_cost as f64
        }
    }
}

/// Longest common run inside `a[alo..ahi]` and `b[blo..bhi]`.
/// Ties go to the earliest start in `a`, then in `b`.
fn longest_match(a: &[char], b: &[char], alo: usize, ahi: usize, blo: usize, bhi: usize) -> Block {
    let mut best = Block {
        query_start: alo,
        candidate_start: blo,
        size: 0,
    };
    // run[j - blo + 1]: length of the common run ending at a[i], b[j]
    let width = bhi - blo + 1;
    let mut prev = vec![0usize; width];
    let mut cur = vec![0usize; width];

    for i in alo..ahi {
        for j in blo..bhi {
            let k = if a[i] == b[j] { prev[j - blo] + 1 } else { 0 };
            cur[j - blo + 1] = k;
            if k > best.size {
                best = Block {
                    query_start: i + 1 - k,
                    candidate_start: j + 1 - k,
                    size: k,
                };
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }

    best
}

/// Maximal matching blocks of `a` against `b`, in order, with adjacent blocks
/// merged and a trailing zero-size sentinel at `(a.len(), b.len())`.
///
/// Every character is eligible; nothing is treated as junk.
pub fn matching_blocks(a: &[char], b: &[char]) -> Vec<Block> {
    let mut queue = vec![(0, a.len(), 0, b.len())];
    let mut found = Vec::new();

    while let Some((alo, ahi, blo, bhi)) = queue.pop() {
        let block = longest_match(a, b, alo, ahi, blo, bhi);
        if block.size == 0 {
            continue;
        }
        let (i, j, k) = (block.query_start, block.candidate_start, block.size);
        if alo < i && blo < j {
            queue.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            queue.push((i + k, ahi, j + k, bhi));
        }
        found.push(block);
    }
    found.sort_unstable();

    let mut blocks: Vec<Block> = Vec::with_capacity(found.len() + 1);
    for block in found {
        match blocks.last_mut() {
            Some(last)
                if last.query_start + last.size == block.query_start
                    && last.candidate_start + last.size == block.candidate_start =>
            {
                last.size += block.size;
            }
            _ => blocks.push(block),
        }
    }
    blocks.push(Block {
        query_start: a.len(),
        candidate_start: b.len(),
        size: 0,
    });
    blocks
}

/// Align `query` against `candidate` under the case policy of
/// [`fold_candidate`].
///
/// Gap costs:
/// - a skipped stretch inside the name costs one unit per word it touches;
/// - a leftover tail costs one unit, plus one more when it spans several
///   words and starts mid-word (not on whitespace or a comma).
pub fn align(query: &str, candidate: &str) -> Alignment {
    let candidate = fold_candidate(query, candidate);
    let q: Vec<char> = query.chars().collect();
    let c: Vec<char> = candidate.chars().collect();

    if q == c {
        return Alignment {
            match_size: q.len(),
            match_cost: q.len(),
            exact: true,
        };
    }

    let mut match_size = 0;
    let mut match_cost = q.len();
    let mut cursor = 0;

    for block in matching_blocks(&q, &c) {
        let gap = &c[cursor..block.candidate_start];
        if block.candidate_start < c.len() {
            match_cost += count_words(gap);
        } else if let Some(&first) = gap.first() {
            match_cost += 1;
            if count_words(gap) > 1 && !(first.is_whitespace() || first == ',') {
                match_cost += 1;
            }
        }
        match_size += block.size;
        cursor = block.candidate_start + block.size;
    }

    assert_eq!(
        cursor,
        c.len(),
        "alignment of {:?} against {:?} did not cover the candidate",
        query,
        candidate
    );

    Alignment {
        match_size,
        match_cost,
        exact: false,
    }
}

/// Shorthand for `align(query, candidate).score()`
pub fn similarity(query: &str, candidate: &str) -> f64 {
    align(query, candidate).score()
}
