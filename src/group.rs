// Random permutation and fixed-size grouping.
//
// Both operations draw fresh randomness on every call: re-running a split
// with the same roster is expected to produce a different arrangement.

use rand::Rng;

use crate::roster::Person;

/// Return a uniformly shuffled copy of `items`, leaving the input unmodified.
///
/// Fisher–Yates: walk the index from the last element down to the second,
/// swapping each with a uniformly random index in `[0, i]`. Given a uniform
/// source this produces each of the n! permutations with equal probability.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Randomly partition `people` into consecutive chunks of `group_size`.
///
/// The size is coerced to at least 1; callers may pass anything. The final
/// chunk holds the remainder and may be shorter, but is never empty unless
/// the roster itself is empty. Every person appears in exactly one group.
pub fn split_into_groups<R: Rng>(
    people: &[Person],
    group_size: usize,
    rng: &mut R,
) -> Vec<Vec<Person>> {
    let size = group_size.max(1);
    shuffled(people, rng)
        .chunks(size)
        .map(|chunk| chunk.to_vec())
        .collect()
}

/// Number of groups a split of `roster_len` people into `group_size` yields.
pub fn group_count(roster_len: usize, group_size: usize) -> usize {
    roster_len.div_ceil(group_size.max(1))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
