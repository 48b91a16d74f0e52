//! Term sequencer: expands a start term into the ordered planning horizon.

use crate::models::TermLabel;

/// Produce the ordered sequence of `count` term labels beginning at `start`.
///
/// Terms strictly alternate seasons: Fall of year Y is followed by Spring of
/// Y+1, Spring of year Y by Fall of the same calendar year. Infallible: a
/// [`TermLabel`] is already validated at parse time, so any start label this
/// function can receive produces a well-formed sequence.
///
/// # Arguments
///
/// * `start` - First term of the plan
/// * `count` - Number of terms to generate (the planning horizon)
pub fn generate_terms(start: TermLabel, count: usize) -> Vec<TermLabel> {
    let mut terms = Vec::with_capacity(count);
    let mut current = start;
    for _ in 0..count {
        terms.push(current);
        current = current.next();
    }
    terms
}
