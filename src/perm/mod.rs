use std::collections::HashSet;

use itertools::Itertools;

pub mod bench;

/// Selects which permutation algorithm [`Strategy::run`] dispatches to.
///
/// All three are value-equivalent up to ordering and duplicate handling:
/// `Recursive` and `Iterative` both yield N! positional permutations, while
/// `Unique` collapses value-equal results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Order-preserving recursion, positional duplicates kept.
    Recursive,
    /// Same recursion, value-equal results collapsed into a set.
    Unique,
    /// Library permutation iterator over the input characters.
    Iterative,
}

impl Strategy {
    /// Runs the selected algorithm over `input`.
    ///
    /// The `Unique` variant collects its set into a vector, so its output
    /// ordering is unspecified.
    pub fn run(&self, input: &str) -> Vec<String> {
        match self {
            Strategy::Recursive => permute(input),
            Strategy::Unique => permute_unique(input).into_iter().collect(),
            Strategy::Iterative => permute_iterative(input),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Unique => "unique recursive",
            Strategy::Iterative => "iterative",
        }
    }
}

/// Generates every positional permutation of `input`, duplicates included.
///
/// Characters at different positions are treated as distinct even when equal
/// in value, so the result always holds exactly N! strings for an N-character
/// input. The empty string permutes to a single empty string.
///
/// Output size and memory use grow factorially with input length; callers
/// wanting a bound must impose one themselves.
///
/// # Examples
///
/// ```
/// use seekrs::perm::permute;
/// let perms = permute("ab");
/// assert_eq!(perms, vec!["ab", "ba"]);
/// ```
pub fn permute(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= 1 {
        return vec![input.to_string()];
    }

    let mut results = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        // Remove the character at i and permute what is left
        let mut remaining = String::with_capacity(input.len());
        remaining.extend(chars[..i].iter());
        remaining.extend(chars[i + 1..].iter());

        for perm in permute(&remaining) {
            let mut with_prefix = String::with_capacity(input.len());
            with_prefix.push(c);
            with_prefix.push_str(&perm);
            results.push(with_prefix);
        }
    }
    results
}

/// Generates the distinct permutations of `input`.
///
/// Same recursion as [`permute`], but results accumulate into a set keyed by
/// content, so value-equal permutations produced from different positions
/// collapse to one: "aab" yields three entries rather than six. Iteration
/// order is unspecified.
pub fn permute_unique(input: &str) -> HashSet<String> {
    let chars: Vec<char> = input.chars().collect();
    if chars.len() <= 1 {
        return HashSet::from([input.to_string()]);
    }

    let mut results = HashSet::new();
    for (i, &c) in chars.iter().enumerate() {
        let mut remaining = String::with_capacity(input.len());
        remaining.extend(chars[..i].iter());
        remaining.extend(chars[i + 1..].iter());

        for perm in permute_unique(&remaining) {
            let mut with_prefix = String::with_capacity(input.len());
            with_prefix.push(c);
            with_prefix.push_str(&perm);
            results.insert(with_prefix);
        }
    }
    results
}

/// Generates every positional permutation of `input` via the itertools
/// permutation iterator rather than explicit recursion.
///
/// Multiset-equivalent to [`permute`]; only the ordering of the N! results
/// may differ.
pub fn permute_iterative(input: &str) -> Vec<String> {
    let count = input.chars().count();
    input
        .chars()
        .permutations(count)
        .map(|perm| perm.into_iter().collect())
        .collect()
}

#[cfg(test)]
mod tests;
