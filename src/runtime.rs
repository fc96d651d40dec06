// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Small standalone functions with instructive running times.
//!
//! None of these touch [`Stack`][Stack]. Each one documents its cost, and
//! [`time_sum_zero_3()`][time_sum_zero_3] lets you watch the worst one grow.
//!
//! [Stack]: ../struct.Stack.html
//! [time_sum_zero_3]: fn.time_sum_zero_3.html

use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};

use tracing::debug;

/// Animals which count as exotic for
/// [`has_exotic_animals()`][has_exotic_animals].
///
/// [has_exotic_animals]: fn.has_exotic_animals.html
pub const EXOTIC_ANIMALS: &[&str] = &["hippo", "platpypus"];

/// Test whether two strings are exactly the same, without comparing them
/// with `==`.
///
/// O(n): strings of different lengths are rejected straight away, otherwise
/// the characters are walked in step until one differs.
///
/// ```rust
/// # use lifostack::runtime::string_compare;
/// assert!(string_compare("hello", "hello"));
/// assert!(!string_compare("hello", "hellO"));
/// assert!(!string_compare("hello", "hell"));
/// ```
pub fn string_compare(left: &str, right: &str) -> bool {
    if left.len() != right.len() {
        return false;
    }
    left.chars().zip(right.chars()).all(|(l, r)| l == r)
}

/// Test whether a list of animals contains an exotic one.
///
/// O(n) over a slice, since each lookup has to scan it.
pub fn has_exotic_animals<S>(animals: &[S]) -> bool
where
    S: AsRef<str>,
{
    animals
        .iter()
        .any(|animal| EXOTIC_ANIMALS.contains(&animal.as_ref()))
}

/// Find pairs of integers that sum to zero, using a set.
///
/// O(n): one pass builds the set, one pass probes it. Every pair appears in
/// both orientations, and a zero pairs with itself. `i64::MIN` has no
/// negation in range, so it never pairs. Pairs come out ordered by their
/// second element.
///
/// ```rust
/// # use lifostack::runtime::sum_zero_1;
/// assert_eq!(vec![[3, -3], [-3, 3]], sum_zero_1(&[3, 1, -3]));
/// ```
pub fn sum_zero_1(numbers: &[i64]) -> Vec<[i64; 2]> {
    let set: BTreeSet<i64> = numbers.iter().copied().collect();
    set.iter()
        .filter_map(|&x| x.checked_neg().map(|neg| [neg, x]))
        .filter(|[neg, _]| set.contains(neg))
        .collect()
}

/// Find pairs of integers that sum to zero, by trying every pair.
///
/// O(n²). Duplicates in the input produce duplicate pairs, and every pair
/// appears in both orientations.
pub fn sum_zero_2(numbers: &[i64]) -> Vec<(i64, i64)> {
    let mut result = Vec::new();
    for &x in numbers {
        for &y in numbers {
            if x.checked_neg() == Some(y) {
                result.push((x, y));
            }
        }
    }
    result
}

/// Find pairs of integers that sum to zero, skipping a pair if its mirror
/// image was already found.
///
/// Only the mirror image is checked, so repeated values still produce
/// repeated pairs. On inputs like `[1; k] ++ [-1; k]` the result grows to k²
/// entries and each lookup scans it, which makes this O(n⁴) at worst.
pub fn sum_zero_3(numbers: &[i64]) -> Vec<(i64, i64)> {
    let mut result: Vec<(i64, i64)> = Vec::new();
    for &x in numbers {
        for &y in numbers {
            if x.checked_neg() == Some(y) && !result.contains(&(y, x)) {
                result.push((x, y));
            }
        }
    }
    result
}

/// Time [`sum_zero_3()`][sum_zero_3] on its bad case.
///
/// For each `k` in `lengths`, runs it over `k` ones followed by `k` minus
/// ones and records how long that took. Keep `k` small: 160 already takes
/// seconds.
///
/// [sum_zero_3]: fn.sum_zero_3.html
pub fn time_sum_zero_3(lengths: &[usize]) -> BTreeMap<usize, Duration> {
    let mut results = BTreeMap::new();
    for &k in lengths {
        let mut numbers = vec![1; k];
        numbers.extend(std::iter::repeat(-1).take(k));

        let start = Instant::now();
        let pairs = sum_zero_3(&numbers);
        let elapsed = start.elapsed();

        debug!(k, pairs = pairs.len(), ?elapsed, "timed sum_zero_3");
        results.insert(k, elapsed);
    }
    results
}
