//! End-to-end pipeline tests over infinite sources.
//!
//! These exercise the whole public surface the way a downstream program
//! would: build a pipeline, drive it once with a terminal operation.

use seq::prelude::*;

// Project Euler 1: sum of all multiples of 3 or 5 below 1000.
#[test]
fn sums_multiples_of_three_or_five_below_1000() {
    let total: i64 = iota(0i64, 1)
        .take_while(|x| *x < 1000)
        .filter(|x| x % 3 == 0 || x % 5 == 0)
        .sum();
    assert_eq!(total, 233_168);
}

// Project Euler 2: sum of even Fibonacci terms not exceeding four million.
#[test]
fn sums_even_fibonacci_terms_below_four_million() {
    let total: i64 = unfold((1i64, 1i64), |&(a, b)| Some((b, a + b)))
        .map(|(a, _)| a)
        .take_while(|x| *x < 4_000_000)
        .filter(|x| x % 2 == 0)
        .sum();
    assert_eq!(total, 4_613_732);
}

#[test]
fn fibonacci_prefix_from_unfold() {
    let fib = unfold((1u64, 1u64), |&(a, b)| Some((b, a + b))).map(|(a, _)| a);
    assert_eq!(fib.take(6).get(), vec![1, 1, 2, 3, 5, 8]);
}

#[test]
fn deep_chain_runs_in_one_pass() {
    // drop the first 10 squares, keep every one not divisible by 7, number
    // the survivors, and stop after five of them
    let res = iota(1i64, 1)
        .map(|x| x * x)
        .drop(10)
        .filter(|x| x % 7 != 0)
        .with_index()
        .take(5)
        .get();
    assert_eq!(
        res,
        vec![(0, 121), (1, 144), (2, 169), (3, 225), (4, 256)]
    );
}

#[test]
fn running_totals_over_a_bounded_range() {
    let totals = range(1i64, 6, 1).scan(0, |acc, x| acc + x);
    assert_eq!(totals.get(), vec![1, 3, 6, 10, 15]);
    assert_eq!(totals.tail(), Some(15));
}

#[test]
fn word_count_via_split_and_memoized_lengths() {
    use std::cell::Cell;

    let text = "the quick brown fox jumps over the lazy dog the end";
    let lookups = Cell::new(0);
    let word_len = memoize(|w: String| {
        lookups.set(lookups.get() + 1);
        w.len()
    });

    let words: Seq<_> = Seq::from_vec(text.chars().collect::<Vec<_>>())
        .split(' ')
        .map(|run| run.into_iter().collect::<String>())
        .eval();

    assert_eq!(words.count(), 11);
    let total_len: usize = words.map(|w| word_len.call(w)).sum();
    assert_eq!(total_len, text.chars().filter(|c| *c != ' ').count());
    // "the" appears three times but is measured once
    assert_eq!(lookups.get(), 9);
}
