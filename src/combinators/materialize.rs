//! Stages that need the full extent of their input.
//!
//! Reverse, sorting, and splitting cannot be expressed as a pure wrapper
//! around the upstream continuation; they buffer the upstream inside `drive`
//! and then emit from the buffer. Re-driving re-materializes, which keeps
//! these stages as re-entrant as every other one.

use std::cmp::Ordering;

use crate::generate::Generator;

/// Emits the upstream elements in reverse order.
#[derive(Clone)]
pub struct Reverse<G> {
    prev: G,
}

/// Create a stage that reverses its input.
pub fn reverse<G>(prev: G) -> Reverse<G>
where
    G: Generator,
{
    Reverse { prev }
}

impl<G> Generator for Reverse<G>
where
    G: Generator,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut buf = Vec::new();
        self.prev.drive(&mut |x| {
            buf.push(x);
            true
        });
        for x in buf.into_iter().rev() {
            if !accept(x) {
                return false;
            }
        }
        true
    }
}

/// Emits the upstream elements in ascending `Ord` order.
#[derive(Clone)]
pub struct Sorted<G> {
    prev: G,
}

/// Create a stage that sorts its input by the element ordering.
pub fn sorted<G>(prev: G) -> Sorted<G>
where
    G: Generator,
    G::Item: Ord,
{
    Sorted { prev }
}

impl<G> Generator for Sorted<G>
where
    G: Generator,
    G::Item: Ord,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut buf = Vec::new();
        self.prev.drive(&mut |x| {
            buf.push(x);
            true
        });
        buf.sort();
        for x in buf {
            if !accept(x) {
                return false;
            }
        }
        true
    }
}

/// Emits the upstream elements sorted by a comparator.
#[derive(Clone)]
pub struct SortedBy<G, C> {
    prev: G,
    cmp: C,
}

/// Create a stage that sorts its input with `cmp`.
pub fn sorted_by<G, C>(prev: G, cmp: C) -> SortedBy<G, C>
where
    G: Generator,
    C: Fn(&G::Item, &G::Item) -> Ordering,
{
    SortedBy { prev, cmp }
}

impl<G, C> Generator for SortedBy<G, C>
where
    G: Generator,
    C: Fn(&G::Item, &G::Item) -> Ordering,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut buf = Vec::new();
        self.prev.drive(&mut |x| {
            buf.push(x);
            true
        });
        buf.sort_by(|a, b| (self.cmp)(a, b));
        for x in buf {
            if !accept(x) {
                return false;
            }
        }
        true
    }
}

/// Splits the upstream on a separator, emitting each run as a `Vec`.
///
/// A run closes (and is emitted, possibly empty) each time the separator
/// matches. The trailing run is emitted after exhaustion whenever any element
/// or separator was seen; a fully empty upstream yields no runs.
#[derive(Clone)]
pub struct Split<G, T> {
    prev: G,
    sep: T,
}

/// Create a stage that splits its input on `sep`.
pub fn split<G, T>(prev: G, sep: T) -> Split<G, T>
where
    G: Generator<Item = T>,
    T: PartialEq,
{
    Split { prev, sep }
}

impl<G, T> Generator for Split<G, T>
where
    G: Generator<Item = T>,
    T: PartialEq,
{
    type Item = Vec<T>;

    fn drive(&self, accept: &mut dyn FnMut(Vec<T>) -> bool) -> bool {
        let mut run: Option<Vec<T>> = None;
        let mut stopped = false;
        self.prev.drive(&mut |x| {
            let current = run.get_or_insert_with(Vec::new);
            if x == self.sep {
                let keep = accept(std::mem::take(current));
                if !keep {
                    stopped = true;
                }
                keep
            } else {
                current.push(x);
                true
            }
        });
        if stopped {
            return false;
        }
        match run {
            Some(last) => accept(last),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_reverse() {
        let s = Seq::from_vec(vec![1, 2, 3]);
        assert_eq!(s.reverse().get(), vec![3, 2, 1]);
    }

    #[test]
    fn test_sorted_by_element_ordering() {
        let s = Seq::from_vec(vec![3, 1, 2]);
        assert_eq!(s.sorted().get(), vec![1, 2, 3]);
    }

    #[test]
    fn test_sorted_by_comparator() {
        let s = Seq::from_vec(vec!["aaa", "c", "bb"]);
        let by_len = s.sorted_by(|a, b| a.len().cmp(&b.len())).get();
        assert_eq!(by_len, vec!["c", "bb", "aaa"]);
    }

    #[test]
    fn test_sorted_structs_without_ord() {
        #[derive(Clone, Debug, PartialEq)]
        struct NoOrd {
            val: i32,
        }

        let s = Seq::from_vec(vec![NoOrd { val: 3 }, NoOrd { val: 1 }, NoOrd { val: 2 }]);
        let res = s.sorted_by(|a, b| a.val.cmp(&b.val)).get();
        assert_eq!(res[0].val, 1);
        assert_eq!(res[1].val, 2);
        assert_eq!(res[2].val, 3);
    }

    #[test]
    fn test_split_on_whitespace() {
        let text = "the quick brown fox, jumps over the lazy dog";
        let words: Vec<String> = Seq::from_vec(text.chars().collect())
            .split(' ')
            .map(|run| run.into_iter().collect())
            .get();
        assert_eq!(
            words,
            vec!["the", "quick", "brown", "fox,", "jumps", "over", "the", "lazy", "dog"]
        );
    }

    #[test]
    fn test_split_on_comma() {
        let text = "the quick brown fox, jumps over the lazy dog";
        let parts: Vec<String> = Seq::from_vec(text.chars().collect())
            .split(',')
            .map(|run| run.into_iter().collect())
            .get();
        assert_eq!(parts, vec!["the quick brown fox", " jumps over the lazy dog"]);
    }

    #[test]
    fn test_split_trailing_separator_emits_empty_run() {
        let runs = Seq::from_vec(vec![1, 0, 2, 0]).split(0).get();
        assert_eq!(runs, vec![vec![1], vec![2], vec![]]);
    }

    #[test]
    fn test_split_empty_input_emits_nothing() {
        let runs = Seq::from_vec(Vec::<i32>::new()).split(0).get();
        assert_eq!(runs, Vec::<Vec<i32>>::new());
    }
}
