//! The sequence handle: chainable stages and terminal operations.
//!
//! [`Seq`] wraps a [`Generator`] and carries the whole combinator surface.
//! Combinators consume `self` and return a new `Seq` owning the previous
//! stage by value; clone a sequence to keep composing from an earlier stage.
//! Terminal operations take `&self` and drive the fused pipeline exactly
//! once per call.
//!
//! # Examples
//!
//! ```rust
//! use seq::prelude::*;
//!
//! let squares = Seq::from_vec(vec![1, 2, 3]).map(|x| x * x);
//! assert_eq!(squares.get(), vec![1, 4, 9]);
//! assert_eq!(squares.sum(), 14);
//! ```
//!
//! Pipelines over infinite sources terminate as soon as a bounding stage or
//! an early-exit terminal stops pulling:
//!
//! ```rust
//! use seq::prelude::*;
//!
//! let found = iota(0, 1).map(|x| x * x).any(|x| *x > 50);
//! assert!(found);
//! ```

use std::cmp::Ordering;
use std::hash::Hash;
use std::ops::Add;

use crate::combinators::{
    dedup, drop, drop_every, drop_while, filter, flat_map, map, reverse, scan, scan1, sorted,
    sorted_by, split, take, take_while, uniq, with_index, Dedup, Drop, DropEvery, DropWhile,
    Filter, FlatMap, Map, Reverse, Scan, Scan1, Sorted, SortedBy, Split, Take, TakeWhile, Uniq,
    WithIndex,
};
use crate::generate::Generator;
use crate::source::Replay;

/// An immutable, cheaply-cloneable handle over a [`Generator`].
#[derive(Clone)]
pub struct Seq<G> {
    gen: G,
}

impl<G> Seq<G>
where
    G: Generator,
{
    /// Wrap a generator in a sequence handle.
    pub fn new(gen: G) -> Self {
        Seq { gen }
    }

    /// Erase the concrete stage types behind a boxed generator.
    ///
    /// Useful when pipelines with different shapes must share one type, at
    /// the cost of a dynamic dispatch per stage boundary.
    pub fn boxed(self) -> Seq<Box<dyn Generator<Item = G::Item>>>
    where
        G: 'static,
    {
        Seq::new(Box::new(self.gen))
    }

    // ---- chainable stages -------------------------------------------------

    /// Transform each element with `f`.
    pub fn map<F, U>(self, f: F) -> Seq<Map<G, F>>
    where
        F: Fn(G::Item) -> U,
    {
        Seq::new(map(self.gen, f))
    }

    /// Flatten a sequence of sequences, transforming each inner element
    /// with `f`.
    pub fn flat_map<F, U>(self, f: F) -> Seq<FlatMap<G, F>>
    where
        G::Item: Generator,
        F: Fn(<G::Item as Generator>::Item) -> U,
    {
        Seq::new(flat_map(self.gen, f))
    }

    /// Pair each element with its zero-based position.
    pub fn with_index(self) -> Seq<WithIndex<G>> {
        Seq::new(with_index(self.gen))
    }

    /// Keep only elements satisfying `pred`.
    pub fn filter<P>(self, pred: P) -> Seq<Filter<G, P>>
    where
        P: Fn(&G::Item) -> bool,
    {
        Seq::new(filter(self.gen, pred))
    }

    /// Forward at most `count` elements, then halt the upstream.
    pub fn take(self, count: usize) -> Seq<Take<G>> {
        Seq::new(take(self.gen, count))
    }

    /// Forward the longest prefix for which `pred` holds; the first failing
    /// element stops the traversal and is not emitted.
    pub fn take_while<P>(self, pred: P) -> Seq<TakeWhile<G, P>>
    where
        P: Fn(&G::Item) -> bool,
    {
        Seq::new(take_while(self.gen, pred))
    }

    /// Suppress the first `count` elements.
    pub fn drop(self, count: usize) -> Seq<Drop<G>> {
        Seq::new(drop(self.gen, count))
    }

    /// Suppress elements while `pred` holds, then forward everything else.
    pub fn drop_while<P>(self, pred: P) -> Seq<DropWhile<G, P>>
    where
        P: Fn(&G::Item) -> bool,
    {
        Seq::new(drop_while(self.gen, pred))
    }

    /// Suppress every `period`-th element (1-based). Panics if `period` is
    /// zero.
    pub fn drop_every(self, period: usize) -> Seq<DropEvery<G>> {
        Seq::new(drop_every(self.gen, period))
    }

    /// Running fold, emitting the accumulator after each element.
    pub fn scan<A, F>(self, init: A, f: F) -> Seq<Scan<G, A, F>>
    where
        A: Clone,
        F: Fn(A, G::Item) -> A,
    {
        Seq::new(scan(self.gen, init, f))
    }

    /// Unseeded running fold: the first element passes through as the
    /// initial accumulator.
    pub fn scan1<F>(self, f: F) -> Seq<Scan1<G, F>>
    where
        G::Item: Clone,
        F: Fn(G::Item, G::Item) -> G::Item,
    {
        Seq::new(scan1(self.gen, f))
    }

    /// Collapse consecutive runs of equal elements.
    pub fn dedup(self) -> Seq<Dedup<G, impl Clone + Fn(&G::Item) -> G::Item>>
    where
        G::Item: Clone + PartialEq,
    {
        Seq::new(dedup(self.gen, |x: &G::Item| x.clone()))
    }

    /// Collapse consecutive runs whose projected key repeats.
    pub fn dedup_by<F, K>(self, key: F) -> Seq<Dedup<G, F>>
    where
        F: Fn(&G::Item) -> K,
        K: PartialEq,
    {
        Seq::new(dedup(self.gen, key))
    }

    /// Suppress elements already seen anywhere earlier in the traversal.
    pub fn uniq(self) -> Seq<Uniq<G, impl Clone + Fn(&G::Item) -> G::Item>>
    where
        G::Item: Clone + Hash + Eq,
    {
        Seq::new(uniq(self.gen, |x: &G::Item| x.clone()))
    }

    /// Suppress elements whose projected key was seen anywhere earlier in
    /// the traversal.
    pub fn uniq_by<F, K>(self, key: F) -> Seq<Uniq<G, F>>
    where
        F: Fn(&G::Item) -> K,
        K: Hash + Eq,
    {
        Seq::new(uniq(self.gen, key))
    }

    /// Emit the elements in reverse order (materializes per traversal).
    pub fn reverse(self) -> Seq<Reverse<G>> {
        Seq::new(reverse(self.gen))
    }

    /// Emit the elements in ascending order (materializes per traversal).
    pub fn sorted(self) -> Seq<Sorted<G>>
    where
        G::Item: Ord,
    {
        Seq::new(sorted(self.gen))
    }

    /// Emit the elements sorted by `cmp` (materializes per traversal).
    pub fn sorted_by<C>(self, cmp: C) -> Seq<SortedBy<G, C>>
    where
        C: Fn(&G::Item, &G::Item) -> Ordering,
    {
        Seq::new(sorted_by(self.gen, cmp))
    }

    /// Split on a separator element, emitting each run as a `Vec`.
    pub fn split(self, sep: G::Item) -> Seq<Split<G, G::Item>>
    where
        G::Item: PartialEq,
    {
        Seq::new(split(self.gen, sep))
    }

    // ---- terminal operations ----------------------------------------------

    /// Materialize every element into a `Vec`.
    pub fn get(&self) -> Vec<G::Item> {
        let mut out = Vec::new();
        self.gen.drive(&mut |x| {
            out.push(x);
            true
        });
        out
    }

    /// Materialize once and return a sequence replaying the buffer.
    ///
    /// Re-iterating the returned sequence does not re-run upstream closures;
    /// use this to replay an expensive or side-effecting chain cheaply.
    pub fn eval(&self) -> Seq<Replay<G::Item>>
    where
        G::Item: Clone,
    {
        Seq::new(Replay::new(self.get()))
    }

    /// Fold left-to-right from `init`.
    ///
    /// ```rust
    /// use seq::prelude::*;
    ///
    /// assert_eq!(range(1, 4, 1).reduce(0, |acc, x| acc + x), 6);
    /// ```
    pub fn reduce<A, F>(&self, init: A, f: F) -> A
    where
        F: Fn(A, G::Item) -> A,
    {
        let mut acc = Some(init);
        self.gen.drive(&mut |x| {
            let a = acc.take().expect("reduce: accumulator is always present");
            acc = Some(f(a, x));
            true
        });
        acc.expect("reduce: accumulator is always present")
    }

    /// Sum all elements, starting from the type's default value.
    pub fn sum(&self) -> G::Item
    where
        G::Item: Default + Add<Output = G::Item>,
    {
        self.reduce(G::Item::default(), |acc, x| acc + x)
    }

    /// The greatest element under `cmp`, or `None` for an empty sequence.
    pub fn max_by<C>(&self, cmp: C) -> Option<G::Item>
    where
        C: Fn(&G::Item, &G::Item) -> Ordering,
    {
        let mut best: Option<G::Item> = None;
        self.gen.drive(&mut |x| {
            best = Some(match best.take() {
                Some(b) if cmp(&x, &b) != Ordering::Greater => b,
                _ => x,
            });
            true
        });
        best
    }

    /// The greatest element, or `None` for an empty sequence.
    pub fn max(&self) -> Option<G::Item>
    where
        G::Item: Ord,
    {
        self.max_by(Ord::cmp)
    }

    /// Whether any element satisfies `pred`; stops at the first match.
    pub fn any<P>(&self, pred: P) -> bool
    where
        P: Fn(&G::Item) -> bool,
    {
        let mut found = false;
        self.gen.drive(&mut |x| {
            if pred(&x) {
                found = true;
                return false;
            }
            true
        });
        found
    }

    /// Whether every element satisfies `pred`; stops at the first failure.
    pub fn all<P>(&self, pred: P) -> bool
    where
        P: Fn(&G::Item) -> bool,
    {
        let mut holds = true;
        self.gen.drive(&mut |x| {
            if !pred(&x) {
                holds = false;
                return false;
            }
            true
        });
        holds
    }

    /// The first element, or `None` if the sequence is empty. Stops the
    /// traversal immediately after one element.
    pub fn head(&self) -> Option<G::Item> {
        let mut first = None;
        self.gen.drive(&mut |x| {
            first = Some(x);
            false
        });
        first
    }

    /// The last element, or `None` if the sequence is empty. Forces a full
    /// traversal.
    pub fn tail(&self) -> Option<G::Item> {
        let mut last = None;
        self.gen.drive(&mut |x| {
            last = Some(x);
            true
        });
        last
    }

    /// Number of elements in the sequence.
    pub fn count(&self) -> usize {
        let mut n = 0;
        self.gen.drive(&mut |_| {
            n += 1;
            true
        });
        n
    }

    /// Number of elements satisfying `pred`.
    pub fn count_if<P>(&self, pred: P) -> usize
    where
        P: Fn(&G::Item) -> bool,
    {
        let mut n = 0;
        self.gen.drive(&mut |x| {
            if pred(&x) {
                n += 1;
            }
            true
        });
        n
    }
}

impl<T> Seq<Replay<T>> {
    /// A sequence replaying an owned buffer.
    pub fn from_vec(data: Vec<T>) -> Self {
        Seq {
            gen: Replay::new(data),
        }
    }
}

impl<T> From<Vec<T>> for Seq<Replay<T>> {
    fn from(data: Vec<T>) -> Self {
        Seq::from_vec(data)
    }
}

impl<T> FromIterator<T> for Seq<Replay<T>> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Seq::from_vec(iter.into_iter().collect())
    }
}

impl<G> Generator for Seq<G>
where
    G: Generator,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        self.gen.drive(accept)
    }
}
