//! Sequence sources.
//!
//! Sources are the leaf generators a pipeline starts from:
//!
//! - [`unfold`] grows a sequence from a seed and a successor function, and is
//!   the sole mechanism for arbitrary — including infinite — sequences.
//!   [`iota`] and [`range`] are thin layers over the same idea.
//! - [`Replay`] drives a materialized, reference-counted buffer. It is what
//!   [`Seq::eval`](crate::Seq::eval) binds its output to, so an otherwise
//!   one-shot chain can be replayed without re-running upstream closures.
//! - [`from_collection`] adapts any cloneable collection, the analogue of
//!   building a sequence from a cursor pair.
//!
//! # Examples
//!
//! Fibonacci, lazily:
//!
//! ```rust
//! use seq::prelude::*;
//!
//! let fib = unfold((1u64, 1u64), |&(a, b)| Some((b, a + b))).map(|(a, _)| a);
//! assert_eq!(fib.take(6).get(), vec![1, 1, 2, 3, 5, 8]);
//! ```

use std::ops::Add;
use std::rc::Rc;

use crate::generate::Generator;
use crate::seq::Seq;

/// Generator over a shared, materialized buffer.
///
/// The buffer is reference-counted and immutable; every derived stage owns
/// its parent generator by value, so the buffer stays alive for as long as
/// any pipeline built on top of it.
#[derive(Clone)]
pub struct Replay<T> {
    data: Rc<Vec<T>>,
}

impl<T> Replay<T> {
    pub fn new(data: Vec<T>) -> Self {
        Replay { data: Rc::new(data) }
    }
}

impl<T> Generator for Replay<T>
where
    T: Clone,
{
    type Item = T;

    fn drive(&self, accept: &mut dyn FnMut(T) -> bool) -> bool {
        for x in self.data.iter() {
            if !accept(x.clone()) {
                return false;
            }
        }
        true
    }
}

/// Generator adapting any cloneable collection.
///
/// The collection is cloned once per traversal, which keeps the generator
/// replayable without requiring `T: Clone`.
#[derive(Clone)]
pub struct IterSource<I> {
    iter: I,
}

impl<I> Generator for IterSource<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        for x in self.iter.clone() {
            if !accept(x) {
                return false;
            }
        }
        true
    }
}

/// Generator growing a sequence from a seed and a successor function.
///
/// Emits the seed, then repeatedly applies `step` to the last emitted value;
/// the sequence ends the first time `step` returns `None`. `step` is only
/// called when another element is actually wanted.
#[derive(Clone)]
pub struct Unfold<T, F> {
    seed: T,
    step: F,
}

impl<T, F> Generator for Unfold<T, F>
where
    T: Clone,
    F: Fn(&T) -> Option<T>,
{
    type Item = T;

    fn drive(&self, accept: &mut dyn FnMut(T) -> bool) -> bool {
        let mut cur = self.seed.clone();
        loop {
            if !accept(cur.clone()) {
                return false;
            }
            match (self.step)(&cur) {
                Some(next) => cur = next,
                None => return true,
            }
        }
    }
}

/// Half-open numeric range generator; see [`range`].
#[derive(Clone)]
pub struct Range<T> {
    start: T,
    end: T,
    incr: T,
}

impl<T> Generator for Range<T>
where
    T: Add<Output = T> + PartialOrd + Clone,
{
    type Item = T;

    fn drive(&self, accept: &mut dyn FnMut(T) -> bool) -> bool {
        let mut cur = self.start.clone();
        while cur < self.end {
            if !accept(cur.clone()) {
                return false;
            }
            cur = cur + self.incr.clone();
        }
        true
    }
}

/// Build a sequence from a seed and a successor function.
///
/// Emits `seed`, then `step(&seed)`, then `step` of that, and so on until
/// `step` returns `None`. A `step` that never returns `None` describes an
/// infinite sequence; pair it with [`take`](crate::Seq::take) or
/// [`take_while`](crate::Seq::take_while).
///
/// ```rust
/// use seq::prelude::*;
///
/// let halves = unfold(64u32, |&x| if x > 1 { Some(x / 2) } else { None });
/// assert_eq!(halves.get(), vec![64, 32, 16, 8, 4, 2, 1]);
/// ```
pub fn unfold<T, F>(seed: T, step: F) -> Seq<Unfold<T, F>>
where
    T: Clone,
    F: Fn(&T) -> Option<T>,
{
    Seq::new(Unfold { seed, step })
}

/// The never-ending sequence `start, start + incr, start + 2 * incr, …`.
///
/// ```rust
/// use seq::prelude::*;
///
/// assert_eq!(iota(5, 10).take(3).get(), vec![5, 15, 25]);
/// ```
pub fn iota<T>(start: T, incr: T) -> Seq<Unfold<T, impl Clone + Fn(&T) -> Option<T>>>
where
    T: Add<Output = T> + Clone,
{
    unfold(start, move |x| Some(x.clone() + incr.clone()))
}

/// The half-open range `[start, end)`, stepping by `incr`.
///
/// Emits `x` while `x < end`. This is conventional half-open semantics: with
/// `incr != 1` the last emitted value may be anywhere in `[end - incr, end)`.
/// An `incr` that does not move `start` toward `end` would never terminate
/// and is a precondition violation.
///
/// ```rust
/// use seq::prelude::*;
///
/// assert_eq!(range(1, 4, 1).get(), vec![1, 2, 3]);
/// assert_eq!(range(0, 10, 4).get(), vec![0, 4, 8]);
/// ```
pub fn range<T>(start: T, end: T, incr: T) -> Seq<Range<T>>
where
    T: Add<Output = T> + PartialOrd + Clone,
{
    Seq::new(Range { start, end, incr })
}

/// Adapt any cloneable collection into a sequence.
///
/// ```rust
/// use seq::prelude::*;
///
/// let words = from_collection(["lazy", "by", "default"]);
/// assert_eq!(words.count(), 3);
/// ```
pub fn from_collection<I>(collection: I) -> Seq<IterSource<I>>
where
    I: IntoIterator + Clone,
{
    Seq::new(IterSource { iter: collection })
}
