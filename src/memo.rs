//! Argument-keyed result caching for pure functions.
//!
//! [`memoize`] wraps a function in a [`Memo`]: the first call with a given
//! argument computes and records the result, every later call with that
//! argument returns the recorded value. Multi-argument functions key on
//! tuples.
//!
//! The cache is never invalidated or bounded; that is the documented
//! trade-off for pure, deterministic functions. Wrapping a function whose
//! behavior depends on external mutable state yields *stale* results after
//! the first call with a given key — intentionally: the cache is honored
//! over freshness.
//!
//! # Examples
//!
//! ```rust
//! use seq::prelude::*;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let square = memoize(|x: i64| {
//!     calls.set(calls.get() + 1);
//!     x * x
//! });
//!
//! assert_eq!(square.call(4), 16);
//! assert_eq!(square.call(4), 16);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::RefCell;
use std::hash::Hash;

use ahash::AHashMap;

/// A function wrapped with an argument-keyed result cache.
///
/// Interior mutability is single-threaded (`RefCell`); `Memo` is
/// deliberately not `Sync`. A thread-safe variant would need a lock or a
/// concurrent map and is out of scope.
pub struct Memo<F, A, R> {
    f: F,
    cache: RefCell<AHashMap<A, R>>,
}

/// Wrap `f` with an unbounded argument-keyed result cache.
pub fn memoize<F, A, R>(f: F) -> Memo<F, A, R>
where
    F: Fn(A) -> R,
    A: Clone + Eq + Hash,
    R: Clone,
{
    Memo {
        f,
        cache: RefCell::new(AHashMap::new()),
    }
}

impl<F, A, R> Memo<F, A, R>
where
    F: Fn(A) -> R,
    A: Clone + Eq + Hash,
    R: Clone,
{
    /// Call the wrapped function through the cache.
    ///
    /// On a hit the recorded value is returned unchanged, even if the
    /// wrapped function would now produce something else. On a miss the
    /// function runs outside the cache borrow, so it may itself consult
    /// other memos.
    pub fn call(&self, arg: A) -> R {
        if let Some(hit) = self.cache.borrow().get(&arg) {
            return hit.clone();
        }
        let value = (self.f)(arg.clone());
        self.cache.borrow_mut().insert(arg, value.clone());
        value
    }

    /// Number of distinct argument keys recorded so far.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::memoize;

    #[test]
    fn test_same_argument_invokes_wrapped_fn_once() {
        let calls = Cell::new(0);
        let is_even = memoize(|x: i32| {
            calls.set(calls.get() + 1);
            x % 2 == 0
        });

        assert!(!is_even.call(1));
        assert!(is_even.call(2));
        assert!(!is_even.call(111));
        assert!(is_even.call(222));
        assert_eq!(calls.get(), 4);

        assert!(!is_even.call(1));
        assert!(is_even.call(2));
        assert_eq!(calls.get(), 4);
        assert_eq!(is_even.cached(), 4);
    }

    #[test]
    fn test_adversarial_closure_yields_stale_results() {
        let flipped = Cell::new(false);
        let source = |x: i32| (x % 2 == 0) != flipped.get();
        let cached = memoize(source);

        assert!(!cached.call(1));
        assert!(cached.call(2));

        flipped.set(true);
        // the raw closure now disagrees with what the cache recorded
        assert!(source(1));
        assert!(!source(2));
        // the cache keeps returning the old answers: staleness is the contract
        assert!(!cached.call(1));
        assert!(cached.call(2));
    }

    #[test]
    fn test_tuple_keys_for_multi_argument_functions() {
        let calls = Cell::new(0);
        let add = memoize(|(a, b): (i64, i64)| {
            calls.set(calls.get() + 1);
            a + b
        });

        assert_eq!(add.call((2, 3)), 5);
        assert_eq!(add.call((2, 3)), 5);
        assert_eq!(add.call((3, 2)), 5);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_memo_composes_with_pipelines() {
        use crate::prelude::*;

        let calls = Cell::new(0);
        let square = memoize(|x: i64| {
            calls.set(calls.get() + 1);
            x * x
        });

        let s = Seq::from_vec(vec![1, 2, 1, 2, 3]).map(|x| square.call(x));
        assert_eq!(s.get(), vec![1, 4, 1, 4, 9]);
        assert_eq!(calls.get(), 3);
    }
}
