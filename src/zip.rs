//! Pairwise and index-augmenting composition.
//!
//! [`zip`] and [`zip3`] are eager: each input is materialized once and the
//! result replays owned tuples. Equal lengths are a precondition, enforced
//! with a fail-fast panic rather than reading past the shorter input.
//!
//! [`enumerate`] is the lazy index pairing, terminating whenever the
//! underlying sequence does.
//!
//! # Examples
//!
//! ```rust
//! use seq::prelude::*;
//!
//! let nums = Seq::from_vec(vec![1, 2, 3]);
//! let tags = Seq::from_vec(vec!["x", "y", "z"]);
//! assert_eq!(zip(&nums, &tags).get(), vec![(1, "x"), (2, "y"), (3, "z")]);
//! ```

use crate::combinators::WithIndex;
use crate::generate::Generator;
use crate::seq::Seq;
use crate::source::Replay;

/// Pair two equal-length sequences position-wise.
///
/// Panics if the lengths differ.
pub fn zip<GA, GB>(a: &Seq<GA>, b: &Seq<GB>) -> Seq<Replay<(GA::Item, GB::Item)>>
where
    GA: Generator,
    GB: Generator,
{
    let left = a.get();
    let right = b.get();
    assert!(
        left.len() == right.len(),
        "zip: sequences must have equal lengths ({} vs {})",
        left.len(),
        right.len(),
    );
    Seq::from_vec(left.into_iter().zip(right).collect())
}

/// Pair three equal-length sequences position-wise.
///
/// Panics if any lengths differ.
pub fn zip3<GA, GB, GC>(
    a: &Seq<GA>,
    b: &Seq<GB>,
    c: &Seq<GC>,
) -> Seq<Replay<(GA::Item, GB::Item, GC::Item)>>
where
    GA: Generator,
    GB: Generator,
    GC: Generator,
{
    let first = a.get();
    let second = b.get();
    let third = c.get();
    assert!(
        first.len() == second.len() && second.len() == third.len(),
        "zip3: sequences must have equal lengths ({}, {}, {})",
        first.len(),
        second.len(),
        third.len(),
    );
    Seq::from_vec(
        first
            .into_iter()
            .zip(second)
            .zip(third)
            .map(|((x, y), z)| (x, y, z))
            .collect(),
    )
}

/// Pair each element with its zero-based position, lazily.
///
/// ```rust
/// use seq::prelude::*;
///
/// let s = Seq::from_vec(vec![10, 20, 30]);
/// assert_eq!(enumerate(s).get(), vec![(0, 10), (1, 20), (2, 30)]);
/// ```
pub fn enumerate<G>(s: Seq<G>) -> Seq<WithIndex<G>>
where
    G: Generator,
{
    s.with_index()
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_zip_pairs_positionally() {
        let nums = Seq::from_vec(vec![1, 2, 3]);
        let names = Seq::from_vec(vec!["aaa", "bb", "c"]);
        let pairs = zip(&nums, &names);
        assert_eq!(pairs.get(), vec![(1, "aaa"), (2, "bb"), (3, "c")]);
    }

    #[test]
    fn test_zip_output_is_replayable() {
        let nums = Seq::from_vec(vec![1, 2]);
        let tags = Seq::from_vec(vec!["a", "b"]);
        let pairs = zip(&nums, &tags);
        assert_eq!(pairs.count(), 2);
        assert_eq!(pairs.head(), Some((1, "a")));
    }

    #[test]
    fn test_zip3() {
        let a = Seq::from_vec(vec![1, 2]);
        let b = Seq::from_vec(vec!["x", "y"]);
        let c = Seq::from_vec(vec![true, false]);
        assert_eq!(
            zip3(&a, &b, &c).get(),
            vec![(1, "x", true), (2, "y", false)]
        );
    }

    #[test]
    #[should_panic(expected = "equal lengths")]
    fn test_zip_unequal_lengths_panics() {
        let a = Seq::from_vec(vec![1, 2, 3]);
        let b = Seq::from_vec(vec!["x"]);
        let _ = zip(&a, &b);
    }

    #[test]
    fn test_zip_over_derived_stages() {
        let base = Seq::from_vec(vec![1, 2, 3]);
        let squares = base.clone().map(|x| x * x);
        let pairs = zip(&base, &squares);
        assert_eq!(pairs.get(), vec![(1, 1), (2, 4), (3, 9)]);
    }

    #[test]
    fn test_enumerate_pairs_index_and_value() {
        let s = Seq::from_vec(vec![10, 20, 30]);
        assert_eq!(enumerate(s).get(), vec![(0, 10), (1, 20), (2, 30)]);
    }

    #[test]
    fn test_enumerate_terminates_with_the_source() {
        let res = enumerate(iota(5, 5)).take(3).get();
        assert_eq!(res, vec![(0, 5), (1, 10), (2, 15)]);
    }
}
