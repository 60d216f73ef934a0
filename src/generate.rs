//! Core trait for push-style sequence generators.
//!
//! This module defines the [`Generator`] trait, the fundamental building block
//! of the library. A [`Generator`] represents a replayable traversal: it pushes
//! each element of a sequence into a caller-supplied continuation, stopping as
//! soon as the continuation asks it to or the source runs out.
//!
//! Every combinator in this crate is a struct wrapping an upstream generator,
//! whose `drive` calls the upstream `drive` with an adapted continuation. A
//! whole pipeline therefore runs as one fused traversal on one call stack,
//! with no intermediate buffers.
//!
//! # Examples
//!
//! ```rust
//! use seq::prelude::*;
//!
//! let s = Seq::from_vec(vec![1, 2, 3]);
//! let mut out = Vec::new();
//! s.drive(&mut |x| {
//!     out.push(x);
//!     true
//! });
//! assert_eq!(out, vec![1, 2, 3]);
//! ```

use either::Either;

/// A replayable, push-style traversal over a sequence of items.
///
/// `drive` invokes `accept` once per element, in order, and must stop as soon
/// as `accept` returns `false` or the source is exhausted. It returns `false`
/// iff the traversal was cut short by `accept`; stages that cut their *own*
/// input short (like `take`) still report `true`, since from downstream's
/// point of view the sequence simply ended.
///
/// `drive` takes `&self`: a generator carries no cross-traversal state, so
/// driving it again replays the same computation (re-running any user
/// closures). Per-traversal state lives in locals inside `drive`.
pub trait Generator {
    /// The element type pushed into the continuation.
    type Item;

    /// Drive the traversal, pushing each element into `accept`.
    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool;
}

impl<G> Generator for &G
where
    G: Generator + ?Sized,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        (**self).drive(accept)
    }
}

impl<T> Generator for Box<dyn Generator<Item = T>> {
    type Item = T;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        (**self).drive(accept)
    }
}

impl<L, R> Generator for Either<L, R>
where
    L: Generator,
    R: Generator<Item = L::Item>,
{
    type Item = L::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        match self {
            Either::Left(l) => l.drive(accept),
            Either::Right(r) => r.drive(accept),
        }
    }
}
