//! # Seq: Composable Lazy Sequence Pipelines
//!
//! Build multi-stage data pipelines (map, filter, take, scan, reduce, …) over
//! arbitrary — including infinite — sources, evaluated in a single fused pass
//! with no intermediate materialization.
//!
//! ## Core Pieces
//!
//! - **[`Generator`]**: a replayable push-style traversal — it feeds each
//!   element to a continuation and stops on request or exhaustion
//! - **[`Seq<G>`]**: the sequence handle carrying chainable combinators and
//!   terminal operations
//!
//! ## Key Properties
//!
//! - **Fused**: every combinator wraps the upstream generator's continuation,
//!   so a whole chain runs as one traversal on one call stack
//! - **Lazy**: nothing runs until a terminal operation drives the pipeline;
//!   infinite sources work as long as something bounds the traversal
//! - **Replayable**: driving a sequence again repeats the same computation;
//!   [`Seq::eval`] materializes once for cheap re-iteration
//!
//! ## Example
//!
//! ```rust
//! use seq::prelude::*;
//!
//! // Sum of all multiples of 3 or 5 below 1000, off an infinite source
//! let total: i64 = iota(0i64, 1)
//!     .take_while(|x| *x < 1000)
//!     .filter(|x| x % 3 == 0 || x % 5 == 0)
//!     .sum();
//! assert_eq!(total, 233_168);
//! ```
//!
//! ## Construction
//!
//! - [`unfold(seed, step)`](unfold) — seed plus successor function, the
//!   general (and only infinite-capable) source
//! - [`iota(start, incr)`](iota) / [`range(start, end, incr)`](range) —
//!   arithmetic sequences
//! - [`Seq::from_vec`] / [`from_collection`] — materialized or adapted
//!   collections
//!
//! ## Beyond sequences
//!
//! - [`memoize`] wraps a function with an argument-keyed result cache
//! - [`zip`] / [`zip3`] pair equal-length sequences; [`enumerate`] pairs
//!   elements with their positions
//!
//! The engine is single-threaded and purely value-transforming: traversal is
//! nested function calls on one stack, cancellation is a boolean returned by
//! the continuation, and absence of a result is an `Option`, never a fault.

mod generate;
mod memo;
mod seq;
mod source;
mod zip;

pub mod combinators;
pub mod prelude;

pub use generate::Generator;
pub use memo::{memoize, Memo};
pub use seq::Seq;
pub use source::{from_collection, iota, range, unfold, IterSource, Range, Replay, Unfold};
pub use zip::{enumerate, zip, zip3};
