//! Lazy combinator stages.
//!
//! One struct per stage, each wrapping an upstream generator. A stage's
//! `drive` calls the upstream `drive` with an adapted continuation, so a
//! whole chain of stages fuses into a single traversal. Stage-local state
//! (take counters, scan accumulators, dedup keys) lives in locals inside
//! `drive`; a fresh traversal starts over from scratch.

mod dedup;
mod filter;
mod map;
mod materialize;
mod scan;
mod take;

pub use dedup::*;
pub use filter::*;
pub use map::*;
pub use materialize::*;
pub use scan::*;
pub use take::*;
