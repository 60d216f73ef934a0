//! Commonly used imports
//!
//! Use `use seq::prelude::*;` for quick access to the most common types and
//! functions.

// Core types
pub use crate::{Generator, Seq};

// Sources
pub use crate::{from_collection, iota, range, unfold};

// Pairwise composition
pub use crate::{enumerate, zip, zip3};

// Memoization
pub use crate::{memoize, Memo};
