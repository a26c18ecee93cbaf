//! Step driver: advances QuickHull one recursion node per call.
//!
//! Protocol per `step()`
//! - An empty candidate set marks the cursor node `Complete`.
//! - `Complete` nodes are popped (their subtrees released) until a node with
//!   work remains; popping the root ends the computation.
//! - One visit: on the first visit the node's furthest candidate becomes a hull
//!   point and both children are built, and the cursor enters the first child;
//!   on the second visit the cursor enters the second child and the node is
//!   `Complete`.
//!
//! The root is special only in its seed: its children are the two halves of
//! the input against `(min → max)` and `(max → min)`, built at start, and the
//! two extremes are the first hull points.

mod computation;

pub use computation::{QuickHull, Visit};

#[cfg(test)]
mod props;
