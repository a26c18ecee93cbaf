//! Recursion-node tree: the heap-resident stand-in for the QuickHull call stack.
//!
//! Purpose
//! - Hold one `RecursionNode` per pending or finished sub-problem, with
//!   exclusive child ownership and a lookup-only parent link, so the driver can
//!   suspend between steps and resume where a recursive call would return.
//!
//! Design
//! - Index-based arena (`NodeTree`): nodes live in slots addressed by `NodeId`.
//!   A parent owns its two children; the parent link is just an id, so no
//!   ownership cycle exists.
//! - Children are built once, from the parent's candidate set, when the node is
//!   first visited. Released subtrees return their slots to a free list.

mod arena;
mod types;

pub use arena::NodeTree;
pub use types::{NodeId, Progress, RecursionNode, Segment};
