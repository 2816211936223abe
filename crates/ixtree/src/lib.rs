//! This crate contains array-backed data structures for quickly answering index queries
//! over a fixed universe `[0, n)`.
//!
//! The [`LazySegmentTree`] data structure allows adding a value to every element of an
//! interval and querying single elements in logarithmic time. Interval updates are
//! recorded as pending tags and pushed towards the leaves only when a query passes through.
//!
//! The [`FenwickTree`] data structure allows point updates and prefix sums in logarithmic
//! time. When the stored values are non-negative counts it also answers order statistics
//! queries, see [`FenwickTree::kth`].
//!
//! The [`DisjointSetUnion`] data structure maintains a partition of `[0, n)` under merges
//! using path halving and union by size.
//!
//! None of the structures depend on each other. The operators they aggregate with live in
//! [`ops`].
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]
#![deny(nonstandard_style, missing_docs)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Disjoint-set union with path halving and union by size
pub mod dsu;
/// Error types returned by the data structures
pub mod error;
/// Fenwick tree with prefix sums and order statistics
pub mod fenwick;
/// Segment tree with additive lazy propagation
pub mod lazy;
pub mod ops;

pub use dsu::DisjointSetUnion;
pub use error::{Error, Precondition};
pub use fenwick::FenwickTree;
pub use lazy::LazySegmentTree;
