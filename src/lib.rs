//! # Finite sets, partitions and graphs
//!
//! Immutable finite sets with their algebra ([`FiniteSet`](set::FiniteSet)), lifted functions and
//! predicates ([`SetFunction`](function::SetFunction), [`Equation`](function::Equation)), ordered
//! sequences, partitions into equivalence classes, and four kinds of graphs built on top of them:
//! general graphs, cycles, paths and trees.
//!
//! Every value is immutable once built. The only mutable state lives in the
//! [`Hierarchy`](graph::hierarchy::Hierarchy) arena, and only while its nodes are being created.

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod function;
pub mod graph;
pub mod indexed;
pub mod ordered;
pub mod partition;
pub mod pointed;
pub mod prelude;
pub mod relation;
pub mod set;
pub mod sum;

mod tests;

use std::fmt::Debug;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;

/// Builds a [`FiniteSet`](set::FiniteSet) from a list of elements. Repeated elements are kept once.
///
/// ```
/// # use finsets::set;
/// let s = set![3, 1, 2, 1];
/// assert_eq!(s.card(), 3);
/// ```
#[macro_export]
macro_rules! set {
    () => (
        $crate::set::FiniteSet::empty()
    );
    ($($x: expr), +$(,)*) => (
        <$crate::set::FiniteSet<_> as ::std::iter::FromIterator<_>>::from_iter([$($x),+])
    );
}

/// The bound every element of a [`FiniteSet`](set::FiniteSet) must satisfy.
///
/// Elements are kept in an ordered tree, so they must be totally ordered. They are cloned whenever
/// a new set is derived from an old one.
pub trait Element: Clone + Ord + Debug {}

impl<T: Clone + Ord + Debug> Element for T {}

/// A seal for [`GraphTrait`](graph::GraphTrait), avoiding foreign implementations.
trait Seal {}
