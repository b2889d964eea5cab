//! Crate prelude.

// The actual prelude.
pub use crate::{
    error::{check_argument, Result, SetError},
    function::{Equation, SetFunction},
    graph::{
        cycle::Cycle,
        general::GeneralGraph,
        hierarchy::{Hierarchy, HierarchyNode, NodeId},
        link::Link,
        path::Path,
        tree::Tree,
        Graph, GraphTrait,
    },
    indexed::IndexedSet,
    ordered::OrderedSequence,
    partition::PartitionSet,
    pointed::PointedSet,
    relation::{Equivalence, Order, Relation},
    set::FiniteSet,
    sum::Summand,
    Element,
};

// Convenient imports within the crate.
pub(crate) use crate::SmallVec;
pub(crate) use derive_more::{From, IntoIterator};
pub(crate) use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
    fmt::{Debug, Display, Formatter, Result as FmtResult},
};
