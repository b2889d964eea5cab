//! Graphs over finite sets.
//!
//! Every graph implements [`GraphTrait`], which describes what can be asked of a graph
//! regardless of how it's stored. The four kinds of graphs are:
//!
//! - [`GeneralGraph`]: arbitrary vertices and links, with vertices partitioned into their
//!   connected components.
//! - [`Cycle`]: an ordered sequence whose last element links back to the first.
//! - [`Path`]: an ordered sequence, each element linked to the next.
//! - [`Tree`]: nodes from a [`Hierarchy`], each linked to its parent.
//!
//! The closed enum [`Graph`] holds any of them.

pub mod cycle;
pub mod general;
pub mod hierarchy;
pub mod link;
pub mod path;
pub mod tree;

use crate::{prelude::*, Seal};

/// Walks a graph from `start`.
///
/// At each point, `step` is given the candidates to move to and the points visited so far, and
/// picks the next point. The walk ends once there are no candidates, once every candidate has been
/// visited, or once `step` returns `None`.
pub(crate) fn walk<T: Element, V: AsRef<FiniteSet<T>>>(
    vertices: &FiniteSet<T>,
    start: &T,
    mut candidates: impl FnMut(&T) -> Option<V>,
    mut step: impl FnMut(&V, &BTreeSet<T>) -> Option<T>,
) -> Result<OrderedSequence<T>> {
    check_argument(vertices.contains(start), "a flow must start at a vertex")?;

    let mut visited = BTreeSet::new();
    visited.insert(start.clone());
    let mut flow = vec![start.clone()];
    let mut current = start.clone();
    while let Some(next) = candidates(&current) {
        let set = next.as_ref();
        if set.iter().all(|el| visited.contains(el)) {
            break;
        }

        let Some(point) = step(&next, &visited) else {
            break;
        };
        check_argument(set.contains(&point), "a flow can only move to a neighbour")?;
        if !visited.insert(point.clone()) {
            return Err(SetError::UnsupportedOperation("a flow cannot revisit a vertex"));
        }

        tracing::trace!(?point, "flow step");
        flow.push(point.clone());
        current = point;
    }

    Ok(OrderedSequence::from_distinct(flow))
}

/// The greatest element of `set` not yet visited.
pub(crate) fn greatest_unvisited<T: Element, C: FnMut(&T, &T) -> Ordering>(
    set: &FiniteSet<T>,
    visited: &BTreeSet<T>,
    mut cmp: C,
) -> Option<T> {
    set.iter()
        .filter(|el| !visited.contains(el))
        .max_by(|a, b| cmp(a, b))
        .cloned()
}

/// The capabilities shared by all graphs.
///
/// ## Invariants
///
/// - Every link in [`edge_set`](GraphTrait::edge_set) joins two vertices of
///   [`vertex_set`](GraphTrait::vertex_set).
/// - The sets returned by [`neighbours`](GraphTrait::neighbours) are never empty.
///
/// This trait is sealed, so that it can only be implemented by the graphs in this crate.
#[allow(private_bounds)]
pub trait GraphTrait<T: Element>: Seal + Element {
    /// The container holding the neighbours of a point.
    type Vertices: AsRef<FiniteSet<T>> + Into<FiniteSet<T>>;

    /// The points adjacent to `point`. Returns `None` if the point is isolated, or not a vertex
    /// at all.
    fn neighbours(&self, point: &T) -> Option<Self::Vertices>;

    /// The subgraph induced on the vertices within `points`. It keeps exactly the links with both
    /// endpoints in `points`.
    fn on(&self, points: &FiniteSet<T>) -> GeneralGraph<T>;

    /// The maximal connected subgraph containing `point`.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if `point` is not a vertex.
    fn connected_component(&self, point: &T) -> Result<Self>;

    /// The set of connected components.
    fn connected_components(&self) -> FiniteSet<Self>;

    /// The set of links.
    fn edge_set(&self) -> FiniteSet<Link<T>>;

    /// The set of vertices.
    fn vertex_set(&self) -> &FiniteSet<T>;

    /// Walks the graph from `start`, letting `chooser` pick a neighbour at each step.
    ///
    /// The walk ends at the first point whose neighbours have all been visited, and it returns
    /// the points in the order they were visited.
    ///
    /// ## Errors
    ///
    /// - [`SetError::InvalidArgument`] if `start` is not a vertex, or if `chooser` returns
    ///   something other than a neighbour.
    /// - [`SetError::UnsupportedOperation`] if `chooser` moves back to a visited point.
    fn flow<F: FnMut(&Self::Vertices) -> T>(
        &self,
        mut chooser: F,
        start: &T,
    ) -> Result<OrderedSequence<T>> {
        walk(
            self.vertex_set(),
            start,
            |point| self.neighbours(point),
            |next, _| Some(chooser(next)),
        )
    }

    /// Walks the graph from `start`, moving at each step to the greatest neighbour under `cmp`
    /// that has not been visited yet.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if `start` is not a vertex.
    fn flow_by<C: FnMut(&T, &T) -> Ordering>(
        &self,
        mut cmp: C,
        start: &T,
    ) -> Result<OrderedSequence<T>> {
        walk(
            self.vertex_set(),
            start,
            |point| self.neighbours(point),
            |next, visited| greatest_unvisited(next.as_ref(), visited, &mut cmp),
        )
    }

    /// The vertices within `subset`, together with every vertex reachable from them.
    fn neighbours_of(&self, subset: &FiniteSet<T>) -> FiniteSet<T> {
        let mut reached = subset.intersection(self.vertex_set());
        let mut frontier = reached.clone();

        while !frontier.is_empty() {
            let found = FiniteSet::union_of(
                frontier
                    .iter()
                    .filter_map(|point| self.neighbours(point))
                    .map(Into::into),
            );
            frontier = found.minus_set(&reached);
            reached = reached.union(&frontier);
        }

        reached
    }

    /// Whether two vertices lie in the same connected component.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if either point is not a vertex.
    fn are_connected(&self, v1: &T, v2: &T) -> Result<bool> {
        Ok(self.connected_component(v1)? == self.connected_component(v2)?)
    }
}

/// Any of the graphs in this crate.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, From)]
pub enum Graph<T> {
    /// A general graph.
    General(GeneralGraph<T>),
    /// A cycle.
    Cycle(Cycle<T>),
    /// A path.
    Path(Path<T>),
    /// A tree.
    Tree(Tree<T>),
}

impl<T> Seal for Graph<T> {}

impl<T: Element> Graph<T> {
    /// Whether this is a [`GeneralGraph`].
    pub const fn is_general(&self) -> bool {
        matches!(self, Self::General(_))
    }

    /// Whether this graph is known to be connected by construction. This holds for every kind of
    /// graph other than a [`GeneralGraph`].
    pub const fn is_connected_by_construction(&self) -> bool {
        !self.is_general()
    }
}

impl<T: Element> GraphTrait<T> for Graph<T> {
    type Vertices = FiniteSet<T>;

    fn neighbours(&self, point: &T) -> Option<FiniteSet<T>> {
        match self {
            Self::General(g) => g.neighbours(point),
            Self::Cycle(g) => g.neighbours(point).map(Into::into),
            Self::Path(g) => g.neighbours(point).map(Into::into),
            Self::Tree(g) => g.neighbours(point),
        }
    }

    fn on(&self, points: &FiniteSet<T>) -> GeneralGraph<T> {
        match self {
            Self::General(g) => g.on(points),
            Self::Cycle(g) => g.on(points),
            Self::Path(g) => g.on(points),
            Self::Tree(g) => g.on(points),
        }
    }

    fn connected_component(&self, point: &T) -> Result<Self> {
        match self {
            Self::General(g) => g.connected_component(point).map(Self::General),
            Self::Cycle(g) => g.connected_component(point).map(Self::Cycle),
            Self::Path(g) => g.connected_component(point).map(Self::Path),
            Self::Tree(g) => g.connected_component(point).map(Self::Tree),
        }
    }

    fn connected_components(&self) -> FiniteSet<Self> {
        match self {
            Self::General(g) => g.connected_components().into_iter().map(Self::from).collect(),
            Self::Cycle(g) => g.connected_components().into_iter().map(Self::from).collect(),
            Self::Path(g) => g.connected_components().into_iter().map(Self::from).collect(),
            Self::Tree(g) => g.connected_components().into_iter().map(Self::from).collect(),
        }
    }

    fn edge_set(&self) -> FiniteSet<Link<T>> {
        match self {
            Self::General(g) => g.edge_set(),
            Self::Cycle(g) => g.edge_set(),
            Self::Path(g) => g.edge_set(),
            Self::Tree(g) => g.edge_set(),
        }
    }

    fn vertex_set(&self) -> &FiniteSet<T> {
        match self {
            Self::General(g) => g.vertex_set(),
            Self::Cycle(g) => g.vertex_set(),
            Self::Path(g) => g.vertex_set(),
            Self::Tree(g) => g.vertex_set(),
        }
    }

    fn flow<F: FnMut(&Self::Vertices) -> T>(
        &self,
        mut chooser: F,
        start: &T,
    ) -> Result<OrderedSequence<T>> {
        match self {
            Self::General(g) => g.flow(chooser, start),
            Self::Cycle(g) => g.flow(|next| chooser(next.as_ref()), start),
            Self::Path(g) => g.flow(|next| chooser(next.as_ref()), start),
            Self::Tree(g) => g.flow(chooser, start),
        }
    }

    fn flow_by<C: FnMut(&T, &T) -> Ordering>(
        &self,
        cmp: C,
        start: &T,
    ) -> Result<OrderedSequence<T>> {
        match self {
            Self::General(g) => g.flow_by(cmp, start),
            Self::Cycle(g) => g.flow_by(cmp, start),
            Self::Path(g) => g.flow_by(cmp, start),
            Self::Tree(g) => g.flow_by(cmp, start),
        }
    }
}
