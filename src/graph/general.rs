//! General graphs [`GeneralGraph`].

use crate::{prelude::*, Seal};

/// The connected components of the graph with the given points and links. Every link must join
/// two of the points.
fn components_of<T: Element>(
    points: &FiniteSet<T>,
    edges: &FiniteSet<Link<T>>,
) -> FiniteSet<FiniteSet<T>> {
    let mut adjacency: BTreeMap<&T, SmallVec<&T>> = BTreeMap::new();
    for link in edges {
        let (t, u) = link.ends();
        adjacency.entry(t).or_default().push(u);
        adjacency.entry(u).or_default().push(t);
    }

    let mut seen = BTreeSet::new();
    let mut components = BTreeSet::new();
    for start in points {
        if !seen.insert(start) {
            continue;
        }

        let mut component = BTreeSet::new();
        let mut stack = vec![start];
        while let Some(point) = stack.pop() {
            component.insert(point.clone());
            for &next in adjacency.get(point).into_iter().flatten() {
                if seen.insert(next) {
                    stack.push(next);
                }
            }
        }
        components.insert(FiniteSet::from(component));
    }

    tracing::trace!(
        points = points.card(),
        components = components.len(),
        "found connected components"
    );
    components.into()
}

/// A graph with arbitrary vertices and links.
///
/// The vertices are stored as a [`PartitionSet`], whose classes are the connected components.
///
/// ## Invariants
///
/// - Every link joins two vertices.
/// - For [`GeneralGraph::new`] and every graph derived from another, the classes of the partition
///   are exactly the connected components.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct GeneralGraph<T> {
    /// The vertices, partitioned into components.
    vertices: PartitionSet<T>,
    /// The links.
    edges: FiniteSet<Link<T>>,
}

impl<T> Seal for GeneralGraph<T> {}

impl<T> AsRef<FiniteSet<T>> for GeneralGraph<T> {
    fn as_ref(&self) -> &FiniteSet<T> {
        self.vertices.set()
    }
}

impl<T> GeneralGraph<T> {
    /// The vertices, partitioned into components.
    pub const fn partition(&self) -> &PartitionSet<T> {
        &self.vertices
    }

    /// The links.
    pub const fn edges(&self) -> &FiniteSet<Link<T>> {
        &self.edges
    }
}

impl<T: Element> GeneralGraph<T> {
    /// Builds a graph from its vertices and links, working out its connected components.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if a link has an endpoint outside of `points`.
    pub fn new(points: FiniteSet<T>, edges: FiniteSet<Link<T>>) -> Result<Self> {
        check_argument(
            edges.iter().all(|link| link.within(&points)),
            "links must join two vertices of the graph",
        )?;
        Ok(Self::induced(points, edges))
    }

    /// Builds a graph from its links and a partition of its vertices. The classes of the
    /// partition are taken to be the connected components, and this is not checked.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if a link has an endpoint outside of the
    /// partition.
    pub fn with_components(vertices: PartitionSet<T>, edges: FiniteSet<Link<T>>) -> Result<Self> {
        check_argument(
            edges.iter().all(|link| link.within(vertices.set())),
            "links must join two vertices of the graph",
        )?;
        Ok(Self { vertices, edges })
    }

    /// Builds a graph from links that are known to join two of the points.
    pub(crate) fn induced(points: FiniteSet<T>, edges: FiniteSet<Link<T>>) -> Self {
        debug_assert!(
            edges.iter().all(|link| link.within(&points)),
            "links must join two vertices of the graph"
        );
        let components = components_of(&points, &edges);
        Self {
            vertices: PartitionSet::from_parts_unchecked(points, components),
            edges,
        }
    }

    /// The subgraph of any graph induced on the vertices within `points`.
    pub(crate) fn induced_by<G: GraphTrait<T>>(graph: &G, points: &FiniteSet<T>) -> Self {
        Self::induced(
            graph.vertex_set().intersection(points),
            graph.edge_set().such_that(|link| link.within(points)),
        )
    }

    /// Reads a graph from the disjoint union of its vertices and its links.
    ///
    /// ## Errors
    ///
    /// See [`Self::new`].
    pub fn from_direct_sum(sum: &FiniteSet<Summand<T, Link<T>>>) -> Result<Self> {
        let points = sum.iter().filter_map(Summand::left).cloned().collect();
        let edges = sum.iter().filter_map(Summand::right).cloned().collect();
        Self::new(points, edges)
    }

    /// The disjoint union of the vertices and the links.
    #[must_use]
    pub fn to_direct_sum(&self) -> FiniteSet<Summand<T, Link<T>>> {
        self.vertices.set().direct_sum(&self.edges)
    }

    /// Whether the graph has at most one connected component.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.vertices.number_of_components() <= 1
    }
}

impl<T: Element> GraphTrait<T> for GeneralGraph<T> {
    type Vertices = FiniteSet<T>;

    fn neighbours(&self, point: &T) -> Option<FiniteSet<T>> {
        let next: FiniteSet<T> = self
            .edges
            .iter()
            .filter_map(|link| link.next(point).ok())
            .cloned()
            .collect();
        (!next.is_empty()).then_some(next)
    }

    fn on(&self, points: &FiniteSet<T>) -> GeneralGraph<T> {
        Self::induced_by(self, points)
    }

    fn connected_component(&self, point: &T) -> Result<Self> {
        let component = self.vertices.component(point)?;
        Ok(self.on(component))
    }

    fn connected_components(&self) -> FiniteSet<Self> {
        self.vertices.components().image(|component| self.on(component))
    }

    fn edge_set(&self) -> FiniteSet<Link<T>> {
        self.edges.clone()
    }

    fn vertex_set(&self) -> &FiniteSet<T> {
        self.vertices.set()
    }
}
