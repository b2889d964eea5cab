//! Rooted trees [`Tree`].

use super::{greatest_unvisited, walk};
use crate::{prelude::*, Seal};

/// What a tree remembers about each of its nodes.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
struct Lineage<T> {
    /// The parent, which needn't belong to the tree.
    parent: Option<T>,
    /// The depth within the whole hierarchy.
    depth: usize,
    /// The path from the node up to the root of the hierarchy.
    hierarchy: Path<T>,
}

/// A rooted tree.
///
/// Trees are built out of nodes in a [`Hierarchy`], and keep a snapshot of the lineage of each
/// node. Creating further nodes in the hierarchy doesn't change the trees built from it.
///
/// The root is the node of least depth. Each other node is linked to its parent.
///
/// ## Invariants
///
/// Unless built through [`Tree::new_unchecked`]:
///
/// - Every node descends from the same root in the hierarchy.
/// - The parent of each node other than the root belongs to the tree.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Tree<T> {
    /// The nodes, pointed at the root.
    nodes: PointedSet<T>,
    /// The lineage of each node.
    lineage: BTreeMap<T, Lineage<T>>,
    /// The greatest depth of any node.
    max_depth: usize,
}

impl<T> Seal for Tree<T> {}

impl<T> AsRef<FiniteSet<T>> for Tree<T> {
    fn as_ref(&self) -> &FiniteSet<T> {
        self.nodes.as_ref()
    }
}

impl Tree<NodeId> {
    /// Snapshots the lineage of some nodes in a hierarchy.
    fn snapshot<V>(
        hierarchy: &Hierarchy<V>,
        nodes: &FiniteSet<NodeId>,
    ) -> Result<BTreeMap<NodeId, Lineage<NodeId>>> {
        nodes
            .iter()
            .map(|&id| {
                let node = hierarchy.get(id)?;
                Ok((
                    id,
                    Lineage {
                        parent: node.parent(),
                        depth: node.depth(),
                        hierarchy: node.hierarchy().clone(),
                    },
                ))
            })
            .collect()
    }

    /// Builds a tree out of nodes of a hierarchy.
    ///
    /// ## Errors
    ///
    /// - [`SetError::EmptySet`] if there are no nodes.
    /// - [`SetError::InvalidArgument`] if a node is not in the hierarchy, if two nodes descend
    ///   from different roots, or if a node other than the root has its parent missing.
    pub fn new<V>(hierarchy: &Hierarchy<V>, nodes: &FiniteSet<NodeId>) -> Result<Self> {
        Self::from_lineage(Self::snapshot(hierarchy, nodes)?, true)
    }

    /// Builds a tree out of nodes of a hierarchy, without checking that the nodes form a tree.
    ///
    /// The node of least depth is taken as the root. Paths between nodes may then run outside
    /// of the tree.
    ///
    /// ## Errors
    ///
    /// - [`SetError::EmptySet`] if there are no nodes.
    /// - [`SetError::InvalidArgument`] if a node is not in the hierarchy.
    pub fn new_unchecked<V>(hierarchy: &Hierarchy<V>, nodes: &FiniteSet<NodeId>) -> Result<Self> {
        Self::from_lineage(Self::snapshot(hierarchy, nodes)?, false)
    }

    /// The tree of all descendants of a node.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the node is not in the hierarchy.
    pub fn from_root<V>(hierarchy: &Hierarchy<V>, root: NodeId) -> Result<Self> {
        Self::new(hierarchy, &hierarchy.descendants(root)?)
    }

    /// The tree with the nodes of a path added.
    ///
    /// ## Errors
    ///
    /// See [`Self::new`].
    pub fn add<V>(&self, hierarchy: &Hierarchy<V>, path: &Path<NodeId>) -> Result<Self> {
        Self::new(hierarchy, &self.vertex_set().union(path.as_ref()))
    }
}

impl<T: Element> Tree<T> {
    /// Builds a tree from the lineage of its nodes, optionally checking the invariants.
    fn from_lineage(lineage: BTreeMap<T, Lineage<T>>, checked: bool) -> Result<Self> {
        let (root, max_depth) = {
            let (root, _) = lineage
                .iter()
                .min_by_key(|(_, node)| node.depth)
                .ok_or(SetError::EmptySet)?;
            let max_depth = lineage.values().map(|node| node.depth).max().unwrap_or(0);
            (root.clone(), max_depth)
        };

        if checked {
            let tops: BTreeSet<_> = lineage
                .values()
                .filter_map(|node| node.hierarchy.tail())
                .collect();
            check_argument(tops.len() == 1, "every node must descend from the same root")?;
            check_argument(
                lineage.iter().all(|(id, node)| {
                    *id == root
                        || node
                            .parent
                            .as_ref()
                            .is_some_and(|parent| lineage.contains_key(parent))
                }),
                "the parent of every node but the root must belong to the tree",
            )?;
        }

        tracing::debug!(nodes = lineage.len(), max_depth, checked, "built tree");
        Ok(Self {
            nodes: PointedSet::new(lineage.keys().cloned().collect(), root)?,
            lineage,
            max_depth,
        })
    }

    /// The lineage of a node.
    fn lineage_of(&self, point: &T) -> Result<&Lineage<T>> {
        self.lineage
            .get(point)
            .ok_or(SetError::InvalidArgument("node must belong to the tree"))
    }

    /// The root node, the one of least depth.
    pub fn root(&self) -> &T {
        self.nodes.point()
    }

    /// Whether `point` is a node of the tree.
    pub fn contains(&self, point: &T) -> bool {
        self.lineage.contains_key(point)
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lineage.len()
    }

    /// Whether the tree has no nodes. This never holds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lineage.is_empty()
    }

    /// The depth of a node within its hierarchy.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the node is not in the tree.
    pub fn depth_of(&self, point: &T) -> Result<usize> {
        self.lineage_of(point).map(|node| node.depth)
    }

    /// The parent of a node, if it belongs to the tree.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the node is not in the tree.
    pub fn parent_of(&self, point: &T) -> Result<Option<&T>> {
        Ok(self
            .lineage_of(point)?
            .parent
            .as_ref()
            .filter(|parent| self.contains(parent)))
    }

    /// The nodes whose parent is `point`. Returns `None` if there are none.
    pub fn get_children(&self, point: &T) -> Option<FiniteSet<T>> {
        let children: FiniteSet<T> = self
            .lineage
            .iter()
            .filter(|(_, node)| node.parent.as_ref() == Some(point))
            .map(|(id, _)| id.clone())
            .collect();
        (!children.is_empty()).then_some(children)
    }

    /// The subtree made out of `point` and all its descendants.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the node is not in the tree.
    pub fn subtree_at(&self, point: &T) -> Result<Self> {
        self.lineage_of(point)?;
        let lineage = self
            .lineage
            .iter()
            .filter(|(_, node)| node.hierarchy.contains(point))
            .map(|(id, node)| (id.clone(), node.clone()))
            .collect();
        Self::from_lineage(lineage, false)
    }

    /// The nodes with no children in the tree.
    #[must_use]
    pub fn leaves(&self) -> FiniteSet<T> {
        self.vertex_set()
            .such_that(|point| self.get_children(point).is_none())
    }

    /// The nodes at some depth.
    #[must_use]
    pub fn nodes_at_depth(&self, depth: usize) -> FiniteSet<T> {
        self.lineage
            .iter()
            .filter(|(_, node)| node.depth == depth)
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// The depth of the root.
    #[must_use]
    pub fn min_depth(&self) -> usize {
        self.lineage.get(self.root()).map_or(0, |node| node.depth)
    }

    /// The greatest depth of any node.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The number of levels below the root.
    #[must_use]
    pub fn total_depth(&self) -> usize {
        self.max_depth - self.min_depth()
    }

    /// The shortest path from `n1` to `n2`, both included.
    ///
    /// The path climbs from `n1` up to the deepest common ancestor of both nodes, then goes down
    /// to `n2`. This takes time proportional to the depth of the tree.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if either node is not in the tree, or if both
    /// have no common ancestor in a tree built with [`Tree::new_unchecked`].
    pub fn find_path_between(&self, n1: &T, n2: &T) -> Result<Path<T>> {
        let h1 = &self.lineage_of(n1)?.hierarchy;
        let h2 = &self.lineage_of(n2)?.hierarchy;
        let common = h1.vertex_set().intersection(h2.vertex_set());

        // One node is an ancestor of the other.
        if common.contains(n1) {
            return h2.find_path_between(n1, n2);
        }
        if common.contains(n2) {
            return h1.find_path_between(n1, n2);
        }

        // The first common node going up is the deepest one.
        let ancestor = h1
            .iter()
            .find(|node| common.contains(node))
            .ok_or(SetError::InvalidArgument("nodes must have a common ancestor"))?;
        let up = h1.find_path_between(n1, ancestor)?;
        let down = h2.find_path_between(ancestor, n2)?;
        let down = Path::from_sequence(down.sequence().range(1..down.len())?);

        up.add(&down)
    }
}

impl<T: Element> GraphTrait<T> for Tree<T> {
    type Vertices = FiniteSet<T>;

    /// The children of the same parent as `point`, or those of `point` itself when it is the
    /// root.
    fn neighbours(&self, point: &T) -> Option<FiniteSet<T>> {
        match self.parent_of(point).ok()? {
            Some(parent) => self.get_children(parent),
            None => self.get_children(point),
        }
    }

    fn on(&self, points: &FiniteSet<T>) -> GeneralGraph<T> {
        GeneralGraph::induced_by(self, points)
    }

    fn connected_component(&self, point: &T) -> Result<Self> {
        check_argument(self.contains(point), "node must belong to the tree")?;
        Ok(self.clone())
    }

    fn connected_components(&self) -> FiniteSet<Self> {
        FiniteSet::singleton(self.clone())
    }

    fn edge_set(&self) -> FiniteSet<Link<T>> {
        self.lineage
            .keys()
            .filter_map(|id| {
                let parent = self.parent_of(id).ok()??;
                Some(Link::new(id.clone(), parent.clone()))
            })
            .collect()
    }

    fn vertex_set(&self) -> &FiniteSet<T> {
        self.nodes.set()
    }

    /// Walks down the tree from `start`, letting `chooser` pick a child at each step, until a
    /// leaf is reached.
    fn flow<F: FnMut(&Self::Vertices) -> T>(
        &self,
        mut chooser: F,
        start: &T,
    ) -> Result<OrderedSequence<T>> {
        walk(
            self.vertex_set(),
            start,
            |point| self.get_children(point),
            |next, _| Some(chooser(next)),
        )
    }

    /// Walks down the tree from `start`, moving to the greatest child under `cmp` at each step.
    fn flow_by<C: FnMut(&T, &T) -> Ordering>(
        &self,
        mut cmp: C,
        start: &T,
    ) -> Result<OrderedSequence<T>> {
        walk(
            self.vertex_set(),
            start,
            |point| self.get_children(point),
            |next, visited| greatest_unvisited(next, visited, &mut cmp),
        )
    }
}
