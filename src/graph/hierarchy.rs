//! Arenas of hierarchical nodes [`Hierarchy`].
//!
//! Nodes are created top-down: a root first, then children of nodes that already exist. Each node
//! remembers its parent, its depth, and its lineage up to the root, and none of these ever change.
//! The only thing that changes about a node after it's created is the number of children it has,
//! until it's locked.

use crate::prelude::*;

/// A handle to a node within a [`Hierarchy`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeId(usize);

impl NodeId {
    /// The position of the node within its hierarchy.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "#{}", self.0)
    }
}

/// A node in a [`Hierarchy`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HierarchyNode<V> {
    /// Value stored in the node.
    value: V,
    /// The parent, if this is not a root.
    parent: Option<NodeId>,
    /// The number of ancestors.
    depth: usize,
    /// The path from this node up to the root, both included.
    hierarchy: Path<NodeId>,
    /// The number of children created so far.
    children: usize,
    /// Whether children can no longer be created.
    locked: bool,
}

impl<V> HierarchyNode<V> {
    /// Value stored in the node.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// The parent, if this is not a root.
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The number of ancestors. Roots have depth zero.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// The path from this node up to the root, both included.
    pub const fn hierarchy(&self) -> &Path<NodeId> {
        &self.hierarchy
    }

    /// The number of children created so far.
    pub const fn children(&self) -> usize {
        self.children
    }

    /// Whether children can no longer be created.
    pub const fn is_locked(&self) -> bool {
        self.locked
    }

    /// Whether the node has no parent.
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Whether the node has any children.
    pub const fn is_parent(&self) -> bool {
        self.children != 0
    }
}

/// An arena owning a forest of [`HierarchyNode`]s.
#[derive(Clone, Debug)]
pub struct Hierarchy<V> {
    /// The nodes, indexed by [`NodeId`].
    nodes: Vec<HierarchyNode<V>>,
}

impl<V> Default for Hierarchy<V> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// Error for a [`NodeId`] coming from some other hierarchy.
const UNKNOWN: SetError = SetError::InvalidArgument("node does not belong to the hierarchy");

impl<V> Hierarchy<V> {
    /// An empty hierarchy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether there are no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node handles, in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Looks up a node.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the node is not in this hierarchy.
    pub fn get(&self, id: NodeId) -> Result<&HierarchyNode<V>> {
        self.nodes.get(id.0).ok_or(UNKNOWN)
    }

    /// Looks up a node mutably.
    fn get_mut(&mut self, id: NodeId) -> Result<&mut HierarchyNode<V>> {
        self.nodes.get_mut(id.0).ok_or(UNKNOWN)
    }

    /// Value stored in a node.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the node is not in this hierarchy.
    pub fn value(&self, id: NodeId) -> Result<&V> {
        self.get(id).map(HierarchyNode::value)
    }

    /// Values stored in a list of nodes.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if a node is not in this hierarchy.
    pub fn values<'a, I: IntoIterator<Item = &'a NodeId>>(&self, ids: I) -> Result<Vec<&V>> {
        ids.into_iter().map(|&id| self.value(id)).collect()
    }

    /// Creates a new root.
    pub fn root(&mut self, value: V) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(HierarchyNode {
            value,
            parent: None,
            depth: 0,
            hierarchy: Path::from_sequence(OrderedSequence::from_distinct([id])),
            children: 0,
            locked: false,
        });
        id
    }

    /// Creates a new child of `parent`, and counts it among its children.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if `parent` is locked or not in this hierarchy.
    pub fn create_child(&mut self, parent: NodeId, value: V) -> Result<NodeId> {
        let id = NodeId(self.nodes.len());
        let node = self.get(parent)?;
        check_argument(!node.locked, "cannot create children of a locked node")?;

        let hierarchy = Path::from_sequence(OrderedSequence::from_distinct(
            std::iter::once(id).chain(node.hierarchy.iter().copied()),
        ));
        let depth = node.depth + 1;

        self.get_mut(parent)?.children += 1;
        self.nodes.push(HierarchyNode {
            value,
            parent: Some(parent),
            depth,
            hierarchy,
            children: 0,
            locked: false,
        });
        Ok(id)
    }

    /// Prevents any more children from being created for a node. Locking a node twice does
    /// nothing.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the node is not in this hierarchy.
    pub fn lock(&mut self, id: NodeId) -> Result<NodeId> {
        self.get_mut(id)?.locked = true;
        Ok(id)
    }

    /// Locks several nodes at once.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if a node is not in this hierarchy. The nodes
    /// before it are still locked.
    pub fn bunk<I: IntoIterator<Item = NodeId>>(&mut self, ids: I) -> Result<FiniteSet<NodeId>> {
        ids.into_iter().map(|id| self.lock(id)).collect()
    }

    /// Creates a chain of nodes, each the only child of the previous one. Returns the chain,
    /// root first.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::EmptySet`] if there are no values.
    pub fn chain<I: IntoIterator<Item = V>>(&mut self, values: I) -> Result<Path<NodeId>> {
        let mut values = values.into_iter();
        let mut last = self.root(values.next().ok_or(SetError::EmptySet)?);
        let mut chain = vec![last];
        for value in values {
            last = self.create_child(last, value)?;
            chain.push(last);
        }

        Ok(Path::from_sequence(OrderedSequence::from_distinct(chain)))
    }

    /// Whether `parent` is the parent of `child`.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if either node is not in this hierarchy.
    pub fn is_parent_of(&self, parent: NodeId, child: NodeId) -> Result<bool> {
        self.get(parent)?;
        Ok(self.get(child)?.parent == Some(parent))
    }

    /// Whether either node is an ancestor of the other. Every node is related to itself.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if either node is not in this hierarchy.
    pub fn are_related(&self, n1: NodeId, n2: NodeId) -> Result<bool> {
        let h1 = &self.get(n1)?.hierarchy;
        let h2 = &self.get(n2)?.hierarchy;
        Ok(h1.contains(&n2) || h2.contains(&n1))
    }

    /// Whether two nodes lie in the same branch, with every node between the top one and the
    /// bottom one having at most one child.
    ///
    /// As an example, consider the tree
    ///
    /// ```txt
    ///     1
    ///    / \
    ///   2   3
    ///  / \   \
    /// 4   5   6
    /// ```
    ///
    /// Then 3 and 6 are related, while 1 and 3 are not, nor are 2 and 4. Unlike
    /// [`Self::are_related`], this is an equivalence relation on the nodes below the root. Here,
    /// its classes would be `{4}`, `{5}`, `{2}`, `{3, 6}`.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if either node is not in this hierarchy.
    pub fn are_related_rootless(&self, n1: NodeId, n2: NodeId) -> Result<bool> {
        if n1 == n2 {
            self.get(n1)?;
            return Ok(true);
        }
        if !self.are_related(n1, n2)? {
            return Ok(false);
        }

        let h1 = &self.get(n1)?.hierarchy;
        let h2 = &self.get(n2)?.hierarchy;
        let longer = if h1.len() > h2.len() { h1 } else { h2 };

        let mut found = (false, false);
        for &id in longer {
            if self.get(id)?.children > 1 {
                break;
            }
            found.0 |= id == n1;
            found.1 |= id == n2;
        }
        Ok(found == (true, true))
    }

    /// All nodes having `id` among their ancestors, `id` included.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the node is not in this hierarchy.
    pub fn descendants(&self, id: NodeId) -> Result<FiniteSet<NodeId>> {
        self.get(id)?;
        Ok(self
            .ids()
            .filter(|&other| self.nodes[other.0].hierarchy.contains(&id))
            .collect())
    }
}
