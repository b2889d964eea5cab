//! Paths [`Path`].

use crate::{prelude::*, Seal};

/// A path graph: each element of a sequence is linked to the next one.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, IntoIterator)]
pub struct Path<T>(#[into_iterator(owned, ref)] OrderedSequence<T>);

impl<T> Seal for Path<T> {}

impl<T> AsRef<FiniteSet<T>> for Path<T> {
    fn as_ref(&self) -> &FiniteSet<T> {
        self.0.as_set()
    }
}

impl<T: Display> Display for Path<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl<T> From<OrderedSequence<T>> for Path<T> {
    fn from(seq: OrderedSequence<T>) -> Self {
        Self(seq)
    }
}

impl<T> Path<T> {
    /// Builds a path from an ordered sequence.
    pub const fn from_sequence(seq: OrderedSequence<T>) -> Self {
        Self(seq)
    }

    /// The sequence of vertices.
    pub const fn sequence(&self) -> &OrderedSequence<T> {
        &self.0
    }

    /// Converts the path into its sequence of vertices.
    pub fn into_sequence(self) -> OrderedSequence<T> {
        self.0
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the path has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The vertices, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.0.as_slice()
    }

    /// The vertices, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// The first vertex.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.0.head()
    }

    /// The last vertex.
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        self.0.tail()
    }

    /// The trivial flow through the path, which visits each vertex in order.
    pub const fn identity_flow(&self) -> &OrderedSequence<T> {
        &self.0
    }
}

impl<T: Element> Path<T> {
    /// Builds a path through a list of vertices.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if a vertex is repeated.
    pub fn new(vertices: Vec<T>) -> Result<Self> {
        OrderedSequence::new(vertices).map(Self)
    }

    /// Whether `el` is a vertex.
    #[must_use]
    pub fn contains(&self, el: &T) -> bool {
        self.0.contains(el)
    }

    /// Positions of two vertices.
    fn indices(&self, v1: &T, v2: &T) -> Result<(usize, usize)> {
        match (self.0.index_of(v1), self.0.index_of(v2)) {
            (Some(i), Some(j)) => Ok((i, j)),
            _ => Err(SetError::InvalidArgument("both vertices must lie on the path")),
        }
    }

    /// The vertices from the first of `v1` and `v2` along the path, up to but excluding the
    /// second one.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if either vertex is not on the path.
    pub fn sub_path(&self, v1: &T, v2: &T) -> Result<Self> {
        let (i, j) = self.indices(v1, v2)?;
        self.0.range(i.min(j)..i.max(j)).map(Self)
    }

    /// The path going from `v1` to `v2`, both included. It runs against the path's direction
    /// when `v2` comes before `v1`.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if either vertex is not on the path.
    pub fn find_path_between(&self, v1: &T, v2: &T) -> Result<Self> {
        let (i, j) = self.indices(v1, v2)?;
        if i <= j {
            self.0.range(i..j + 1).map(Self)
        } else {
            Ok(Self(self.0.range(j..i + 1)?.reverse()))
        }
    }

    /// The same path, walked backwards.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self(self.0.reverse())
    }

    /// Appends another path at the end of this one.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if both paths share a vertex.
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.0.concat(&other.0).map(Self)
    }
}

impl<T: Element> GraphTrait<T> for Path<T> {
    type Vertices = OrderedSequence<T>;

    fn neighbours(&self, point: &T) -> Option<OrderedSequence<T>> {
        if !self.contains(point) {
            return None;
        }

        let next = OrderedSequence::from_distinct(
            [self.0.prev(point), self.0.next(point)]
                .into_iter()
                .flatten()
                .cloned(),
        );
        (!next.is_empty()).then_some(next)
    }

    fn on(&self, points: &FiniteSet<T>) -> GeneralGraph<T> {
        GeneralGraph::induced_by(self, points)
    }

    fn connected_component(&self, point: &T) -> Result<Self> {
        check_argument(self.contains(point), "point must be a vertex")?;
        Ok(self.clone())
    }

    fn connected_components(&self) -> FiniteSet<Self> {
        if self.is_empty() {
            FiniteSet::empty()
        } else {
            FiniteSet::singleton(self.clone())
        }
    }

    fn edge_set(&self) -> FiniteSet<Link<T>> {
        self.0
            .as_slice()
            .windows(2)
            .map(|pair| Link::new(pair[0].clone(), pair[1].clone()))
            .collect()
    }

    fn vertex_set(&self) -> &FiniteSet<T> {
        self.0.as_set()
    }
}

#[cfg(test)]
mod path {
    use super::*;
    use crate::set;

    fn abcde() -> Path<char> {
        Path::new(vec!['a', 'b', 'c', 'd', 'e']).unwrap()
    }

    #[test]
    fn neighbours() {
        let path = Path::new(vec!['a', 'b', 'c']).unwrap();
        assert_eq!(path.neighbours(&'a').unwrap().as_set(), &set!['b']);
        assert_eq!(path.neighbours(&'b').unwrap().as_set(), &set!['a', 'c']);
        assert_eq!(path.neighbours(&'c').unwrap().as_set(), &set!['b']);
        assert_eq!(path.neighbours(&'z'), None);
        assert_eq!(Path::new(vec![0]).unwrap().neighbours(&0), None);
    }

    #[test]
    fn edges() {
        let path = Path::new(vec![3, 1, 2]).unwrap();
        assert_eq!(path.edge_set(), set![Link::new(1, 3), Link::new(1, 2)]);
        assert!(Path::new(vec![7]).unwrap().edge_set().is_empty());
    }

    #[test]
    fn sub_path() {
        let path = abcde();
        assert_eq!(path.sub_path(&'b', &'d').unwrap().as_slice(), &['b', 'c']);
        assert_eq!(path.sub_path(&'d', &'b').unwrap().as_slice(), &['b', 'c']);
        assert!(path.sub_path(&'c', &'c').unwrap().is_empty());
        assert!(matches!(path.sub_path(&'a', &'z'), Err(SetError::InvalidArgument(_))));
    }

    #[test]
    fn find_path_between() {
        let path = abcde();
        assert_eq!(
            path.find_path_between(&'b', &'d').unwrap().as_slice(),
            &['b', 'c', 'd']
        );
        assert_eq!(
            path.find_path_between(&'d', &'a').unwrap().as_slice(),
            &['d', 'c', 'b', 'a']
        );
        assert_eq!(
            path.find_path_between(&'e', &'e').unwrap().as_slice(),
            &['e']
        );
        assert!(path.find_path_between(&'z', &'a').is_err());
    }

    #[test]
    fn reverse_and_add() {
        let path = abcde();
        assert_eq!(path.reverse().reverse(), path);
        assert_eq!(path.reverse().head(), Some(&'e'));

        let front = Path::new(vec![1, 2]).unwrap();
        let back = Path::new(vec![3, 4]).unwrap();
        let joined = front.add(&back).unwrap();
        assert_eq!(joined.as_slice(), &[1, 2, 3, 4]);
        assert!(joined.edge_set().contains(&Link::new(2, 3)));
        assert!(front.add(&joined).is_err());
    }

    #[test]
    fn components() {
        let path = abcde();
        assert_eq!(path.connected_components().card(), 1);
        assert_eq!(path.connected_component(&'c').as_ref(), Ok(&path));
        assert!(path.connected_component(&'z').is_err());
        assert_eq!(path.identity_flow(), path.sequence());

        let split = path.on(&set!['a', 'b', 'd', 'e']);
        assert_eq!(split.connected_components().card(), 2);
        assert_eq!(
            split.edge_set(),
            set![Link::new('a', 'b'), Link::new('d', 'e')]
        );
    }
}
