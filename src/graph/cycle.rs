//! Cycles [`Cycle`].

use crate::{prelude::*, Seal};

/// A cycle graph: each element of a sequence is linked to the next one, and the last element is
/// linked back to the first.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, IntoIterator)]
pub struct Cycle<T>(#[into_iterator(owned, ref)] OrderedSequence<T>);

impl<T> Seal for Cycle<T> {}

impl<T> AsRef<FiniteSet<T>> for Cycle<T> {
    fn as_ref(&self) -> &FiniteSet<T> {
        self.0.as_set()
    }
}

impl<T: Display> Display for Cycle<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

impl<T> From<OrderedSequence<T>> for Cycle<T> {
    fn from(seq: OrderedSequence<T>) -> Self {
        Self(seq)
    }
}

impl<T> Cycle<T> {
    /// The sequence of vertices, starting at an arbitrary point of the cycle.
    pub const fn sequence(&self) -> &OrderedSequence<T> {
        &self.0
    }

    /// Number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the cycle has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T: Element> Cycle<T> {
    /// Builds a cycle through a list of vertices.
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

    /// The path obtained by cutting the link that comes before `start`.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if `start` is not a vertex.
    pub fn open_at(&self, start: &T) -> Result<Path<T>> {
        let i = self
            .0
            .index_of(start)
            .ok_or(SetError::InvalidArgument("point must be a vertex"))?;
        let items = self.0.as_slice();
        Ok(Path::from_sequence(OrderedSequence::from_distinct(
            items[i..].iter().chain(&items[..i]).cloned(),
        )))
    }
}

impl<T: Element> GraphTrait<T> for Cycle<T> {
    type Vertices = OrderedSequence<T>;

    fn neighbours(&self, point: &T) -> Option<OrderedSequence<T>> {
        let prev = self.0.cyclic_prev(point)?;
        let next = self.0.cyclic_next(point)?;

        // Two points are each other's predecessor and successor, a single one is its own.
        let mut around: SmallVec<T> = SmallVec::new();
        for el in [prev, next] {
            if el != point && !around.contains(el) {
                around.push(el.clone());
            }
        }

        (!around.is_empty()).then(|| OrderedSequence::from_distinct(around))
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
        if self.len() < 2 {
            return FiniteSet::empty();
        }

        self.0
            .iter()
            .filter_map(|el| Some(Link::new(el.clone(), self.0.cyclic_next(el)?.clone())))
            .collect()
    }

    fn vertex_set(&self) -> &FiniteSet<T> {
        self.0.as_set()
    }
}

#[cfg(test)]
mod cycle {
    use super::*;
    use crate::set;

    #[test]
    fn neighbours() {
        let cycle = Cycle::new(vec!['a', 'b', 'c']).unwrap();
        assert_eq!(cycle.neighbours(&'a').unwrap().as_set(), &set!['b', 'c']);
        assert_eq!(cycle.neighbours(&'a').unwrap().as_slice(), &['c', 'b']);
        assert_eq!(cycle.neighbours(&'c').unwrap().as_set(), &set!['a', 'b']);
        assert_eq!(cycle.neighbours(&'z'), None);
    }

    #[test]
    fn small_cycles() {
        let pair = Cycle::new(vec![1, 2]).unwrap();
        assert_eq!(pair.neighbours(&1).unwrap().as_slice(), &[2]);
        assert_eq!(pair.edge_set(), set![Link::new(1, 2)]);

        let single = Cycle::new(vec![1]).unwrap();
        assert_eq!(single.neighbours(&1), None);
        assert!(single.edge_set().is_empty());
    }

    #[test]
    fn edges() {
        let cycle = Cycle::new(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(
            cycle.edge_set(),
            set![
                Link::new(1, 2),
                Link::new(2, 3),
                Link::new(3, 4),
                Link::new(4, 1)
            ]
        );
    }

    #[test]
    fn open_at() {
        let cycle = Cycle::new(vec![1, 2, 3, 4]).unwrap();
        let path = cycle.open_at(&3).unwrap();
        assert_eq!(path.as_slice(), &[3, 4, 1, 2]);
        assert!(cycle.edge_set().contains_set(&path.edge_set()));
        assert_eq!(
            cycle.edge_set().minus_set(&path.edge_set()),
            set![Link::new(2, 3)]
        );
        assert!(cycle.open_at(&5).is_err());
    }

    #[test]
    fn components() {
        let cycle = Cycle::new(vec![1, 2, 3, 4]).unwrap();
        assert_eq!(cycle.connected_components().card(), 1);
        assert_eq!(cycle.are_connected(&1, &3), Ok(true));

        // Removing a vertex leaves a path, which is still connected.
        let opened = cycle.on(&set![1, 2, 4]);
        assert_eq!(opened.connected_components().card(), 1);

        let split = cycle.on(&set![1, 3]);
        assert_eq!(split.connected_components().card(), 2);
        assert!(split.edge_set().is_empty());
    }
}
