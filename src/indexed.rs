//! Sets whose elements can be looked up by an index [`IndexedSet`].

use crate::prelude::*;

/// A set together with an indexer, a function from indices to elements.
///
/// The indexer may be partial: an index it maps to nothing, or to something outside of the set,
/// addresses no element.
pub struct IndexedSet<'a, I, T> {
    /// The underlying set.
    set: FiniteSet<T>,
    /// Maps each index to the element it addresses, if any.
    indexer: SetFunction<'a, I, Option<T>>,
}

impl<'a, I, T> IndexedSet<'a, I, T> {
    /// Indexes a set through a function defined on every index.
    #[must_use]
    pub fn new<F: Fn(&I) -> T + 'a>(set: FiniteSet<T>, indexer: F) -> Self {
        Self {
            set,
            indexer: SetFunction::new(move |i| Some(indexer(i))),
        }
    }

    /// Indexes a set through a partial function.
    #[must_use]
    pub fn new_partial<F: Fn(&I) -> Option<T> + 'a>(set: FiniteSet<T>, indexer: F) -> Self {
        Self {
            set,
            indexer: SetFunction::new(indexer),
        }
    }

    /// The underlying set.
    pub const fn set(&self) -> &FiniteSet<T> {
        &self.set
    }

    /// The indexer.
    pub const fn indexer(&self) -> &SetFunction<'a, I, Option<T>> {
        &self.indexer
    }
}

impl<I: Ord + 'static, T: Element + 'static> IndexedSet<'static, I, T> {
    /// The values of a map, indexed by their keys.
    #[must_use]
    pub fn from_map(map: BTreeMap<I, T>) -> Self {
        let set = map.values().cloned().collect();
        Self::new_partial(set, move |i| map.get(i).cloned())
    }
}

impl<'a, I: 'a, T: Element + 'a> IndexedSet<'a, I, T> {
    /// The element addressed by an index.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::NotFound`] if the index addresses no element of the set.
    pub fn at(&self, i: &I) -> Result<T> {
        self.indexer
            .apply(i)
            .filter(|el| self.set.contains(el))
            .ok_or(SetError::NotFound)
    }

    /// The image of the set under a function. Each index addresses the image of the element it
    /// addressed before.
    #[must_use]
    pub fn image<U: Ord + 'a>(self, f: SetFunction<'a, T, U>) -> IndexedSet<'a, I, U> {
        let set = f.apply_set(&self.set);
        let Self { set: old, indexer } = self;
        IndexedSet::new_partial(set, move |i| {
            indexer
                .apply(i)
                .filter(|el| old.contains(el))
                .map(|el| f.apply(&el))
        })
    }
}

impl<I, T> AsRef<FiniteSet<T>> for IndexedSet<'_, I, T> {
    fn as_ref(&self) -> &FiniteSet<T> {
        &self.set
    }
}

impl<I, T: Debug> Debug for IndexedSet<'_, I, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("IndexedSet")
            .field("set", &self.set)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod indexed_set {
    use super::*;
    use crate::set;

    #[test]
    fn at() {
        let small_square = |i: &u32| (*i < 4).then(|| i * i);
        let squares = IndexedSet::new_partial(set![0, 1, 4, 9], small_square);
        assert_eq!(squares.at(&3), Ok(9));
        assert_eq!(squares.at(&4), Err(SetError::NotFound));

        // Indices landing outside the set address nothing.
        let doubled = IndexedSet::new(set![0, 2], |i: &u32| 2 * i);
        assert_eq!(doubled.at(&1), Ok(2));
        assert_eq!(doubled.at(&2), Err(SetError::NotFound));
    }

    #[test]
    fn from_map() {
        let map = BTreeMap::from([("one", 1), ("two", 2), ("uno", 1)]);
        let numbers = IndexedSet::from_map(map);
        assert_eq!(numbers.set(), &set![1, 2]);
        assert_eq!(numbers.at(&"uno"), Ok(1));
        assert_eq!(numbers.at(&"three"), Err(SetError::NotFound));
    }

    #[test]
    fn image() {
        let letters = IndexedSet::new(set!['a', 'b', 'c'], |i: &u8| char::from(b'a' + i));
        let upper = letters.image(SetFunction::new(char::to_ascii_uppercase));
        assert_eq!(upper.set(), &set!['A', 'B', 'C']);
        assert_eq!(upper.at(&1), Ok('B'));
        assert_eq!(upper.at(&5), Err(SetError::NotFound));
    }
}
