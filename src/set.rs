//! Immutable finite sets [`FiniteSet`].

use crate::prelude::*;
use bitvec::prelude::*;
use std::collections::btree_set;

/// An immutable finite set.
///
/// Every operation on a [`FiniteSet`] builds a new set and leaves its operands untouched.
/// Elements are stored in an ordered tree, so iteration order is deterministic, and sets of sets
/// are themselves valid elements.
///
/// ## Invariants
///
/// No two elements of a [`FiniteSet`] are equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, IntoIterator)]
pub struct FiniteSet<T>(#[into_iterator(owned, ref)] BTreeSet<T>);

// -------------------- Basic traits -------------------- //

impl<T> Default for FiniteSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> AsRef<FiniteSet<T>> for FiniteSet<T> {
    fn as_ref(&self) -> &FiniteSet<T> {
        self
    }
}

impl<T: Ord> FromIterator<T> for FiniteSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> From<BTreeSet<T>> for FiniteSet<T> {
    fn from(set: BTreeSet<T>) -> Self {
        Self(set)
    }
}

impl<T: Ord> From<Vec<T>> for FiniteSet<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for FiniteSet<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T> From<FiniteSet<T>> for BTreeSet<T> {
    fn from(set: FiniteSet<T>) -> Self {
        set.0
    }
}

impl<T: Debug> Debug for FiniteSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(&self.0).finish()
    }
}

/// Displays a set in roster notation, e.g. `{1, 2, 3}`.
impl<T: Display> Display for FiniteSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("{")?;
        for (i, el) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{el}")?;
        }
        f.write_str("}")
    }
}

// -------------------- Basic methods -------------------- //

impl<T> FiniteSet<T> {
    /// The empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Set cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the elements of the set, in increasing order.
    pub fn iter(&self) -> btree_set::Iter<'_, T> {
        self.0.iter()
    }

    /// The underlying ordered tree.
    #[must_use]
    pub const fn as_btree_set(&self) -> &BTreeSet<T> {
        &self.0
    }

    /// An arbitrary element of the set, or `None` if it's empty.
    #[must_use]
    pub fn element(&self) -> Option<&T> {
        self.0.iter().next()
    }

    /// An arbitrary element of the set.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::EmptySet`] if the set has no elements.
    pub fn element_or_err(&self) -> Result<&T> {
        self.element().ok_or(SetError::EmptySet)
    }

    /// An element satisfying a predicate, if any.
    pub fn element_such_that<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Option<&T> {
        self.iter().find(|&el| pred(el))
    }

    /// The element minimizing a projection. Ties are broken arbitrarily.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::EmptySet`] if the set has no elements.
    pub fn min_of<K: Ord, F: FnMut(&T) -> K>(&self, mut f: F) -> Result<&T> {
        self.iter().min_by_key(|&el| f(el)).ok_or(SetError::EmptySet)
    }

    /// The element maximizing a projection. Ties are broken arbitrarily.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::EmptySet`] if the set has no elements.
    pub fn max_of<K: Ord, F: FnMut(&T) -> K>(&self, mut f: F) -> Result<&T> {
        self.iter().max_by_key(|&el| f(el)).ok_or(SetError::EmptySet)
    }
}

// -------------------- Relations -------------------- //

impl<T: Ord> FiniteSet<T> {
    /// Singleton set {x}.
    #[must_use]
    pub fn singleton(el: T) -> Self {
        Self(BTreeSet::from([el]))
    }

    /// Membership relation ∈.
    #[must_use]
    pub fn contains(&self, el: &T) -> bool {
        self.0.contains(el)
    }

    /// Subset relation: whether every element of `other` belongs to `self`.
    #[must_use]
    pub fn contains_set(&self, other: &Self) -> bool {
        other.0.is_subset(&self.0)
    }

    /// Membership as an equation, satisfied exactly by the elements of the set.
    #[must_use]
    pub fn predicate_contains(&self) -> Equation<'_, T> {
        Equation::new(|el| self.contains(el))
    }

    /// Subset relation ⊆.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }

    /// Whether the two sets share no element.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0.is_disjoint(&other.0)
    }
}

// -------------------- Constructions -------------------- //

impl<T: Element> FiniteSet<T> {
    /// Set insertion x ∪ {y}.
    #[must_use]
    pub fn with(&self, el: T) -> Self {
        let mut set = self.0.clone();
        set.insert(el);
        Self(set)
    }

    /// Union x ∪ y.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        self.0.union(&other.0).cloned().collect()
    }

    /// Union of this set with every set in an iterator.
    #[must_use]
    pub fn union_all<'a, I: IntoIterator<Item = &'a Self>>(&self, others: I) -> Self
    where
        T: 'a,
    {
        let mut set = self.0.clone();
        for other in others {
            set.extend(other.iter().cloned());
        }
        Self(set)
    }

    /// Union ∪x over a collection of sets.
    pub fn union_of<I: IntoIterator<Item = Self>>(sets: I) -> Self {
        sets.into_iter().flatten().collect()
    }

    /// Intersection x ∩ y.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        self.0.intersection(&other.0).cloned().collect()
    }

    /// Intersection of this set with every set in an iterator. With no other sets, this is a copy
    /// of `self`.
    #[must_use]
    pub fn intersection_all<'a, I: IntoIterator<Item = &'a Self>>(&self, others: I) -> Self
    where
        T: 'a,
    {
        let others: Vec<_> = others.into_iter().collect();
        self.such_that(|el| others.iter().all(|other| other.contains(el)))
    }

    /// Set specification: the subset of elements satisfying a predicate.
    #[must_use]
    pub fn such_that<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Self {
        self.iter().filter(|&el| pred(el)).cloned().collect()
    }

    /// The subset of elements satisfying every equation.
    #[must_use]
    pub fn such_that_all(&self, equations: &[Equation<'_, T>]) -> Self {
        self.such_that(|el| equations.iter().all(|eq| eq.test(el)))
    }

    /// Set difference x \ {y}.
    #[must_use]
    pub fn minus(&self, el: &T) -> Self {
        self.such_that(|x| x != el)
    }

    /// Set difference x \ y.
    #[must_use]
    pub fn minus_set(&self, other: &Self) -> Self {
        self.0.difference(&other.0).cloned().collect()
    }

    /// The image of the set under a function.
    ///
    /// Distinct elements mapped to equal outputs are kept once, so the image may be smaller than
    /// the original set.
    pub fn image<U: Ord, F: FnMut(&T) -> U>(&self, f: F) -> FiniteSet<U> {
        self.iter().map(f).collect()
    }

    /// Powerset P(x): the set of all subsets.
    ///
    /// The result has 2ⁿ elements, where n is the cardinality of the set.
    #[must_use]
    pub fn power_set(&self) -> FiniteSet<Self> {
        if self.card() > 16 {
            tracing::debug!(card = self.card(), "enumerating a large power set");
        }
        self.subsets().collect()
    }

    /// Iterate over all subsets of the set. Every subset is returned exactly once.
    #[must_use]
    pub fn subsets(&self) -> Subsets<'_, T> {
        Subsets::new(self)
    }

    /// Cartesian product x × y.
    #[must_use]
    pub fn product<U: Element>(&self, other: &FiniteSet<U>) -> FiniteSet<(T, U)> {
        self.iter()
            .flat_map(|t| other.iter().map(move |u| (t.clone(), u.clone())))
            .collect()
    }

    /// The direct sum x ⊔ y: a copy of each set, tagged with the side it came from.
    #[must_use]
    pub fn direct_sum<U: Element>(&self, other: &FiniteSet<U>) -> FiniteSet<Summand<T, U>> {
        self.image(|t| Summand::Left(t.clone()))
            .union(&other.image(|u| Summand::Right(u.clone())))
    }

    /// Cartesian product of this set with the union of several others.
    #[must_use]
    pub fn product_all<'a, U: Element + 'a, I: IntoIterator<Item = &'a FiniteSet<U>>>(
        &self,
        others: I,
    ) -> FiniteSet<(T, U)> {
        self.product(&FiniteSet::empty().union_all(others))
    }

    /// The direct sum of this set with the union of several others, tagged on the right.
    #[must_use]
    pub fn direct_sum_all<'a, U: Element + 'a, I: IntoIterator<Item = &'a FiniteSet<U>>>(
        &self,
        others: I,
    ) -> FiniteSet<Summand<T, U>> {
        self.direct_sum(&FiniteSet::empty().union_all(others))
    }
}

// -------------------- Parallel evaluation -------------------- //

#[cfg(feature = "rayon")]
impl<T: Element + Send + Sync> FiniteSet<T> {
    /// The image of the set under a function, evaluated in parallel.
    pub fn par_image<U: Ord + Send, F: Fn(&T) -> U + Sync + Send>(&self, f: F) -> FiniteSet<U> {
        use rayon::prelude::*;
        FiniteSet(self.0.par_iter().map(f).collect())
    }

    /// Set specification, evaluated in parallel.
    #[must_use]
    pub fn par_such_that<P: Fn(&T) -> bool + Sync + Send>(&self, pred: P) -> Self {
        use rayon::prelude::*;
        Self(self.0.par_iter().filter(|&el| pred(el)).cloned().collect())
    }

    /// Whether any element satisfies a predicate, evaluated in parallel.
    pub fn par_any<P: Fn(&T) -> bool + Sync + Send>(&self, pred: P) -> bool {
        use rayon::prelude::*;
        self.0.par_iter().any(pred)
    }
}

// -------------------- Iterators -------------------- //

/// Iterates over every subset of a [`FiniteSet`].
///
/// A subset is described by a bitmask over the elements of the set, which we treat as a binary
/// counter with the least significant bit first.
#[derive(Clone)]
pub struct Subsets<'a, T> {
    /// The elements of the set, in order.
    elements: Vec<&'a T>,
    /// The mask for the next subset, or `None` once they've all been returned.
    mask: Option<BitVec>,
}

impl<'a, T> Subsets<'a, T> {
    /// Initializes the iterator at the empty subset.
    fn new(set: &'a FiniteSet<T>) -> Self {
        Self {
            elements: set.iter().collect(),
            mask: Some(bitvec![0; set.card()]),
        }
    }
}

impl<T: Element> Iterator for Subsets<'_, T> {
    type Item = FiniteSet<T>;

    fn next(&mut self) -> Option<FiniteSet<T>> {
        let mask = self.mask.as_mut()?;
        let subset = mask.iter_ones().map(|i| self.elements[i].clone()).collect();

        // Binary increment. Once every bit is set, we've gone through all subsets.
        if let Some(i) = mask.first_zero() {
            mask[..i].fill(false);
            mask.set(i, true);
        } else {
            self.mask = None;
        }

        Some(subset)
    }
}

/// Tests for [`FiniteSet`].
#[cfg(test)]
mod finite_set {
    use super::*;
    use crate::set;

    #[test]
    fn empty() {
        let set: FiniteSet<u8> = FiniteSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.card(), 0);
        assert_eq!(set.element_or_err(), Err(SetError::EmptySet));
        assert_eq!(set.to_string(), "{}");
    }

    #[test]
    fn dedup() {
        let set = set![3, 1, 2, 3, 1];
        assert_eq!(set.card(), 3);
        assert_eq!(set.to_string(), "{1, 2, 3}");
        assert_eq!(set.element(), Some(&1));
        assert_eq!(set.element_or_err(), Ok(&1));
    }

    #[test]
    fn union() {
        let a = set![1, 2, 3];
        let b = set![3, 4];
        assert_eq!(a.union(&b), set![1, 2, 3, 4]);
        assert_eq!(a.union(&a), a);
        assert_eq!(a.union(&b), b.union(&a));
        assert_eq!(a.union_all([&b, &set![9]]), set![1, 2, 3, 4, 9]);

        // Operands are left untouched.
        assert_eq!(a, set![1, 2, 3]);
        assert_eq!(b, set![3, 4]);
    }

    #[test]
    fn union_of() {
        let sets = set![set![1, 2], set![2, 3], set![]];
        assert_eq!(FiniteSet::union_of(sets), set![1, 2, 3]);
        assert_eq!(FiniteSet::<u8>::union_of([]), set![]);
    }

    #[test]
    fn intersection() {
        let a = set![1, 2, 3, 4];
        let b = set![2, 4, 6];
        let c = set![4, 5];
        assert_eq!(a.intersection(&b), set![2, 4]);
        assert_eq!(a.intersection_all([&b, &c]), set![4]);
        assert_eq!(a.intersection_all([]), a);
        assert!(a.intersection(&b).is_subset_of(&a));
        assert!(a.intersection(&b).is_subset_of(&b));
    }

    #[test]
    fn difference() {
        let a = set![1, 2, 3];
        assert_eq!(a.minus(&2), set![1, 3]);
        assert_eq!(a.minus(&7), a);
        assert_eq!(a.minus_set(&set![1, 3, 5]), set![2]);
        assert!(a.minus_set(&a).is_empty());
    }

    #[test]
    fn such_that() {
        let a: FiniteSet<u32> = (1..=10).collect();
        assert_eq!(a.such_that(|x| x % 3 == 0), set![3, 6, 9]);

        let even = Equation::new(|x: &u32| x % 2 == 0);
        let big = Equation::new(|x: &u32| *x > 4);
        assert_eq!(a.such_that_all(&[even, big]), set![6, 8, 10]);
        assert_eq!(a.such_that_all(&[]), a);
    }

    #[test]
    fn image() {
        let a = set![-2, -1, 0, 1, 2];
        assert_eq!(a.image(|x| x * x), set![0, 1, 4]);
        assert_eq!(a.image(|x| *x), a);

        let f = |x: &i32| x + 1;
        let g = |x: &i32| x * 3;
        assert_eq!(a.image(f).image(g), a.image(|x| g(&f(x))));
    }

    #[test]
    fn extremes() {
        let a = set!["bb", "a", "cccc", "ddd"];
        assert_eq!(a.min_of(|s| s.len()), Ok(&"a"));
        assert_eq!(a.max_of(|s| s.len()), Ok(&"cccc"));
        assert_eq!(
            FiniteSet::<&str>::empty().max_of(|s| s.len()),
            Err(SetError::EmptySet)
        );
    }

    #[test]
    fn power_set() {
        for n in 0..6u32 {
            let set: FiniteSet<u32> = (0..n).collect();
            let power_set = set.power_set();
            assert_eq!(power_set.card(), 1 << n);
            for subset in &power_set {
                assert!(subset.is_subset_of(&set));
            }
        }

        let power_set = set![1, 2].power_set();
        assert_eq!(power_set, set![set![], set![1], set![2], set![1, 2]]);
        assert_eq!(FiniteSet::<u8>::empty().power_set(), set![set![]]);
    }

    #[test]
    fn product() {
        let a = set![1, 2];
        let b = set!['x', 'y', 'z'];
        let product = a.product(&b);
        assert_eq!(product.card(), 6);
        assert!(product.contains(&(2, 'y')));
        assert!(a.product(&FiniteSet::<char>::empty()).is_empty());
    }

    #[test]
    fn direct_sum() {
        // The two copies of 1 are kept apart.
        let sum = set![1, 2].direct_sum(&set![1]);
        assert_eq!(sum.card(), 3);
        assert!(sum.contains(&Summand::Left(1)));
        assert!(sum.contains(&Summand::Right(1)));
    }

    #[test]
    fn product_all() {
        let a = set![0];
        let product = a.product_all([&set![1, 2], &set![2, 3]]);
        assert_eq!(product, set![(0, 1), (0, 2), (0, 3)]);
        let none: [&FiniteSet<u8>; 0] = [];
        assert!(a.product_all(none).is_empty());

        let sum = set!['a'].direct_sum_all([&set![1], &set![1, 2]]);
        assert_eq!(
            sum,
            set![Summand::Left('a'), Summand::Right(1), Summand::Right(2)]
        );
    }

    #[test]
    fn predicate_contains() {
        let evens = set![0, 2, 4];
        let member = evens.predicate_contains();
        assert!(member.test(&2));
        assert!(!member.test(&3));
        assert_eq!(member.solve_in(&set![1, 2, 3, 4]), set![2, 4]);
    }

    #[test]
    fn subsets() {
        let set = set!['a', 'b', 'c'];
        let subsets: Vec<_> = set.subsets().collect();
        assert_eq!(subsets.len(), 8);
        assert_eq!(subsets.first(), Some(&set![]));
        assert_eq!(subsets.last(), Some(&set));
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn parallel() {
        let a: FiniteSet<u64> = (0..1000).collect();
        assert_eq!(a.par_image(|x| x % 7), a.image(|x| x % 7));
        assert_eq!(a.par_such_that(|x| x % 2 == 1), a.such_that(|x| x % 2 == 1));
        assert!(a.par_any(|x| *x == 999));
    }
}
