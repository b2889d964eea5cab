//! Binary relations: [`Relation`], [`Equivalence`] and [`Order`].

use crate::prelude::*;

/// A binary relation on `T`, valued in `U`.
///
/// Implemented for every closure `Fn(&T, &T) -> U`.
pub trait Relation<T, U> {
    /// The value of the relation on a pair of elements.
    fn relate(&self, t: &T, u: &T) -> U;

    /// Fixes the first argument of the relation.
    fn partial_apply<'a>(&'a self, t: &T) -> SetFunction<'a, T, U>
    where
        T: Clone + 'a,
    {
        let t = t.clone();
        SetFunction::new(move |u| self.relate(&t, u))
    }
}

impl<T, U, F: Fn(&T, &T) -> U> Relation<T, U> for F {
    fn relate(&self, t: &T, u: &T) -> U {
        self(t, u)
    }
}

/// A boolean relation meant to be reflexive, symmetric and transitive.
///
/// Nothing is checked when implementing the trait. See
/// [`PartitionSet::from_equivalence`] for what happens when these properties fail.
pub trait Equivalence<T>: Relation<T, bool> {
    /// Relates the two elements of a pair.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] unless `pair` has exactly two elements.
    fn relates_pair(&self, pair: &FiniteSet<T>) -> Result<bool>
    where
        T: Ord,
    {
        let mut iter = pair.iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(t), Some(u), None) => Ok(self.relate(t, u)),
            _ => Err(SetError::InvalidArgument("a pair must have exactly two elements")),
        }
    }
}

impl<T, F: Fn(&T, &T) -> bool> Equivalence<T> for F {}

/// A relation comparing two elements, meant to be a total order.
pub trait Order<T>: Relation<T, Ordering> {
    /// Compares two elements.
    fn compare(&self, t: &T, u: &T) -> Ordering {
        self.relate(t, u)
    }
}

impl<T, F: Fn(&T, &T) -> Ordering> Order<T> for F {}

// -------------------- Order queries -------------------- //

impl<T: Element> FiniteSet<T> {
    /// The elements with no strictly smaller element in the set.
    #[must_use]
    pub fn minima<O: Order<T>>(&self, order: &O) -> Self {
        self.such_that(|p| self.iter().all(|q| order.compare(q, p) != Ordering::Less))
    }

    /// The elements with no strictly greater element in the set.
    #[must_use]
    pub fn maxima<O: Order<T>>(&self, order: &O) -> Self {
        self.such_that(|p| self.iter().all(|q| order.compare(q, p) != Ordering::Greater))
    }

    /// The elements strictly smaller than `t`.
    #[must_use]
    pub fn less_than<O: Order<T>>(&self, order: &O, t: &T) -> Self {
        self.such_that(|p| order.compare(p, t) == Ordering::Less)
    }

    /// The elements strictly greater than `t`.
    #[must_use]
    pub fn more_than<O: Order<T>>(&self, order: &O, t: &T) -> Self {
        self.such_that(|p| order.compare(p, t) == Ordering::Greater)
    }

    /// The elements comparing equal to `t`.
    #[must_use]
    pub fn equal_to<O: Order<T>>(&self, order: &O, t: &T) -> Self {
        self.such_that(|p| order.compare(p, t) == Ordering::Equal)
    }
}

#[cfg(test)]
mod relation {
    use super::*;
    use crate::set;

    #[test]
    fn partial_apply() {
        let distance = |a: &i32, b: &i32| (a - b).abs();
        let from_two = distance.partial_apply(&2);
        assert_eq!(from_two.apply_set(&set![0, 1, 2, 3, 4]), set![0, 1, 2]);
    }

    #[test]
    fn pair() {
        let same_parity = |a: &u8, b: &u8| a % 2 == b % 2;
        assert_eq!(same_parity.relates_pair(&set![1, 3]), Ok(true));
        assert_eq!(same_parity.relates_pair(&set![1, 2]), Ok(false));
        assert!(matches!(
            same_parity.relates_pair(&set![1]),
            Err(SetError::InvalidArgument(_))
        ));
        assert!(matches!(
            same_parity.relates_pair(&set![1, 2, 3]),
            Err(SetError::InvalidArgument(_))
        ));
    }

    #[test]
    fn order() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        let words = set!["a", "bb", "cc", "ddd"];
        assert_eq!(words.minima(&by_len), set!["a"]);
        assert_eq!(words.maxima(&by_len), set!["ddd"]);
        assert_eq!(words.less_than(&by_len, &"xy"), set!["a"]);
        assert_eq!(words.more_than(&by_len, &"xy"), set!["ddd"]);
        assert_eq!(words.equal_to(&by_len, &"xy"), set!["bb", "cc"]);
    }
}
