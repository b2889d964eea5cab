//! Functions lifted to sets [`SetFunction`], and predicates solved in sets [`Equation`].

use crate::prelude::*;

/// A function between elements, which can also be applied to whole sets.
///
/// Applying a [`SetFunction`] to a set yields its image, see [`FiniteSet::image`].
pub struct SetFunction<'a, T, U>(Box<dyn Fn(&T) -> U + 'a>);

impl<'a, T, U> SetFunction<'a, T, U> {
    /// Wraps a function.
    pub fn new<F: Fn(&T) -> U + 'a>(f: F) -> Self {
        Self(Box::new(f))
    }

    /// Applies the function to an element.
    pub fn apply(&self, t: &T) -> U {
        (self.0)(t)
    }

    /// Applies the function to every element of a set, returning its image.
    pub fn apply_set(&self, set: &FiniteSet<T>) -> FiniteSet<U>
    where
        T: Element,
        U: Ord,
    {
        set.image(|t| self.apply(t))
    }

    /// The equation satisfied exactly by the elements mapped to `u`.
    #[must_use]
    pub fn preimage_of(self, u: U) -> Equation<'a, T>
    where
        T: 'a,
        U: PartialEq + 'a,
    {
        Equation::new(move |t| self.apply(t) == u)
    }

    /// The equation satisfied exactly by the elements mapped into `set`.
    #[must_use]
    pub fn preimage_of_set(self, set: &'a FiniteSet<U>) -> Equation<'a, T>
    where
        T: 'a,
        U: Ord + 'a,
    {
        Equation::new(move |t| set.contains(&self.apply(t)))
    }

    /// The composite function that applies `self` and then `after`.
    #[must_use]
    pub fn and_then<V, G: Fn(U) -> V + 'a>(self, after: G) -> SetFunction<'a, T, V>
    where
        T: 'a,
        U: 'a,
    {
        SetFunction::new(move |t| after(self.apply(t)))
    }

    /// The composite function that applies `before` and then `self`.
    #[must_use]
    pub fn compose<S, G: Fn(&S) -> T + 'a>(self, before: G) -> SetFunction<'a, S, U>
    where
        T: 'a,
        U: 'a,
    {
        SetFunction::new(move |s| self.apply(&before(s)))
    }
}

impl<'a, T: Clone + 'a> SetFunction<'a, T, T> {
    /// The identity function.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(T::clone)
    }
}

impl<T, U> Debug for SetFunction<'_, T, U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("SetFunction")
    }
}

/// A predicate on elements, solved within a set.
pub struct Equation<'a, T>(Box<dyn Fn(&T) -> bool + 'a>);

impl<'a, T> Equation<'a, T> {
    /// Wraps a predicate.
    pub fn new<P: Fn(&T) -> bool + 'a>(pred: P) -> Self {
        Self(Box::new(pred))
    }

    /// Whether an element satisfies the equation.
    pub fn test(&self, t: &T) -> bool {
        (self.0)(t)
    }

    /// The set of all elements of `set` satisfying the equation.
    pub fn solve_in(&self, set: &FiniteSet<T>) -> FiniteSet<T>
    where
        T: Element,
    {
        set.such_that(|t| self.test(t))
    }

    /// Conjunction of two equations.
    #[must_use]
    pub fn and(self, other: Self) -> Self
    where
        T: 'a,
    {
        Self::new(move |t| self.test(t) && other.test(t))
    }

    /// Disjunction of two equations.
    #[must_use]
    pub fn or(self, other: Self) -> Self
    where
        T: 'a,
    {
        Self::new(move |t| self.test(t) || other.test(t))
    }

    /// Negation of an equation.
    #[must_use]
    pub fn not(self) -> Self
    where
        T: 'a,
    {
        Self::new(move |t| !self.test(t))
    }
}

impl<T> Debug for Equation<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("Equation")
    }
}

#[cfg(test)]
mod function {
    use super::*;
    use crate::set;

    #[test]
    fn apply_set() {
        let square = SetFunction::new(|x: &i32| x * x);
        assert_eq!(square.apply(&-3), 9);
        assert_eq!(square.apply_set(&set![-1, 0, 1]), set![0, 1]);
    }

    #[test]
    fn identity() {
        let a = set!['a', 'b', 'c'];
        assert_eq!(SetFunction::identity().apply_set(&a), a);
    }

    #[test]
    fn composition() {
        let a = set![1, 2, 3, 4];
        let f = |x: &i32| x + 10;
        let g = |x: i32| x / 2;

        let composite = SetFunction::new(f).and_then(g);
        assert_eq!(composite.apply_set(&a), a.image(f).image(|x| g(*x)));

        let composite = SetFunction::new(|x: &i32| x * 2).compose(|s: &&str| s.len() as i32);
        assert_eq!(composite.apply(&"abc"), 6);
    }

    #[test]
    fn preimage() {
        let a: FiniteSet<u32> = (0..10).collect();
        let parity = SetFunction::new(|x: &u32| x % 2);
        assert_eq!(parity.preimage_of(1).solve_in(&a), set![1, 3, 5, 7, 9]);

        let targets = set![0, 1];
        let third = SetFunction::new(|x: &u32| x / 3);
        assert_eq!(
            third.preimage_of_set(&targets).solve_in(&a),
            set![0, 1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn connectives() {
        let a: FiniteSet<u32> = (0..10).collect();
        let even = || Equation::new(|x: &u32| x % 2 == 0);
        let small = || Equation::new(|x: &u32| *x < 4);

        assert_eq!(even().and(small()).solve_in(&a), set![0, 2]);
        assert_eq!(even().or(small()).solve_in(&a), set![0, 1, 2, 3, 4, 6, 8]);
        assert_eq!(even().not().solve_in(&a), set![1, 3, 5, 7, 9]);
    }
}
