//! Sets decomposed into equivalence classes [`PartitionSet`].

use crate::prelude::*;

/// A finite set, together with a decomposition into disjoint classes.
///
/// ## Invariants
///
/// - Every class is non-empty.
/// - Any two distinct classes are disjoint.
/// - The union of all classes is exactly the underlying set.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PartitionSet<T> {
    /// The underlying set.
    set: FiniteSet<T>,
    /// The equivalence classes.
    components: FiniteSet<FiniteSet<T>>,
}

impl<T> Default for PartitionSet<T> {
    fn default() -> Self {
        Self {
            set: FiniteSet::empty(),
            components: FiniteSet::empty(),
        }
    }
}

impl<T> AsRef<FiniteSet<T>> for PartitionSet<T> {
    fn as_ref(&self) -> &FiniteSet<T> {
        &self.set
    }
}

impl<T: Display> Display for PartitionSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.components)
    }
}

/// Checks that a family of sets is made out of non-empty pairwise disjoint classes, and returns
/// their union.
fn validate<T: Element>(components: &FiniteSet<FiniteSet<T>>) -> Result<FiniteSet<T>> {
    let mut union = BTreeSet::new();
    for component in components {
        check_argument(!component.is_empty(), "equivalence classes cannot be empty")?;
        for el in component {
            check_argument(
                union.insert(el.clone()),
                "equivalence classes must be pairwise disjoint",
            )?;
        }
    }

    Ok(union.into())
}

impl<T: Element> PartitionSet<T> {
    /// Builds a partition out of its classes. The underlying set is their union.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if a class is empty or two classes intersect.
    pub fn from_components<I: IntoIterator<Item = FiniteSet<T>>>(components: I) -> Result<Self> {
        let components = components.into_iter().collect();
        let set = validate(&components)?;
        Ok(Self { set, components })
    }

    /// The partition with a single class. The empty set has no classes at all.
    #[must_use]
    pub fn single(set: FiniteSet<T>) -> Self {
        let components = if set.is_empty() {
            FiniteSet::empty()
        } else {
            FiniteSet::singleton(set.clone())
        };
        Self { set, components }
    }

    /// The classes of an equivalence relation on a set.
    ///
    /// Each element is mapped to the set of elements it's related to, and the distinct sets found
    /// this way are the classes. Construction fails if an element is missing from its own class,
    /// or if two distinct classes overlap. Together, these make the relation an equivalence on
    /// the set.
    ///
    /// This takes O(n²) evaluations of the relation.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the classes of the relation do not form a
    /// partition of the set.
    pub fn from_equivalence<R: Equivalence<T>>(set: FiniteSet<T>, relation: &R) -> Result<Self> {
        let mut components = BTreeSet::new();
        for el in &set {
            let class = relation.partial_apply(el).preimage_of(true).solve_in(&set);
            check_argument(class.contains(el), "equivalence relations must be reflexive")?;
            components.insert(class);
        }
        let components = FiniteSet::from(components);
        tracing::trace!(
            card = set.card(),
            classes = components.card(),
            "derived equivalence classes"
        );

        let union = validate(&components)?;
        check_argument(union == set, "equivalence classes must cover the set")?;

        Ok(Self { set, components })
    }

    /// Builds a partition from classes known to satisfy the invariants.
    pub(crate) fn from_parts_unchecked(
        set: FiniteSet<T>,
        components: FiniteSet<FiniteSet<T>>,
    ) -> Self {
        debug_assert_eq!(
            validate(&components).as_ref(),
            Ok(&set),
            "invalid partition"
        );
        Self { set, components }
    }

    /// The class containing `el`.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if `el` is not in the set.
    pub fn component(&self, el: &T) -> Result<&FiniteSet<T>> {
        check_argument(self.set.contains(el), "element must belong to the set")?;
        self.components
            .element_such_that(|component| component.contains(el))
            .ok_or(SetError::NotFound)
    }

    /// An element of a class.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if `component` is not one of the classes.
    pub fn representing<'a>(&self, component: &'a FiniteSet<T>) -> Result<&'a T> {
        check_argument(
            self.components.contains(component),
            "not a class of the partition",
        )?;
        component.element_or_err()
    }

    /// A set with one element from each class.
    #[must_use]
    pub fn representants(&self) -> FiniteSet<T> {
        self.components
            .iter()
            .filter_map(FiniteSet::element)
            .cloned()
            .collect()
    }
}

impl<T> PartitionSet<T> {
    /// The underlying set.
    pub const fn set(&self) -> &FiniteSet<T> {
        &self.set
    }

    /// The set of all classes.
    pub const fn components(&self) -> &FiniteSet<FiniteSet<T>> {
        &self.components
    }

    /// The number of classes.
    #[must_use]
    pub fn number_of_components(&self) -> usize {
        self.components.card()
    }
}
