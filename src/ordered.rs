//! Sets ordered by position [`OrderedSequence`].

use crate::prelude::*;
use std::ops::Range;

/// A finite set whose elements are laid out in a sequence.
///
/// The position of an element within the sequence gives a total order on the set. Since an
/// [`OrderedSequence`] is still a set, an element can only ever appear at a single position.
///
/// ## Invariants
///
/// - No two elements of the sequence are equal.
/// - `set` holds exactly the elements of `items`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, IntoIterator)]
pub struct OrderedSequence<T> {
    /// The elements, in order.
    #[into_iterator(owned, ref)]
    items: SmallVec<T>,
    /// The elements, as a set.
    set: FiniteSet<T>,
}

impl<T> Default for OrderedSequence<T> {
    fn default() -> Self {
        Self {
            items: SmallVec::new(),
            set: FiniteSet::empty(),
        }
    }
}

impl<T> AsRef<FiniteSet<T>> for OrderedSequence<T> {
    fn as_ref(&self) -> &FiniteSet<T> {
        &self.set
    }
}

impl<T> From<OrderedSequence<T>> for FiniteSet<T> {
    fn from(seq: OrderedSequence<T>) -> Self {
        seq.set
    }
}

impl<T: Debug> Debug for OrderedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(&self.items).finish()
    }
}

/// Displays a sequence in tuple notation, e.g. `(a, b, c)`.
impl<T: Display> Display for OrderedSequence<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("(")?;
        for (i, el) in self.items.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{el}")?;
        }
        f.write_str(")")
    }
}

impl<T: Element> TryFrom<Vec<T>> for OrderedSequence<T> {
    type Error = SetError;

    fn try_from(items: Vec<T>) -> Result<Self> {
        Self::new(items)
    }
}

impl<T> OrderedSequence<T> {
    /// The empty sequence.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The elements, in order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the elements, in order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The elements as an unordered set.
    #[must_use]
    pub const fn as_set(&self) -> &FiniteSet<T> {
        &self.set
    }

    /// The element at some position.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The first element.
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        self.items.first()
    }

    /// The last element.
    #[must_use]
    pub fn tail(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T: Element> OrderedSequence<T> {
    /// Builds a sequence from a vector.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the vector contains repeated elements.
    pub fn new(items: Vec<T>) -> Result<Self> {
        let set: FiniteSet<T> = items.iter().cloned().collect();
        check_argument(
            set.card() == items.len(),
            "a sequence cannot contain repeated elements",
        )?;
        Ok(Self {
            items: items.into(),
            set,
        })
    }

    /// Builds a sequence from an iterator.
    ///
    /// ## Errors
    ///
    /// See [`Self::new`].
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self> {
        Self::new(iter.into_iter().collect())
    }

    /// Builds a sequence from elements that are already known to be distinct.
    pub(crate) fn from_distinct<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: SmallVec<T> = iter.into_iter().collect();
        let set = items.iter().cloned().collect();
        debug_assert_eq!(
            FiniteSet::card(&set),
            items.len(),
            "sequence elements must be distinct"
        );
        Self { items, set }
    }

    /// Membership relation ∈.
    #[must_use]
    pub fn contains(&self, el: &T) -> bool {
        self.set.contains(el)
    }

    /// The position of an element.
    #[must_use]
    pub fn index_of(&self, el: &T) -> Option<usize> {
        if self.contains(el) {
            self.items.iter().position(|x| x == el)
        } else {
            None
        }
    }

    /// The element right after `el`, if `el` is a member and not the last element.
    #[must_use]
    pub fn next(&self, el: &T) -> Option<&T> {
        self.at(self.index_of(el)? + 1)
    }

    /// The element right before `el`, if `el` is a member and not the first element.
    #[must_use]
    pub fn prev(&self, el: &T) -> Option<&T> {
        self.at(self.index_of(el)?.checked_sub(1)?)
    }

    /// The element after `el`, wrapping around from the last element to the first.
    #[must_use]
    pub fn cyclic_next(&self, el: &T) -> Option<&T> {
        let i = self.index_of(el)?;
        self.at((i + 1) % self.len())
    }

    /// The element before `el`, wrapping around from the first element to the last.
    #[must_use]
    pub fn cyclic_prev(&self, el: &T) -> Option<&T> {
        let i = self.index_of(el)?;
        self.at((i + self.len() - 1) % self.len())
    }

    /// The subsequence at some range of positions.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the range is out of bounds.
    pub fn range(&self, range: Range<usize>) -> Result<Self> {
        let slice = self
            .items
            .get(range)
            .ok_or(SetError::InvalidArgument("range out of bounds"))?;
        Ok(Self::from_distinct(slice.iter().cloned()))
    }

    /// The sequence in reverse order.
    #[must_use]
    pub fn reverse(&self) -> Self {
        Self {
            items: self.items.iter().rev().cloned().collect(),
            set: self.set.clone(),
        }
    }

    /// The sequence with the elements of `other` appended.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if the two sequences share an element.
    pub fn concat(&self, other: &Self) -> Result<Self> {
        check_argument(
            self.set.is_disjoint(&other.set),
            "concatenated sequences cannot share elements",
        )?;
        Ok(Self {
            items: self.items.iter().chain(&other.items).cloned().collect(),
            set: self.set.union(&other.set),
        })
    }

    /// Maps every element of the sequence, keeping the order.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if two elements are mapped to equal values.
    pub fn map<U: Element, F: FnMut(&T) -> U>(&self, f: F) -> Result<OrderedSequence<U>> {
        OrderedSequence::new(self.items.iter().map(f).collect())
    }

    /// Compares two members by position.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if either element is not a member.
    pub fn compare(&self, t: &T, u: &T) -> Result<Ordering> {
        match (self.index_of(t), self.index_of(u)) {
            (Some(i), Some(j)) => Ok(i.cmp(&j)),
            _ => Err(SetError::InvalidArgument("compared elements must be members")),
        }
    }

    /// The members placed before `el`.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if `el` is not a member.
    pub fn less_than(&self, el: &T) -> Result<FiniteSet<T>> {
        let i = self
            .index_of(el)
            .ok_or(SetError::InvalidArgument("element must be a member"))?;
        Ok(self.items[..i].iter().cloned().collect())
    }

    /// The members placed after `el`.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if `el` is not a member.
    pub fn more_than(&self, el: &T) -> Result<FiniteSet<T>> {
        let i = self
            .index_of(el)
            .ok_or(SetError::InvalidArgument("element must be a member"))?;
        Ok(self.items[i + 1..].iter().cloned().collect())
    }
}
