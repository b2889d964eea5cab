//! Sets with a distinguished element [`PointedSet`].

use crate::prelude::*;

/// A set together with one of its elements, the point.
///
/// ## Invariants
///
/// The point is a member of the set.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct PointedSet<T> {
    /// The underlying set.
    set: FiniteSet<T>,
    /// The distinguished element.
    point: T,
}

impl<T: Ord> PointedSet<T> {
    /// Distinguishes an element of a set.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::InvalidArgument`] if `point` is not in `set`.
    pub fn new(set: FiniteSet<T>, point: T) -> Result<Self> {
        check_argument(set.contains(&point), "the point must belong to the set")?;
        Ok(Self { set, point })
    }

    /// The distinguished element.
    pub const fn point(&self) -> &T {
        &self.point
    }

    /// The underlying set.
    pub const fn set(&self) -> &FiniteSet<T> {
        &self.set
    }

    /// Splits the pointed set into its parts.
    pub fn into_parts(self) -> (FiniteSet<T>, T) {
        (self.set, self.point)
    }
}

impl<T> AsRef<FiniteSet<T>> for PointedSet<T> {
    fn as_ref(&self) -> &FiniteSet<T> {
        &self.set
    }
}

impl<T: Display> Display for PointedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "({}, {})", self.set, self.point)
    }
}
