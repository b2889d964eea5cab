//! Tagged elements of a direct sum [`Summand`].

use crate::prelude::*;

/// An element of a direct sum x ⊔ y, remembering which side it came from.
///
/// Exactly one side is ever populated.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Summand<L, R> {
    /// An element of the left summand.
    Left(L),
    /// An element of the right summand.
    Right(R),
}

impl<L, R> Summand<L, R> {
    /// Whether the element comes from the left summand.
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Whether the element comes from the right summand.
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value, if any.
    pub const fn left(&self) -> Option<&L> {
        match self {
            Self::Left(l) => Some(l),
            Self::Right(_) => None,
        }
    }

    /// The right value, if any.
    pub const fn right(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(r) => Some(r),
        }
    }

    /// Dispatches on the populated side.
    pub fn flat_map<A, B, F: FnOnce(L) -> Summand<A, B>, G: FnOnce(R) -> Summand<A, B>>(
        self,
        left: F,
        right: G,
    ) -> Summand<A, B> {
        match self {
            Self::Left(l) => left(l),
            Self::Right(r) => right(r),
        }
    }

    /// Swaps both sides.
    #[must_use]
    pub fn flip(self) -> Summand<R, L> {
        self.flat_map(Summand::Right, Summand::Left)
    }
}

impl<L: Display, R: Display> Display for Summand<L, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Left(l) => write!(f, "{l}₀"),
            Self::Right(r) => write!(f, "{r}₁"),
        }
    }
}
