//! Edges between two vertices [`Link`].

use crate::prelude::*;

/// An unordered pair of vertices.
///
/// The endpoints are stored in increasing order, so that `Link::new(x, y) == Link::new(y, x)`.
/// Both endpoints may coincide, in which case the link is a loop.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IntoIterator)]
pub struct Link<T>(#[into_iterator(owned, ref)] [T; 2]);

impl<T: Debug> Debug for Link<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{:?} ~ {:?}", self.0[0], self.0[1])
    }
}

impl<T: Display> Display for Link<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ~ {}", self.0[0], self.0[1])
    }
}

impl<T: Ord> From<(T, T)> for Link<T> {
    fn from((t, u): (T, T)) -> Self {
        Self::new(t, u)
    }
}

impl<T: Ord> Link<T> {
    /// Ties two vertices together.
    pub fn new(t: T, u: T) -> Self {
        if t <= u {
            Self([t, u])
        } else {
            Self([u, t])
        }
    }

    /// The endpoints, smallest first.
    pub const fn ends(&self) -> (&T, &T) {
        (&self.0[0], &self.0[1])
    }

    /// Whether `el` is an endpoint.
    pub fn contains(&self, el: &T) -> bool {
        self.0.contains(el)
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_loop(&self) -> bool {
        self.0[0] == self.0[1]
    }

    /// The endpoint `start` is tied to.
    ///
    /// ## Errors
    ///
    /// Fails with [`SetError::NotFound`] if `start` is not an endpoint.
    pub fn next(&self, start: &T) -> Result<&T> {
        let [t, u] = &self.0;
        if start == t {
            Ok(u)
        } else if start == u {
            Ok(t)
        } else {
            Err(SetError::NotFound)
        }
    }

    /// Whether both endpoints belong to a set.
    pub fn within(&self, set: &FiniteSet<T>) -> bool {
        self.0.iter().all(|el| set.contains(el))
    }
}

impl<T: Element> Link<T> {
    /// The set of endpoints. Has a single element for a loop.
    #[must_use]
    pub fn as_set(&self) -> FiniteSet<T> {
        self.0.iter().cloned().collect()
    }
}
