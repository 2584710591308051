//! Fixed-width vectors of per-resource-class unit counts.

use std::fmt;
use std::ops::{AddAssign, Index, SubAssign};

use smallvec::SmallVec;

/// Inline capacity for [`ResourceVector`]. The reference configuration
/// manages four resource classes, so vectors of typical width live
/// entirely on the stack.
const INLINE_CLASSES: usize = 4;

/// An ordered sequence of non-negative unit counts, one per resource class.
///
/// Used for the arbiter's `available` pool and for the per-consumer rows
/// of the `maximum`, `allocation`, and `need` matrices. The width (number
/// of resource classes) is fixed at construction; all component-wise
/// operations require both operands to share the same width.
///
/// # Examples
///
/// ```
/// use arbiter_core::ResourceVector;
///
/// let mut available = ResourceVector::from_slice(&[1, 5, 2, 0]);
/// let request = ResourceVector::from_slice(&[1, 0, 1, 0]);
///
/// assert!(request.fits_within(&available));
/// available -= &request;
/// assert_eq!(available, ResourceVector::from_slice(&[0, 5, 1, 0]));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ResourceVector(SmallVec<[u32; INLINE_CLASSES]>);

impl ResourceVector {
    /// A vector of `width` zeros.
    pub fn zeroed(width: usize) -> Self {
        Self(SmallVec::from_elem(0, width))
    }

    /// Build a vector from a slice of counts.
    pub fn from_slice(counts: &[u32]) -> Self {
        Self(SmallVec::from_slice(counts))
    }

    /// Number of resource classes this vector spans.
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// The counts as a slice, in resource-class order.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Iterate over the counts in resource-class order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    /// True if every component of `self` is ≤ the matching component
    /// of `bound`.
    ///
    /// This is the eligibility test of the safety check (`need ≤ work`)
    /// and the precondition test of the request path.
    pub fn fits_within(&self, bound: &Self) -> bool {
        debug_assert_eq!(self.width(), bound.width());
        self.0.iter().zip(&bound.0).all(|(a, b)| a <= b)
    }

    /// Index of the first component of `self` that exceeds the matching
    /// component of `bound`, if any.
    ///
    /// Used to report *which* resource class violated a precondition.
    pub fn first_exceeding(&self, bound: &Self) -> Option<usize> {
        debug_assert_eq!(self.width(), bound.width());
        self.0.iter().zip(&bound.0).position(|(a, b)| a > b)
    }
}

impl AddAssign<&ResourceVector> for ResourceVector {
    fn add_assign(&mut self, rhs: &ResourceVector) {
        debug_assert_eq!(self.width(), rhs.width());
        for (a, b) in self.0.iter_mut().zip(&rhs.0) {
            *a += b;
        }
    }
}

impl SubAssign<&ResourceVector> for ResourceVector {
    /// Component-wise subtraction. Callers must have established
    /// `rhs.fits_within(self)` first; underflow is a logic error.
    fn sub_assign(&mut self, rhs: &ResourceVector) {
        debug_assert_eq!(self.width(), rhs.width());
        for (a, b) in self.0.iter_mut().zip(&rhs.0) {
            debug_assert!(*a >= *b);
            *a -= b;
        }
    }
}

impl Index<usize> for ResourceVector {
    type Output = u32;

    fn index(&self, resource: usize) -> &u32 {
        &self.0[resource]
    }
}

impl FromIterator<u32> for ResourceVector {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for ResourceVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, count) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{count}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zeroed_has_requested_width() {
        let v = ResourceVector::zeroed(4);
        assert_eq!(v.width(), 4);
        assert_eq!(v.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn fits_within_is_component_wise() {
        let a = ResourceVector::from_slice(&[1, 0, 1, 0]);
        let b = ResourceVector::from_slice(&[1, 5, 2, 0]);
        assert!(a.fits_within(&b));
        assert!(!b.fits_within(&a));
        // Equality counts as fitting.
        assert!(a.fits_within(&a));
    }

    #[test]
    fn first_exceeding_reports_lowest_index() {
        let a = ResourceVector::from_slice(&[0, 7, 9, 0]);
        let b = ResourceVector::from_slice(&[1, 5, 2, 0]);
        assert_eq!(a.first_exceeding(&b), Some(1));
        assert_eq!(ResourceVector::zeroed(4).first_exceeding(&b), None);
    }

    #[test]
    fn add_then_sub_round_trips() {
        let mut v = ResourceVector::from_slice(&[3, 1, 4, 1]);
        let delta = ResourceVector::from_slice(&[2, 0, 1, 1]);
        let before = v.clone();
        v += &delta;
        v -= &delta;
        assert_eq!(v, before);
    }

    #[test]
    fn display_formats_as_bracketed_list() {
        let v = ResourceVector::from_slice(&[1, 5, 2, 0]);
        assert_eq!(v.to_string(), "[1, 5, 2, 0]");
    }

    proptest! {
        #[test]
        fn fits_within_agrees_with_first_exceeding(
            a in proptest::collection::vec(0u32..100, 4),
            b in proptest::collection::vec(0u32..100, 4),
        ) {
            let a = ResourceVector::from_slice(&a);
            let b = ResourceVector::from_slice(&b);
            prop_assert_eq!(a.fits_within(&b), a.first_exceeding(&b).is_none());
        }
    }
}
