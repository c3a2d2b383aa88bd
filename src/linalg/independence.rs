use crate::error::{Error, Result};
use crate::matrix::vector::{Orientation, Vector};
use crate::matrix::vector_list::VectorList;

use super::reduction::ef;
use super::structure::is_consistent;
use super::subspace::column_space;

/// Whether the vectors are linearly independent.
///
/// A list longer than its dimension never is, and neither is an empty one.
/// Otherwise the vectors are stacked as columns and independent exactly
/// when the last echelon row still has a pivot.
///
/// ```
/// use rowspace::{is_linearly_independent, Orientation, Vector, VectorList};
///
/// let e = |v: &[i64]| Vector::from_ints(v, Orientation::Column);
/// let list = VectorList::new(vec![e(&[1, 0, 0]), e(&[0, 1, 0])]).unwrap();
/// assert!(is_linearly_independent(&list));
///
/// let dependent = VectorList::new(vec![e(&[1, 2, 3]), e(&[2, 4, 6])]).unwrap();
/// assert!(!is_linearly_independent(&dependent));
/// ```
pub fn is_linearly_independent(list: &VectorList) -> bool {
    if list.is_empty() || list.len() > list.dim() {
        return false;
    }
    let stage = ef(&list.to_matrix());
    let echelon = stage.echelon();
    echelon.pivot_position(list.len() - 1) < echelon.ncols()
}

/// A maximal independent subset, keeping the first vector of each
/// dependent run.
pub fn independent_subset(list: &VectorList) -> VectorList {
    column_space(&list.to_matrix())
}

/// Whether `v` is a linear combination of the vectors in `list`.
///
/// Fails with [`Error::DimensionMismatch`] if `v.dim() != list.dim()`.
pub fn within_span(list: &VectorList, v: &Vector) -> Result<bool> {
    if v.dim() != list.dim() {
        return Err(Error::DimensionMismatch {
            op: "span membership",
            lhs: (list.dim(), list.len()),
            rhs: (v.dim(), 1),
        });
    }
    let system = list
        .to_matrix()
        .augment_cols(&v.with_orientation(Orientation::Column).to_matrix())?;
    Ok(is_consistent(&system))
}

/// Whether the two lists span subspaces of equal dimension.
///
/// Lists of different vector dimensions fail with
/// [`Error::DimensionMismatch`].
pub fn spans(a: &VectorList, b: &VectorList) -> Result<bool> {
    if a.dim() != b.dim() {
        return Err(Error::DimensionMismatch {
            op: "span comparison",
            lhs: (a.dim(), a.len()),
            rhs: (b.dim(), b.len()),
        });
    }
    Ok(independent_subset(a).len() == independent_subset(b).len())
}

/// Whether the list is a basis of the whole space of its dimension.
pub fn is_basis(list: &VectorList) -> bool {
    list.len() == list.dim() && is_linearly_independent(list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(v: &[i64]) -> Vector {
        Vector::from_ints(v, Orientation::Column)
    }

    fn list(vs: &[&[i64]]) -> VectorList {
        VectorList::new(vs.iter().map(|v| col(v)).collect()).unwrap()
    }

    #[test]
    fn too_many_vectors_are_dependent() {
        let l = list(&[&[1, 0], &[0, 1], &[1, 1]]);
        assert!(!is_linearly_independent(&l));
        assert!(!is_linearly_independent(&VectorList::empty(3)));
    }

    #[test]
    fn zero_vector_makes_list_dependent() {
        assert!(!is_linearly_independent(&list(&[&[1, 2], &[0, 0]])));
        assert!(!is_linearly_independent(&list(&[&[0, 0, 0]])));
        assert!(is_linearly_independent(&list(&[&[0, 5, 0]])));
    }

    #[test]
    fn subset_keeps_leading_vectors() {
        let l = list(&[&[1, 1, 0], &[2, 2, 0], &[0, 0, 1], &[1, 1, 1]]);
        let sub = independent_subset(&l);
        assert_eq!(sub.len(), 2);
        assert_eq!(sub[0], col(&[1, 1, 0]));
        assert_eq!(sub[1], col(&[0, 0, 1]));
        assert!(is_linearly_independent(&sub));
    }

    #[test]
    fn span_membership() {
        let l = list(&[&[1, 0, 1], &[0, 1, 1]]);
        assert!(within_span(&l, &col(&[2, 3, 5])).unwrap());
        assert!(!within_span(&l, &col(&[0, 0, 1])).unwrap());
        assert!(within_span(&l, &Vector::from_ints(&[1, 1, 2], Orientation::Row)).unwrap());
        assert!(matches!(
            within_span(&l, &col(&[1, 2])),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn equal_span_dimension() {
        let a = list(&[&[1, 0], &[0, 1]]);
        let b = list(&[&[1, 1], &[2, 2], &[1, -1]]);
        assert!(spans(&a, &b).unwrap());
        let c = list(&[&[3, 3]]);
        assert!(!spans(&a, &c).unwrap());
        assert!(spans(&a, &list(&[&[1, 2, 3]])).is_err());
    }

    #[test]
    fn basis_check() {
        assert!(is_basis(&list(&[&[1, 2], &[3, 4]])));
        assert!(!is_basis(&list(&[&[1, 2], &[2, 4]])));
        assert!(!is_basis(&list(&[&[1, 0, 0], &[0, 1, 0]])));
    }
}
