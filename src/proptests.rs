//! Property-based tests for polynomial arithmetic.

use proptest::prelude::*;

use crate::poly::{DensePolynomial, SparsePolynomial};

// Strategy for small coefficients, zero included
fn small_coeff() -> impl Strategy<Value = i64> {
    -50i64..50i64
}

// Strategy for dense polynomials of degree 0-6
fn dense_poly() -> impl Strategy<Value = DensePolynomial> {
    proptest::collection::vec(small_coeff(), 1..=7).prop_map(DensePolynomial::from_coefficients)
}

fn nonzero_dense_poly() -> impl Strategy<Value = DensePolynomial> {
    dense_poly().prop_filter("polynomial must be non-zero", |p| !p.is_zero())
}

// Strategy for sparse polynomials with exponents in -8..8
fn sparse_poly() -> impl Strategy<Value = SparsePolynomial> {
    proptest::collection::vec((-8i64..8i64, small_coeff()), 0..6)
        .prop_map(SparsePolynomial::from_terms)
}

// Sparse polynomials that can be converted to dense form
fn non_negative_sparse_poly() -> impl Strategy<Value = SparsePolynomial> {
    proptest::collection::vec((0i64..8i64, small_coeff()), 0..6)
        .prop_map(SparsePolynomial::from_terms)
}

proptest! {
    #[test]
    fn dense_parse_format_round_trip(a in dense_poly()) {
        let parsed: DensePolynomial = a.to_string().parse().unwrap();
        prop_assert_eq!(parsed, a);
    }

    #[test]
    fn sparse_parse_format_round_trip(a in sparse_poly()) {
        let parsed: SparsePolynomial = a.to_string().parse().unwrap();
        prop_assert_eq!(parsed, a);
    }

    #[test]
    fn dense_additive_identity(a in dense_poly()) {
        let zero = DensePolynomial::zero();
        prop_assert_eq!(a.add(&zero).unwrap(), a.clone());
        prop_assert_eq!(a.subtract(&zero).unwrap(), a);
    }

    #[test]
    fn sparse_additive_identity(a in sparse_poly()) {
        let zero = SparsePolynomial::zero();
        prop_assert_eq!(a.add(&zero).unwrap(), a.clone());
        prop_assert_eq!(a.subtract(&zero).unwrap(), a);
    }

    #[test]
    fn multiply_by_zero(a in dense_poly(), b in sparse_poly()) {
        prop_assert_eq!(a.multiply(&DensePolynomial::zero()).unwrap(), DensePolynomial::zero());
        prop_assert_eq!(b.multiply(&SparsePolynomial::zero()).unwrap(), SparsePolynomial::zero());
    }

    #[test]
    fn dense_commutative(a in dense_poly(), b in dense_poly()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        prop_assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
    }

    #[test]
    fn sparse_commutative(a in sparse_poly(), b in sparse_poly()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        prop_assert_eq!(a.multiply(&b).unwrap(), b.multiply(&a).unwrap());
    }

    #[test]
    fn sparse_distributive(a in sparse_poly(), b in sparse_poly(), c in sparse_poly()) {
        // a * (b + c) = a * b + a * c
        let left = &a * &(&b + &c);
        let right = &(&a * &b) + &(&a * &c);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn double_negation(a in dense_poly(), b in sparse_poly()) {
        prop_assert_eq!(a.negate().negate(), a);
        prop_assert_eq!(b.negate().negate(), b);
    }

    #[test]
    fn subtract_self_is_zero(a in dense_poly(), b in sparse_poly()) {
        prop_assert!(a.subtract(&a).unwrap().is_zero());
        prop_assert!(b.subtract(&b).unwrap().is_zero());
    }

    #[test]
    fn degree_of_product(a in nonzero_dense_poly(), b in nonzero_dense_poly()) {
        let product = a.multiply(&b).unwrap();
        prop_assert_eq!(product.degree(), a.degree() + b.degree());
    }

    #[test]
    fn cross_representation_consistency(a in dense_poly(), b in non_negative_sparse_poly()) {
        let dense_sum = a.add(&b).unwrap();
        let sparse_sum = b.add(&a).unwrap();
        let dense_product = a.multiply(&b).unwrap();
        let sparse_product = b.multiply(&a).unwrap();

        for e in -1..=16 {
            prop_assert_eq!(
                dense_sum.coefficient(e).unwrap_or(0),
                sparse_sum.coefficient(e).unwrap()
            );
            prop_assert_eq!(
                dense_product.coefficient(e).unwrap_or(0),
                sparse_product.coefficient(e).unwrap()
            );
        }
        prop_assert_eq!(dense_sum.to_string(), sparse_sum.to_string());
    }

    #[test]
    fn dense_difference_matches_sparse(a in dense_poly(), b in non_negative_sparse_poly()) {
        let dense = a.subtract(&b).unwrap();
        let sparse = SparsePolynomial::from(&a).subtract(&b).unwrap();
        prop_assert_eq!(SparsePolynomial::from(&dense), sparse);
    }

    #[test]
    fn negative_exponents_are_rejected_by_dense(a in dense_poly(), e in -8i64..0, c in 1i64..9) {
        let s = SparsePolynomial::from_terms([(e, c)]);
        prop_assert!(a.add(&s).is_err());
        prop_assert!(a.subtract(&s).is_err());
        prop_assert!(a.multiply(&s).is_err());
    }
}
