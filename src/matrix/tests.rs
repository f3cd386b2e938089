use fraction::Fraction;
use nalgebra::DMatrix;
use pretty_assertions::{assert_eq, assert_str_eq};
use proptest::prelude::*;

use super::*;

fn real(rows: Vec<Vec<f64>>) -> Matrix<f64> {
    Matrix::from_rows(rows).unwrap()
}

fn frac(numer: i64, denom: i64) -> Fraction {
    Fraction::new(numer, denom).unwrap()
}

#[test]
fn construction() {
    let m = Matrix::<f64>::new(2, 3);
    assert_eq!(m.shape(), (2, 3));
    assert!(m.as_slice().iter().all(|el| *el == 0.));

    let filled = Matrix::from_element(2, 2, frac(1, 2));
    assert_eq!(filled.as_slice(), &[frac(1, 2); 4]);

    let m = real(vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
    assert_eq!(m.as_slice(), &[1., 2., 3., 4., 5., 6.]);
    assert_eq!(m.row(1), Some(&[4., 5., 6.][..]));
    assert_eq!(m.row(2), None);
    assert_eq!(m.clone().into_rows(), vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
    assert!(!m.is_square());
}

#[test]
fn ragged_and_empty_input_is_rejected() {
    assert_eq!(
        Matrix::from_rows(vec![vec![1., 2.], vec![3.]]),
        Err(Error::InvalidDimensions {
            expected: Shape::cols(2),
            found: Shape::cols(1)
        })
    );
    assert!(Matrix::<f64>::from_rows(vec![])
        .unwrap_err()
        .is_invalid_dimensions());
    assert!(Matrix::<f64>::from_rows(vec![vec![], vec![]])
        .unwrap_err()
        .is_invalid_dimensions());
}

#[test]
fn element_access_is_bounds_checked() {
    let mut m = Matrix::<f64>::new(2, 2);
    m.set(1, 0, 7.).unwrap();
    assert_eq!(m.get(1, 0), Ok(&7.));
    *m.get_mut(0, 1).unwrap() = -1.;
    assert_eq!(m[(0, 1)], -1.);

    let out_of_range = Error::IndexOutOfRange {
        row: 2,
        col: 0,
        rows: 2,
        cols: 2,
    };
    assert_eq!(m.get(2, 0), Err(out_of_range.clone()));
    assert_eq!(m.set(2, 0, 1.), Err(out_of_range));
    assert!(m.get(0, 2).unwrap_err().is_index_out_of_range());
}

#[test]
#[should_panic(expected = "out of range")]
fn index_operator_panics_out_of_range() {
    let m = Matrix::<f64>::identity(2);
    let _value = m[(0, 2)];
}

#[test]
fn arithmetic_scenario() {
    let a = real(vec![vec![1., 2.], vec![3., 4.]]);
    let b = real(vec![vec![5., 6.], vec![7., 8.]]);
    assert_eq!(a.try_add(&b), Ok(real(vec![vec![6., 8.], vec![10., 12.]])));
    assert_eq!(a.try_sub(&b), Ok(real(vec![vec![-4., -4.], vec![-4., -4.]])));
    assert_eq!(a.try_mul(&b), Ok(real(vec![vec![19., 22.], vec![43., 50.]])));
    assert_eq!(a.scale(&2.), real(vec![vec![2., 4.], vec![6., 8.]]));
    assert_eq!(a.try_div(&2.), Ok(real(vec![vec![0.5, 1.], vec![1.5, 2.]])));
}

#[test]
fn rectangular_product() {
    let a = real(vec![vec![1., 2., 3.]]);
    let b = real(vec![vec![4.], vec![5.], vec![6.]]);
    assert_eq!(a.try_mul(&b), Ok(real(vec![vec![32.]])));
    assert_eq!(b.try_mul(&a).unwrap().shape(), (3, 3));
}

#[test]
fn shape_mismatch() {
    let a = real(vec![vec![1., 2.], vec![3., 4.]]);
    let b = real(vec![vec![1., 2., 3.]]);
    assert_eq!(
        a.try_add(&b),
        Err(Error::InvalidDimensions {
            expected: Shape::exact(2, 2),
            found: Shape::exact(1, 3)
        })
    );
    assert!(a.try_sub(&b).unwrap_err().is_invalid_dimensions());
    assert_eq!(
        a.try_mul(&b),
        Err(Error::InvalidDimensions {
            expected: Shape::rows(2),
            found: Shape::rows(1)
        })
    );
}

#[test]
fn division_by_negligible_scalar() {
    let a = real(vec![vec![1., 2.]]);
    assert_eq!(a.try_div(&0.), Err(Error::DivisionByZero));
    assert_eq!(a.try_div(&1e-11), Err(Error::DivisionByZero));
    assert!(a.try_div(&1e-9).is_ok());

    let f = Matrix::from_element(1, 2, frac(3, 4));
    assert_eq!(f.try_div(&Fraction::from_integer(0)), Err(Error::DivisionByZero));
    assert_eq!(
        f.try_div(&frac(1, 1_000_000_000_000)),
        Ok(Matrix::from_element(1, 2, Fraction::from_integer(750_000_000_000)))
    );
}

#[test]
fn transpose() {
    let m = real(vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
    assert_eq!(
        m.transpose(),
        real(vec![vec![1., 4.], vec![2., 5.], vec![3., 6.]])
    );
}

#[test]
fn row_operations() {
    let mut m = real(vec![vec![1., 2.], vec![3., 4.], vec![5., 6.]]);
    m.swap_rows(0, 2).unwrap();
    m.scale_row(1, &2.).unwrap();
    m.add_row_multiple(2, 0, &-1.).unwrap();
    assert_eq!(m, real(vec![vec![5., 6.], vec![6., 8.], vec![-4., -4.]]));
    assert!(m.swap_rows(0, 3).unwrap_err().is_index_out_of_range());
    assert!(m.scale_row(3, &1.).unwrap_err().is_index_out_of_range());
    assert!(m.add_row_multiple(0, 5, &1.).unwrap_err().is_index_out_of_range());
}

#[test]
fn augment() {
    let a = real(vec![vec![1., 2.], vec![3., 4.]]);
    assert_eq!(
        a.augment(&Matrix::identity(2)),
        Ok(real(vec![vec![1., 2., 1., 0.], vec![3., 4., 0., 1.]]))
    );
    assert!(a
        .augment(&real(vec![vec![1.]]))
        .unwrap_err()
        .is_invalid_dimensions());
}

#[test]
fn approx_eq() {
    let a = real(vec![vec![1., 2.]]);
    let b = real(vec![vec![1. + 1e-10, 2. - 1e-10]]);
    assert!(Matrix::approx_eq(&a, &b));
    assert!(!Matrix::approx_eq(&a, &real(vec![vec![1., 2.1]])));
    assert!(!Matrix::approx_eq(&a, &real(vec![vec![1.], vec![2.]])));
    assert!(Matrix::approx_eq_with(&a, &real(vec![vec![1., 2.1]]), 0.2));

    let exact = Matrix::from_element(1, 1, frac(1, 3));
    assert!(Matrix::approx_eq(&exact, &exact.clone()));
    assert!(!Matrix::approx_eq(
        &exact,
        &Matrix::from_element(1, 1, frac(333_333_333, 1_000_000_000))
    ));
}

#[test]
fn display() {
    let m = Matrix::from_rows(vec![
        vec![frac(1, 2), Fraction::from_integer(-3)],
        vec![Fraction::from_integer(10), frac(-7, 4)],
    ])
    .unwrap();
    assert_str_eq!(m.to_string(), "|  1/2   -3 |\n|   10 -7/4 |");
    assert_str_eq!(
        m.display_augmented(1).to_string(),
        "|  1/2 |   -3 |\n|   10 | -7/4 |"
    );
}

#[test]
fn fraction_matrix_to_f64() {
    let m = Matrix::from_element(1, 2, frac(-1, 4));
    assert_eq!(m.to_f64(), real(vec![vec![-0.25, -0.25]]));
}

#[test]
fn nalgebra_round_trip_keeps_layout() {
    let m = real(vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
    let dm = DMatrix::from(m.clone());
    assert_eq!(dm, DMatrix::from_row_slice(2, 3, &[1., 2., 3., 4., 5., 6.]));
    assert_eq!(Matrix::from(dm), m);
}

#[test]
fn serde_as_rows() {
    let m = Matrix::from_rows(vec![vec![frac(1, 2), frac(3, 1)]]).unwrap();
    let json = serde_json::to_string(&m).unwrap();
    assert_str_eq!(json, "[[[1,2],[3,1]]]");
    assert_eq!(serde_json::from_str::<Matrix<Fraction>>(&json).unwrap(), m);
    assert!(serde_json::from_str::<Matrix<f64>>("[[1.0,2.0],[3.0]]").is_err());
}

fn real_pair() -> impl Strategy<Value = (Matrix<f64>, Matrix<f64>)> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
        let entries = prop::collection::vec(-1e3f64..1e3, rows * cols);
        (entries.clone(), entries).prop_map(move |(a, b)| {
            (
                Matrix::from_fn(rows, cols, |i, j| a[i * cols + j]),
                Matrix::from_fn(rows, cols, |i, j| b[i * cols + j]),
            )
        })
    })
}

proptest! {
    #[test]
    fn add_then_sub_restores_real(
        (a, b) in real_pair()
    ) {
        prop_assert!(Matrix::approx_eq(&a.try_add(&b).unwrap().try_sub(&b).unwrap(), &a));
    }

    #[test]
    fn add_then_sub_restores_exact(
        (rows, cols, a, b) in (1usize..=4, 1usize..=4).prop_flat_map(|(rows, cols)| {
            let entries = prop::collection::vec((-50i64..50, 1i64..20), rows * cols);
            (Just(rows), Just(cols), entries.clone(), entries)
        })
    ) {
        let build = |entries: &[(i64, i64)]| {
            Matrix::from_fn(rows, cols, |i, j| {
                let (numer, denom) = entries[i * cols + j];
                frac(numer, denom)
            })
        };
        let (a, b) = (build(&a), build(&b));
        prop_assert_eq!(a.try_add(&b).unwrap().try_sub(&b).unwrap(), a);
    }

    #[test]
    fn double_transpose_is_identity((a, _) in real_pair()) {
        prop_assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn product_transposes_in_reverse((a, b) in real_pair()) {
        let left = a.try_mul(&b.transpose()).unwrap().transpose();
        let right = b.try_mul(&a.transpose()).unwrap();
        prop_assert!(Matrix::approx_eq(&left, &right));
    }
}
