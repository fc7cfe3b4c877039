//! Matrix products through fallible wrapped functions.

use pretty_assertions::assert_eq;
use shapeguard_tests::prelude::*;

type Array = ArrayD<f64>;

/// `a @ b.T`, failing with ndarray's own error when an input is not 2-D.
fn outer_product(
    call: &CallArgs<'_, Array>,
) -> Result<Array, ndarray::ShapeError> {
    let a = call.get("a").unwrap().view().into_dimensionality::<Ix2>()?;
    let b = call.get("b").unwrap().view().into_dimensionality::<Ix2>()?;
    Ok(a.dot(&b.t()).into_dyn())
}

#[test]
fn test_outer_product_passing() {
    // GIVEN
    let table = DeclarationTable::builder()
        .param("a", dims![3, 1])
        .param("b", dims![3, 1])
        .returns(dims![3, 3])
        .build()
        .unwrap();
    let matmul = ConstrainedFn::fallible(["a", "b"], table, outer_product).unwrap();
    let a = column(&[1.0, 2.0, 3.0]);
    let b = column(&[1.0, 2.0, 3.0]);

    // WHEN called positionally, by name, and mixed
    let positional = matmul.try_call(&Args::new().arg(a.clone()).arg(b.clone())).unwrap();
    let named = matmul
        .try_call(&Args::new().kwarg("a", a.clone()).kwarg("b", b.clone()))
        .unwrap();
    let partial = matmul.try_call(&Args::new().arg(a).kwarg("b", b)).unwrap();

    // THEN
    assert_eq!(positional.shape(), &[3, 3]);
    assert_eq!(positional.iter().sum::<f64>(), 36.0);
    assert_eq!(named, positional);
    assert_eq!(partial, positional);
}

#[test]
fn test_underlying_error_passes_through() {
    // GIVEN no constraint on "b", so a 3-D array reaches the function
    let table = DeclarationTable::builder()
        .param("a", dims![3, 1])
        .build()
        .unwrap();
    let matmul = ConstrainedFn::fallible(["a", "b"], table, outer_product).unwrap();

    // WHEN
    let err = matmul
        .try_call(&Args::new().arg(ones(&[3, 1])).arg(ones(&[3, 1, 1])))
        .unwrap_err();

    // THEN the function's own error comes back unchanged
    assert!(!err.is_shape());
    let inner = err.into_function_error().unwrap();
    assert_eq!(inner.kind(), ndarray::ErrorKind::IncompatibleShape);
}

#[test]
fn test_return_constraint_with_shared_template() {
    // GIVEN (N, 1) x (M, 1) -> (N, M), declaring the result as square
    let table = DeclarationTable::builder()
        .param("a", dims!["N", 1])
        .param("b", dims!["M", 1])
        .returns(dims!["N", "N"])
        .build()
        .unwrap();
    let matmul = ConstrainedFn::fallible(["a", "b"], table, outer_product).unwrap();

    // WHEN both inputs have the same length
    let square = matmul.try_call(&Args::new().arg(ones(&[4, 1])).arg(ones(&[4, 1])));

    // AND WHEN they differ
    let err = matmul
        .try_call(&Args::new().arg(ones(&[4, 1])).arg(ones(&[2, 1])))
        .unwrap_err();

    // THEN only the second call fails; the last N in the result wins and
    // disagrees with the N bound by "a"
    assert_eq!(square.unwrap().shape(), &[4, 4]);
    assert_eq!(
        err.shape_error(),
        Some(&ShapeError::template_conflict("N", 4, 2, "a", RETURN_SOURCE))
    );
}
