//! Declaration tables from JSON, defaulted arguments, and shared use.

use pretty_assertions::assert_eq;
use shapeguard_tests::prelude::*;

type Array = ArrayD<f64>;

#[test]
fn test_json_declared_table_drives_calls() {
    // GIVEN
    let table = DeclarationTable::from_json(r#"{"a": ["N", 1], "b": [3, "N"], "ret": [3, "N"]}"#)
        .unwrap();
    let f = ConstrainedFn::new(["a", "b"], table, |call: &CallArgs<'_, Array>| {
        call.get("b").unwrap() * &call.get("a").unwrap().t()
    })
    .unwrap();

    // WHEN
    let ok = f.call(&Args::new().arg(ones(&[5, 1])).arg(ones(&[3, 5])));
    let err = f
        .call(&Args::new().arg(ones(&[5, 1])).arg(ones(&[3, 6])))
        .unwrap_err();

    // THEN
    assert_eq!(ok.unwrap().shape(), &[3, 5]);
    assert_eq!(err, ShapeError::template_conflict("N", 5, 6, "a", "b"));
}

#[test]
fn test_json_and_builder_report_conflicts_alike() {
    // GIVEN the same declarations, "b" first, from JSON and from the builder
    let from_json = DeclarationTable::from_json(r#"{"b": [3, "N"], "a": ["N", 1]}"#).unwrap();
    let built = DeclarationTable::builder()
        .param("b", dims![3, "N"])
        .param("a", dims!["N", 1])
        .build()
        .unwrap();
    let args = Args::new().arg(ones(&[5, 1])).arg(ones(&[3, 6]));

    // WHEN
    let errors: Vec<ShapeError> = [from_json, built]
        .into_iter()
        .map(|table| {
            ConstrainedFn::new(["a", "b"], table, |_: &CallArgs<'_, Array>| ones(&[1]))
                .unwrap()
                .call(&args)
                .unwrap_err()
        })
        .collect();

    // THEN both match "b" before "a"
    let expected = ShapeError::template_conflict("N", 6, 5, "b", "a");
    assert_eq!(errors, vec![expected.clone(), expected]);
}

#[test]
fn test_json_unknown_parameter_rejected_at_wrap_time() {
    let table = DeclarationTable::from_json(r#"{"c": [100, 2]}"#).unwrap();

    let result = ConstrainedFn::new(["a", "b"], table, |_: &CallArgs<'_, Array>| ones(&[1]));

    assert!(matches!(result, Err(RegistryError::UnknownParameter(ref n)) if n == "c"));
}

#[test]
fn test_defaulted_argument_is_not_checked() {
    // GIVEN "bias" is constrained but has a default the function falls back to
    let table = DeclarationTable::builder()
        .param("x", dims!["N", 1])
        .param("bias", dims!["N", 1])
        .build()
        .unwrap();
    let default_bias = ones(&[1, 1]);
    let f = ConstrainedFn::new(["x", "bias"], table, |call: &CallArgs<'_, Array>| {
        call.get("x").unwrap() + call.get_or("bias", &default_bias)
    })
    .unwrap();

    // WHEN bias is omitted, the (1, 1) default never meets the (N, 1) constraint
    let result = f.call(&Args::new().arg(column(&[1.0, 2.0]))).unwrap();

    // THEN
    assert_eq!(result, column(&[2.0, 3.0]));

    // AND WHEN a bias of the wrong length is supplied, it is checked
    let err = f
        .call(&Args::new().arg(column(&[1.0, 2.0])).kwarg("bias", ones(&[3, 1])))
        .unwrap_err();
    assert_eq!(err, ShapeError::template_conflict("N", 2, 3, "x", "bias"));
}

#[test]
fn test_unconstrained_function_always_runs() {
    let f = ConstrainedFn::new(["a"], DeclarationTable::default(), |call: &CallArgs<'_, Array>| {
        call.get("a").unwrap().clone()
    })
    .unwrap();

    let result = f.call(&Args::new().arg(ones(&[7, 2, 9]))).unwrap();

    assert_eq!(result.shape(), &[7, 2, 9]);
}

#[test]
fn test_strict_config_rejects_non_square() {
    let table = DeclarationTable::builder()
        .param("m", dims!["N", "N"])
        .returns(dims!["N"])
        .build()
        .unwrap();
    let diag = ConstrainedFn::new(["m"], table, |call: &CallArgs<'_, Array>| {
        let m = call.get("m").unwrap();
        ones(&[m.shape()[1]])
    })
    .unwrap();

    // Permissive by default: the last N wins and the return agrees with it
    let permissive = diag.call(&Args::new().arg(ones(&[2, 3])));
    assert_eq!(permissive.unwrap().shape(), &[3]);

    let strict = diag.with_config(MatchConfig::strict());
    let err = strict.call(&Args::new().arg(ones(&[2, 3]))).unwrap_err();
    assert_eq!(err, ShapeError::template_conflict("N", 2, 3, "m", "m"));
}

#[test]
fn test_shared_across_threads() {
    // GIVEN one wrapped function used from several threads at once
    let table = DeclarationTable::builder()
        .param("a", dims!["N", 1])
        .param("b", dims!["N", 1])
        .returns(dims!["N", 1])
        .build()
        .unwrap();
    let sum = ConstrainedFn::new(["a", "b"], table, |call: &CallArgs<'_, Array>| {
        call.get("a").unwrap() + call.get("b").unwrap()
    })
    .unwrap();
    let sum = &sum;

    // WHEN each thread uses its own N, and odd threads mismatch
    let outcomes: Vec<(usize, bool)> = std::thread::scope(|s| {
        let handles: Vec<_> = (1..=8usize)
            .map(|n| {
                s.spawn(move || {
                    let b_len = if n % 2 == 0 { n } else { n + 1 };
                    let result = sum.call(&Args::new().arg(ones(&[n, 1])).arg(ones(&[b_len, 1])));
                    (n, result.is_ok())
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    // THEN bindings never leak between concurrent calls
    for (n, ok) in outcomes {
        assert_eq!(ok, n % 2 == 0, "thread with N = {}", n);
    }
}
