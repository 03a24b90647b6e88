// tests/integration_tests.rs
//! Integration tests for the public vector API

use std::sync::Once;

use vectortypes::prelude::*;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn v2(x: impl Into<Value>, y: impl Into<Value>) -> Vector2 {
    Vector2::new(&[x.into(), y.into()]).unwrap()
}

#[test]
fn test_construct_from_pairs_keeps_values_exactly() {
    init_tracing();

    for (a, b) in [(3.0, 4.4), (3.3, 4.0), (-0.5, 1e-9), (0.0, -12.75)] {
        let v = v2(a, b);
        assert_eq!(v.x(), a);
        assert_eq!(v.y(), b);
    }

    let v = v2(3, 4);
    assert_eq!(v.x(), Scalar::Int(3));
    assert_eq!(v.y(), Scalar::Int(4));
}

#[test]
fn test_construction_failures() {
    init_tracing();

    let cases: Vec<Vec<Value>> = vec![
        vec![Value::from("a")],
        vec![Value::from((2, 2))],
        vec![Value::from("3"), Value::from(4)],
        vec![Value::from(3), Value::from("4")],
        vec![Value::from(true)],
    ];
    for args in &cases {
        assert_eq!(Vector2::new(args).unwrap_err(), VectorError::IncorrectCoordinatesType);
    }

    assert_eq!(
        Vector3::new(&[Value::from(1), Value::from(2), Value::from(false)]).unwrap_err(),
        VectorError::IncorrectCoordinatesType
    );

    let err = Vector2::new(&[Value::from(3), Value::from(4), Value::from(5)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::WrongArity);
    assert_eq!(err.to_string(), "Vector2 only accepts X and Y values");

    let err = Vector3::new(&vec![Value::from(1); 4]).unwrap_err();
    assert_eq!(err.to_string(), "Vector3 only accepts X, Y and Z values");
}

#[test]
fn test_len_is_fixed_per_dimension() {
    assert_eq!(Vector2::new(&[]).unwrap().len(), 2);
    assert_eq!(v2(4, 9).len(), 2);
    assert_eq!(Vector3::from_xyz(1e300, -2, 0.5).len(), 3);
    assert!(!Vector3::default().is_empty());
}

#[test]
fn test_equality_and_inequality() {
    init_tracing();

    let v1 = v2(1, 1);
    let v5 = v2(1.0, 1.000);

    assert_eq!(v1.try_eq(&Value::from(v2(1, 1))), Ok(true));
    assert_eq!(v1.try_eq(&Value::from(v5)), Ok(true));
    assert_eq!(v5.try_eq(&Value::from(v1)), Ok(true));
    assert_eq!(v1.try_eq(&Value::from(v1)), Ok(true));
    assert_eq!(v1.try_eq(&Value::from(v2(1, 2))), Ok(false));
    assert_eq!(v1.try_eq(&Value::from(v2(2, 1))), Ok(false));

    assert_eq!(v1.try_ne(&Value::from(v2(1, 1))), Ok(false));
    assert_eq!(v1.try_ne(&Value::from(v5)), Ok(false));
    assert_eq!(v1.try_ne(&Value::from(v2(1, 2))), Ok(true));
    assert_eq!(v1.try_ne(&Value::from(v2(2, 1))), Ok(true));

    assert_eq!(v1.try_eq(&Value::from(1)), Err(VectorError::IncorrectVectorComparison));
    assert_eq!(v1.try_ne(&Value::from(1)), Err(VectorError::IncorrectVectorComparison));

    let v3 = Vector3::from_xyz(1, 1, 0);
    assert_eq!(
        v1.try_eq(&Value::from(v3)).unwrap_err().kind(),
        ErrorKind::ComparisonType
    );
    assert_eq!(
        v3.try_ne(&Value::from(v1)).unwrap_err().kind(),
        ErrorKind::ComparisonType
    );

    // Same-type operators follow the same numeric rule.
    assert!(v1 == v5);
    assert!(Vector3::from_xyz(1, 2, 3) != Vector3::from_xyz(1, 2, 3.5));
}

#[test]
fn test_iteration_restarts_and_terminates() {
    let v = v2(3, 4);

    let mut seen = Vec::new();
    for coord in &v {
        seen.push(coord);
    }
    assert_eq!(seen, vec![Scalar::Int(3), Scalar::Int(4)]);

    let mut it = v.iter();
    assert_eq!(it.len(), 2);
    assert_eq!(it.next(), Some(Scalar::Int(3)));
    assert_eq!(it.next(), Some(Scalar::Int(4)));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);

    // Independent cursors over one vector do not interfere.
    let mut a = v.iter();
    let mut b = v.iter();
    assert_eq!(a.next(), Some(Scalar::Int(3)));
    assert_eq!(b.next(), Some(Scalar::Int(3)));
    assert_eq!(a.next(), Some(Scalar::Int(4)));
    assert_eq!(b.next(), Some(Scalar::Int(4)));

    let w = Vector3::from_xyz(1, 2.5, -3);
    let coords: Vec<Scalar> = w.iter().collect();
    assert_eq!(coords, vec![Scalar::Int(1), Scalar::Float(2.5), Scalar::Int(-3)]);
}

#[test]
fn test_indexed_and_keyed_lookup() {
    init_tracing();

    let v = v2(3, 4);
    assert_eq!(v.get(0), Ok(Scalar::Int(3)));
    assert_eq!(v.get(1), Ok(Scalar::Int(4)));
    assert_eq!(v.get("x"), Ok(Scalar::Int(3)));
    assert_eq!(v.get("y"), Ok(Scalar::Int(4)));
    assert_eq!(v.get("magnitude"), Ok(Scalar::Float(5.0)));
    assert_eq!(v.get("angle"), Ok(Scalar::Float(53.13010235415598)));
    assert_eq!(v2(1, 1).get("angle"), Ok(Scalar::Float(45.0)));

    for bad in [-1, 2] {
        assert_eq!(v.get(bad).unwrap_err().kind(), ErrorKind::KeyNotFound);
    }
    assert_eq!(
        v.get("test"),
        Err(VectorError::KeyNotFound { key: "test".to_string() })
    );
    assert_eq!(v.get(("", "")), Err(VectorError::InvalidKeyType));
    assert_eq!(v.get(1.0), Err(VectorError::InvalidKeyType));

    let w = Vector3::from_xyz(0, 3, 4);
    assert_eq!(w.get(2), Ok(Scalar::Int(4)));
    assert_eq!(w.get("magnitude"), Ok(Scalar::Float(5.0)));
    assert_eq!(w.get(3).unwrap_err().kind(), ErrorKind::KeyNotFound);
    // Only index 2 reaches z; neither "z" nor "angle" is a 3D key.
    assert_eq!(w.get("z").unwrap_err().kind(), ErrorKind::KeyNotFound);
    assert_eq!(w.get("angle").unwrap_err().kind(), ErrorKind::KeyNotFound);
}

#[test]
fn test_magnitude_is_recomputed_after_mutation() {
    let mut v = v2(3, 4);
    assert_eq!(v.magnitude(), 5.0);

    v.set_x(6).unwrap();
    v.set_y(8).unwrap();
    assert_eq!(v.magnitude(), 10.0);

    let w = Vector3::from_xyz(1, 2, 2);
    assert!((w.magnitude() - 3.0).abs() < 1e-12);
}

#[test]
fn test_item_assignment_is_unsupported() {
    init_tracing();

    let mut v = Vector2::default();
    let err = v.set_item(0, 2).unwrap_err();
    assert_eq!(err, VectorError::UnsupportedAssignment);
    assert_eq!(err.kind(), ErrorKind::UnsupportedOperation);
    assert_eq!(v, Vector2::default());

    let mut w = Vector3::default();
    assert_eq!(w.set_item("x", 1.5), Err(VectorError::UnsupportedAssignment));
}

#[test]
fn test_single_argument_broadcasts_to_every_axis() {
    let v = Vector3::new(&[Value::from(-2.25)]).unwrap();
    assert!(v.iter().all(|c| c == Scalar::Float(-2.25)));

    let zero = Vector3::new(&[]).unwrap();
    assert!(zero.iter().all(|c| c.is_int() && c == 0_i64));
}
