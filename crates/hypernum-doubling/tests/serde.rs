#![cfg(feature = "serde")]

use hypernum_doubling::{Complex, Dual, Quaternion};

#[test]
fn test_pair_serializes_components_only() {
    let z = Complex::new(1.5_f64, -2.0);
    let json = serde_json::to_string(&z).unwrap();
    assert_eq!(json, r#"{"first":1.5,"second":-2.0}"#);
    let back: Complex<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, z);
}

#[test]
fn test_nested_pair_deserializes() {
    let json = r#"{"first":{"first":1.0,"second":2.0},"second":{"first":3.0,"second":4.0}}"#;
    let q: Quaternion<f64> = serde_json::from_str(json).unwrap();
    assert_eq!(q, Complex::new(Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)));
    let d: Dual<f64> = serde_json::from_str(r#"{"first":0.0,"second":1.0}"#).unwrap();
    assert_eq!(d, Dual::new(0.0, 1.0));
}
