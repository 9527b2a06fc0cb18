//! Algebraic law conformance for the doubling constructions.
//!
//! Leaves are small integers so every product stays exact in `f64`.

use hypernum_core::prelude::*;
use hypernum_doubling::{Complex, Diagonal, Doubling, Dual, Law, Octonion, Quaternion, SplitComplex};
use proptest::prelude::*;

fn leaf() -> impl Strategy<Value = f64> {
    (-6i32..=6).prop_map(f64::from)
}

/// A random value of any tower with `f64` leaves.
fn tower<N: Number<Scalar = f64>>() -> impl Strategy<Value = N> {
    prop::collection::vec(leaf(), N::dimension()).prop_map(|leaves| {
        N::from_leaves(&leaves).expect("strategy yields exactly dimension() leaves")
    })
}

/// Mostly signed zeros, so independently drawn values often compare equal.
fn sparse_leaf() -> impl Strategy<Value = f64> {
    prop_oneof![4 => Just(0.0), 4 => Just(-0.0), 1 => Just(1.0)]
}

fn sparse_tower<N: Number<Scalar = f64>>() -> impl Strategy<Value = N> {
    prop::collection::vec(sparse_leaf(), N::dimension()).prop_map(|leaves| {
        N::from_leaves(&leaves).expect("strategy yields exactly dimension() leaves")
    })
}

type Depth3<L> = Doubling<Doubling<Doubling<f64, L>, L>, L>;

fn special_square<N: Number>() -> N {
    let special: N = facade::nullary(Nullary::SpecialOne);
    facade::unary(Unary::Square, &special)
}

#[test]
fn test_dimensions_by_depth() {
    fn check<L: Law>() {
        assert_eq!(facade::dimension::<Doubling<f64, L>>(), 2);
        assert_eq!(facade::dimension::<Doubling<Doubling<f64, L>, L>>(), 4);
        assert_eq!(facade::dimension::<Depth3<L>>(), 8);
    }
    check::<hypernum_doubling::ComplexLaw>();
    check::<hypernum_doubling::DualLaw>();
    check::<hypernum_doubling::SplitComplexLaw>();
    check::<hypernum_doubling::DiagonalLaw>();
    assert_eq!(facade::dimension::<Complex<Dual<SplitComplex<Diagonal<f32>>>>>(), 16);
}

#[test]
fn test_special_one_squares() {
    let minus_one: Complex<f64> = facade::unary(Unary::Negate, &facade::real_one());
    assert_eq!(special_square::<Complex<f64>>(), minus_one);
    assert_eq!(special_square::<Dual<f64>>(), facade::zero::<Dual<f64>>());
    assert_eq!(special_square::<SplitComplex<f64>>(), facade::real_one::<SplitComplex<f64>>());

    // The laws hold for the outermost generator at any depth.
    let minus_one: Octonion<f64> = facade::unary(Unary::Negate, &facade::real_one());
    assert_eq!(special_square::<Octonion<f64>>(), minus_one);
    assert_eq!(special_square::<Dual<Dual<f64>>>(), facade::zero::<Dual<Dual<f64>>>());
    assert_eq!(
        special_square::<SplitComplex<Complex<f64>>>(),
        facade::real_one::<SplitComplex<Complex<f64>>>()
    );
}

#[test]
fn test_special_one_shape() {
    let i: Complex<f64> = facade::nullary(Nullary::SpecialOne);
    assert_eq!(i.into_parts(), (0.0, 1.0));
    let nested: Dual<Complex<f64>> = facade::nullary(Nullary::SpecialOne);
    assert_eq!(nested.leaves(), vec![0.0, 0.0, 1.0, 0.0]);
}

#[test]
fn test_real_one_is_multiplicative_identity() {
    let q = Quaternion::<f64>::from_leaves(&[2.0, -3.0, 5.0, 7.0]).unwrap();
    let one: Quaternion<f64> = facade::real_one();
    assert_eq!(q * one, q);
    assert_eq!(one * q, q);
}

#[test]
fn test_octonion_inverse_holds_without_associativity() {
    let x = Octonion::<f64>::from_leaves(&[1.0, 2.0, 0.0, -1.0, 3.0, 0.5, 2.0, -2.0]).unwrap();
    let product = x * facade::unary(Unary::Inverse, &x);
    for (got, want) in product.leaves().iter().zip([1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]) {
        assert!((got - want).abs() < 1e-12, "{product}");
    }
}

macro_rules! law_properties {
    ($module:ident, $law:ty) => {
        mod $module {
            use super::*;

            type Inner = Doubling<Doubling<f64, $law>, $law>;
            type Tower = Depth3<$law>;

            proptest! {
                #[test]
                fn test_create_keeps_components(a in tower::<Inner>(), b in tower::<Inner>()) {
                    let pair = Tower::new(a, b);
                    prop_assert_eq!(pair.first(), &a);
                    prop_assert_eq!(pair.second(), &b);
                    prop_assert_eq!(pair[0], a);
                    prop_assert_eq!(pair[1], b);
                }

                #[test]
                fn test_zero_is_additive_identity(x in tower::<Tower>()) {
                    let zero: Tower = facade::zero();
                    prop_assert_eq!(x + zero, x);
                    prop_assert_eq!(zero + x, x);
                    prop_assert_eq!(x - x, zero);
                }

                #[test]
                fn test_addition_commutes(x in tower::<Tower>(), y in tower::<Tower>()) {
                    prop_assert_eq!(x + y, y + x);
                }

                #[test]
                fn test_negate_is_involution(x in tower::<Tower>()) {
                    prop_assert_eq!(-(-x), x);
                }

                #[test]
                fn test_conjugate_is_involution(x in tower::<Tower>()) {
                    let twice = facade::unary(Unary::Conjugate, &facade::unary(Unary::Conjugate, &x));
                    prop_assert_eq!(twice, x);
                }

                #[test]
                fn test_equality_is_equivalence(
                    x in sparse_tower::<Tower>(),
                    y in sparse_tower::<Tower>(),
                    z in sparse_tower::<Tower>()
                ) {
                    prop_assert_eq!(x, x);
                    prop_assert_eq!(x == y, y == x);
                    if x == y && y == z {
                        prop_assert_eq!(x, z);
                    }
                    prop_assert_eq!(x.total_cmp(&y), y.total_cmp(&x).reverse());
                }

                #[test]
                fn test_double_is_self_sum(x in tower::<Tower>()) {
                    prop_assert_eq!(facade::unary(Unary::Double, &x), x + x);
                    prop_assert_eq!(facade::unary(Unary::Half, &(x + x)), x);
                }
            }
        }
    };
}

law_properties!(complex, hypernum_doubling::ComplexLaw);
law_properties!(dual, hypernum_doubling::DualLaw);
law_properties!(split_complex, hypernum_doubling::SplitComplexLaw);
law_properties!(diagonal, hypernum_doubling::DiagonalLaw);

proptest! {
    #[test]
    fn test_complex_multiplication_commutes(x in tower::<Complex<f64>>(), y in tower::<Complex<f64>>()) {
        prop_assert_eq!(x * y, y * x);
    }

    #[test]
    fn test_quaternion_multiplication_associates(
        x in tower::<Quaternion<f64>>(),
        y in tower::<Quaternion<f64>>(),
        z in tower::<Quaternion<f64>>()
    ) {
        prop_assert_eq!((x * y) * z, x * (y * z));
    }

    #[test]
    fn test_octonion_norm_is_multiplicative(x in tower::<Octonion<f64>>(), y in tower::<Octonion<f64>>()) {
        let lhs = (x * y).norm().unwrap();
        let rhs = facade::binary(Binary::Multiply, &x.norm().unwrap(), &y.norm().unwrap());
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_dual_product_rule(a in leaf(), b in leaf(), c in leaf(), d in leaf()) {
        // (a + bε)(c + dε) = ac + (ad + bc)ε
        let product = Dual::new(a, b) * Dual::new(c, d);
        prop_assert_eq!(product, Dual::new(a * c, a * d + b * c));
    }

    #[test]
    fn test_split_complex_norm_is_multiplicative(x in tower::<SplitComplex<f64>>(), y in tower::<SplitComplex<f64>>()) {
        prop_assert_eq!((x * y).norm().unwrap(), x.norm().unwrap() * y.norm().unwrap());
    }
}
