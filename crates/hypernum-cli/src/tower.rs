//! Runtime selection of a statically typed tower.
//!
//! Towers are monomorphized types; the CLI picks one from `(variant, depth,
//! projective)` and hands it to a [`TowerVisitor`].

use anyhow::{bail, Result};
use clap::ValueEnum;

use hypernum_core::Number;
use hypernum_doubling::{ComplexLaw, DiagonalLaw, Doubling, DualLaw, Law, SplitComplexLaw};
use hypernum_projective::Projective;

pub const MAX_DEPTH: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    Complex,
    Dual,
    SplitComplex,
    Diagonal,
}

/// Generic code run against whichever tower was selected.
pub trait TowerVisitor {
    type Output;

    fn visit<N: Number<Scalar = f64>>(self) -> Self::Output;
}

fn by_depth<L: Law, Leaf: Number<Scalar = f64>, V: TowerVisitor>(
    depth: u8,
    visitor: V,
) -> Result<V::Output> {
    Ok(match depth {
        1 => visitor.visit::<Doubling<Leaf, L>>(),
        2 => visitor.visit::<Doubling<Doubling<Leaf, L>, L>>(),
        3 => visitor.visit::<Doubling<Doubling<Doubling<Leaf, L>, L>, L>>(),
        4 => visitor.visit::<Doubling<Doubling<Doubling<Doubling<Leaf, L>, L>, L>, L>>(),
        _ => bail!("depth must be between 1 and {MAX_DEPTH}, got {depth}"),
    })
}

fn by_leaf<L: Law, V: TowerVisitor>(depth: u8, projective: bool, visitor: V) -> Result<V::Output> {
    if projective {
        by_depth::<L, Projective<f64>, V>(depth, visitor)
    } else {
        by_depth::<L, f64, V>(depth, visitor)
    }
}

/// Run `visitor` on the tower `variant` nested `depth` times over `f64`
/// (or over `Projective<f64>` leaves).
pub fn dispatch<V: TowerVisitor>(
    variant: Variant,
    depth: u8,
    projective: bool,
    visitor: V,
) -> Result<V::Output> {
    match variant {
        Variant::Complex => by_leaf::<ComplexLaw, V>(depth, projective, visitor),
        Variant::Dual => by_leaf::<DualLaw, V>(depth, projective, visitor),
        Variant::SplitComplex => by_leaf::<SplitComplexLaw, V>(depth, projective, visitor),
        Variant::Diagonal => by_leaf::<DiagonalLaw, V>(depth, projective, visitor),
    }
}

/// Parse `"1,2,-0.5"` into exactly `N::dimension()` leaves.
pub fn parse_value<N: Number<Scalar = f64>>(text: &str) -> Result<N> {
    let leaves = text
        .split(',')
        .map(|s| s.trim().parse::<f64>())
        .collect::<std::result::Result<Vec<_>, _>>()?;
    match N::from_leaves(&leaves) {
        Some(value) => Ok(value),
        None => bail!(
            "expected {} comma-separated components, got {}",
            N::dimension(),
            leaves.len()
        ),
    }
}

/// The `index`-th basis element `e_index`.
pub fn basis<N: Number<Scalar = f64>>(index: usize) -> Option<N> {
    let mut leaves = vec![0.0; N::dimension()];
    *leaves.get_mut(index)? = 1.0;
    N::from_leaves(&leaves)
}

/// `±e_k` when `value` is a signed basis element, `1` for `e_0`, `0` for
/// zero, otherwise the full rendering.
pub fn render_basis<N: Number<Scalar = f64>>(value: &N) -> String {
    let leaves = value.leaves();
    let nonzero: Vec<(usize, f64)> = leaves
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, x)| x != 0.0)
        .collect();
    match nonzero.as_slice() {
        [] => "0".to_string(),
        [(k, x)] if x.abs() == 1.0 => {
            let sign = if *x < 0.0 { "-" } else { "" };
            if *k == 0 {
                format!("{sign}1")
            } else {
                format!("{sign}e{k}")
            }
        }
        _ => value.to_string(),
    }
}
